use super::*;

// =============================================================
// MenuState transitions
// =============================================================

#[test]
fn menu_starts_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_from_closed_opens() {
    let state = MenuState::Closed.apply(MenuEvent::Toggle);
    assert_eq!(state, MenuState::Open);
    assert!(state.is_open());
}

#[test]
fn toggle_from_open_closes() {
    assert_eq!(MenuState::Open.apply(MenuEvent::Toggle), MenuState::Closed);
}

#[test]
fn select_entry_while_open_closes_in_one_step() {
    let opened = MenuState::default().apply(MenuEvent::Toggle);
    let after = opened.apply(MenuEvent::SelectEntry);
    assert_eq!(after, MenuState::Closed);
    assert!(!after.is_open());
}

#[test]
fn select_entry_while_closed_stays_closed() {
    assert_eq!(MenuState::Closed.apply(MenuEvent::SelectEntry), MenuState::Closed);
}

#[test]
fn double_toggle_returns_to_start() {
    let state = MenuState::Closed.apply(MenuEvent::Toggle).apply(MenuEvent::Toggle);
    assert_eq!(state, MenuState::Closed);
}

#[test]
fn toggle_icon_tracks_state() {
    assert_eq!(MenuState::Closed.toggle_icon(), Icon::Menu);
    assert_eq!(MenuState::Open.toggle_icon(), Icon::Close);
}

// =============================================================
// Entries
// =============================================================

#[test]
fn nav_entries_keep_declared_order_and_anchors() {
    let hrefs: Vec<&str> = NAV_ENTRIES.iter().map(|e| e.href).collect();
    assert_eq!(hrefs, vec!["#dashboard", "#fleet", "#insights", "#map", "#settings"]);
    assert_eq!(NAV_ENTRIES[0].label, "Dashboard");
    assert_eq!(NAV_ENTRIES[4].label, "Settings");
}

#[test]
fn nav_entry_icons_are_distinct() {
    for (i, a) in NAV_ENTRIES.iter().enumerate() {
        for (j, b) in NAV_ENTRIES.iter().enumerate() {
            if i != j {
                assert_ne!(a.icon, b.icon);
            }
        }
    }
}
