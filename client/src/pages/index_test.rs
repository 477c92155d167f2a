use super::*;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::navigation_bar::MobilePanel;
use crate::state::feed::{seed_drones, seed_insights};
use crate::state::nav::{MenuEvent, MenuState};

fn render<V: IntoView>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| build().into_view().to_html())
}

// =============================================================
// NavigationBar
// =============================================================

#[test]
fn navigation_bar_starts_without_mobile_panel() {
    let html = render(|| view! { <NavigationBar/> });
    assert!(!html.contains("nav-bar__mobile"), "closed menu must not render the mobile panel");
    assert_eq!(html.matches("nav-bar__link\"").count(), 5);
}

#[test]
fn navigation_bar_renders_anchor_targets_in_order() {
    let html = render(|| view! { <NavigationBar/> });
    let positions: Vec<usize> = ["#dashboard", "#fleet", "#insights", "#map", "#settings"]
        .iter()
        .map(|href| html.find(href).unwrap_or_else(|| panic!("missing {href}")))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn mobile_panel_opens_on_toggle_and_closes_on_select() {
    let owner = Owner::new();
    owner.with(|| {
        let menu = RwSignal::new(MenuState::Closed.apply(MenuEvent::Toggle));
        let html = view! { <MobilePanel menu=menu/> }.into_view().to_html();
        assert!(html.contains("nav-bar__mobile\""), "open menu must render the mobile panel");
        assert_eq!(html.matches("nav-bar__mobile-link").count(), 5);
        assert!(html.contains("Connect to Command"));

        menu.update(|state| *state = state.apply(MenuEvent::SelectEntry));
        let html = view! { <MobilePanel menu=menu/> }.into_view().to_html();
        assert!(!html.contains("nav-bar__mobile"), "selecting an entry must remove the panel");
    });
}

// =============================================================
// HeroSection
// =============================================================

#[test]
fn hero_section_uses_css_backdrop_without_image() {
    let html = render(|| view! { <HeroSection/> });
    assert!(html.contains("hero__backdrop"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("/assets/"));
    assert_eq!(html.matches("hero__feature\"").count(), 3);
}

// =============================================================
// FleetStatusBoard
// =============================================================

#[test]
fn fleet_board_renders_one_card_per_drone() {
    let html = render(|| view! { <FleetStatusBoard drones=seed_drones()/> });
    assert_eq!(html.matches("drone-card__id").count(), 4);
    assert!(html.contains("Alpha Surveyor"));
    assert!(html.contains("74%"));
    // Action button on the emergency drone plus the overview caption.
    assert_eq!(html.matches("Emergency Response").count(), 2);
}

#[test]
fn fleet_board_keeps_list_order() {
    let html = render(|| view! { <FleetStatusBoard drones=seed_drones()/> });
    let first = html.find("DRN-001").unwrap();
    let last = html.find("DRN-004").unwrap();
    assert!(first < last);
}

#[test]
fn empty_fleet_renders_no_cards_and_zero_average() {
    let html = render(|| view! { <FleetStatusBoard drones=Vec::new()/> });
    assert_eq!(html.matches("drone-card__id").count(), 0);
    assert!(html.contains("Avg Battery"));
    assert!(html.contains("0%"));
    assert!(!html.contains("NaN"));
}

// =============================================================
// InsightsPanel
// =============================================================

#[test]
fn insights_panel_renders_cards_and_static_tiles() {
    let html = render(|| view! { <InsightsPanel insights=seed_insights()/> });
    assert_eq!(html.matches("insight-card__title").count(), 3);
    assert!(html.contains("High Priority"));
    assert!(html.contains("Critical Zones"));
}

#[test]
fn empty_insights_keep_static_tiles() {
    let html = render(|| view! { <InsightsPanel insights=Vec::new()/> });
    assert_eq!(html.matches("insight-card__title").count(), 0);
    assert!(html.contains("Threats Detected"));
    assert!(html.contains("98.7%"));
}

// =============================================================
// IndexPage
// =============================================================

#[test]
fn index_page_composes_sections_in_fixed_order() {
    let html = render(|| view! { <IndexPage feed=DashboardFeed::seeded()/> });
    let nav = html.find("nav-bar").unwrap();
    let hero = html.find("id=\"dashboard\"").unwrap();
    let fleet = html.find("id=\"fleet\"").unwrap();
    let insights = html.find("id=\"insights\"").unwrap();
    assert!(nav < hero && hero < fleet && fleet < insights);
}
