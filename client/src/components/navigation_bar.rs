//! Fixed header with logo, navigation links, status badges and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page's only mutable state: the mobile menu. The signal is local
//! to `NavigationBar`, handed to `MobilePanel`, and only driven through
//! `MenuState::apply`.

use leptos::prelude::*;

use crate::components::primitives::IconGlyph;
use crate::state::nav::{ACTIVE_BADGE, ACTIVE_BADGE_MOBILE, EMERGENCY_BADGE, MenuEvent, MenuState, NAV_ENTRIES};
use crate::util::style::{Icon, Tone};

/// Top navigation bar.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <div class="nav-bar__brand">
                    <div class="nav-bar__logo">
                        <IconGlyph icon=Icon::Shield/>
                    </div>
                    <div>
                        <h1 class="nav-bar__title">"DisasterAI"</h1>
                        <p class="nav-bar__subtitle">"Command Center"</p>
                    </div>
                </div>

                <div class="nav-bar__links">
                    {NAV_ENTRIES
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <a class="btn btn--ghost nav-bar__link" href=entry.href>
                                    <IconGlyph icon=entry.icon/>
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="nav-bar__status">
                    <StatusBadges active_label=ACTIVE_BADGE/>
                    // No handler yet; connecting to live telemetry is not wired.
                    <button class="btn btn--command btn--sm" type="button">
                        <IconGlyph icon=Icon::Radio/>
                        "Connect"
                    </button>
                </div>

                <button
                    class="btn btn--ghost nav-bar__toggle"
                    type="button"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| dispatch(menu, MenuEvent::Toggle)
                >
                    {move || {
                        let icon = menu.get().toggle_icon();
                        view! { <IconGlyph icon=icon/> }
                    }}
                </button>
            </div>

            <MobilePanel menu=menu/>
        </nav>
    }
}

/// Collapsible link list for narrow viewports. Rendered only while `menu`
/// is open; following a link closes it.
#[component]
pub fn MobilePanel(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <Show when=move || menu.get().is_open()>
            <div class="nav-bar__mobile">
                {NAV_ENTRIES
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <a
                                class="btn btn--ghost nav-bar__mobile-link"
                                href=entry.href
                                on:click=move |_| dispatch(menu, MenuEvent::SelectEntry)
                            >
                                <IconGlyph icon=entry.icon/>
                                {entry.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <div class="nav-bar__mobile-status">
                    <StatusBadges active_label=ACTIVE_BADGE_MOBILE/>
                    <button class="btn btn--command btn--sm btn--full" type="button">
                        <IconGlyph icon=Icon::Radio/>
                        "Connect to Command"
                    </button>
                </div>
            </div>
        </Show>
    }
}

fn dispatch(menu: RwSignal<MenuState>, event: MenuEvent) {
    menu.update(|state| {
        let next = state.apply(event);
        #[cfg(feature = "hydrate")]
        log::debug!("nav menu {state:?} -> {next:?} on {event:?}");
        *state = next;
    });
}

#[component]
fn StatusBadges(active_label: &'static str) -> impl IntoView {
    view! {
        <span class="badge badge--neutral">
            <span class=format!("status-dot {}", Tone::Affirmative.fill_class())></span>
            {active_label}
        </span>
        <span class="badge badge--alert badge--blink">
            <IconGlyph icon=Icon::AlertTriangle/>
            {EMERGENCY_BADGE}
        </span>
    }
}
