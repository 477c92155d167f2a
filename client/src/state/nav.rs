//! Navigation entries and the mobile menu state machine.
//!
//! DESIGN
//! ======
//! The menu is the only mutable state on the page. It is modeled as two
//! states with two named transitions so the behavior can be exercised without
//! a DOM.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::style::Icon;

/// Open/closed condition of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that drive [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger/close button was pressed.
    Toggle,
    /// A mobile navigation entry was chosen.
    SelectEntry,
}

impl MenuState {
    /// Next state after `event`.
    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::Toggle) | (_, MenuEvent::SelectEntry) => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Glyph for the toggle button: close while open, menu while closed.
    pub fn toggle_icon(self) -> Icon {
        match self {
            Self::Open => Icon::Close,
            Self::Closed => Icon::Menu,
        }
    }
}

/// One link in the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry { label: "Dashboard", icon: Icon::Shield, href: "#dashboard" },
    NavEntry { label: "Fleet Status", icon: Icon::Plane, href: "#fleet" },
    NavEntry { label: "AI Insights", icon: Icon::Brain, href: "#insights" },
    NavEntry { label: "Live Map", icon: Icon::Map, href: "#map" },
    NavEntry { label: "Settings", icon: Icon::Settings, href: "#settings" },
];

// Header badges are static copy, independent of the fleet board.
pub const ACTIVE_BADGE: &str = "4 Active";
pub const ACTIVE_BADGE_MOBILE: &str = "4 Active Drones";
pub const EMERGENCY_BADGE: &str = "1 Emergency";
