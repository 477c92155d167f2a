//! Visual mapping tables: status/severity to tone and icon, meter colors.
//!
//! Every table is an exhaustive `match` with an explicit `Unknown` arm that
//! resolves to the neutral style, so malformed data degrades visually instead
//! of failing.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::state::fleet::DroneStatus;
use crate::state::insights::Severity;

/// Battery below this percentage renders in the alert tone.
pub const BATTERY_ALERT_BELOW: u8 = 20;
/// Battery below this percentage (and not alerting) renders in the warning tone.
pub const BATTERY_WARNING_BELOW: u8 = 50;

/// Semantic color family, rendered through `tone-*` CSS classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Affirmative,
    Warning,
    Alert,
    Neutral,
    Muted,
    Primary,
    Accent,
}

impl Tone {
    pub fn name(self) -> &'static str {
        match self {
            Self::Affirmative => "affirmative",
            Self::Warning => "warning",
            Self::Alert => "alert",
            Self::Neutral => "neutral",
            Self::Muted => "muted",
            Self::Primary => "primary",
            Self::Accent => "accent",
        }
    }

    pub fn text_class(self) -> String {
        format!("tone-text--{}", self.name())
    }

    pub fn fill_class(self) -> String {
        format!("tone-fill--{}", self.name())
    }

    pub fn badge_class(self) -> String {
        format!("badge badge--{}", self.name())
    }
}

/// Icon set used across the dashboard, rendered as text glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Shield,
    Plane,
    Brain,
    Map,
    Settings,
    Menu,
    Close,
    AlertTriangle,
    AlertCircle,
    CheckCircle,
    Clock,
    Zap,
    Activity,
    TrendingUp,
    Target,
    Eye,
    Radio,
    Battery,
    Signal,
    MapPin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Shield => "🛡",
            Self::Plane => "✈",
            Self::Brain => "🧠",
            Self::Map => "🗺",
            Self::Settings => "⚙",
            Self::Menu => "☰",
            Self::Close => "✕",
            Self::AlertTriangle => "⚠",
            Self::AlertCircle => "❗",
            Self::CheckCircle => "✔",
            Self::Clock => "⏱",
            Self::Zap => "⚡",
            Self::Activity => "〰",
            Self::TrendingUp => "↗",
            Self::Target => "◎",
            Self::Eye => "👁",
            Self::Radio => "📡",
            Self::Battery => "🔋",
            Self::Signal => "📶",
            Self::MapPin => "📍",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Shield => "shield",
            Self::Plane => "plane",
            Self::Brain => "brain",
            Self::Map => "map",
            Self::Settings => "settings",
            Self::Menu => "menu",
            Self::Close => "close",
            Self::AlertTriangle => "alert-triangle",
            Self::AlertCircle => "alert-circle",
            Self::CheckCircle => "check-circle",
            Self::Clock => "clock",
            Self::Zap => "zap",
            Self::Activity => "activity",
            Self::TrendingUp => "trending-up",
            Self::Target => "target",
            Self::Eye => "eye",
            Self::Radio => "radio",
            Self::Battery => "battery",
            Self::Signal => "signal",
            Self::MapPin => "map-pin",
        }
    }
}

/// Resolved look for a status or severity badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualStyle {
    pub tone: Tone,
    pub icon: Icon,
    /// Adds the blinking affordance used for emergencies.
    pub blink: bool,
}

impl VisualStyle {
    const fn new(tone: Tone, icon: Icon) -> Self {
        Self { tone, icon, blink: false }
    }

    /// Badge class list including the blink modifier when set.
    pub fn badge_class(self) -> String {
        if self.blink {
            format!("{} badge--blink", self.tone.badge_class())
        } else {
            self.tone.badge_class()
        }
    }
}

pub fn status_style(status: DroneStatus) -> VisualStyle {
    match status {
        DroneStatus::Active => VisualStyle::new(Tone::Affirmative, Icon::CheckCircle),
        DroneStatus::Emergency => VisualStyle { blink: true, ..VisualStyle::new(Tone::Alert, Icon::AlertTriangle) },
        DroneStatus::Standby => VisualStyle::new(Tone::Neutral, Icon::Clock),
        DroneStatus::Maintenance => VisualStyle::new(Tone::Warning, Icon::Zap),
        DroneStatus::Unknown => VisualStyle::new(Tone::Muted, Icon::Plane),
    }
}

pub fn severity_style(severity: Severity) -> VisualStyle {
    match severity {
        Severity::High => VisualStyle::new(Tone::Alert, Icon::AlertCircle),
        Severity::Medium => VisualStyle::new(Tone::Warning, Icon::Activity),
        Severity::Low => VisualStyle::new(Tone::Affirmative, Icon::TrendingUp),
        Severity::Unknown => VisualStyle::new(Tone::Neutral, Icon::Brain),
    }
}

/// Fill tone for the battery meter.
pub fn battery_tone(percent: u8) -> Tone {
    if percent < BATTERY_ALERT_BELOW {
        Tone::Alert
    } else if percent < BATTERY_WARNING_BELOW {
        Tone::Warning
    } else {
        Tone::Affirmative
    }
}

/// Tone for the battery percentage text; only a near-empty battery is highlighted.
pub fn battery_text_tone(percent: u8) -> Option<Tone> {
    (percent < BATTERY_ALERT_BELOW).then_some(Tone::Alert)
}

/// Inline width for a linear meter fill. Values are passed through unclamped.
pub fn meter_width(percent: u8) -> String {
    format!("width: {percent}%")
}
