//! AI insight records and the static analytics tiles shown beside them.
//!
//! The tiles are fixed presentation constants. They are deliberately not
//! computed from the insight list.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use serde::{Deserialize, Serialize};

use crate::util::style::Tone;

/// Priority attached to an insight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl Severity {
    /// Parse a severity label; matching is exact, so `High` or ` low` become
    /// `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }

    /// Badge text, e.g. `High Priority`.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
            Self::Unknown => "Unknown Priority",
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.label().to_owned()
    }
}

/// Display attributes for one AI-generated advisory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub id: u32,
    pub title: String,
    /// Model confidence in percent, 0-100 by convention.
    pub confidence: u8,
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Relative time label such as `2 minutes ago`.
    pub timestamp: String,
    pub source: String,
}

/// A single headline number with its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricTile {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

/// Tiles in the "AI System Status" block.
pub const AI_STATUS_TILES: [MetricTile; 3] = [
    MetricTile { value: "98.7%", label: "Model Accuracy", tone: Tone::Primary },
    MetricTile { value: "247ms", label: "Response Time", tone: Tone::Accent },
    MetricTile { value: "12.4k", label: "Data Points/sec", tone: Tone::Affirmative },
];

/// Tiles in the "Live Analytics Dashboard" strip.
pub const ANALYTICS_TILES: [MetricTile; 6] = [
    MetricTile { value: "127", label: "Threats Detected", tone: Tone::Primary },
    MetricTile { value: "94%", label: "Prediction Accuracy", tone: Tone::Affirmative },
    MetricTile { value: "3.2s", label: "Avg Response Time", tone: Tone::Accent },
    MetricTile { value: "42", label: "Active Alerts", tone: Tone::Warning },
    MetricTile { value: "8.1k", label: "Data Sources", tone: Tone::Neutral },
    MetricTile { value: "2", label: "Critical Zones", tone: Tone::Alert },
];
