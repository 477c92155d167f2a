//! Drone fleet records and derived fleet summary.
//!
//! DESIGN
//! ======
//! Records are plain immutable values supplied by the composition root. The
//! summary is derived on render so a future live source only has to replace
//! the record list.

#[cfg(test)]
#[path = "fleet_test.rs"]
mod fleet_test;

use serde::{Deserialize, Serialize};

/// Operational status of a single drone.
///
/// Serialized as its lowercase label. Labels outside the known set, including
/// differently cased or padded ones, deserialize to `Unknown` rather than
/// failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DroneStatus {
    Active,
    Standby,
    Maintenance,
    Emergency,
    #[default]
    Unknown,
}

impl DroneStatus {
    /// Parse a status label; anything but an exact lowercase label becomes
    /// `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "active" => Self::Active,
            "standby" => Self::Standby,
            "maintenance" => Self::Maintenance,
            "emergency" => Self::Emergency,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Standby => "standby",
            Self::Maintenance => "maintenance",
            Self::Emergency => "emergency",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for DroneStatus {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<DroneStatus> for String {
    fn from(value: DroneStatus) -> Self {
        value.label().to_owned()
    }
}

/// Display attributes for one fleet unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneRecord {
    pub id: String,
    pub name: String,
    pub status: DroneStatus,
    /// Battery charge in percent, 0-100 by convention.
    pub battery: u8,
    pub location: String,
    /// Link quality in percent, 0-100 by convention.
    pub signal: u8,
    pub mission: String,
    /// Relative time label such as `2s ago`.
    pub last_update: String,
}

/// Aggregate counts shown in the fleet overview strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetSummary {
    pub active: usize,
    pub emergency: usize,
    pub standby: usize,
    pub maintenance: usize,
    /// Mean battery over all drones, rounded half-up. Zero for an empty fleet.
    pub average_battery: u8,
}

impl FleetSummary {
    pub fn from_records(drones: &[DroneRecord]) -> Self {
        let count = |status: DroneStatus| drones.iter().filter(|d| d.status == status).count();
        Self {
            active: count(DroneStatus::Active),
            emergency: count(DroneStatus::Emergency),
            standby: count(DroneStatus::Standby),
            maintenance: count(DroneStatus::Maintenance),
            average_battery: average_battery(drones),
        }
    }
}

/// Rounded mean battery level; an empty slice yields 0.
pub fn average_battery(drones: &[DroneRecord]) -> u8 {
    if drones.is_empty() {
        return 0;
    }
    let total: u64 = drones.iter().map(|d| u64::from(d.battery)).sum();
    let n = drones.len() as u64;
    // Half-up integer rounding: (2 * total + n) / (2 * n).
    let rounded = (2 * total + n) / (2 * n);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}

/// Label for the inert per-card action button.
pub fn drone_action_label(status: DroneStatus) -> &'static str {
    if status == DroneStatus::Emergency { "Emergency Response" } else { "View Details" }
}
