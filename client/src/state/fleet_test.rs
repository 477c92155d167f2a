use super::*;
use crate::state::feed::seed_drones;

fn drone(id: &str, status: DroneStatus, battery: u8) -> DroneRecord {
    DroneRecord {
        id: id.to_owned(),
        name: format!("Drone {id}"),
        status,
        battery,
        location: "Grid Z-1".to_owned(),
        signal: 50,
        mission: "Test".to_owned(),
        last_update: "now".to_owned(),
    }
}

// =============================================================
// DroneStatus
// =============================================================

#[test]
fn from_label_recognizes_known_statuses() {
    assert_eq!(DroneStatus::from_label("active"), DroneStatus::Active);
    assert_eq!(DroneStatus::from_label("standby"), DroneStatus::Standby);
    assert_eq!(DroneStatus::from_label("maintenance"), DroneStatus::Maintenance);
    assert_eq!(DroneStatus::from_label("emergency"), DroneStatus::Emergency);
}

#[test]
fn from_label_matches_exact_lowercase_only() {
    assert_eq!(DroneStatus::from_label("Active"), DroneStatus::Unknown);
    assert_eq!(DroneStatus::from_label(" active "), DroneStatus::Unknown);
    assert_eq!(DroneStatus::from_label("EMERGENCY"), DroneStatus::Unknown);
}

#[test]
fn status_deserializes_miscased_label_as_unknown() {
    let status: DroneStatus = serde_json::from_str("\"EMERGENCY\"").unwrap();
    assert_eq!(status, DroneStatus::Unknown);
}

#[test]
fn from_label_falls_back_to_unknown() {
    assert_eq!(DroneStatus::from_label("crashed"), DroneStatus::Unknown);
    assert_eq!(DroneStatus::from_label(""), DroneStatus::Unknown);
}

#[test]
fn status_deserializes_unknown_label_without_error() {
    let status: DroneStatus = serde_json::from_str("\"returning\"").unwrap();
    assert_eq!(status, DroneStatus::Unknown);
}

#[test]
fn status_serializes_as_lowercase_label() {
    assert_eq!(serde_json::to_string(&DroneStatus::Maintenance).unwrap(), "\"maintenance\"");
}

#[test]
fn drone_record_parses_from_json() {
    let raw = r#"{
        "id": "DRN-100",
        "name": "Echo Relay",
        "status": "standby",
        "battery": 64,
        "location": "Grid D-2",
        "signal": 81,
        "mission": "Relay",
        "last_update": "4s ago"
    }"#;
    let record: DroneRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, "DRN-100");
    assert_eq!(record.status, DroneStatus::Standby);
    assert_eq!(record.battery, 64);
    assert_eq!(record.signal, 81);
}

// =============================================================
// FleetSummary
// =============================================================

#[test]
fn seeded_fleet_summary_matches_fixture() {
    let summary = FleetSummary::from_records(&seed_drones());
    assert_eq!(summary.active, 2);
    assert_eq!(summary.emergency, 1);
    assert_eq!(summary.standby, 1);
    assert_eq!(summary.maintenance, 0);
    assert_eq!(summary.average_battery, 74);
}

#[test]
fn empty_fleet_summary_is_all_zero() {
    assert_eq!(FleetSummary::from_records(&[]), FleetSummary::default());
    assert_eq!(average_battery(&[]), 0);
}

#[test]
fn average_battery_rounds_half_up() {
    let drones = [drone("a", DroneStatus::Active, 50), drone("b", DroneStatus::Active, 51)];
    assert_eq!(average_battery(&drones), 51);

    let drones = [drone("a", DroneStatus::Active, 10), drone("b", DroneStatus::Active, 11), drone("c", DroneStatus::Active, 11)];
    assert_eq!(average_battery(&drones), 11);
}

#[test]
fn average_battery_handles_extremes() {
    let drones = [drone("a", DroneStatus::Active, 100), drone("b", DroneStatus::Standby, 100)];
    assert_eq!(average_battery(&drones), 100);

    let drones = [drone("a", DroneStatus::Active, 0)];
    assert_eq!(average_battery(&drones), 0);
}

#[test]
fn unknown_status_is_not_counted_in_any_bucket() {
    let drones = [drone("a", DroneStatus::Unknown, 40), drone("b", DroneStatus::Maintenance, 60)];
    let summary = FleetSummary::from_records(&drones);
    assert_eq!(summary.active + summary.emergency + summary.standby, 0);
    assert_eq!(summary.maintenance, 1);
    assert_eq!(summary.average_battery, 50);
}

#[test]
fn drone_action_label_only_escalates_emergencies() {
    assert_eq!(drone_action_label(DroneStatus::Emergency), "Emergency Response");
    for status in [DroneStatus::Active, DroneStatus::Standby, DroneStatus::Maintenance, DroneStatus::Unknown] {
        assert_eq!(drone_action_label(status), "View Details");
    }
}
