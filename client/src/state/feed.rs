//! Record lists injected into the dashboard at the composition root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds a [`DashboardFeed`] and hands it to the index page. Boards
//! only ever see the lists they are given, so replacing the seeded fixture
//! with a real source does not touch rendering code.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::state::fleet::{DroneRecord, DroneStatus};
use crate::state::insights::{InsightRecord, Severity};

/// Drone and insight lists rendered by the index page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardFeed {
    pub drones: Vec<DroneRecord>,
    pub insights: Vec<InsightRecord>,
}

impl DashboardFeed {
    pub fn new(drones: Vec<DroneRecord>, insights: Vec<InsightRecord>) -> Self {
        Self { drones, insights }
    }

    /// Fixed demo data shown when no other source is wired in.
    pub fn seeded() -> Self {
        Self::new(seed_drones(), seed_insights())
    }

    #[must_use]
    pub fn with_drones(mut self, drones: Vec<DroneRecord>) -> Self {
        self.drones = drones;
        self
    }

    #[must_use]
    pub fn with_insights(mut self, insights: Vec<InsightRecord>) -> Self {
        self.insights = insights;
        self
    }
}

#[allow(clippy::too_many_arguments)]
fn drone(
    id: &str,
    name: &str,
    status: DroneStatus,
    battery: u8,
    location: &str,
    signal: u8,
    mission: &str,
    last_update: &str,
) -> DroneRecord {
    DroneRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        status,
        battery,
        location: location.to_owned(),
        signal,
        mission: mission.to_owned(),
        last_update: last_update.to_owned(),
    }
}

pub fn seed_drones() -> Vec<DroneRecord> {
    vec![
        drone("DRN-001", "Alpha Surveyor", DroneStatus::Active, 87, "Grid A-7", 95, "Flood Assessment", "2s ago"),
        drone("DRN-002", "Beta Rescue", DroneStatus::Emergency, 45, "Grid C-3", 78, "Search & Rescue", "1s ago"),
        drone("DRN-003", "Gamma Scout", DroneStatus::Standby, 92, "Base Station", 100, "Ready", "5m ago"),
        drone("DRN-004", "Delta Monitor", DroneStatus::Active, 71, "Grid B-5", 88, "Perimeter Watch", "3s ago"),
    ]
}

pub fn seed_insights() -> Vec<InsightRecord> {
    vec![
        InsightRecord {
            id: 1,
            title: "Flood Risk Assessment".to_owned(),
            confidence: 94,
            severity: Severity::High,
            description: "Rising water levels detected in sectors A-7 and B-3. Immediate evacuation recommended."
                .to_owned(),
            recommendations: vec![
                "Deploy additional rescue drones to affected areas".to_owned(),
                "Establish emergency shelters in zones C-1 and D-4".to_owned(),
                "Activate flood barriers in downstream sectors".to_owned(),
            ],
            timestamp: "2 minutes ago".to_owned(),
            source: "Satellite + Drone Analysis".to_owned(),
        },
        InsightRecord {
            id: 2,
            title: "Optimal Search Pattern".to_owned(),
            confidence: 87,
            severity: Severity::Medium,
            description:
                "AI suggests modified search grid for missing persons in Grid C-3 based on terrain analysis."
                    .to_owned(),
            recommendations: vec![
                "Redirect Alpha and Beta teams to northwestern quadrant".to_owned(),
                "Focus thermal imaging on dense vegetation areas".to_owned(),
                "Coordinate with ground teams for synchronized sweep".to_owned(),
            ],
            timestamp: "5 minutes ago".to_owned(),
            source: "ML Terrain Analysis".to_owned(),
        },
        InsightRecord {
            id: 3,
            title: "Resource Allocation".to_owned(),
            confidence: 91,
            severity: Severity::Low,
            description:
                "Current drone distribution is 15% suboptimal. Rebalancing recommended for improved coverage."
                    .to_owned(),
            recommendations: vec![
                "Move Delta Monitor from B-5 to E-2".to_owned(),
                "Deploy Gamma Scout to perimeter surveillance".to_owned(),
                "Rotate high-battery units to active zones".to_owned(),
            ],
            timestamp: "8 minutes ago".to_owned(),
            source: "Fleet Optimization AI".to_owned(),
        },
    ]
}
