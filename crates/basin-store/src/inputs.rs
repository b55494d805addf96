//! Insert and update payloads accepted by [`MemStore`].
//!
//! Ids, timestamps, and initial statuses are assigned by the store, so the
//! payloads carry only caller-provided fields.
//!
//! [`MemStore`]: crate::MemStore

use basin_core::enums::{Criticality, DesiredAction, IssueType, Urgency, ZoneStatus};

/// Payload for [`MemStore::create_alert`](crate::MemStore::create_alert).
#[derive(Debug, Clone)]
pub struct NewAlert {
    pub zone_id: String,
    pub kind: IssueType,
    pub criticality: Criticality,
    pub title: String,
    pub description: String,
    pub emoji: String,
}

/// Payload for [`MemStore::create_report`](crate::MemStore::create_report).
#[derive(Debug, Clone)]
pub struct NewReport {
    pub zone_id: String,
    pub issue_type: IssueType,
    pub criticality: Criticality,
    pub description: String,
    pub desired_action: DesiredAction,
    pub urgency: Urgency,
}

/// Payload for [`MemStore::create_solution`](crate::MemStore::create_solution).
#[derive(Debug, Clone)]
pub struct NewSolution {
    pub report_id: i64,
    pub steps: Vec<String>,
    pub resources: basin_core::entities::ResourceEstimate,
    pub alternatives: Vec<String>,
    pub estimated_cost: i64,
    pub estimated_time: i64,
}

/// Partial zone update. `None` fields are left untouched; any update
/// refreshes the zone's `last_updated` timestamp.
#[derive(Debug, Clone, Default)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub status: Option<ZoneStatus>,
    pub soil_moisture: Option<i64>,
    pub temperature: Option<i64>,
    pub humidity: Option<i64>,
}
