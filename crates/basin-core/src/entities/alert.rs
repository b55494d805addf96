use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Criticality, IssueType};

/// An active condition raised against a zone.
///
/// Resolved alerts stay in the store but are excluded from listings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Alert {
    pub id: i64,
    pub zone_id: String,
    pub kind: IssueType,
    pub criticality: Criticality,
    pub title: String,
    pub description: String,
    pub emoji: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}
