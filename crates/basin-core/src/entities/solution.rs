use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Human-readable resource requirements attached to a solution.
///
/// Water and energy only apply to irrigation issues; other issue types carry
/// the literal string `"N/A"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResourceEstimate {
    pub water: String,
    pub time: String,
    pub cost: String,
    pub energy: String,
}

/// A generated remediation plan for one feedback report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Solution {
    pub id: i64,
    pub report_id: i64,
    pub steps: Vec<String>,
    pub resources: ResourceEstimate,
    pub alternatives: Vec<String>,
    /// Cents.
    pub estimated_cost: i64,
    /// Minutes.
    pub estimated_time: i64,
    pub created_at: DateTime<Utc>,
}
