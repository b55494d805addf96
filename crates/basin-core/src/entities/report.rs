use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Criticality, DesiredAction, IssueType, ReportStatus, Urgency};

/// A submitted field-issue report. Each report gets a generated [`Solution`]
/// at creation time.
///
/// [`Solution`]: crate::entities::Solution
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedbackReport {
    pub id: i64,
    pub zone_id: String,
    pub issue_type: IssueType,
    pub criticality: Criticality,
    pub description: String,
    pub desired_action: DesiredAction,
    pub urgency: Urgency,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}
