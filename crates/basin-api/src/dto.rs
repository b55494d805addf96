//! Request payloads accepted by the API.
//!
//! Responses reuse the entity and response types from basin-core directly.

use serde::Deserialize;

use basin_core::enums::{Criticality, DesiredAction, IssueType, Urgency};
use basin_store::inputs::NewReport;

/// Body of `POST /api/feedback`.
///
/// Enum fields reject unknown values at deserialization time; the zone id
/// and description are validated by the submit pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub zone_id: String,
    pub issue_type: IssueType,
    pub criticality: Criticality,
    pub description: String,
    pub desired_action: DesiredAction,
    pub urgency: Urgency,
}

impl From<SubmitFeedbackRequest> for NewReport {
    fn from(req: SubmitFeedbackRequest) -> Self {
        Self {
            zone_id: req.zone_id,
            issue_type: req.issue_type,
            criticality: req.criticality,
            description: req.description,
            desired_action: req.desired_action,
            urgency: req.urgency,
        }
    }
}
