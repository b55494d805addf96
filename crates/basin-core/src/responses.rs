//! Response types returned as JSON by `bsn` commands and the HTTP API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Alert, FeedbackReport, Solution};

/// Response from `bsn report submit` and `POST /api/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportSubmitResponse {
    pub report: FeedbackReport,
    pub solution: Solution,
}

/// Response from `bsn overview`: the dashboard stat row plus active alerts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverviewResponse {
    pub healthy: i64,
    pub warning: i64,
    pub critical: i64,
    pub active_alerts: Vec<Alert>,
}
