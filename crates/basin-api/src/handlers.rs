//! Axum request handlers.
//!
//! Thin adapters: extract, call the store or engine, convert errors.

use axum::{
    Json,
    extract::{Path, State},
};

use basin_core::entities::{Alert, Solution, Zone};
use basin_core::responses::ReportSubmitResponse;

use crate::dto::SubmitFeedbackRequest;
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/zones`
#[tracing::instrument(skip(state))]
pub async fn list_zones(State(state): State<AppState>) -> Json<Vec<Zone>> {
    Json(state.store().zones().await)
}

/// `GET /api/zones/{id}`
#[tracing::instrument(skip(state))]
pub async fn get_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> ApiResult<Json<Zone>> {
    let zone = state.store().zone(&zone_id).await?;
    Ok(Json(zone))
}

/// `GET /api/zones/{id}/alerts`
///
/// An unknown zone yields an empty list rather than a 404.
#[tracing::instrument(skip(state))]
pub async fn list_zone_alerts(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Json<Vec<Alert>> {
    Json(state.store().alerts_for_zone(&zone_id).await)
}

/// `GET /api/alerts`
#[tracing::instrument(skip(state))]
pub async fn list_alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.store().alerts().await)
}

/// `PATCH /api/alerts/{id}/resolve`
#[tracing::instrument(skip(state))]
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<i64>,
) -> ApiResult<Json<Alert>> {
    let alert = state.store().resolve_alert(alert_id).await?;
    Ok(Json(alert))
}

/// `POST /api/feedback`
///
/// Stores the report and its generated solution, returning both.
#[tracing::instrument(skip(state, request))]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> ApiResult<Json<ReportSubmitResponse>> {
    let response = basin_engine::submit_report(state.store(), request.into()).await?;
    Ok(Json(response))
}

/// `GET /api/reports/{id}/solution`
#[tracing::instrument(skip(state))]
pub async fn get_solution(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
) -> ApiResult<Json<Solution>> {
    let solution = state.store().solution_for_report(report_id).await?;
    Ok(Json(solution))
}
