//! # basin-api
//!
//! JSON HTTP API for Basin zone monitoring and feedback reports.
//!
//! ## Endpoints
//!
//! ### Zones
//! - `GET /api/zones` - List all zones
//! - `GET /api/zones/{id}` - Get one zone
//! - `GET /api/zones/{id}/alerts` - List unresolved alerts for a zone
//!
//! ### Alerts
//! - `GET /api/alerts` - List all unresolved alerts, newest first
//! - `PATCH /api/alerts/{id}/resolve` - Mark an alert resolved
//!
//! ### Feedback
//! - `POST /api/feedback` - Submit a report; responds with the stored report
//!   and its generated solution
//! - `GET /api/reports/{id}/solution` - Get the solution for a report

pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

use axum::{
    Router,
    routing::{get, patch, post},
};

pub use error::ApiError;
pub use state::AppState;

/// Create the API router with all endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use basin_api::{AppState, create_router};
/// use basin_store::MemStore;
/// use chrono::Utc;
///
/// let state = AppState::new(Arc::new(MemStore::seeded(Utc::now())));
/// let app = create_router(state);
/// // ... serve with axum
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Zone endpoints
        .route("/api/zones", get(handlers::list_zones))
        .route("/api/zones/:zone_id", get(handlers::get_zone))
        .route("/api/zones/:zone_id/alerts", get(handlers::list_zone_alerts))
        // Alert endpoints
        .route("/api/alerts", get(handlers::list_alerts))
        .route("/api/alerts/:alert_id/resolve", patch(handlers::resolve_alert))
        // Feedback endpoints
        .route("/api/feedback", post(handlers::submit_feedback))
        .route("/api/reports/:report_id/solution", get(handlers::get_solution))
        .with_state(state)
}
