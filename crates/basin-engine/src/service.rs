//! Report submission pipeline: validate, store the report, generate and
//! store its solution, return both.

use basin_core::responses::ReportSubmitResponse;
use basin_store::MemStore;
use basin_store::inputs::NewReport;

use crate::catalog;
use crate::error::EngineError;

/// Submit a feedback report and generate its solution.
///
/// Validation: the zone must exist in the store and the description must not
/// be blank. On success the report (status `pending`) and its generated
/// solution are both stored and returned together.
///
/// # Errors
///
/// Returns `EngineError::UnknownZone` or `EngineError::EmptyField` on
/// validation failure.
pub async fn submit_report(
    store: &MemStore,
    new: NewReport,
) -> Result<ReportSubmitResponse, EngineError> {
    if new.description.trim().is_empty() {
        return Err(EngineError::EmptyField {
            field: "description",
        });
    }
    if store.zone(&new.zone_id).await.is_err() {
        return Err(EngineError::UnknownZone(new.zone_id));
    }

    let report = store.create_report(new).await;
    let solution = store.create_solution(catalog::generate(&report)).await;
    tracing::info!(
        report_id = report.id,
        solution_id = solution.id,
        zone_id = %report.zone_id,
        "submitted feedback report"
    );

    Ok(ReportSubmitResponse { report, solution })
}
