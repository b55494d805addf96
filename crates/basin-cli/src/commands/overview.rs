use basin_core::enums::ZoneStatus;
use basin_core::responses::OverviewResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bsn overview`: the dashboard stat row plus active alerts.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let zones = ctx.store.zones().await;
    let count = |status: ZoneStatus| -> i64 {
        zones
            .iter()
            .filter(|z| z.status == status)
            .count()
            .try_into()
            .unwrap_or(i64::MAX)
    };

    let response = OverviewResponse {
        healthy: count(ZoneStatus::Healthy),
        warning: count(ZoneStatus::Warning),
        critical: count(ZoneStatus::Critical),
        active_alerts: ctx.store.alerts().await,
    };
    output(&response, flags.format)
}
