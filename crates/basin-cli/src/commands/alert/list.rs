use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    zone: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let mut alerts = match zone {
        Some(zone_id) => ctx.store.alerts_for_zone(zone_id).await,
        None => ctx.store.alerts().await,
    };
    alerts.truncate(usize::try_from(limit)?);

    output(&alerts, flags.format)
}
