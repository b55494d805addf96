use basin_store::inputs::NewReport;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    zone: &str,
    issue: &str,
    criticality: &str,
    description: &str,
    action: &str,
    urgency: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let new = NewReport {
        zone_id: zone.to_string(),
        issue_type: parse_enum(issue, "issue")?,
        criticality: parse_enum(criticality, "criticality")?,
        description: description.to_string(),
        desired_action: parse_enum(action, "action")?,
        urgency: parse_enum(urgency, "urgency")?,
    };

    let response = basin_engine::submit_report(&ctx.store, new).await?;
    output(&response, flags.format)
}
