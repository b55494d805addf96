mod list;
mod status;
mod submit;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;

/// Handle `bsn report`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::Submit {
            zone,
            issue,
            criticality,
            description,
            action,
            urgency,
        } => {
            submit::run(
                zone,
                issue,
                criticality,
                description,
                action,
                urgency,
                ctx,
                flags,
            )
            .await
        }
        ReportCommands::List { limit } => list::run(*limit, ctx, flags).await,
        ReportCommands::Status { id, status } => status::run(*id, status, ctx, flags).await,
    }
}
