mod list;
mod resolve;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AlertCommands;
use crate::context::AppContext;

/// Handle `bsn alert`.
pub async fn handle(
    action: &AlertCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AlertCommands::List { zone, limit } => {
            list::run(zone.as_deref(), *limit, ctx, flags).await
        }
        AlertCommands::Resolve { id } => resolve::run(*id, ctx, flags).await,
    }
}
