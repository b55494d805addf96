mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ZoneCommands;
use crate::context::AppContext;

/// Handle `bsn zone`.
pub async fn handle(
    action: &ZoneCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ZoneCommands::List => list::run(ctx, flags).await,
        ZoneCommands::Get { id } => get::run(id, ctx, flags).await,
    }
}
