use crate::cli::GlobalFlags;
use crate::cli::subcommands::SolutionCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bsn solution`.
pub async fn handle(
    action: &SolutionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SolutionCommands::Get { report_id } => {
            let solution = ctx.store.solution_for_report(*report_id).await?;
            output(&solution, flags.format)
        }
    }
}
