use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Field { action } => commands::field::handle(&action, flags),
        Commands::Zone { action } => commands::zone::handle(&action, ctx, flags).await,
        Commands::Alert { action } => commands::alert::handle(&action, ctx, flags).await,
        Commands::Report { action } => commands::report::handle(&action, ctx, flags).await,
        Commands::Solution { action } => commands::solution::handle(&action, ctx, flags).await,
        Commands::Solve(args) => commands::solve::handle(&args, flags),
        Commands::Overview => commands::overview::handle(ctx, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
    }
}
