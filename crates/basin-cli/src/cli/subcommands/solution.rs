use clap::Subcommand;

/// Solution commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SolutionCommands {
    /// Get the solution generated for a report.
    Get { report_id: i64 },
}
