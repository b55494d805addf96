use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AlertCommands, FieldCommands, ReportCommands, SolutionCommands, ZoneCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// The static field map mockup.
    Field {
        #[command(subcommand)]
        action: FieldCommands,
    },
    /// Monitored zones.
    Zone {
        #[command(subcommand)]
        action: ZoneCommands,
    },
    /// Zone alerts.
    Alert {
        #[command(subcommand)]
        action: AlertCommands,
    },
    /// Feedback reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Generated solutions.
    Solution {
        #[command(subcommand)]
        action: SolutionCommands,
    },
    /// Rank candidate interventions for an issue.
    Solve(SolveArgs),
    /// Zone status counts and active alerts.
    Overview,
    /// Run the JSON HTTP API server.
    Serve(ServeArgs),
}

/// Arguments for `bsn solve`.
#[derive(Clone, Debug, Args)]
pub struct SolveArgs {
    /// Issue type (irrigation, pest, disease, soil, weather, equipment, other)
    #[arg(long)]
    pub issue: String,

    /// Criticality tier (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub criticality: String,

    /// Resolution timeline (immediate, today, week)
    #[arg(long, default_value = "today")]
    pub urgency: String,

    /// Only consider interventions at or below this cost, in cents
    #[arg(long)]
    pub max_cost: Option<i64>,

    /// Only consider interventions at or below this duration, in minutes
    #[arg(long)]
    pub max_time: Option<i64>,
}

/// Arguments for `bsn serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured bind port
    #[arg(long)]
    pub port: Option<u16>,
}
