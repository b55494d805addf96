use clap::Subcommand;

/// Feedback report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Submit a report and generate its solution.
    Submit {
        /// Zone id, e.g. A1
        #[arg(long)]
        zone: String,
        /// Issue type (irrigation, pest, disease, soil, weather, equipment, other)
        #[arg(long)]
        issue: String,
        /// Criticality tier (low, medium, high)
        #[arg(long)]
        criticality: String,
        /// Free-text description of the issue
        #[arg(long)]
        description: String,
        /// Desired action (immediate_irrigation, pest_control, soil_treatment,
        /// equipment_repair, expert_consultation, ai_recommendation)
        #[arg(long)]
        action: String,
        /// Resolution timeline (immediate, today, week)
        #[arg(long)]
        urgency: String,
    },
    /// List reports, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Move a report through its status machine.
    Status {
        id: i64,
        /// New status (in_progress, resolved)
        #[arg(long)]
        status: String,
    },
}
