use clap::Subcommand;

/// Field map mockup commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FieldCommands {
    /// Render the 16-tile field grid.
    Map,
    /// File a throwaway field note (validated, confirmed, discarded).
    Note {
        /// Node id, Z1 through Z16
        #[arg(long)]
        zone: String,
        /// Condition (dry, pest, overwatered, healthy)
        #[arg(long)]
        condition: String,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Trigger the optimization placeholder.
    Optimize,
}
