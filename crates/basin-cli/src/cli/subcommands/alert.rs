use clap::Subcommand;

/// Alert commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AlertCommands {
    /// List unresolved alerts, newest first.
    List {
        /// Only alerts for this zone
        #[arg(long)]
        zone: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark an alert resolved.
    Resolve { id: i64 },
}
