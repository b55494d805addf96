use clap::Subcommand;

/// Zone commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ZoneCommands {
    /// List all zones.
    List,
    /// Get a zone by id.
    Get { id: String },
}
