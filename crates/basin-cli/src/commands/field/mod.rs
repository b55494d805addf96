//! Handlers for `bsn field`: the mobile mockup's two screens and its
//! placeholder optimization button, rendered as CLI surfaces.

mod map;
mod note;
mod optimize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FieldCommands;

/// Handle `bsn field`.
pub fn handle(action: &FieldCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FieldCommands::Map => map::run(flags),
        FieldCommands::Note {
            zone,
            condition,
            notes,
        } => note::run(zone, condition, notes.as_deref()),
        FieldCommands::Optimize => {
            optimize::run();
            Ok(())
        }
    }
}
