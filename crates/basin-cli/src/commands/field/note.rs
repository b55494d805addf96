use basin_core::enums::FieldCondition;
use basin_core::errors::CoreError;
use basin_core::field;

use crate::commands::shared::parse::parse_enum;

/// Confirmation line printed on a successful submission.
pub const CONFIRMATION: &str = "Feedback Submitted";

/// Handle `bsn field note`.
///
/// Validates the selections against the fixed choice sets, confirms, and
/// discards everything; the note is written nowhere and is not retrievable
/// afterward.
pub fn run(zone: &str, condition: &str, _notes: Option<&str>) -> anyhow::Result<()> {
    validate(zone, condition)?;
    println!("{CONFIRMATION}");
    Ok(())
}

/// Check the node id against the 16 fixed ids and parse the condition.
pub fn validate(zone: &str, condition: &str) -> anyhow::Result<FieldCondition> {
    if !field::is_node_id(zone) {
        return Err(CoreError::Validation(format!(
            "invalid zone '{zone}': expected Z1 through Z16"
        ))
        .into());
    }
    parse_enum(condition, "condition")
}
