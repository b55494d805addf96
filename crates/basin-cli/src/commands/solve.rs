use basin_engine::finder::{Constraints, rank};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SolveArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `bsn solve`: rank candidate interventions for an issue.
pub fn handle(args: &SolveArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issue = parse_enum(&args.issue, "issue")?;
    let criticality = parse_enum(&args.criticality, "criticality")?;
    let urgency = parse_enum(&args.urgency, "urgency")?;
    let constraints = Constraints {
        max_cost: args.max_cost,
        max_time: args.max_time,
    };

    let path = rank(issue, criticality, urgency, constraints);
    output(&path, flags.format)
}
