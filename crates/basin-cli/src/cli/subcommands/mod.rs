mod alert;
mod field;
mod report;
mod solution;
mod zone;

pub use alert::AlertCommands;
pub use field::FieldCommands;
pub use report::ReportCommands;
pub use solution::SolutionCommands;
pub use zone::ZoneCommands;
