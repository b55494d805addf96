//! Entity structs for the Basin monitoring domain.
//!
//! Zones carry the seeded sensor snapshot; alerts, feedback reports, and
//! solutions are created at runtime and live only in the in-memory store.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod alert;
mod report;
mod solution;
mod zone;

pub use alert::Alert;
pub use report::FeedbackReport;
pub use solution::{ResourceEstimate, Solution};
pub use zone::Zone;
