//! # basin-engine
//!
//! Intervention planning for Basin.
//!
//! Two planning paths exist:
//! - [`catalog`]: the fixed plan matrix keyed by issue type and criticality,
//!   used to generate the solution attached to every submitted report.
//! - [`finder`]: the weighted candidate ranker ("Dijkstra-inspired" in name
//!   only): filter candidate interventions by constraints, score them, and
//!   return the winner with the runners-up as alternatives. No graph is
//!   involved.
//!
//! [`service::submit_report`] orchestrates the report pipeline: validate,
//! create the report, generate its solution from the catalog, store both.

pub mod catalog;
pub mod error;
pub mod finder;
pub mod service;

pub use error::EngineError;
pub use finder::{Constraints, SolutionPath};
pub use service::submit_report;
