//! # basin-core
//!
//! Core types for Basin, the farm-irrigation monitoring toolbox.
//!
//! This crate provides the foundational types shared across all Basin crates:
//! - Entity structs for the monitoring domain (zones, alerts, reports, solutions)
//! - Status enums with state machine transitions
//! - The static field-map mockup model (nodes, weights, tile colors)
//! - Cross-cutting error types
//! - CLI/API response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod field;
pub mod responses;
