//! Task tracking for taskwright.
//!
//! Users create, inspect, update, complete, and delete tasks carrying an
//! optional priority, tags, due date and time, and a recurrence rule. The
//! module follows hexagonal architecture:
//!
//! - Domain types, validation, due-status derivation, and recurrence
//!   arithmetic in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration, sorting, and filtering in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
