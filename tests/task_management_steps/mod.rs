//! Step definitions for task management scenarios.

pub mod world;

mod given;
