//! Step definitions for recurring task scenarios.

pub mod world;

mod given;
mod then;
