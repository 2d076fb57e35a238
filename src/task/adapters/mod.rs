//! Adapter implementations for task storage ports.

pub mod memory;
