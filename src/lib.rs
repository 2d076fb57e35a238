//! Taskwright: personal task tracking core.
//!
//! This crate provides the domain model and derived-state computations for a
//! personal task tracker: field validation, due-date status, recurrence date
//! arithmetic, multi-criteria sorting, and keyword and attribute filtering.
//! Command-line parsing and rendering live outside this crate and consume it
//! through [`task::services::TaskService`].
//!
//! # Architecture
//!
//! Taskwright follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use taskwright::task::{
//!     adapters::memory::InMemoryTaskRepository,
//!     domain::{Priority, TaskDraft},
//!     services::TaskService,
//! };
//!
//! let service = TaskService::new(
//!     Arc::new(InMemoryTaskRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//! let task = service
//!     .add_task(TaskDraft::new("Water the plants").with_priority(Priority::High))
//!     .expect("valid task");
//! assert_eq!(task.id().value(), 1);
//! ```

pub mod task;
