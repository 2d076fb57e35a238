//! Shared world state for recurring task BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use rstest::fixture;
use taskwright::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, FixedClock>;

/// Scenario world for recurrence behaviour tests.
pub struct RecurrenceWorld {
    pub service: TestTaskService,
    pub source_task: Option<Task>,
    pub follow_up: Option<Task>,
    pub last_error: Option<TaskServiceError>,
}

impl RecurrenceWorld {
    /// Creates a world whose service sees `clock` as the current time.
    #[must_use]
    pub fn with_clock(clock: FixedClock) -> Self {
        Self {
            service: TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(clock)),
            source_task: None,
            follow_up: None,
            last_error: None,
        }
    }
}

impl Default for RecurrenceWorld {
    fn default() -> Self {
        Self::with_clock(FixedClock::noon_on(date(2025, 12, 10)))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RecurrenceWorld {
    RecurrenceWorld::default()
}
