//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use eyre::WrapErr;
use rstest::fixture;
use taskwright::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::TaskService,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, FixedClock>;

/// Scenario world for task management behaviour tests.
pub struct TaskManagementWorld {
    pub clock: FixedClock,
    pub service: TestTaskService,
    pub last_added: Option<Task>,
}

impl TaskManagementWorld {
    /// Creates a world with an empty repository and the given clock.
    #[must_use]
    pub fn with_clock(clock: FixedClock) -> Self {
        Self {
            clock,
            service: TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(clock)),
            last_added: None,
        }
    }

    /// Loads a stored task by its raw id.
    pub fn stored(&self, raw_id: u64) -> Result<Task, eyre::Report> {
        let id = TaskId::new(raw_id).wrap_err("scenario task id")?;
        self.service.get_task(id).wrap_err("load stored task")
    }
}

impl Default for TaskManagementWorld {
    fn default() -> Self {
        Self::with_clock(FixedClock::noon_on(date(2025, 12, 10)))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskManagementWorld {
    TaskManagementWorld::default()
}
