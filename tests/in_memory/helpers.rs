//! Shared fixtures for in-memory task service integration tests.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use rstest::fixture;
use taskwright::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, RecurrencePattern, Task, TaskDraft},
    services::TaskService,
};

/// Service type used by the in-memory integration tests.
pub type TestService = TaskService<InMemoryTaskRepository, FixedClock>;

/// Provides a clock pinned to Wednesday 2025-12-10 at noon.
#[fixture]
pub fn clock() -> FixedClock {
    FixedClock::noon_on(date(2025, 12, 10))
}

/// Provides a fresh service over an empty in-memory repository.
#[fixture]
pub fn service(clock: FixedClock) -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(clock))
}

/// Seeds a small, varied task list and returns the stored tasks.
///
/// # Errors
///
/// Returns an error if any task fails validation.
pub fn seed_tasks(service: &TestService) -> Result<Vec<Task>, eyre::Report> {
    let drafts = [
        TaskDraft::new("Renew passport")
            .with_priority(Priority::High)
            .with_tags(["admin"])
            .with_due_date(date(2025, 12, 5)),
        TaskDraft::new("Buy birthday gift")
            .with_description("Something for the garden")
            .with_priority(Priority::Medium)
            .with_tags(["family", "shopping"])
            .with_due_date(date(2025, 12, 10)),
        TaskDraft::new("clean garage").with_tags(["home"]),
        TaskDraft::new("Pay rent")
            .with_priority(Priority::High)
            .with_tags(["home", "finance"])
            .with_due_date(date(2025, 12, 31))
            .with_recurrence(RecurrencePattern::Monthly, Some(31)),
        TaskDraft::new("Archive photos").with_priority(Priority::Low),
    ];

    drafts
        .into_iter()
        .map(|draft| service.add_task(draft).map_err(eyre::Report::from))
        .collect()
}
