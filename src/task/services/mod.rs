//! Application services for task orchestration, ordering, and filtering.

mod filter;
mod lifecycle;
mod sort;

pub use filter::{CompletionStatus, TaskFilter, filter_tasks};
pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use sort::{SortCriterion, sort_tasks, sort_tasks_by};
