//! Then steps for recurring task BDD scenarios.

use super::world::RecurrenceWorld;
use rstest_bdd_macros::then;
use taskwright::task::{
    domain::{Task, TaskDomainError, parse_due_date},
    services::TaskServiceError,
};

fn follow_up(world: &RecurrenceWorld) -> Result<&Task, eyre::Report> {
    world
        .follow_up
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing follow-up task"))
}

#[then(r#"the follow-up task is due "{due}""#)]
fn follow_up_is_due(world: &RecurrenceWorld, due: String) -> Result<(), eyre::Report> {
    let expected = parse_due_date(&due)?;
    let task = follow_up(world)?;

    if task.due_date() != Some(expected) {
        return Err(eyre::eyre!(
            "expected follow-up due {expected}, found {}",
            task.display_due()
        ));
    }
    Ok(())
}

#[then(r#"the follow-up task keeps the title "{title}""#)]
fn follow_up_keeps_title(world: &RecurrenceWorld, title: String) -> Result<(), eyre::Report> {
    let task = follow_up(world)?;
    if task.title() != title {
        return Err(eyre::eyre!("expected title {title}, found {}", task.title()));
    }
    Ok(())
}

#[then("the task is rejected because recurrence needs a due date")]
fn rejected_without_due_date(world: &RecurrenceWorld) -> Result<(), eyre::Report> {
    match world.last_error {
        Some(TaskServiceError::Validation(TaskDomainError::RecurrenceRequiresDueDate)) => Ok(()),
        ref other => Err(eyre::eyre!("expected missing due date error, got {other:?}")),
    }
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &RecurrenceWorld) -> Result<(), eyre::Report> {
    let count = world.service.count_tasks()?;
    if count != 0 {
        return Err(eyre::eyre!("expected no stored tasks, found {count}"));
    }
    Ok(())
}
