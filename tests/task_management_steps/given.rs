//! Given steps for task management BDD scenarios.

use super::world::TaskManagementWorld;
use crate::test_helpers::FixedClock;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskwright::task::domain::{Priority, TaskDraft, parse_due_date};

fn add(world: &mut TaskManagementWorld, draft: TaskDraft) -> Result<(), eyre::Report> {
    let created = world.service.add_task(draft).wrap_err("add scenario task")?;
    world.last_added = Some(created);
    Ok(())
}

#[given(r#"the current day is "{today}""#)]
fn current_day(world: &mut TaskManagementWorld, today: String) -> Result<(), eyre::Report> {
    let day = parse_due_date(&today).wrap_err("parse scenario date")?;
    *world = TaskManagementWorld::with_clock(FixedClock::noon_on(day));
    Ok(())
}

#[given(r#"a task titled "{title}" has been added"#)]
fn task_added(world: &mut TaskManagementWorld, title: String) -> Result<(), eyre::Report> {
    add(world, TaskDraft::new(title))
}

#[given(r#"a task with priority "{priority}" titled "{title}" has been added"#)]
fn prioritised_task_added(
    world: &mut TaskManagementWorld,
    priority: String,
    title: String,
) -> Result<(), eyre::Report> {
    let level = Priority::try_from(priority.as_str())?;
    add(world, TaskDraft::new(title).with_priority(level))
}

#[given(r#"a task due "{due}" titled "{title}" has been added"#)]
fn dated_task_added(
    world: &mut TaskManagementWorld,
    due: String,
    title: String,
) -> Result<(), eyre::Report> {
    let date = parse_due_date(&due)?;
    add(world, TaskDraft::new(title).with_due_date(date))
}
