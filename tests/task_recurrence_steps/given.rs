//! Given steps for recurring task BDD scenarios.

use super::world::RecurrenceWorld;
use crate::test_helpers::FixedClock;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskwright::task::domain::{RecurrencePattern, TaskDraft, parse_due_date};

#[given(r#"today is "{today}""#)]
fn today_is(world: &mut RecurrenceWorld, today: String) -> Result<(), eyre::Report> {
    let day = parse_due_date(&today).wrap_err("parse scenario date")?;
    *world = RecurrenceWorld::with_clock(FixedClock::noon_on(day));
    Ok(())
}

fn add_recurring(
    world: &mut RecurrenceWorld,
    pattern: RecurrencePattern,
    title: String,
    due: &str,
    day: u8,
) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(title)
        .with_due_date(parse_due_date(due)?)
        .with_recurrence(pattern, Some(day));
    let created = world
        .service
        .add_task(draft)
        .wrap_err("add recurring task")?;
    world.source_task = Some(created);
    Ok(())
}

#[given(r#"a weekly task "{title}" due "{due}" repeating on day {day}"#)]
fn weekly_task(
    world: &mut RecurrenceWorld,
    title: String,
    due: String,
    day: u8,
) -> Result<(), eyre::Report> {
    add_recurring(world, RecurrencePattern::Weekly, title, &due, day)
}

#[given(r#"a monthly task "{title}" due "{due}" repeating on day {day}"#)]
fn monthly_task(
    world: &mut RecurrenceWorld,
    title: String,
    due: String,
    day: u8,
) -> Result<(), eyre::Report> {
    add_recurring(world, RecurrencePattern::Monthly, title, &due, day)
}
