//! In-memory integration tests for sorting and filtering stored tasks.

use super::helpers::{TestService, seed_tasks, service};
use eyre::ensure;
use rstest::rstest;
use taskwright::task::{
    domain::{Priority, Task},
    services::{
        CompletionStatus, SortCriterion, TaskFilter, filter_tasks, sort_tasks, sort_tasks_by,
    },
};

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

#[rstest]
fn list_is_ordered_by_id(service: TestService) -> eyre::Result<()> {
    seed_tasks(&service)?;

    let listed = service.list_tasks()?;

    ensure!(
        titles(&listed)
            == [
                "Renew passport",
                "Buy birthday gift",
                "clean garage",
                "Pay rent",
                "Archive photos",
            ]
    );
    Ok(())
}

#[rstest]
#[case(
    "title",
    false,
    &["Archive photos", "Buy birthday gift", "clean garage", "Pay rent", "Renew passport"]
)]
#[case(
    "priority",
    true,
    &["Renew passport", "Pay rent", "Buy birthday gift", "Archive photos", "clean garage"]
)]
#[case(
    "due-date",
    false,
    &["Renew passport", "Buy birthday gift", "Pay rent", "clean garage", "Archive photos"]
)]
#[case(
    "due-date",
    true,
    &["clean garage", "Archive photos", "Pay rent", "Buy birthday gift", "Renew passport"]
)]
fn stored_tasks_sort_by_criterion(
    service: TestService,
    #[case] criterion: &str,
    #[case] descending: bool,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    seed_tasks(&service)?;

    let sorted = sort_tasks_by(service.list_tasks()?, criterion, descending)?;

    ensure!(titles(&sorted) == expected, "got {:?}", titles(&sorted));
    Ok(())
}

#[rstest]
fn filter_then_sort_pipeline(service: TestService) -> eyre::Result<()> {
    seed_tasks(&service)?;
    let garage = service
        .list_tasks()?
        .into_iter()
        .find(|task| task.title() == "clean garage")
        .ok_or_else(|| eyre::eyre!("seeded task missing"))?;
    service.toggle_complete(garage.id())?;

    let open_home = filter_tasks(
        &service.list_tasks()?,
        &TaskFilter::new()
            .with_tag("home")
            .with_status(CompletionStatus::Incomplete),
    );
    ensure!(titles(&open_home) == ["Pay rent"]);

    let high = filter_tasks(
        &service.list_tasks()?,
        &TaskFilter::new().with_priority(Priority::High),
    );
    let newest_first = sort_tasks(high, SortCriterion::Id, true);
    ensure!(titles(&newest_first) == ["Pay rent", "Renew passport"]);
    Ok(())
}

#[rstest]
fn keyword_search_covers_descriptions(service: TestService) -> eyre::Result<()> {
    seed_tasks(&service)?;

    let found = filter_tasks(
        &service.list_tasks()?,
        &TaskFilter::new().with_keyword("GAR"),
    );

    ensure!(titles(&found) == ["Buy birthday gift", "clean garage"]);
    Ok(())
}

#[rstest]
fn invalid_sort_token_is_a_validation_error(service: TestService) -> eyre::Result<()> {
    seed_tasks(&service)?;

    let result = sort_tasks_by(service.list_tasks()?, "urgency", false);

    ensure!(result.is_err());
    Ok(())
}
