//! Domain-focused tests for board task values and mutation.

use crate::board::domain::{
    BoardDomainError, BoardTask, NewBoardTask, TaskPriority, TaskStatus, TaskTitle,
};
use crate::test_support::ManualClock;
use chrono::Duration;
use rstest::rstest;
use std::collections::BTreeSet;

fn new_task(title: &str, clock: &ManualClock) -> BoardTask {
    BoardTask::new(
        NewBoardTask {
            title: TaskTitle::new(title).expect("valid title"),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            description: None,
            due_date: None,
            assigned_to: None,
            client_id: None,
            inquiry_id: None,
            tags: BTreeSet::new(),
        },
        clock,
    )
}

#[rstest]
#[case("Pedir muestras", "Pedir muestras")]
#[case("  padded  ", "padded")]
fn task_title_trims_and_accepts_non_empty(#[case] raw: &str, #[case] expected: &str) {
    let title = TaskTitle::new(raw).expect("valid title");
    assert_eq!(title.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(BoardDomainError::EmptyTitle));
}

#[rstest]
#[case(TaskStatus::Todo, "todo")]
#[case(TaskStatus::InProgress, "in_progress")]
#[case(TaskStatus::Done, "done")]
fn task_status_round_trips_through_storage_string(
    #[case] status: TaskStatus,
    #[case] stored: &str,
) {
    assert_eq!(status.as_str(), stored);
    assert_eq!(TaskStatus::try_from(stored), Ok(status));
}

#[rstest]
fn task_status_parsing_rejects_unknown_values() {
    assert!(TaskStatus::try_from("archived").is_err());
}

#[rstest]
#[case(TaskPriority::Low, "low")]
#[case(TaskPriority::Medium, "medium")]
#[case(TaskPriority::High, "high")]
#[case(TaskPriority::Urgent, "urgent")]
fn task_priority_round_trips_through_storage_string(
    #[case] priority: TaskPriority,
    #[case] stored: &str,
) {
    assert_eq!(priority.as_str(), stored);
    assert_eq!(TaskPriority::try_from(stored), Ok(priority));
}

#[rstest]
fn new_task_starts_at_provisional_order_zero() {
    let clock = ManualClock::fixed();
    let task = new_task("Llamar al proveedor", &clock);

    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.order(), 0);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn field_mutations_advance_updated_at() {
    let clock = ManualClock::fixed();
    let mut task = new_task("Preparar catálogo", &clock);
    let created = task.created_at();

    clock.advance(Duration::minutes(5));
    task.set_priority(TaskPriority::Urgent, &clock);

    assert_eq!(task.priority(), TaskPriority::Urgent);
    assert_eq!(task.created_at(), created);
    assert_eq!(task.updated_at(), created + Duration::minutes(5));
}

#[rstest]
fn rename_replaces_title_without_touching_placement() {
    let clock = ManualClock::fixed();
    let mut task = new_task("Borrador", &clock);

    task.rename(TaskTitle::new("Definitivo").expect("valid title"), &clock);

    assert_eq!(task.title().as_str(), "Definitivo");
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.order(), 0);
}
