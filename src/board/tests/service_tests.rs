//! Service orchestration tests for the board over the in-memory adapter.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{BoardTask, MoveRequest, TaskId, TaskPriority, TaskStatus},
    ports::BoardRepositoryError,
    services::{BoardService, BoardServiceError, CreateTaskRequest, TaskChanges},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = BoardService<InMemoryBoardRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    BoardService::new(Arc::new(InMemoryBoardRepository::new()), Arc::new(DefaultClock))
}

async fn seed_column(service: &TestService, status: TaskStatus, titles: &[&str]) -> Vec<TaskId> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        let task = service
            .create_task(CreateTaskRequest::new(*title).with_status(status))
            .await
            .expect("task creation should succeed");
        created.push(task.id());
    }
    created
}

fn column_orders(board: &[BoardTask], status: TaskStatus) -> Vec<(TaskId, u32)> {
    board
        .iter()
        .filter(|task| task.status() == status)
        .map(|task| (task.id(), task.order()))
        .collect()
}

fn assert_contiguous(board: &[BoardTask], status: TaskStatus) {
    let orders: Vec<u32> = column_orders(board, status)
        .iter()
        .map(|(_, order)| *order)
        .collect();
    let expected: Vec<u32> = (0u32..).take(orders.len()).collect();
    assert_eq!(orders, expected, "column {status} should be contiguous");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_appends_to_the_end_of_each_column(service: TestService) {
    seed_column(&service, TaskStatus::Todo, &["uno", "dos", "tres"]).await;
    seed_column(&service, TaskStatus::Done, &["hecho"]).await;

    let todo = service
        .column(TaskStatus::Todo)
        .await
        .expect("listing should succeed");
    let orders: Vec<u32> = todo.iter().map(BoardTask::order).collect();
    assert_eq!(orders, vec![0, 1, 2]);

    let done = service
        .column(TaskStatus::Done)
        .await
        .expect("listing should succeed");
    assert_eq!(done.len(), 1);
    assert_eq!(done.first().map(BoardTask::order), Some(0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_into_middle_shifts_later_siblings(service: TestService) {
    let todo = seed_column(&service, TaskStatus::Todo, &["a", "b", "c"]).await;
    let moved = seed_column(&service, TaskStatus::InProgress, &["x"]).await;

    let board = service
        .move_task(MoveRequest {
            task_id: moved[0],
            new_status: TaskStatus::Todo,
            new_order: 1,
        })
        .await
        .expect("move should succeed");

    let placements = column_orders(&board, TaskStatus::Todo);
    assert_eq!(
        placements,
        vec![
            (todo[0], 0),
            (moved[0], 1),
            (todo[1], 2),
            (todo[2], 3),
        ]
    );
    assert!(column_orders(&board, TaskStatus::InProgress).is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_to_current_position_changes_nothing(service: TestService) {
    let todo = seed_column(&service, TaskStatus::Todo, &["a", "b", "c"]).await;

    let board = service
        .move_task(MoveRequest {
            task_id: todo[1],
            new_status: TaskStatus::Todo,
            new_order: 1,
        })
        .await
        .expect("move should succeed");

    assert_eq!(
        column_orders(&board, TaskStatus::Todo),
        vec![(todo[0], 0), (todo[1], 1), (todo[2], 2)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn columns_stay_contiguous_across_a_move_sequence(service: TestService) {
    let todo = seed_column(&service, TaskStatus::Todo, &["a", "b", "c", "d"]).await;
    seed_column(&service, TaskStatus::InProgress, &["e", "f"]).await;

    service
        .move_task(MoveRequest {
            task_id: todo[3],
            new_status: TaskStatus::InProgress,
            new_order: 0,
        })
        .await
        .expect("first move should succeed");
    service
        .move_task(MoveRequest {
            task_id: todo[0],
            new_status: TaskStatus::Done,
            new_order: 0,
        })
        .await
        .expect("second move should succeed");
    let board = service
        .move_task(MoveRequest {
            task_id: todo[1],
            new_status: TaskStatus::Todo,
            new_order: 5,
        })
        .await
        .expect("third move should succeed");

    for status in TaskStatus::all() {
        assert_contiguous(&board, status);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_leaves_gap_and_next_move_repairs_it(service: TestService) {
    let todo = seed_column(&service, TaskStatus::Todo, &["a", "b", "c"]).await;

    service
        .delete_task(todo[1])
        .await
        .expect("delete should succeed");

    let column = service
        .column(TaskStatus::Todo)
        .await
        .expect("listing should succeed");
    let orders: Vec<u32> = column.iter().map(BoardTask::order).collect();
    assert_eq!(orders, vec![0, 2], "delete must not renumber siblings");

    let board = service
        .move_task(MoveRequest {
            task_id: todo[2],
            new_status: TaskStatus::Todo,
            new_order: 0,
        })
        .await
        .expect("move should succeed");
    assert_eq!(
        column_orders(&board, TaskStatus::Todo),
        vec![(todo[2], 0), (todo[0], 1)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_fields_but_not_placement(service: TestService) {
    let ids = seed_column(&service, TaskStatus::Todo, &["a", "b"]).await;

    let updated = service
        .update_task(
            ids[1],
            TaskChanges {
                title: Some("renombrada".to_owned()),
                priority: Some(TaskPriority::High),
                description: Some(Some("para la feria".to_owned())),
                ..TaskChanges::default()
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title().as_str(), "renombrada");
    assert_eq!(updated.priority(), TaskPriority::High);
    assert_eq!(updated.description(), Some("para la feria"));
    assert_eq!(updated.status(), TaskStatus::Todo);
    assert_eq!(updated.order(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_missing_tasks_report_not_found(service: TestService) {
    let ghost = TaskId::new();

    let result = service
        .move_task(MoveRequest {
            task_id: ghost,
            new_status: TaskStatus::Done,
            new_order: 0,
        })
        .await;

    assert!(matches!(
        result,
        Err(BoardServiceError::Repository(BoardRepositoryError::NotFound(id))) if id == ghost
    ));

    let delete_result = service.delete_task(ghost).await;
    assert!(matches!(
        delete_result,
        Err(BoardServiceError::Repository(BoardRepositoryError::NotFound(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_listing_is_sorted_by_status_then_order(service: TestService) {
    seed_column(&service, TaskStatus::Done, &["z"]).await;
    seed_column(&service, TaskStatus::Todo, &["a", "b"]).await;
    seed_column(&service, TaskStatus::InProgress, &["m"]).await;

    let board = service.board().await.expect("listing should succeed");
    let statuses: Vec<TaskStatus> = board.iter().map(BoardTask::status).collect();
    assert_eq!(
        statuses,
        vec![
            TaskStatus::Todo,
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Done,
        ]
    );
}
