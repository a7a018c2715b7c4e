//! Column ordering behaviour across realistic board flows.

use super::helpers::board_service;
use atelier::board::domain::{BoardTask, MoveRequest, TaskStatus};
use atelier::board::services::CreateTaskRequest;

fn orders(board: &[BoardTask], status: TaskStatus) -> Vec<u32> {
    board
        .iter()
        .filter(|task| task.status() == status)
        .map(BoardTask::order)
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn dragging_tasks_between_columns_keeps_every_column_contiguous() {
    let service = board_service();

    let mut ids = Vec::new();
    for title in ["Diseñar muestras", "Llamar a Ana", "Pedir telas", "Enviar catálogo"] {
        let task = service
            .create_task(CreateTaskRequest::new(title))
            .await
            .expect("creation should succeed");
        ids.push(task.id());
    }

    // Simulate a drag-and-drop session: two cross-column drags and one
    // within-column reshuffle.
    service
        .move_task(MoveRequest {
            task_id: ids[2],
            new_status: TaskStatus::InProgress,
            new_order: 0,
        })
        .await
        .expect("move should succeed");
    service
        .move_task(MoveRequest {
            task_id: ids[0],
            new_status: TaskStatus::InProgress,
            new_order: 0,
        })
        .await
        .expect("move should succeed");
    let board = service
        .move_task(MoveRequest {
            task_id: ids[3],
            new_status: TaskStatus::Todo,
            new_order: 0,
        })
        .await
        .expect("move should succeed");

    assert_eq!(orders(&board, TaskStatus::Todo), vec![0, 1]);
    assert_eq!(orders(&board, TaskStatus::InProgress), vec![0, 1]);
    assert!(orders(&board, TaskStatus::Done).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn finishing_a_task_appends_it_to_done() {
    let service = board_service();

    let first = service
        .create_task(CreateTaskRequest::new("Coser dobladillos").with_status(TaskStatus::Done))
        .await
        .expect("creation should succeed");
    let second = service
        .create_task(CreateTaskRequest::new("Planchar pedidos"))
        .await
        .expect("creation should succeed");

    let board = service
        .move_task(MoveRequest {
            task_id: second.id(),
            new_status: TaskStatus::Done,
            new_order: 99,
        })
        .await
        .expect("move should succeed");

    let done: Vec<_> = board
        .iter()
        .filter(|task| task.status() == TaskStatus::Done)
        .collect();
    assert_eq!(done.len(), 2);
    assert_eq!(done.first().map(|task| task.id()), Some(first.id()));
    assert_eq!(done.last().map(|task| task.id()), Some(second.id()));
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_moves_cannot_corrupt_column_ordering() {
    let service = std::sync::Arc::new(board_service());

    let mut ids = Vec::new();
    for index in 0..6 {
        let task = service
            .create_task(CreateTaskRequest::new(format!("Tarea {index}")))
            .await
            .expect("creation should succeed");
        ids.push(task.id());
    }

    // Fire interleaving moves; each renumbering is atomic, so whatever
    // order they land in, the final board must hold the invariant.
    let mut handles = Vec::new();
    for (index, task_id) in ids.iter().copied().enumerate() {
        let service_clone = std::sync::Arc::clone(&service);
        let new_status = if index % 2 == 0 {
            TaskStatus::InProgress
        } else {
            TaskStatus::Todo
        };
        handles.push(tokio::spawn(async move {
            service_clone
                .move_task(MoveRequest {
                    task_id,
                    new_status,
                    new_order: 0,
                })
                .await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("task should not panic")
            .expect("move should succeed");
    }

    let board = service.board().await.expect("listing should succeed");
    for status in TaskStatus::all() {
        let column = orders(&board, status);
        let expected: Vec<u32> = (0u32..).take(column.len()).collect();
        assert_eq!(column, expected, "column {status} must stay contiguous");
    }
}
