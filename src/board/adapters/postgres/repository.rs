//! `PostgreSQL` repository implementation for board task storage.
//!
//! Every ordering mutation runs inside a single database transaction with
//! the affected rows locked, so concurrent moves serialise instead of
//! interleaving their renumberings.

use super::{
    models::{BoardTaskRow, NewBoardTaskRow},
    schema::board_tasks,
};
use crate::board::{
    domain::{
        BoardTask, MoveRequest, PersistedBoardTaskData, TaskId, TaskPriority, TaskStatus,
        TaskTitle, plan_move,
    },
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::directory::domain::ClientId;
use crate::lead::domain::InquiryId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn append(&self, task: &BoardTask) -> BoardRepositoryResult<BoardTask> {
        let task_id = task.id();
        let status = task.status();
        let template = task.clone();

        self.run_blocking(move |connection| {
            connection.transaction::<_, BoardRepositoryError, _>(|tx_conn| {
                let occupied: i64 = board_tasks::table
                    .filter(board_tasks::status.eq(status.as_str()))
                    .count()
                    .get_result(tx_conn)?;
                let position =
                    i32::try_from(occupied).map_err(BoardRepositoryError::persistence)?;

                let mut stored = template.clone();
                stored.place_at(
                    status,
                    u32::try_from(position).map_err(BoardRepositoryError::persistence)?,
                );

                let new_row = to_new_row(&stored)?;
                diesel::insert_into(board_tasks::table)
                    .values(&new_row)
                    .execute(tx_conn)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            BoardRepositoryError::DuplicateTask(task_id)
                        }
                        _ => BoardRepositoryError::persistence(err),
                    })?;
                Ok(stored)
            })
        })
        .await
    }

    async fn update(&self, task: &BoardTask) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let tags =
            serde_json::to_value(task.tags()).map_err(BoardRepositoryError::persistence)?;
        let title = task.title().as_str().to_owned();
        let priority = task.priority().as_str().to_owned();
        let description = task.description().map(ToOwned::to_owned);
        let due_date = task.due_date();
        let assigned_to = task.assigned_to().map(ToOwned::to_owned);
        let client_id = task.client_id().map(ClientId::into_inner);
        let inquiry_id = task.inquiry_id().map(InquiryId::into_inner);
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            // Placement columns are deliberately absent from the change set;
            // they belong to append and move_task.
            let affected = diesel::update(
                board_tasks::table.filter(board_tasks::id.eq(task_id.into_inner())),
            )
            .set((
                board_tasks::title.eq(title),
                board_tasks::priority.eq(priority),
                board_tasks::description.eq(description),
                board_tasks::due_date.eq(due_date),
                board_tasks::assigned_to.eq(assigned_to),
                board_tasks::client_id.eq(client_id),
                board_tasks::inquiry_id.eq(inquiry_id),
                board_tasks::tags.eq(tags),
                board_tasks::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(BoardRepositoryError::persistence)?;

            if affected == 0 {
                return Err(BoardRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<BoardTask>> {
        self.run_blocking(move |connection| {
            let row = board_tasks::table
                .filter(board_tasks::id.eq(id.into_inner()))
                .select(BoardTaskRow::as_select())
                .first::<BoardTaskRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> BoardRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected =
                diesel::delete(board_tasks::table.filter(board_tasks::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(BoardRepositoryError::persistence)?;
            if affected == 0 {
                return Err(BoardRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list_by_status(&self, status: TaskStatus) -> BoardRepositoryResult<Vec<BoardTask>> {
        self.run_blocking(move |connection| {
            let rows = board_tasks::table
                .filter(board_tasks::status.eq(status.as_str()))
                .order(board_tasks::position.asc())
                .select(BoardTaskRow::as_select())
                .load::<BoardTaskRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<BoardTask>> {
        self.run_blocking(move |connection| load_sorted_board(connection))
            .await
    }

    async fn move_task(&self, request: MoveRequest) -> BoardRepositoryResult<Vec<BoardTask>> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, BoardRepositoryError, _>(|tx_conn| {
                let current: Option<String> = board_tasks::table
                    .filter(board_tasks::id.eq(request.task_id.into_inner()))
                    .select(board_tasks::status)
                    .first::<String>(tx_conn)
                    .optional()?;
                let current_status = current
                    .ok_or(BoardRepositoryError::NotFound(request.task_id))
                    .and_then(|value| {
                        TaskStatus::try_from(value.as_str())
                            .map_err(BoardRepositoryError::persistence)
                    })?;

                let source = locked_column_sequence(tx_conn, current_status)?;
                let target = locked_column_sequence(tx_conn, request.new_status)?;
                let plan = plan_move(request, current_status, &source, &target)?;

                for assignment in plan {
                    let position = i32::try_from(assignment.order)
                        .map_err(BoardRepositoryError::persistence)?;
                    diesel::update(
                        board_tasks::table
                            .filter(board_tasks::id.eq(assignment.task_id.into_inner())),
                    )
                    .set((
                        board_tasks::status.eq(assignment.status.as_str()),
                        board_tasks::position.eq(position),
                    ))
                    .execute(tx_conn)?;
                }

                load_sorted_board(tx_conn)
            })
        })
        .await
    }
}

/// Loads one column's task identifiers sorted by position, locking the rows
/// for the remainder of the surrounding transaction.
fn locked_column_sequence(
    connection: &mut PgConnection,
    status: TaskStatus,
) -> BoardRepositoryResult<Vec<TaskId>> {
    let ids = board_tasks::table
        .filter(board_tasks::status.eq(status.as_str()))
        .order(board_tasks::position.asc())
        .select(board_tasks::id)
        .for_update()
        .load::<uuid::Uuid>(connection)?;
    Ok(ids.into_iter().map(TaskId::from_uuid).collect())
}

fn load_sorted_board(connection: &mut PgConnection) -> BoardRepositoryResult<Vec<BoardTask>> {
    let rows = board_tasks::table
        .order((board_tasks::status.asc(), board_tasks::position.asc()))
        .select(BoardTaskRow::as_select())
        .load::<BoardTaskRow>(connection)
        .map_err(BoardRepositoryError::persistence)?;
    rows.into_iter().map(row_to_task).collect()
}

fn to_new_row(task: &BoardTask) -> BoardRepositoryResult<NewBoardTaskRow> {
    let tags = serde_json::to_value(task.tags()).map_err(BoardRepositoryError::persistence)?;
    let position = i32::try_from(task.order()).map_err(BoardRepositoryError::persistence)?;

    Ok(NewBoardTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        position,
        priority: task.priority().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        due_date: task.due_date(),
        assigned_to: task.assigned_to().map(ToOwned::to_owned),
        client_id: task.client_id().map(ClientId::into_inner),
        inquiry_id: task.inquiry_id().map(InquiryId::into_inner),
        tags,
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

fn row_to_task(row: BoardTaskRow) -> BoardRepositoryResult<BoardTask> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(BoardRepositoryError::persistence)?;
    let priority =
        TaskPriority::try_from(row.priority.as_str()).map_err(BoardRepositoryError::persistence)?;
    let title = TaskTitle::new(row.title).map_err(BoardRepositoryError::persistence)?;
    let order = u32::try_from(row.position).map_err(BoardRepositoryError::persistence)?;
    let tags: BTreeSet<String> =
        serde_json::from_value(row.tags).map_err(BoardRepositoryError::persistence)?;

    let data = PersistedBoardTaskData {
        id: TaskId::from_uuid(row.id),
        title,
        status,
        order,
        priority,
        description: row.description,
        due_date: row.due_date,
        assigned_to: row.assigned_to,
        client_id: row.client_id.map(ClientId::from_uuid),
        inquiry_id: row.inquiry_id.map(InquiryId::from_uuid),
        tags,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(BoardTask::from_persisted(data))
}
