//! `PostgreSQL` repository implementation for client storage.

use super::{
    models::{ClientRow, NewClientRow},
    schema::clients,
};
use crate::directory::{
    domain::{Client, ClientId, PersistedClientData},
    ports::{ClientRepository, ClientRepositoryError, ClientRepositoryResult},
};
use crate::lead::domain::InquiryId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed client repository.
#[derive(Debug, Clone)]
pub struct PostgresClientRepository {
    pool: DirectoryPgPool,
}

impl PostgresClientRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ClientRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ClientRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ClientRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ClientRepositoryError::persistence)?
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn insert(&self, client: &Client) -> ClientRepositoryResult<()> {
        let client_id = client.id();
        let source_inquiry = client.source_inquiry();
        let new_row = to_new_row(client);

        self.run_blocking(move |connection| {
            diesel::insert_into(clients::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_source_inquiry_unique_violation(info.as_ref()) =>
                    {
                        source_inquiry.map_or_else(
                            || ClientRepositoryError::DuplicateClient(client_id),
                            ClientRepositoryError::DuplicateSourceInquiry,
                        )
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ClientRepositoryError::DuplicateClient(client_id)
                    }
                    _ => ClientRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, client: &Client) -> ClientRepositoryResult<()> {
        let client_id = client.id();
        let row = to_new_row(client);

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(clients::table.filter(clients::id.eq(client_id.into_inner())))
                    .set((
                        clients::name.eq(row.name),
                        clients::email.eq(row.email),
                        clients::phone.eq(row.phone),
                        clients::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(ClientRepositoryError::persistence)?;
            if affected == 0 {
                return Err(ClientRepositoryError::NotFound(client_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ClientId) -> ClientRepositoryResult<Option<Client>> {
        self.run_blocking(move |connection| {
            let row = clients::table
                .filter(clients::id.eq(id.into_inner()))
                .select(ClientRow::as_select())
                .first::<ClientRow>(connection)
                .optional()
                .map_err(ClientRepositoryError::persistence)?;
            Ok(row.map(row_to_client))
        })
        .await
    }

    async fn find_by_source_inquiry(
        &self,
        inquiry_id: InquiryId,
    ) -> ClientRepositoryResult<Option<Client>> {
        self.run_blocking(move |connection| {
            let row = clients::table
                .filter(clients::source_inquiry_id.eq(inquiry_id.into_inner()))
                .select(ClientRow::as_select())
                .first::<ClientRow>(connection)
                .optional()
                .map_err(ClientRepositoryError::persistence)?;
            Ok(row.map(row_to_client))
        })
        .await
    }

    async fn list(&self) -> ClientRepositoryResult<Vec<Client>> {
        self.run_blocking(move |connection| {
            let rows = clients::table
                .order(clients::name.asc())
                .select(ClientRow::as_select())
                .load::<ClientRow>(connection)
                .map_err(ClientRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_client).collect())
        })
        .await
    }
}

fn is_source_inquiry_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_clients_source_inquiry_unique")
}

fn to_new_row(client: &Client) -> NewClientRow {
    NewClientRow {
        id: client.id().into_inner(),
        name: client.name().to_owned(),
        email: client.email().to_owned(),
        phone: client.phone().map(ToOwned::to_owned),
        source_inquiry_id: client.source_inquiry().map(InquiryId::into_inner),
        created_at: client.created_at(),
        updated_at: client.updated_at(),
    }
}

fn row_to_client(row: ClientRow) -> Client {
    Client::from_persisted(PersistedClientData {
        id: ClientId::from_uuid(row.id),
        name: row.name,
        email: row.email,
        phone: row.phone,
        source_inquiry: row.source_inquiry_id.map(InquiryId::from_uuid),
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
