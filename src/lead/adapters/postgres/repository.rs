//! `PostgreSQL` repository implementation for inquiry storage.

use super::{
    models::{InquiryRow, NewInquiryRow},
    schema::inquiries,
};
use crate::lead::{
    domain::{Inquiry, InquiryId, LeadPriority, LeadStatus, PersistedInquiryData},
    ports::{InquiryRepository, InquiryRepositoryError, InquiryRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by lead adapters.
pub type LeadPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed inquiry repository.
#[derive(Debug, Clone)]
pub struct PostgresInquiryRepository {
    pool: LeadPgPool,
}

impl PostgresInquiryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: LeadPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> InquiryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> InquiryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(InquiryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(InquiryRepositoryError::persistence)?
    }
}

#[async_trait]
impl InquiryRepository for PostgresInquiryRepository {
    async fn insert(&self, inquiry: &Inquiry) -> InquiryRepositoryResult<()> {
        let inquiry_id = inquiry.id();
        let new_row = to_new_row(inquiry)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(inquiries::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        InquiryRepositoryError::DuplicateInquiry(inquiry_id)
                    }
                    _ => InquiryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, inquiry: &Inquiry) -> InquiryRepositoryResult<()> {
        let inquiry_id = inquiry.id();
        let row = to_new_row(inquiry)?;

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(inquiries::table.filter(inquiries::id.eq(inquiry_id.into_inner())))
                    .set((
                        inquiries::name.eq(row.name),
                        inquiries::email.eq(row.email),
                        inquiries::phone.eq(row.phone),
                        inquiries::message.eq(row.message),
                        inquiries::status.eq(row.status),
                        inquiries::priority.eq(row.priority),
                        inquiries::product_lines.eq(row.product_lines),
                        inquiries::follow_ups.eq(row.follow_ups),
                        inquiries::last_contact_at.eq(row.last_contact_at),
                        inquiries::next_follow_up_at.eq(row.next_follow_up_at),
                        inquiries::converted_to_client.eq(row.converted_to_client),
                        inquiries::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(InquiryRepositoryError::persistence)?;
            if affected == 0 {
                return Err(InquiryRepositoryError::NotFound(inquiry_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: InquiryId) -> InquiryRepositoryResult<Option<Inquiry>> {
        self.run_blocking(move |connection| {
            let row = inquiries::table
                .filter(inquiries::id.eq(id.into_inner()))
                .select(InquiryRow::as_select())
                .first::<InquiryRow>(connection)
                .optional()
                .map_err(InquiryRepositoryError::persistence)?;
            row.map(row_to_inquiry).transpose()
        })
        .await
    }

    async fn list(&self) -> InquiryRepositoryResult<Vec<Inquiry>> {
        self.run_blocking(move |connection| {
            let rows = inquiries::table
                .order(inquiries::created_at.desc())
                .select(InquiryRow::as_select())
                .load::<InquiryRow>(connection)
                .map_err(InquiryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_inquiry).collect()
        })
        .await
    }

    async fn list_by_status(&self, status: LeadStatus) -> InquiryRepositoryResult<Vec<Inquiry>> {
        self.run_blocking(move |connection| {
            let rows = inquiries::table
                .filter(inquiries::status.eq(status.as_str()))
                .order(inquiries::created_at.desc())
                .select(InquiryRow::as_select())
                .load::<InquiryRow>(connection)
                .map_err(InquiryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_inquiry).collect()
        })
        .await
    }
}

fn to_new_row(inquiry: &Inquiry) -> InquiryRepositoryResult<NewInquiryRow> {
    let tags = serde_json::to_value(inquiry.tags()).map_err(InquiryRepositoryError::persistence)?;
    let product_lines = serde_json::to_value(inquiry.product_lines())
        .map_err(InquiryRepositoryError::persistence)?;
    let follow_ups =
        serde_json::to_value(inquiry.follow_ups()).map_err(InquiryRepositoryError::persistence)?;

    Ok(NewInquiryRow {
        id: inquiry.id().into_inner(),
        name: inquiry.name().to_owned(),
        email: inquiry.email().to_owned(),
        phone: inquiry.phone().map(ToOwned::to_owned),
        message: inquiry.message().map(ToOwned::to_owned),
        status: inquiry.status().as_str().to_owned(),
        priority: inquiry.priority().as_str().to_owned(),
        tags,
        product_lines,
        follow_ups,
        last_contact_at: inquiry.last_contact_at(),
        next_follow_up_at: inquiry.next_follow_up_at(),
        converted_to_client: inquiry.is_converted_to_client(),
        created_at: inquiry.created_at(),
        updated_at: inquiry.updated_at(),
    })
}

fn row_to_inquiry(row: InquiryRow) -> InquiryRepositoryResult<Inquiry> {
    let status =
        LeadStatus::try_from(row.status.as_str()).map_err(InquiryRepositoryError::persistence)?;
    let priority = LeadPriority::try_from(row.priority.as_str())
        .map_err(InquiryRepositoryError::persistence)?;
    let tags = serde_json::from_value(row.tags).map_err(InquiryRepositoryError::persistence)?;
    let product_lines = serde_json::from_value(row.product_lines)
        .map_err(InquiryRepositoryError::persistence)?;
    let follow_ups =
        serde_json::from_value(row.follow_ups).map_err(InquiryRepositoryError::persistence)?;

    let data = PersistedInquiryData {
        id: InquiryId::from_uuid(row.id),
        name: row.name,
        email: row.email,
        phone: row.phone,
        message: row.message,
        status,
        priority,
        tags,
        product_lines,
        follow_ups,
        last_contact_at: row.last_contact_at,
        next_follow_up_at: row.next_follow_up_at,
        converted_to_client: row.converted_to_client,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Inquiry::from_persisted(data))
}
