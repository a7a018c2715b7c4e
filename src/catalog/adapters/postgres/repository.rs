//! `PostgreSQL` repository implementation for product storage.

use super::{
    models::{NewProductRow, ProductRow},
    schema::products,
};
use crate::catalog::{
    domain::{PersistedProductData, Product, ProductId, ProductName},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by catalog adapters.
pub type CatalogPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed product repository.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: CatalogPgPool,
}

impl PostgresProductRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CatalogPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProductRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProductRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProductRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProductRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: &Product) -> ProductRepositoryResult<()> {
        let product_id = product.id();
        let name = product.name().clone();
        let new_row = to_new_row(product);

        self.run_blocking(move |connection| {
            diesel::insert_into(products::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_name_unique_violation(info.as_ref()) =>
                    {
                        ProductRepositoryError::DuplicateName(name.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProductRepositoryError::DuplicateProduct(product_id)
                    }
                    _ => ProductRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, product: &Product) -> ProductRepositoryResult<()> {
        let product_id = product.id();
        let row = to_new_row(product);

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(products::table.filter(products::id.eq(product_id.into_inner())))
                    .set((
                        products::name.eq(row.name),
                        products::description.eq(row.description),
                        products::unit_price_cents.eq(row.unit_price_cents),
                        products::active.eq(row.active),
                        products::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(ProductRepositoryError::persistence)?;
            if affected == 0 {
                return Err(ProductRepositoryError::NotFound(product_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>> {
        self.run_blocking(move |connection| {
            let row = products::table
                .filter(products::id.eq(id.into_inner()))
                .select(ProductRow::as_select())
                .first::<ProductRow>(connection)
                .optional()
                .map_err(ProductRepositoryError::persistence)?;
            row.map(row_to_product).transpose()
        })
        .await
    }

    async fn list(&self) -> ProductRepositoryResult<Vec<Product>> {
        self.run_blocking(move |connection| {
            let rows = products::table
                .order(products::name.asc())
                .select(ProductRow::as_select())
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            rows.into_iter().map(row_to_product).collect()
        })
        .await
    }

    async fn search_by_name(&self, fragment: &str) -> ProductRepositoryResult<Vec<Product>> {
        let pattern = format!("%{}%", escape_like(fragment.trim()));
        self.run_blocking(move |connection| {
            let rows = products::table
                .filter(products::active.eq(true))
                .filter(products::name.ilike(pattern))
                .order(products::name.asc())
                .select(ProductRow::as_select())
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            rows.into_iter().map(row_to_product).collect()
        })
        .await
    }
}

/// Escapes `LIKE` metacharacters so the fragment matches literally.
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn is_name_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_products_name_unique")
}

fn to_new_row(product: &Product) -> NewProductRow {
    NewProductRow {
        id: product.id().into_inner(),
        name: product.name().as_str().to_owned(),
        description: product.description().map(ToOwned::to_owned),
        unit_price_cents: product.unit_price_cents(),
        active: product.is_active(),
        created_at: product.created_at(),
        updated_at: product.updated_at(),
    }
}

fn row_to_product(row: ProductRow) -> ProductRepositoryResult<Product> {
    let name = ProductName::new(row.name).map_err(ProductRepositoryError::persistence)?;
    let data = PersistedProductData {
        id: ProductId::from_uuid(row.id),
        name,
        description: row.description,
        unit_price_cents: row.unit_price_cents,
        active: row.active,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Product::from_persisted(data))
}
