//! Product repository for database operations.
//!
//! Every lookup and mutation is scoped by `owner_id`. A query for a product
//! the requesting user does not own behaves exactly like a query for a
//! product that does not exist, so ownership is never leaked.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shelfline_core::{Money, ProductId, UserId};

use super::RepositoryError;
use crate::models::product::Product;

/// Internal row type for `PostgreSQL` product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    cost: Money,
    owner_id: i32,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            cost: row.cost,
            owner_id: UserId::new(row.owner_id),
            created_at: row.created_at,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product owned by `owner_id` and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including a
    /// foreign key violation for a missing owner).
    pub async fn create(
        &self,
        owner_id: UserId,
        name: &str,
        cost: Money,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (name, cost, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, cost, owner_id, created_at
            ",
        )
        .bind(name)
        .bind(cost)
        .bind(owner_id)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// List all products owned by `owner_id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, cost, owner_id, created_at
            FROM products
            WHERE owner_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(owner_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a product by id, filtered by owner. This is the ownership boundary:
    /// a product owned by someone else is indistinguishable from a missing one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(
        &self,
        id: ProductId,
        owner_id: UserId,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, cost, owner_id, created_at
            FROM products
            WHERE id = $1 AND owner_id = $2
            ",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Update a product's name and cost, scoped by owner.
    ///
    /// # Returns
    ///
    /// The number of rows affected: 0 if not owned/found, 1 on success.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: ProductId,
        owner_id: UserId,
        name: &str,
        cost: Money,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $1, cost = $2
            WHERE id = $3 AND owner_id = $4
            ",
        )
        .bind(name)
        .bind(cost)
        .bind(id)
        .bind(owner_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a product, scoped by owner.
    ///
    /// # Returns
    ///
    /// The number of rows affected: 0 if not owned/found, 1 on success.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId, owner_id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
