//! Database operations for the Shelfline `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `users` - Registered inventory owners
//! - `products` - Products, owned by exactly one user (`ON DELETE CASCADE`)
//! - `sessions` - Tower-sessions storage (created by the session store)
//!
//! Schema creation is idempotent: [`ensure_schema`] issues
//! `CREATE TABLE IF NOT EXISTS` for both tables and is safe to run on every
//! startup and from `shelfline-cli migrate`.

pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Create the `users` and `products` tables if they do not exist.
///
/// Products reference their owner with `ON DELETE CASCADE`, so removing a
/// user removes every product that user owns.
///
/// # Errors
///
/// Returns [`RepositoryError::Database`] if either statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL,
            profile_picture VARCHAR(100) NOT NULL DEFAULT 'default.png',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            cost NUMERIC(10, 2) NOT NULL,
            owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
