//! Schema setup command.
//!
//! Creates the `users` and `products` tables (idempotent, `CREATE TABLE IF
//! NOT EXISTS`) plus the tower-sessions table. Safe to run repeatedly; the
//! server also performs the same setup on startup.

use tower_sessions_sqlx_store::PostgresStore;

use shelfline_server::db;

use super::{CommandError, database_url};

/// Run the idempotent schema setup against the configured database.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing or a statement
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating users and products tables...");
    db::ensure_schema(&pool).await?;

    tracing::info!("Creating session table...");
    PostgresStore::new(pool.clone()).migrate().await?;

    tracing::info!("Schema setup complete!");
    Ok(())
}
