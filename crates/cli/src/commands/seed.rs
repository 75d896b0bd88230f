//! Demo data seeding command.

use shelfline_core::Money;
use shelfline_server::db::{self, ProductRepository, UserRepository};
use shelfline_server::models::user::DEFAULT_PROFILE_PICTURE;

use super::{CommandError, database_url};

/// Products inserted for the demo user.
const DEMO_PRODUCTS: &[(&str, &str)] = &[
    ("Widget", "19.99"),
    ("Gadget", "34.50"),
    ("Doohickey", "7.25"),
];

/// Insert a demo user owning a few products.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing or an insert fails.
pub async fn run(username: &str, email: &str) -> Result<(), CommandError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let users = UserRepository::new(&pool);
    let user = users
        .create(username, email, DEFAULT_PROFILE_PICTURE)
        .await?;
    tracing::info!(user_id = %user.id, "demo user created");

    let products = ProductRepository::new(&pool);
    for (name, cost) in DEMO_PRODUCTS {
        let cost = Money::parse(cost).map_err(|e| {
            db::RepositoryError::DataCorruption(format!("bad seed cost {cost:?}: {e}"))
        })?;
        let product = products.create(user.id, name, cost).await?;
        tracing::info!(product_id = %product.id, name, "demo product created");
    }

    tracing::info!("Seeding complete!");
    Ok(())
}
