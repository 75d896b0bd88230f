//! HTTP route handlers for the inventory server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Dashboard: user, products, totals, discount
//! GET  /health                 - Health check
//!
//! # Products (require an identified session)
//! POST /products               - Create product (form: name, cost)
//! POST /products/{id}          - Edit product (form: name, cost)
//! POST /products/{id}/delete   - Delete product (idempotent)
//!
//! # Discount
//! POST /discount               - Apply session discount (form: discount)
//!
//! # Users
//! GET  /users/new              - Registration landing
//! POST /users                  - Register user (multipart: username, email, profile_pic)
//! ```
//!
//! Anonymous sessions are redirected to `/users/new`; successful writes set
//! a one-shot notice and redirect back to the dashboard.

pub mod dashboard;
pub mod discount;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Resolve the session to its active user, or fail with
/// [`AppError::Unauthenticated`] (rendered as a redirect to registration).
pub(crate) async fn require_user(session: &Session) -> Result<CurrentUser, AppError> {
    middleware::current_user(session)
        .await?
        .ok_or(AppError::Unauthenticated)
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/{id}", post(products::edit))
        .route("/{id}/delete", post(products::delete))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/new", get(users::new))
        .route("/", post(users::create))
}

/// Create all routes for the inventory server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Product routes
        .nest("/products", product_routes())
        // Session discount
        .route("/discount", post(discount::apply))
        // User registration
        .nest("/users", user_routes())
}
