//! Dashboard route handler.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower_sessions::Session;

use shelfline_core::DiscountPercent;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware;
use crate::models::{Product, User};
use crate::services::{ProductService, Totals};
use crate::state::AppState;

use super::require_user;

/// Everything the presentation layer needs to render the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    /// The active user's record.
    pub user: User,
    /// The user's products in insertion order.
    pub products: Vec<Product>,
    /// Count, total, and discounted total.
    pub totals: Totals,
    /// The currently applied session discount.
    pub discount: DiscountPercent,
    /// One-shot notice from the previous action, if any.
    pub notice: Option<String>,
}

/// Render the dashboard for the active user.
///
/// Anonymous sessions are sent to registration before any storage access.
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response> {
    let current = require_user(&session).await?;

    let users = UserRepository::new(state.pool());
    let Some(user) = users.get(current.id).await? else {
        // The session references a user that no longer exists; start over.
        middleware::clear_current_user(&session).await?;
        return Err(AppError::Unauthenticated);
    };

    let discount = middleware::discount(&session).await?;
    let service = ProductService::new(state.pool());
    let products = service.list(current.id).await?;
    let totals = Totals::compute(&products, discount);
    let notice = middleware::take_notice(&session).await?;

    Ok(Json(DashboardView {
        user,
        products,
        totals,
        discount,
        notice,
    })
    .into_response())
}
