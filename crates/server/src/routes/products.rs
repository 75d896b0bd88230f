//! Product route handlers.
//!
//! All three handlers follow the same shape: no session user means a
//! redirect to registration; validation failures and ownership-scoped
//! misses become a notice and a redirect back to the dashboard; storage
//! failures propagate as hard errors.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use shelfline_core::ProductId;

use crate::error::Result;
use crate::middleware;
use crate::services::{ProductService, ProductServiceError};
use crate::state::AppState;

use super::require_user;

/// Product form data (create and edit).
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    /// Raw cost string, coerced by the service.
    pub cost: String,
}

/// Handle product creation.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let current = require_user(&session).await?;

    let service = ProductService::new(state.pool());
    match service.add_product(current.id, &form.name, &form.cost).await {
        Ok(product) => {
            tracing::debug!(product_id = %product.id, user_id = %current.id, "product added");
            middleware::set_notice(&session, "Product added successfully!").await?;
        }
        Err(err @ (ProductServiceError::InvalidCost(_) | ProductServiceError::EmptyName)) => {
            middleware::set_notice(&session, &err.to_string()).await?;
        }
        Err(other) => return Err(other.into()),
    }

    Ok(Redirect::to("/").into_response())
}

/// Handle product edits.
///
/// A miss (not found or owned by someone else) surfaces as a notice, not a
/// hard failure.
pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<ProductId>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let current = require_user(&session).await?;

    let service = ProductService::new(state.pool());
    match service
        .edit_product(current.id, id, &form.name, &form.cost)
        .await
    {
        Ok(product) => {
            tracing::debug!(product_id = %product.id, user_id = %current.id, "product updated");
            middleware::set_notice(&session, "Product updated successfully!").await?;
        }
        Err(ProductServiceError::NotFound) => {
            middleware::set_notice(&session, "Product not found!").await?;
        }
        Err(err @ (ProductServiceError::InvalidCost(_) | ProductServiceError::EmptyName)) => {
            middleware::set_notice(&session, &err.to_string()).await?;
        }
        Err(other) => return Err(other.into()),
    }

    Ok(Redirect::to("/").into_response())
}

/// Handle product deletion. Deleting an id that matches nothing is success.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<ProductId>,
) -> Result<Response> {
    let current = require_user(&session).await?;

    let service = ProductService::new(state.pool());
    service.delete_product(current.id, id).await?;
    middleware::set_notice(&session, "Product deleted successfully!").await?;

    Ok(Redirect::to("/").into_response())
}
