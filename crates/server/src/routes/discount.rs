//! Discount route handler.

use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use shelfline_core::DiscountPercent;

use crate::error::Result;
use crate::middleware;

/// Discount form data.
#[derive(Debug, Deserialize)]
pub struct DiscountForm {
    /// Raw percentage string; 0-100 expected but not enforced.
    pub discount: String,
}

/// Apply a discount to the session. Later applications replace the value.
pub async fn apply(session: Session, Form(form): Form<DiscountForm>) -> Result<Response> {
    match DiscountPercent::parse(&form.discount) {
        Ok(discount) => {
            middleware::set_discount(&session, discount).await?;
            middleware::set_notice(
                &session,
                &format!("Discount of {discount}% applied to all products!"),
            )
            .await?;
        }
        Err(err) => {
            middleware::set_notice(&session, &err.to_string()).await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}
