//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shelfline_core::{Money, ProductId, UserId};

/// A product belonging to exactly one user (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name, non-empty.
    pub name: String,
    /// Non-negative cost with two decimal places.
    pub cost: Money,
    /// Owning user; all reads and writes are scoped by this id.
    pub owner_id: UserId,
    /// When the product was created (set by the store).
    pub created_at: DateTime<Utc>,
}
