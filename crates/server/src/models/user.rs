//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shelfline_core::UserId;

/// Filename stored when a registration carries no usable profile picture.
pub const DEFAULT_PROFILE_PICTURE: &str = "default.png";

/// A registered inventory owner (domain type).
///
/// Users are created once and never edited; duplicates of username and email
/// are permitted.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name, non-empty.
    pub username: String,
    /// Contact address, non-empty. No uniqueness or format constraint.
    pub email: String,
    /// Sanitized filename of the uploaded picture, or the default sentinel.
    pub profile_picture: String,
    /// When the user was created (set by the store).
    pub created_at: DateTime<Utc>,
}
