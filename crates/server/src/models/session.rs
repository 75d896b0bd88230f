//! Session-related types.
//!
//! Types stored in the session. The session is the only place the active
//! user id and the discount live; neither is shared across sessions.

use serde::{Deserialize, Serialize};

use shelfline_core::UserId;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the active user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's display name.
    pub username: String,
}

/// Session keys.
pub mod keys {
    /// Key for storing the active user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the session-scoped discount percentage.
    pub const DISCOUNT: &str = "discount";

    /// Key for the one-shot notice shown on the next dashboard view.
    pub const NOTICE: &str = "notice";
}
