//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions and provides
//! typed accessors for the values Shelfline keeps in the session: the active
//! user, the discount percentage, and a one-shot notice.

use tower_sessions::{Expiry, Session, SessionManagerLayer, session};
use tower_sessions_sqlx_store::PostgresStore;

use shelfline_core::DiscountPercent;

use crate::config::ServerConfig;
use crate::models::session::{CurrentUser, keys};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "shelfline_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
///
/// The store's own migration must have been run before the first request
/// (see `main` and `shelfline-cli migrate`).
#[must_use]
pub fn create_session_layer(
    store: PostgresStore,
    config: &ServerConfig,
) -> SessionManagerLayer<PostgresStore> {
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

// =============================================================================
// Typed session accessors
// =============================================================================

/// Get the active user, if the session is identified.
///
/// # Errors
///
/// Returns a session error if the backing store fails.
pub async fn current_user(session: &Session) -> Result<Option<CurrentUser>, session::Error> {
    session.get::<CurrentUser>(keys::CURRENT_USER).await
}

/// Write the active user into the session (`Anonymous -> Identified`).
///
/// # Errors
///
/// Returns a session error if the backing store fails.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), session::Error> {
    session.insert(keys::CURRENT_USER, user).await
}

/// Remove the active user from the session.
///
/// # Errors
///
/// Returns a session error if the backing store fails.
pub async fn clear_current_user(session: &Session) -> Result<(), session::Error> {
    session.remove::<CurrentUser>(keys::CURRENT_USER).await?;
    Ok(())
}

/// Get the session discount; unset means zero.
///
/// # Errors
///
/// Returns a session error if the backing store fails.
pub async fn discount(session: &Session) -> Result<DiscountPercent, session::Error> {
    Ok(session
        .get::<DiscountPercent>(keys::DISCOUNT)
        .await?
        .unwrap_or(DiscountPercent::ZERO))
}

/// Set the session discount. Later calls replace the value, never accumulate.
///
/// # Errors
///
/// Returns a session error if the backing store fails.
pub async fn set_discount(
    session: &Session,
    discount: DiscountPercent,
) -> Result<(), session::Error> {
    session.insert(keys::DISCOUNT, discount).await
}

/// Queue a notice to be shown on the next dashboard view.
///
/// # Errors
///
/// Returns a session error if the backing store fails.
pub async fn set_notice(session: &Session, notice: &str) -> Result<(), session::Error> {
    session.insert(keys::NOTICE, notice).await
}

/// Take the pending notice, removing it from the session.
///
/// # Errors
///
/// Returns a session error if the backing store fails.
pub async fn take_notice(session: &Session) -> Result<Option<String>, session::Error> {
    session.remove::<String>(keys::NOTICE).await
}
