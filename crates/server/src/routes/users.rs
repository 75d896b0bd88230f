//! User registration route handlers.

use axum::{
    Json,
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware;
use crate::models::CurrentUser;
use crate::services::{ProfileUpload, UserService, UserServiceError};
use crate::state::AppState;

/// Multipart field names accepted by [`create`].
mod fields {
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const PROFILE_PIC: &str = "profile_pic";
}

/// Registration landing payload.
#[derive(Debug, Serialize)]
pub struct RegistrationPrompt {
    /// One-shot notice from a previous failed attempt, if any.
    pub notice: Option<String>,
}

/// Registration landing for anonymous sessions.
pub async fn new(session: Session) -> Result<Response> {
    let notice = middleware::take_notice(&session).await?;
    Ok(Json(RegistrationPrompt { notice }).into_response())
}

/// Handle user registration.
///
/// Accepts a multipart form with `username`, `email`, and an optional
/// `profile_pic` file. On success the session becomes identified with the
/// new user's id.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut username = String::new();
    let mut email = String::new();
    let mut upload: Option<ProfileUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some(fields::USERNAME) => username = field.text().await?,
            Some(fields::EMAIL) => email = field.text().await?,
            Some(fields::PROFILE_PIC) => {
                let filename = field.file_name().map(ToOwned::to_owned);
                let bytes = field.bytes().await?;
                if let Some(filename) = filename
                    && !filename.is_empty()
                    && !bytes.is_empty()
                {
                    upload = Some(ProfileUpload {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    let service = UserService::new(state.pool(), &state.config().upload_dir);
    match service.register_user(&username, &email, upload).await {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                username: user.username.clone(),
            };
            middleware::set_current_user(&session, &current).await?;
            middleware::set_notice(&session, "User profile created successfully!").await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(err @ (UserServiceError::EmptyUsername | UserServiceError::EmptyEmail)) => {
            middleware::set_notice(&session, &err.to_string()).await?;
            Ok(Redirect::to("/users/new").into_response())
        }
        Err(other) => Err(other.into()),
    }
}
