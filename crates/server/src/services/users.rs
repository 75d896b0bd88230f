//! User service.
//!
//! Creates a user record, optionally storing an uploaded profile picture
//! under the configured directory. Session establishment happens at the
//! route layer, once the record exists.

use std::path::{Path, PathBuf};

use sqlx::PgPool;
use thiserror::Error;

use crate::db::{RepositoryError, UserRepository};
use crate::models::user::{DEFAULT_PROFILE_PICTURE, User};
use crate::services::uploads;

/// Errors from user registration.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// The submitted username is empty.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The submitted email is empty.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The uploaded profile picture could not be written.
    #[error("failed to store profile picture: {0}")]
    Upload(#[from] std::io::Error),

    /// The store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// An uploaded profile picture as received from the multipart form.
#[derive(Debug, Clone)]
pub struct ProfileUpload {
    /// Client-supplied filename, not yet sanitized.
    pub filename: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Service for user registration.
pub struct UserService<'a> {
    users: UserRepository<'a>,
    upload_dir: PathBuf,
}

impl<'a> UserService<'a> {
    /// Create a new user service writing uploads under `upload_dir`.
    #[must_use]
    pub fn new(pool: &'a PgPool, upload_dir: &Path) -> Self {
        Self {
            users: UserRepository::new(pool),
            upload_dir: upload_dir.to_path_buf(),
        }
    }

    /// Create a user record, persisting the profile picture if one was
    /// uploaded with a usable filename; otherwise the default sentinel is
    /// stored. Duplicate usernames and emails are permitted.
    ///
    /// # Errors
    ///
    /// Returns `UserServiceError::EmptyUsername`/`EmptyEmail` on coercion
    /// failure, `Upload` if the picture cannot be written, `Repository` if
    /// the insert fails.
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        upload: Option<ProfileUpload>,
    ) -> Result<User, UserServiceError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UserServiceError::EmptyUsername);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(UserServiceError::EmptyEmail);
        }

        let profile_picture = match upload {
            Some(upload) => match uploads::sanitize_filename(&upload.filename) {
                Some(filename) => {
                    uploads::store(&self.upload_dir, &filename, &upload.bytes).await?;
                    filename
                }
                None => DEFAULT_PROFILE_PICTURE.to_owned(),
            },
            None => DEFAULT_PROFILE_PICTURE.to_owned(),
        };

        let user = self
            .users
            .create(username, email, &profile_picture)
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}
