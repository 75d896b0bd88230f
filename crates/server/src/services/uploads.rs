//! Uploaded asset storage.
//!
//! Uploaded files are referenced by sanitized filename only; the storage
//! directory is injected through configuration. A filename that survives
//! [`sanitize_filename`] contains no path separators and cannot traverse out
//! of the upload directory.

use std::path::Path;

/// Reduce a client-supplied filename to a safe single path component.
///
/// The final path component is kept, every character outside
/// `[A-Za-z0-9._-]` is collapsed to `_`, and leading dots are stripped.
/// Returns `None` when nothing usable remains.
#[must_use]
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        return None;
    }

    Some(cleaned.to_owned())
}

/// Write uploaded bytes under the configured directory.
///
/// `filename` must already be sanitized. An existing file with the same name
/// is overwritten.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub async fn store(upload_dir: &Path, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(upload_dir.join(filename), bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_filenames() {
        assert_eq!(
            sanitize_filename("avatar.png").as_deref(),
            Some("avatar.png")
        );
    }

    #[test]
    fn collapses_spaces_and_specials() {
        assert_eq!(
            sanitize_filename("my photo (1).png").as_deref(),
            Some("my_photo__1_.png")
        );
    }

    #[test]
    fn strips_directory_components() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename("C:\\Users\\me\\pic.png").as_deref(),
            Some("pic.png")
        );
    }

    #[test]
    fn strips_leading_dots() {
        assert_eq!(sanitize_filename(".hidden.png").as_deref(), Some("hidden.png"));
    }

    #[test]
    fn rejects_names_with_no_substance() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename("///"), None);
        assert_eq!(sanitize_filename("***"), None);
    }
}
