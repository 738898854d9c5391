//! Client-side validation of files selected for upload.
//!
//! Validation is synchronous and pure: it looks only at the declared
//! MIME type and byte size, never at the content.  A file that fails
//! here must never reach the transport layer.  The server re-checks
//! both constraints, so this is a UX gate, not a security boundary.

/// MIME types the upload endpoint accepts.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/webm",
];

/// Maximum accepted file size: 10 MiB.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Why a file was rejected before upload.
///
/// The `Display` text is shown to the user verbatim in a blocking
/// alert, so each variant names the offending file and the constraint
/// that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The declared MIME type is not on the allow-list.
    #[error("File type not allowed: {name}\nAllowed: JPEG, PNG, GIF, WebP, MP4, WebM")]
    TypeNotAllowed {
        /// Original filename, for the user-facing message.
        name: String,
        /// The declared MIME type that was rejected.
        mime_type: String,
    },

    /// The file exceeds [`MAX_FILE_BYTES`].
    #[error("File too large: {name}\nMaximum size is 10MB.")]
    TooLarge {
        /// Original filename, for the user-facing message.
        name: String,
        /// Declared size in bytes.
        size_bytes: u64,
    },
}

/// Accept or reject a file by declared MIME type and size.
///
/// # Errors
///
/// Returns [`ValidationError::TypeNotAllowed`] when `mime_type` is not
/// in [`ALLOWED_MIME_TYPES`], and [`ValidationError::TooLarge`] when
/// `size_bytes` exceeds [`MAX_FILE_BYTES`].  Type is checked first.
pub fn validate(name: &str, mime_type: &str, size_bytes: u64) -> Result<(), ValidationError> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(ValidationError::TypeNotAllowed {
            name: name.to_owned(),
            mime_type: mime_type.to_owned(),
        });
    }
    if size_bytes > MAX_FILE_BYTES {
        return Err(ValidationError::TooLarge {
            name: name.to_owned(),
            size_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allowed_type() {
        for mime in ALLOWED_MIME_TYPES {
            assert_eq!(
                validate("photo.bin", mime, 1024),
                Ok(()),
                "{mime} should be accepted"
            );
        }
    }

    #[test]
    fn rejects_disallowed_type_naming_the_file() {
        let err = validate("notes.pdf", "application/pdf", 10).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeNotAllowed {
                name: "notes.pdf".into(),
                mime_type: "application/pdf".into(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("notes.pdf"), "message names the file");
        assert!(message.contains("not allowed"), "message names the constraint");
    }

    #[test]
    fn rejects_empty_mime_type() {
        assert!(matches!(
            validate("mystery", "", 10),
            Err(ValidationError::TypeNotAllowed { .. })
        ));
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        assert_eq!(validate("big.png", "image/png", MAX_FILE_BYTES), Ok(()));
        let err = validate("big.png", "image/png", MAX_FILE_BYTES + 1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                name: "big.png".into(),
                size_bytes: MAX_FILE_BYTES + 1,
            }
        );
        assert!(err.to_string().contains("too large"), "message names the constraint");
    }

    #[test]
    fn type_is_checked_before_size() {
        // An oversized file of a disallowed type reports the type error.
        let err = validate("huge.exe", "application/octet-stream", MAX_FILE_BYTES * 2).unwrap_err();
        assert!(matches!(err, ValidationError::TypeNotAllowed { .. }));
    }
}
