//! Upload payloads and response interpretation.
//!
//! The transport layer (`kawara-io::transport`) only moves bytes; the
//! rules for turning a status code and response body into an
//! [`UploadResult`] or a user-facing [`UploadError`] live here so they
//! can be tested natively.

use serde::{Deserialize, Serialize};

/// A user-selected file awaiting upload.
///
/// Ephemeral: owned by the upload widget for the duration of one
/// attempt and dropped once the transport call resolves, whether it
/// succeeded or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Original filename as reported by the file chooser.
    pub name: String,
    /// Declared MIME type (may be empty for unrecognized files).
    pub mime_type: String,
    /// Declared size in bytes.
    pub size_bytes: u64,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// Server metadata for one successfully stored media item, as returned
/// by `POST /api/media/upload`.  Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Stored MIME type.
    pub mime_type: String,
    /// The uploader's original filename.
    pub original_name: String,
    /// Stored size in bytes.
    pub file_size: u64,
    /// URL serving the stored file, used for thumbnails.
    pub preview_url: String,
    /// Opaque token that references this item when pasted into
    /// article content.
    pub embed_tag: String,
}

impl UploadResult {
    /// Whether the stored item is a video (which gets a glyph instead
    /// of an `<img>` thumbnail in the upload list).
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video")
    }
}

/// Terminal failure of one upload attempt.
///
/// The `Display` text is the message shown to the user, mirroring the
/// server's wording where a structured body was available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// No response was received at all.
    #[error("Upload failed. Please try again.")]
    Network,

    /// The server rejected the upload with a structured `{error}` body.
    #[error("{0}")]
    Server(String),

    /// The response body could not be interpreted (non-JSON error
    /// body, or a success response whose payload did not parse).
    #[error("Upload failed.")]
    Malformed,
}

impl UploadError {
    /// The full text for the blocking alert: server-side and malformed
    /// failures get an "Upload error:" prefix, network failures are
    /// already self-describing.
    #[must_use]
    pub fn alert_message(&self) -> String {
        match self {
            Self::Network => self.to_string(),
            Self::Server(_) | Self::Malformed => format!("Upload error: {self}"),
        }
    }
}

/// Structured error body the upload endpoint returns on failure.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Interpret a terminal upload response.
///
/// Status 200 parses the body as an [`UploadResult`]; any other status
/// parses it as `{error}` and surfaces the server's message.
///
/// # Errors
///
/// Returns [`UploadError::Server`] for a structured failure,
/// [`UploadError::Malformed`] when either body fails to parse.
/// Transport-level failures never reach this function; the caller maps
/// those to [`UploadError::Network`].
pub fn interpret_upload_response(status: u16, body: &str) -> Result<UploadResult, UploadError> {
    if status == 200 {
        serde_json::from_str(body).map_err(|_| UploadError::Malformed)
    } else {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Err(UploadError::Server(parsed.error)),
            Err(_) => Err(UploadError::Malformed),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "id": 7,
        "filename": "ab12.png",
        "mime_type": "image/png",
        "original_name": "cat photo.png",
        "file_size": 2048,
        "preview_url": "/media/ab12.png",
        "embed_tag": "![cat photo.png](ab12.png)"
    }"#;

    #[test]
    fn success_response_parses_ignoring_extra_fields() {
        let result = interpret_upload_response(200, OK_BODY).unwrap();
        assert_eq!(result.mime_type, "image/png");
        assert_eq!(result.original_name, "cat photo.png");
        assert_eq!(result.file_size, 2048);
        assert_eq!(result.preview_url, "/media/ab12.png");
        assert_eq!(result.embed_tag, "![cat photo.png](ab12.png)");
    }

    #[test]
    fn success_status_with_garbage_body_is_malformed() {
        assert_eq!(
            interpret_upload_response(200, "<html>oops</html>"),
            Err(UploadError::Malformed)
        );
    }

    #[test]
    fn structured_error_surfaces_server_message() {
        assert_eq!(
            interpret_upload_response(400, r#"{"error":"File too large. Maximum size is 10MB."}"#),
            Err(UploadError::Server(
                "File too large. Maximum size is 10MB.".into()
            ))
        );
    }

    #[test]
    fn unstructured_error_body_falls_back_to_generic_message() {
        let err = interpret_upload_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(err, UploadError::Malformed);
        assert_eq!(err.to_string(), "Upload failed.");
    }

    #[test]
    fn alert_messages_match_the_page_wording() {
        assert_eq!(
            UploadError::Network.alert_message(),
            "Upload failed. Please try again."
        );
        assert_eq!(
            UploadError::Server("No file provided.".into()).alert_message(),
            "Upload error: No file provided."
        );
        assert_eq!(UploadError::Malformed.alert_message(), "Upload error: Upload failed.");
    }

    #[test]
    fn video_detection_is_prefix_based() {
        let result = interpret_upload_response(200, OK_BODY).unwrap();
        assert!(!result.is_video());

        let video = UploadResult {
            mime_type: "video/mp4".into(),
            ..result
        };
        assert!(video.is_video());
    }
}
