//! kawara-core: pure widget logic for the kawara wiki frontend.
//!
//! Platform-independent pieces of the search and media-upload widgets:
//! upload validation, file-size formatting, caret splicing, and
//! endpoint payload handling.  Everything here is natively testable;
//! browser glue lives in `kawara-io`.

pub mod caret;
pub mod format;
pub mod media;
pub mod search;
pub mod validate;

pub use media::{PendingFile, UploadError, UploadResult};
pub use search::{SearchError, SearchResult};
pub use validate::ValidationError;
