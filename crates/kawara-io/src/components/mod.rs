//! Dioxus UI components for the kawara widgets.
//!
//! Provides the media upload widget (drop zone, progress rows, and the
//! completed-uploads list) and the debounced search box with its
//! results dropdown.

mod media_upload;
mod search_box;

pub use media_upload::MediaUpload;
pub use search_box::SearchBox;
