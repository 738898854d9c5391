//! kawara-io: browser I/O and Dioxus components for the kawara widgets.
//!
//! Wraps the Web APIs the widgets need (XHR uploads with progress
//! events, fetch-based search, clipboard writes, textarea caret
//! access, CSRF token discovery) and provides the two top-level
//! components, [`MediaUpload`] and [`SearchBox`].  Everything here
//! requires a browser environment (`wasm32-unknown-unknown` target);
//! the pure logic underneath lives in `kawara-core`.

pub mod clipboard;
pub mod components;
pub mod csrf;
pub mod editor;
pub mod lookup;
pub mod transport;

pub use components::{MediaUpload, SearchBox};
