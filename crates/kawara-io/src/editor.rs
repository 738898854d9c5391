//! Embed-tag insertion into the article content textarea.
//!
//! The upload widget's "Insert" control splices the embed tag into
//! the host page's content editor at the current caret position.  The
//! UTF-16 splice arithmetic lives in `kawara-core::caret`; this module
//! applies it to the live `<textarea>` and restores focus.

use kawara_core::caret;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlTextAreaElement;

/// Errors that can occur while manipulating the host field.
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for InsertError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Look up the host editing field by element id.
///
/// Returns `None` when the page has no such field (the widget is also
/// used on pages without a content editor); insertion is then a no-op.
#[must_use]
pub fn host_field(id: &str) -> Option<HtmlTextAreaElement> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Insert `text`, framed by newlines, at the field's current caret,
/// replacing any active selection.  The caret ends up immediately
/// after the inserted block and the field regains focus.
///
/// # Errors
///
/// Returns [`InsertError::JsError`] if reading the selection, setting
/// the new selection range, or focusing the field fails.
pub fn insert_at_caret(field: &HtmlTextAreaElement, text: &str) -> Result<(), InsertError> {
    let value = field.value();
    let len = u32::try_from(value.encode_utf16().count()).unwrap_or(u32::MAX);

    // Missing selection offsets (possible on detached elements) fall
    // back to appending at the end.
    let start = field.selection_start()?.unwrap_or(len);
    let end = field.selection_end()?.unwrap_or(start);

    let payload = caret::insertion_payload(text);
    let (next, caret_pos) = caret::splice_utf16(&value, start, end, &payload);

    field.set_value(&next);
    field.set_selection_range(caret_pos, caret_pos)?;
    field.focus()?;
    Ok(())
}
