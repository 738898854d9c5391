//! Cross-site request token discovery.
//!
//! Pages that render the upload widget carry the session's token in a
//! hidden `<input name="csrf_token">`, templated by the server.  The
//! widget reads it once after mounting and sends it back on every
//! upload as the `X-CSRF-Token` header.

use wasm_bindgen::JsCast;

/// Read the cross-site request token from the host page's hidden
/// input.  Returns `None` when the page has no such field; uploads
/// sent without a token will be rejected by the server.
#[must_use]
pub fn token_from_page() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector("input[name=\"csrf_token\"]")
        .ok()??;
    let input: web_sys::HtmlInputElement = element.dyn_into().ok()?;
    Some(input.value())
}
