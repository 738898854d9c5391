//! Article search over `window.fetch`.

use kawara_core::search::{SearchError, SearchResult, parse_results};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Search endpoint path.
pub const SEARCH_ENDPOINT: &str = "/api/search";

/// Build the query URL with a percent-encoded search term.
#[must_use]
pub fn query_url(query: &str) -> String {
    let encoded = String::from(js_sys::encode_uri_component(query));
    format!("{SEARCH_ENDPOINT}?q={encoded}")
}

/// Run one search query and parse the result set.
///
/// # Errors
///
/// Returns [`SearchError::Transport`] when the request never completes,
/// [`SearchError::Status`] for a non-success response, and
/// [`SearchError::Malformed`] when the body does not parse.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Response is !Send
pub async fn search(query: &str) -> Result<Vec<SearchResult>, SearchError> {
    let window =
        web_sys::window().ok_or_else(|| SearchError::Transport("no global window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(&query_url(query)))
        .await
        .map_err(|e| SearchError::Transport(format!("{e:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| SearchError::Transport("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(SearchError::Status(response.status()));
    }

    let text = response
        .text()
        .map_err(|e| SearchError::Transport(format!("{e:?}")))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| SearchError::Transport(format!("{e:?}")))?;
    let body = text
        .as_string()
        .ok_or_else(|| SearchError::Transport("response text was not a string".into()))?;

    parse_results(&body)
}
