//! Live article search with a debounced results dropdown.
//!
//! Each keystroke restarts a 200 ms quiet period before one query
//! fires.  Queries are tagged with a generation counter; both the
//! debounce sleep and the fetch completion re-check it, so a slow
//! response superseded by a newer keystroke is discarded instead of
//! overwriting fresher results.  An empty (trimmed) input clears the
//! dropdown immediately without touching the network.

use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use gloo_timers::future::TimeoutFuture;
use kawara_core::search::SearchResult;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::lookup;

/// Element id of the widget root, used by the outside-click check.
const WIDGET_ID: &str = "search-widget";

/// Quiet period after the last keystroke before a query fires.
const DEBOUNCE_MS: u32 = 200;

/// What the dropdown currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Panel {
    /// Nothing rendered; the dropdown stays hidden.
    Empty,
    /// One row per matching article.
    Results(Vec<SearchResult>),
    /// The explicit "No articles found" row.
    NoResults,
    /// The explicit error row for a failed lookup.
    Error,
}

/// Debounced search input with a results dropdown.
#[component]
pub fn SearchBox() -> Element {
    let mut query = use_signal(String::new);
    let mut panel = use_signal(|| Panel::Empty);
    let mut open = use_signal(|| false);
    let mut generation = use_signal(|| 0_u64);

    let handle_input = move |evt: FormEvent| {
        let value = evt.value();
        query.set(value.clone());

        // Every keystroke supersedes whatever was pending, including
        // any in-flight response.
        generation += 1;
        let my_generation = *generation.peek();

        let trimmed = value.trim().to_owned();
        if trimmed.is_empty() {
            panel.set(Panel::Empty);
            open.set(false);
            return;
        }

        spawn(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if *generation.peek() != my_generation {
                // Superseded while waiting; the newer keystroke's task
                // owns the query now.
                return;
            }

            let outcome = lookup::search(&trimmed).await;
            if *generation.peek() != my_generation {
                tracing::debug!("discarding stale search response for {trimmed:?}");
                return;
            }

            match outcome {
                Ok(results) if results.is_empty() => panel.set(Panel::NoResults),
                Ok(results) => panel.set(Panel::Results(results)),
                Err(e) => {
                    tracing::warn!("search failed: {e}");
                    panel.set(Panel::Error);
                }
            }
            open.set(true);
        });
    };

    // Re-show existing content when the input regains focus.
    let handle_focus = move |_| {
        if !query.peek().trim().is_empty() && *panel.peek() != Panel::Empty {
            open.set(true);
        }
    };

    use_outside_click(move || open.set(false));

    let panel_class = if open() {
        "search-results visible"
    } else {
        "search-results"
    };

    rsx! {
        div { id: WIDGET_ID, class: "search-widget",
            span { class: "search-icon",
                Icon { icon: LdSearch, width: 16, height: 16 }
            }
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search articles...",
                autocomplete: "off",
                value: "{query}",
                oninput: handle_input,
                onfocus: handle_focus,
            }
            div { class: "{panel_class}",
                {panel_rows(&panel())}
            }
        }
    }
}

/// Render the dropdown's content for the current panel state.
fn panel_rows(panel: &Panel) -> Element {
    match panel {
        Panel::Empty => rsx! {},
        Panel::NoResults => rsx! {
            div { class: "no-results", "No articles found" }
        },
        Panel::Error => rsx! {
            div { class: "no-results", "Search error" }
        },
        Panel::Results(results) => rsx! {
            for result in results.iter().cloned() {
                a {
                    key: "{result.slug}",
                    class: "search-result-item",
                    href: "{result.article_path()}",
                    span { class: "search-result-title", "{result.title}" }
                    span { class: "search-result-description", "{result.description}" }
                }
            }
        },
    }
}

/// Register a document-level click listener that fires `on_outside`
/// for clicks landing outside the widget root.  The listener is torn
/// down in `use_drop` when the component unmounts.
fn use_outside_click(mut on_outside: impl FnMut() + 'static) {
    let listener = use_hook(|| {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
            if click_is_outside(&evt) {
                on_outside();
            }
        });
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        Rc::new(closure)
    });

    use_drop(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback("click", (*listener).as_ref().unchecked_ref());
        }
    });
}

/// Whether a click event's target lies outside the widget root.
fn click_is_outside(evt: &web_sys::Event) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(root) = document.get_element_by_id(WIDGET_ID) else {
        return false;
    };
    let target = evt
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    !root.contains(target.as_ref())
}
