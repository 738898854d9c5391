//! Media upload widget: drop zone, per-upload progress, completed list.
//!
//! Files arrive through drag-and-drop or the file chooser.  Each one
//! runs its own validate → upload pipeline concurrently; there is no
//! queue and no cap.  Every in-flight upload owns a progress row keyed
//! by a widget-local id, removed when the upload settles.  Successful
//! uploads append a list entry (in completion order) with a preview,
//! the formatted size, the embed tag, a copy control, and an insert
//! control targeting the host page's content editor.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdPlay, LdUpload};
use gloo_timers::future::TimeoutFuture;
use kawara_core::format::format_file_size;
use kawara_core::media::{PendingFile, UploadResult};
use kawara_core::validate::{self, ALLOWED_MIME_TYPES};
use wasm_bindgen::JsCast;

use crate::{clipboard, csrf, editor, transport};

/// Element id of the hidden file input.  It sits outside the drop
/// zone so its synthesized click events cannot bubble back into the
/// zone's click handler.
const FILE_INPUT_ID: &str = "media-file-input";

/// How long the "Copied!" indicator stays visible.
const COPIED_VISIBLE_MS: u32 = 2000;

/// One in-flight upload's progress row.
#[derive(Debug, Clone, PartialEq)]
struct ActiveUpload {
    /// Widget-local id; distinguishes concurrent uploads of
    /// identically named files.
    id: u64,
    /// Filename shown in the row label.
    name: String,
    /// Transmitted ratio in `[0, 1]`; `None` until the first
    /// computable progress event (rendered as indeterminate).
    ratio: Option<f64>,
}

/// Props for the [`MediaUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct MediaUploadProps {
    /// Element id of the content editor embed tags are inserted into.
    /// Insertion is a no-op when the page has no such element.
    editor_id: String,
}

/// Drag-and-drop media upload widget with a completed-uploads list.
#[component]
pub fn MediaUpload(props: MediaUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut active = use_signal(Vec::<ActiveUpload>::new);
    let mut completed = use_signal(Vec::<UploadResult>::new);
    let mut next_id = use_signal(|| 0_u64);

    // The token is read once, after the first render has put the host
    // page's hidden input into the DOM.
    let mut csrf_token = use_signal(String::new);
    use_effect(move || {
        if let Some(token) = csrf::token_from_page() {
            csrf_token.set(token);
        } else {
            tracing::warn!("no csrf_token field on page; uploads will be sent without a token");
        }
    });

    // Validate and upload each file independently.  Rejections alert
    // immediately and never touch the network; failures alert once and
    // leave no state behind.  Shared by the file-chooser and drop paths.
    let process_files = move |files: Vec<FileData>| {
        for file in files {
            spawn(async move {
                let name = file.name();
                let mime_type = file.content_type().unwrap_or_default();
                let size_bytes = file.size();

                if let Err(err) = validate::validate(&name, &mime_type, size_bytes) {
                    alert(&err.to_string());
                    return;
                }

                let bytes = match file.read_bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        alert(&format!("Failed to read file: {name}\n{e}"));
                        return;
                    }
                };
                let pending = PendingFile {
                    name: name.clone(),
                    mime_type,
                    size_bytes,
                    bytes,
                };

                let id = {
                    next_id += 1;
                    *next_id.peek()
                };
                active.write().push(ActiveUpload {
                    id,
                    name,
                    ratio: None,
                });

                let token = csrf_token.peek().clone();
                let outcome = transport::upload(&pending, &token, move |ratio| {
                    if let Some(row) = active.write().iter_mut().find(|row| row.id == id) {
                        row.ratio = Some(ratio);
                    }
                })
                .await;

                // Terminal either way: drop this upload's progress row.
                active.write().retain(|row| row.id != id);

                match outcome {
                    Ok(result) => completed.write().push(result),
                    Err(err) => alert(&err.alert_message()),
                }
            });
        }
    };

    let handle_files = move |evt: FormEvent| {
        let files = evt.files();
        // Clear the input so re-selecting the same file fires again.
        reset_file_input();
        process_files(files);
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files());
    };

    let zone_class = if dragging() {
        "media-upload-zone drag-over"
    } else {
        "media-upload-zone"
    };
    let accept = ALLOWED_MIME_TYPES.join(",");

    rsx! {
        div { class: "media-upload",
            input {
                r#type: "file",
                id: FILE_INPUT_ID,
                multiple: true,
                accept: "{accept}",
                style: "display: none;",
                onchange: handle_files,
            }

            div {
                class: "{zone_class}",
                onclick: move |_| open_file_chooser(),
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |evt| {
                    evt.prevent_default();
                    dragging.set(false);
                },
                ondrop: handle_drop,

                Icon { icon: LdUpload, width: 28, height: 28 }
                p { class: "media-upload-hint",
                    "Drag & drop files here, or"
                }
                button {
                    r#type: "button",
                    class: "media-browse-btn",
                    // The zone's handler would open the chooser a
                    // second time without this.
                    onclick: move |evt| {
                        evt.stop_propagation();
                        open_file_chooser();
                    },
                    "Choose Files"
                }
                p { class: "media-upload-formats",
                    "JPEG, PNG, GIF, WebP, MP4, WebM — up to 10MB"
                }
            }

            if !active().is_empty() {
                div { class: "media-upload-progress",
                    for row in active() {
                        {progress_row(&row)}
                    }
                }
            }

            div { class: "media-upload-list",
                for result in completed() {
                    UploadItem {
                        key: "{result.preview_url}",
                        result,
                        editor_id: props.editor_id.clone(),
                    }
                }
            }
        }
    }
}

/// Render one in-flight upload's progress row.
fn progress_row(row: &ActiveUpload) -> Element {
    let (label, fill_class, fill_style) = match row.ratio {
        Some(ratio) => (
            format!("Uploading {}... {:.0}%", row.name, ratio * 100.0),
            "media-progress-fill",
            format!("width: {:.0}%;", ratio * 100.0),
        ),
        None => (
            format!("Uploading {}...", row.name),
            "media-progress-fill indeterminate",
            "width: 100%;".to_owned(),
        ),
    };

    rsx! {
        div { key: "{row.id}", class: "media-progress-row",
            span { class: "media-progress-text", "{label}" }
            div { class: "media-progress-track",
                div { class: "{fill_class}", style: "{fill_style}" }
            }
        }
    }
}

/// Props for one completed-upload list entry.
#[derive(Props, Clone, PartialEq)]
struct UploadItemProps {
    /// The stored item's server metadata.  Immutable for the lifetime
    /// of the page view.
    result: UploadResult,
    /// Forwarded from [`MediaUploadProps::editor_id`].
    editor_id: String,
}

/// One completed upload: preview, name, size, embed tag, and the copy
/// and insert controls.
#[component]
fn UploadItem(props: UploadItemProps) -> Element {
    let mut copied = use_signal(|| false);

    let tag_for_copy = props.result.embed_tag.clone();
    let copy_click = move |_| {
        let tag = tag_for_copy.clone();
        spawn(async move {
            match clipboard::write_text(&tag).await {
                Ok(()) => {
                    copied.set(true);
                    TimeoutFuture::new(COPIED_VISIBLE_MS).await;
                    copied.set(false);
                }
                // Not actionable for the user; leave the indicator off.
                Err(e) => tracing::warn!("clipboard write failed: {e}"),
            }
        });
    };

    let tag_for_insert = props.result.embed_tag.clone();
    let editor_id = props.editor_id.clone();
    let insert_click = move |_| {
        let Some(field) = editor::host_field(&editor_id) else {
            return;
        };
        if let Err(e) = editor::insert_at_caret(&field, &tag_for_insert) {
            tracing::warn!("embed insert failed: {e}");
        }
    };

    rsx! {
        div { class: "media-upload-item",
            if props.result.is_video() {
                div { class: "media-item-preview media-item-preview-video",
                    Icon { icon: LdPlay, width: 20, height: 20 }
                }
            } else {
                img {
                    class: "media-item-preview",
                    src: "{props.result.preview_url}",
                    alt: "",
                }
            }

            div { class: "media-item-info",
                div { class: "media-item-name", "{props.result.original_name}" }
                div { class: "media-item-size", {format_file_size(props.result.file_size)} }
            }

            span {
                class: "media-item-tag",
                title: "Click to copy embed tag",
                onclick: copy_click,
                "{props.result.embed_tag}"
            }
            button {
                r#type: "button",
                class: "media-insert-btn",
                onclick: insert_click,
                "Insert"
            }
            if copied() {
                span { class: "media-item-copied", "Copied!" }
            }
        }
    }
}

/// Open the native file chooser by clicking the hidden input.
fn open_file_chooser() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(FILE_INPUT_ID) else {
        return;
    };
    if let Ok(input) = element.dyn_into::<web_sys::HtmlElement>() {
        input.click();
    }
}

/// Clear the hidden input's value after a selection.
fn reset_file_input() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(FILE_INPUT_ID) else {
        return;
    };
    if let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() {
        input.set_value("");
    }
}

/// Blocking alert, the page's original UX for rejected and failed
/// uploads.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
