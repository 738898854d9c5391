use dioxus::prelude::*;
use kawara_io::{MediaUpload, SearchBox};

/// Element id of the article content textarea.  The upload widget's
/// insert control looks the field up by this id.
const CONTENT_EDITOR_ID: &str = "content";

fn main() {
    dioxus::launch(app);
}

/// Root application component: the article editing page with the live
/// search box in the header and the media upload widget under the
/// content editor.
fn app() -> Element {
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "kawara" }
                SearchBox {}
            }

            main { class: "page-main",
                // The server templates the session's token into this
                // field when it serves the page; the upload widget
                // reads it once after mounting.
                input { r#type: "hidden", name: "csrf_token", value: "" }

                label { class: "field-label", r#for: CONTENT_EDITOR_ID, "Article content" }
                textarea {
                    id: CONTENT_EDITOR_ID,
                    class: "content-editor",
                    rows: "16",
                    placeholder: "Write your article in Markdown...",
                }

                MediaUpload { editor_id: CONTENT_EDITOR_ID.to_owned() }
            }
        }
    }
}
