//! Media upload over `XMLHttpRequest`.
//!
//! `fetch` exposes no upload progress, so the transport uses XHR: one
//! POST per file, multipart body with a single `file` field, progress
//! reported from the request's `XMLHttpRequestUpload` object while
//! bytes are in flight.  There is no retry and no timeout beyond what
//! the browser applies on its own.

use js_sys::{Array, Promise, Uint8Array};
use kawara_core::media::{PendingFile, UploadError, UploadResult, interpret_upload_response};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, ProgressEvent, XmlHttpRequest};

/// Upload endpoint path.
pub const UPLOAD_ENDPOINT: &str = "/api/media/upload";

/// Request header carrying the cross-site request token.
const CSRF_HEADER: &str = "X-CSRF-Token";

/// Upload one validated file, reporting progress along the way.
///
/// `on_progress` receives a non-decreasing ratio in `[0, 1]`, and only
/// fires while the browser can compute a total (`lengthComputable`);
/// callers that never hear from it show an indeterminate state.  The
/// function resolves exactly once, after the request terminates.
///
/// # Errors
///
/// Returns [`UploadError::Network`] when no response was received
/// (including failures to construct the request), and the server- or
/// body-derived variants from
/// [`interpret_upload_response`] otherwise.
#[allow(clippy::future_not_send)] // WASM is single-threaded; XHR is !Send
pub async fn upload(
    file: &PendingFile,
    csrf_token: &str,
    mut on_progress: impl FnMut(f64) + 'static,
) -> Result<UploadResult, UploadError> {
    let xhr = XmlHttpRequest::new().map_err(|_| UploadError::Network)?;
    xhr.open("POST", UPLOAD_ENDPOINT)
        .map_err(|_| UploadError::Network)?;
    xhr.set_request_header(CSRF_HEADER, csrf_token)
        .map_err(|_| UploadError::Network)?;

    // Progress ratio, clamped and kept monotone even if the browser
    // delivers events out of order.
    let mut last = 0.0_f64;
    let progress_cb = Closure::<dyn FnMut(ProgressEvent)>::new(move |evt: ProgressEvent| {
        if evt.length_computable() && evt.total() > 0.0 {
            let ratio = (evt.loaded() / evt.total()).clamp(0.0, 1.0);
            if ratio >= last {
                last = ratio;
                on_progress(ratio);
            }
        }
    });
    let upload_target = xhr.upload().map_err(|_| UploadError::Network)?;
    upload_target.set_onprogress(Some(progress_cb.as_ref().unchecked_ref()));

    // Settle a Promise on load (any status) or network error.  The
    // handler closures are held in these slots so they outlive the
    // await below.
    let mut onload = None;
    let mut onerror = None;
    let done = Promise::new(&mut |resolve, reject| {
        let load = Closure::once(move |_: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        xhr.set_onload(Some(load.as_ref().unchecked_ref()));
        onload = Some(load);

        let error = Closure::once(move |_: web_sys::Event| {
            let _ = reject.call0(&JsValue::NULL);
        });
        xhr.set_onerror(Some(error.as_ref().unchecked_ref()));
        onerror = Some(error);
    });

    let form = multipart_form(file).map_err(|_| UploadError::Network)?;
    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|_| UploadError::Network)?;

    let settled = JsFuture::from(done).await;

    // The request is over; release the handlers before inspecting it.
    drop(progress_cb);
    drop(onload);
    drop(onerror);

    if settled.is_err() {
        return Err(UploadError::Network);
    }

    let status = xhr.status().map_err(|_| UploadError::Network)?;
    let body = xhr
        .response_text()
        .ok()
        .flatten()
        .unwrap_or_default();
    interpret_upload_response(status, &body)
}

/// Build the single-field multipart body the endpoint expects.
fn multipart_form(file: &PendingFile) -> Result<FormData, JsValue> {
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let parts = Array::new();
    parts.push(&bytes);

    let opts = BlobPropertyBag::new();
    opts.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", &blob, &file.name)?;
    Ok(form)
}
