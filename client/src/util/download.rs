//! Browser file-save boundary.
//!
//! Builds a Blob URL for the export text and clicks a synthetic anchor to
//! trigger the save-as dialog. Requires a browser environment; SSR paths
//! safely no-op so server rendering stays deterministic.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Trigger a browser download of `content` under `filename`.
pub fn save_text_file(filename: &str, mime: &str, content: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = save_in_browser(filename, mime, content) {
            log::warn!("download of {filename} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, content);
    }
}

#[cfg(feature = "hydrate")]
fn save_in_browser(filename: &str, mime: &str, content: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    // Firefox needs the anchor attached to the document before click().
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
