//! Blob download and inline-view helpers.
//!
//! Wraps the object-URL dance: build a typed `Blob` from response bytes,
//! mint a temporary URL, and either click a synthetic anchor (download) or
//! open a tab (view). Requires a browser environment; off-browser these
//! safely no-op.

/// Force a download of `bytes` under `file_name` with the given MIME type.
pub fn save_blob(bytes: &[u8], mime: &str, file_name: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(url) = object_url(bytes, mime) else {
            return;
        };
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Ok(element) = document.create_element("a") {
                if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                    anchor.set_href(&url);
                    anchor.set_download(file_name);
                    anchor.click();
                }
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, mime, file_name);
    }
}

/// Open `bytes` inline in a new tab (browser-native PDF viewer etc.).
pub fn open_blob(bytes: &[u8], mime: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(url) = object_url(bytes, mime) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url(&url);
        }
        // The tab keeps its own reference; revoking immediately is safe.
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, mime);
    }
}

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

#[cfg(feature = "csr")]
fn object_url(bytes: &[u8], mime: &str) -> Option<String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}
