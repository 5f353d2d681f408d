//! Browser file I/O: reading uploads and downloading reports

use js_sys::Array;
use lens_engine::export::REPORT_MIME_TYPE;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

/// Decode an uploaded file as UTF-8 text
pub async fn read_file_text(file: &File) -> Result<String, JsValue> {
    let text = JsFuture::from(file.text()).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("File contents were not text"))
}

/// Offer `json` to the user as a file download named `file_name`
pub fn download_json(file_name: &str, json: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let parts = Array::of1(&JsValue::from_str(json));
    let options = BlobPropertyBag::new();
    options.set_type(REPORT_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

/// Describe a JS error value for display
pub fn describe_js_error(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "unknown error".to_string())
}
