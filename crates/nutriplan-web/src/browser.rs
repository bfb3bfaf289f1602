//! Browser glue: clipboard, file download and page location

use js_sys::{Array, Function, Promise, Reflect, Uint8Array};
use nutriplan_core::{Clipboard, Downloader};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Full URL of the current page
pub fn current_href() -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;
    window.location().href().map_err(js_err)
}

/// `navigator.clipboard`, which is missing outside secure contexts
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window")?;
        let navigator = window.navigator();

        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_err)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err("Clipboard API unavailable".to_string());
        }

        let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "clipboard.writeText is not a function".to_string())?;

        let promise: Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;

        JsFuture::from(promise).await.map(|_| ()).map_err(js_err)
    }
}

/// Downloads through a temporary object URL and a synthetic anchor click
pub struct BrowserDownloader;

impl Downloader for BrowserDownloader {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let parts = Array::of1(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;

        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
        let clicked = click_download(&document, &url, filename);

        // The object URL is released whether or not the click worked
        Url::revoke_object_url(&url).map_err(js_err)?;
        clicked
    }
}

fn click_download(document: &Document, url: &str, filename: &str) -> Result<(), String> {
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "Created element is not an anchor".to_string())?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();

    log::debug!("Triggered download of {}", filename);
    Ok(())
}
