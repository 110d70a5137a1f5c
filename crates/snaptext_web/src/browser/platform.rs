use js_sys::{Array, Function, Promise, Reflect, Uint8Array};
use snaptext_client::encode_data_url;
use snaptext_core::{SelectedFile, TextDownload};
use snaptext_logging::snaptext_warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url, Window};

use super::js_error;
use crate::{Platform, PlatformError};

pub(crate) struct BrowserPlatform {
    window: Window,
    document: Document,
}

impl BrowserPlatform {
    pub(crate) fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn clipboard_write_text(&self) -> Result<(JsValue, Function), PlatformError> {
        let navigator: JsValue = self.window.navigator().into();
        let clipboard = Reflect::get(&navigator, &"clipboard".into()).map_err(js_error)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(PlatformError::Unsupported("navigator.clipboard"));
        }
        let write_text = Reflect::get(&clipboard, &"writeText".into())
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| PlatformError::Unsupported("navigator.clipboard.writeText"))?;
        Ok((clipboard, write_text))
    }
}

#[async_trait::async_trait(?Send)]
impl Platform for BrowserPlatform {
    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        let (clipboard, write_text) = self.clipboard_write_text()?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(js_error)?
            .dyn_into::<Promise>()
            .map_err(|_| PlatformError::Js("writeText did not return a promise".to_string()))?;
        JsFuture::from(promise).await.map_err(js_error)?;
        Ok(())
    }

    fn download(&self, download: &TextDownload) -> Result<(), PlatformError> {
        let parts = Array::of1(&JsValue::from_str(&download.contents));
        let options = BlobPropertyBag::new();
        options.set_type(&download.mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = self
            .document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| PlatformError::Js("<a> is not an anchor element".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(&download.filename);
        anchor.click();

        Url::revoke_object_url(&url).map_err(js_error)
    }

    // Object URL over the bytes already in memory.
    fn preview_url(&self, file: &SelectedFile) -> String {
        object_url(file).unwrap_or_else(|err| {
            snaptext_warn!("Preview of {} falls back to a data URL: {}", file.name, err);
            encode_data_url(file)
        })
    }

    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            snaptext_warn!("Notice {:?} not shown: {}", message, js_error(err));
        }
    }
}

fn object_url(file: &SelectedFile) -> Result<String, PlatformError> {
    let parts = Array::of1(&Uint8Array::from(&file.bytes[..]));
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    Url::create_object_url_with_blob(&blob).map_err(js_error)
}
