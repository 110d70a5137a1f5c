//! wasm32 entry point and web-sys implementations of the collaborators.
mod app;
mod dom;
mod platform;

use wasm_bindgen::JsValue;

use crate::PlatformError;

fn js_error(value: JsValue) -> PlatformError {
    PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
