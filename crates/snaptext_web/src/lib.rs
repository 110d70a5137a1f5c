//! Snaptext web: upload controller, DOM rendering and effect execution.
//!
//! Everything outside `browser` is target-independent so the controller can
//! be driven natively against a recording DOM.
mod constants;
mod controller;
mod dom;
mod effects;
mod error;
mod render;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use constants::*;
pub use controller::UploadController;
pub use dom::{Dom, DomCommand};
pub use effects::{EffectRunner, Platform};
pub use error::PlatformError;
pub use render::render;
