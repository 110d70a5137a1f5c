//! Snaptext core: pure upload state machine and view-model helpers.
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;
mod wire;

pub use effect::{Effect, TextDownload, DOWNLOAD_FILENAME, DOWNLOAD_MIME};
pub use error::UploadError;
pub use msg::Msg;
pub use state::{AppState, RequestId, UploadState};
pub use update::update;
pub use view_model::{
    AppViewModel, PlaceholderKind, TableView, TextMarkers, COPIED_NOTICE, PROCESSING_TEXT,
};
pub use wire::{ExtractionResult, KeyValuePair, SelectedFile};
