use snaptext_core::{TableView, TextMarkers};

use crate::PlatformError;

/// A single mutation of the page, produced by `render`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetText(String),
    SetTextMarkers(TextMarkers),
    ReplaceTable(TableView),
    /// `None` clears the preview image.
    SetPreview(Option<String>),
    SetControlsEnabled(bool),
    ClearFileInput,
}

/// The page elements the controller drives.
pub trait Dom {
    fn apply(&mut self, command: DomCommand) -> Result<(), PlatformError>;

    /// Current text-area contents, including any edits made by the user.
    fn text_value(&self) -> String;
}
