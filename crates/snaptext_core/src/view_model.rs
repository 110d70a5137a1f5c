use crate::KeyValuePair;

pub const PROCESSING_TEXT: &str = "Processing image... Please wait.";
pub const COPIED_NOTICE: &str = "Text copied!";

/// Visual state markers on the text area. Derived from `UploadState`, so
/// `loading` and `error` are never set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMarkers {
    pub loading: bool,
    pub error: bool,
}

impl TextMarkers {
    /// Every marker class paired with whether it applies, in a stable order.
    pub fn classes(&self) -> [(&'static str, bool); 2] {
        [("loading", self.loading), ("error", self.error)]
    }
}

/// Single full-width row shown instead of key-value data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Processing,
    NoPairs,
    Error,
}

impl PlaceholderKind {
    pub fn label(self) -> &'static str {
        match self {
            PlaceholderKind::Processing => "Processing image...",
            PlaceholderKind::NoPairs => "No key-value pairs found",
            PlaceholderKind::Error => "Error occurred",
        }
    }

    pub fn row_class(self) -> Option<&'static str> {
        match self {
            PlaceholderKind::Processing => Some("processing-row"),
            PlaceholderKind::NoPairs => None,
            PlaceholderKind::Error => Some("error-row"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableView {
    #[default]
    Empty,
    Rows(Vec<KeyValuePair>),
    Placeholder(PlaceholderKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub text: String,
    pub markers: TextMarkers,
    pub table: TableView,
    pub controls_enabled: bool,
    pub preview: Option<String>,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self {
            text: String::new(),
            markers: TextMarkers::default(),
            table: TableView::Empty,
            controls_enabled: true,
            preview: None,
        }
    }
}
