use crate::view_model::{AppViewModel, PlaceholderKind, TableView, TextMarkers, PROCESSING_TEXT};
use crate::{ExtractionResult, KeyValuePair, UploadError};

/// Generation of an upload cycle. Completions tagged with an older id are stale.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Success {
        text: String,
        pairs: Vec<KeyValuePair>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    upload: UploadState,
    preview: Option<String>,
    generation: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload(&self) -> &UploadState {
        &self.upload
    }

    pub fn current_request(&self) -> RequestId {
        self.generation
    }

    pub fn is_current(&self, request_id: RequestId) -> bool {
        request_id == self.generation
    }

    pub fn view(&self) -> AppViewModel {
        let (text, markers, table, controls_enabled) = match &self.upload {
            UploadState::Idle => (String::new(), TextMarkers::default(), TableView::Empty, true),
            UploadState::Loading => (
                PROCESSING_TEXT.to_string(),
                TextMarkers {
                    loading: true,
                    error: false,
                },
                TableView::Placeholder(PlaceholderKind::Processing),
                false,
            ),
            UploadState::Success { text, pairs } => {
                let table = if pairs.is_empty() {
                    TableView::Placeholder(PlaceholderKind::NoPairs)
                } else {
                    TableView::Rows(pairs.clone())
                };
                (text.clone(), TextMarkers::default(), table, true)
            }
            UploadState::Error { message } => (
                format!("Error: {message}"),
                TextMarkers {
                    loading: false,
                    error: true,
                },
                TableView::Placeholder(PlaceholderKind::Error),
                true,
            ),
        };

        AppViewModel {
            text,
            markers,
            table,
            controls_enabled,
            preview: self.preview.clone(),
        }
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.generation += 1;
        self.upload = UploadState::Loading;
        self.dirty = true;
        self.generation
    }

    pub(crate) fn set_preview(&mut self, url: String) {
        self.preview = Some(url);
        self.dirty = true;
    }

    pub(crate) fn complete(&mut self, result: ExtractionResult) {
        self.upload = UploadState::Success {
            text: result.text.unwrap_or_default(),
            pairs: result.key_values.unwrap_or_default(),
        };
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, error: &UploadError) {
        self.upload = UploadState::Error {
            message: error.to_string(),
        };
        self.dirty = true;
    }

    pub(crate) fn reset(&mut self) {
        // Advancing the generation orphans anything still in flight.
        self.generation += 1;
        if self.upload != UploadState::Idle || self.preview.is_some() {
            self.upload = UploadState::Idle;
            self.preview = None;
            self.dirty = true;
        }
    }
}
