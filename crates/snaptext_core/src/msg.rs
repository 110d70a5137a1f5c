use crate::{ExtractionResult, RequestId, SelectedFile, UploadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// File input changed; `None` when the selection was emptied.
    FileSelected(Option<SelectedFile>),
    /// The chosen file's bytes could not be read.
    FileReadFailed { name: String, reason: String },
    /// Preview image URL is ready for the given request.
    PreviewDecoded {
        request_id: RequestId,
        url: String,
    },
    /// Extraction endpoint resolved or the request failed.
    ExtractionFinished {
        request_id: RequestId,
        outcome: Result<ExtractionResult, UploadError>,
    },
    /// User clicked Reset.
    ResetClicked,
    /// User clicked Copy; carries the current text-area contents.
    CopyClicked { text: String },
    /// User clicked Download; carries the current text-area contents.
    DownloadClicked { text: String },
    /// Clipboard write finished.
    ClipboardWritten { result: Result<(), String> },
}
