use crate::{RequestId, SelectedFile};

pub const DOWNLOAD_FILENAME: &str = "extracted_text.txt";
pub const DOWNLOAD_MIME: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Encode the selected file as a data URL for the preview image.
    DecodePreview {
        request_id: RequestId,
        file: SelectedFile,
    },
    /// Post the selected file to the extraction endpoint.
    Upload {
        request_id: RequestId,
        file: SelectedFile,
    },
    ClearFileInput,
    CopyToClipboard { text: String },
    DownloadText(TextDownload),
    /// Short user-facing notice (e.g. an alert).
    Notify(String),
    LogWarning(String),
    LogError(String),
}

/// Client-side file download of plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDownload {
    pub filename: String,
    pub mime: String,
    pub contents: String,
}

impl TextDownload {
    pub fn extracted_text(contents: impl Into<String>) -> Self {
        Self {
            filename: DOWNLOAD_FILENAME.to_string(),
            mime: DOWNLOAD_MIME.to_string(),
            contents: contents.into(),
        }
    }
}
