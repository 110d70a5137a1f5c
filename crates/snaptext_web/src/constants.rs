pub const INPUT_IMAGE: &str = "imageUpload";
pub const BUTTON_RESET: &str = "resetBtn";
pub const BUTTON_COPY: &str = "copyBtn";
pub const BUTTON_DOWNLOAD: &str = "downloadBtn";
pub const IMAGE_PREVIEW: &str = "previewImg";
pub const TEXT_EXTRACTED: &str = "extractedText";
pub const TABLE_KV: &str = "kvTable";
