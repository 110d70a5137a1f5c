//! Snaptext client: upload IO and preview encoding.
mod extract;
mod preview;
mod settings;

pub use extract::{ExtractClient, ReqwestExtractClient};
pub use preview::encode_data_url;
pub use settings::{ClientError, ClientSettings, EXTRACT_PATH};
