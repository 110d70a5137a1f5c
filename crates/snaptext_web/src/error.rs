use snaptext_client::ClientError;
use thiserror::Error;

/// Failures of the browser collaborators. Logged, never shown as an upload error.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongElementType {
        id: &'static str,
        expected: &'static str,
    },
    #[error("{0} is not available in this browser")]
    Unsupported(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}
