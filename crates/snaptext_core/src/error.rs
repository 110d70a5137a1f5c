use thiserror::Error;

/// Every way an upload cycle can end in the Error state.
///
/// The `Display` output is the message shown after the `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Endpoint answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// Endpoint answered 2xx but reported an `error` in the body.
    #[error("{0}")]
    Application(String),
    /// Request never produced a usable body (network failure, undecodable JSON).
    #[error("Failed to process image: {0}")]
    Transport(String),
}
