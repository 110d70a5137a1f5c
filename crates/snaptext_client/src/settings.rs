use thiserror::Error;
use url::Url;

pub const EXTRACT_PATH: &str = "/api/extract";
const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid extraction endpoint {origin:?}: {reason}")]
    InvalidEndpoint { origin: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Url,
    /// Multipart field carrying the uploaded file.
    pub field_name: String,
}

impl ClientSettings {
    /// Settings for a development server on the loopback interface.
    pub fn local() -> Result<Self, ClientError> {
        Self::for_origin(DEFAULT_ORIGIN)
    }

    /// Settings targeting the extraction path on the given page origin.
    pub fn for_origin(origin: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidEndpoint {
            origin: origin.to_string(),
            reason,
        };
        let base = Url::parse(origin).map_err(|err| invalid(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("origin cannot be a base url".to_string()));
        }
        let endpoint = base
            .join(EXTRACT_PATH)
            .map_err(|err| invalid(err.to_string()))?;
        Ok(Self {
            endpoint,
            field_name: "file".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientError, ClientSettings};

    #[test]
    fn local_targets_loopback_server() {
        let settings = ClientSettings::local().expect("loopback origin");
        assert_eq!(settings.endpoint.as_str(), "http://127.0.0.1:8000/api/extract");
        assert_eq!(settings.field_name, "file");
    }

    #[test]
    fn origin_path_is_replaced_by_extract_path() {
        let settings = ClientSettings::for_origin("https://ocr.example.com/app/index.html")
            .expect("valid origin");
        assert_eq!(settings.endpoint.as_str(), "https://ocr.example.com/api/extract");
    }

    #[test]
    fn garbage_origin_is_rejected() {
        let err = ClientSettings::for_origin("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
    }
}
