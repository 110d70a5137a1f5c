use reqwest::multipart::{Form, Part};
use snaptext_core::{ExtractionResult, SelectedFile, UploadError};
use snaptext_logging::{snaptext_debug, snaptext_info};

use crate::ClientSettings;

/// Performs one extraction round trip for a selected file.
///
/// A 2xx response is returned as `Ok` even when its body carries an
/// `error`; deciding what that means belongs to the state machine.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ExtractClient {
    async fn extract(&self, file: &SelectedFile) -> Result<ExtractionResult, UploadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestExtractClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestExtractClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_form(&self, file: &SelectedFile) -> Form {
        Form::new().part(self.settings.field_name.clone(), file_part(file))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl ExtractClient for ReqwestExtractClient {
    async fn extract(&self, file: &SelectedFile) -> Result<ExtractionResult, UploadError> {
        snaptext_info!(
            "Uploading {} ({} bytes, {}) to {}",
            file.name,
            file.bytes.len(),
            file.mime,
            self.settings.endpoint
        );

        let response = self
            .client
            .post(self.settings.endpoint.clone())
            .multipart(self.build_form(file))
            .send()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;

        let status = response.status();
        snaptext_info!("Response status: {}", status);
        if !status.is_success() {
            return Err(UploadError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;
        let result: ExtractionResult = serde_json::from_slice(&body)
            .map_err(|err| UploadError::Transport(err.to_string()))?;
        snaptext_debug!(
            "Response data: text_len={} pairs={} warning={:?} error={:?}",
            result.text.as_deref().map(str::len).unwrap_or(0),
            result.key_values.as_ref().map(Vec::len).unwrap_or(0),
            result.warning,
            result.error
        );
        Ok(result)
    }
}

fn file_part(file: &SelectedFile) -> Part {
    let part = || Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
    if file.mime.is_empty() {
        return part();
    }
    part().mime_str(&file.mime).unwrap_or_else(|_| part())
}
