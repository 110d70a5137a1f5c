use snaptext_client::{encode_data_url, ExtractClient};
use snaptext_core::{Effect, Msg, SelectedFile, TextDownload};
use snaptext_logging::{snaptext_error, snaptext_info, snaptext_warn};

use crate::PlatformError;

/// Browser services that sit outside the page elements.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Platform {
    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError>;
    fn download(&self, download: &TextDownload) -> Result<(), PlatformError>;
    fn notify(&self, message: &str);

    /// URL the preview image loads `file` from.
    fn preview_url(&self, file: &SelectedFile) -> String {
        encode_data_url(file)
    }
}

pub struct EffectRunner<C, P> {
    client: C,
    platform: P,
}

impl<C: ExtractClient, P: Platform> EffectRunner<C, P> {
    pub fn new(client: C, platform: P) -> Self {
        Self { client, platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Runs one effect to completion and returns the message reporting its
    /// outcome, if the state machine needs one.
    pub async fn run(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::DecodePreview { request_id, file } => Some(Msg::PreviewDecoded {
                request_id,
                url: self.platform.preview_url(&file),
            }),
            Effect::Upload { request_id, file } => {
                let outcome = self.client.extract(&file).await;
                Some(Msg::ExtractionFinished {
                    request_id,
                    outcome,
                })
            }
            Effect::CopyToClipboard { text } => {
                let result = self.platform.write_clipboard(&text).await;
                Some(Msg::ClipboardWritten {
                    result: result.map_err(|err| err.to_string()),
                })
            }
            Effect::DownloadText(download) => {
                match self.platform.download(&download) {
                    Ok(()) => snaptext_info!(
                        "Downloaded {} ({} bytes)",
                        download.filename,
                        download.contents.len()
                    ),
                    Err(err) => snaptext_error!("Download of {} failed: {}", download.filename, err),
                }
                None
            }
            Effect::Notify(message) => {
                self.platform.notify(&message);
                None
            }
            // Applied synchronously by the controller.
            Effect::ClearFileInput | Effect::LogWarning(_) | Effect::LogError(_) => {
                snaptext_warn!("Controller-local effect reached the runner: {:?}", effect);
                None
            }
        }
    }
}
