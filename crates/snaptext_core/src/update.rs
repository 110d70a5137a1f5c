use crate::view_model::COPIED_NOTICE;
use crate::{AppState, Effect, Msg, TextDownload, UploadError, UploadState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(None) => Vec::new(),
        Msg::FileSelected(Some(file)) => {
            let request_id = state.begin_request();
            // Upload first: the preview must never hold up the request.
            vec![
                Effect::Upload {
                    request_id,
                    file: file.clone(),
                },
                Effect::DecodePreview { request_id, file },
            ]
        }
        Msg::FileReadFailed { name, reason } => {
            // Shown like a request that never reached the server.
            state.begin_request();
            let error = UploadError::Transport(reason);
            state.fail(&error);
            vec![Effect::LogError(format!("{name}: {error}"))]
        }
        Msg::PreviewDecoded {
            request_id,
            url,
        } => {
            if state.is_current(request_id) {
                state.set_preview(url);
            }
            Vec::new()
        }
        Msg::ExtractionFinished {
            request_id,
            outcome,
        } => {
            // Superseded by a newer selection or a reset.
            if !state.is_current(request_id) || *state.upload() != UploadState::Loading {
                return (state, Vec::new());
            }
            match outcome {
                Ok(result) => {
                    if let Some(message) = result.application_error() {
                        let error = UploadError::Application(message.to_string());
                        state.fail(&error);
                        vec![Effect::LogError(error.to_string())]
                    } else {
                        let warning = result.warning().map(ToOwned::to_owned);
                        state.complete(result);
                        warning
                            .map(|warning| vec![Effect::LogWarning(warning)])
                            .unwrap_or_default()
                    }
                }
                Err(error) => {
                    state.fail(&error);
                    vec![Effect::LogError(error.to_string())]
                }
            }
        }
        Msg::ResetClicked => {
            state.reset();
            vec![Effect::ClearFileInput]
        }
        Msg::CopyClicked { text } => vec![Effect::CopyToClipboard { text }],
        Msg::DownloadClicked { text } => {
            vec![Effect::DownloadText(TextDownload::extracted_text(text))]
        }
        Msg::ClipboardWritten { result } => match result {
            Ok(()) => vec![Effect::Notify(COPIED_NOTICE.to_string())],
            Err(reason) => vec![Effect::LogWarning(format!(
                "clipboard write failed: {reason}"
            ))],
        },
    };

    (state, effects)
}
