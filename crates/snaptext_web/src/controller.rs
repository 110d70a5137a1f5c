use snaptext_core::{update, AppState, AppViewModel, Effect, Msg, SelectedFile, UploadState};
use snaptext_logging::{snaptext_debug, snaptext_error, snaptext_warn};

use crate::{render, Dom, DomCommand};

/// Owns the upload state and the page it is rendered into.
///
/// Every operation returns the effects that still need to run asynchronously
/// (preview decoding, upload, clipboard, download, notices). Their completion
/// messages are fed back through [`UploadController::dispatch`].
pub struct UploadController<D: Dom> {
    state: AppState,
    dom: D,
    rendered: Option<AppViewModel>,
}

impl<D: Dom> UploadController<D> {
    pub fn new(dom: D) -> Self {
        let mut controller = Self {
            state: AppState::new(),
            dom,
            rendered: None,
        };
        controller.render();
        controller
    }

    pub fn upload_state(&self) -> &UploadState {
        self.state.upload()
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Starts an upload cycle for `file`; an empty selection does nothing.
    pub fn handle_file_selected(&mut self, file: Option<SelectedFile>) -> Vec<Effect> {
        self.dispatch(Msg::FileSelected(file))
    }

    /// Reports a selected file whose bytes could not be read.
    pub fn handle_file_read_failed(&mut self, name: String, reason: String) -> Vec<Effect> {
        self.dispatch(Msg::FileReadFailed { name, reason })
    }

    pub fn reset(&mut self) -> Vec<Effect> {
        self.dispatch(Msg::ResetClicked)
    }

    pub fn copy_current_text(&mut self) -> Vec<Effect> {
        let text = self.dom.text_value();
        self.dispatch(Msg::CopyClicked { text })
    }

    pub fn download_current_text(&mut self) -> Vec<Effect> {
        let text = self.dom.text_value();
        self.dispatch(Msg::DownloadClicked { text })
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        snaptext_debug!("dispatch {}", describe(&msg));
        // The text area is editable, so after a reset the page cannot be
        // trusted to match the last rendered view.
        let full_redraw = matches!(msg, Msg::ResetClicked);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if self.state.consume_dirty() || full_redraw {
            if full_redraw {
                self.rendered = None;
            }
            self.render();
        }

        effects
            .into_iter()
            .filter_map(|effect| self.apply_local(effect))
            .collect()
    }

    fn render(&mut self) {
        let view = self.state.view();
        for command in render(self.rendered.as_ref(), &view) {
            self.apply(command);
        }
        self.rendered = Some(view);
    }

    fn apply(&mut self, command: DomCommand) {
        if let Err(err) = self.dom.apply(command) {
            snaptext_error!("Failed to update page: {}", err);
        }
    }

    /// Runs effects that only touch the page or the log; hands back the rest.
    fn apply_local(&mut self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::ClearFileInput => {
                self.apply(DomCommand::ClearFileInput);
                None
            }
            Effect::LogWarning(warning) => {
                snaptext_warn!("Warning: {}", warning);
                None
            }
            Effect::LogError(message) => {
                snaptext_error!("API Error: {}", message);
                None
            }
            other => Some(other),
        }
    }
}

// File bytes stay out of the log.
fn describe(msg: &Msg) -> String {
    match msg {
        Msg::FileSelected(Some(file)) => format!(
            "FileSelected({}, {} bytes, {})",
            file.name,
            file.bytes.len(),
            file.mime
        ),
        Msg::PreviewDecoded { request_id, url } => {
            format!("PreviewDecoded(#{request_id}, {} chars)", url.len())
        }
        other => format!("{other:?}"),
    }
}
