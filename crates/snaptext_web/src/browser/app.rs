use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Uint8Array;
use snaptext_client::{ClientSettings, ReqwestExtractClient};
use snaptext_core::{Effect, SelectedFile};
use snaptext_logging::{snaptext_error, snaptext_info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{EventTarget, File, HtmlInputElement};

use super::dom::BrowserDom;
use super::js_error;
use super::platform::BrowserPlatform;
use crate::{EffectRunner, PlatformError, UploadController};

type Runner = EffectRunner<ReqwestExtractClient, BrowserPlatform>;

/// Wire the page once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    snaptext_logging::initialize_for_browser(log::LevelFilter::Info);

    run().map_err(|err| {
        snaptext_error!("snaptext failed to start: {}", err);
        JsValue::from_str(&err.to_string())
    })
}

fn run() -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::Unsupported("window"))?;
    let document = window
        .document()
        .ok_or(PlatformError::Unsupported("document"))?;
    let origin = window.location().origin().map_err(js_error)?;
    let settings = ClientSettings::for_origin(&origin)?;
    snaptext_info!("Extraction endpoint: {}", settings.endpoint);

    let dom = BrowserDom::lookup(&document)?;
    let file_input = dom.file_input.clone();
    let reset_button = dom.reset_button.clone();
    let copy_button = dom.copy_button.clone();
    let download_button = dom.download_button.clone();

    let app = App {
        controller: Rc::new(RefCell::new(UploadController::new(dom))),
        runner: Rc::new(EffectRunner::new(
            ReqwestExtractClient::new(settings),
            BrowserPlatform::new(window, document),
        )),
    };

    let input = file_input.clone();
    listen(&file_input, "change", app.clone(), move |app| {
        app.on_file_changed(&input)
    })?;
    listen(&reset_button, "click", app.clone(), |app| {
        app.with_controller(|controller| controller.reset())
    })?;
    listen(&copy_button, "click", app.clone(), |app| {
        app.with_controller(|controller| controller.copy_current_text())
    })?;
    listen(&download_button, "click", app, |app| {
        app.with_controller(|controller| controller.download_current_text())
    })?;

    snaptext_info!("snaptext ready");
    Ok(())
}

#[derive(Clone)]
struct App {
    controller: Rc<RefCell<UploadController<BrowserDom>>>,
    runner: Rc<Runner>,
}

impl App {
    fn with_controller(
        &self,
        operation: impl FnOnce(&mut UploadController<BrowserDom>) -> Vec<Effect>,
    ) {
        let effects = operation(&mut self.controller.borrow_mut());
        self.spawn_effects(effects);
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let app = self.clone();
            spawn_local(async move {
                if let Some(msg) = app.runner.run(effect).await {
                    app.with_controller(|controller| controller.dispatch(msg));
                }
            });
        }
    }

    fn on_file_changed(&self, input: &HtmlInputElement) {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            self.with_controller(|controller| controller.handle_file_selected(None));
            return;
        };

        let app = self.clone();
        spawn_local(async move {
            match read_file(&file).await {
                Ok(selected) => {
                    app.with_controller(|controller| controller.handle_file_selected(Some(selected)))
                }
                Err(err) => app.with_controller(|controller| {
                    controller.handle_file_read_failed(file.name(), err.to_string())
                }),
            }
        });
    }
}

async fn read_file(file: &File) -> Result<SelectedFile, PlatformError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}

// Listeners live as long as the page; their closures are never dropped.
fn listen(
    target: &EventTarget,
    event: &str,
    app: App,
    handler: impl Fn(&App) + 'static,
) -> Result<(), PlatformError> {
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| handler(&app));
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
