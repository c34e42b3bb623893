use js_sys::wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, HtmlCanvasElement, WebGlContextAttributes};

use crate::{error::Error, gl::GL};

pub(crate) fn document() -> Result<Document, Error> {
    web_sys::window()
        .ok_or(Error::window_not_found())
        .and_then(|w| w.document().ok_or(Error::document_not_found()))
}

pub(crate) fn get_canvas_by_id(canvas_id: &str) -> Result<HtmlCanvasElement, Error> {
    let document = document()?;
    document
        .query_selector(canvas_id)
        .map_err(|_| Error::canvas_not_found())?
        .ok_or(Error::canvas_not_found())?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| Error::canvas_not_found())
}

/// Retrieves a WebGL 1 context; `premultiplied_alpha` is only requested when
/// set, leaving the browser default otherwise.
pub(crate) fn get_webgl_context(
    canvas: &HtmlCanvasElement,
    premultiplied_alpha: Option<bool>,
) -> Result<GL, Error> {
    let context = match premultiplied_alpha {
        Some(premultiplied) => {
            let attributes = WebGlContextAttributes::new();
            attributes.set_premultiplied_alpha(premultiplied);
            canvas.get_context_with_context_options("webgl", &attributes)
        },
        None => canvas.get_context("webgl"),
    };

    context
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<GL>()
        .map_err(|_| Error::webgl_context_failed())
}

/// `log` sink writing to the browser console.
struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message: JsValue = format!("[{}] {}", record.target(), record.args()).into();
        match record.level() {
            log::Level::Error => console::error_1(&message),
            log::Level::Warn => console::warn_1(&message),
            log::Level::Info => console::info_1(&message),
            log::Level::Debug | log::Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Routes `log` records to the browser console.
///
/// Only the first call installs the logger; later calls just adjust the level.
pub fn init_console_logging(level: log::LevelFilter) {
    if log::set_logger(&CONSOLE_LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}
