mod app;
mod draw;
mod listener;
mod logging;
mod page;

use std::{cell::RefCell, rc::Rc};

use app::{App, AppError, FrameLoop};
use listener::Listener;
use page::{apply_scheme, current_scheme, on_toc_click, update_reading_progress};
use shared::{tag, Config, SchemeSetting};
use tracing::info;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Event, MouseEvent};

const CONFIG_ELEMENT_ID: &str = "sparkle-config";

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

fn document() -> Result<web_sys::Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
fn now() -> f64 {
    match window().ok().and_then(|window| window.performance()) {
        Some(performance) => performance.now(),
        None => js_sys::Date::now(),
    }
}

fn warn(value: &JsValue) {
    console::warn_1(value);
}

struct Runtime {
    app: Rc<RefCell<App>>,
    frame_loop: Rc<FrameLoop>,
    _listeners: Vec<Listener>,
}

impl Runtime {
    /// Tears everything down even when cancelling the pending frame fails.
    fn shutdown(self) -> Result<(), JsValue> {
        let stopped = self.frame_loop.stop();
        self.app.borrow().teardown();

        stopped
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = RefCell::new(None);
}

fn read_config() -> Result<Config, AppError> {
    let text = document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let config = match text {
        Some(text) => serde_json::from_str::<Config>(&text)?,
        None => Config::default(),
    };

    config.validate()?;

    Ok(config)
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    let config = read_config().unwrap_or_else(|err| {
        warn(&format!("{}, using defaults", err.0).into());
        Config::default()
    });

    launch(config)
}

/// Restarts every page effect with settings passed from JavaScript.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(value: JsValue) -> Result<(), JsValue> {
    logging::init();

    let config: Config = serde_wasm_bindgen::from_value(value)?;
    config.validate().map_err(AppError::from)?;

    stop()?;
    launch(config)
}

/// Cancels the animation loop, removes every listener and the overlay canvas.
#[wasm_bindgen]
pub fn stop() -> Result<(), JsValue> {
    match RUNTIME.with(|runtime| runtime.borrow_mut().take()) {
        Some(runtime) => runtime.shutdown(),
        None => Ok(()),
    }
}

#[wasm_bindgen(js_name = toggleScheme)]
pub fn toggle_scheme() -> Result<String, JsValue> {
    let setting = RUNTIME.with(|runtime| {
        runtime
            .borrow()
            .as_ref()
            .map(|runtime| runtime.app.borrow().config().scheme)
            .unwrap_or(SchemeSetting::System)
    });

    let scheme = current_scheme(setting)?.toggle();
    apply_scheme(scheme)?;

    Ok(scheme.to_string())
}

/// Background colour for a tag pill; pass the tag's index within a post to keep
/// neighbouring tags apart.
#[wasm_bindgen(js_name = tagColor)]
pub fn tag_color(name: &str, tag_index: Option<usize>) -> String {
    match tag_index {
        Some(tag_index) => tag::tag_color_for_post(name, tag_index),
        None => tag::tag_color(name),
    }
    .to_string()
}

/// Forwards a visibility change to the engine and restarts the frame loop when
/// particles are left over from before the page was hidden.
fn resume_if_needed(app: &RefCell<App>, frame_loop: &FrameLoop, hidden: bool) {
    let needs_frames = app.borrow_mut().on_visibility_change(hidden);

    if needs_frames {
        if let Err(err) = frame_loop.arm() {
            warn(&err);
        }
    }
}

fn launch(config: Config) -> Result<(), JsValue> {
    apply_scheme(current_scheme(config.scheme)?)?;

    let config_capacity = config.sparkle.capacity;
    let seed = js_sys::Math::random().to_bits() ^ now().to_bits();
    let app = Rc::new(RefCell::new(App::new(config, seed)?));
    let frame_loop = Rc::new(FrameLoop::new());

    {
        let app = app.clone();
        let frame_loop_inner = frame_loop.clone();

        frame_loop.install(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            frame_loop_inner.fired();

            let mut app = app.borrow_mut();
            app.tick(time);

            if let Err(err) = app.draw() {
                warn(&err);
            }

            if !app.is_idle() {
                if let Err(err) = frame_loop_inner.arm() {
                    warn(&err);
                }
            }
        }));
    }

    let page_window = window()?;
    let page_document = document()?;
    let mut listeners = Vec::new();

    {
        let app = app.clone();
        let frame_loop = frame_loop.clone();

        listeners.push(Listener::new(
            &page_document,
            "mousemove",
            true,
            Closure::new(move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };

                if app.borrow_mut().on_mouse_move(event) {
                    if let Err(err) = frame_loop.arm() {
                        warn(&err);
                    }
                }
            }),
        )?);
    }

    {
        let app = app.clone();
        let frame_loop = frame_loop.clone();
        let visibility_document = page_document.clone();

        // Without visibility events the engine simply stays active.
        match Listener::new(
            &page_document,
            "visibilitychange",
            false,
            Closure::new(move |_: Event| {
                resume_if_needed(&app, &frame_loop, visibility_document.hidden());
            }),
        ) {
            Ok(listener) => listeners.push(listener),
            Err(err) => warn(&err),
        }
    }

    {
        let app = app.clone();

        listeners.push(Listener::new(
            &page_window,
            "scroll",
            true,
            Closure::new(move |_: Event| {
                let mut app = app.borrow_mut();

                if let Err(err) = update_reading_progress(app.progress_throttle(), now()) {
                    warn(&err);
                }
            }),
        )?);
    }

    {
        let app = app.clone();

        listeners.push(Listener::new(
            &page_window,
            "resize",
            true,
            Closure::new(move |_: Event| {
                let mut app = app.borrow_mut();

                let result = app
                    .on_resize()
                    .and_then(|_| update_reading_progress(app.progress_throttle(), now()));

                if let Err(err) = result {
                    warn(&err);
                }
            }),
        )?);
    }

    {
        let app = app.clone();

        listeners.push(Listener::new(
            &page_document,
            "click",
            false,
            Closure::new(move |event: Event| {
                let offset = app.borrow().config().toc_offset;

                if let Err(err) = on_toc_click(&event, offset) {
                    warn(&err);
                }
            }),
        )?);
    }

    {
        let app = app.clone();
        let frame_loop = frame_loop.clone();

        listeners.push(Listener::new(
            &page_window,
            "pagehide",
            false,
            Closure::new(move |_: Event| {
                app.borrow_mut().on_visibility_change(true);

                if let Err(err) = frame_loop.cancel() {
                    warn(&err);
                }
            }),
        )?);
    }

    {
        let app = app.clone();
        let frame_loop = frame_loop.clone();
        let show_document = page_document.clone();

        // Pages restored from the back/forward cache come back through here.
        listeners.push(Listener::new(
            &page_window,
            "pageshow",
            false,
            Closure::new(move |_: Event| {
                resume_if_needed(&app, &frame_loop, show_document.hidden());
            }),
        )?);
    }

    update_reading_progress(app.borrow_mut().progress_throttle(), now())?;

    info!(capacity = config_capacity, "sparkle started");

    RUNTIME.with(|runtime| {
        runtime.replace(Some(Runtime {
            app,
            frame_loop,
            _listeners: listeners,
        }))
    });

    Ok(())
}
