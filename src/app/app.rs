use serde::{Deserialize, Serialize};
use shared::{Config, ConfigError, Engine, TickOutcome, Throttle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::{
    document,
    draw::{draw_dot, draw_star},
    now,
    page::{scroll_offset, viewport_size},
};

/// Errors concerning the [`App`].
#[derive(Debug, Serialize, Deserialize)]
pub struct AppError(pub String);

impl From<ConfigError> for AppError {
    fn from(config_error: ConfigError) -> Self {
        AppError(format!("ConfigError: {config_error}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(json_error: serde_json::Error) -> Self {
        AppError(format!("JsonError: {json_error}"))
    }
}

impl From<AppError> for JsValue {
    fn from(app_error: AppError) -> Self {
        JsValue::from_str(&app_error.0)
    }
}

const CANVAS_Z_INDEX: &str = "9999";

pub struct App {
    config: Config,
    engine: Engine,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    progress_throttle: Throttle,
}

impl App {
    pub fn new(config: Config, seed: u64) -> Result<App, JsValue> {
        let canvas = document()?
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("z-index", CANVAS_Z_INDEX)?;

        document()?
            .body()
            .ok_or_else(|| AppError("document has no body".to_string()))?
            .append_child(&canvas)?;

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| AppError("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut app = App {
            engine: Engine::new(config.sparkle.clone(), seed, now()),
            progress_throttle: Throttle::new(config.progress_throttle_ms),
            config,
            canvas,
            context,
        };

        app.on_resize()?;

        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_idle(&self) -> bool {
        self.engine.is_idle()
    }

    pub fn progress_throttle(&mut self) -> &mut Throttle {
        &mut self.progress_throttle
    }

    /// Returns whether a star was spawned.
    pub fn on_mouse_move(&mut self, event: &MouseEvent) -> bool {
        self.engine
            .on_pointer_move(event.page_x() as f64, event.page_y() as f64, now())
            .is_some()
    }

    /// Pauses or resumes the engine; `true` means the frame loop must be armed.
    pub fn on_visibility_change(&mut self, hidden: bool) -> bool {
        self.engine.set_active(!hidden, now())
    }

    pub fn on_resize(&mut self) -> Result<(), JsValue> {
        let (width, height) = viewport_size()?;

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);

        Ok(())
    }

    pub fn tick(&mut self, time: f64) -> TickOutcome {
        self.engine.tick(time)
    }

    pub fn draw(&self) -> Result<(), JsValue> {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        let scroll = scroll_offset()?;

        for star in self.engine.stars() {
            draw_star(&self.context, star, scroll)?;
        }

        for dot in self.engine.dots() {
            draw_dot(&self.context, dot, scroll)?;
        }

        Ok(())
    }

    /// Detaches the overlay canvas from the document.
    pub fn teardown(&self) {
        self.canvas.remove();
    }
}
