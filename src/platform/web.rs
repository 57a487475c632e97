//! Browser host: 2D canvas surface and requestAnimationFrame scheduling

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{FrameCallback, FrameScheduler};
use crate::error::InitError;
use crate::renderer::{FULL_TURN, Surface};

impl From<InitError> for JsValue {
    fn from(err: InitError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Look up a canvas element by id
pub fn acquire_canvas(id: &str) -> Result<HtmlCanvasElement, InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| InitError::MissingCanvas(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| InitError::NotACanvas(id.to_string()))
}

/// Canvas 2D context; size is read once at construction
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, InitError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| InitError::NoContext(format!("{e:?}")))?
            .ok_or_else(|| InitError::NoContext("context is null".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| InitError::NoContext("not a 2d context".to_string()))?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        self.ctx.begin_path();
        // Only throws for a negative radius
        let _ = self.ctx.arc(center_x, center_y, radius, 0.0, FULL_TURN);
        self.ctx.fill();
    }
}

/// `window.requestAnimationFrame`
pub struct RafScheduler {
    window: web_sys::Window,
}

impl RafScheduler {
    pub fn new() -> Result<Self, InitError> {
        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        Ok(Self { window })
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, callback: FrameCallback) {
        // Frees itself after the single invocation
        let closure = Closure::once_into_js(move |time: f64| callback(time));
        if let Err(e) = self
            .window
            .request_animation_frame(closure.unchecked_ref::<js_sys::Function>())
        {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
