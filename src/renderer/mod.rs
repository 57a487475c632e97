//! Rendering module
//!
//! Draws the simulation onto any `Surface`. The browser canvas is one
//! implementation (see `platform::web`); `RecordingSurface` is another.

pub mod recording;

pub use recording::{DrawCall, RecordingSurface};

use glam::DVec2;
use std::f64::consts::TAU;

use crate::config::AnimConfig;
use crate::sim::SimState;

/// Fixed-size 2D drawing area
///
/// Draw calls cannot fail from the caller's point of view.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_color(&mut self, color: &str);
    fn fill_circle(&mut self, center_x: f64, center_y: f64, radius: f64);
}

/// Draw-time parameters taken from the config
#[derive(Debug, Clone, PartialEq)]
pub struct BallStyle {
    pub radius: f64,
    pub fill_color: String,
    /// Cull balls further than this outside `[0, height]`; `None` draws everything
    pub cull_buffer: Option<f64>,
}

impl BallStyle {
    pub fn from_config(config: &AnimConfig) -> Self {
        Self {
            radius: config.ball_radius,
            fill_color: config.fill_color.clone(),
            cull_buffer: config.cull_offscreen.then_some(config.cull_buffer),
        }
    }

    /// Whether a ball centered at `y` should be drawn on a surface of `height`
    #[inline]
    pub fn visible(&self, y: f64, height: f64) -> bool {
        match self.cull_buffer {
            Some(buffer) => y + buffer >= 0.0 && y - buffer <= height,
            None => true,
        }
    }
}

impl Default for BallStyle {
    fn default() -> Self {
        Self::from_config(&AnimConfig::default())
    }
}

/// Draw one filled ball
pub fn draw_ball<S: Surface + ?Sized>(surface: &mut S, center: DVec2, style: &BallStyle) {
    surface.set_fill_color(&style.fill_color);
    surface.fill_circle(center.x, center.y, style.radius);
}

/// Clear the whole surface once, then draw every ball in entity order
pub fn render<S: Surface + ?Sized>(state: &SimState, surface: &mut S, style: &BallStyle) {
    let width = surface.width();
    let height = surface.height();
    surface.clear(0.0, 0.0, width, height);

    for entity in &state.entities {
        if style.visible(entity.pos.y, height) {
            draw_ball(surface, entity.pos, style);
        }
    }
}

/// Full circle sweep for arc-based backends
pub const FULL_TURN: f64 = TAU;
