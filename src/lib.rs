//! Bounce Anim - balls bouncing vertically on a 2D canvas
//!
//! Core modules:
//! - `sim`: Pure simulation (clock, entity motion, bounce rule)
//! - `renderer`: Drawing surface abstraction and per-frame render
//! - `platform`: Frame scheduling and the self-perpetuating animation loop
//! - `config`: Initial parameters

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{AnimConfig, Spawn, SpawnAnchor};
pub use error::{ConfigError, InitError};

/// Animation constants
pub mod consts {
    /// Vertical speed shared by all balls (pixels/second)
    pub const SPEED: f64 = 200.0;
    /// Ball radius
    pub const BALL_RADIUS: f64 = 5.0;
    /// Ball fill color
    pub const FILL_COLOR: &str = "#f2f2f2";
    /// Distance balls may travel past the top and bottom edges before bouncing
    pub const BOUNDARY_MARGIN: f64 = 20.0;
    /// Grace distance for a whole ball to leave the scene before culling
    pub const CULL_BUFFER: f64 = 25.0;
    /// First frame number
    pub const FIRST_FRAME: u64 = 1;
}

/// Convert a host timestamp in milliseconds to seconds
#[inline]
pub fn ms_to_seconds(ms: f64) -> f64 {
    ms * 0.001
}
