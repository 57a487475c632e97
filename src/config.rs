//! Animation parameters
//!
//! Fixed at startup. `AnimConfig::default()` is the compiled-in configuration.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Direction;

/// Vertical anchor a ball spawns at, resolved against the surface height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnAnchor {
    /// y = 0
    Top,
    /// y = height / 2
    Middle,
    /// y = height
    Bottom,
}

impl SpawnAnchor {
    pub fn resolve(&self, height: f64) -> f64 {
        match self {
            SpawnAnchor::Top => 0.0,
            SpawnAnchor::Middle => height / 2.0,
            SpawnAnchor::Bottom => height,
        }
    }
}

/// Initial placement of one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub x: f64,
    pub anchor: SpawnAnchor,
    pub direction: Direction,
}

impl Spawn {
    pub const fn new(x: f64, anchor: SpawnAnchor, direction: Direction) -> Self {
        Self {
            x,
            anchor,
            direction,
        }
    }
}

/// Default balls: one at the top heading down, one at the bottom heading up
pub const DEFAULT_SPAWNS: [Spawn; 2] = [
    Spawn::new(20.0, SpawnAnchor::Top, Direction::Down),
    Spawn::new(35.0, SpawnAnchor::Bottom, Direction::Up),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimConfig {
    /// Vertical speed (pixels/second)
    pub speed: f64,
    pub ball_radius: f64,
    /// CSS color string
    pub fill_color: String,
    /// Travel allowed past each edge before the bounce fires
    pub boundary_margin: f64,
    /// Balls in update and draw order
    pub spawns: Vec<Spawn>,

    // === Culling ===
    /// Skip drawing balls that are fully outside the surface
    pub cull_offscreen: bool,
    pub cull_buffer: f64,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            speed: SPEED,
            ball_radius: BALL_RADIUS,
            fill_color: FILL_COLOR.to_string(),
            boundary_margin: BOUNDARY_MARGIN,
            spawns: DEFAULT_SPAWNS.to_vec(),

            cull_offscreen: false,
            cull_buffer: CULL_BUFFER,
        }
    }
}

impl AnimConfig {
    /// Replace the spawn list
    pub fn with_spawns(mut self, spawns: impl IntoIterator<Item = Spawn>) -> Self {
        self.spawns = spawns.into_iter().collect();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.ball_radius));
        }
        if self.fill_color.trim().is_empty() {
            return Err(ConfigError::EmptyFillColor);
        }
        if !self.boundary_margin.is_finite() || self.boundary_margin < 0.0 {
            return Err(ConfigError::InvalidMargin(self.boundary_margin));
        }
        if !self.cull_buffer.is_finite() || self.cull_buffer < 0.0 {
            return Err(ConfigError::InvalidCullBuffer(self.cull_buffer));
        }
        Ok(())
    }

    /// Vertical bounds `(min_y, max_y)` for a surface of the given height
    pub fn bounds(&self, height: f64) -> (f64, f64) {
        (-self.boundary_margin, height + self.boundary_margin)
    }
}
