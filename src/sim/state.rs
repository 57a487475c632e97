//! Simulation state and core types
//!
//! Everything threaded from one frame to the next lives here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::AnimConfig;
use crate::consts::FIRST_FRAME;

/// Vertical travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing y (+1)
    Down,
    /// Decreasing y (-1)
    Up,
}

impl Direction {
    /// Signed unit value, always exactly +1 or -1
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Down => 1.0,
            Direction::Up => -1.0,
        }
    }
}

/// A moving ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// x never changes after creation
    pub pos: DVec2,
    pub direction: Direction,
}

impl Entity {
    pub fn new(x: f64, y: f64, direction: Direction) -> Self {
        Self {
            pos: DVec2::new(x, y),
            direction,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Complete animation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Update and draw order, stable across frames
    pub entities: Vec<Entity>,
    pub speed: f64,
    /// Seconds
    pub prev_time: f64,
    /// Seconds
    pub cur_time: f64,
    /// `cur_time - prev_time` of the last clock advance
    pub delta: f64,
    pub frame: u64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SimState {
    /// Build the initial state for a surface of the given height
    pub fn new(config: &AnimConfig, height: f64) -> Self {
        let (min_y, max_y) = config.bounds(height);
        let entities = config
            .spawns
            .iter()
            .map(|s| Entity::new(s.x, s.anchor.resolve(height), s.direction))
            .collect();

        Self {
            entities,
            speed: config.speed,
            prev_time: 0.0,
            cur_time: 0.0,
            delta: 0.0,
            frame: FIRST_FRAME,
            min_y,
            max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SimState::new(&AnimConfig::default(), 150.0);
        assert_eq!(state.frame, 1);
        assert_eq!(state.prev_time, 0.0);
        assert_eq!(state.cur_time, 0.0);
        assert_eq!(state.speed, 200.0);
        assert_eq!(state.min_y, -20.0);
        assert_eq!(state.max_y, 170.0);

        assert_eq!(state.entities.len(), 2);
        assert_eq!(state.entities[0], Entity::new(20.0, 0.0, Direction::Down));
        assert_eq!(state.entities[1], Entity::new(35.0, 150.0, Direction::Up));
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Down.sign(), 1.0);
        assert_eq!(Direction::Up.sign(), -1.0);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let state = SimState::new(&AnimConfig::default(), 150.0);
        let json = serde_json::to_string(&state).unwrap();
        let back: SimState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
