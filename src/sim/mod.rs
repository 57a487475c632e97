//! Simulation module
//!
//! All motion logic lives here. This module must stay pure:
//! - Time only enters through the host timestamp passed to `step`
//! - Stable iteration order (entity vector order)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Direction, Entity, SimState};
pub use tick::{advance_clock, next_direction, step, update_entities};
