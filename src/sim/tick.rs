//! Per-frame simulation step
//!
//! Advances the clock from a host timestamp, then moves every ball and applies
//! the bounce rule. No drawing happens here.

use super::state::{Direction, Entity, SimState};
use crate::ms_to_seconds;

/// Advance the clock to the host timestamp `ms` (milliseconds)
///
/// Entities are left untouched. On the first call `prev_time` is 0, so the first
/// delta is the whole first timestamp in seconds and can produce one large jump.
pub fn advance_clock(state: SimState, ms: f64) -> SimState {
    let prev_time = state.cur_time;
    let cur_time = ms_to_seconds(ms);
    SimState {
        prev_time,
        cur_time,
        delta: cur_time - prev_time,
        frame: state.frame + 1,
        ..state
    }
}

/// Bounce rule, evaluated on the post-displacement position
///
/// Does not consult the current direction: anything past `min_y` heads down,
/// anything past `max_y` heads up, everything else keeps going.
#[inline]
pub fn next_direction(y: f64, current: Direction, min_y: f64, max_y: f64) -> Direction {
    if y < min_y {
        Direction::Down
    } else if y > max_y {
        Direction::Up
    } else {
        current
    }
}

impl Entity {
    /// Move by `speed * delta` in the current direction and apply the bounce rule
    ///
    /// Returns true if the direction changed.
    pub fn advance(&mut self, speed: f64, delta: f64, min_y: f64, max_y: f64) -> bool {
        let dy = speed * delta * self.direction.sign();
        let y = self.pos.y + dy;
        let next = next_direction(y, self.direction, min_y, max_y);
        let flipped = next != self.direction;

        self.pos.y = y;
        self.direction = next;
        flipped
    }
}

/// Move every ball by the last clock delta, in order
pub fn update_entities(state: &mut SimState) {
    let SimState {
        entities,
        speed,
        delta,
        min_y,
        max_y,
        frame,
        ..
    } = state;

    for (i, entity) in entities.iter_mut().enumerate() {
        if entity.advance(*speed, *delta, *min_y, *max_y) {
            log::debug!(
                "frame {}: ball {} bounced at y={:.1}, now {:?}",
                frame,
                i,
                entity.pos.y,
                entity.direction
            );
        }
    }
}

/// One full simulation step: clock then entities
pub fn step(state: SimState, ms: f64) -> SimState {
    let mut next = advance_clock(state, ms);
    update_entities(&mut next);
    log::trace!(
        "frame {} at {:.3}s (dt {:.4}s)",
        next.frame,
        next.cur_time,
        next.delta
    );
    next
}
