//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame scheduling (requestAnimationFrame on web, manual pumping elsewhere)
//! - The drawing surface (2D canvas on web)
//!
//! The loop itself is host-agnostic: `schedule_next` registers one frame
//! callback, and that callback registers the next one until cancelled.

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::AnimConfig;
use crate::error::InitError;
use crate::renderer::{BallStyle, Surface, render};
use crate::sim::{SimState, step};

/// One-shot frame callback, receives the host timestamp in milliseconds
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Host capability that runs a callback before the next display refresh
pub trait FrameScheduler {
    fn schedule(&self, callback: FrameCallback);
}

/// Whether the loop wants another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Shared stop flag, checked once per frame
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Rc<Cell<bool>>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Owns the simulation state and the surface it is drawn on
pub struct AnimationLoop<S: Surface> {
    state: SimState,
    surface: S,
    style: BallStyle,
    cancel: CancelHandle,
}

impl<S: Surface> AnimationLoop<S> {
    /// Build the initial state against the surface height
    pub fn new(config: &AnimConfig, surface: S) -> Result<Self, InitError> {
        config.validate()?;
        let state = SimState::new(config, surface.height());
        log::info!(
            "Animation initialized: {}x{} surface, y bounds [{}, {}], {} balls",
            surface.width(),
            surface.height(),
            state.min_y,
            state.max_y,
            state.entities.len()
        );

        Ok(Self {
            state,
            surface,
            style: BallStyle::from_config(config),
            cancel: CancelHandle::default(),
        })
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Run one frame: step the simulation to `ms`, then redraw
    pub fn frame(&mut self, ms: f64) -> LoopControl {
        if self.cancel.is_cancelled() {
            log::info!("Animation loop cancelled");
            return LoopControl::Stop;
        }

        let state = std::mem::take(&mut self.state);
        self.state = step(state, ms);
        render(&self.state, &mut self.surface, &self.style);
        LoopControl::Continue
    }
}

/// Register the next frame of `anim` with `scheduler`
///
/// Each callback runs one frame and, unless the loop stopped, registers the next.
pub fn schedule_next<S, F>(anim: Rc<RefCell<AnimationLoop<S>>>, scheduler: Rc<F>)
where
    S: Surface + 'static,
    F: FrameScheduler + ?Sized + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.schedule(Box::new(move |ms| {
        let control = anim.borrow_mut().frame(ms);
        if control == LoopControl::Continue {
            schedule_next(anim, next);
        }
    }));
}

/// Scheduler without a display; the owner decides when a refresh happens
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Simulate one display refresh at `ms`
    ///
    /// Runs only callbacks registered before this refresh. Returns how many ran.
    pub fn fire(&self, ms: f64) -> usize {
        let due: Vec<FrameCallback> = self.pending.borrow_mut().drain(..).collect();
        let count = due.len();
        for callback in due {
            callback(ms);
        }
        count
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::renderer::{DrawCall, RecordingSurface};
    use crate::sim::Direction;

    fn start() -> (Rc<RefCell<AnimationLoop<RecordingSurface>>>, Rc<ManualScheduler>) {
        let surface = RecordingSurface::new(300.0, 150.0);
        let anim = AnimationLoop::new(&AnimConfig::default(), surface).unwrap();
        let anim = Rc::new(RefCell::new(anim));
        let scheduler = Rc::new(ManualScheduler::new());
        schedule_next(Rc::clone(&anim), Rc::clone(&scheduler));
        (anim, scheduler)
    }

    #[test]
    fn test_initializer_registers_first_frame() {
        let (anim, scheduler) = start();
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(anim.borrow().state().frame, 1);
        assert!(anim.borrow().surface().calls().is_empty());
    }

    #[test]
    fn test_loop_reschedules_itself() {
        let (anim, scheduler) = start();

        assert_eq!(scheduler.fire(16.7), 1);
        assert_eq!(scheduler.pending(), 1);
        {
            let anim = anim.borrow();
            let state = anim.state();
            assert_eq!(state.frame, 2);
            assert!((state.delta - 0.0167).abs() < 1e-9);
        }

        assert_eq!(scheduler.fire(33.4), 1);
        assert_eq!(scheduler.fire(50.1), 1);
        assert_eq!(scheduler.pending(), 1);

        let anim = anim.borrow();
        assert_eq!(anim.state().frame, 4);
        assert_eq!(anim.surface().clear_count(), 3);
    }

    #[test]
    fn test_frame_draws_entities_in_order() {
        let (anim, scheduler) = start();
        scheduler.fire(100.0);

        let anim = anim.borrow();
        let frame = anim.surface().last_frame();
        assert_eq!(frame.len(), 5);
        assert!(matches!(frame[0], DrawCall::Clear { .. }));
        assert_eq!(
            frame[2],
            DrawCall::FillCircle {
                x: 20.0,
                y: anim.state().entities[0].y(),
                radius: 5.0
            }
        );
        assert_eq!(
            frame[4],
            DrawCall::FillCircle {
                x: 35.0,
                y: anim.state().entities[1].y(),
                radius: 5.0
            }
        );
    }

    #[test]
    fn test_cancel_stops_loop() {
        let (anim, scheduler) = start();
        scheduler.fire(16.0);
        let calls = anim.borrow().surface().calls().len();

        anim.borrow().cancel_handle().cancel();
        assert_eq!(scheduler.fire(32.0), 1);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.fire(48.0), 0);

        let anim = anim.borrow();
        assert_eq!(anim.state().frame, 2);
        assert_eq!(anim.surface().calls().len(), calls);
    }

    #[test]
    fn test_long_run_keeps_direction_invariant() {
        let (anim, scheduler) = start();
        let mut ms = 0.0;
        for _ in 0..1200 {
            ms += 1000.0 / 60.0;
            scheduler.fire(ms);
        }

        let anim = anim.borrow();
        let state = anim.state();
        assert_eq!(state.frame, 1201);
        for e in &state.entities {
            assert!(matches!(e.direction, Direction::Down | Direction::Up));
            assert!(e.y() >= state.min_y - 4.0 && e.y() <= state.max_y + 4.0);
        }
    }

    #[test]
    fn test_negative_margin_is_fatal() {
        let config = AnimConfig {
            boundary_margin: -100.0,
            ..Default::default()
        };
        let result = AnimationLoop::new(&config, RecordingSurface::new(300.0, 150.0));
        assert!(matches!(
            result,
            Err(InitError::Config(ConfigError::InvalidMargin(_)))
        ));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = AnimConfig {
            ball_radius: -1.0,
            ..Default::default()
        };
        let result = AnimationLoop::new(&config, RecordingSurface::new(300.0, 150.0));
        assert!(matches!(result, Err(InitError::Config(_))));
    }
}
