//! Bounce Anim entry point
//!
//! Handles platform-specific initialization and starts the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_anim {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use bounce_anim::AnimConfig;
    use bounce_anim::InitError;
    use bounce_anim::platform::web::{CanvasSurface, RafScheduler, acquire_canvas};
    use bounce_anim::platform::{AnimationLoop, schedule_next};

    const CANVAS_ID: &str = "canvas";

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        // Module scripts usually run after parsing, but wait if the DOM isn't ready yet
        if document.ready_state() == "loading" {
            let closure = Closure::once(move |_event: web_sys::Event| {
                if let Err(e) = init() {
                    log::error!("Initialization failed: {}", e);
                    wasm_bindgen::throw_str(&e.to_string());
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
            return Ok(());
        }

        init().map_err(JsValue::from)
    }

    /// Runs once: build the surface and state, register the first frame
    fn init() -> Result<(), InitError> {
        log::info!("Bounce Anim starting...");

        let canvas = acquire_canvas(CANVAS_ID)?;
        let surface = CanvasSurface::new(&canvas)?;
        let anim = AnimationLoop::new(&AnimConfig::default(), surface)?;
        let scheduler = Rc::new(RafScheduler::new()?);

        schedule_next(Rc::new(RefCell::new(anim)), scheduler);

        log::info!("Bounce Anim running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_anim::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bounce_anim::AnimConfig;
    use bounce_anim::InitError;
    use bounce_anim::platform::{AnimationLoop, ManualScheduler, schedule_next};
    use bounce_anim::renderer::RecordingSurface;

    const SURFACE_WIDTH: f64 = 300.0;
    const SURFACE_HEIGHT: f64 = 150.0;
    const REFRESH_MS: f64 = 1000.0 / 60.0;
    /// Five seconds of refreshes
    const FRAMES: u32 = 300;

    /// Headless run: pump a fixed number of 60 Hz refreshes and log the result
    pub fn run() -> Result<(), InitError> {
        let surface = RecordingSurface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        let anim = Rc::new(RefCell::new(AnimationLoop::new(
            &AnimConfig::default(),
            surface,
        )?));
        let scheduler = Rc::new(ManualScheduler::new());
        schedule_next(Rc::clone(&anim), Rc::clone(&scheduler));

        let mut ms = 0.0;
        for _ in 0..FRAMES {
            ms += REFRESH_MS;
            scheduler.fire(ms);
        }
        anim.borrow().cancel_handle().cancel();
        scheduler.fire(ms + REFRESH_MS);

        let anim = anim.borrow();
        let state = anim.state();
        log::info!(
            "Ran {} frames ({:.2}s), {} draw calls",
            state.frame - 1,
            state.cur_time,
            anim.surface().calls().len()
        );
        match serde_json::to_string(state) {
            Ok(json) => log::info!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize state: {}", e),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Anim (native) starting...");
    log::info!("Native mode draws headless - run with `trunk serve` for the canvas version");

    if let Err(e) = native::run() {
        log::error!("Initialization failed: {}", e);
        std::process::exit(1);
    }
}
