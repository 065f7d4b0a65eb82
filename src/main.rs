//! Frog Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use frog_crossing::GameConfig;
    use frog_crossing::input::{InputMapper, KeyEvent, KeyState};
    use frog_crossing::render::dom::DomScene;
    use frog_crossing::session::{Session, Timer};

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Frog Crossing starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(scene) = DomScene::attach(document.clone()) else {
            log::error!("Page has no #svgCanvas element");
            return;
        };

        let config = match scene.canvas_size() {
            Some(size) => GameConfig::default()
                .with_canvas_size(size)
                .unwrap_or_else(|e| {
                    log::warn!("Canvas size {size}: {e}; using default config");
                    GameConfig::default()
                }),
            None => GameConfig::default(),
        };
        let mapper = InputMapper::new(&config);
        let period_ms = config.tick_period_ms;
        let session = Rc::new(RefCell::new(Session::new(config, scene)));

        // Keyboard
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = KeyEvent {
                    code: event.code(),
                    state: KeyState::Down,
                    repeat: event.repeat(),
                };
                if let Some(command) = mapper.map(&key) {
                    session.borrow_mut().dispatch(command);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tick timer; stops itself once the session is cancelled
        {
            let token = session.borrow().cancel_token();
            let handle = Rc::new(Cell::new(None::<i32>));
            let timer_handle = handle.clone();
            let timer_window = window.clone();
            let mut timer = Timer::new(period_ms);
            let closure = Closure::<dyn FnMut()>::new(move || {
                session.borrow_mut().dispatch(timer.fire());
                if token.is_cancelled() {
                    if let Some(id) = timer_handle.take() {
                        timer_window.clear_interval_with_handle(id);
                        log::info!("Tick timer stopped");
                    }
                }
            });
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            ) {
                Ok(id) => handle.set(Some(id)),
                Err(e) => log::error!("Failed to start tick timer: {:?}", e),
            }
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Seed for the headless demo player
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SEED: u64 = 0xF206;
/// Ticks before the headless demo gives up
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICK_BUDGET: u64 = 60_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use frog_crossing::autopilot::Autopilot;
    use frog_crossing::render::Scene;
    use frog_crossing::session::{EventQueue, Session, Timer};
    use frog_crossing::GameConfig;

    env_logger::init();
    log::info!("Frog Crossing (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the playable version");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("{path}: {e}; using default config");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };

    let mut autopilot = Autopilot::new(DEMO_SEED, &config);
    let mut timer = Timer::new(config.tick_period_ms);
    let mut queue = EventQueue::new();
    let mut session = Session::new(config, Scene::new());

    while !session.is_cancelled() && timer.elapsed() < DEMO_TICK_BUDGET {
        if let Some(command) = autopilot.poll() {
            queue.push(command);
        }
        queue.push(timer.fire());
        session.drain(&mut queue);
    }

    let state = session.state();
    log::info!(
        "Demo ended at tick {}: score {}, lives {}, {} goals left, game over: {}",
        state.tick,
        state.score,
        state.frog_lives,
        state.goals.len(),
        state.game_over
    );

    let config = session.config();
    print!(
        "{}",
        session
            .sink()
            .to_svg(config.canvas_size, config.frog_width, config.frog_height)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
