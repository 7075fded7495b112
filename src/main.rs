//! Drop Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::Result;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use drop_dodge::GameLoop;
    use drop_dodge::platform::web::{self, DomScoreSink, PerformanceClock, RafScheduler};
    use drop_dodge::renderer::CanvasSurface;

    type WebGame = GameLoop<PerformanceClock, RafScheduler, CanvasSurface, DomScoreSink>;
    type SharedGame = Rc<RefCell<WebGame>>;

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)?;

        log::info!("Drop Dodge starting...");

        let window = web::window()?;
        let document = web::document()?;
        let canvas = web::canvas(&document)?;
        let tuning = web::load_tuning(&document);

        canvas.set_width(tuning.playfield.width as u32);
        canvas.set_height(tuning.playfield.height as u32);

        let surface = CanvasSurface::new(web::context(&canvas)?);
        let clock = PerformanceClock::new(&window)?;
        let scheduler = RafScheduler::new(window);
        let slot = scheduler.callback_slot();
        let score_sink = DomScoreSink::find(&document);

        let seed = js_sys::Date::now() as u64;
        let game: SharedGame = Rc::new(RefCell::new(GameLoop::new(
            seed, tuning, clock, scheduler, surface, score_sink,
        )));

        // Frame callback: the scheduler hands this closure to requestAnimationFrame
        {
            let game = game.clone();
            *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                game.borrow_mut().tick();
            }));
        }

        setup_keyboard(game.clone())?;
        setup_touch(&canvas, game.clone());
        setup_restart(&canvas, game.clone());

        game.borrow_mut().start()?;
        log::info!("Drop Dodge running (seed {})", seed);
        Ok(())
    }

    fn setup_keyboard(game: SharedGame) -> Result<()> {
        let document = web::document()?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input_mut().key_down(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input_mut().key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn setup_touch(canvas: &HtmlCanvasElement, game: SharedGame) {
        // Touch start - remember where the drag began
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut()
                        .input_mut()
                        .touch_start(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - steer by drag direction
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut()
                        .input_mut()
                        .touch_move(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - stop steering
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().input_mut().touch_end();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart(canvas: &HtmlCanvasElement, game: SharedGame) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if let Err(e) = game.borrow_mut().on_restart_request() {
                log::error!("Restart failed: {:#}", e);
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless_run {
    use anyhow::{Context, Result};
    use serde::Serialize;

    use drop_dodge::platform::{ManualClock, ManualScheduler, RecordingScoreSink};
    use drop_dodge::renderer::RecordingSurface;
    use drop_dodge::{GameLoop, Tuning};

    /// Roughly one 60 Hz display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Ten minutes of play at 60 Hz
    const MAX_FRAMES: u64 = 36_000;
    const DEFAULT_SEED: u64 = 42;

    /// Outcome of a headless session, printed as JSON
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub score: u32,
        pub elapsed_secs: f32,
        pub ticks: u64,
        pub game_over: bool,
    }

    /// Play one run with a scripted weaving input until hit or out of frames
    pub fn run(seed: u64) -> Result<RunSummary> {
        let mut game = GameLoop::new(
            seed,
            Tuning::default(),
            ManualClock::new(0.0),
            ManualScheduler::new(),
            RecordingSurface::new(),
            RecordingScoreSink::new(),
        );
        game.start()?;

        let mut frames = 0;
        while frames < MAX_FRAMES && game.scheduler_mut().fire().is_some() {
            // Sweep across the playfield in one-second strokes
            let stroke = (frames / 60) % 2 == 0;
            let input = game.input_mut();
            input.left = stroke;
            input.right = !stroke;

            game.clock().advance(FRAME_MS);
            game.tick();
            frames += 1;
        }

        let state = game.state();
        if let Some(line) = game.score_sink().last() {
            log::debug!("Final score line: {}", line);
        }
        Ok(RunSummary {
            seed,
            score: state.score,
            elapsed_secs: state.elapsed_secs,
            ticks: state.time_ticks,
            game_over: state.is_over(),
        })
    }

    pub fn main() -> Result<()> {
        env_logger::init();
        log::info!("Drop Dodge (native) starting...");
        log::info!("Native mode runs a headless session - build for wasm32 to play");

        let seed = match std::env::args().nth(1) {
            Some(arg) => arg
                .parse()
                .with_context(|| format!("seed must be an unsigned integer, got {:?}", arg))?,
            None => DEFAULT_SEED,
        };

        let summary = run(seed)?;
        log::info!(
            "Session finished: score {} after {:.1}s ({} ticks)",
            summary.score,
            summary.elapsed_secs,
            summary.ticks
        );
        println!("{}", serde_json::to_string(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless_run::main()
}
