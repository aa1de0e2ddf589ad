//! Love Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use love_catch::platform::{Dom, FrameClock, FrameLoop};
    use love_catch::renderer::CanvasRenderer;
    use love_catch::sim::{GameState, TickInput, Viewport, tick};
    use love_catch::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        dom: Dom,
        clock: FrameClock,
        input: TickInput,
    }

    impl Game {
        /// Run one simulation step and draw it
        fn frame(&mut self, time: f64) {
            let dt = self.clock.delta_ms(time);
            tick(&mut self.state, &self.input, dt);
            // Pointer position is one-shot
            self.input.pointer_x = None;

            self.renderer.render(&self.state);
            self.flush_events();
        }

        /// Push queued game events to the page
        fn flush_events(&mut self) {
            for event in self.state.drain_events() {
                self.dom.apply(&event);
            }
        }

        /// Re-read the window size and propagate it
        fn refresh_viewport(&mut self) {
            let viewport = read_viewport();
            self.state.resize(viewport);
            if let Err(e) = self.renderer.resize(viewport) {
                log::warn!("Canvas resize failed: {:?}", e);
            }
        }
    }

    fn read_viewport() -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width as f32, height as f32, window.device_pixel_ratio() as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Love Catch starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas element"))?
            .dyn_into()?;

        let viewport = read_viewport();
        let renderer = CanvasRenderer::new(canvas, viewport)?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, viewport, Tuning::load()),
            renderer,
            dom: Dom::from_document(&document),
            clock: FrameClock::new(),
            input: TickInput::default(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone())?;
        setup_buttons(&document, game.clone())?;

        let frame_game = game.clone();
        let frame_loop = Rc::new(FrameLoop::start(move |time| frame_game.borrow_mut().frame(time))?);
        setup_visibility(&document, game.clone(), frame_loop)?;

        log::info!("Love Catch running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Mouse move - basket follows the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.player.is_some() {
                    g.input.pointer_x = Some(event.client_x() as f32);
                }
            });
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move - non-passive so scrolling can be suppressed
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut g = game.borrow_mut();
                if g.state.player.is_none() {
                    return;
                }
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    g.input.pointer_x = Some(touch.client_x() as f32);
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Keyboard steering
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = true,
                    "ArrowRight" | "d" | "D" => g.input.right = true,
                    "i" | "I" => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = false,
                    "ArrowRight" | "d" | "D" => g.input.right = false,
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Resize - rescale the canvas and re-anchor the basket
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().refresh_viewport();
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Pause the loop while the tab is hidden
    fn setup_visibility(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
        frame_loop: Rc<FrameLoop>,
    ) -> Result<(), JsValue> {
        let doc = document.clone();
        // The listener owns the loop, so it lives as long as the page
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if doc.hidden() {
                frame_loop.stop();
                log::debug!("Frame loop paused");
                return;
            }
            game.borrow_mut().clock.reset();
            if let Err(e) = frame_loop.resume() {
                log::error!("Failed to resume frame loop: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Start
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.refresh_viewport();
                g.state.start_session();
                g.flush_events();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        } else {
            log::warn!("#start-btn not found");
        }

        // Yes
        if let Some(btn) = document.get_element_by_id("yes-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.accept();
                g.flush_events();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        } else {
            log::warn!("#yes-btn not found");
        }

        // No - runs away on hover/touch
        if let Some(btn) = document.get_element_by_id("no-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                let size = g.dom.decline_size();
                g.state.decline_activated(size);
                g.flush_events();
            });
            btn.add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref())?;
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            btn.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        } else {
            log::warn!("#no-btn not found");
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Love Catch failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Love Catch (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(12345);

    headless_session(seed);
}

/// Play a full session with the autopilot and log what happens
#[cfg(not(target_arch = "wasm32"))]
fn headless_session(seed: u64) {
    use glam::Vec2;
    use love_catch::consts::FRAME_DT_MS;
    use love_catch::sim::{GamePhase, GameState, TickInput, Viewport, tick};
    use love_catch::tuning::Tuning;

    const MAX_FRAMES: u64 = 60 * 60 * 5;

    let mut state = GameState::new(seed, Viewport::default(), Tuning::load());
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    state.start_session();
    while state.frame < MAX_FRAMES && !(state.phase == GamePhase::Proposal && state.proposal_revealed) {
        tick(&mut state, &input, FRAME_DT_MS);
        for event in state.drain_events() {
            log::debug!("frame {}: {:?}", state.frame, event);
        }
    }

    if state.phase != GamePhase::Proposal {
        log::warn!("Autopilot gave up after {} frames at score {}", state.frame, state.score);
        return;
    }
    log::info!("Proposal shown after {} frames", state.frame);

    // Chase the decline button a few times, then say yes
    let button = Vec2::new(96.0, 44.0);
    for _ in 0..3 {
        if let Some(pos) = state.decline_activated(button) {
            log::info!("Decline button ran to ({:.0}, {:.0})", pos.x, pos.y);
        }
    }
    state.accept();

    while !state.particles.is_empty() && state.frame < MAX_FRAMES {
        tick(&mut state, &input, FRAME_DT_MS);
    }
    state.drain_events();

    println!(
        "Session {} (seed {}): score {}/{}, finished at frame {}",
        state.session, seed, state.score, state.tuning.win_score, state.frame
    );
}
