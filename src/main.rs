//! Heartbreak entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use heartbreak::renderer::canvas::CanvasSurface;
    use heartbreak::renderer::draw_frame;
    use heartbreak::sim::{GameState, PcgJitter, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        jitter: PcgJitter,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Heartbreak starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let surface = CanvasSurface::new(&canvas).expect("Failed to get 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(),
            input: TickInput::default(),
            jitter: PcgJitter::seeded(seed),
            surface,
        }));

        log::info!("Game initialized with jitter seed: {}", seed);

        setup_key_handlers(game.clone());
        setup_start_button(game.clone());
        setup_play_again_button(game.clone());

        // Show the board behind the start button before the first tick.
        {
            let g = &mut *game.borrow_mut();
            draw_frame(&mut g.surface, &g.state);
        }

        log::info!("Heartbreak ready - waiting for start");
    }

    /// Edge-triggered arrow-key intents: keydown sets, keyup clears.
    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Right" | "ArrowRight" => g.input.move_right = true,
                    "Left" | "ArrowLeft" => g.input.move_left = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Right" | "ArrowRight" => g.input.move_right = false,
                    "Left" | "ArrowLeft" => g.input.move_left = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                set_hidden(&document, "start-btn", true);

                game.borrow_mut().state.start();
                log::info!("Session started");
                request_animation_frame(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_again_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("play-again-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                set_hidden(&document, "overlay", true);

                game.borrow_mut().state.restart();
                log::info!("Session restarted");
                request_animation_frame(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One tick per animation frame. The next frame is scheduled only while
    /// the session stays active, so a terminal tick stops the loop.
    fn game_loop(game: Rc<RefCell<Game>>) {
        let active = {
            let g = &mut *game.borrow_mut();
            let input = g.input;
            let outcome = tick(&mut g.state, &input, &mut g.jitter);
            draw_frame(&mut g.surface, &g.state);

            if let Some(message) = outcome.terminal_message() {
                log::info!("Session over: {}", message);
                show_overlay(message);
            }
            g.state.phase.is_active()
        };

        if active {
            request_animation_frame(game);
        }
    }

    fn show_overlay(message: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("overlay-message") {
            el.set_text_content(Some(message));
        }
        set_hidden(&document, "overlay", false);
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use heartbreak::sim::{GameState, PcgJitter, TickInput, TickOutcome, tick};

    env_logger::init();
    log::info!("Heartbreak (native) starting...");
    log::info!("The playable game is web-only - serve it with `trunk serve`");

    // Headless smoke run: nobody moves the paddle, the serve rallies until
    // the lives run out (or the heart somehow breaks first).
    let mut state = GameState::new();
    state.start();
    let mut jitter = PcgJitter::seeded(7);
    let input = TickInput::default();

    let mut ticks = 0u64;
    let outcome = loop {
        match tick(&mut state, &input, &mut jitter) {
            TickOutcome::Continue => ticks += 1,
            outcome => break outcome,
        }
        if ticks >= 1_000_000 {
            break TickOutcome::Continue;
        }
    };

    println!(
        "headless run: {:?} after {} ticks (score {}, lives {})",
        outcome, ticks, state.score, state.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
