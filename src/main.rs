//! Planet Dodger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use planet_dodger::assets::{self, MANIFEST_PATH};
    use planet_dodger::persistence::{CookieStore, load_qualified, persist_qualified};
    use planet_dodger::renderer::CanvasRenderer;
    use planet_dodger::sim::{GameEvent, GamePhase, GameState, TickInput, Viewport, tick};
    use planet_dodger::{Settings, Tuning};

    /// How long the "qualified" banner stays up
    const BANNER_MS: i32 = 3000;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        store: CookieStore,
        settings: Settings,
        /// Tuning from the manifest, before settings caps
        base_tuning: Tuning,
        /// An animation frame is scheduled
        running: bool,
    }

    impl Game {
        /// Run one simulation tick and react to its events
        fn update(&mut self) {
            tick(&mut self.state, &self.input);
            // Taps are one-shot
            self.input.activate = false;

            for event in self.state.take_events() {
                match event {
                    GameEvent::Started => set_visible("instructions", false),
                    GameEvent::Qualified => {
                        persist_qualified(&mut self.store);
                        show_qualified_banner();
                    }
                    GameEvent::GameOver => {
                        set_visible("restart", true);
                        set_visible("instructions", true);
                    }
                    GameEvent::ScoreChanged(_) | GameEvent::LivesChanged(_) => {}
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            set_text("score", &format!("Score: {}", self.state.score));
            set_text("lives", &format!("Lives: {}", self.state.lives));
        }

        /// Fresh Playing session with the current settings applied
        fn restart(&mut self) {
            let mut tuning = self.base_tuning.clone();
            self.settings.apply_to(&mut tuning);
            self.state.tuning = tuning.sanitized();
            self.state.restart();
            self.input = TickInput::default();
        }

        fn cycle_quality(&mut self) {
            self.settings.quality = self.settings.quality.next();
            self.settings.save();
            self.renderer.set_settings(self.settings.clone());
            log::info!(
                "Quality: {} (starfield applies on restart)",
                self.settings.quality.as_str()
            );
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    fn set_visible(id: &str, visible: bool) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    fn show_qualified_banner() {
        set_visible("qualified", true);
        set_visible("next-level", true);

        let Some(window) = web_sys::window() else {
            return;
        };
        let hide = Closure::once(move || set_visible("qualified", false));
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.as_ref().unchecked_ref(),
            BANNER_MS,
        );
        hide.forget();
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Planet Dodger starting...");

        // Load phase: nothing runs unless every resource arrived
        let assets = match assets::load(MANIFEST_PATH).await {
            Ok(assets) => assets,
            Err(e) => {
                log::error!("Error loading resources: {}", e);
                return;
            }
        };

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(canvas) = document()
            .and_then(|d| d.get_element_by_id("gameCanvas"))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };

        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let store = CookieStore::new();
        let qualified = load_qualified(&store);
        set_visible("next-level", qualified);

        let settings = Settings::load();
        let base_tuning = assets.manifest.tuning();
        let mut tuning = base_tuning.clone();
        settings.apply_to(&mut tuning);

        let seed = js_sys::Date::now() as u64;
        let viewport = Viewport::new(width as f32, height as f32);
        let state = GameState::new(seed, viewport, tuning, assets.planet_sizes())
            .with_qualified(qualified);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer: CanvasRenderer::new(ctx, &assets, settings.clone()),
            input: TickInput::default(),
            store,
            settings,
            base_tuning,
            running: true,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_button("start", game.clone());
        setup_button("restart", game.clone());

        set_visible("start", true);
        set_visible("instructions", true);
        set_visible("restart", false);

        // Attract mode runs until the first tap
        request_animation_frame(game);

        log::info!("Planet Dodger running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.activate = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.activate = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" => g.input.activate = true,
                    "q" | "Q" => g.cycle_quality(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start and restart both begin a fresh Playing session
    fn setup_button(id: &'static str, game: Rc<RefCell<Game>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("No #{} button", id);
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            set_visible(id, false);
            set_visible("instructions", false);

            let resume = {
                let mut g = game.borrow_mut();
                g.restart();
                let idle = !g.running;
                g.running = true;
                idle
            };
            // The loop stops itself on game over
            if resume {
                request_animation_frame(game.clone());
            }
            log::info!("Session started from #{}", id);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();

            let alive = g.state.phase != GamePhase::GameOver;
            g.running = alive;
            alive
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use planet_dodger::assets::MANIFEST_PATH;
    use planet_dodger::{ResourceManifest, Settings};
    use planet_dodger::persistence::{MemoryStore, load_qualified, persist_qualified};
    use planet_dodger::sim::{GameEvent, GamePhase, GameState, TickInput, Viewport, tick};

    env_logger::init();
    log::info!("Planet Dodger (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` for the web version");

    let path = std::env::args().nth(1).unwrap_or_else(|| MANIFEST_PATH.to_string());
    let manifest = match ResourceManifest::from_path(&path) {
        Ok(manifest) => manifest,
        Err(e) => {
            log::error!("Error loading resources: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let settings = Settings::load();
    let mut tuning = manifest.tuning();
    settings.apply_to(&mut tuning);

    let mut store = MemoryStore::new();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let viewport = Viewport::new(1280.0, 720.0);
    let mut state = GameState::new(seed, viewport, tuning, manifest.nominal_planet_sizes())
        .with_qualified(load_qualified(&store));
    log::info!(
        "Game initialized with seed: {} ({} quality)",
        seed,
        settings.quality.as_str()
    );

    const MAX_FRAMES: u64 = 60 * 60 * 5;
    let mut frame = 0;
    while state.phase != GamePhase::GameOver && frame < MAX_FRAMES {
        // Tap whenever the craft sinks below the middle of the screen
        let craft = &state.craft;
        let activate = state.phase == GamePhase::NotStarted
            || (craft.pos.y > viewport.height * 0.5 && craft.dy > 0.0);
        tick(&mut state, &TickInput { activate });

        for event in state.take_events() {
            match event {
                GameEvent::Qualified => persist_qualified(&mut store),
                GameEvent::LivesChanged(lives) => log::info!("Frame {}: lives {}", state.frames, lives),
                _ => {}
            }
        }
        frame += 1;
    }

    println!(
        "Autopilot finished after {} frames: score {}, lives {}, qualified {}",
        state.frames, state.score, state.lives, state.qualified
    );
    std::process::ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
