//! Retro Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::fmt::Write as _;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlSelectElement, KeyboardEvent, MouseEvent};

    use retro_pong::platform::{Driver, KeyState};
    use retro_pong::renderer::{GpuFrame, RenderState, colors};
    use retro_pong::sim::{Court, GamePhase, GameState};
    use retro_pong::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        driver: Driver<GpuFrame, KeyState>,
        render_state: Option<RenderState>,
        last_time: f64,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(court: Court, tuning: Tuning, seed: u64, settings: Settings) -> Self {
            let mut rng = Pcg32::seed_from_u64(seed);
            let state = GameState::new(court, tuning, &mut rng);
            Self {
                driver: Driver::new(state, rng, GpuFrame::default(), KeyState::default(), settings),
                render_state: None,
                last_time: 0.0,
                last_phase: GamePhase::Menu,
            }
        }

        /// Handle the start button
        fn start(&mut self, level: i64) {
            if self.driver.start(level) {
                self.driver.settings.save();
            }
        }

        /// Run one display frame of simulation and projection
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            self.driver.frame(dt);

            let phase = self.driver.state.phase;
            if phase != self.last_phase {
                log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
                self.last_phase = phase;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.driver.renderer) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        log::warn!("Surface lost, reconfiguring");
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Mirror this frame's text into the DOM layer over the canvas
        fn update_text_layer(&self) {
            let Some(layer) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("text-layer"))
            else {
                return;
            };

            let court = self.driver.state.court;
            let mut html = String::new();
            for item in &self.driver.renderer.texts {
                let _ = write!(
                    html,
                    "<span style=\"left:{:.3}%;top:{:.3}%;font-size:{}px;color:{}\">{}</span>",
                    item.x / court.width * 100.0,
                    item.y / court.height * 100.0,
                    item.font_size,
                    colors::to_css(item.color),
                    item.text
                );
            }
            layer.set_inner_html(&html);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Retro Pong starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to run in");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        // The canvas attributes define the court
        let court = Court::new(canvas.width() as f32, canvas.height() as f32);
        if let Err(e) = Tuning::default().check_court(court.width, court.height) {
            log::error!("Unplayable canvas: {}", e);
            return;
        }

        let tuning = Tuning::load(court.width, court.height);
        let settings = Settings::load();
        if let Some(select) = document
            .get_element_by_id("level")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value(&settings.difficulty.index().to_string());
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(court, tuning, seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, canvas.width(), canvas.height(), court).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(game.clone());
        setup_start_button(game.clone());

        request_animation_frame(game);

        log::info!("Retro Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.driver.input.handle_key(&event.key(), pressed) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("startBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let level = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("level"))
                    .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                    .and_then(|select| select.value().parse::<i64>().ok())
                    .unwrap_or(0);
                game.borrow_mut().start(level);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #startBtn element; the game cannot be started");
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_text_layer();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use retro_pong::platform::{Autopilot, Driver, HeadlessScheduler, Scheduler};
    use retro_pong::renderer::DrawList;
    use retro_pong::sim::{Court, Difficulty, GamePhase, GameState};
    use retro_pong::{Settings, Tuning};

    env_logger::init();
    log::info!("Retro Pong (native) starting...");
    log::info!("Native mode runs a headless demo match - run with `trunk serve` for the web version");

    // Usage: retro-pong [difficulty] [seed] [tuning.json]
    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .map(|arg| match arg.parse::<i64>() {
            Ok(index) => Difficulty::from_index(index),
            Err(_) => Difficulty::from_str(&arg).unwrap_or_else(|| {
                log::warn!("Unknown difficulty '{}', using Easy", arg);
                Difficulty::Easy
            }),
        })
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let court = Court::default();
    let tuning = match args.next() {
        Some(path) => Tuning::or_default(Tuning::from_path(&path), court.width, court.height),
        None => Tuning::default(),
    };

    let mut rng = Pcg32::seed_from_u64(seed);
    let state = GameState::new(court, tuning, &mut rng);
    let mut driver = Driver::new(
        state,
        rng,
        DrawList::new(),
        Autopilot::default(),
        Settings::default(),
    );
    driver.start(difficulty.index() as i64);

    // Ten minutes of 60 Hz frames at most
    let mut scheduler = HeadlessScheduler::new(60 * 60 * 10);
    while driver.state.phase == GamePhase::Playing {
        let Some(dt) = scheduler.next_frame() else {
            break;
        };
        driver.frame(dt);
    }

    let score = driver.state.score;
    match driver.state.winner() {
        Some(winner) => log::info!(
            "Demo finished after {} frames: {:?} wins {} - {}",
            driver.frames(),
            winner,
            score.player,
            score.bot
        ),
        None => log::info!(
            "Demo stopped after {} frames at {} - {}",
            driver.frames(),
            score.player,
            score.bot
        ),
    }
    for line in driver.renderer.texts() {
        println!("{}", line);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
