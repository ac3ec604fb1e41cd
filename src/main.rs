//! Loot Drop entry point
//!
//! In the browser this wires DOM events to the controller. On native targets
//! it runs a headless drop-rate calibration of the zone table.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use loot_drop::audio::WebAudio;
    use loot_drop::platform::DomPanels;
    use loot_drop::renderer::CanvasSurface;
    use loot_drop::{GameConfig, LootController, Viewport};

    type Game = LootController<CanvasSurface, WebAudio, DomPanels>;

    /// Current window size as a viewport
    fn window_viewport() -> Option<Viewport> {
        let window = web_sys::window()?;
        let w = window.inner_width().ok()?.as_f64()?;
        let h = window.inner_height().ok()?.as_f64()?;
        Viewport::new(w as f32, h as f32)
    }

    fn on_click(id: &str, handler: impl FnMut(MouseEvent) + 'static) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("Missing element #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Loot Drop starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("click-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Missing #click-canvas");
            return;
        };
        let Some(surface) = CanvasSurface::new(canvas.clone()) else {
            log::error!("Canvas has no 2D context");
            return;
        };
        let Some(panels) = DomPanels::from_document(&document) else {
            log::error!("Page is missing screen panels");
            return;
        };

        let config = GameConfig::default();
        let audio = WebAudio::new(config.background_volume);
        let loading = config.loading;
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(LootController::new(
            config, seed, surface, audio, panels,
        )));

        start_loading(game.clone(), loading.tick_ms, loading.settle_ms);
        setup_buttons(game.clone());
        setup_canvas(&canvas, game.clone());
        setup_keyboard(game);

        log::info!("Loot Drop running!");
    }

    /// Repeating timer for the bar; cancels itself and schedules the settle delay
    fn start_loading(game: Rc<RefCell<Game>>, tick_ms: u32, settle_ms: u32) {
        let Some(window) = web_sys::window() else { return };
        let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

        let handle_inner = handle.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let done = match game.borrow_mut().loading_tick() {
                Ok(done) => done,
                Err(e) => {
                    log::warn!("{}", e);
                    true
                }
            };
            if !done {
                return;
            }
            let Some(window) = web_sys::window() else { return };
            if let Some(id) = handle_inner.borrow_mut().take() {
                window.clear_interval_with_handle(id);
            }
            let game = game.clone();
            let settle = Closure::once(move || {
                if let Err(e) = game.borrow_mut().finish_loading() {
                    log::warn!("{}", e);
                }
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                settle.as_ref().unchecked_ref(),
                settle_ms as i32,
            );
            settle.forget();
        });

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            tick_ms as i32,
        ) {
            Ok(id) => *handle.borrow_mut() = Some(id),
            Err(e) => log::error!("Failed to start loading timer: {:?}", e),
        }
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        // Start
        {
            let game = game.clone();
            on_click("go-button", move |_event| {
                let Some(viewport) = window_viewport() else {
                    log::warn!("Window has no usable size, not starting");
                    return;
                };
                if let Err(e) = game.borrow_mut().start(viewport) {
                    log::warn!("{}", e);
                }
            });
        }

        // Back
        on_click("back-button", move |_event| {
            if let Err(e) = game.borrow_mut().back(window_viewport()) {
                log::warn!("{}", e);
            }
        });
    }

    fn setup_canvas(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            let y = event.client_y() as f32 - rect.top() as f32;
            if let Err(e) = game.borrow_mut().click(Vec2::new(x, y)) {
                log::warn!("{}", e);
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key(&event.key());
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod calibrate {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use clap::Parser;
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use loot_drop::sim::generate;
    use loot_drop::{GameConfig, RarityTier, Viewport};

    /// Estimate drop rates for a zone table by resolving random clicks
    #[derive(Parser, Debug)]
    #[command(name = "loot-drop", version, about)]
    pub struct Args {
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        pub width: f32,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 720.0)]
        pub height: f32,

        /// Rounds to generate
        #[arg(long, default_value_t = 100)]
        pub rounds: u32,

        /// Clicks resolved per round
        #[arg(long, default_value_t = 1000)]
        pub clicks: u32,

        /// RNG seed (random if omitted)
        #[arg(long)]
        pub seed: Option<u64>,

        /// JSON config overriding the built-in rarity table
        #[arg(long)]
        pub config: Option<PathBuf>,
    }

    pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
        let config = match &args.config {
            Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => GameConfig::default(),
        };
        let viewport = Viewport::new(args.width, args.height)
            .ok_or("viewport width and height must be positive")?;
        let seed = args.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);

        log::info!(
            "Calibrating {}x{} with seed {} ({} rounds x {} clicks)",
            viewport.width,
            viewport.height,
            seed,
            args.rounds,
            args.clicks
        );

        let mut hits: BTreeMap<RarityTier, u64> = BTreeMap::new();
        for round in 1..=u64::from(args.rounds) {
            let zones = generate(round, viewport, &config.rarities, &mut rng);
            for _ in 0..args.clicks {
                let point = Vec2::new(
                    rng.random_range(0.0..viewport.width),
                    rng.random_range(0.0..viewport.height),
                );
                *hits.entry(zones.resolve(point)).or_default() += 1;
            }
        }

        let total = u64::from(args.rounds) * u64::from(args.clicks);
        println!("{:<10} {:>10} {:>8}", "tier", "hits", "rate");
        for tier in RarityTier::ALL.iter().rev() {
            let n = hits.get(tier).copied().unwrap_or(0);
            let rate = if total > 0 { n as f64 / total as f64 } else { 0.0 };
            println!("{:<10} {:>10} {:>7.2}%", tier, n, rate * 100.0);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    let args = calibrate::Args::parse();
    if let Err(e) = calibrate::run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
