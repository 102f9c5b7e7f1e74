//! Bouncing Balls entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use bouncing_balls::Game;
    use bouncing_balls::Settings;
    use bouncing_balls::platform::ElementStatus;
    use bouncing_balls::renderer::CanvasSurface;
    use bouncing_balls::sim::{Bounds, World};

    type WebGame = Game<CanvasSurface, ElementStatus>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bouncing Balls starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .expect("no canvas")
            .dyn_into()?;
        let status = document.query_selector("p")?.expect("no status paragraph");

        // Viewport is read once; resizing is not handled
        let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
        let bounds = Bounds::new(width, height);

        let settings = Settings::default();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let world =
            World::new(bounds, &settings, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let surface = CanvasSurface::new(canvas, bounds)?;
        let game = Rc::new(RefCell::new(Game::new(
            world,
            surface,
            ElementStatus::new(status),
            &settings,
        )));

        set_controls(game.clone());
        request_animation_frame(game);

        log::info!("Bouncing Balls running!");
        Ok(())
    }

    /// Bind keydown through `window.onkeydown`, replacing any earlier binding
    fn set_controls(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().handle_key(&event.key());
        });
        window.set_onkeydown(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>) {
        let result = game.borrow_mut().frame();
        match result {
            Ok(()) => request_animation_frame(game),
            // A failed frame ends the animation
            Err(e) => log::error!("Frame failed, animation stopped: {:?}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use bouncing_balls::consts::*;
    use bouncing_balls::platform::{LogStatus, Paced};
    use bouncing_balls::renderer::RecordingSurface;
    use bouncing_balls::sim::{Bounds, World};
    use bouncing_balls::{Game, Settings};

    env_logger::init();
    log::info!("Bouncing Balls (native, headless) starting...");

    // Usage: bouncing-balls [SETTINGS_JSON] [FRAMES]
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(Path::new(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {}", e);
            std::process::exit(1);
        }
        None => HEADLESS_FRAMES,
    };

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let bounds = Bounds::new(HEADLESS_WIDTH, HEADLESS_HEIGHT);
    let world = match World::new(bounds, &settings, seed) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Cannot create world: {}", e);
            std::process::exit(1);
        }
    };

    let mut game = Game::new(world, RecordingSurface::counting(), LogStatus::new(), &settings);
    let mut scheduler = Paced::new(frames, Paced::REFRESH);
    let ran = match game.run(&mut scheduler) {
        Ok(ran) => ran,
        Err(never) => match never {},
    };

    log::info!(
        "Ran {} frames: {} particles remaining, {} draw calls",
        ran,
        game.world.live_count(),
        game.surface().total()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
