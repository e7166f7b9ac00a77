//! Tilt Coins entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{DeviceOrientationEvent, HtmlCanvasElement};

    use tilt_coins::Settings;
    use tilt_coins::platform::{
        FrameClock, OrientationReading, SensorError, TiltSlot, check_permission,
    };
    use tilt_coins::renderer::RenderState;
    use tilt_coins::sim::{GameState, TickInput, tick};
    use tilt_coins::ui::Status;

    // iOS gates orientation events behind an explicit permission prompt
    #[wasm_bindgen(inline_js = "
        export function orientation_supported() {
            return typeof DeviceOrientationEvent !== 'undefined';
        }

        export function orientation_permission_required() {
            return typeof DeviceOrientationEvent !== 'undefined'
                && typeof DeviceOrientationEvent.requestPermission === 'function';
        }

        export async function request_orientation_permission() {
            return await DeviceOrientationEvent.requestPermission();
        }
    ")]
    extern "C" {
        fn orientation_supported() -> bool;
        fn orientation_permission_required() -> bool;
        #[wasm_bindgen(catch)]
        async fn request_orientation_permission() -> Result<JsValue, JsValue>;
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameClock,
        tilt: TiltSlot,
        sensor_error: Option<SensorError>,
        listening: bool,
        /// Set when the simulation hit an unrecoverable error
        halted: bool,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            let clock = FrameClock::new(state.settings.nominal_frame_ms);
            Self {
                state,
                render_state: None,
                clock,
                tilt: TiltSlot::new(),
                sensor_error: None,
                listening: false,
                halted: false,
            }
        }

        /// Run one simulation step
        fn update(&mut self, time: f64) {
            let dt = self.clock.advance(time);
            let input = TickInput::new(self.tilt.load());
            match tick(&mut self.state, &input, dt) {
                Ok(events) => {
                    for event in events {
                        log::debug!("{:?}", event);
                    }
                }
                Err(e) => {
                    log::error!("Simulation halted: {}", e);
                    set_status_text(&e.to_string());
                    self.halted = true;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state.snapshot()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn update_status(&self) {
            let status = Status::for_state(&self.state, self.sensor_error.as_ref());
            set_status_text(&status.to_string());
        }
    }

    fn set_status_text(text: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("status"))
        {
            el.set_text_content(Some(text));
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tilt Coins starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::default().with_seed(seed);
        canvas.set_width(settings.playfield_width as u32);
        canvas.set_height(settings.playfield_height as u32);

        let state = match GameState::new(settings) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Failed to create game: {}", e);
                set_status_text(&e.to_string());
                return;
            }
        };
        let game = Rc::new(RefCell::new(Game::new(state)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, canvas.width(), canvas.height()).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create render device: {}", e),
        }

        setup_start_button(game.clone());
        game.borrow().update_status();

        // Start game loop
        request_animation_frame(game);

        log::info!("Tilt Coins running!");
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("startBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let game = game.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    enable_orientation(game).await;
                });
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Ask for sensor access (where required) and start the session on success
    async fn enable_orientation(game: Rc<RefCell<Game>>) {
        let result = if !orientation_supported() {
            Err(SensorError::Unavailable(
                "DeviceOrientationEvent not supported".into(),
            ))
        } else if orientation_permission_required() {
            match request_orientation_permission().await {
                Ok(response) => check_permission(&response.as_string().unwrap_or_default()),
                Err(e) => {
                    log::error!("Orientation permission request failed: {:?}", e);
                    Err(SensorError::Unavailable(format!("{:?}", e)))
                }
            }
        } else {
            // No permission gate on this platform
            Ok(())
        };

        let mut g = game.borrow_mut();
        match result {
            Ok(()) => {
                if !g.listening {
                    listen_for_orientation(g.tilt.clone());
                    g.listening = true;
                }
                g.sensor_error = None;
                g.state.start();
            }
            Err(e) => {
                log::warn!("Sensor not enabled: {}", e);
                g.sensor_error = Some(e);
            }
        }
        g.update_status();
    }

    fn listen_for_orientation(tilt: TiltSlot) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: DeviceOrientationEvent| {
            tilt.record(OrientationReading::new(event.gamma(), event.beta()));
        });
        let _ = window.add_event_listener_with_callback(
            "deviceorientation",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
        log::info!("Listening for device orientation");
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
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
            if g.halted {
                return;
            }
            g.render();
            if g.state.is_running() {
                g.update_status();
            }
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
    env_logger::init();
    log::info!("Tilt Coins (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    if let Err(e) = native_demo::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless driver: feeds a scripted tilt sweep through the simulation at the
/// nominal frame rate and prints the final snapshot.
#[cfg(not(target_arch = "wasm32"))]
mod native_demo {
    use std::error::Error;

    use tilt_coins::Settings;
    use tilt_coins::platform::{FrameClock, OrientationReading, TiltSlot};
    use tilt_coins::sim::{GameEvent, GameState, TickInput, tick};
    use tilt_coins::ui::Status;

    const DEFAULT_FRAMES: u64 = 3600;

    /// Usage: tilt-coins [settings.json] [frames]
    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => Settings::from_json(&std::fs::read_to_string(&path)?)?,
            None => Settings::default(),
        };
        let frames = match args.next() {
            Some(n) => n.parse()?,
            None => DEFAULT_FRAMES,
        };

        let mut state = GameState::new(settings)?;
        let mut clock = FrameClock::new(state.settings.nominal_frame_ms);
        let tilt = TiltSlot::new();
        log::info!("Status: {}", Status::for_state(&state, None));

        state.start();

        for frame in 0..frames {
            // Slow circular sweep, a little past full tilt
            let phase = frame as f64 * 0.01;
            tilt.record(OrientationReading::new(
                Some(50.0 * phase.cos()),
                Some(50.0 * (phase * 1.3).sin()),
            ));

            let dt = clock.advance(frame as f64 * state.settings.nominal_frame_ms);
            for event in tick(&mut state, &TickInput::new(tilt.load()), dt)? {
                let GameEvent::CoinCollected { coin_id, score, .. } = event;
                log::info!("Frame {}: coin {} collected (score {})", frame, coin_id, score);
            }
        }

        log::info!("Status: {}", Status::for_state(&state, None));
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
        Ok(())
    }
}
