//! Space Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop. In the
//! browser this drives a `<canvas id="canvas">` plus the page's buttons and HUD;
//! natively it plays a seeded headless demo and prints the result as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, EventTarget, HtmlCanvasElement, KeyboardEvent};

    use space_shooter::GameCore;
    use space_shooter::audio::{AudioManager, effects_for};
    use space_shooter::config::GameConfig;
    use space_shooter::platform::{Command, InputState, TouchButton};
    use space_shooter::renderer::RenderState;
    use space_shooter::sim::GameEvent;

    /// Game instance plus everything the page needs to drive it
    struct App {
        core: GameCore,
        input: InputState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        /// A requestAnimationFrame callback is pending
        frame_scheduled: bool,
    }

    impl App {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                core: GameCore::with_seed(config, seed),
                input: InputState::new(),
                render_state: None,
                audio: AudioManager::new(),
                frame_scheduled: false,
            }
        }

        fn command(&mut self, command: Command) {
            match command {
                Command::Start => {
                    // First user gesture unlocks audio
                    self.audio.resume();
                    self.core.start();
                }
                Command::TogglePause => self.core.toggle_pause(),
                Command::Reset => {
                    self.core.reset();
                    self.input.release_all();
                }
                Command::ToggleSound => {
                    let on = self.core.toggle_sound();
                    set_text("soundBtn", if on { "Sound: ON" } else { "Sound: OFF" });
                }
            }
        }

        /// Suspend when the page is hidden or loses focus
        fn auto_pause(&mut self, reason: &str) {
            self.input.release_all();
            if self.core.is_active() {
                self.core.pause();
                log::info!("Auto-paused ({reason})");
            }
        }

        /// Handle events, draw, sync the HUD
        fn refresh(&mut self) {
            self.process_events();
            self.render();
            self.update_hud();
        }

        fn process_events(&mut self) {
            let events = self.core.drain_events();
            for effect in effects_for(&events, self.core.state().sound_enabled) {
                self.audio.play(effect);
            }

            for event in &events {
                match event {
                    GameEvent::Started => {
                        set_visible("gameOverScreen", false);
                        set_text("pauseBtn", "Pause");
                    }
                    GameEvent::Paused => set_text("pauseBtn", "Resume"),
                    GameEvent::Resumed => set_text("pauseBtn", "Pause"),
                    GameEvent::Reset => {
                        set_visible("gameOverScreen", false);
                        set_text("pauseBtn", "Pause");
                    }
                    GameEvent::GameOver { score, level } => {
                        set_text("finalScore", &score.to_string());
                        set_text("finalLevel", &level.to_string());
                        set_visible("gameOverScreen", true);
                    }
                    _ => {}
                }
            }
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            match self.core.render(render_state) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = render_state.size;
                    render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn update_hud(&self) {
            let state = self.core.state();
            set_text("score", &state.score.to_string());
            set_text("lives", &state.lives.to_string());
            set_text("level", &state.level.to_string());
        }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(id: &str, visible: bool) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let style = if visible { "display: block" } else { "display: none" };
            let _ = el.set_attribute("style", style);
        }
    }

    /// Attach a listener for the lifetime of the page
    fn listen<E>(target: &EventTarget, name: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        if target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Failed to attach {name} listener");
        }
        closure.forget();
    }

    /// Optional JSON override from `<canvas data-config='{...}'>`
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        let Some(json) = canvas.get_attribute("data-config") else {
            return GameConfig::default();
        };
        match GameConfig::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring data-config: {e}");
                GameConfig::default()
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Space Shooter starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = load_config(&canvas);

        // Backing store follows the device pixel ratio; the scene stays in game pixels
        let dpr = window.device_pixel_ratio();
        let width = (config.canvas_width as f64 * dpr) as u32;
        let height = (config.canvas_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(config, seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        app.borrow_mut().render_state = Some(render_state);

        setup_keyboard(&app);
        setup_buttons(&document, &app);
        setup_auto_pause(&document, &app);

        // Idle splash until the player presses start
        app.borrow_mut().refresh();

        log::info!("Space Shooter ready");
        Ok(())
    }

    fn dispatch(app: &Rc<RefCell<App>>, command: Command) {
        {
            let mut g = app.borrow_mut();
            g.command(command);
            g.refresh();
        }
        schedule_frame(app);
    }

    /// Request the next frame if a run is active and none is pending
    fn schedule_frame(app: &Rc<RefCell<App>>) {
        {
            let mut g = app.borrow_mut();
            if !g.core.is_active() || g.frame_scheduled {
                return;
            }
            g.frame_scheduled = true;
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let app = app.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_going = {
            let mut g = app.borrow_mut();
            g.frame_scheduled = false;
            let input = g.input.tick_input();
            let keep_going = g.core.frame(time, &input);
            g.refresh();
            keep_going
        };

        if keep_going {
            schedule_frame(&app);
        }
    }

    fn setup_keyboard(app: &Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let app = app.clone();
            listen(&window, "keydown", move |event: KeyboardEvent| {
                let key = event.key();
                if InputState::is_game_key(&key) {
                    event.prevent_default();
                }
                let command = app.borrow_mut().input.key_down(&key);
                if let Some(command) = command {
                    if !event.repeat() {
                        dispatch(&app, command);
                    }
                }
            });
        }

        {
            let app = app.clone();
            listen(&window, "keyup", move |event: KeyboardEvent| {
                app.borrow_mut().input.key_up(&event.key());
            });
        }
    }

    fn setup_buttons(document: &Document, app: &Rc<RefCell<App>>) {
        let commands = [
            ("startBtn", Command::Start),
            ("pauseBtn", Command::TogglePause),
            ("resetBtn", Command::Reset),
            ("soundBtn", Command::ToggleSound),
            ("restartBtn", Command::Start),
        ];
        for (id, command) in commands {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{id}");
                continue;
            };
            let app = app.clone();
            listen(&btn, "click", move |_event: web_sys::MouseEvent| {
                dispatch(&app, command);
            });
        }

        // Movement buttons: pressed while touched or held with the mouse
        for (id, button) in [("leftBtn", TouchButton::Left), ("rightBtn", TouchButton::Right)] {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            for (name, down) in [
                ("touchstart", true),
                ("touchend", false),
                ("touchcancel", false),
                ("mousedown", true),
                ("mouseup", false),
                ("mouseleave", false),
            ] {
                let app = app.clone();
                listen(&btn, name, move |event: web_sys::Event| {
                    if name.starts_with("touch") {
                        event.prevent_default();
                    }
                    app.borrow_mut().input.set_button(button, down);
                });
            }
        }

        // Shoot button fires on every press
        if let Some(btn) = document.get_element_by_id("shootBtn") {
            for name in ["touchstart", "mousedown"] {
                let app = app.clone();
                listen(&btn, name, move |event: web_sys::Event| {
                    if name == "touchstart" {
                        event.prevent_default();
                    }
                    let mut g = app.borrow_mut();
                    if g.core.shoot() {
                        g.process_events();
                    }
                });
            }
        }
    }

    fn setup_auto_pause(document: &Document, app: &Rc<RefCell<App>>) {
        // Visibility change (tab switch, minimize)
        {
            let app = app.clone();
            let document_clone = document.clone();
            listen(document, "visibilitychange", move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = app.borrow_mut();
                    g.auto_pause("tab hidden");
                    g.refresh();
                }
            });
        }

        // Window blur (click outside)
        if let Some(window) = web_sys::window() {
            let app = app.clone();
            listen(&window, "blur", move |_event: web_sys::FocusEvent| {
                let mut g = app.borrow_mut();
                g.auto_pause("window blur");
                g.refresh();
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use space_shooter::GameConfig;
    use space_shooter::platform::run_demo;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    // Optional balance override: SPACE_SHOOTER_CONFIG=path/to/config.json
    let config = match std::env::var("SPACE_SHOOTER_CONFIG") {
        Ok(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring {path}: {e}");
                GameConfig::default()
            }
        },
        Err(_) => GameConfig::default(),
    };

    log::info!("Space Shooter (native) headless demo: seed {seed}, {frames} frames");
    let summary = run_demo(config, seed, frames);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
