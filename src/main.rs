//! Ball Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

use ball_dodge::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Report what happened during the last tick
fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Hit { slot, hits } => log::debug!("Ball {} hit the target ({} hits)", slot, hits),
            GameEvent::Relaunch { slot } => log::debug!("Ball {} relaunched", slot),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlAnchorElement, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use ball_dodge::consts::*;
    use ball_dodge::hud::{hits_text, screenshot_name};
    use ball_dodge::renderer::{RenderState, build_scene};
    use ball_dodge::sim::{GameState, TickInput, tick};
    use ball_dodge::{FramePacer, GameConfig};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        pacer: FramePacer,
        canvas: HtmlCanvasElement,
        /// Capture the canvas right after the next render
        screenshot_pending: bool,
        screenshots_taken: u32,
        /// Last value written to the HUD
        shown_hits: Option<u32>,
    }

    impl Game {
        fn new(config: GameConfig, canvas: HtmlCanvasElement) -> Self {
            let input = TickInput {
                pointer: config.target_start,
            };
            Self {
                state: GameState::new(config),
                render_state: None,
                input,
                pacer: FramePacer::new(FRAME_RATE),
                canvas,
                screenshot_pending: false,
                screenshots_taken: 0,
                shown_hits: None,
            }
        }

        /// Convert a CSS-pixel offset inside the canvas to canvas coordinates
        fn to_canvas(&self, x: f32, y: f32) -> Vec2 {
            let scale_x = self.state.config.canvas_size / self.canvas.client_width().max(1) as f32;
            let scale_y = self.state.config.canvas_size / self.canvas.client_height().max(1) as f32;
            Vec2::new(x * scale_x, y * scale_y)
        }

        /// Run one frame if the pacer allows it
        fn frame(&mut self, time: f64) {
            if !self.pacer.ready(time) {
                return;
            }

            tick(&mut self.state, &self.input, SIM_DT);
            super::log_events(&self.state.events);

            self.render();
            self.update_hud();

            if self.screenshot_pending {
                self.screenshot_pending = false;
                if let Err(e) = self.save_screenshot() {
                    log::warn!("Screenshot failed: {:?}", e);
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
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

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            if self.shown_hits == Some(self.state.hits) {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud-hits") {
                el.set_text_content(Some(&hits_text(self.state.hits, self.state.config.hud_digits)));
                self.shown_hits = Some(self.state.hits);
            }
        }

        /// Download the canvas as the next numbered PNG
        fn save_screenshot(&mut self) -> Result<(), JsValue> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| JsValue::from_str("no document"))?;

            let url = self.canvas.to_data_url()?;
            let name = screenshot_name(self.screenshots_taken);

            let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
            link.set_href(&url);
            link.set_download(&name);
            link.click();

            self.screenshots_taken += 1;
            log::info!("Saved {}", name);
            Ok(())
        }
    }

    fn setup_hud(document: &Document, config: &GameConfig) -> Result<(), JsValue> {
        if let Some(el) = document.get_element_by_id("hud-hits") {
            el.set_attribute("style", &format!("color: {}", config.palette.hud_counter))?;
            el.set_text_content(Some(&hits_text(0, config.hud_digits)));
        }

        if let Some(labels) = document.get_element_by_id("hud-labels") {
            labels.set_attribute("style", &format!("color: {}", config.palette.hud_label))?;
            for label in &config.hud_labels {
                let line = document.create_element("div")?;
                line.set_text_content(Some(label));
                labels.append_child(&line)?;
            }
        }

        Ok(())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&format!("logger: {}", e)))?;

        log::info!("Ball Dodge starting...");

        let config = GameConfig::load();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Backing store matches the logical canvas at device resolution
        let dpr = window.device_pixel_ratio();
        let size = (config.canvas_size as f64 * dpr) as u32;
        canvas.set_width(size);
        canvas.set_height(size);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            size,
            size,
            config.canvas_size,
            config.palette.background,
        )
        .await
        .map_err(|e| JsValue::from_str(&format!("device: {}", e)))?;

        setup_hud(&document, &config)?;

        let game = Rc::new(RefCell::new(Game::new(config, canvas.clone())));
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone())?;

        if let Some(loading) = document.get_element_by_id("loading") {
            loading.set_attribute("class", "hidden")?;
        }

        request_animation_frame(game);

        log::info!("Ball Dodge running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Mouse move: spring rest point follows the cursor
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.input.pointer = g.to_canvas(event.offset_x() as f32, event.offset_y() as f32);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    let mut g = game.borrow_mut();
                    g.input.pointer = g.to_canvas(x, y);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Page visibility: drop timing history so a returning tab starts fresh
        {
            let game = game.clone();
            let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
            let doc = document.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if !doc.hidden() {
                    game.borrow_mut().pacer.reset();
                    log::debug!("Page visible again, frame timing reset");
                }
            });
            document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "x" {
                    game.borrow_mut().screenshot_pending = true;
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
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
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Ball Dodge failed to start: {:?}", e);
    }
}

/// Length of the native headless session
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_SECONDS: u32 = 20;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ball_dodge::GameConfig;
    use ball_dodge::consts::{FRAME_RATE, SIM_DT};
    use ball_dodge::hud::hits_text;
    use ball_dodge::sim::{GameState, TickInput, tick};
    use glam::Vec2;

    env_logger::init();
    log::info!("Ball Dodge (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the playable version");

    let config = GameConfig::load();
    let center = Vec2::splat(config.canvas_size / 2.0);
    let sweep = config.canvas_size / 4.0;
    let digits = config.hud_digits;
    let mut state = GameState::new(config);

    // Scripted pointer: one slow lap around the canvas center every 8 seconds
    let frames = HEADLESS_SECONDS * FRAME_RATE as u32;
    for frame in 0..frames {
        let angle = frame as f32 * SIM_DT * std::f32::consts::TAU / 8.0;
        let input = TickInput {
            pointer: center + sweep * Vec2::from_angle(angle),
        };
        tick(&mut state, &input, SIM_DT);
        log_events(&state.events);
    }

    log::info!(
        "Headless session finished after {} frames: {}",
        state.time_ticks,
        hits_text(state.hits, digits)
    );
    println!("{}", hits_text(state.hits, digits));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
