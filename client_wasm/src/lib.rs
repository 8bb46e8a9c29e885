//! WebGPU client for the joystick arena
//!
//! The host page owns the joystick widgets and forwards their vectors here;
//! this crate owns the simulation, the frame loop and the renderer.

// Pure modules build natively too so their tests run off-browser
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod camera;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod input;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod mesh;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod simulation;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use game_core::{Color, Config, Params, Side};
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use crate::renderer::Renderer;
    use crate::simulation::LocalGame;

    fn log(msg: &str) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }

    fn log_error(msg: &str) {
        web_sys::console::error_1(&JsValue::from_str(msg));
    }

    /// Main client state
    struct Client {
        renderer: Renderer,
        game: LocalGame,
        background: Color,
    }

    impl Client {
        async fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<Self, JsValue> {
            let renderer = Renderer::new(canvas)
                .await
                .map_err(|e| JsValue::from_str(&e))?;

            // The canvas is the viewport; a JSON override may retune everything else
            let (width, height) = renderer.viewport();
            let mut config = match config_json {
                Some(json) => Config::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
                None => Config::default(),
            };
            config.viewport_width = width;
            config.viewport_height = height;

            let game = LocalGame::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
            log(&format!("arena ready: {width}x{height}"));

            Ok(Self {
                renderer,
                game,
                background: Color::from_hex(Params::BACKGROUND_COLOR),
            })
        }

        fn frame(&mut self) -> Result<(), JsValue> {
            self.game.step();
            let scene = self.game.scene();
            self.renderer
                .draw(&scene, self.background)
                .map_err(|e| JsValue::from_str(&e))
        }
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
        static LOOP_RUNNING: Cell<bool> = const { Cell::new(false) };
    }

    fn with_client<R>(f: impl FnOnce(&mut Client) -> Result<R, JsValue>) -> Result<R, JsValue> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => f(client),
            None => Err(JsValue::from_str("Client not initialized")),
        })
    }

    fn side_from_index(index: u32) -> Result<Side, JsValue> {
        Side::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| JsValue::from_str(&format!("No joystick {index}")))
    }

    async fn install(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<JsValue, JsValue> {
        console_error_panic_hook::set_once();
        let client = Client::new(canvas, config_json).await?;
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        Ok(JsValue::UNDEFINED)
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(install(canvas, None))
    }

    #[wasm_bindgen]
    pub fn init_client_with_config(canvas: HtmlCanvasElement, config_json: String) -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(install(canvas, Some(config_json)))
    }

    #[wasm_bindgen]
    pub fn left_joystick_move(x: f32, y: f32) -> Result<(), JsValue> {
        with_client(|c| {
            c.game.joystick_move(Side::Left, x, y);
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn right_joystick_move(x: f32, y: f32) -> Result<(), JsValue> {
        with_client(|c| {
            c.game.joystick_move(Side::Right, x, y);
            Ok(())
        })
    }

    /// Pixel offset of the pointer from the left joystick's base center
    #[wasm_bindgen]
    pub fn left_joystick_drag(dx: f32, dy: f32) -> Result<(), JsValue> {
        with_client(|c| {
            c.game.joystick_drag(Side::Left, dx, dy);
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn right_joystick_drag(dx: f32, dy: f32) -> Result<(), JsValue> {
        with_client(|c| {
            c.game.joystick_drag(Side::Right, dx, dy);
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn left_joystick_release() -> Result<(), JsValue> {
        with_client(|c| {
            c.game.joystick_release(Side::Left);
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn right_joystick_release() -> Result<(), JsValue> {
        with_client(|c| {
            c.game.joystick_release(Side::Right);
            Ok(())
        })
    }

    /// Joystick under a pointer press (0 = left, 1 = right), if any
    #[wasm_bindgen]
    pub fn joystick_at(x: f32, y: f32) -> Result<Option<u32>, JsValue> {
        with_client(|c| {
            Ok(c.game
                .joystick_at(Vec2::new(x, y))
                .map(|side| side.index() as u32))
        })
    }

    /// Pointer position in canvas pixels while a stick is held
    #[wasm_bindgen]
    pub fn joystick_pointer(side: u32, x: f32, y: f32) -> Result<(), JsValue> {
        let side = side_from_index(side)?;
        with_client(|c| {
            c.game.joystick_pointer(side, Vec2::new(x, y));
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn joystick_release(side: u32) -> Result<(), JsValue> {
        let side = side_from_index(side)?;
        with_client(|c| {
            c.game.joystick_release(side);
            Ok(())
        })
    }

    /// Forward a keydown/keyup event; bound keys do not scroll the page
    #[wasm_bindgen]
    pub fn handle_key_event(event: &KeyboardEvent, pressed: bool) -> Result<(), JsValue> {
        with_client(|c| {
            if c.game.key_event(&event.key(), pressed) {
                event.prevent_default();
            }
            Ok(())
        })
    }

    /// Latest render snapshot as JSON
    #[wasm_bindgen]
    pub fn snapshot_json() -> Result<String, JsValue> {
        with_client(|c| {
            c.game
                .arena
                .snapshot()
                .to_json()
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }

    /// Tick the simulation once and draw the result
    #[wasm_bindgen]
    pub fn render_frame() -> Result<(), JsValue> {
        with_client(Client::frame)
    }

    fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
        web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window"))?
            .request_animation_frame(callback.as_ref().unchecked_ref())
    }

    /// Register the per-refresh callback; calling it again is a no-op
    #[wasm_bindgen]
    pub fn start_frame_loop() -> Result<(), JsValue> {
        if LOOP_RUNNING.with(|running| running.replace(true)) {
            return Ok(());
        }

        // The closure reschedules itself, so it owns a handle to its own slot
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let reschedule = slot.clone();
        *slot.borrow_mut() = Some(Closure::new(move || {
            if let Err(e) = render_frame() {
                log_error(&format!("frame failed: {e:?}"));
                LOOP_RUNNING.with(|running| running.set(false));
                return;
            }
            if let Some(callback) = reschedule.borrow().as_ref() {
                if let Err(e) = request_animation_frame(callback) {
                    log_error(&format!("failed to schedule frame: {e:?}"));
                    LOOP_RUNNING.with(|running| running.set(false));
                }
            }
        }));

        let first = slot.borrow();
        let scheduled = match first.as_ref() {
            Some(callback) => request_animation_frame(callback).map(|_| ()),
            None => Err(JsValue::from_str("Frame callback missing")),
        };
        scheduled
    }
}
