//! Super Poach Bros entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, Window};

    use super_poach_bros::platform::suppresses_default;
    use super_poach_bros::renderer::{canvas, status_line};
    use super_poach_bros::sim::GameEvent;
    use super_poach_bros::{Game, Settings};

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// A registered DOM listener, removed again on drop
    struct Listener {
        target: web_sys::EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Listener {
        fn add(
            target: &web_sys::EventTarget,
            kind: &'static str,
            handler: impl FnMut(web_sys::Event) + 'static,
        ) -> Result<Self, JsValue> {
            let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            Ok(Self {
                target: target.clone(),
                kind,
                closure,
            })
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        }
    }

    /// Everything the page holds on to while the game is mounted
    struct Mounted {
        window: Window,
        game: Rc<RefCell<Game>>,
        frame_cb: FrameCallback,
        frame_id: Rc<Cell<Option<i32>>>,
        _listeners: Vec<Listener>,
    }

    impl Drop for Mounted {
        fn drop(&mut self) {
            if let Some(id) = self.frame_id.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            // Breaks the callback's reference to itself
            self.frame_cb.borrow_mut().take();
            log::info!("Game unmounted");
        }
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    }

    /// Update the status line under the canvas, if the page has one
    fn update_status(document: &Document, game: &Game) {
        if let Some(el) = document.get_element_by_id("status") {
            el.set_text_content(Some(&status_line(&game.state)));
        }
    }

    fn request_frame(window: &Window, frame_cb: &FrameCallback, frame_id: &Cell<Option<i32>>) {
        if let Some(cb) = frame_cb.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => frame_id.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn mount() -> Result<Mounted, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(settings.mode, seed)));
        update_status(&document, &game.borrow());

        let mut listeners = Vec::new();

        {
            let game = game.clone();
            listeners.push(Listener::add(&window, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    let key = event.key();
                    if suppresses_default(&key) {
                        event.prevent_default();
                    }
                    game.borrow_mut().keys.press(&key);
                }
            })?);
        }

        {
            let game = game.clone();
            listeners.push(Listener::add(&window, "keyup", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    game.borrow_mut().keys.release(&event.key());
                }
            })?);
        }

        // Key-up never arrives for keys released while unfocused
        {
            let game = game.clone();
            listeners.push(Listener::add(&window, "blur", move |_event| {
                game.borrow_mut().keys.clear();
            })?);
        }

        if let Some(button) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let document = document.clone();
            listeners.push(Listener::add(&button, "click", move |_event| {
                let mut g = game.borrow_mut();
                g.restart();
                update_status(&document, &g);
            })?);
        }

        let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        {
            let game = game.clone();
            let window_loop = window.clone();
            let frame_cb_loop = frame_cb.clone();
            let frame_id_loop = frame_id.clone();
            *frame_cb.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                {
                    let mut g = game.borrow_mut();
                    let events = g.frame(timestamp);
                    let ended = events.iter().any(|e| !matches!(e, GameEvent::ItemCollected { .. }));
                    if !events.is_empty() {
                        update_status(&document, &g);
                    }
                    if ended {
                        log::info!("Final score: {}", g.state.score);
                    }

                    let ctx = canvas::context_2d(&canvas);
                    canvas::paint(ctx.as_ref(), &g.scene());
                }
                request_frame(&window_loop, &frame_cb_loop, &frame_id_loop);
            }));
        }
        request_frame(&window, &frame_cb, &frame_id);

        Ok(Mounted {
            window,
            game,
            frame_cb,
            frame_id,
            _listeners: listeners,
        })
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Super Poach Bros starting...");

        let mounted = mount().inspect_err(|e| log::error!("Failed to start game: {:?}", e))?;
        MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));

        log::info!("Super Poach Bros running!");
        Ok(())
    }

    /// Start a fresh round
    #[wasm_bindgen]
    pub fn restart_game() {
        MOUNTED.with(|m| {
            if let Some(mounted) = m.borrow().as_ref() {
                let mut g = mounted.game.borrow_mut();
                g.restart();
                if let Some(document) = mounted.window.document() {
                    update_status(&document, &g);
                }
            }
        });
    }

    /// Stop the frame loop and remove every listener
    #[wasm_bindgen]
    pub fn stop_game() {
        let mounted = MOUNTED.with(|m| m.borrow_mut().take());
        drop(mounted);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use super_poach_bros::consts::MAX_FRAME_DT;
    use super_poach_bros::{Game, GameMode};

    env_logger::init();
    log::info!("Super Poach Bros (native) starting...");
    log::info!("The playable version runs in the browser - build for wasm32 and serve with trunk");

    // Headless demo: an idle player in each mode until the round ends
    for mode in [GameMode::Survival, GameMode::Goal] {
        let mut game = Game::new(mode, 42);
        let step_ms = f64::from(MAX_FRAME_DT) * 1000.0;
        let mut t = 0.0;
        while game.state.is_running() {
            game.frame(t);
            t += step_ms;
        }

        println!(
            "{} round ended: {:?} after {:.1}s with score {}",
            mode.as_str(),
            game.state.status,
            t / 1000.0,
            game.state.score
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
