#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, TICK_INTERVAL_MS};
use backdrop_core::{BackdropConfig, Scene};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod input;
mod render;

thread_local! {
    static MOUNTED: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
}

/// Everything a mounted backdrop holds. Dropping it stops the tick interval,
/// cancels the pending animation frame and removes every listener.
struct Backdrop {
    canvas_id: String,
    _ticker: Interval,
    _frames: frame::FrameLoop,
    _resize: EventListener,
    _pointer: events::PointerSubscription,
    _frame_ctx: Rc<RefCell<frame::FrameContext>>,
}

impl Backdrop {
    fn mount(canvas_id: &str) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::canvas_by_id(&document, canvas_id)?;

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        dom::sync_canvas_backing_size(&canvas);
        let viewport = dom::viewport_size();

        let config = BackdropConfig::default();
        let spring = config.spring;
        let scene = Rc::new(RefCell::new(Scene::new(config, viewport, rand::random())?));

        let scene_for_press = Rc::downgrade(&scene);
        let scene_for_release = Rc::downgrade(&scene);
        let pointer = events::PointerSubscription::attach(
            &window,
            move |p| {
                if let Some(scene) = scene_for_press.upgrade() {
                    scene.borrow_mut().press(p);
                }
            },
            move || {
                if let Some(scene) = scene_for_release.upgrade() {
                    scene.borrow_mut().release();
                }
            },
        );

        let magnets = events::MagneticWiring::attach(&document, spring);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
            scene.clone(),
            pointer.state(),
            magnets,
            canvas.clone(),
        )));
        let frames = frame::FrameLoop::start(&frame_ctx);

        let scene_for_tick = Rc::downgrade(&scene);
        let pointer_for_tick = pointer.state();
        let ticker = Interval::new(TICK_INTERVAL_MS, move || {
            if let Some(scene) = scene_for_tick.upgrade() {
                let p = *pointer_for_tick.borrow();
                scene.borrow_mut().tick(&p);
            }
        });

        let scene_for_resize = Rc::downgrade(&scene);
        let canvas_for_resize = canvas.clone();
        let resize = EventListener::new(&window, "resize", move |_event| {
            dom::sync_canvas_backing_size(&canvas_for_resize);
            if let Some(scene) = scene_for_resize.upgrade() {
                scene.borrow_mut().resize(dom::viewport_size());
            }
        });

        // WebGPU comes up asynchronously; the simulation runs without it meanwhile
        let gpu_target = Rc::downgrade(&frame_ctx);
        spawn_local(async move {
            let Some(gpu) = frame::init_gpu(&canvas).await else {
                return;
            };
            match gpu_target.upgrade() {
                Some(ctx) => ctx.borrow_mut().gpu = Some(gpu),
                None => log::debug!("[gpu] backdrop unmounted before adapter was ready"),
            }
        });

        log::info!(
            "[mount] #{} {}x{}",
            canvas_id,
            viewport.width,
            viewport.height
        );
        Ok(Self {
            canvas_id: canvas_id.to_owned(),
            _ticker: ticker,
            _frames: frames,
            _resize: resize,
            _pointer: pointer,
            _frame_ctx: frame_ctx,
        })
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        log::info!("[mount] released #{}", self.canvas_id);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .is_some();
    if has_canvas {
        if let Err(e) = mount(CANVAS_ID) {
            log::error!("init error: {:?}", e);
        }
    } else {
        log::info!("[mount] no #{}; waiting for mount_backdrop()", CANVAS_ID);
    }
    Ok(())
}

/// Mount onto `<canvas id={canvas_id}>`, replacing any mounted backdrop.
#[wasm_bindgen]
pub fn mount_backdrop(canvas_id: &str) -> Result<(), JsValue> {
    mount(canvas_id).map_err(|e| js_sys::Error::new(&format!("{:#}", e)).into())
}

/// Tear down the mounted backdrop. Calling it with nothing mounted is a no-op.
#[wasm_bindgen]
pub fn unmount_backdrop() {
    let previous = MOUNTED.with(|m| m.borrow_mut().take());
    drop(previous);
}

fn mount(canvas_id: &str) -> anyhow::Result<()> {
    unmount_backdrop();
    let backdrop = Backdrop::mount(canvas_id)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(backdrop));
    Ok(())
}
