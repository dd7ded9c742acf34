use crate::constants::{INITIAL_SPRITE_CAPACITY, MAX_FRAME_DT_SEC};
use crate::events::MagneticWiring;
use crate::render;
use backdrop_core::{PointerState, Scene, Sprite};
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub magnets: MagneticWiring,
    pub canvas: web::HtmlCanvasElement,
    /// Filled in once the adapter resolves; frames before that only animate.
    pub gpu: Option<render::GpuState>,
    pub sprites: Vec<Sprite>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        pointer: Rc<RefCell<PointerState>>,
        magnets: MagneticWiring,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            scene,
            pointer,
            magnets,
            canvas,
            gpu: None,
            sprites: Vec::with_capacity(INITIAL_SPRITE_CAPACITY),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.scene.borrow_mut().advance(dt_sec);
        self.magnets.step(dt_sec);

        let Some(g) = &mut self.gpu else {
            return;
        };
        let pointer = *self.pointer.borrow();
        let viewport = {
            let scene = self.scene.borrow();
            scene.build_sprites(&pointer, &mut self.sprites);
            scene.viewport()
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(&self.sprites, viewport) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Animation-frame loop over a [`FrameContext`]. Holds only a weak reference
/// to the context; dropping the loop cancels the pending frame.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start(ctx: &Rc<RefCell<FrameContext>>) -> Self {
        let pending = Rc::new(RefCell::new(None));
        schedule(&pending, Rc::downgrade(ctx));
        Self { pending }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // Releasing the handle cancels the frame and frees the callback, which
        // also holds `pending`
        self.pending.borrow_mut().take();
    }
}

fn schedule(pending: &Rc<RefCell<Option<AnimationFrame>>>, ctx: Weak<RefCell<FrameContext>>) {
    let slot = Rc::clone(pending);
    let handle = request_animation_frame(move |_timestamp| {
        slot.borrow_mut().take();
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        ctx.borrow_mut().frame();
        schedule(&slot, Rc::downgrade(&ctx));
    });
    *pending.borrow_mut() = Some(handle);
}
