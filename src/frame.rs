use crate::surface::{CanvasSurface, MediaScheme};
use snow_core::{BurstOutcome, LoopState, SnowSession, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: SnowSession,
    pub surface: CanvasSurface,
    pub scheme: MediaScheme,
}

impl FrameContext {
    pub fn frame(&mut self) -> LoopState {
        self.session.tick(&mut self.surface, &self.scheme)
    }

    pub fn size(&self) -> snow_core::CanvasSize {
        self.surface.size()
    }
}

/// requestAnimationFrame driver that re-arms itself only while the session is
/// running. Bursts that start the session arm the first frame.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let frame_loop = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
        };
        let frame_loop_tick = frame_loop.clone();
        *frame_loop.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let state = frame_loop_tick.ctx.borrow_mut().frame();
            if state.is_running() {
                frame_loop_tick.request_frame();
            }
        }) as Box<dyn FnMut()>));
        frame_loop
    }

    fn request_frame(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            if let Err(e) = w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                log::error!("[snow] requestAnimationFrame failed: {:?}", e);
            }
        }
    }

    /// Runs a burst against the context and arms the loop if it just started.
    pub fn burst(&self, f: impl FnOnce(&mut FrameContext) -> BurstOutcome) -> BurstOutcome {
        let outcome = f(&mut *self.ctx.borrow_mut());
        if outcome.started {
            self.request_frame();
        }
        outcome
    }

    pub fn with_ctx<T>(&self, f: impl FnOnce(&mut FrameContext) -> T) -> T {
        f(&mut *self.ctx.borrow_mut())
    }
}
