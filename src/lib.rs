#![cfg(target_arch = "wasm32")]
use snow_core::{SnowConfig, SnowSession};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod surface;

use frame::{FrameContext, FrameLoop};
use surface::{CanvasSurface, MediaScheme};

thread_local! {
    // Set once by `init`; the exported functions below act on it.
    static FRAME_LOOP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

fn with_frame_loop<T>(f: impl FnOnce(&FrameLoop) -> T) -> Option<T> {
    FRAME_LOOP.with(|slot| slot.borrow().as_ref().map(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snow-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let (canvas, ctx) = dom::create_overlay_canvas(&document)?;

    let session = SnowSession::new(SnowConfig::default())?;
    let frame_loop = FrameLoop::new(FrameContext {
        session,
        surface: CanvasSurface::new(canvas.clone(), ctx),
        scheme: MediaScheme,
    });

    events::wire_resize(canvas);
    events::wire_scroll(frame_loop.clone());
    let motion = events::wire_device_motion(frame_loop.clone());
    events::wire_shake_key(frame_loop.clone());
    log::info!("[snow] listeners wired (device motion: {motion})");

    FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));
    Ok(())
}

/// Spawns a burst of `100 * strength` flakes (strength defaults to 1).
#[wasm_bindgen]
pub fn trigger_snow(strength: Option<f64>) -> usize {
    let strength = strength.unwrap_or(1.0);
    with_frame_loop(|fl| {
        fl.burst(|ctx| {
            let size = ctx.size();
            ctx.session.trigger_burst(strength, size)
        })
        .spawned
    })
    .unwrap_or(0)
}

/// Merges overrides from a JS object into the current config. Returns false
/// and keeps the current config if the result does not validate.
#[wasm_bindgen]
pub fn configure(value: JsValue) -> bool {
    with_frame_loop(|fl| {
        fl.with_ctx(|ctx| {
            let next = config::config_from_js(&value, ctx.session.config());
            match ctx.session.set_config(next) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("[snow] config rejected: {e}");
                    false
                }
            }
        })
    })
    .unwrap_or(false)
}

#[wasm_bindgen]
pub fn particle_count() -> usize {
    with_frame_loop(|fl| fl.with_ctx(|ctx| ctx.session.len())).unwrap_or(0)
}

#[wasm_bindgen]
pub fn is_animating() -> bool {
    with_frame_loop(|fl| fl.with_ctx(|ctx| ctx.session.is_running())).unwrap_or(false)
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}

