use crate::frame::FrameLoop;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, frame_loop: &FrameLoop) {
    if ev.repeat() || !input::is_shake_key(&ev.key()) {
        return;
    }
    let outcome = frame_loop.burst(|ctx| {
        let size = ctx.size();
        ctx.session.synthetic_shake(size)
    });
    log::info!("[keys] synthetic shake spawned={}", outcome.spawned);
}

pub fn wire_shake_key(frame_loop: FrameLoop) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &frame_loop);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
