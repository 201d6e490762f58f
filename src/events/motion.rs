use crate::constants::MOTION_EVENT_CTOR;
use crate::dom;
use crate::frame::FrameLoop;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feeds `accelerationIncludingGravity` readings to the motion mapper. Returns
/// false when the browser has no motion support; the keyboard fallback covers it.
pub fn wire_device_motion(frame_loop: FrameLoop) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    if !dom::has_global(&window, MOTION_EVENT_CTOR) {
        log::warn!("[motion] DeviceMotionEvent unavailable; press S to shake");
        return false;
    }
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
        let Some(acc) = ev.acceleration_including_gravity() else {
            return;
        };
        let Some(reading) = input::reading_from_axes(acc.x(), acc.y(), acc.z()) else {
            return;
        };
        _ = frame_loop.burst(|ctx| {
            let size = ctx.size();
            ctx.session.on_acceleration(reading, size)
        });
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}
