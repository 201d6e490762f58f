use crate::dom;
use crate::frame::FrameLoop;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll(frame_loop: FrameLoop) {
    if let Some(window) = web::window() {
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let offset = dom::scroll_offset(&win);
            _ = frame_loop.burst(|ctx| {
                let size = ctx.size();
                ctx.session.on_scroll(offset, size)
            });
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_resize(canvas: web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(&canvas);
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
