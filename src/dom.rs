use crate::constants::{CANVAS_STYLE, DARK_MODE_QUERY};
use crate::input;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Full-window, click-through canvas appended to `<body>`.
pub fn create_overlay_canvas(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE {
        _ = style.set_property(name, value);
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.append_child(&canvas).map_err(|e| anyhow!("{:?}", e))?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok((canvas, ctx))
}

pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let (width, height) = input::backing_size(
            w.inner_width().ok().and_then(|v| v.as_f64()),
            w.inner_height().ok().and_then(|v| v.as_f64()),
        );
        canvas.set_width(width);
        canvas.set_height(height);
    }
}

pub fn scroll_offset(window: &web::Window) -> f64 {
    let element_top = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_top() as f64);
    input::pick_scroll_offset(window.scroll_y().ok(), element_top)
}

/// `None` when `matchMedia` is missing or the query fails.
pub fn prefers_dark() -> Option<bool> {
    let window = web::window()?;
    match window.match_media(DARK_MODE_QUERY) {
        Ok(list) => list.map(|l| l.matches()),
        Err(e) => {
            log::warn!("[theme] matchMedia failed: {:?}", e);
            None
        }
    }
}

#[inline]
pub fn has_global(window: &web::Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &name.into()).unwrap_or(false)
}
