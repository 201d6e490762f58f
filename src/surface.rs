use crate::dom;
use glam::DVec2;
use snow_core::{CanvasSize, ColorScheme, FlakeColor, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` backed by the overlay canvas' 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self, size: CanvasSize) {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: FlakeColor, alpha: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css_rgba(alpha));
        self.ctx.fill();
    }
}

/// Live `prefers-color-scheme` query, evaluated on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaScheme;

impl ColorScheme for MediaScheme {
    fn prefers_dark(&self) -> Option<bool> {
        dom::prefers_dark()
    }
}
