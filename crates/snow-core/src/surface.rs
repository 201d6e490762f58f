use crate::particle::CanvasSize;
use crate::theme::FlakeColor;
use glam::DVec2;

/// 2D drawing target supplied by the host.
pub trait Surface {
    /// Current pixel size. May change between ticks.
    fn size(&self) -> CanvasSize;

    fn clear(&mut self, size: CanvasSize);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: FlakeColor, alpha: f64);
}
