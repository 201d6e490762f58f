use crate::config::SnowConfig;
use crate::constants::WIND_DRIFT;
use glam::DVec2;
use rand::Rng;

/// Pixel dimensions of the drawing surface, read fresh on every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One falling flake. Only `position` and `opacity` change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub radius: f64,
    /// Vertical pixels advanced per tick.
    pub fall_speed: f64,
    pub opacity: f64,
    /// Opacity lost per tick.
    pub fade_rate: f64,
}

impl Particle {
    /// Random flake anywhere on the canvas with attributes drawn from `config`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, size: CanvasSize, config: &SnowConfig) -> Self {
        let x = rng.gen::<f64>() * size.width;
        let y = rng.gen::<f64>() * size.height;
        Self {
            position: DVec2::new(x, y),
            radius: config.radius.sample(rng),
            fall_speed: config.fall_speed.sample(rng),
            opacity: config.opacity.sample(rng),
            fade_rate: config.fade_rate.sample(rng),
        }
    }

    #[inline]
    pub fn advance(&mut self, wind_bias: f64) {
        self.position.x += wind_bias * WIND_DRIFT;
        self.position.y += self.fall_speed;
        self.opacity -= self.fade_rate;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Horizontal wraparound; flakes past the bottom restart at the top.
    #[inline]
    pub fn wrap(&mut self, size: CanvasSize) {
        if self.position.y > size.height {
            self.position.y = 0.0;
        }
        if self.position.x > size.width {
            self.position.x = 0.0;
        }
        if self.position.x < 0.0 {
            self.position.x = size.width;
        }
    }
}
