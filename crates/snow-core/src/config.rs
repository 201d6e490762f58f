//! Tunable parameters for the snow session.

use crate::constants::*;
use crate::theme::Palette;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} range [{min}, {max}) is empty")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be finite and not negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("opacity range [{min}, {max}) must lie within (0, 1]")]
    OpacityOutOfUnit { min: f64, max: f64 },
}

/// Half-open interval `[min, max)` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.gen::<f64>() * (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnowConfig {
    /// Flakes per unit of burst strength.
    pub base_count: f64,
    pub scroll_threshold: f64,
    pub scroll_cap: f64,
    pub shake_threshold: f64,
    pub shake_divisor: f64,
    pub shake_cap: f64,
    pub shake_wind_gain: f64,
    pub radius: Span,
    pub fall_speed: Span,
    pub opacity: Span,
    pub fade_rate: Span,
    pub palette: Palette,
    pub synthetic_shake: Span,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            base_count: BASE_SNOWFLAKES,
            scroll_threshold: SCROLL_THRESHOLD,
            scroll_cap: SCROLL_STRENGTH_CAP,
            shake_threshold: SHAKE_THRESHOLD,
            shake_divisor: SHAKE_STRENGTH_DIVISOR,
            shake_cap: SHAKE_STRENGTH_CAP,
            shake_wind_gain: SHAKE_WIND_GAIN,
            radius: Span::new(RADIUS_MIN, RADIUS_MAX),
            fall_speed: Span::new(FALL_SPEED_MIN, FALL_SPEED_MAX),
            opacity: Span::new(OPACITY_MIN, OPACITY_MAX),
            fade_rate: Span::new(FADE_RATE_MIN, FADE_RATE_MAX),
            palette: Palette::default(),
            synthetic_shake: Span::new(SYNTHETIC_SHAKE_MIN, SYNTHETIC_SHAKE_MAX),
        }
    }
}

impl SnowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scroll_threshold", self.scroll_threshold)?;
        positive("shake_divisor", self.shake_divisor)?;
        non_negative("base_count", self.base_count)?;
        non_negative("scroll_cap", self.scroll_cap)?;
        non_negative("shake_threshold", self.shake_threshold)?;
        non_negative("shake_cap", self.shake_cap)?;
        if !self.shake_wind_gain.is_finite() {
            return Err(ConfigError::Negative {
                name: "shake_wind_gain",
                value: self.shake_wind_gain,
            });
        }

        self.radius.validate("radius")?;
        self.fall_speed.validate("fall_speed")?;
        self.opacity.validate("opacity")?;
        self.fade_rate.validate("fade_rate")?;
        self.synthetic_shake.validate("synthetic_shake")?;

        // Fall speed and fade rate must keep flakes moving down and fading out,
        // otherwise the loop never returns to idle.
        positive("fall_speed.min", self.fall_speed.min)?;
        positive("fade_rate.min", self.fade_rate.min)?;
        if self.opacity.min <= 0.0 || self.opacity.max > 1.0 {
            return Err(ConfigError::OpacityOutOfUnit {
                min: self.opacity.min,
                max: self.opacity.max,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
