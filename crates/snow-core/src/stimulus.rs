//! Mapping raw scroll and motion events to burst strengths.
//!
//! Both mappers keep the previous observation and react to the change since
//! then. Neither spawns anything on its own; they return a strength that the
//! session turns into a burst.

use crate::config::SnowConfig;
use glam::DVec3;

/// Tracks the last vertical scroll offset.
#[derive(Clone, Debug, Default)]
pub struct ScrollMapper {
    last_scroll_top: f64,
}

impl ScrollMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    /// Strength in `[0, scroll_cap]` for a move to `scroll_top`.
    ///
    /// The baseline always moves to the new offset (clamped at 0), even when
    /// the strength is zero. Non-finite offsets are ignored.
    pub fn observe(&mut self, scroll_top: f64, config: &SnowConfig) -> f64 {
        if !scroll_top.is_finite() {
            return 0.0;
        }
        let delta = (scroll_top - self.last_scroll_top).abs();
        let strength = (delta / config.scroll_threshold).min(config.scroll_cap);
        self.last_scroll_top = scroll_top.max(0.0);
        strength
    }
}

/// Result of a reading that crossed the shake threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeImpulse {
    pub strength: f64,
    pub wind_bias: f64,
}

/// Tracks the last three-axis acceleration reading.
#[derive(Clone, Debug, Default)]
pub struct MotionMapper {
    last: Option<DVec3>,
}

impl MotionMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_reading(&self) -> Option<DVec3> {
        self.last
    }

    /// Signed sum of the per-axis deltas, then absolute value. Opposing axes cancel.
    pub fn magnitude(delta: DVec3) -> f64 {
        (delta.x + delta.y + delta.z).abs()
    }

    /// The first reading only records a baseline. Later readings fire when the
    /// summed delta exceeds `shake_threshold`; the baseline is updated either way.
    pub fn observe(&mut self, reading: DVec3, config: &SnowConfig) -> Option<ShakeImpulse> {
        if !reading.is_finite() {
            return None;
        }
        let previous = self.last.replace(reading)?;
        let delta = reading - previous;
        let magnitude = Self::magnitude(delta);
        if magnitude <= config.shake_threshold {
            return None;
        }
        Some(ShakeImpulse {
            strength: (magnitude / config.shake_divisor).min(config.shake_cap),
            wind_bias: delta.x * config.shake_wind_gain,
        })
    }
}
