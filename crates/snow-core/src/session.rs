//! Shared session state: the flakes, the wind bias, the loop state and both
//! stimulus mappers, owned together so every mutation goes through one place.

use crate::config::{ConfigError, SnowConfig};
use crate::lifecycle::{LoopEvent, LoopState};
use crate::particle::CanvasSize;
use crate::population::{burst_count, Population};
use crate::stimulus::{MotionMapper, ScrollMapper};
use crate::surface::Surface;
use crate::theme::{resolve_color, ColorScheme};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What a burst did. When `started` is set the host must schedule the first tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct BurstOutcome {
    pub spawned: usize,
    pub started: bool,
}

pub struct SnowSession<R = StdRng> {
    config: SnowConfig,
    population: Population,
    wind_bias: f64,
    state: LoopState,
    scroll: ScrollMapper,
    motion: MotionMapper,
    frames: u64,
    rng: R,
}

impl SnowSession<StdRng> {
    pub fn new(config: SnowConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> SnowSession<R> {
    pub fn with_rng(config: SnowConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            population: Population::new(),
            wind_bias: 0.0,
            state: LoopState::Idle,
            scroll: ScrollMapper::new(),
            motion: MotionMapper::new(),
            frames: 0,
            rng,
        })
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    /// Swap in a new configuration. Live flakes keep the attributes they were
    /// created with; an invalid config leaves the current one in place.
    pub fn set_config(&mut self, config: SnowConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn wind_bias(&self) -> f64 {
        self.wind_bias
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Ticks run since the loop last started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.scroll.last_scroll_top()
    }

    pub fn last_reading(&self) -> Option<DVec3> {
        self.motion.last_reading()
    }

    /// Add `count` flakes (capped per burst). Starts the loop if it was idle and
    /// anything was added.
    pub fn spawn(&mut self, count: usize, size: CanvasSize) -> BurstOutcome {
        let count = self
            .population
            .spawn(count, &mut self.rng, size, &self.config);
        let before = self.state;
        self.state = self.state.transition(LoopEvent::Spawned(count));
        let started = before != self.state;
        if started {
            self.frames = 0;
            log::info!("[snow] loop started with {} flakes", self.population.len());
        }
        BurstOutcome {
            spawned: count,
            started,
        }
    }

    /// Burst of `base_count * strength` flakes; strength 1 is the default burst.
    pub fn trigger_burst(&mut self, strength: f64, size: CanvasSize) -> BurstOutcome {
        let count = burst_count(self.config.base_count, strength);
        log::debug!("[snow] burst strength={strength:.3} count={count}");
        self.spawn(count, size)
    }

    pub fn on_scroll(&mut self, scroll_top: f64, size: CanvasSize) -> BurstOutcome {
        let strength = self.scroll.observe(scroll_top, &self.config);
        if strength > 0.0 {
            self.trigger_burst(strength, size)
        } else {
            BurstOutcome::default()
        }
    }

    pub fn on_acceleration(&mut self, reading: DVec3, size: CanvasSize) -> BurstOutcome {
        match self.motion.observe(reading, &self.config) {
            Some(impulse) => {
                self.wind_bias = impulse.wind_bias;
                log::debug!(
                    "[motion] shake strength={:.3} wind={:.3}",
                    impulse.strength,
                    impulse.wind_bias
                );
                self.trigger_burst(impulse.strength, size)
            }
            None => BurstOutcome::default(),
        }
    }

    /// Stand-in for a motion sensor: one reading with x = y = z drawn from
    /// `synthetic_shake`, fed through the motion mapper.
    pub fn synthetic_shake(&mut self, size: CanvasSize) -> BurstOutcome {
        let v = self.config.synthetic_shake.sample(&mut self.rng);
        self.on_acceleration(DVec3::splat(v), size)
    }

    /// One frame: clear, resolve the color, then for each flake draw, advance,
    /// drop it if faded, otherwise wrap it. Returns the state after the tick;
    /// `Running` means the host should schedule another one.
    pub fn tick<S, C>(&mut self, surface: &mut S, scheme: &C) -> LoopState
    where
        S: Surface + ?Sized,
        C: ColorScheme + ?Sized,
    {
        if !self.state.is_running() {
            return self.state;
        }
        let size = surface.size();
        surface.clear(size);
        let color = resolve_color(scheme, &self.config.palette);
        let wind_bias = self.wind_bias;

        self.population.sweep(|p| {
            if p.opacity > 0.0 {
                surface.fill_circle(p.position, p.radius, color, p.opacity);
            }
            p.advance(wind_bias);
            if p.is_expired() {
                return false;
            }
            p.wrap(size);
            true
        });
        self.frames += 1;

        let remaining = self.population.len();
        self.state = self.state.transition(LoopEvent::TickFinished { remaining });
        if !self.state.is_running() {
            log::info!("[snow] loop idle after {} frames", self.frames);
        }
        self.state
    }
}
