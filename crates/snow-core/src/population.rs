use crate::config::SnowConfig;
use crate::constants::MAX_BURST_FLAKES;
use crate::particle::{CanvasSize, Particle};
use rand::Rng;

/// Number of flakes for a burst of `strength`: `floor(base * strength)`,
/// clamped to `[0, MAX_BURST_FLAKES]`.
///
/// Negative and NaN products spawn nothing; huge or infinite ones saturate at
/// the ceiling.
pub fn burst_count(base: f64, strength: f64) -> usize {
    let raw = (base * strength).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else {
        raw.min(MAX_BURST_FLAKES as f64) as usize
    }
}

/// The live flakes. Grows through `spawn` and shrinks only as flakes fade out.
#[derive(Clone, Debug, Default)]
pub struct Population {
    flakes: Vec<Particle>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` flakes, at most `MAX_BURST_FLAKES`. Returns how many were added.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
        size: CanvasSize,
        config: &SnowConfig,
    ) -> usize {
        let count = count.min(MAX_BURST_FLAKES);
        self.flakes.reserve(count);
        for _ in 0..count {
            self.flakes.push(Particle::spawn(rng, size, config));
        }
        count
    }

    pub fn insert(&mut self, particle: Particle) {
        self.flakes.push(particle);
    }

    /// Drops every faded flake, keeping survivors in their current order.
    pub fn remove_expired(&mut self) {
        self.flakes.retain(|p| !p.is_expired());
    }

    /// Visits every flake once in order; flakes for which `keep` returns false
    /// are compacted out in the same pass.
    pub fn sweep<F>(&mut self, keep: F)
    where
        F: FnMut(&mut Particle) -> bool,
    {
        self.flakes.retain_mut(keep);
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.flakes.iter()
    }
}
