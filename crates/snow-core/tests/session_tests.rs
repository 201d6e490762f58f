// Host-side tests for the session: bursts, stimulus wiring and the frame loop.

use glam::{DVec2, DVec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use snow_core::constants::MAX_BURST_FLAKES;
use snow_core::*;
use std::cell::Cell;

#[derive(Default)]
struct RecordingSurface {
    size: CanvasSize,
    clears: usize,
    draws: Vec<(DVec2, f64, FlakeColor, f64)>,
}

impl RecordingSurface {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: CanvasSize::new(width, height),
            ..Default::default()
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn clear(&mut self, _size: CanvasSize) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: FlakeColor, alpha: f64) {
        self.draws.push((center, radius, color, alpha));
    }
}

struct SwitchableScheme(Cell<Option<bool>>);

impl ColorScheme for SwitchableScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0.get()
    }
}

const SIZE: CanvasSize = CanvasSize::new(500.0, 500.0);

fn session() -> SnowSession<StdRng> {
    SnowSession::with_rng(SnowConfig::default(), StdRng::seed_from_u64(7)).unwrap()
}

#[test]
fn default_burst_spawns_base_count_and_starts_loop() {
    let mut s = session();
    assert_eq!(s.state(), LoopState::Idle);
    let out = s.trigger_burst(1.0, SIZE);
    assert_eq!(out.spawned, 100);
    assert!(out.started);
    assert!(s.is_running());
    assert_eq!(s.len(), 100);
}

#[test]
fn burst_while_running_does_not_start_a_second_loop() {
    let mut s = session();
    assert!(s.trigger_burst(1.0, SIZE).started);
    let again = s.trigger_burst(0.5, SIZE);
    assert_eq!(again.spawned, 50);
    assert!(!again.started);
    assert_eq!(s.len(), 150);
}

#[test]
fn empty_burst_does_not_start_loop() {
    let mut s = session();
    for strength in [0.0, 0.004, -1.0, f64::NAN] {
        let out = s.trigger_burst(strength, SIZE);
        assert_eq!(out, BurstOutcome::default());
    }
    assert_eq!(s.state(), LoopState::Idle);
    assert!(s.is_empty());
}

#[test]
fn scroll_events_spawn_proportional_bursts() {
    let mut s = session();
    let out = s.on_scroll(50.0, SIZE);
    assert_eq!(out.spawned, 50);
    assert_eq!(s.last_scroll_top(), 50.0);
    assert_eq!(s.wind_bias(), 0.0);

    let mut s = session();
    let out = s.on_scroll(1000.0, SIZE);
    assert_eq!(out.spawned, 100);
}

#[test]
fn scroll_without_movement_spawns_nothing() {
    let mut s = session();
    let out = s.on_scroll(0.0, SIZE);
    assert_eq!(out.spawned, 0);
    assert!(!s.is_running());
}

#[test]
fn motion_baseline_then_shake() {
    let mut s = session();
    let first = s.on_acceleration(DVec3::new(1.0, 1.0, 1.0), SIZE);
    assert_eq!(first.spawned, 0);
    assert!(s.is_empty());
    assert_eq!(s.last_reading(), Some(DVec3::ONE));

    let second = s.on_acceleration(DVec3::new(20.0, 20.0, 20.0), SIZE);
    // Magnitude 57, strength 57/50; the count is the plain floor of 100x that.
    assert_eq!(second.spawned, (100.0_f64 * (57.0 / 50.0)).floor() as usize);
    assert!(second.started);
    assert!((s.wind_bias() - 9.5).abs() < 1e-12);
}

#[test]
fn wind_bias_persists_until_next_shake() {
    let mut s = session();
    let _ = s.on_acceleration(DVec3::ZERO, SIZE);
    let _ = s.on_acceleration(DVec3::new(20.0, 0.0, 0.0), SIZE);
    assert!((s.wind_bias() - 10.0).abs() < 1e-12);

    // Small reading and scroll leave the bias alone.
    let _ = s.on_acceleration(DVec3::new(21.0, 0.0, 0.0), SIZE);
    let _ = s.on_scroll(300.0, SIZE);
    let mut surface = RecordingSurface::new(500.0, 500.0);
    s.tick(&mut surface, &false);
    assert!((s.wind_bias() - 10.0).abs() < 1e-12);

    let _ = s.on_acceleration(DVec3::new(-19.0, 0.0, 0.0), SIZE);
    assert!((s.wind_bias() + 20.0).abs() < 1e-12);
}

#[test]
fn synthetic_shake_first_press_is_baseline_only() {
    let mut s = session();
    let out = s.synthetic_shake(SIZE);
    assert_eq!(out.spawned, 0);
    let reading = s.last_reading().expect("baseline recorded");
    assert!(reading.x >= 5.0 && reading.x < 25.0);
    assert_eq!(reading.x, reading.y);
    assert_eq!(reading.y, reading.z);
}

#[test]
fn synthetic_shake_can_fire_after_baseline() {
    let mut s = session();
    let _ = s.on_acceleration(DVec3::splat(-25.0), SIZE);
    // Any value in [5, 25) gives a summed delta of at least 90.
    let out = s.synthetic_shake(SIZE);
    assert!(out.spawned >= 180);
    assert!(s.wind_bias() > 0.0);
}

#[test]
fn tick_draws_every_flake_then_clears_once() {
    let mut s = session();
    let _ = s.trigger_burst(0.2, SIZE);
    let before: Vec<DVec2> = s.population().iter().map(|p| p.position).collect();
    let mut surface = RecordingSurface::new(500.0, 500.0);
    let state = s.tick(&mut surface, &None::<bool>);
    assert_eq!(state, LoopState::Running);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.draws.len(), 20);
    assert_eq!(s.frames(), 1);

    // Each flake is drawn where it stood before this tick moved it.
    let drawn: Vec<DVec2> = surface.draws.iter().map(|d| d.0).collect();
    assert_eq!(drawn, before);
    let after: Vec<DVec2> = s.population().iter().map(|p| p.position).collect();
    assert_ne!(after, before);
    for (_, _, color, alpha) in &surface.draws {
        assert_eq!(*color, FlakeColor::rgb(180, 180, 255));
        assert!(*alpha > 0.0 && *alpha <= 1.0);
    }
}

#[test]
fn loop_returns_to_idle_once_every_flake_fades() {
    let mut s = session();
    assert!(s.trigger_burst(1.0, SIZE).started);
    let mut surface = RecordingSurface::new(500.0, 500.0);
    let mut ticks = 0;
    while s.tick(&mut surface, &true) == LoopState::Running {
        ticks += 1;
        assert!(ticks < 1000, "loop did not terminate");
    }
    assert!(s.is_empty());
    assert_eq!(s.state(), LoopState::Idle);

    // Idle ticks are inert until the next burst.
    let clears = surface.clears;
    assert_eq!(s.tick(&mut surface, &true), LoopState::Idle);
    assert_eq!(surface.clears, clears);

    assert!(s.trigger_burst(1.0, SIZE).started);
    assert_eq!(s.frames(), 0);
}

#[test]
fn faded_flake_is_never_drawn_twice_after_expiry() {
    let mut config = SnowConfig::default();
    config.opacity = Span::new(0.004, 0.0041);
    config.fade_rate = Span::new(0.005, 0.0051);
    let mut s = SnowSession::with_rng(config, StdRng::seed_from_u64(1)).unwrap();
    let _ = s.trigger_burst(0.1, SIZE);
    let mut surface = RecordingSurface::new(500.0, 500.0);

    // Drawn once at positive alpha, then removed in the same pass.
    assert_eq!(s.tick(&mut surface, &false), LoopState::Idle);
    assert_eq!(surface.draws.len(), 10);
    assert!(surface.draws.iter().all(|d| d.3 > 0.0));
    assert!(s.is_empty());
}

#[test]
fn theme_switch_applies_on_next_tick() {
    let mut s = session();
    let _ = s.trigger_burst(0.05, SIZE);
    let scheme = SwitchableScheme(Cell::new(Some(false)));
    let mut surface = RecordingSurface::new(500.0, 500.0);

    s.tick(&mut surface, &scheme);
    assert!(surface
        .draws
        .iter()
        .all(|d| d.2 == FlakeColor::rgb(180, 180, 255)));

    surface.draws.clear();
    scheme.0.set(Some(true));
    s.tick(&mut surface, &scheme);
    assert_eq!(surface.draws.len(), 5);
    assert!(surface
        .draws
        .iter()
        .all(|d| d.2 == FlakeColor::rgb(255, 255, 255)));
    assert_eq!(s.len(), 5);
}

#[test]
fn resize_is_picked_up_on_the_very_next_tick() {
    let mut config = SnowConfig::default();
    config.fall_speed = Span::new(600.0, 601.0);
    let mut s = SnowSession::with_rng(config, StdRng::seed_from_u64(11)).unwrap();
    let _ = s.trigger_burst(0.3, SIZE);

    let mut surface = RecordingSurface::new(500.0, 2000.0);
    s.tick(&mut surface, &false);
    assert!(s.population().iter().all(|p| p.position.y >= 600.0));

    surface.size = CanvasSize::new(500.0, 100.0);
    s.tick(&mut surface, &false);
    assert!(s.population().iter().all(|p| p.position.y == 0.0));
}

#[test]
fn wind_carries_flakes_across_the_edge() {
    let mut config = SnowConfig::default();
    config.fall_speed = Span::new(1.0, 1.0001);
    let mut s = SnowSession::with_rng(config, StdRng::seed_from_u64(5)).unwrap();
    let narrow = CanvasSize::new(20.0, 500.0);
    // Wind bias of -150 moves flakes 30px left per tick.
    let _ = s.on_acceleration(DVec3::ZERO, narrow);
    let _ = s.on_acceleration(DVec3::new(-300.0, 0.0, 0.0), narrow);
    assert!((s.wind_bias() + 150.0).abs() < 1e-9);

    let mut surface = RecordingSurface::new(20.0, 500.0);
    s.tick(&mut surface, &false);
    assert!(s.population().iter().all(|p| p.position.x == 20.0));
}

#[test]
fn huge_strength_spawns_at_most_the_burst_ceiling() {
    let mut s = session();
    let out = s.trigger_burst(1e300, SIZE);
    assert_eq!(out.spawned, MAX_BURST_FLAKES);
    assert!(out.started);
    assert_eq!(s.len(), MAX_BURST_FLAKES);

    let again = s.spawn(usize::MAX, SIZE);
    assert_eq!(again.spawned, MAX_BURST_FLAKES);
    assert!(!again.started);
    assert_eq!(s.len(), 2 * MAX_BURST_FLAKES);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = SnowConfig::default();
    config.scroll_threshold = 0.0;
    assert!(SnowSession::new(config).is_err());

    let mut s = session();
    let mut bad = SnowConfig::default();
    bad.radius = Span::new(5.0, 1.0);
    assert!(s.set_config(bad).is_err());
    assert_eq!(s.config(), &SnowConfig::default());
}
