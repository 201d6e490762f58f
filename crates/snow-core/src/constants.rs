// Default tuning for bursts, stimulus mapping and flake appearance.
// `SnowConfig::default()` is built from these values.

// Burst sizing
pub const BASE_SNOWFLAKES: f64 = 100.0; // flakes spawned by a strength-1 burst
pub const MAX_BURST_FLAKES: usize = 10_000; // ceiling on flakes added by a single burst

// Scroll mapping
pub const SCROLL_THRESHOLD: f64 = 100.0; // scroll distance that yields strength 1
pub const SCROLL_STRENGTH_CAP: f64 = 1.0;

// Shake mapping
pub const SHAKE_THRESHOLD: f64 = 15.0; // summed-delta magnitude required to fire
pub const SHAKE_STRENGTH_DIVISOR: f64 = 50.0;
pub const SHAKE_STRENGTH_CAP: f64 = 3.0;
pub const SHAKE_WIND_GAIN: f64 = 0.5; // x delta -> wind bias

// Lateral pixels per tick for each unit of wind bias
pub const WIND_DRIFT: f64 = 0.2;

// Flake attribute ranges, min inclusive and max exclusive
pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_MAX: f64 = 5.0;
pub const FALL_SPEED_MIN: f64 = 1.0;
pub const FALL_SPEED_MAX: f64 = 3.0;
pub const OPACITY_MIN: f64 = 0.2;
pub const OPACITY_MAX: f64 = 1.0;
pub const FADE_RATE_MIN: f64 = 0.002;
pub const FADE_RATE_MAX: f64 = 0.007;

// Theme colors
pub const DARK_FLAKE_RGB: [u8; 3] = [255, 255, 255]; // white on dark pages
pub const LIGHT_FLAKE_RGB: [u8; 3] = [180, 180, 255]; // soft bluish-white on light pages

// Keyboard fallback: x = y = z drawn once from this range
pub const SYNTHETIC_SHAKE_MIN: f64 = 5.0;
pub const SYNTHETIC_SHAKE_MAX: f64 = 25.0;
