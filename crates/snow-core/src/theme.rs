//! Flake color selection from the page's light/dark preference.
//!
//! The color is resolved again on every tick so a theme switch in the middle
//! of an animation shows up on the next frame without touching any flakes.

use crate::constants::{DARK_FLAKE_RGB, LIGHT_FLAKE_RGB};

/// Opaque RGB color; per-flake alpha is applied at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlakeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FlakeColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// CSS `rgba(...)` string with the given alpha, as canvas fill styles expect.
    pub fn to_css_rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

/// The pair of colors the resolver picks between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub dark: FlakeColor,
    pub light: FlakeColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: FlakeColor::from_array(DARK_FLAKE_RGB),
            light: FlakeColor::from_array(LIGHT_FLAKE_RGB),
        }
    }
}

/// Host query for the ambient "prefers dark" signal.
///
/// `None` means the capability is unavailable and is treated as light mode.
pub trait ColorScheme {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Fixed answer, useful for hosts without a theme signal and for tests.
impl ColorScheme for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

impl ColorScheme for bool {
    fn prefers_dark(&self) -> Option<bool> {
        Some(*self)
    }
}

pub fn resolve_color<C: ColorScheme + ?Sized>(scheme: &C, palette: &Palette) -> FlakeColor {
    if scheme.prefers_dark().unwrap_or(false) {
        palette.dark
    } else {
        palette.light
    }
}
