use glam::DVec3;

#[inline]
pub fn is_shake_key(key: &str) -> bool {
    crate::constants::SHAKE_KEYS.iter().any(|k| *k == key)
}

/// Builds a reading from the three optional sensor axes; any missing axis
/// drops the whole reading.
#[inline]
pub fn reading_from_axes(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Option<DVec3> {
    Some(DVec3::new(x?, y?, z?))
}

/// Scroll offset with the `documentElement.scrollTop` fallback used when
/// `window.scrollY` is unavailable.
#[inline]
pub fn pick_scroll_offset(scroll_y: Option<f64>, element_scroll_top: Option<f64>) -> f64 {
    scroll_y.or(element_scroll_top).unwrap_or(0.0)
}

/// Backing-store size for the overlay, never below one pixel.
#[inline]
pub fn backing_size(inner_width: Option<f64>, inner_height: Option<f64>) -> (u32, u32) {
    let w = inner_width.unwrap_or(1.0).max(1.0) as u32;
    let h = inner_height.unwrap_or(1.0).max(1.0) as u32;
    (w, h)
}
