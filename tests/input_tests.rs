// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn shake_key_matches_either_case_only() {
    assert!(is_shake_key("s"));
    assert!(is_shake_key("S"));
    for key in ["a", "Shift", " ", "", "ss", "ArrowDown"] {
        assert!(!is_shake_key(key), "{key:?} should not shake");
    }
}

#[test]
fn reading_requires_all_three_axes() {
    let r = reading_from_axes(Some(1.0), Some(-2.0), Some(9.8)).unwrap();
    assert_eq!((r.x, r.y, r.z), (1.0, -2.0, 9.8));
    assert!(reading_from_axes(None, Some(1.0), Some(1.0)).is_none());
    assert!(reading_from_axes(Some(1.0), None, Some(1.0)).is_none());
    assert!(reading_from_axes(Some(1.0), Some(1.0), None).is_none());
}

#[test]
fn scroll_offset_prefers_window_then_element() {
    assert_eq!(pick_scroll_offset(Some(120.0), Some(80.0)), 120.0);
    assert_eq!(pick_scroll_offset(None, Some(80.0)), 80.0);
    assert_eq!(pick_scroll_offset(None, None), 0.0);
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(Some(1280.0), Some(720.0)), (1280, 720));
    assert_eq!(backing_size(Some(0.0), Some(-5.0)), (1, 1));
    assert_eq!(backing_size(None, None), (1, 1));
    assert_eq!(backing_size(Some(f64::NAN), Some(300.5)), (1, 300));
}
