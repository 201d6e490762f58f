//! Reads `SnowConfig` overrides from a plain JS object.

use js_sys::{Array, Reflect};
use snow_core::{FlakeColor, SnowConfig};
use wasm_bindgen::JsValue;

fn number(value: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(value, &key.into()).ok()?.as_f64()
}

fn color(value: &JsValue, key: &str) -> Option<FlakeColor> {
    let v = Reflect::get(value, &key.into()).ok()?;
    if !Array::is_array(&v) {
        return None;
    }
    let arr: Array = v.into();
    if arr.length() != 3 {
        return None;
    }
    let mut rgb = [0u8; 3];
    for (i, slot) in rgb.iter_mut().enumerate() {
        *slot = arr.get(i as u32).as_f64()?.clamp(0.0, 255.0) as u8;
    }
    Some(FlakeColor::from_array(rgb))
}

/// Overlays any recognised keys of `value` onto `base`. Unknown keys and
/// non-numeric values are ignored; a bare number sets `baseCount`.
pub fn config_from_js(value: &JsValue, base: &SnowConfig) -> SnowConfig {
    let mut config = base.clone();

    if !value.is_object() {
        if let Some(count) = value.as_f64() {
            config.base_count = count;
        }
        return config;
    }

    macro_rules! extract {
        ($($field:ident).+, $key:expr) => {
            if let Some(v) = number(value, $key) {
                config.$($field).+ = v;
            }
        };
    }

    extract!(base_count, "baseCount");
    extract!(scroll_threshold, "scrollThreshold");
    extract!(scroll_cap, "scrollCap");
    extract!(shake_threshold, "shakeThreshold");
    extract!(shake_divisor, "shakeDivisor");
    extract!(shake_cap, "shakeCap");
    extract!(shake_wind_gain, "shakeWindGain");
    extract!(radius.min, "radiusMin");
    extract!(radius.max, "radiusMax");
    extract!(fall_speed.min, "fallSpeedMin");
    extract!(fall_speed.max, "fallSpeedMax");
    extract!(opacity.min, "opacityMin");
    extract!(opacity.max, "opacityMax");
    extract!(fade_rate.min, "fadeRateMin");
    extract!(fade_rate.max, "fadeRateMax");
    extract!(synthetic_shake.min, "syntheticShakeMin");
    extract!(synthetic_shake.max, "syntheticShakeMax");

    if let Some(c) = color(value, "darkColor") {
        config.palette.dark = c;
    }
    if let Some(c) = color(value, "lightColor") {
        config.palette.light = c;
    }

    config
}
