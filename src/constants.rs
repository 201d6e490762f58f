// Overlay and host-binding constants used by the web frontend.

// Overlay canvas
pub const CANVAS_Z_INDEX: &str = "9999"; // above page content
pub const CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"), // never steal clicks from the page
    ("z-index", CANVAS_Z_INDEX),
];

// Theme
pub const DARK_MODE_QUERY: &str = "(prefers-color-scheme: dark)";

// Keyboard fallback for devices without a motion sensor
pub const SHAKE_KEYS: &[&str] = &["s", "S"];

// Capability probed before wiring `devicemotion`
pub const MOTION_EVENT_CTOR: &str = "DeviceMotionEvent";
