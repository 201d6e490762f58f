pub mod keyboard;
pub mod motion;
pub mod page;

pub use keyboard::wire_shake_key;
pub use motion::wire_device_motion;
pub use page::{wire_resize, wire_scroll};
