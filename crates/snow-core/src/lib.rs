//! Platform-agnostic core of the snow overlay.
//!
//! Holds the flake model, the population, the frame loop state machine and the
//! scroll/shake stimulus mappers. Hosts supply a [`Surface`] to draw on, a
//! [`ColorScheme`] query and an animation-frame scheduler of their own.

pub mod config;
pub mod constants;
pub mod lifecycle;
pub mod particle;
pub mod population;
pub mod session;
pub mod stimulus;
pub mod surface;
pub mod theme;

pub use config::*;
pub use lifecycle::*;
pub use particle::*;
pub use population::*;
pub use session::*;
pub use stimulus::*;
pub use surface::*;
pub use theme::*;
