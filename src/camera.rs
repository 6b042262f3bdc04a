//! First-person fly camera.
//!
//! [`view`] holds the pure math (look direction, view and projection matrices).
//! [`update`] maps pointer, scroll and movement input onto [`CameraState`], and
//! [`CameraController`] bundles that state with its tracking data and config.

pub mod config;
pub mod controller;
pub mod movement;
pub mod state;
pub mod uniform;
pub mod update;
pub mod view;

pub use config::CameraConfig;
pub use controller::CameraController;
pub use movement::{MovementKey, MovementKeys};
pub use state::{CameraState, PointerTracking};
pub use uniform::CameraUniform;
