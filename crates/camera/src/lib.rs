//! Follow camera: smoothed position/rotation/zoom, optional boundary clamp,
//! and a decaying random screen shake.
//!
//! # Invariants
//! - Current values move toward targets by a fixed fraction per update.
//! - With bounds set, the target position is inside them after every update.
//!   The current position is never clamped.
//! - Shake draws only from the camera's injected RNG, so a fixed seed gives a
//!   fixed trajectory.

pub mod camera;
pub mod config;
pub mod shake;

pub use camera::{Camera, CameraInput, CameraMode, CameraState, view_matrix};
pub use config::{Bounds, CameraConfig, CameraError};
pub use shake::{SHAKE_DECAY_FACTOR, SHAKE_STEP, Shake};

pub fn crate_info() -> &'static str {
    "gameloop-camera v0.1.0"
}
