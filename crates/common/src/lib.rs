//! Shared types for the gameloop workspace: object identity, 2D transforms,
//! and the interpolation helpers used by the camera.

pub mod math;
pub mod types;

pub use math::{lerp, lerp_angle, wrap_angle};
pub use types::{ObjectId, Transform2D};

pub fn crate_info() -> &'static str {
    "gameloop-common v0.1.0"
}
