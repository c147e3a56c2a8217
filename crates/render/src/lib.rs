//! Rendering adapter: renderer-agnostic interface plus a console text backend.
//!
//! # Invariants
//! - Renderers never mutate objects or the camera.
//! - Only active objects are rendered.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "gameloop-render v0.1.0"
}
