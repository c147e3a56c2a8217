//! Game objects: per-kind behaviour over a shared transform, and the manager
//! that ticks them.
//!
//! # Invariants
//! - Inactive objects are skipped by both update and render.
//! - Objects are never removed; they are only deactivated.
//! - Iteration order is insertion order.

pub mod manager;
pub mod object;

pub use manager::{ObjectError, ObjectEvent, ObjectManager};
pub use object::{GameObject, ObjectKind};

pub fn crate_info() -> &'static str {
    "gameloop-objects v0.1.0"
}
