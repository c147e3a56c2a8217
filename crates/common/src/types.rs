use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log lines and debug output.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_owned()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// Planar transform: position plus a rotation in radians.
///
/// Owned by exactly one game object. Only changes through
/// [`Transform2D::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform2D {
    position: Vec2,
    rotation: f32,
}

impl Transform2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            rotation: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_uniqueness() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn short_id_is_eight_chars() {
        assert_eq!(ObjectId::new().short().len(), 8);
    }

    #[test]
    fn transform_new_has_zero_rotation() {
        let t = Transform2D::new(3.0, -2.0);
        assert_eq!(t.position(), Vec2::new(3.0, -2.0));
        assert_eq!(t.rotation(), 0.0);
    }

    #[test]
    fn translate_accumulates() {
        let mut t = Transform2D::default();
        t.translate(Vec2::new(1.0, 2.0));
        t.translate(Vec2::new(-0.5, 1.0));
        assert_eq!(t.position(), Vec2::new(0.5, 3.0));
    }
}
