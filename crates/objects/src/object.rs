use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use gameloop_common::{ObjectId, Transform2D};

/// What an object is. Behaviour differs only in the velocity constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Player,
    Enemy,
    Item,
    Obstacle,
}

impl ObjectKind {
    /// Units per second this kind drifts by on every update.
    pub fn velocity(self) -> Vec2 {
        match self {
            Self::Player => Vec2::new(1.0, 0.0),
            Self::Enemy => Vec2::new(-0.5, 0.0),
            Self::Item | Self::Obstacle => Vec2::ZERO,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Player => "Player",
            Self::Enemy => "Enemy",
            Self::Item => "Item",
            Self::Obstacle => "Obstacle",
        };
        f.write_str(s)
    }
}

/// A named object in the scene with its own transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObject {
    id: ObjectId,
    name: String,
    kind: ObjectKind,
    pub active: bool,
    transform: Transform2D,
}

impl GameObject {
    /// Create an active object of `kind` at `(x, y)`.
    pub fn new(name: impl Into<String>, kind: ObjectKind, x: f32, y: f32) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            kind,
            active: true,
            transform: Transform2D::new(x, y),
        }
    }

    pub fn player(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self::new(name, ObjectKind::Player, x, y)
    }

    pub fn enemy(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self::new(name, ObjectKind::Enemy, x, y)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Integrate the kind's velocity over `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        tracing::debug!(name = %self.name, kind = %self.kind, "updating position");
        self.transform.translate(self.kind.velocity() * dt);
    }
}
