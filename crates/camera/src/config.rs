use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating camera configuration.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: Vec2, max: Vec2 },
    #[error("smoothing factor {0} is outside [0, 1]")]
    InvalidSmoothing(f32),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}

/// Inclusive clamp rectangle for the camera target.
///
/// Only constructible through [`Bounds::new`] or deserialization, both of
/// which reject `min > max` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    min: Vec2,
    max: Vec2,
}

#[derive(Deserialize)]
struct RawBounds {
    min: Vec2,
    max: Vec2,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = CameraError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, CameraError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Componentwise clamp into `[min, max]`.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.max(self.min).min(self.max)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    fn validate(&self) -> Result<(), CameraError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min.cmpgt(self.max).any() {
            return Err(CameraError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Tunables for [`crate::Camera`]. Missing JSON fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Target translation per second per unit of input direction.
    pub speed: f32,
    /// Target rotation (radians) per second per unit of rotation input.
    pub rotation_speed: f32,
    /// Target zoom change per second per unit of zoom input.
    pub zoom_speed: f32,
    /// Fraction of the remaining distance covered each update.
    pub smoothing: f32,
    pub bounds: Option<Bounds>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 300.0,
            rotation_speed: 0.1,
            zoom_speed: 0.1,
            smoothing: 0.1,
            bounds: None,
        }
    }
}

impl CameraConfig {
    /// Default tunables clamped to `bounds`.
    pub fn bounded(bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CameraError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CameraError> {
        let config: Self = serde_json::from_reader(std::fs::File::open(path)?)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CameraError> {
        for (field, value) in [
            ("speed", self.speed),
            ("rotation_speed", self.rotation_speed),
            ("zoom_speed", self.zoom_speed),
            ("smoothing", self.smoothing),
        ] {
            if !value.is_finite() {
                return Err(CameraError::NonFinite { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(CameraError::InvalidSmoothing(self.smoothing));
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}
