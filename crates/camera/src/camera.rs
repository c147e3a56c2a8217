use glam::{Mat4, Quat, Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{Bounds, CameraConfig, CameraError};
use crate::shake::Shake;
use gameloop_common::{lerp, lerp_angle};

/// How the camera reacts to input.
///
/// Only `Follow` moves the targets. `Static` and `Cinematic` freeze them;
/// the current values still settle toward whatever the targets were.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Follow,
    Static,
    Cinematic,
}

/// One frame of camera input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    pub direction: Vec2,
    pub rotation: f32,
    pub zoom: f32,
}

impl CameraInput {
    pub fn new(direction: Vec2, rotation: f32, zoom: f32) -> Self {
        Self {
            direction,
            rotation,
            zoom,
        }
    }
}

/// Serializable snapshot of the camera, for logging and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec2,
    pub rotation: f32,
    pub zoom: f32,
    pub target_position: Vec2,
    pub target_rotation: f32,
    pub target_zoom: f32,
    pub mode: CameraMode,
    pub shake: Shake,
    pub shake_offset: Vec2,
}

/// View matrix for a camera: zoom, then rotate about Z, then translate by
/// `-position`.
pub fn view_matrix(position: Vec2, rotation: f32, zoom: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::new(zoom, zoom, 1.0),
        Quat::from_rotation_z(rotation),
        (-position).extend(0.0),
    )
}

/// Smoothed 2D camera.
///
/// Input moves the *target* values; each update the current values cover a
/// fixed fraction (`config.smoothing`) of the remaining distance. The shake
/// offset is added to the target position before smoothing, so it is damped
/// like any other motion.
///
/// The RNG is owned by the camera and only consulted while a shake is active.
#[derive(Debug, Clone)]
pub struct Camera<R = Pcg32> {
    position: Vec2,
    rotation: f32,
    zoom: f32,
    target_position: Vec2,
    target_rotation: f32,
    target_zoom: f32,
    mode: CameraMode,
    config: CameraConfig,
    shake: Shake,
    shake_offset: Vec2,
    rng: R,
}

impl Camera<Pcg32> {
    /// Unbounded camera with default tuning and a zero-seeded RNG.
    pub fn new(position: Vec2) -> Self {
        Self::build(position, CameraConfig::default(), Pcg32::seed_from_u64(0))
    }

    pub fn seeded(position: Vec2, config: CameraConfig, seed: u64) -> Result<Self, CameraError> {
        Self::with_config(position, config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Camera<R> {
    /// Fails if `config` does not pass [`CameraConfig::validate`].
    pub fn with_config(position: Vec2, config: CameraConfig, rng: R) -> Result<Self, CameraError> {
        config.validate()?;
        Ok(Self::build(position, config, rng))
    }

    fn build(position: Vec2, config: CameraConfig, rng: R) -> Self {
        Self {
            position,
            rotation: 0.0,
            zoom: 1.0,
            target_position: position,
            target_rotation: 0.0,
            target_zoom: 1.0,
            mode: CameraMode::Follow,
            config,
            shake: Shake::default(),
            shake_offset: Vec2::ZERO,
            rng,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn target_position(&self) -> Vec2 {
        self.target_position
    }

    pub fn target_rotation(&self) -> f32 {
        self.target_rotation
    }

    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        tracing::debug!(?mode, "camera mode changed");
        self.mode = mode;
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = speed;
    }

    pub fn set_rotation_speed(&mut self, rotation_speed: f32) {
        self.config.rotation_speed = rotation_speed;
    }

    pub fn set_zoom_speed(&mut self, zoom_speed: f32) {
        self.config.zoom_speed = zoom_speed;
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.config.bounds
    }

    /// Takes effect on the next update; the target is not clamped here.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.config.bounds = Some(bounds);
    }

    pub fn clear_bounds(&mut self) {
        self.config.bounds = None;
    }

    pub fn shake(&self) -> &Shake {
        &self.shake
    }

    /// Offset applied on the most recent update.
    pub fn shake_offset(&self) -> Vec2 {
        self.shake_offset
    }

    /// Start a shake, replacing any shake in progress.
    pub fn set_shake(&mut self, intensity: f32, duration: f32) {
        tracing::debug!(intensity, duration, "shake triggered");
        self.shake = Shake::new(intensity, duration);
    }

    /// Advance the camera by one frame.
    pub fn update(&mut self, dt: f32, input: CameraInput) {
        if self.mode == CameraMode::Follow {
            self.target_position += input.direction * self.config.speed * dt;
            self.target_rotation += input.rotation * self.config.rotation_speed * dt;
            self.target_zoom += input.zoom * self.config.zoom_speed * dt;
        }

        if let Some(bounds) = &self.config.bounds {
            self.target_position = bounds.clamp(self.target_position);
        }

        let was_shaking = self.shake.is_active();
        self.shake_offset = self.shake.advance(&mut self.rng);
        if was_shaking && !self.shake.is_active() {
            tracing::debug!("shake finished");
        }

        let t = self.config.smoothing;
        self.position = self
            .position
            .lerp(self.target_position + self.shake_offset, t);
        self.rotation = lerp_angle(self.rotation, self.target_rotation, t);
        self.zoom = lerp(self.zoom, self.target_zoom, t);

        tracing::trace!(
            x = self.position.x,
            y = self.position.y,
            rotation = self.rotation,
            zoom = self.zoom,
            "camera updated"
        );
    }

    pub fn view_matrix(&self) -> Mat4 {
        view_matrix(self.position, self.rotation, self.zoom)
    }

    /// Map a world-space point into view space.
    pub fn world_to_view(&self, point: Vec2) -> Vec2 {
        self.view_matrix()
            .transform_point3(point.extend(0.0))
            .truncate()
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position,
            rotation: self.rotation,
            zoom: self.zoom,
            target_position: self.target_position,
            target_rotation: self.target_rotation,
            target_zoom: self.target_zoom,
            mode: self.mode,
            shake: self.shake,
            shake_offset: self.shake_offset,
        }
    }
}
