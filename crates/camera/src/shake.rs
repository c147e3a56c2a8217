use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Elapsed time added per shaken update, independent of the frame's `dt`.
pub const SHAKE_STEP: f32 = 0.016;

/// Per-update intensity loss, as a fraction of the shake's *duration*.
pub const SHAKE_DECAY_FACTOR: f32 = 0.1;

/// Time-limited random positional jitter.
///
/// Each active update first decays `intensity` by `duration * SHAKE_DECAY_FACTOR`
/// (floored at zero), then advances `elapsed` by [`SHAKE_STEP`] and draws an
/// offset uniformly from `[-intensity, intensity]` per axis. Both the decay
/// term and the fixed step ignore the caller's `dt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shake {
    intensity: f32,
    duration: f32,
    elapsed: f32,
}

impl Shake {
    pub fn new(intensity: f32, duration: f32) -> Self {
        Self {
            intensity,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Reduce intensity by one decay step. No-op once the shake has ended.
    pub fn decay(&mut self) {
        if !self.is_active() {
            return;
        }
        self.intensity = (self.intensity - self.duration * SHAKE_DECAY_FACTOR).max(0.0);
    }

    /// Draw this update's offset and advance elapsed time.
    ///
    /// Returns exactly zero once `elapsed >= duration`.
    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Vec2 {
        if !self.is_active() {
            return Vec2::ZERO;
        }
        self.elapsed += SHAKE_STEP;
        let span = self.intensity * 2.0;
        Vec2::new(
            span * (rng.random::<f32>() - 0.5),
            span * (rng.random::<f32>() - 0.5),
        )
    }

    /// One camera update's worth of shake: decay, then sample.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Vec2 {
        self.decay();
        self.sample(rng)
    }
}
