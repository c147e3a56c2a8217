//! Scalar interpolation helpers.

use std::f32::consts::{PI, TAU};

/// Linear interpolation: `start + (end - start) * t`.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Wrap an angle in radians into `(-π, π]`.
///
/// Non-finite input comes back as NaN rather than looping.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Interpolate between two angles along the shorter arc.
#[inline]
pub fn lerp_angle(start: f32, end: f32, t: f32) -> f32 {
    start + wrap_angle(end - start) * t
}
