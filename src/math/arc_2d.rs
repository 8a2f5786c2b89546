//! 2D arc angle utilities.
//!
//! Direction convention: `dir = 1.0` for counter-clockwise, `-1.0` for
//! clockwise. Angles returned here carry the sign of `dir`.

use std::f64::consts::{PI, TAU};

use super::Point;

/// Signed angle swept from unit vector `v0` to unit vector `v1` travelling
/// in direction `dir`.
///
/// The magnitude is in `[0, 2π)`. Vectors within `unit_tolerance` of
/// parallel snap to `0`, within `unit_tolerance` of anti-parallel to `π`.
#[must_use]
pub fn included_angle(v0: Point, v1: Point, dir: f64, unit_tolerance: f64) -> f64 {
    let cos = v0 * v1;
    if cos > 1.0 - unit_tolerance {
        return 0.0;
    }
    let angle = if cos < -1.0 + unit_tolerance {
        PI
    } else {
        let a = cos.clamp(-1.0, 1.0).acos();
        if dir * (v0 ^ v1) < 0.0 {
            TAU - a
        } else {
            a
        }
    };
    dir * angle
}

/// Number of chords needed to approximate an arc so that no chord deviates
/// from the arc by more than `deviation`.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, deviation: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || deviation <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2))
    let max_angle = if deviation >= radius {
        PI
    } else {
        2.0 * (1.0 - deviation / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
