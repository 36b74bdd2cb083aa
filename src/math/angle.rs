//! Angle normalization and angular interval tests.

use std::f64::consts::{PI, TAU};

use super::maths;

/// Normalizes an angle into `[0, 2pi)`.
#[must_use]
pub fn simplify(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Normalizes an angle into `(-pi, pi]`.
#[must_use]
pub fn simplify_signed(angle: f64) -> f64 {
    let a = simplify(angle);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

#[must_use]
pub fn to_degree(radian: f64) -> f64 {
    radian.to_degrees()
}

#[must_use]
pub fn to_radian(degree: f64) -> f64 {
    degree.to_radians()
}

/// Opposite direction, normalized into `[0, 2pi)`.
#[must_use]
pub fn reverse(angle: f64) -> f64 {
    simplify(angle + PI)
}

/// Angle equality modulo a full turn.
#[must_use]
pub fn equal_to(a: f64, b: f64, eps: f64) -> bool {
    let d = simplify_signed(a - b);
    maths::equal_to(d, 0.0, eps)
}

/// Sweep from `start` to `end` in the given direction, in `[0, 2pi)`.
#[must_use]
pub fn sweep(start: f64, end: f64, positive: bool) -> f64 {
    if positive {
        simplify(end - start)
    } else {
        simplify(start - end)
    }
}

/// Tests whether `angle` lies on the arc running from `start` to `end`,
/// counter-clockwise when `positive`.
///
/// Open ends exclude angles within `eps` of the bound.
#[must_use]
pub fn between(
    angle: f64,
    start: f64,
    end: f64,
    positive: bool,
    lo_open: bool,
    hi_open: bool,
    eps: f64,
) -> bool {
    if angle.is_nan() {
        return false;
    }
    let total = sweep(start, end, positive);
    let mut offset = sweep(start, angle, positive);
    // An angle just "behind" start wraps to almost a full turn.
    if maths::equal_to(offset, TAU, eps) {
        offset = 0.0;
    }
    maths::between(offset, 0.0, total, lo_open, hi_open, eps)
}
