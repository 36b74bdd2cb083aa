//! Free functions on [`Vector2`].
//!
//! nalgebra already provides the arithmetic operators; the functions here add
//! the overflow-safe magnitude, zero-vector conventions and tolerance-aware
//! predicates used by the geometry layer.

use super::{maths, Vector2};

#[must_use]
pub fn add(v: &Vector2, w: &Vector2) -> Vector2 {
    v + w
}

#[must_use]
pub fn subtract(v: &Vector2, w: &Vector2) -> Vector2 {
    v - w
}

#[must_use]
pub fn scalar_multiply(v: &Vector2, s: f64) -> Vector2 {
    v * s
}

#[must_use]
pub fn dot(v: &Vector2, w: &Vector2) -> f64 {
    v.x * w.x + v.y * w.y
}

/// z component of the 3D cross product.
#[must_use]
pub fn cross(v: &Vector2, w: &Vector2) -> f64 {
    v.x * w.y - v.y * w.x
}

#[must_use]
pub fn squared_magnitude(v: &Vector2) -> f64 {
    v.x * v.x + v.y * v.y
}

/// Length computed as `|larger| * sqrt(1 + (smaller / larger)^2)` so that
/// extreme components neither overflow nor underflow.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn magnitude(v: &Vector2) -> f64 {
    let (ax, ay) = (v.x.abs(), v.y.abs());
    let (big, small) = if ax >= ay { (ax, ay) } else { (ay, ax) };
    if big == 0.0 {
        return 0.0;
    }
    if big.is_infinite() {
        return f64::INFINITY;
    }
    let r = small / big;
    big * (1.0 + r * r).sqrt()
}

/// Direction angle in `(-pi, pi]`. The zero vector has angle `0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn angle(v: &Vector2) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        return 0.0;
    }
    maths::atan2(v.y, v.x)
}

/// Unit vector in the direction of `v`. The zero vector maps to itself.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn normalize(v: &Vector2) -> Vector2 {
    let m = magnitude(v);
    if m == 0.0 {
        return Vector2::zeros();
    }
    v / m
}

#[must_use]
pub fn from_polar(magnitude: f64, angle: f64) -> Vector2 {
    Vector2::new(magnitude * maths::cos(angle), magnitude * maths::sin(angle))
}

/// Rotates `v` counter-clockwise by `angle`.
#[must_use]
pub fn rotate(v: &Vector2, angle: f64) -> Vector2 {
    let (s, c) = (maths::sin(angle), maths::cos(angle));
    Vector2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Projection of `v` onto `onto`. Projecting onto the zero vector gives zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn project(v: &Vector2, onto: &Vector2) -> Vector2 {
    let m2 = squared_magnitude(onto);
    if m2 == 0.0 {
        return Vector2::zeros();
    }
    onto * (dot(v, onto) / m2)
}

/// `v` rotated by `+pi/2`.
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Signed angle from `v` to `w` in `(-pi, pi]`.
#[must_use]
pub fn angle_to(v: &Vector2, w: &Vector2) -> f64 {
    maths::atan2(cross(v, w), dot(v, w))
}

#[must_use]
pub fn is_zero(v: &Vector2, eps: f64) -> bool {
    maths::equal_to(v.x, 0.0, eps) && maths::equal_to(v.y, 0.0, eps)
}

/// Cross product is zero under `eps`.
#[must_use]
pub fn is_parallel(v: &Vector2, w: &Vector2, eps: f64) -> bool {
    maths::equal_to(cross(v, w), 0.0, eps)
}

/// Dot product is zero under `eps`.
#[must_use]
pub fn is_perpendicular(v: &Vector2, w: &Vector2, eps: f64) -> bool {
    maths::equal_to(dot(v, w), 0.0, eps)
}
