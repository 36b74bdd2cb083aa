//! Absolute and relative floating point comparisons.
//!
//! These are the two building blocks of the combined comparisons in
//! [`maths`](super::maths). Every function takes the tolerance from the caller.
//! A NaN operand makes every comparison `false`; an infinite operand
//! falls back to exact comparison.

/// Returns `true` if either operand is NaN.
#[inline]
#[must_use]
pub fn either_nan(a: f64, b: f64) -> bool {
    a.is_nan() || b.is_nan()
}

/// Returns `true` if either operand is `+inf` or `-inf`.
#[inline]
#[must_use]
pub fn either_infinite(a: f64, b: f64) -> bool {
    a.is_infinite() || b.is_infinite()
}

/// `|a - b| <= eps`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn equal_to_abs(a: f64, b: f64, eps: f64) -> bool {
    if either_nan(a, b) {
        return false;
    }
    if either_infinite(a, b) {
        return a == b;
    }
    (a - b).abs() <= eps
}

/// `|a - b| <= max(|a|, |b|) * eps`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn equal_to_rel(a: f64, b: f64, eps: f64) -> bool {
    if either_nan(a, b) {
        return false;
    }
    if either_infinite(a, b) {
        return a == b;
    }
    (a - b).abs() <= a.abs().max(b.abs()) * eps
}

/// Strictly greater under the absolute tolerance.
#[must_use]
pub fn greater_than_abs(a: f64, b: f64, eps: f64) -> bool {
    if either_nan(a, b) {
        return false;
    }
    if either_infinite(a, b) {
        return a > b;
    }
    !equal_to_abs(a, b, eps) && a > b
}

/// Strictly less under the absolute tolerance.
#[must_use]
pub fn less_than_abs(a: f64, b: f64, eps: f64) -> bool {
    greater_than_abs(b, a, eps)
}

/// Strictly greater under the relative tolerance.
#[must_use]
pub fn greater_than_rel(a: f64, b: f64, eps: f64) -> bool {
    if either_nan(a, b) {
        return false;
    }
    if either_infinite(a, b) {
        return a > b;
    }
    !equal_to_rel(a, b, eps) && a > b
}

/// Strictly less under the relative tolerance.
#[must_use]
pub fn less_than_rel(a: f64, b: f64, eps: f64) -> bool {
    greater_than_rel(b, a, eps)
}

/// `|n| <= eps`.
#[must_use]
pub fn is_zero_abs(n: f64, eps: f64) -> bool {
    equal_to_abs(n, 0.0, eps)
}

/// Returns `true` if every value is finite.
#[must_use]
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_catches_near_zero() {
        assert!(equal_to_abs(1e-12, 0.0, 1e-10));
        assert!(!equal_to_rel(1e-12, 0.0, 1e-10));
    }

    #[test]
    fn relative_catches_large_magnitude() {
        let a = 1e20;
        let b = 1e20 + 1e6;
        assert!(!equal_to_abs(a, b, 1e-10));
        assert!(equal_to_rel(a, b, 1e-10));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!equal_to_abs(f64::NAN, f64::NAN, 1.0));
        assert!(!greater_than_abs(f64::NAN, 0.0, 1.0));
        assert!(!less_than_rel(0.0, f64::NAN, 1.0));
    }

    #[test]
    fn infinity_bypasses_tolerance() {
        assert!(equal_to_abs(f64::INFINITY, f64::INFINITY, 0.0));
        assert!(!equal_to_abs(f64::INFINITY, f64::MAX, f64::INFINITY));
        assert!(greater_than_rel(f64::INFINITY, 1e300, 1.0));
    }

    #[test]
    fn strict_comparisons_exclude_tolerance_band() {
        assert!(!greater_than_abs(1.0 + 1e-12, 1.0, 1e-10));
        assert!(greater_than_abs(1.1, 1.0, 1e-10));
        assert!(less_than_abs(0.9, 1.0, 1e-10));
    }

    #[test]
    fn all_finite_rejects_nan_and_infinity() {
        assert!(all_finite(&[0.0, -1.5, 1e300]));
        assert!(!all_finite(&[1.0, f64::NAN]));
        assert!(!all_finite(&[f64::NEG_INFINITY]));
    }
}
