//! Combined epsilon comparisons and numerically clean scalar helpers.
//!
//! `equal_to` accepts a difference that is small either absolutely (values
//! near zero) or relatively (large magnitudes). This is the comparison used by
//! every geometric predicate in the crate.

use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;

use super::float::{either_infinite, either_nan, equal_to_abs, equal_to_rel};

/// Combined absolute-or-relative equality.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn equal_to(a: f64, b: f64, eps: f64) -> bool {
    if either_nan(a, b) {
        return false;
    }
    if either_infinite(a, b) {
        return a == b;
    }
    equal_to_abs(a, b, eps) || equal_to_rel(a, b, eps)
}

/// Strictly greater, `false` when equal under tolerance.
#[must_use]
pub fn greater_than(a: f64, b: f64, eps: f64) -> bool {
    if either_nan(a, b) {
        return false;
    }
    if either_infinite(a, b) {
        return a > b;
    }
    !equal_to(a, b, eps) && a > b
}

/// Strictly less, `false` when equal under tolerance.
#[must_use]
pub fn less_than(a: f64, b: f64, eps: f64) -> bool {
    greater_than(b, a, eps)
}

#[must_use]
pub fn greater_than_or_equal_to(a: f64, b: f64, eps: f64) -> bool {
    equal_to(a, b, eps) || greater_than(a, b, eps)
}

#[must_use]
pub fn less_than_or_equal_to(a: f64, b: f64, eps: f64) -> bool {
    equal_to(a, b, eps) || less_than(a, b, eps)
}

/// Three-way comparison: `-1`, `0` or `1`, and NaN when the operands are
/// incomparable.
#[must_use]
pub fn compare(a: f64, b: f64, eps: f64) -> f64 {
    if either_nan(a, b) {
        return f64::NAN;
    }
    if equal_to(a, b, eps) {
        0.0
    } else if a > b {
        1.0
    } else {
        -1.0
    }
}

/// [`compare`] as an [`Ordering`], `None` for NaN operands.
#[must_use]
pub fn ordering(a: f64, b: f64, eps: f64) -> Option<Ordering> {
    if either_nan(a, b) {
        return None;
    }
    if equal_to(a, b, eps) {
        Some(Ordering::Equal)
    } else if a > b {
        Some(Ordering::Greater)
    } else {
        Some(Ordering::Less)
    }
}

/// Interval membership of `n` in `lo..hi` with selectable open ends.
///
/// The bounds are swapped when `lo > hi`. Values within `eps` of a bound
/// count as on the bound.
#[must_use]
pub fn between(n: f64, lo: f64, hi: f64, lo_open: bool, hi_open: bool, eps: f64) -> bool {
    if n.is_nan() {
        return false;
    }
    let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
    let above = if lo_open {
        greater_than(n, lo, eps)
    } else {
        greater_than_or_equal_to(n, lo, eps)
    };
    let below = if hi_open {
        less_than(n, hi, eps)
    } else {
        less_than_or_equal_to(n, hi, eps)
    };
    above && below
}

/// Sign of `n` with a tolerance band around zero. NaN propagates.
#[must_use]
pub fn sign(n: f64, eps: f64) -> f64 {
    if n.is_nan() {
        return f64::NAN;
    }
    if equal_to(n, 0.0, eps) {
        0.0
    } else if n > 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[must_use]
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    n.max(lo).min(hi)
}

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Compensated (Neumaier) summation.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &v in values {
        let t = total + v;
        if total.abs() >= v.abs() {
            compensation += (total - t) + v;
        } else {
            compensation += (v - t) + total;
        }
        total = t;
    }
    total + compensation
}

/// Exact quadrant index of `angle` when it is a multiple of `pi/2`.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
fn quarter_turns(angle: f64) -> Option<i64> {
    if !angle.is_finite() {
        return None;
    }
    let q = angle / FRAC_PI_2;
    if q.fract() != 0.0 || q.abs() > 9.0e15 {
        return None;
    }
    let k = q as i64;
    if k as f64 * FRAC_PI_2 == angle {
        Some(k.rem_euclid(4))
    } else {
        None
    }
}

/// Sine that returns exact values at multiples of `pi/2`.
#[must_use]
pub fn sin(angle: f64) -> f64 {
    match quarter_turns(angle) {
        Some(0 | 2) => 0.0,
        Some(1) => 1.0,
        Some(3) => -1.0,
        _ => angle.sin(),
    }
}

/// Cosine that returns exact values at multiples of `pi/2`.
#[must_use]
pub fn cos(angle: f64) -> f64 {
    match quarter_turns(angle) {
        Some(0) => 1.0,
        Some(1 | 3) => 0.0,
        Some(2) => -1.0,
        _ => angle.cos(),
    }
}

/// Tangent that returns `0` and `±inf` at multiples of `pi/2`.
#[must_use]
pub fn tan(angle: f64) -> f64 {
    match quarter_turns(angle) {
        Some(0) => 0.0,
        Some(1) => f64::INFINITY,
        Some(2) => -0.0,
        Some(3) => f64::NEG_INFINITY,
        _ => angle.tan(),
    }
}

#[must_use]
pub fn cot(angle: f64) -> f64 {
    1.0 / tan(angle)
}

#[must_use]
pub fn sec(angle: f64) -> f64 {
    1.0 / cos(angle)
}

#[must_use]
pub fn csc(angle: f64) -> f64 {
    1.0 / sin(angle)
}

/// Arcsine with the argument clamped into `[-1, 1]`.
#[must_use]
pub fn asin(n: f64) -> f64 {
    clamp(n, -1.0, 1.0).asin()
}

/// Arccosine with the argument clamped into `[-1, 1]`.
#[must_use]
pub fn acos(n: f64) -> f64 {
    clamp(n, -1.0, 1.0).acos()
}

#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

#[must_use]
pub fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

/// Real cube root that keeps the sign of `n`.
#[must_use]
pub fn cbrt(n: f64) -> f64 {
    n.cbrt()
}

/// Real roots of `a*x^2 + b*x + c = 0`.
///
/// Degrades to the linear equation when `a` is zero under `eps`. A double root
/// is reported twice.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn solve_quadratic(a: f64, b: f64, c: f64, eps: f64) -> Vec<f64> {
    if equal_to(a, 0.0, eps) {
        if equal_to(b, 0.0, eps) {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let disc = b * b - 4.0 * a * c;
    match sign(disc, eps) {
        s if s > 0.0 => {
            // Avoid cancellation between -b and sqrt(disc).
            let q = -0.5 * (b + b.signum() * disc.sqrt());
            let (r1, r2) = (q / a, c / q);
            if r1 < r2 {
                vec![r1, r2]
            } else {
                vec![r2, r1]
            }
        }
        s if s == 0.0 => {
            let r = -b / (2.0 * a);
            vec![r, r]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn classic_rounding_case() {
        assert!(equal_to(0.1 + 0.2, 0.3, 1e-10));
        assert!(!greater_than(0.1 + 0.2, 0.3, 1e-10));
    }

    #[test]
    fn compare_reports_nan_for_incomparable() {
        assert!(compare(f64::NAN, 1.0, 1e-10).is_nan());
        assert!((compare(2.0, 1.0, 1e-10) - 1.0).abs() < f64::EPSILON);
        assert!(compare(1.0, 1.0 + 1e-12, 1e-10).abs() < f64::EPSILON);
        assert_eq!(ordering(f64::NAN, 0.0, 1e-10), None);
    }

    #[test]
    fn between_boundaries() {
        assert!(between(1.0, 0.0, 1.0, false, false, 1e-10));
        assert!(!between(1.0, 0.0, 1.0, false, true, 1e-10));
        assert!(!between(1.0 - 1e-12, 0.0, 1.0, false, true, 1e-10));
        assert!(between(0.5, 1.0, 0.0, true, true, 1e-10));
        assert!(!between(f64::NAN, 0.0, 1.0, false, false, 1e-10));
    }

    #[test]
    fn sign_with_band() {
        assert!(sign(1e-12, 1e-10).abs() < f64::EPSILON);
        assert!((sign(-3.0, 1e-10) + 1.0).abs() < f64::EPSILON);
        assert!(sign(f64::NAN, 1e-10).is_nan());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn trig_is_clean_at_quarter_turns() {
        assert_eq!(sin(PI), 0.0);
        assert_eq!(cos(FRAC_PI_2), 0.0);
        assert_eq!(tan(FRAC_PI_2), f64::INFINITY);
        assert_eq!(tan(-FRAC_PI_2), f64::NEG_INFINITY);
        assert_eq!(sin(-FRAC_PI_2), -1.0);
        assert_eq!(cos(2.0 * PI), 1.0);
        assert!((sin(0.3) - 0.3f64.sin()).abs() < f64::EPSILON);
    }

    #[test]
    fn inverse_trig_clamps() {
        assert!((asin(1.0 + 1e-15) - FRAC_PI_2).abs() < 1e-15);
        assert!((acos(-1.0 - 1e-15) - PI).abs() < 1e-15);
    }

    #[test]
    fn quadratic_roots() {
        let r = solve_quadratic(1.0, -3.0, 2.0, 1e-10);
        assert_eq!(r.len(), 2);
        assert!((r[0] - 1.0).abs() < 1e-12);
        assert!((r[1] - 2.0).abs() < 1e-12);
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0, 1e-10).len(), 0);
        assert_eq!(solve_quadratic(1.0, -2.0, 1.0, 1e-10).len(), 2);
        assert_eq!(solve_quadratic(0.0, 2.0, -4.0, 1e-10), vec![2.0]);
    }

    #[test]
    fn compensated_sum() {
        let values = [1e16, 1.0, -1e16];
        assert!((sum(&values) - 1.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn equality_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6, eps in 0.0f64..1e-3) {
            prop_assert_eq!(equal_to(a, b, eps), equal_to(b, a, eps));
            prop_assert_eq!(greater_than(a, b, eps), less_than(b, a, eps));
        }

        #[test]
        fn exactly_one_relation_holds(a in -1e6f64..1e6, b in -1e6f64..1e6, eps in 0.0f64..1e-3) {
            let count = [less_than(a, b, eps), equal_to(a, b, eps), greater_than(a, b, eps)]
                .iter()
                .filter(|&&x| x)
                .count();
            prop_assert_eq!(count, 1);
        }
    }
}
