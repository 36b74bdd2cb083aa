//! Helpers for coordinate pairs.

use super::{float, maths, matrix, Matrix2, Point2, Vector2};

/// Both components are finite.
#[must_use]
pub fn is_valid(p: &Point2) -> bool {
    float::all_finite(&[p.x, p.y])
}

/// Component-wise combined equality.
#[must_use]
pub fn equal_to(p: &Point2, q: &Point2, eps: f64) -> bool {
    maths::equal_to(p.x, q.x, eps) && maths::equal_to(p.y, q.y, eps)
}

#[must_use]
pub fn distance(p: &Point2, q: &Point2) -> f64 {
    super::vector2::magnitude(&(q - p))
}

#[must_use]
pub fn squared_distance(p: &Point2, q: &Point2) -> f64 {
    (q - p).norm_squared()
}

#[must_use]
pub fn lerp(p: &Point2, q: &Point2, t: f64) -> Point2 {
    Point2::new(maths::lerp(p.x, q.x, t), maths::lerp(p.y, q.y, t))
}

#[must_use]
pub fn midpoint(p: &Point2, q: &Point2) -> Point2 {
    lerp(p, q, 0.5)
}

/// Point at `distance` from `p` in direction `angle`.
#[must_use]
pub fn move_along_angle(p: &Point2, angle: f64, distance: f64) -> Point2 {
    p + Vector2::new(maths::cos(angle), maths::sin(angle)) * distance
}

/// Rotates `p` about `origin` by `angle`.
#[must_use]
pub fn rotate_about(p: &Point2, origin: &Point2, angle: f64) -> Point2 {
    origin + super::vector2::rotate(&(p - origin), angle)
}

/// Signed area of the parallelogram spanned by `b - a` and `c - a`.
///
/// Positive when `a, b, c` turn counter-clockwise.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let (u, v) = (b - a, c - a);
    matrix::det2(&Matrix2::new(u.x, u.y, v.x, v.y))
}

/// Returns `true` when all points are pairwise distinct under `eps`.
#[must_use]
pub fn all_distinct(points: &[Point2], eps: f64) -> bool {
    points
        .iter()
        .enumerate()
        .all(|(i, p)| points[i + 1..].iter().all(|q| !equal_to(p, q, eps)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(is_valid(&Point2::new(1.0, 2.0)));
        assert!(!is_valid(&Point2::new(f64::NAN, 2.0)));
        assert!(!is_valid(&Point2::new(1.0, f64::INFINITY)));
    }

    #[test]
    fn equality_and_distance() {
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(3.0, 4.0);
        assert!((distance(&p, &q) - 5.0).abs() < 1e-12);
        assert!(equal_to(&p, &Point2::new(1e-12, -1e-12), 1e-10));
        assert!(!equal_to(&p, &q, 1e-10));
    }

    #[test]
    fn rotation_about_origin() {
        let p = rotate_about(
            &Point2::new(2.0, 1.0),
            &Point2::new(1.0, 1.0),
            std::f64::consts::FRAC_PI_2,
        );
        assert!(equal_to(&p, &Point2::new(1.0, 2.0), 1e-12));
    }

    #[test]
    fn orientation_sign() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert!(orientation(&a, &b, &Point2::new(0.0, 1.0)) > 0.0);
        assert!(orientation(&a, &b, &Point2::new(0.0, -1.0)) < 0.0);
    }

    #[test]
    fn distinctness() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1e-12)];
        assert!(!all_distinct(&pts, 1e-10));
        assert!(all_distinct(&pts[..2], 1e-10));
    }
}
