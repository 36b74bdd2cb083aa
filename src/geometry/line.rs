use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::GraphicsOptions;
use crate::graphics::Graphics;
use crate::math::{coordinates, maths, vector2, Point2, TransformationMatrix, Vector2};

use super::{clipped_graphics, Shape};

/// An infinite straight line, stored as a point and a slope.
///
/// Vertical lines have slope `+inf`; `-inf` is folded into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Point2,
    slope: f64,
}

impl Line {
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn new(point: Point2, slope: f64) -> Self {
        let slope = if slope == f64::NEG_INFINITY {
            f64::INFINITY
        } else {
            slope
        };
        Self { point, slope }
    }

    /// Line through two points, `None` if they coincide.
    #[must_use]
    pub fn from_two_points(p1: &Point2, p2: &Point2, eps: f64) -> Option<Self> {
        if coordinates::equal_to(p1, p2, eps) {
            return None;
        }
        let slope = if maths::equal_to(p1.x, p2.x, eps) {
            f64::INFINITY
        } else {
            (p2.y - p1.y) / (p2.x - p1.x)
        };
        Some(Self::new(*p1, slope))
    }

    /// Line through `point` in direction `angle`. Slopes steeper than
    /// `tan(pi/2 - eps)` become vertical.
    #[must_use]
    pub fn from_point_and_angle(point: &Point2, angle: f64, eps: f64) -> Self {
        let slope = maths::tan(angle);
        let limit = maths::tan(FRAC_PI_2 - eps);
        let slope = if slope.abs() > limit {
            f64::INFINITY
        } else {
            slope
        };
        Self::new(*point, slope)
    }

    /// Line `a x + b y + c = 0`, `None` when `a` and `b` are both zero.
    #[must_use]
    #[allow(clippy::float_cmp, clippy::many_single_char_names)]
    pub fn from_general_form(a: f64, b: f64, c: f64) -> Option<Self> {
        if a == 0.0 && b == 0.0 {
            return None;
        }
        if b == 0.0 {
            return Some(Self::new(Point2::new(-c / a, 0.0), f64::INFINITY));
        }
        Some(Self::new(Point2::new(0.0, -c / b), -a / b))
    }

    /// Line crossing the axes at `(x, 0)` and `(0, y)`. `None` when both
    /// intercepts are zero, which leaves the direction undetermined.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_intercepts(x_intercept: f64, y_intercept: f64) -> Option<Self> {
        if !x_intercept.is_finite() || !y_intercept.is_finite() {
            return None;
        }
        if x_intercept == 0.0 && y_intercept == 0.0 {
            return None;
        }
        let slope = if x_intercept == 0.0 {
            f64::INFINITY
        } else {
            -y_intercept / x_intercept
        };
        Some(Self::new(Point2::new(x_intercept, 0.0), slope))
    }

    /// `y = slope * x + y_intercept`. `None` for an infinite slope.
    #[must_use]
    pub fn from_slope_intercept(slope: f64, y_intercept: f64) -> Option<Self> {
        if slope.is_infinite() {
            return None;
        }
        Some(Self::new(Point2::new(0.0, y_intercept), slope))
    }

    #[must_use]
    pub fn point(&self) -> Point2 {
        self.point
    }

    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[must_use]
    pub fn with_point(&self, point: Point2) -> Self {
        Self::new(point, self.slope)
    }

    #[must_use]
    pub fn with_slope(&self, slope: f64) -> Self {
        Self::new(self.point, slope)
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.slope.is_infinite()
    }

    /// Inclination in `[0, pi)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        if self.is_vertical() {
            return FRAC_PI_2;
        }
        let a = self.slope.atan();
        if a < 0.0 {
            a + PI
        } else {
            a
        }
    }

    /// Unit direction vector, pointing up for vertical lines.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        if self.is_vertical() {
            Vector2::new(0.0, 1.0)
        } else {
            vector2::normalize(&Vector2::new(1.0, self.slope))
        }
    }

    /// Coefficients `(a, b, c)` of `a x + b y + c = 0`.
    #[must_use]
    pub fn general_form(&self) -> (f64, f64, f64) {
        if self.is_vertical() {
            (1.0, 0.0, -self.point.x)
        } else {
            (self.slope, -1.0, self.point.y - self.slope * self.point.x)
        }
    }

    /// Where the line meets the x axis. `None` for horizontal lines.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn x_intercept(&self) -> Option<f64> {
        if self.is_vertical() {
            return Some(self.point.x);
        }
        if self.slope == 0.0 {
            return None;
        }
        Some(self.point.x - self.point.y / self.slope)
    }

    /// Where the line meets the y axis. `None` for vertical lines.
    #[must_use]
    pub fn y_intercept(&self) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        Some(self.point.y - self.slope * self.point.x)
    }

    #[must_use]
    pub fn is_point_on(&self, p: &Point2, eps: f64) -> bool {
        if self.is_vertical() {
            return maths::equal_to(p.x, self.point.x, eps);
        }
        maths::equal_to(p.y, self.point.y + self.slope * (p.x - self.point.x), eps)
    }

    #[must_use]
    pub fn is_parallel_to(&self, other: &Self, eps: f64) -> bool {
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => true,
            (false, false) => maths::equal_to(self.slope, other.slope, eps),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self, eps: f64) -> bool {
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => false,
            (true, false) => maths::equal_to(other.slope, 0.0, eps),
            (false, true) => maths::equal_to(self.slope, 0.0, eps),
            (false, false) => maths::equal_to(self.slope * other.slope, -1.0, eps),
        }
    }

    #[must_use]
    pub fn is_same_as(&self, other: &Self, eps: f64) -> bool {
        self.is_parallel_to(other, eps) && self.is_point_on(&other.point, eps)
    }

    /// Intersection point, `None` for parallel lines.
    #[must_use]
    pub fn intersection_with_line(&self, other: &Self, eps: f64) -> Option<Point2> {
        if self.is_parallel_to(other, eps) {
            return None;
        }
        let (p, q) = (self.point, other.point);
        if self.is_vertical() {
            return Some(Point2::new(p.x, q.y + other.slope * (p.x - q.x)));
        }
        if other.is_vertical() {
            return Some(Point2::new(q.x, p.y + self.slope * (q.x - p.x)));
        }
        let x = (q.y - p.y + self.slope * p.x - other.slope * q.x) / (self.slope - other.slope);
        Some(Point2::new(x, p.y + self.slope * (x - p.x)))
    }

    #[must_use]
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        vector2::cross(&self.direction(), &(p - self.point)).abs()
    }

    /// Foot of the perpendicular dropped from `p`.
    #[must_use]
    pub fn perpendicular_point_from(&self, p: &Point2) -> Point2 {
        let d = self.direction();
        self.point + d * vector2::dot(&(p - self.point), &d)
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn perpendicular_line_through(&self, p: &Point2) -> Self {
        let slope = if self.is_vertical() {
            0.0
        } else if self.slope == 0.0 {
            f64::INFINITY
        } else {
            -1.0 / self.slope
        };
        Self::new(*p, slope)
    }

    #[must_use]
    pub fn parallel_line_through(&self, p: &Point2) -> Self {
        Self::new(*p, self.slope)
    }

    /// Mirror image of `p` across the line.
    #[must_use]
    pub fn reflect_point(&self, p: &Point2) -> Point2 {
        let foot = self.perpendicular_point_from(p);
        foot + (foot - p)
    }

    /// Image under `matrix`, `None` when the matrix collapses the line.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Option<Self> {
        let p = matrix.transform_point(&self.point);
        let d = matrix.transform_vector(&self.direction());
        if d.x == 0.0 && d.y == 0.0 {
            return None;
        }
        let slope = if d.x == 0.0 { f64::INFINITY } else { d.y / d.x };
        Some(Self::new(p, slope))
    }
}

impl Shape for Line {
    fn is_valid(&self, _eps: f64) -> bool {
        coordinates::is_valid(&self.point) && !self.slope.is_nan()
    }

    fn graphics(&self, options: &GraphicsOptions) -> Graphics {
        if !self.is_valid(0.0) {
            return Graphics::new();
        }
        clipped_graphics(&self.point, &self.direction(), f64::NEG_INFINITY, options)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-10;

    #[test]
    fn negative_infinity_folds_to_vertical() {
        let l = Line::new(Point2::origin(), f64::NEG_INFINITY);
        assert!(l.slope().is_sign_positive() && l.is_vertical());
        assert_relative_eq!(l.angle(), FRAC_PI_2);
    }

    #[test]
    fn from_two_points_cases() {
        let l = Line::from_two_points(&Point2::new(0.0, 1.0), &Point2::new(2.0, 5.0), EPS).unwrap();
        assert_relative_eq!(l.slope(), 2.0);
        assert_relative_eq!(l.y_intercept().unwrap(), 1.0);
        assert_relative_eq!(l.x_intercept().unwrap(), -0.5);
        let v = Line::from_two_points(&Point2::new(3.0, 1.0), &Point2::new(3.0, 5.0), EPS).unwrap();
        assert!(v.is_vertical());
        assert!(v.y_intercept().is_none());
        assert!(Line::from_two_points(&Point2::origin(), &Point2::origin(), EPS).is_none());
    }

    #[test]
    fn angle_constructor_snaps_steep_slopes() {
        let l = Line::from_point_and_angle(&Point2::origin(), FRAC_PI_2, EPS);
        assert!(l.is_vertical());
        let l = Line::from_point_and_angle(&Point2::origin(), FRAC_PI_2 + 1e-13, EPS);
        assert!(l.is_vertical());
        let l = Line::from_point_and_angle(&Point2::origin(), PI / 4.0, EPS);
        assert_relative_eq!(l.slope(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn general_form_round_trip() {
        let l = Line::from_general_form(2.0, -1.0, 3.0).unwrap();
        assert_relative_eq!(l.slope(), 2.0);
        let (a, b, c) = l.general_form();
        assert_relative_eq!(a / b, -2.0);
        assert_relative_eq!(c / b, -3.0);
        assert!(Line::from_general_form(0.0, 0.0, 1.0).is_none());
        assert!(Line::from_general_form(1.0, 0.0, -4.0).unwrap().is_point_on(&Point2::new(4.0, 9.0), EPS));
    }

    #[test]
    fn intercept_constructors() {
        let l = Line::from_intercepts(2.0, 4.0).unwrap();
        assert!(l.is_point_on(&Point2::new(0.0, 4.0), EPS));
        assert!(Line::from_intercepts(0.0, 0.0).is_none());
        assert!(Line::from_slope_intercept(f64::INFINITY, 1.0).is_none());
        let l = Line::from_slope_intercept(-1.0, 3.0).unwrap();
        assert!(l.is_point_on(&Point2::new(3.0, 0.0), EPS));
    }

    #[test]
    fn parallel_and_perpendicular() {
        let a = Line::new(Point2::origin(), 2.0);
        let b = Line::new(Point2::new(0.0, 1.0), 2.0);
        let c = Line::new(Point2::origin(), -0.5);
        let v = Line::new(Point2::origin(), f64::INFINITY);
        let h = Line::new(Point2::new(1.0, 1.0), 0.0);
        assert!(a.is_parallel_to(&b, EPS));
        assert!(!a.is_same_as(&b, EPS));
        assert!(a.is_perpendicular_to(&c, EPS));
        assert!(v.is_perpendicular_to(&h, EPS));
        assert!(!v.is_parallel_to(&h, EPS));
    }

    #[test]
    fn intersections() {
        let a = Line::new(Point2::origin(), 1.0);
        let b = Line::new(Point2::new(0.0, 2.0), -1.0);
        let p = a.intersection_with_line(&b, EPS).unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
        let v = Line::new(Point2::new(3.0, 0.0), f64::INFINITY);
        let q = a.intersection_with_line(&v, EPS).unwrap();
        assert_relative_eq!(q.y, 3.0);
        assert!(a.intersection_with_line(&a.parallel_line_through(&Point2::new(0.0, 1.0)), EPS).is_none());
    }

    #[test]
    fn foot_distance_and_reflection() {
        let l = Line::new(Point2::origin(), 0.0);
        let p = Point2::new(2.0, 3.0);
        assert_eq!(l.perpendicular_point_from(&p), Point2::new(2.0, 0.0));
        assert_relative_eq!(l.distance_to_point(&p), 3.0);
        assert_eq!(l.reflect_point(&p), Point2::new(2.0, -3.0));
        assert!(l.perpendicular_line_through(&p).is_vertical());
    }

    #[test]
    fn apply_rotation() {
        let l = Line::new(Point2::origin(), 0.0);
        let r = l
            .apply(&TransformationMatrix::rotate(FRAC_PI_2, &Point2::origin()))
            .unwrap();
        assert!(r.is_vertical() || r.slope().abs() > 1e15);
        assert!(l.apply(&TransformationMatrix::new(0.0, 0.0, 0.0, 0.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn graphics_spans_viewport() {
        let l = Line::new(Point2::origin(), 0.0);
        let g = l.graphics(&GraphicsOptions::default());
        assert_eq!(g.len(), 2);
    }
}
