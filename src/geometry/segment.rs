use crate::config::GraphicsOptions;
use crate::graphics::Graphics;
use crate::math::{angle, coordinates, maths, vector2, Point2, TransformationMatrix, Vector2};

use super::{Line, Shape};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    point1: Point2,
    point2: Point2,
}

impl LineSegment {
    #[must_use]
    pub fn new(point1: Point2, point2: Point2) -> Self {
        Self { point1, point2 }
    }

    #[must_use]
    pub fn point1(&self) -> Point2 {
        self.point1
    }

    #[must_use]
    pub fn point2(&self) -> Point2 {
        self.point2
    }

    #[must_use]
    pub fn with_point1(&self, point1: Point2) -> Self {
        Self::new(point1, self.point2)
    }

    #[must_use]
    pub fn with_point2(&self, point2: Point2) -> Self {
        Self::new(self.point1, point2)
    }

    /// `point2 - point1`.
    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        self.point2 - self.point1
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        coordinates::distance(&self.point1, &self.point2)
    }

    /// Direction angle from `point1` to `point2` in `[0, 2pi)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        angle::simplify(vector2::angle(&self.to_vector()))
    }

    #[must_use]
    pub fn middle_point(&self) -> Point2 {
        coordinates::midpoint(&self.point1, &self.point2)
    }

    /// `point1` at `t = 0`, `point2` at `t = 1`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        coordinates::lerp(&self.point1, &self.point2, t)
    }

    #[must_use]
    pub fn to_line(&self, eps: f64) -> Option<Line> {
        Line::from_two_points(&self.point1, &self.point2, eps)
    }

    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::new(self.point2, self.point1)
    }

    /// Parameter of the projection of `p` onto the supporting line.
    #[allow(clippy::float_cmp)]
    fn parameter_of(&self, p: &Point2) -> f64 {
        let d = self.to_vector();
        let len2 = vector2::squared_magnitude(&d);
        if len2 == 0.0 {
            return 0.0;
        }
        vector2::dot(&(p - self.point1), &d) / len2
    }

    #[must_use]
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        let t = maths::clamp(self.parameter_of(p), 0.0, 1.0);
        coordinates::distance(p, &self.point_at(t))
    }

    #[must_use]
    pub fn is_point_on(&self, p: &Point2, eps: f64) -> bool {
        maths::equal_to(self.distance_to_point(p), 0.0, eps)
    }

    /// Direction vectors are parallel, whether or not the segments share a
    /// line.
    #[must_use]
    pub fn is_parallel(&self, other: &Self, eps: f64) -> bool {
        vector2::is_parallel(&self.to_vector(), &other.to_vector(), eps)
    }

    /// Parallel, and the vector joining the two segments is parallel too.
    #[must_use]
    pub fn is_collinear(&self, other: &Self, eps: f64) -> bool {
        self.is_parallel(other, eps)
            && vector2::is_parallel(&self.to_vector(), &(other.point1 - self.point1), eps)
    }

    /// The segments share exactly one endpoint.
    #[must_use]
    pub fn is_jointed(&self, other: &Self, eps: f64) -> bool {
        let eq = |p: &Point2, q: &Point2| coordinates::equal_to(p, q, eps);
        eq(&self.point1, &other.point1)
            ^ eq(&self.point1, &other.point2)
            ^ eq(&self.point2, &other.point1)
            ^ eq(&self.point2, &other.point2)
    }

    /// Parameter interval of `other` projected onto `self`, clipped to
    /// `[0, 1]`.
    fn overlap_interval(&self, other: &Self) -> (f64, f64) {
        let t3 = self.parameter_of(&other.point1);
        let t4 = self.parameter_of(&other.point2);
        (t3.min(t4).max(0.0), t3.max(t4).min(1.0))
    }

    /// Collinear, and the segments share more than a single point.
    #[must_use]
    pub fn is_overlapped(&self, other: &Self, eps: f64) -> bool {
        if !self.is_collinear(other, eps) {
            return false;
        }
        let (lo, hi) = self.overlap_interval(other);
        maths::greater_than(hi, lo, eps)
    }

    /// Parameters `(t1, t2)` of the crossing point on `self` and `other`.
    fn crossing_parameters(&self, other: &Self) -> (f64, f64) {
        let d1 = self.to_vector();
        let d2 = other.to_vector();
        let w = other.point1 - self.point1;
        let den = vector2::cross(&d1, &d2);
        (vector2::cross(&w, &d2) / den, vector2::cross(&w, &d1) / den)
    }

    /// Not parallel, and the crossing point lies on both segments.
    #[must_use]
    pub fn is_intersected(&self, other: &Self, eps: f64) -> bool {
        if self.is_parallel(other, eps) {
            return false;
        }
        let (t1, t2) = self.crossing_parameters(other);
        maths::between(t1, 0.0, 1.0, false, false, eps) && maths::between(t2, 0.0, 1.0, false, false, eps)
    }

    #[must_use]
    pub fn intersection_point(&self, other: &Self, eps: f64) -> Option<Point2> {
        if !self.is_intersected(other, eps) {
            return None;
        }
        let (t1, _) = self.crossing_parameters(other);
        Some(self.point_at(t1))
    }

    /// The shared piece of two overlapping segments.
    #[must_use]
    pub fn overlap(&self, other: &Self, eps: f64) -> Option<Self> {
        if !self.is_overlapped(other, eps) {
            return None;
        }
        let (lo, hi) = self.overlap_interval(other);
        Some(Self::new(self.point_at(lo), self.point_at(hi)))
    }

    #[must_use]
    pub fn perpendicular_bisector(&self, eps: f64) -> Option<Line> {
        if !self.is_valid(eps) {
            return None;
        }
        let mid = self.middle_point();
        Some(self.to_line(eps)?.perpendicular_line_through(&mid))
    }

    /// Splits at parameter `t`, `None` outside `[0, 1]`.
    #[must_use]
    pub fn split_at(&self, t: f64) -> Option<(Self, Self)> {
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let p = self.point_at(t);
        Some((Self::new(self.point1, p), Self::new(p, self.point2)))
    }

    #[must_use]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Self {
        Self::new(
            matrix.transform_point(&self.point1),
            matrix.transform_point(&self.point2),
        )
    }
}

impl Shape for LineSegment {
    fn is_valid(&self, eps: f64) -> bool {
        coordinates::is_valid(&self.point1)
            && coordinates::is_valid(&self.point2)
            && !coordinates::equal_to(&self.point1, &self.point2, eps)
    }

    fn graphics(&self, _options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        g.move_to(self.point1.x, self.point1.y)
            .line_to(self.point2.x, self.point2.y);
        g
    }
}
