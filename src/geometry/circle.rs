use std::f64::consts::PI;

use crate::config::GraphicsOptions;
use crate::error::{GeometryError, Result};
use crate::graphics::Graphics;
use crate::math::{angle, coordinates, matrix, maths, vector2, Matrix4, Point2, TransformationMatrix};

use super::{Line, Shape};

/// A circle with a finite center and a positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is not finite or the radius is not a
    /// positive finite number.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !coordinates::is_valid(&center) {
            return Err(GeometryError::NotFinite {
                parameter: "center",
                value: if center.x.is_finite() { center.y } else { center.x },
            }
            .into());
        }
        if !radius.is_finite() {
            return Err(GeometryError::NotFinite {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        if radius <= 0.0 {
            return Err(GeometryError::NotPositive {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// The circle through three points, from the cofactor expansion of
    ///
    /// ```text
    /// | x^2+y^2  x  y  1 |
    /// | s1      x1 y1  1 |  = 0,   s_i = x_i^2 + y_i^2
    /// | s2      x2 y2  1 |
    /// | s3      x3 y3  1 |
    /// ```
    ///
    /// along its first row. `None` when the points are collinear or not
    /// finite.
    #[must_use]
    pub fn from_three_points(p1: &Point2, p2: &Point2, p3: &Point2, eps: f64) -> Option<Self> {
        let row = |p: &Point2| [p.x * p.x + p.y * p.y, p.x, p.y, 1.0];
        let (r1, r2, r3) = (row(p1), row(p2), row(p3));
        let m = Matrix4::from_fn(|r, c| match r {
            1 => r1[c],
            2 => r2[c],
            3 => r3[c],
            _ => 0.0,
        });
        let minor = |col| matrix::det3(&matrix::minor4(&m, 0, col));
        let m11 = minor(0);
        if !m11.is_finite() || maths::equal_to(m11, 0.0, eps) {
            return None;
        }
        let x0 = minor(1) / (2.0 * m11);
        let y0 = -minor(2) / (2.0 * m11);
        let radius_squared = x0 * x0 + y0 * y0 + minor(3) / m11;
        Self::new(Point2::new(x0, y0), radius_squared.max(0.0).sqrt()).ok()
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// # Errors
    ///
    /// Same as [`Circle::new`].
    pub fn with_center(&self, center: Point2) -> Result<Self> {
        Self::new(center, self.radius)
    }

    /// # Errors
    ///
    /// Same as [`Circle::new`].
    pub fn with_radius(&self, radius: f64) -> Result<Self> {
        Self::new(self.center, radius)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        coordinates::move_along_angle(&self.center, angle, self.radius)
    }

    /// Angle of `p` seen from the center, in `[0, 2pi)`.
    #[must_use]
    pub fn angle_of_point(&self, p: &Point2) -> f64 {
        angle::simplify(vector2::angle(&(p - self.center)))
    }

    fn distance_from_center(&self, p: &Point2) -> f64 {
        coordinates::distance(&self.center, p)
    }

    #[must_use]
    pub fn is_point_inside(&self, p: &Point2, eps: f64) -> bool {
        maths::less_than(self.distance_from_center(p), self.radius, eps)
    }

    #[must_use]
    pub fn is_point_on(&self, p: &Point2, eps: f64) -> bool {
        maths::equal_to(self.distance_from_center(p), self.radius, eps)
    }

    #[must_use]
    pub fn is_point_outside(&self, p: &Point2, eps: f64) -> bool {
        maths::greater_than(self.distance_from_center(p), self.radius, eps)
    }

    /// Tangent at a point of the circle, `None` if `point` is not on it.
    #[must_use]
    pub fn tangent_line_at(&self, point: &Point2, eps: f64) -> Option<Line> {
        if !self.is_point_on(point, eps) {
            return None;
        }
        let normal = self.angle_of_point(point);
        Some(Line::from_point_and_angle(point, normal + PI / 2.0, eps))
    }

    /// The two tangents through an outside point, `None` for points inside
    /// or on the circle.
    #[must_use]
    pub fn tangent_lines_from(&self, point: &Point2, eps: f64) -> Option<(Line, Line)> {
        if !self.is_point_outside(point, eps) {
            return None;
        }
        let d = self.distance_from_center(point);
        let towards = vector2::angle(&(self.center - point));
        let spread = maths::asin(self.radius / d);
        Some((
            Line::from_point_and_angle(point, towards - spread, eps),
            Line::from_point_and_angle(point, towards + spread, eps),
        ))
    }

    /// Zero, one (tangent) or two points along the line direction.
    #[must_use]
    pub fn intersection_with_line(&self, line: &Line, eps: f64) -> Vec<Point2> {
        let foot = line.perpendicular_point_from(&self.center);
        let h = self.distance_from_center(&foot);
        if maths::equal_to(h, self.radius, eps) {
            return vec![foot];
        }
        if h > self.radius {
            return Vec::new();
        }
        let half_chord = (self.radius * self.radius - h * h).sqrt();
        let d = line.direction();
        vec![foot - d * half_chord, foot + d * half_chord]
    }

    /// Zero, one (tangent) or two points. Concentric circles give none.
    #[must_use]
    pub fn intersection_with_circle(&self, other: &Self, eps: f64) -> Vec<Point2> {
        if self.is_concentric_with(other, eps) {
            return Vec::new();
        }
        let (r1, r2) = (self.radius, other.radius);
        let v = other.center - self.center;
        let d = vector2::magnitude(&v);
        let outer = r1 + r2;
        let inner = (r1 - r2).abs();
        let u = v / d;
        let a = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
        let base = self.center + u * a;
        if maths::equal_to(d, outer, eps) || maths::equal_to(d, inner, eps) {
            return vec![base];
        }
        if d > outer || d < inner {
            return Vec::new();
        }
        let h = (r1 * r1 - a * a).max(0.0).sqrt();
        let n = vector2::perpendicular(&u);
        vec![base + n * h, base - n * h]
    }

    /// The circles cross or touch.
    #[must_use]
    pub fn is_intersected_with_circle(&self, other: &Self, eps: f64) -> bool {
        if self.is_concentric_with(other, eps) {
            return false;
        }
        let d = coordinates::distance(&self.center, &other.center);
        let inner = (self.radius - other.radius).abs();
        maths::between(d, inner, self.radius + other.radius, false, false, eps)
    }

    #[must_use]
    pub fn is_internally_tangent_to(&self, other: &Self, eps: f64) -> bool {
        if self.is_concentric_with(other, eps) {
            return false;
        }
        let d = coordinates::distance(&self.center, &other.center);
        maths::equal_to(d, (self.radius - other.radius).abs(), eps)
    }

    #[must_use]
    pub fn is_externally_tangent_to(&self, other: &Self, eps: f64) -> bool {
        let d = coordinates::distance(&self.center, &other.center);
        maths::equal_to(d, self.radius + other.radius, eps)
    }

    /// Each circle lies outside the other, without touching.
    #[must_use]
    pub fn is_separated_from(&self, other: &Self, eps: f64) -> bool {
        let d = coordinates::distance(&self.center, &other.center);
        maths::greater_than(d, self.radius + other.radius, eps)
    }

    /// `other` lies strictly inside `self`, without touching.
    #[must_use]
    pub fn is_containing(&self, other: &Self, eps: f64) -> bool {
        let d = coordinates::distance(&self.center, &other.center);
        maths::less_than(d + other.radius, self.radius, eps)
    }

    #[must_use]
    pub fn is_concentric_with(&self, other: &Self, eps: f64) -> bool {
        coordinates::equal_to(&self.center, &other.center, eps)
    }

    /// Image under a similarity (rotation, reflection, uniform scale and
    /// translation). `None` for any other matrix.
    #[must_use]
    pub fn apply_uniform(&self, matrix: &TransformationMatrix, eps: f64) -> Option<Self> {
        let TransformationMatrix { a, b, c, d, .. } = *matrix;
        let col1 = a * a + b * b;
        let col2 = c * c + d * d;
        if !maths::equal_to(a * c + b * d, 0.0, eps) || !maths::equal_to(col1, col2, eps) {
            return None;
        }
        Self::new(matrix.transform_point(&self.center), self.radius * col1.sqrt()).ok()
    }
}

impl Shape for Circle {
    fn is_valid(&self, _eps: f64) -> bool {
        coordinates::is_valid(&self.center) && self.radius.is_finite() && self.radius > 0.0
    }

    /// Two half arcs starting at angle zero.
    fn graphics(&self, _options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        let r = self.radius;
        g.move_to(self.center.x + r, self.center.y)
            .center_arc_to(&self.center, r, r, 0.0, 0.0, PI, true)
            .center_arc_to(&self.center, r, r, 0.0, PI, 2.0 * PI, true)
            .close();
        g
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-10;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point2::new(x, y), r).unwrap()
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(Circle::new(Point2::origin(), 0.0).is_err());
        assert!(Circle::new(Point2::origin(), -1.0).is_err());
        assert!(Circle::new(Point2::origin(), f64::NAN).is_err());
        assert!(Circle::new(Point2::new(f64::INFINITY, 0.0), 1.0).is_err());
    }

    #[test]
    fn through_three_points() {
        let c = Circle::from_three_points(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(-1.0, 0.0),
            EPS,
        )
        .unwrap();
        assert_relative_eq!(c.center().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.center().y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.radius(), 1.0, epsilon = 1e-12);

        let right = Circle::from_three_points(
            &Point2::origin(),
            &Point2::new(4.0, 0.0),
            &Point2::new(0.0, 2.0),
            EPS,
        )
        .unwrap();
        assert_relative_eq!(right.center().x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(right.center().y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(right.radius(), 5.0_f64.sqrt(), epsilon = 1e-12);

        let collinear = Circle::from_three_points(
            &Point2::origin(),
            &Point2::new(1.0, 1.0),
            &Point2::new(2.0, 2.0),
            EPS,
        );
        assert!(collinear.is_none());
    }

    #[test]
    fn measures_and_points() {
        let c = circle(1.0, 1.0, 2.0);
        assert_relative_eq!(c.area(), 4.0 * PI);
        assert_relative_eq!(c.perimeter(), 4.0 * PI);
        let p = c.point_at_angle(PI / 2.0);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 3.0);
        assert_relative_eq!(c.angle_of_point(&p), PI / 2.0);
        assert_relative_eq!(c.angle_of_point(&Point2::new(1.0, -1.0)), 1.5 * PI, epsilon = 1e-12);
        assert!(c.is_point_on(&p, EPS));
        assert!(c.is_point_inside(&Point2::new(1.5, 1.0), EPS));
        assert!(c.is_point_outside(&Point2::new(5.0, 1.0), EPS));
    }

    #[test]
    fn tangents() {
        let c = circle(0.0, 0.0, 1.0);
        let t = c.tangent_line_at(&Point2::new(1.0, 0.0), EPS).unwrap();
        assert!(t.is_vertical());
        assert!(c.tangent_line_at(&Point2::new(2.0, 0.0), EPS).is_none());

        let (l1, l2) = c.tangent_lines_from(&Point2::new(2.0, 0.0), EPS).unwrap();
        assert_relative_eq!(l1.distance_to_point(&Point2::origin()), 1.0, epsilon = 1e-12);
        assert_relative_eq!(l2.distance_to_point(&Point2::origin()), 1.0, epsilon = 1e-12);
        assert_relative_eq!(l1.slope(), -l2.slope(), epsilon = 1e-12);
        assert!(c.tangent_lines_from(&Point2::new(0.5, 0.0), EPS).is_none());
        assert!(c.tangent_lines_from(&Point2::new(1.0, 0.0), EPS).is_none());
    }

    #[test]
    fn line_intersections() {
        let c = circle(0.0, 0.0, 1.0);
        let through = Line::new(Point2::origin(), 0.0);
        let pts = c.intersection_with_line(&through, EPS);
        assert_eq!(pts.len(), 2);
        assert_relative_eq!(pts[0].x, -1.0);
        assert_relative_eq!(pts[1].x, 1.0);
        let tangent = Line::new(Point2::new(0.0, 1.0), 0.0);
        assert_eq!(c.intersection_with_line(&tangent, EPS).len(), 1);
        let miss = Line::new(Point2::new(0.0, 2.0), 0.0);
        assert!(c.intersection_with_line(&miss, EPS).is_empty());
    }

    #[test]
    fn circle_intersections() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(1.0, 0.0, 1.0);
        let pts = a.intersection_with_circle(&b, EPS);
        assert_eq!(pts.len(), 2);
        for p in &pts {
            assert_relative_eq!(p.x, 0.5, epsilon = 1e-12);
            assert_relative_eq!(p.y.abs(), 0.75f64.sqrt(), epsilon = 1e-12);
        }
        assert!(a.is_intersected_with_circle(&b, EPS));

        let touching = circle(2.0, 0.0, 1.0);
        assert_eq!(a.intersection_with_circle(&touching, EPS), vec![Point2::new(1.0, 0.0)]);
        assert!(a.is_externally_tangent_to(&touching, EPS));

        let far = circle(5.0, 0.0, 1.0);
        assert!(a.intersection_with_circle(&far, EPS).is_empty());
        assert!(a.is_separated_from(&far, EPS));
    }

    #[test]
    fn containment_relations() {
        let big = circle(0.0, 0.0, 5.0);
        let inner = circle(1.0, 0.0, 1.0);
        let touching_inside = circle(4.0, 0.0, 1.0);
        assert!(big.is_containing(&inner, EPS));
        assert!(!big.is_containing(&touching_inside, EPS));
        assert!(big.is_internally_tangent_to(&touching_inside, EPS));
        assert!(big.is_concentric_with(&circle(0.0, 0.0, 1.0), EPS));
        assert!(!big.is_intersected_with_circle(&circle(0.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn uniform_transforms_only() {
        let c = circle(1.0, 0.0, 1.0);
        let m = TransformationMatrix::rotate(PI / 2.0, &Point2::origin())
            .multiply(&TransformationMatrix::scale(2.0, 2.0, &Point2::origin()));
        let image = c.apply_uniform(&m, EPS).unwrap();
        assert_relative_eq!(image.radius(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(image.center().y, 2.0, epsilon = 1e-12);
        let stretch = TransformationMatrix::scale(2.0, 1.0, &Point2::origin());
        assert!(c.apply_uniform(&stretch, EPS).is_none());
    }

    #[test]
    fn graphics_is_closed_pair_of_arcs() {
        let g = circle(0.0, 0.0, 1.0).graphics(&GraphicsOptions::default());
        assert_eq!(g.len(), 4);
    }
}
