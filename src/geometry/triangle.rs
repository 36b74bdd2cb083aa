//! Triangles and their classical centers, circles and derived triangles.
//!
//! Special points are written as trilinear coordinates `alpha : beta : gamma`
//! (proportional to the signed distances to the sides `BC`, `CA`, `AB`) and
//! mapped back to the plane with [`Triangle::trilinear_to_cartesian`].
//! Vertices are `A = point1`, `B = point2`, `C = point3`; sides are
//! `a = |BC|`, `b = |CA|`, `c = |AB|`.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::GraphicsOptions;
use crate::graphics::Graphics;
use crate::math::{coordinates, matrix, maths, vector2, Matrix4, Point2, TransformationMatrix};

use super::{Circle, Line, LineSegment, Shape};

const THIRD_TURN: f64 = PI / 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    point1: Point2,
    point2: Point2,
    point3: Point2,
}

impl Triangle {
    #[must_use]
    pub fn new(point1: Point2, point2: Point2, point3: Point2) -> Self {
        Self {
            point1,
            point2,
            point3,
        }
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
    pub fn point3(&self) -> Point2 {
        self.point3
    }

    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.point1, self.point2, self.point3]
    }

    #[must_use]
    pub fn with_point1(&self, point1: Point2) -> Self {
        Self::new(point1, self.point2, self.point3)
    }

    #[must_use]
    pub fn with_point2(&self, point2: Point2) -> Self {
        Self::new(self.point1, point2, self.point3)
    }

    #[must_use]
    pub fn with_point3(&self, point3: Point2) -> Self {
        Self::new(self.point1, self.point2, point3)
    }

    /// `[a, b, c]`, the sides opposite each vertex.
    #[must_use]
    pub fn side_lengths(&self) -> [f64; 3] {
        [
            coordinates::distance(&self.point2, &self.point3),
            coordinates::distance(&self.point3, &self.point1),
            coordinates::distance(&self.point1, &self.point2),
        ]
    }

    /// Interior angles `[A, B, C]` by the law of cosines.
    #[must_use]
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = self.side_lengths();
        [
            maths::acos((b * b + c * c - a * a) / (2.0 * b * c)),
            maths::acos((c * c + a * a - b * b) / (2.0 * c * a)),
            maths::acos((a * a + b * b - c * c) / (2.0 * a * b)),
        ]
    }

    /// Positive when the vertices turn counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        coordinates::orientation(&self.point1, &self.point2, &self.point3) / 2.0
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.side_lengths().iter().sum()
    }

    /// Squared sides, ascending.
    fn sorted_squares(&self) -> [f64; 3] {
        let mut s = self.side_lengths().map(|x| x * x);
        s.sort_by(f64::total_cmp);
        s
    }

    #[must_use]
    pub fn is_acute(&self, eps: f64) -> bool {
        let [x, y, z] = self.sorted_squares();
        maths::less_than(z, x + y, eps)
    }

    #[must_use]
    pub fn is_right(&self, eps: f64) -> bool {
        let [x, y, z] = self.sorted_squares();
        maths::equal_to(z, x + y, eps)
    }

    #[must_use]
    pub fn is_obtuse(&self, eps: f64) -> bool {
        let [x, y, z] = self.sorted_squares();
        maths::greater_than(z, x + y, eps)
    }

    #[must_use]
    pub fn is_equilateral(&self, eps: f64) -> bool {
        let [a, b, c] = self.side_lengths();
        maths::equal_to(a, b, eps) && maths::equal_to(b, c, eps)
    }

    #[must_use]
    pub fn is_isosceles(&self, eps: f64) -> bool {
        let [a, b, c] = self.side_lengths();
        maths::equal_to(a, b, eps) || maths::equal_to(b, c, eps) || maths::equal_to(c, a, eps)
    }

    /// Strictly inside; points on an edge are excluded.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_point_inside(&self, p: &Point2, eps: f64) -> bool {
        let s1 = maths::sign(coordinates::orientation(&self.point1, &self.point2, p), eps);
        let s2 = maths::sign(coordinates::orientation(&self.point2, &self.point3, p), eps);
        let s3 = maths::sign(coordinates::orientation(&self.point3, &self.point1, p), eps);
        s1 != 0.0 && s1 == s2 && s2 == s3
    }

    /// Strictly inside the circumscribed circle, by the sign of
    ///
    /// ```text
    /// | xA yA xA^2+yA^2 1 |
    /// | xB yB xB^2+yB^2 1 |
    /// | xC yC xC^2+yC^2 1 |
    /// | xP yP xP^2+yP^2 1 |
    /// ```
    ///
    /// which is positive for an inside point when `A, B, C` run
    /// counter-clockwise.
    #[must_use]
    pub fn is_point_in_circumcircle(&self, p: &Point2, eps: f64) -> bool {
        if !self.is_valid(eps) {
            return false;
        }
        let rows = [self.point1, self.point2, self.point3, *p]
            .map(|q| [q.x, q.y, q.x * q.x + q.y * q.y, 1.0]);
        let det = matrix::det4(&Matrix4::from_fn(|r, c| rows[r][c]));
        maths::greater_than(self.signed_area().signum() * det, 0.0, eps)
    }

    /// Maps trilinear coordinates to the plane. `None` for an invalid
    /// triangle or coordinates that describe a point at infinity.
    #[must_use]
    pub fn trilinear_to_cartesian(&self, alpha: f64, beta: f64, gamma: f64, eps: f64) -> Option<Point2> {
        if !self.is_valid(eps) {
            return None;
        }
        let [a, b, c] = self.side_lengths();
        let (wa, wb, wc) = (a * alpha, b * beta, c * gamma);
        let total = wa + wb + wc;
        if !total.is_finite() || maths::equal_to(total, 0.0, eps) {
            return None;
        }
        let p = (self.point1.coords * wa + self.point2.coords * wb + self.point3.coords * wc) / total;
        Some(Point2::from(p))
    }

    /// Exact trilinear coordinates (signed distances to `BC`, `CA`, `AB`,
    /// positive towards the triangle).
    #[must_use]
    pub fn cartesian_to_trilinear(&self, p: &Point2, eps: f64) -> Option<(f64, f64, f64)> {
        if !self.is_valid(eps) {
            return None;
        }
        let [a, b, c] = self.side_lengths();
        let s = self.signed_area().signum();
        Some((
            s * coordinates::orientation(&self.point2, &self.point3, p) / a,
            s * coordinates::orientation(&self.point3, &self.point1, p) / b,
            s * coordinates::orientation(&self.point1, &self.point2, p) / c,
        ))
    }

    /// Per-vertex triples `(vertex, next, previous)`.
    fn corners(&self) -> [(Point2, Point2, Point2); 3] {
        let [p, q, r] = self.vertices();
        [(p, q, r), (q, r, p), (r, p, q)]
    }

    /// Segments from each vertex to the foot on the opposite side's line.
    #[must_use]
    pub fn altitudes(&self, eps: f64) -> Option<[LineSegment; 3]> {
        if !self.is_valid(eps) {
            return None;
        }
        Some(self.corners().map(|(v, q, r)| LineSegment::new(v, foot(&v, &q, &r))))
    }

    #[must_use]
    pub fn medians(&self, eps: f64) -> Option<[LineSegment; 3]> {
        if !self.is_valid(eps) {
            return None;
        }
        Some(self.corners().map(|(v, q, r)| LineSegment::new(v, coordinates::midpoint(&q, &r))))
    }

    /// Interior angle bisectors, each ending on the opposite side.
    #[must_use]
    pub fn angle_bisectors(&self, eps: f64) -> Option<[LineSegment; 3]> {
        if !self.is_valid(eps) {
            return None;
        }
        Some(self.corners().map(|(v, q, r)| {
            // The foot splits the opposite side in the ratio of the adjacent sides.
            let to_q = coordinates::distance(&v, &q);
            let to_r = coordinates::distance(&v, &r);
            let d = coordinates::lerp(&q, &r, to_q / (to_q + to_r));
            LineSegment::new(v, d)
        }))
    }

    /// Perpendicular bisectors of `BC`, `CA`, `AB`.
    #[must_use]
    pub fn perpendicular_bisectors(&self, eps: f64) -> Option<[Line; 3]> {
        if !self.is_valid(eps) {
            return None;
        }
        let [a, b, c] = self.vertices();
        Some([
            LineSegment::new(b, c).perpendicular_bisector(eps)?,
            LineSegment::new(c, a).perpendicular_bisector(eps)?,
            LineSegment::new(a, b).perpendicular_bisector(eps)?,
        ])
    }

    fn trilinear_point<F>(&self, eps: f64, f: F) -> Option<Point2>
    where
        F: Fn([f64; 3], [f64; 3]) -> [f64; 3],
    {
        if !self.is_valid(eps) {
            return None;
        }
        let [x, y, z] = f(self.side_lengths(), self.angles());
        self.trilinear_to_cartesian(x, y, z, eps)
    }

    #[must_use]
    pub fn centroid(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |[a, b, c], _| [1.0 / a, 1.0 / b, 1.0 / c])
    }

    #[must_use]
    pub fn incenter(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |_, _| [1.0, 1.0, 1.0])
    }

    #[must_use]
    pub fn circumcenter(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |_, [a, b, c]| [a.cos(), b.cos(), c.cos()])
    }

    #[must_use]
    pub fn orthocenter(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |_, [a, b, c]| {
            [b.cos() * c.cos(), c.cos() * a.cos(), a.cos() * b.cos()]
        })
    }

    #[must_use]
    pub fn nine_point_center(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |_, [a, b, c]| [(b - c).cos(), (c - a).cos(), (a - b).cos()])
    }

    /// Where the cevians to the incircle's touch points meet.
    #[must_use]
    pub fn gergonne_point(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |[a, b, c], _| {
            [b * c / (b + c - a), c * a / (c + a - b), a * b / (a + b - c)]
        })
    }

    /// Where the cevians to the excircles' touch points meet.
    #[must_use]
    pub fn nagel_point(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |[a, b, c], _| {
            [(b + c - a) / a, (c + a - b) / b, (a + b - c) / c]
        })
    }

    /// Symmedian point.
    #[must_use]
    pub fn lemoine_point(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |sides, _| sides)
    }

    /// First isogonic center.
    #[must_use]
    pub fn fermat_point(&self, eps: f64) -> Option<Point2> {
        self.trilinear_point(eps, |_, angles| angles.map(|x| 1.0 / (x + THIRD_TURN).sin()))
    }

    /// `None` for an equilateral triangle.
    #[must_use]
    pub fn first_isodynamic_point(&self, eps: f64) -> Option<Point2> {
        if self.is_equilateral(eps) {
            return None;
        }
        self.trilinear_point(eps, |_, angles| angles.map(|x| (x + THIRD_TURN).sin()))
    }

    /// `None` for an equilateral triangle.
    #[must_use]
    pub fn second_isodynamic_point(&self, eps: f64) -> Option<Point2> {
        if self.is_equilateral(eps) {
            return None;
        }
        self.trilinear_point(eps, |_, angles| angles.map(|x| (x - THIRD_TURN).sin()))
    }

    /// Touch point of the incircle and the nine-point circle. `None` for an
    /// equilateral triangle, where the two circles coincide.
    #[must_use]
    pub fn feuerbach_point(&self, eps: f64) -> Option<Point2> {
        if self.is_equilateral(eps) {
            return None;
        }
        self.trilinear_point(eps, |_, [a, b, c]| {
            [1.0 - (b - c).cos(), 1.0 - (c - a).cos(), 1.0 - (a - b).cos()]
        })
    }

    /// Centers of the excircles opposite `A`, `B`, `C`.
    #[must_use]
    pub fn excenters(&self, eps: f64) -> Option<[Point2; 3]> {
        Some([
            self.trilinear_to_cartesian(-1.0, 1.0, 1.0, eps)?,
            self.trilinear_to_cartesian(1.0, -1.0, 1.0, eps)?,
            self.trilinear_to_cartesian(1.0, 1.0, -1.0, eps)?,
        ])
    }

    fn circumradius(&self) -> f64 {
        let [a, b, c] = self.side_lengths();
        a * b * c / (4.0 * self.area())
    }

    #[must_use]
    pub fn inscribed_circle(&self, eps: f64) -> Option<Circle> {
        let center = self.incenter(eps)?;
        Circle::new(center, 2.0 * self.area() / self.perimeter()).ok()
    }

    #[must_use]
    pub fn circumscribed_circle(&self, eps: f64) -> Option<Circle> {
        let center = self.circumcenter(eps)?;
        Circle::new(center, self.circumradius()).ok()
    }

    #[must_use]
    pub fn nine_point_circle(&self, eps: f64) -> Option<Circle> {
        let center = self.nine_point_center(eps)?;
        Circle::new(center, self.circumradius() / 2.0).ok()
    }

    /// Excircles opposite `A`, `B`, `C`.
    #[must_use]
    pub fn escribed_circles(&self, eps: f64) -> Option<[Circle; 3]> {
        let centers = self.excenters(eps)?;
        let [a, b, c] = self.side_lengths();
        let s = (a + b + c) / 2.0;
        let area = self.area();
        Some([
            Circle::new(centers[0], area / (s - a)).ok()?,
            Circle::new(centers[1], area / (s - b)).ok()?,
            Circle::new(centers[2], area / (s - c)).ok()?,
        ])
    }

    /// Circle centered at the orthocenter for which each vertex and the
    /// foot of its altitude are inverse points. Exists only for obtuse
    /// triangles.
    #[must_use]
    pub fn polar_circle(&self, eps: f64) -> Option<Circle> {
        if !self.is_valid(eps) || !self.is_obtuse(eps) {
            return None;
        }
        let [a, b, c] = self.angles();
        let r = self.circumradius();
        let r2 = -4.0 * r * r * a.cos() * b.cos() * c.cos();
        if r2 <= 0.0 {
            return None;
        }
        Circle::new(self.orthocenter(eps)?, r2.sqrt()).ok()
    }

    /// Line through the circumcenter and orthocenter. `None` for an
    /// equilateral triangle, where they coincide.
    #[must_use]
    pub fn euler_line(&self, eps: f64) -> Option<Line> {
        if self.is_equilateral(eps) {
            return None;
        }
        Line::from_two_points(&self.circumcenter(eps)?, &self.orthocenter(eps)?, eps)
    }

    /// Triangle of the side midpoints.
    #[must_use]
    pub fn medial_triangle(&self, eps: f64) -> Option<Self> {
        if !self.is_valid(eps) {
            return None;
        }
        let [p, q, r] = self.vertices();
        Some(Self::new(
            coordinates::midpoint(&q, &r),
            coordinates::midpoint(&r, &p),
            coordinates::midpoint(&p, &q),
        ))
    }

    /// Triangle whose medial triangle is `self`.
    #[must_use]
    pub fn antimedial_triangle(&self, eps: f64) -> Option<Self> {
        if !self.is_valid(eps) {
            return None;
        }
        let [p, q, r] = self.vertices();
        Some(Self::new(q + (r - p), r + (p - q), p + (q - r)))
    }

    /// Feet of the altitudes. `None` for a right triangle, where two feet
    /// fall on the right-angle vertex.
    #[must_use]
    pub fn orthic_triangle(&self, eps: f64) -> Option<Self> {
        if self.is_right(eps) {
            return None;
        }
        let [ha, hb, hc] = self.altitudes(eps)?;
        Some(Self::new(ha.point2(), hb.point2(), hc.point2()))
    }

    /// Formed by the tangents to the circumcircle at the vertices. `None`
    /// for a right triangle, where two of the tangents are parallel.
    #[must_use]
    pub fn tangential_triangle(&self, eps: f64) -> Option<Self> {
        if self.is_right(eps) {
            return None;
        }
        let [a, b, c] = self.side_lengths();
        Some(Self::new(
            self.trilinear_to_cartesian(-a, b, c, eps)?,
            self.trilinear_to_cartesian(a, -b, c, eps)?,
            self.trilinear_to_cartesian(a, b, -c, eps)?,
        ))
    }

    /// Extouch triangle: where the excircles touch the sides.
    #[must_use]
    pub fn nagel_triangle(&self, eps: f64) -> Option<Self> {
        if !self.is_valid(eps) {
            return None;
        }
        let [a, b, c] = self.side_lengths();
        let s = (a + b + c) / 2.0;
        Some(Self::new(
            self.trilinear_to_cartesian(0.0, (s - b) / b, (s - c) / c, eps)?,
            self.trilinear_to_cartesian((s - a) / a, 0.0, (s - c) / c, eps)?,
            self.trilinear_to_cartesian((s - a) / a, (s - b) / b, 0.0, eps)?,
        ))
    }

    /// Intouch triangle: where the incircle touches the sides.
    #[must_use]
    pub fn gergonne_triangle(&self, eps: f64) -> Option<Self> {
        if !self.is_valid(eps) {
            return None;
        }
        let [a, b, c] = self.side_lengths();
        let s = (a + b + c) / 2.0;
        Some(Self::new(
            self.trilinear_to_cartesian(0.0, (s - c) / b, (s - b) / c, eps)?,
            self.trilinear_to_cartesian((s - c) / a, 0.0, (s - a) / c, eps)?,
            self.trilinear_to_cartesian((s - b) / a, (s - a) / b, 0.0, eps)?,
        ))
    }

    /// Where the nine-point circle touches the three excircles.
    #[must_use]
    pub fn feuerbach_triangle(&self, eps: f64) -> Option<Self> {
        let n = self.nine_point_center(eps)?;
        let half_r = self.circumradius() / 2.0;
        let [ja, jb, jc] = self.excenters(eps)?;
        let touch = |j: Point2| n + vector2::normalize(&(j - n)) * half_r;
        Some(Self::new(touch(ja), touch(jb), touch(jc)))
    }

    #[must_use]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Self {
        Self::new(
            matrix.transform_point(&self.point1),
            matrix.transform_point(&self.point2),
            matrix.transform_point(&self.point3),
        )
    }
}

/// Foot of the perpendicular from `p` onto the line `q r`.
fn foot(p: &Point2, q: &Point2, r: &Point2) -> Point2 {
    let d = r - q;
    let t = vector2::dot(&(p - q), &d) / vector2::squared_magnitude(&d);
    q + d * t
}

impl Shape for Triangle {
    /// Finite, non-collinear vertices satisfying the strict triangle
    /// inequality.
    fn is_valid(&self, eps: f64) -> bool {
        let vertices = self.vertices();
        if !vertices.iter().all(coordinates::is_valid) || !coordinates::all_distinct(&vertices, eps) {
            return false;
        }
        if maths::equal_to(self.signed_area(), 0.0, eps) {
            return false;
        }
        let [a, b, c] = self.side_lengths();
        maths::greater_than(a + b, c, eps)
            && maths::greater_than(b + c, a, eps)
            && maths::greater_than(c + a, b, eps)
    }

    fn graphics(&self, _options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        g.polyline(&self.vertices(), true);
        g
    }
}
