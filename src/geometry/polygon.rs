use std::f64::consts::TAU;

use crate::config::GraphicsOptions;
use crate::error::{GeometryError, Result};
use crate::graphics::Graphics;
use crate::math::{coordinates, maths, vector2, BBox, Point2, TransformationMatrix};

use super::{LineSegment, Shape};

/// A polyline, or a polygon when `closed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
    closed: bool,
}

impl Polygon {
    /// Creates a polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is not finite or there are fewer
    /// vertices than [`Polygon::min_point_count`].
    pub fn new(vertices: Vec<Point2>, closed: bool) -> Result<Self> {
        if let Some(p) = vertices.iter().find(|p| !coordinates::is_valid(p)) {
            let value = if p.x.is_finite() { p.y } else { p.x };
            return Err(GeometryError::NotFinite {
                parameter: "vertices",
                value,
            }
            .into());
        }
        let required = Self::min_point_count(closed);
        if vertices.len() < required {
            return Err(GeometryError::TooFewPoints {
                required,
                actual: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices, closed })
    }

    /// 3 for a closed polygon, 2 for an open polyline.
    #[must_use]
    pub const fn min_point_count(closed: bool) -> usize {
        if closed {
            3
        } else {
            2
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Edges in order; a closed polygon includes the edge back to the first
    /// vertex.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment> {
        let n = self.vertices.len();
        let count = if self.closed { n } else { n.saturating_sub(1) };
        (0..count)
            .map(|i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Shoelace area; positive for counter-clockwise vertices.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum();
        twice / 2.0
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Sum of the edge lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.segments().iter().map(LineSegment::length).sum()
    }

    /// Area centroid, `None` for a zero-area polygon.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn centroid(&self) -> Option<Point2> {
        let a = self.signed_area();
        if a == 0.0 || !a.is_finite() {
            return None;
        }
        let n = self.vertices.len();
        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            let w = p.x * q.y - q.x * p.y;
            cx += (p.x + q.x) * w;
            cy += (p.y + q.y) * w;
        }
        Some(Point2::new(cx / (6.0 * a), cy / (6.0 * a)))
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<BBox> {
        BBox::from_points(&self.vertices)
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Every turn goes the same way and the boundary winds exactly once.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_convex(&self, eps: f64) -> bool {
        if !self.closed || !self.is_valid(eps) {
            return false;
        }
        let n = self.vertices.len();
        let mut direction = 0.0_f64;
        let mut total = 0.0_f64;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            let r = self.vertices[(i + 2) % n];
            let turn = maths::sign(coordinates::orientation(&p, &q, &r), eps);
            if turn != 0.0 {
                if direction != 0.0 && turn != direction {
                    return false;
                }
                direction = turn;
            }
            total += vector2::angle_to(&(q - p), &(r - q));
        }
        direction != 0.0 && maths::equal_to(total.abs(), TAU, eps)
    }

    #[must_use]
    pub fn is_point_on(&self, p: &Point2, eps: f64) -> bool {
        self.segments().iter().any(|s| s.is_point_on(p, eps))
    }

    /// Even-odd rule. Boundary points are not inside, and an open polyline
    /// has no inside.
    #[must_use]
    pub fn is_point_inside(&self, p: &Point2, eps: f64) -> bool {
        if !self.closed || self.is_point_on(p, eps) {
            return false;
        }
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (self.vertices[i], self.vertices[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Two non-adjacent edges cross, or two adjacent edges fold back over
    /// each other.
    #[must_use]
    pub fn is_self_intersecting(&self, eps: f64) -> bool {
        let segments = self.segments();
        let n = segments.len();
        for i in 0..n {
            for j in i + 1..n {
                let adjacent = j == i + 1 || (self.closed && i == 0 && j == n - 1);
                let (s, t) = (&segments[i], &segments[j]);
                let hit = if adjacent {
                    s.is_overlapped(t, eps)
                } else {
                    s.is_intersected(t, eps) || s.is_overlapped(t, eps)
                };
                if hit {
                    return true;
                }
            }
        }
        false
    }

    #[must_use]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| matrix.transform_point(p)).collect(),
            closed: self.closed,
        }
    }
}

impl Shape for Polygon {
    fn is_valid(&self, eps: f64) -> bool {
        self.vertices.len() >= Self::min_point_count(self.closed)
            && self.vertices.iter().all(coordinates::is_valid)
            && coordinates::all_distinct(&self.vertices, eps)
    }

    fn graphics(&self, _options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        g.polyline(&self.vertices, self.closed);
        g
    }
}
