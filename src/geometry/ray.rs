use crate::config::GraphicsOptions;
use crate::graphics::Graphics;
use crate::math::{angle, coordinates, maths, vector2, Point2, TransformationMatrix, Vector2};

use super::{clipped_graphics, Line, Shape};

/// A half-line from `point` in direction `angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    point: Point2,
    angle: f64,
}

impl Ray {
    /// Creates a ray; the angle is normalized into `[0, 2pi)`.
    #[must_use]
    pub fn new(point: Point2, angle: f64) -> Self {
        Self {
            point,
            angle: angle::simplify(angle),
        }
    }

    /// Ray from `from` through `through`, `None` if they coincide.
    #[must_use]
    pub fn from_two_points(from: &Point2, through: &Point2, eps: f64) -> Option<Self> {
        if coordinates::equal_to(from, through, eps) {
            return None;
        }
        Some(Self::new(*from, vector2::angle(&(through - from))))
    }

    #[must_use]
    pub fn point(&self) -> Point2 {
        self.point
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn with_point(&self, point: Point2) -> Self {
        Self::new(point, self.angle)
    }

    #[must_use]
    pub fn with_angle(&self, angle: f64) -> Self {
        Self::new(self.point, angle)
    }

    /// Unit direction vector.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(maths::cos(self.angle), maths::sin(self.angle))
    }

    /// The supporting line.
    #[must_use]
    pub fn to_line(&self, eps: f64) -> Line {
        Line::from_point_and_angle(&self.point, self.angle, eps)
    }

    #[must_use]
    pub fn is_point_on(&self, p: &Point2, eps: f64) -> bool {
        let d = self.direction();
        let v = p - self.point;
        maths::equal_to(vector2::cross(&d, &v), 0.0, eps)
            && maths::greater_than_or_equal_to(vector2::dot(&d, &v), 0.0, eps)
    }

    /// Same origin and same direction.
    #[must_use]
    pub fn is_same_as(&self, other: &Self, eps: f64) -> bool {
        coordinates::equal_to(&self.point, &other.point, eps)
            && angle::equal_to(self.angle, other.angle, eps)
    }

    /// The ray pointing the opposite way from the same origin.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::new(self.point, angle::reverse(self.angle))
    }

    #[must_use]
    pub fn intersection_with_line(&self, line: &Line, eps: f64) -> Option<Point2> {
        let p = self.to_line(eps).intersection_with_line(line, eps)?;
        self.is_point_on(&p, eps).then_some(p)
    }

    #[must_use]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Self {
        let d = matrix.transform_vector(&self.direction());
        Self::new(matrix.transform_point(&self.point), vector2::angle(&d))
    }
}

impl Shape for Ray {
    fn is_valid(&self, _eps: f64) -> bool {
        coordinates::is_valid(&self.point) && self.angle.is_finite()
    }

    fn graphics(&self, options: &GraphicsOptions) -> Graphics {
        if !self.is_valid(0.0) {
            return Graphics::new();
        }
        clipped_graphics(&self.point, &self.direction(), 0.0, options)
    }
}
