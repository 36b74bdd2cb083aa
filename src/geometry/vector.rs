use crate::config::GraphicsOptions;
use crate::graphics::Graphics;
use crate::math::{angle, coordinates, float, vector2, Point2, TransformationMatrix, Vector2};

use super::Shape;

/// A displacement drawn from `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    origin: Point2,
    coordinates: Vector2,
}

impl Vector {
    #[must_use]
    pub fn new(origin: Point2, coordinates: Vector2) -> Self {
        Self {
            origin,
            coordinates,
        }
    }

    /// From `from` to `to`.
    #[must_use]
    pub fn from_two_points(from: &Point2, to: &Point2) -> Self {
        Self::new(*from, to - from)
    }

    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    #[must_use]
    pub fn coordinates(&self) -> Vector2 {
        self.coordinates
    }

    #[must_use]
    pub fn with_origin(&self, origin: Point2) -> Self {
        Self::new(origin, self.coordinates)
    }

    #[must_use]
    pub fn with_coordinates(&self, coordinates: Vector2) -> Self {
        Self::new(self.origin, coordinates)
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        vector2::magnitude(&self.coordinates)
    }

    /// Direction angle in `[0, 2pi)`; `0` for the zero vector.
    #[must_use]
    pub fn angle(&self) -> f64 {
        angle::simplify(vector2::angle(&self.coordinates))
    }

    /// Unit vector at the same origin; the zero vector stays zero.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.with_coordinates(vector2::normalize(&self.coordinates))
    }

    /// Sum, kept at `self`'s origin.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.with_coordinates(vector2::add(&self.coordinates, &other.coordinates))
    }

    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.with_coordinates(vector2::subtract(&self.coordinates, &other.coordinates))
    }

    #[must_use]
    pub fn scalar_multiply(&self, s: f64) -> Self {
        self.with_coordinates(vector2::scalar_multiply(&self.coordinates, s))
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        vector2::dot(&self.coordinates, &other.coordinates)
    }

    /// z-component of the 3D cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        vector2::cross(&self.coordinates, &other.coordinates)
    }

    #[must_use]
    pub fn is_parallel_to(&self, other: &Self, eps: f64) -> bool {
        vector2::is_parallel(&self.coordinates, &other.coordinates, eps)
    }

    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self, eps: f64) -> bool {
        vector2::is_perpendicular(&self.coordinates, &other.coordinates, eps)
    }

    /// `origin + coordinates`.
    #[must_use]
    pub fn terminal_point(&self) -> Point2 {
        self.origin + self.coordinates
    }

    #[must_use]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Self {
        Self::new(
            matrix.transform_point(&self.origin),
            matrix.transform_vector(&self.coordinates),
        )
    }
}

impl Shape for Vector {
    fn is_valid(&self, _eps: f64) -> bool {
        coordinates::is_valid(&self.origin) && float::all_finite(self.coordinates.as_slice())
    }

    /// Shaft, then an open arrow head at the terminal point. A zero vector
    /// draws no head.
    fn graphics(&self, options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        let tip = self.terminal_point();
        g.move_to(self.origin.x, self.origin.y).line_to(tip.x, tip.y);
        if vector2::is_zero(&self.coordinates, 0.0) {
            return g;
        }
        let unit = vector2::normalize(&self.coordinates);
        let back = tip - unit * options.arrow_length;
        let side = vector2::perpendicular(&unit) * (options.arrow_width / 2.0);
        let (left, right) = (back + side, back - side);
        g.move_to(left.x, left.y)
            .line_to(tip.x, tip.y)
            .line_to(right.x, right.y);
        g
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graphics::GraphicsCommand;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-10;

    fn v(x: f64, y: f64) -> Vector {
        Vector::new(Point2::new(1.0, 1.0), Vector2::new(x, y))
    }

    #[test]
    fn measures() {
        let a = v(3.0, 4.0);
        assert_relative_eq!(a.magnitude(), 5.0);
        assert_relative_eq!(a.normalize().magnitude(), 1.0);
        assert_eq!(a.terminal_point(), Point2::new(4.0, 5.0));
        assert_relative_eq!(v(0.0, 2.0).angle(), FRAC_PI_2);
        assert_relative_eq!(v(0.0, -2.0).angle(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(v(-1.0, 0.0).angle(), std::f64::consts::PI);
    }

    #[test]
    fn zero_vector_has_angle_zero() {
        let z = v(0.0, 0.0);
        assert!(z.angle().abs() < f64::EPSILON);
        assert_eq!(z.normalize().coordinates(), Vector2::zeros());
    }

    #[test]
    fn arithmetic_keeps_origin() {
        let a = v(1.0, 2.0);
        let b = Vector::new(Point2::origin(), Vector2::new(3.0, -1.0));
        let s = a.add(&b);
        assert_eq!(s.origin(), a.origin());
        assert_eq!(s.coordinates(), Vector2::new(4.0, 1.0));
        assert_eq!(a.subtract(&b).coordinates(), Vector2::new(-2.0, 3.0));
        assert_eq!(a.scalar_multiply(2.0).coordinates(), Vector2::new(2.0, 4.0));
        assert_relative_eq!(a.dot(&b), 1.0);
        assert_relative_eq!(a.cross(&b), -7.0);
    }

    #[test]
    fn relations() {
        let a = v(1.0, 2.0);
        assert!(a.is_parallel_to(&v(-2.0, -4.0), EPS));
        assert!(a.is_perpendicular_to(&v(-2.0, 1.0), EPS));
        assert!(!a.is_perpendicular_to(&v(1.0, 1.0), EPS));
        let from = Vector::from_two_points(&Point2::new(1.0, 1.0), &Point2::new(2.0, 3.0));
        assert_eq!(from, a);
    }

    #[test]
    fn arrow_head() {
        let options = GraphicsOptions {
            arrow_length: 1.0,
            arrow_width: 2.0,
            ..GraphicsOptions::default()
        };
        let g = Vector::new(Point2::origin(), Vector2::new(10.0, 0.0)).graphics(&options);
        assert_eq!(g.len(), 5);
        assert_eq!(g.commands()[2], GraphicsCommand::MoveTo { x: 9.0, y: 1.0 });
        assert_eq!(g.commands()[4], GraphicsCommand::LineTo { x: 9.0, y: -1.0 });
        assert_eq!(v(0.0, 0.0).graphics(&options).len(), 2);
    }
}
