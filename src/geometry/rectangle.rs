use crate::config::GraphicsOptions;
use crate::error::Result;
use crate::graphics::Graphics;
use crate::math::{coordinates, maths, vector2, BBox, Point2, Size, TransformationMatrix, Vector2};

use super::{Polygon, Shape};

/// An axis-aligned box of `size` at `origin`, turned by `rotation` about
/// `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    origin: Point2,
    size: Size,
    rotation: f64,
}

impl Rectangle {
    #[must_use]
    pub fn new(origin: Point2, size: Size, rotation: f64) -> Self {
        Self {
            origin,
            size,
            rotation,
        }
    }

    /// An unrotated rectangle covering `bbox`.
    #[must_use]
    pub fn from_box(bbox: &BBox) -> Self {
        Self::new(bbox.min(), bbox.size(), 0.0)
    }

    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn with_origin(&self, origin: Point2) -> Self {
        Self::new(origin, self.size, self.rotation)
    }

    #[must_use]
    pub fn with_size(&self, size: Size) -> Self {
        Self::new(self.origin, size, self.rotation)
    }

    #[must_use]
    pub fn with_rotation(&self, rotation: f64) -> Self {
        Self::new(self.origin, self.size, rotation)
    }

    /// Corners counter-clockwise from `origin` (in the rectangle's own
    /// frame).
    #[must_use]
    pub fn vertices(&self) -> [Point2; 4] {
        let (w, h) = (self.size.width(), self.size.height());
        let local = [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)];
        local.map(|(x, y)| self.origin + vector2::rotate(&Vector2::new(x, y), self.rotation))
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.size.width() * self.size.height()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.size.width() + self.size.height())
    }

    /// Strictly inside; the border is excluded.
    #[must_use]
    pub fn is_point_inside(&self, p: &Point2, eps: f64) -> bool {
        let local = vector2::rotate(&(p - self.origin), -self.rotation);
        maths::between(local.x, 0.0, self.size.width(), true, true, eps)
            && maths::between(local.y, 0.0, self.size.height(), true, true, eps)
    }

    /// Axis-aligned box around the rotated corners.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BBox> {
        BBox::from_points(&self.vertices())
    }

    /// # Errors
    ///
    /// Returns an error if a corner is not finite.
    pub fn to_polygon(&self) -> Result<Polygon> {
        Polygon::new(self.vertices().to_vec(), true)
    }

    /// The transformed corners. A rectangle only stays a rectangle under a
    /// similarity, so the general result is a polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if a transformed corner is not finite.
    pub fn apply(&self, matrix: &TransformationMatrix) -> Result<Polygon> {
        Ok(self.to_polygon()?.apply(matrix))
    }
}

impl Shape for Rectangle {
    fn is_valid(&self, _eps: f64) -> bool {
        coordinates::is_valid(&self.origin) && self.rotation.is_finite() && self.size.is_non_zero()
    }

    fn graphics(&self, _options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        g.polyline(&self.vertices(), true);
        g
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-10;

    fn rect(rotation: f64) -> Rectangle {
        Rectangle::new(Point2::new(1.0, 1.0), Size::new(4.0, 2.0).unwrap(), rotation)
    }

    #[test]
    fn measurements() {
        let r = rect(0.0);
        assert!(r.is_valid(EPS));
        assert_relative_eq!(r.area(), 8.0);
        assert_relative_eq!(r.perimeter(), 12.0);
        assert_eq!(r.vertices()[2], Point2::new(5.0, 3.0));
    }

    #[test]
    fn zero_size_is_invalid() {
        let r = rect(0.0).with_size(Size::new(0.0, 2.0).unwrap());
        assert!(!r.is_valid(EPS));
    }

    #[test]
    fn rotated_corners_and_box() {
        let r = rect(FRAC_PI_2);
        let v = r.vertices();
        assert_relative_eq!(v[1].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[1].y, 5.0, epsilon = 1e-12);
        let b = r.bounding_box().unwrap();
        assert_relative_eq!(b.width(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(b.height(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(b.x(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn point_inside_in_local_frame() {
        let r = rect(FRAC_PI_2);
        assert!(r.is_point_inside(&Point2::new(0.0, 3.0), EPS));
        assert!(!r.is_point_inside(&Point2::new(2.0, 3.0), EPS));
        assert!(!r.is_point_inside(&Point2::new(1.0, 3.0), EPS));
    }

    #[test]
    fn box_round_trip() {
        let b = BBox::new(-1.0, 2.0, 3.0, 4.0).unwrap();
        let r = Rectangle::from_box(&b);
        let back = r.bounding_box().unwrap();
        assert_relative_eq!(back.x(), -1.0);
        assert_relative_eq!(back.height(), 4.0);
        let p = r.to_polygon().unwrap();
        assert_relative_eq!(p.area(), 12.0);
    }

    #[test]
    fn apply_gives_polygon() {
        let p = rect(0.0).apply(&TransformationMatrix::skew(0.5, 0.0, &Point2::origin())).unwrap();
        assert_eq!(p.vertex_count(), 4);
        assert_relative_eq!(p.area(), 8.0, epsilon = 1e-12);
    }
}
