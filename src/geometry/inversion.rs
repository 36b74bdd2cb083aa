//! Circle inversion: `p -> center + (p - center) * power / |p - center|^2`.
//!
//! Lines and circles map to lines and circles. Which one comes back depends
//! on whether the input passes through the center, so images are returned as
//! an [`InversionImage`].

use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, Result};
use crate::math::{coordinates, vector2, Point2};

use super::{Circle, Line, Shape};

/// Inversion in the circle of radius `sqrt(power)` about `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion {
    center: Point2,
    power: f64,
}

/// The image of a line or circle under an [`Inversion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InversionImage {
    Line(Line),
    Circle(Circle),
}

impl Inversion {
    /// # Errors
    ///
    /// Returns an error if `center` is not finite or `power` is not a
    /// positive finite number.
    pub fn new(center: Point2, power: f64) -> Result<Self> {
        if !coordinates::is_valid(&center) {
            let value = if center.x.is_finite() { center.y } else { center.x };
            return Err(GeometryError::NotFinite {
                parameter: "center",
                value,
            }
            .into());
        }
        if !power.is_finite() {
            return Err(GeometryError::NotFinite {
                parameter: "power",
                value: power,
            }
            .into());
        }
        if power <= 0.0 {
            return Err(GeometryError::NotPositive {
                parameter: "power",
                value: power,
            }
            .into());
        }
        Ok(Self { center, power })
    }

    /// Inversion in `circle`, with power `radius^2`.
    #[must_use]
    pub fn from_circle(circle: &Circle) -> Self {
        Self {
            center: circle.center(),
            power: circle.radius() * circle.radius(),
        }
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }

    /// `None` for the center itself, whose image is at infinity.
    #[must_use]
    pub fn invert_point(&self, p: &Point2, eps: f64) -> Option<Point2> {
        if coordinates::equal_to(p, &self.center, eps) {
            return None;
        }
        let v = p - self.center;
        Some(self.center + v * (self.power / vector2::squared_magnitude(&v)))
    }

    /// A line through the center maps to itself; any other line maps to a
    /// circle through the center. `None` for an invalid line.
    #[must_use]
    pub fn invert_line(&self, line: &Line, eps: f64) -> Option<InversionImage> {
        if !line.is_valid(eps) {
            return None;
        }
        if line.is_point_on(&self.center, eps) {
            return Some(InversionImage::Line(*line));
        }
        // The foot of the perpendicular maps to the far end of a diameter.
        let foot = line.perpendicular_point_from(&self.center);
        let far = self.invert_point(&foot, eps)?;
        let center = coordinates::midpoint(&self.center, &far);
        let radius = coordinates::distance(&self.center, &far) / 2.0;
        Circle::new(center, radius).ok().map(InversionImage::Circle)
    }

    /// A circle through the center maps to a line; any other circle maps to
    /// a circle. `None` for an invalid circle.
    #[must_use]
    pub fn invert_circle(&self, circle: &Circle, eps: f64) -> Option<InversionImage> {
        if !circle.is_valid(eps) {
            return None;
        }
        if coordinates::equal_to(&circle.center(), &self.center, eps) {
            let image = Circle::new(self.center, self.power / circle.radius()).ok()?;
            return Some(InversionImage::Circle(image));
        }
        let u = vector2::normalize(&(circle.center() - self.center));
        let near = circle.center() - u * circle.radius();
        let far = circle.center() + u * circle.radius();
        let far_image = self.invert_point(&far, eps)?;
        if circle.is_point_on(&self.center, eps) {
            let angle = vector2::angle(&u) + FRAC_PI_2;
            return Some(InversionImage::Line(Line::from_point_and_angle(&far_image, angle, eps)));
        }
        // Both ends of the diameter along the center line stay on that line.
        let near_image = self.invert_point(&near, eps)?;
        let center = coordinates::midpoint(&near_image, &far_image);
        let radius = coordinates::distance(&near_image, &far_image) / 2.0;
        Circle::new(center, radius).ok().map(InversionImage::Circle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-10;

    fn unit() -> Inversion {
        Inversion::new(Point2::origin(), 1.0).unwrap()
    }

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point2::new(x, y), r).unwrap()
    }

    #[test]
    fn construction() {
        assert!(Inversion::new(Point2::origin(), 0.0).is_err());
        assert!(Inversion::new(Point2::origin(), f64::INFINITY).is_err());
        assert!(Inversion::new(Point2::new(f64::NAN, 0.0), 1.0).is_err());
        let inv = Inversion::from_circle(&circle(1.0, 2.0, 3.0));
        assert_relative_eq!(inv.power(), 9.0);
        assert_eq!(inv.center(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn points() {
        let inv = unit();
        let p = inv.invert_point(&Point2::new(2.0, 0.0), EPS).unwrap();
        assert_relative_eq!(p.x, 0.5);
        let on = inv.invert_point(&Point2::new(0.0, 1.0), EPS).unwrap();
        assert_relative_eq!(on.y, 1.0);
        assert!(inv.invert_point(&Point2::origin(), EPS).is_none());
    }

    #[test]
    fn line_through_center_is_fixed() {
        let line = Line::new(Point2::origin(), 1.0);
        assert_eq!(unit().invert_line(&line, EPS), Some(InversionImage::Line(line)));
    }

    #[test]
    fn line_maps_to_circle_through_center() {
        let line = Line::new(Point2::new(2.0, 0.0), f64::INFINITY);
        let Some(InversionImage::Circle(c)) = unit().invert_line(&line, EPS) else {
            panic!("expected a circle");
        };
        assert_relative_eq!(c.center().x, 0.25);
        assert_relative_eq!(c.radius(), 0.25);
        assert!(c.is_point_on(&Point2::origin(), EPS));
    }

    #[test]
    fn circle_through_center_maps_to_line() {
        let Some(InversionImage::Line(l)) = unit().invert_circle(&circle(1.0, 0.0, 1.0), EPS) else {
            panic!("expected a line");
        };
        assert!(l.is_vertical());
        assert!(l.is_point_on(&Point2::new(0.5, 3.0), EPS));
    }

    #[test]
    fn concentric_circle() {
        let Some(InversionImage::Circle(c)) = unit().invert_circle(&circle(0.0, 0.0, 4.0), EPS) else {
            panic!("expected a circle");
        };
        assert_relative_eq!(c.radius(), 0.25);
    }

    #[test]
    fn general_circle_maps_points_onto_image() {
        let inv = Inversion::new(Point2::new(1.0, -1.0), 4.0).unwrap();
        for source in [circle(4.0, 3.0, 2.0), circle(1.5, -0.5, 2.0)] {
            let Some(InversionImage::Circle(image)) = inv.invert_circle(&source, EPS) else {
                panic!("expected a circle");
            };
            for k in 0..8 {
                let p = source.point_at_angle(f64::from(k) * 0.7);
                let q = inv.invert_point(&p, EPS).unwrap();
                assert!(image.is_point_on(&q, 1e-9));
            }
        }
    }

    #[test]
    fn invalid_line_has_no_image() {
        let line = Line::new(Point2::new(f64::NAN, 0.0), 0.0);
        assert!(unit().invert_line(&line, EPS).is_none());
    }
}
