use std::f64::consts::PI;

use crate::config::{GraphicsOptions, PointAppearance};
use crate::error::{GeometryError, Result};
use crate::graphics::Graphics;
use crate::math::{coordinates, Point2, TransformationMatrix};

use super::Shape;

/// A located point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coordinates: Point2,
}

impl Point {
    /// Creates a point.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Self::from_coordinates(Point2::new(x, y))
    }

    /// Creates a point from a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn from_coordinates(coordinates: Point2) -> Result<Self> {
        if !coordinates.x.is_finite() {
            return Err(GeometryError::NotFinite {
                parameter: "x",
                value: coordinates.x,
            }
            .into());
        }
        if !coordinates.y.is_finite() {
            return Err(GeometryError::NotFinite {
                parameter: "y",
                value: coordinates.y,
            }
            .into());
        }
        Ok(Self { coordinates })
    }

    #[must_use]
    pub fn coordinates(&self) -> Point2 {
        self.coordinates
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.coordinates.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.coordinates.y
    }

    /// A copy moved to `coordinates`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn with_coordinates(&self, coordinates: Point2) -> Result<Self> {
        Self::from_coordinates(coordinates)
    }

    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        coordinates::distance(&self.coordinates, &other.coordinates)
    }

    #[must_use]
    pub fn is_same_as(&self, other: &Self, eps: f64) -> bool {
        coordinates::equal_to(&self.coordinates, &other.coordinates, eps)
    }

    /// The transformed point. The result may be non-finite for extreme
    /// matrices, which [`Shape::is_valid`] reports.
    #[must_use]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Self {
        Self {
            coordinates: matrix.transform_point(&self.coordinates),
        }
    }
}

impl Shape for Point {
    fn is_valid(&self, _eps: f64) -> bool {
        coordinates::is_valid(&self.coordinates)
    }

    fn graphics(&self, options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        let (x, y) = (self.coordinates.x, self.coordinates.y);
        let half = options.point_size / 2.0;
        match options.point_appearance {
            PointAppearance::Circle => {
                g.move_to(x + half, y)
                    .center_arc_to(&self.coordinates, half, half, 0.0, 0.0, PI, true)
                    .center_arc_to(&self.coordinates, half, half, 0.0, PI, 2.0 * PI, true)
                    .close();
            }
            PointAppearance::Square => {
                g.polyline(
                    &[
                        Point2::new(x - half, y - half),
                        Point2::new(x + half, y - half),
                        Point2::new(x + half, y + half),
                        Point2::new(x - half, y + half),
                    ],
                    true,
                );
            }
            PointAppearance::Cross => {
                g.move_to(x - half, y - half)
                    .line_to(x + half, y + half)
                    .move_to(x - half, y + half)
                    .line_to(x + half, y - half);
            }
        }
        g
    }
}
