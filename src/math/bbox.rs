//! Axis-aligned boxes and sizes.

use crate::error::{GeometryError, Result};

use super::{maths, Point2};

/// Width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is negative or not finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// At least one dimension is zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Both dimensions are strictly positive.
    #[must_use]
    pub fn is_non_zero(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

fn check_extent(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GeometryError::NotFinite { parameter, value }.into());
    }
    if value < 0.0 {
        return Err(GeometryError::Negative { parameter, value }.into());
    }
    Ok(())
}

/// An axis-aligned box `(x, y, width, height)` with `(x, y)` the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl BBox {
    /// Creates a box.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite or an extent is negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(GeometryError::NotFinite { parameter: "x", value: x }.into());
        }
        if !y.is_finite() {
            return Err(GeometryError::NotFinite { parameter: "y", value: y }.into());
        }
        check_extent("width", width)?;
        check_extent("height", height)?;
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Box from literal values the caller knows to be finite with
    /// non-negative extents.
    pub(crate) const fn new_unchecked(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box containing both points, in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn from_two_points(p: &Point2, q: &Point2) -> Result<Self> {
        Self::new(
            p.x.min(q.x),
            p.y.min(q.y),
            (p.x - q.x).abs(),
            (p.y - q.y).abs(),
        )
    }

    /// Smallest box containing all points, `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self::from_two_points(first, first).ok()?;
        for p in rest {
            bbox = bbox.extend(p)?;
        }
        Some(bbox)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.x + self.width, self.y + self.height)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.size().is_zero()
    }

    #[must_use]
    pub fn is_non_zero(&self) -> bool {
        self.size().is_non_zero()
    }

    /// The two boxes overlap or touch.
    #[must_use]
    pub fn collide(&self, other: &Self) -> bool {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());
        a0.x <= b1.x && b0.x <= a1.x && a0.y <= b1.y && b0.y <= a1.y
    }

    /// The point lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, eps: f64) -> bool {
        let (lo, hi) = (self.min(), self.max());
        maths::between(p.x, lo.x, hi.x, false, false, eps)
            && maths::between(p.y, lo.y, hi.y, false, false, eps)
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());
        let x = a0.x.min(b0.x);
        let y = a0.y.min(b0.y);
        Self {
            x,
            y,
            width: a1.x.max(b1.x) - x,
            height: a1.y.max(b1.y) - y,
        }
    }

    /// Smallest box containing `self` and `p`, `None` if `p` is not finite.
    #[must_use]
    pub fn extend(&self, p: &Point2) -> Option<Self> {
        let other = Self::from_two_points(p, p).ok()?;
        Some(self.union(&other))
    }

    /// The four corners, counter-clockwise from the minimum corner.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let (lo, hi) = (self.min(), self.max());
        [lo, Point2::new(hi.x, lo.y), hi, Point2::new(lo.x, hi.y)]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bbox(x: f64, y: f64, w: f64, h: f64) -> BBox {
        BBox::new(x, y, w, h).unwrap()
    }

    #[test]
    fn collide_overlapping_and_apart() {
        assert!(bbox(0.0, 0.0, 2.0, 2.0).collide(&bbox(1.0, 1.0, 2.0, 2.0)));
        assert!(!bbox(0.0, 0.0, 1.0, 1.0).collide(&bbox(5.0, 5.0, 1.0, 1.0)));
        assert!(bbox(0.0, 0.0, 1.0, 1.0).collide(&bbox(1.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn rejects_negative_extent() {
        assert!(BBox::new(0.0, 0.0, -1.0, 1.0).is_err());
        assert!(Size::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn zero_and_non_zero() {
        assert!(bbox(0.0, 0.0, 0.0, 3.0).is_zero());
        assert!(!bbox(0.0, 0.0, 0.0, 3.0).is_non_zero());
        assert!(bbox(0.0, 0.0, 1.0, 3.0).is_non_zero());
    }

    #[test]
    fn from_points_and_contains() {
        let b = BBox::from_points(&[
            Point2::new(1.0, 5.0),
            Point2::new(-1.0, 2.0),
            Point2::new(3.0, 0.0),
        ])
        .unwrap();
        assert_eq!(b, bbox(-1.0, 0.0, 4.0, 5.0));
        assert!(b.contains_point(&Point2::new(3.0 + 1e-12, 5.0), 1e-10));
        assert!(!b.contains_point(&Point2::new(3.1, 5.0), 1e-10));
        assert!(BBox::from_points(&[]).is_none());
    }

    #[test]
    fn union_covers_both() {
        let u = bbox(0.0, 0.0, 1.0, 1.0).union(&bbox(2.0, -1.0, 1.0, 1.0));
        assert_eq!(u, bbox(0.0, -1.0, 3.0, 2.0));
    }
}
