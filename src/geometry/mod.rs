//! Planar shapes and their predicates.
//!
//! Every shape is an immutable value. Constructors that can reject their
//! input return [`Result`](crate::error::Result); operations that have no
//! geometric answer (parallel lines, tangents from inside a circle, the
//! orthic triangle of a right triangle) return `None`.

mod circle;
mod inversion;
mod line;
mod point;
mod polygon;
mod ray;
mod rectangle;
mod segment;
mod text;
mod triangle;
mod vector;

pub use circle::Circle;
pub use inversion::{Inversion, InversionImage};
pub use line::Line;
pub use point::Point;
pub use polygon::Polygon;
pub use ray::Ray;
pub use rectangle::Rectangle;
pub use segment::LineSegment;
pub use text::Text;
pub use triangle::Triangle;
pub use vector::Vector;

use crate::config::GraphicsOptions;
use crate::graphics::Graphics;
use crate::math::{BBox, Point2, Vector2};

/// Common interface of drawable shapes.
pub trait Shape {
    /// Whether the shape satisfies its invariants under tolerance `eps`.
    fn is_valid(&self, eps: f64) -> bool;

    /// Drawing commands for the shape.
    fn graphics(&self, options: &GraphicsOptions) -> Graphics;
}

/// Clips the parametric line `origin + t * direction`, `t` in
/// `[t_min, t_max]`, against `bbox` (Liang–Barsky).
#[allow(clippy::float_cmp)]
pub(crate) fn clip_to_box(
    origin: &Point2,
    direction: &Vector2,
    t_min: f64,
    t_max: f64,
    bbox: &BBox,
) -> Option<(Point2, Point2)> {
    let (lo, hi) = (bbox.min(), bbox.max());
    let mut t0 = t_min;
    let mut t1 = t_max;
    let edges = [
        (-direction.x, origin.x - lo.x),
        (direction.x, hi.x - origin.x),
        (-direction.y, origin.y - lo.y),
        (direction.y, hi.y - origin.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    if !t0.is_finite() || !t1.is_finite() {
        return None;
    }
    Some((origin + direction * t0, origin + direction * t1))
}

/// Graphics of a clipped straight piece, empty when it misses the viewport.
pub(crate) fn clipped_graphics(
    origin: &Point2,
    direction: &Vector2,
    t_min: f64,
    options: &GraphicsOptions,
) -> Graphics {
    let mut g = Graphics::new();
    if let Some((p, q)) = clip_to_box(origin, direction, t_min, f64::INFINITY, &options.viewport) {
        g.move_to(p.x, p.y).line_to(q.x, q.y);
    }
    g
}
