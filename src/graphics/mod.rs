//! Renderer-independent drawing commands.
//!
//! Shapes describe themselves as a [`Graphics`] value: an ordered list of
//! path commands that a renderer translates into its own path API.

use crate::math::{angle, Point2};

/// Font description for [`GraphicsCommand::Text`].
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size: f64,
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 16.0,
            family: "sans-serif".into(),
            bold: false,
            italic: false,
        }
    }
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    BezierCurveTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
    QuadraticBezierCurveTo {
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    },
    /// Elliptical arc around a center. `(x, y)` is the end point, which
    /// renderers that only accept endpoint arcs (SVG) need.
    ArcTo {
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        end_angle: f64,
        x_axis_rotation: f64,
        positive: bool,
        large_arc: bool,
        x: f64,
        y: f64,
    },
    Close,
    Text {
        x: f64,
        y: f64,
        text: String,
        font: Font,
    },
}

/// An ordered sequence of drawing commands.
///
/// The sequence is consumed by value when iterated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graphics {
    commands: Vec<GraphicsCommand>,
}

impl Graphics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[GraphicsCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(GraphicsCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(GraphicsCommand::LineTo { x, y });
        self
    }

    pub fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.commands.push(GraphicsCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        });
        self
    }

    pub fn quadratic_bezier_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) -> &mut Self {
        self.commands
            .push(GraphicsCommand::QuadraticBezierCurveTo { cpx, cpy, x, y });
        self
    }

    /// Appends an arc given by its center, radii and angles. The end point and
    /// the large-arc flag are derived.
    #[allow(clippy::too_many_arguments)]
    pub fn center_arc_to(
        &mut self,
        center: &Point2,
        radius_x: f64,
        radius_y: f64,
        x_axis_rotation: f64,
        start_angle: f64,
        end_angle: f64,
        positive: bool,
    ) -> &mut Self {
        let (s, c) = x_axis_rotation.sin_cos();
        let (es, ec) = end_angle.sin_cos();
        let (ex, ey) = (radius_x * ec, radius_y * es);
        let x = center.x + ex * c - ey * s;
        let y = center.y + ex * s + ey * c;
        let large_arc = angle::sweep(start_angle, end_angle, positive) > std::f64::consts::PI;
        self.commands.push(GraphicsCommand::ArcTo {
            center_x: center.x,
            center_y: center.y,
            radius_x,
            radius_y,
            start_angle,
            end_angle,
            x_axis_rotation,
            positive,
            large_arc,
            x,
            y,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(GraphicsCommand::Close);
        self
    }

    pub fn text(&mut self, x: f64, y: f64, text: impl Into<String>, font: Font) -> &mut Self {
        self.commands.push(GraphicsCommand::Text {
            x,
            y,
            text: text.into(),
            font,
        });
        self
    }

    /// Appends a polyline through `points`, optionally closed.
    pub fn polyline(&mut self, points: &[Point2], closed: bool) -> &mut Self {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(first.x, first.y);
            for p in rest {
                self.line_to(p.x, p.y);
            }
            if closed {
                self.close();
            }
        }
        self
    }

    /// Appends the commands of `other`.
    pub fn append(&mut self, other: Graphics) -> &mut Self {
        self.commands.extend(other.commands);
        self
    }
}

impl IntoIterator for Graphics {
    type Item = GraphicsCommand;
    type IntoIter = std::vec::IntoIter<GraphicsCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
