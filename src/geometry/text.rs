use crate::config::GraphicsOptions;
use crate::graphics::{Font, Graphics};
use crate::math::{coordinates, Point2, TransformationMatrix};

use super::Shape;

/// A text label anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    anchor: Point2,
    content: String,
    font: Font,
}

impl Text {
    #[must_use]
    pub fn new(anchor: Point2, content: impl Into<String>, font: Font) -> Self {
        Self {
            anchor,
            content: content.into(),
            font,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Point2 {
        self.anchor
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn font(&self) -> &Font {
        &self.font
    }

    #[must_use]
    pub fn with_anchor(&self, anchor: Point2) -> Self {
        Self::new(anchor, self.content.clone(), self.font.clone())
    }

    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self::new(self.anchor, content, self.font.clone())
    }

    #[must_use]
    pub fn with_font(&self, font: Font) -> Self {
        Self::new(self.anchor, self.content.clone(), font)
    }

    /// Moves the anchor; the glyphs themselves are not transformed.
    #[must_use]
    pub fn apply(&self, matrix: &TransformationMatrix) -> Self {
        self.with_anchor(matrix.transform_point(&self.anchor))
    }
}

impl Shape for Text {
    fn is_valid(&self, _eps: f64) -> bool {
        coordinates::is_valid(&self.anchor) && self.font.size.is_finite() && self.font.size > 0.0
    }

    fn graphics(&self, _options: &GraphicsOptions) -> Graphics {
        let mut g = Graphics::new();
        g.text(self.anchor.x, self.anchor.y, self.content.clone(), self.font.clone());
        g
    }
}
