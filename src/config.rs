use crate::math::BBox;

/// Default comparison tolerance, `2^-32`.
pub const DEFAULT_EPSILON: f64 = 1.0 / 4_294_967_296.0;

/// How a point is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointAppearance {
    #[default]
    Circle,
    Square,
    Cross,
}

/// Parameters controlling the generated drawing commands.
#[derive(Debug, Clone, Copy)]
pub struct GraphicsOptions {
    /// Diameter (or side) of a drawn point, in user units.
    pub point_size: f64,
    /// Shape used for points.
    pub point_appearance: PointAppearance,
    /// Width of a vector's arrow head.
    pub arrow_width: f64,
    /// Length of a vector's arrow head.
    pub arrow_length: f64,
    /// Visible region used to clip unbounded shapes (lines, rays).
    pub viewport: BBox,
}

impl Default for GraphicsOptions {
    fn default() -> Self {
        Self {
            point_size: 6.0,
            point_appearance: PointAppearance::Circle,
            arrow_width: 5.0,
            arrow_length: 10.0,
            viewport: default_viewport(),
        }
    }
}

fn default_viewport() -> BBox {
    const HALF: f64 = 1.0e4;
    BBox::new_unchecked(-HALF, -HALF, 2.0 * HALF, 2.0 * HALF)
}

/// Kernel-wide options.
///
/// The kernel never reads these implicitly; callers pass `epsilon` and
/// `graphics` to the operations that need them.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Tolerance for every approximate comparison.
    pub epsilon: f64,
    /// Drawing parameters.
    pub graphics: GraphicsOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            graphics: GraphicsOptions::default(),
        }
    }
}
