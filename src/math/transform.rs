//! 2D affine transformation matrices.

use crate::error::{Result, TransformError};

use super::{maths, matrix, Matrix2, Matrix3, Point2, Vector2};

/// An affine transformation `(a, b, c, d, e, f)`:
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformationMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// QR-style decomposition: `translate * rotate * scale * skew`.
///
/// `skew.1` (the y skew) is always zero by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrDecomposition {
    pub translate: (f64, f64),
    pub rotate: f64,
    pub scale: (f64, f64),
    pub skew: (f64, f64),
}

/// SVD-style decomposition: `translate * rotate2 * scale * rotate1`.
///
/// `rotate1` is applied first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvdDecomposition {
    pub translate: (f64, f64),
    pub rotate1: f64,
    pub scale: (f64, f64),
    pub rotate2: f64,
}

impl Default for TransformationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformationMatrix {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Counter-clockwise rotation by `angle` about `origin`.
    #[must_use]
    pub fn rotate(angle: f64, origin: &Point2) -> Self {
        let (s, c) = (maths::sin(angle), maths::cos(angle));
        Self::about(Self::new(c, s, -s, c, 0.0, 0.0), origin)
    }

    /// Scaling by `(sx, sy)` about `origin`.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, origin: &Point2) -> Self {
        Self::about(Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0), origin)
    }

    /// Skew by angles `(ax, ay)` about `origin`.
    #[must_use]
    pub fn skew(ax: f64, ay: f64, origin: &Point2) -> Self {
        Self::about(
            Self::new(1.0, maths::tan(ay), maths::tan(ax), 1.0, 0.0, 0.0),
            origin,
        )
    }

    /// Reflection across the line through `point` with direction `angle`.
    #[must_use]
    pub fn line_reflect(point: &Point2, angle: f64) -> Self {
        let (s, c) = (maths::sin(2.0 * angle), maths::cos(2.0 * angle));
        Self::about(Self::new(c, s, s, -c, 0.0, 0.0), point)
    }

    /// Point reflection (half turn) about `point`.
    #[must_use]
    pub fn point_reflect(point: &Point2) -> Self {
        Self::about(Self::new(-1.0, 0.0, 0.0, -1.0, 0.0, 0.0), point)
    }

    /// Conjugates a linear map so that it fixes `origin`.
    fn about(linear: Self, origin: &Point2) -> Self {
        Self::translate(-origin.x, -origin.y)
            .multiply(&linear)
            .multiply(&Self::translate(origin.x, origin.y))
    }

    #[must_use]
    pub fn is_identity(&self, eps: f64) -> bool {
        self.equal_to(&Self::identity(), eps)
    }

    #[must_use]
    pub fn equal_to(&self, other: &Self, eps: f64) -> bool {
        self.values()
            .iter()
            .zip(other.values().iter())
            .all(|(&x, &y)| maths::equal_to(x, y, eps))
    }

    #[must_use]
    pub fn values(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// The linear part `[a c; b d]`.
    #[must_use]
    pub fn linear(&self) -> Matrix2 {
        Matrix2::new(self.a, self.c, self.b, self.d)
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        matrix::det2(&self.linear())
    }

    /// Composition that applies `self` first and `then` second.
    ///
    /// As matrices this is the product `then * self`.
    #[must_use]
    pub fn multiply(&self, then: &Self) -> Self {
        let (m, n) = (then, self);
        Self::new(
            m.a * n.a + m.c * n.b,
            m.b * n.a + m.d * n.b,
            m.a * n.c + m.c * n.d,
            m.b * n.c + m.d * n.d,
            m.a * n.e + m.c * n.f + m.e,
            m.b * n.e + m.d * n.f + m.f,
        )
    }

    /// Inverse transformation.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Singular`] carrying the matrix values when the
    /// determinant is zero.
    pub fn invert(&self) -> Result<Self> {
        let singular = || {
            let [a, b, c, d, e, f] = self.values();
            TransformError::Singular { a, b, c, d, e, f }
        };
        if !self.determinant().is_finite() {
            return Err(singular().into());
        }
        let inverse = matrix::invert3(&self.to_matrix3()).ok_or_else(singular)?;
        Ok(Self::new(
            inverse[(0, 0)],
            inverse[(1, 0)],
            inverse[(0, 1)],
            inverse[(1, 1)],
            inverse[(0, 2)],
            inverse[(1, 2)],
        ))
    }

    #[must_use]
    pub fn transform_point(&self, p: &Point2) -> Point2 {
        Point2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Applies the inverse transformation to `p`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Singular`] when the matrix is not invertible.
    pub fn antitransform_point(&self, p: &Point2) -> Result<Point2> {
        Ok(self.invert()?.transform_point(p))
    }

    /// Applies the linear part only.
    #[must_use]
    pub fn transform_vector(&self, v: &Vector2) -> Vector2 {
        Vector2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// The homogeneous 3x3 form.
    #[must_use]
    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::new(self.a, self.c, self.e, self.b, self.d, self.f, 0.0, 0.0, 1.0)
    }

    /// Translate, rotate, scale and x-skew such that
    /// `M = T * R(rotate) * S(scale) * K(skew.0)`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn decompose_qr(&self) -> QrDecomposition {
        let Self { a, b, c, d, e, f } = *self;
        let delta = a * d - b * c;
        let r = maths::hypot(a, b);
        if r == 0.0 {
            // The x axis collapses: put the surviving column on the y axis.
            let s = maths::hypot(c, d);
            let rotate = if s == 0.0 {
                0.0
            } else {
                maths::atan2(d, c) - std::f64::consts::FRAC_PI_2
            };
            return QrDecomposition {
                translate: (e, f),
                rotate,
                scale: (0.0, s),
                skew: (0.0, 0.0),
            };
        }
        let rotate = if b >= 0.0 {
            maths::acos(a / r)
        } else {
            -maths::acos(a / r)
        };
        QrDecomposition {
            translate: (e, f),
            rotate,
            scale: (r, delta / r),
            skew: (((a * c + b * d) / (r * r)).atan(), 0.0),
        }
    }

    /// Rebuilds a matrix from [`decompose_qr`](Self::decompose_qr) output.
    #[must_use]
    pub fn recompose_qr(decomposition: &QrDecomposition) -> Self {
        let origin = Point2::origin();
        let QrDecomposition {
            translate,
            rotate,
            scale,
            skew,
        } = *decomposition;
        Self::skew(skew.0, skew.1, &origin)
            .multiply(&Self::scale(scale.0, scale.1, &origin))
            .multiply(&Self::rotate(rotate, &origin))
            .multiply(&Self::translate(translate.0, translate.1))
    }

    /// Rotation, scale, rotation factorization from the symmetric and
    /// antisymmetric parts of the linear map.
    #[must_use]
    pub fn decompose_svd(&self) -> SvdDecomposition {
        let Self { a, b, c, d, e, f } = *self;
        let se = (a + d) / 2.0;
        let sf = (a - d) / 2.0;
        let sg = (b + c) / 2.0;
        let sh = (b - c) / 2.0;
        let q = maths::hypot(se, sh);
        let r = maths::hypot(sf, sg);
        let a1 = maths::atan2(sg, sf);
        let a2 = maths::atan2(sh, se);
        SvdDecomposition {
            translate: (e, f),
            rotate1: (a2 - a1) / 2.0,
            scale: (q + r, q - r),
            rotate2: (a2 + a1) / 2.0,
        }
    }

    /// Rebuilds a matrix from [`decompose_svd`](Self::decompose_svd) output.
    #[must_use]
    pub fn recompose_svd(decomposition: &SvdDecomposition) -> Self {
        let origin = Point2::origin();
        let SvdDecomposition {
            translate,
            rotate1,
            scale,
            rotate2,
        } = *decomposition;
        Self::rotate(rotate1, &origin)
            .multiply(&Self::scale(scale.0, scale.1, &origin))
            .multiply(&Self::rotate(rotate2, &origin))
            .multiply(&Self::translate(translate.0, translate.1))
    }
}
