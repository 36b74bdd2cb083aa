//! Determinants and inverses of small square matrices.
//!
//! Determinants are cofactor expansions along the first row, with each size
//! expressed through the minors of the size below it.

use super::{Matrix2, Matrix3, Matrix4};

#[must_use]
pub fn det2(m: &Matrix2) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

/// Minor of a 3x3 matrix with `row` and `col` removed.
#[must_use]
pub fn minor3(m: &Matrix3, row: usize, col: usize) -> Matrix2 {
    Matrix2::from_fn(|r, c| m[(skip(r, row), skip(c, col))])
}

/// Minor of a 4x4 matrix with `row` and `col` removed.
#[must_use]
pub fn minor4(m: &Matrix4, row: usize, col: usize) -> Matrix3 {
    Matrix3::from_fn(|r, c| m[(skip(r, row), skip(c, col))])
}

fn skip(i: usize, removed: usize) -> usize {
    if i < removed {
        i
    } else {
        i + 1
    }
}

fn cofactor_sign(row: usize, col: usize) -> f64 {
    if (row + col) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[must_use]
pub fn det3(m: &Matrix3) -> f64 {
    (0..3)
        .map(|j| cofactor_sign(0, j) * m[(0, j)] * det2(&minor3(m, 0, j)))
        .sum()
}

#[must_use]
pub fn det4(m: &Matrix4) -> f64 {
    (0..4)
        .map(|j| cofactor_sign(0, j) * m[(0, j)] * det3(&minor4(m, 0, j)))
        .sum()
}

/// Inverse of a 2x2 matrix, `None` when the determinant is exactly zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn invert2(m: &Matrix2) -> Option<Matrix2> {
    let det = det2(m);
    if det == 0.0 {
        return None;
    }
    Some(Matrix2::new(m[(1, 1)], -m[(0, 1)], -m[(1, 0)], m[(0, 0)]) / det)
}

/// Inverse of a 3x3 matrix via the adjugate.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn invert3(m: &Matrix3) -> Option<Matrix3> {
    let det = det3(m);
    if det == 0.0 {
        return None;
    }
    // Adjugate is the transposed cofactor matrix.
    Some(Matrix3::from_fn(|r, c| cofactor_sign(c, r) * det2(&minor3(m, c, r))) / det)
}

/// Inverse of a 4x4 matrix via the adjugate.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn invert4(m: &Matrix4) -> Option<Matrix4> {
    let det = det4(m);
    if det == 0.0 {
        return None;
    }
    Some(Matrix4::from_fn(|r, c| cofactor_sign(c, r) * det3(&minor4(m, c, r))) / det)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn determinants_match_nalgebra() {
        let m3 = Matrix3::new(2.0, -1.0, 0.0, 1.0, 3.0, 4.0, 0.5, 2.0, -2.0);
        assert_relative_eq!(det3(&m3), m3.determinant(), epsilon = 1e-12);
        let m4 = Matrix4::new(
            1.0, 2.0, 3.0, 4.0, //
            0.0, 1.0, 5.0, 2.0, //
            2.0, 0.0, 1.0, 1.0, //
            3.0, 1.0, 0.0, 2.0,
        );
        assert_relative_eq!(det4(&m4), m4.determinant(), epsilon = 1e-9);
    }

    #[test]
    fn inverse_round_trip() {
        let m3 = Matrix3::new(2.0, -1.0, 0.0, 1.0, 3.0, 4.0, 0.5, 2.0, -2.0);
        let inv = invert3(&m3).unwrap();
        assert_relative_eq!(m3 * inv, Matrix3::identity(), epsilon = 1e-12);

        let m4 = Matrix4::new(
            1.0, 2.0, 3.0, 4.0, //
            0.0, 1.0, 5.0, 2.0, //
            2.0, 0.0, 1.0, 1.0, //
            3.0, 1.0, 0.0, 2.0,
        );
        let inv4 = invert4(&m4).unwrap();
        assert_relative_eq!(m4 * inv4, Matrix4::identity(), epsilon = 1e-12);

        let m2 = Matrix2::new(4.0, 7.0, 2.0, 6.0);
        assert_relative_eq!(m2 * invert2(&m2).unwrap(), Matrix2::identity(), epsilon = 1e-12);
    }

    #[test]
    fn singular_matrices_have_no_inverse() {
        assert!(invert2(&Matrix2::new(1.0, 2.0, 2.0, 4.0)).is_none());
        assert!(invert3(&Matrix3::zeros()).is_none());
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert!(det3(&m).abs() < 1e-12);
    }
}
