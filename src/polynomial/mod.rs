//! Dense real polynomials and their roots.
//!
//! Coefficients are stored highest degree first, so `[1, -2, 1]` is
//! `x^2 - 2x + 1`. Arithmetic never trims leading zeros implicitly; call
//! [`Polynomial::standardize`] for that.

pub mod elliptic;
pub mod newton;
pub mod quadrature;
pub mod rpoly;

use crate::error::{PolynomialError, Result};
use crate::math::{maths, Complex};

/// A polynomial with real coefficients, highest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

/// Strategy for finding all (complex) roots of a polynomial.
pub trait RootFinder {
    /// Returns every root, with multiplicity.
    ///
    /// # Errors
    ///
    /// Returns an error when the polynomial is not solvable by this strategy or
    /// the strategy fails to converge.
    fn find_roots(&self, polynomial: &Polynomial) -> Result<Vec<Complex>>;
}

/// Jenkins–Traub three-stage algorithm for real coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct JenkinsTraub;

/// Damped Newton iteration in the complex plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexNewton;

impl RootFinder for JenkinsTraub {
    fn find_roots(&self, polynomial: &Polynomial) -> Result<Vec<Complex>> {
        rpoly::roots(polynomial.coefficients())
    }
}

impl RootFinder for ComplexNewton {
    fn find_roots(&self, polynomial: &Polynomial) -> Result<Vec<Complex>> {
        let coeffs: Vec<Complex> = polynomial.coeffs.iter().copied().map(Complex::real).collect();
        newton::roots(&coeffs)
    }
}

impl Polynomial {
    /// Creates a polynomial from coefficients, highest degree first.
    ///
    /// # Errors
    ///
    /// Returns an error if `coeffs` is empty or holds a non-finite value.
    pub fn new(coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(PolynomialError::Empty.into());
        }
        if let Some((index, &value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(PolynomialError::NotFinite { index, value }.into());
        }
        Ok(Self { coeffs })
    }

    /// The constant polynomial `c`.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Horner evaluation.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Horner evaluation at a complex argument.
    #[must_use]
    pub fn evaluate_complex(&self, z: Complex) -> Complex {
        self.coeffs
            .iter()
            .fold(Complex::ZERO, |acc, &c| acc * z + Complex::real(c))
    }

    #[must_use]
    pub fn derivative(&self) -> Self {
        let n = self.degree();
        if n == 0 {
            return Self::constant(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let coeffs = self.coeffs[..n]
            .iter()
            .enumerate()
            .map(|(i, &c)| c * (n - i) as f64)
            .collect();
        Self { coeffs }
    }

    /// Coefficients padded at the front to `len`.
    fn padded(&self, len: usize) -> Vec<f64> {
        let mut out = vec![0.0; len - self.coeffs.len()];
        out.extend_from_slice(&self.coeffs);
        out
    }

    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let (p, q) = (self.padded(len), other.padded(len));
        Self {
            coeffs: p.iter().zip(&q).map(|(a, b)| a + b).collect(),
        }
    }

    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let (p, q) = (self.padded(len), other.padded(len));
        Self {
            coeffs: p.iter().zip(&q).map(|(a, b)| a - b).collect(),
        }
    }

    #[must_use]
    pub fn scalar_multiply(&self, s: f64) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| c * s).collect(),
        }
    }

    /// Product by convolution of the coefficient sequences.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut coeffs = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self { coeffs }
    }

    /// Long division, returning `(quotient, remainder)`.
    ///
    /// Leading zeros of the divisor are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::DivisionByZero`] if every divisor coefficient
    /// is zero.
    #[allow(clippy::float_cmp)]
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self)> {
        let start = divisor
            .coeffs
            .iter()
            .position(|&c| c != 0.0)
            .ok_or(PolynomialError::DivisionByZero)?;
        let d = &divisor.coeffs[start..];
        let m = d.len();
        let n = self.coeffs.len();
        if n < m {
            return Ok((Self::constant(0.0), self.clone()));
        }
        let mut rem = self.coeffs.clone();
        let mut quotient = vec![0.0; n - m + 1];
        for i in 0..quotient.len() {
            let q = rem[i] / d[0];
            quotient[i] = q;
            for (j, &dj) in d.iter().enumerate() {
                rem[i + j] -= q * dj;
            }
        }
        let remainder = if m == 1 {
            vec![0.0]
        } else {
            rem[n - m + 1..].to_vec()
        };
        Ok((
            Self { coeffs: quotient },
            Self { coeffs: remainder },
        ))
    }

    /// Substitutes `inner` for the variable: `self(inner(x))`.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let mut acc = Self::constant(self.coeffs[0]);
        for &c in &self.coeffs[1..] {
            acc = acc.multiply(inner).add(&Self::constant(c));
        }
        acc
    }

    /// Expands `prod (x - r_i)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::UnpairedComplexRoot`] when a non-real root is
    /// not matched by its exact conjugate.
    #[allow(clippy::float_cmp)]
    pub fn from_roots(roots: &[Complex]) -> Result<Self> {
        let mut used = vec![false; roots.len()];
        for (i, r) in roots.iter().enumerate() {
            if r.im == 0.0 || used[i] {
                continue;
            }
            let partner = roots
                .iter()
                .enumerate()
                .position(|(j, s)| j != i && !used[j] && s.re == r.re && s.im == -r.im);
            match partner {
                Some(j) => {
                    used[i] = true;
                    used[j] = true;
                }
                None => {
                    return Err(PolynomialError::UnpairedComplexRoot { re: r.re, im: r.im }.into())
                }
            }
        }
        let mut acc = vec![Complex::ONE];
        for &r in roots {
            let mut next = vec![Complex::ZERO; acc.len() + 1];
            for (i, &c) in acc.iter().enumerate() {
                next[i] = next[i] + c;
                next[i + 1] = next[i + 1] - c * r;
            }
            acc = next;
        }
        Self::new(acc.iter().map(|c| c.re).collect())
    }

    /// Legendre polynomials `P_0 ..= P_n` by the three-term recurrence
    /// `(k + 1) P_{k+1} = (2k + 1) x P_k - k P_{k-1}`.
    #[must_use]
    pub fn legendre(n: usize) -> Vec<Self> {
        let x = Self {
            coeffs: vec![1.0, 0.0],
        };
        let mut out = vec![Self::constant(1.0)];
        if n == 0 {
            return out;
        }
        out.push(x.clone());
        for k in 1..n {
            #[allow(clippy::cast_precision_loss)]
            let kf = k as f64;
            let next = x
                .multiply(&out[k])
                .scalar_multiply(2.0 * kf + 1.0)
                .subtract(&out[k - 1].scalar_multiply(kf))
                .scalar_multiply(1.0 / (kf + 1.0));
            out.push(next);
        }
        out
    }

    /// Drops leading coefficients that are zero under `eps` and divides by the
    /// new leading coefficient. `None` for the zero polynomial.
    #[must_use]
    pub fn standardize(&self, eps: f64) -> Option<Self> {
        let start = self
            .coeffs
            .iter()
            .position(|&c| !maths::equal_to(c, 0.0, eps))?;
        let lead = self.coeffs[start];
        Some(Self {
            coeffs: self.coeffs[start..].iter().map(|c| c / lead).collect(),
        })
    }

    /// Coefficient-wise equality after padding to the same degree.
    #[must_use]
    pub fn equal_to(&self, other: &Self, eps: f64) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        let (p, q) = (self.padded(len), other.padded(len));
        p.iter().zip(&q).all(|(&a, &b)| maths::equal_to(a, b, eps))
    }

    /// All roots by the Jenkins–Traub algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if the leading coefficient is zero or the iteration
    /// does not converge.
    pub fn roots(&self) -> Result<Vec<Complex>> {
        JenkinsTraub.find_roots(self)
    }

    /// Real roots (imaginary part zero under `eps`) in ascending order.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`roots`](Self::roots).
    pub fn real_roots(&self, eps: f64) -> Result<Vec<f64>> {
        let mut out: Vec<f64> = self
            .roots()?
            .into_iter()
            .filter(|z| z.is_real(eps))
            .map(|z| z.re)
            .collect();
        out.sort_by(f64::total_cmp);
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly(c: &[f64]) -> Polynomial {
        Polynomial::new(c.to_vec()).unwrap()
    }

    #[test]
    fn rejects_empty_and_nan() {
        assert!(Polynomial::new(vec![]).is_err());
        assert!(Polynomial::new(vec![1.0, f64::NAN]).is_err());
    }

    #[test]
    fn evaluate_and_derivative() {
        let p = poly(&[2.0, -3.0, 0.0, 5.0]);
        assert_relative_eq!(p.evaluate(2.0), 9.0);
        assert_eq!(p.derivative(), poly(&[6.0, -6.0, 0.0]));
        assert_eq!(poly(&[4.0]).derivative(), poly(&[0.0]));
        let z = p.evaluate_complex(Complex::I);
        assert_relative_eq!(z.re, 8.0);
        assert_relative_eq!(z.im, -2.0);
    }

    #[test]
    fn arithmetic() {
        let p = poly(&[1.0, 2.0]);
        let q = poly(&[1.0, 0.0, -1.0]);
        assert_eq!(p.add(&q), poly(&[1.0, 1.0, 1.0]));
        assert_eq!(q.subtract(&p), poly(&[1.0, -1.0, -3.0]));
        assert_eq!(p.multiply(&q), poly(&[1.0, 2.0, -1.0, -2.0]));
    }

    #[test]
    fn long_division() {
        let p = poly(&[1.0, -3.0, 0.0, 4.0]);
        let d = poly(&[1.0, -2.0]);
        let (q, r) = p.divide(&d).unwrap();
        assert_eq!(q, poly(&[1.0, -1.0, -2.0]));
        assert_eq!(r, poly(&[0.0]));
        let (q, r) = poly(&[1.0, 0.0, 1.0]).divide(&poly(&[0.0, 1.0, 1.0])).unwrap();
        assert_eq!(q, poly(&[1.0, -1.0]));
        assert_eq!(r, poly(&[2.0]));
        assert!(p.divide(&poly(&[0.0, 0.0])).is_err());
        let (q, r) = d.divide(&p).unwrap();
        assert_eq!(q, poly(&[0.0]));
        assert_eq!(r, d);
    }

    #[test]
    fn composition() {
        let p = poly(&[1.0, 0.0, 1.0]);
        let inner = poly(&[1.0, 1.0]);
        assert_eq!(p.compose(&inner), poly(&[1.0, 2.0, 2.0]));
    }

    #[test]
    fn from_real_and_conjugate_roots() {
        let p = Polynomial::from_roots(&[Complex::real(1.0), Complex::real(2.0)]).unwrap();
        assert_eq!(p, poly(&[1.0, -3.0, 2.0]));
        let q = Polynomial::from_roots(&[Complex::I, -Complex::I]).unwrap();
        assert!(q.equal_to(&poly(&[1.0, 0.0, 1.0]), 1e-15));
        assert!(Polynomial::from_roots(&[Complex::new(1.0, 1.0)]).is_err());
    }

    #[test]
    fn legendre_recurrence() {
        let ps = Polynomial::legendre(4);
        assert_eq!(ps.len(), 5);
        assert!(ps[2].equal_to(&poly(&[1.5, 0.0, -0.5]), 1e-15));
        assert!(ps[3].equal_to(&poly(&[2.5, 0.0, -1.5, 0.0]), 1e-15));
        assert!(ps[4].equal_to(&poly(&[4.375, 0.0, -3.75, 0.0, 0.375]), 1e-15));
        for p in &ps {
            assert_relative_eq!(p.evaluate(1.0), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn standardize_trims_and_normalizes() {
        let p = poly(&[1e-20, 0.0, 2.0, 4.0]);
        assert_eq!(p.standardize(1e-10).unwrap(), poly(&[1.0, 2.0]));
        assert!(poly(&[0.0, 1e-20]).standardize(1e-10).is_none());
    }

    #[test]
    fn double_root() {
        let roots = poly(&[1.0, -2.0, 1.0]).roots().unwrap();
        assert_eq!(roots.len(), 2);
        for r in roots {
            assert_relative_eq!(r.re, 1.0, epsilon = 1e-12);
            assert!(r.im.abs() < 1e-12);
        }
    }

    #[test]
    fn real_roots_sorted() {
        // (x - 3)(x + 1)(x^2 + 1)
        let p = poly(&[1.0, -2.0, -2.0, -2.0, -3.0]);
        let roots = p.real_roots(1e-9).unwrap();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -1.0, epsilon = 1e-10);
        assert_relative_eq!(roots[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn both_strategies_agree() {
        let p = poly(&[1.0, -6.0, 11.0, -6.0]);
        let mut a: Vec<f64> = JenkinsTraub.find_roots(&p).unwrap().iter().map(|z| z.re).collect();
        let mut b: Vec<f64> = ComplexNewton.find_roots(&p).unwrap().iter().map(|z| z.re).collect();
        a.sort_by(f64::total_cmp);
        b.sort_by(f64::total_cmp);
        for (x, y) in a.iter().zip(&b) {
            assert_relative_eq!(x, y, epsilon = 1e-9);
        }
    }
}
