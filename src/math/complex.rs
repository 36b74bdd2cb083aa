//! A self-contained complex number type.
//!
//! The root finders work in the complex plane, so the elementary functions
//! here are derived from the logarithmic identities. Every multi-valued
//! function returns its principal value only.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{maths, vector2, Vector2};

/// A complex number `re + im * i`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    #[must_use]
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Self::new(modulus * maths::cos(argument), modulus * maths::sin(argument))
    }

    /// Modulus computed with the overflow-safe shift formula.
    #[must_use]
    pub fn modulus(self) -> f64 {
        vector2::magnitude(&Vector2::new(self.re, self.im))
    }

    #[must_use]
    pub fn squared_modulus(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Principal argument in `(-pi, pi]`.
    #[must_use]
    pub fn argument(self) -> f64 {
        maths::atan2(self.im, self.re)
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    #[must_use]
    pub fn reciprocal(self) -> Self {
        Self::ONE / self
    }

    #[must_use]
    pub fn scalar_multiply(self, s: f64) -> Self {
        Self::new(self.re * s, self.im * s)
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Imaginary part is zero under `eps`.
    #[must_use]
    pub fn is_real(self, eps: f64) -> bool {
        maths::equal_to(self.im, 0.0, eps)
    }

    #[must_use]
    pub fn equal_to(self, other: Self, eps: f64) -> bool {
        maths::equal_to(self.re, other.re, eps) && maths::equal_to(self.im, other.im, eps)
    }

    #[must_use]
    pub fn exp(self) -> Self {
        let r = self.re.exp();
        Self::new(r * maths::cos(self.im), r * maths::sin(self.im))
    }

    /// Principal natural logarithm. `log(0) = -inf`.
    #[must_use]
    pub fn log(self) -> Self {
        Self::new(self.modulus().ln(), self.argument())
    }

    /// Principal value of `self^w = exp(w * log(self))`.
    #[must_use]
    pub fn pow(self, w: Self) -> Self {
        if self.is_zero() {
            return if w.is_zero() { Self::ONE } else { Self::ZERO };
        }
        (w * self.log()).exp()
    }

    /// Principal value of `self^n` for a real exponent.
    #[must_use]
    pub fn powf(self, n: f64) -> Self {
        self.pow(Self::real(n))
    }

    /// Integer power by repeated squaring.
    #[must_use]
    pub fn powi(self, n: i32) -> Self {
        let mut base = if n < 0 { self.reciprocal() } else { self };
        let mut e = n.unsigned_abs();
        let mut acc = Self::ONE;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            e >>= 1;
        }
        acc
    }

    /// Principal square root, real part non-negative.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let m = self.modulus();
        let re = ((m + self.re.abs()) * 0.5).sqrt();
        if self.re >= 0.0 {
            Self::new(re, self.im / (2.0 * re))
        } else {
            let im = if self.im < 0.0 || (self.im == 0.0 && self.im.is_sign_negative()) {
                -re
            } else {
                re
            };
            Self::new(self.im / (2.0 * im), im)
        }
    }

    /// Principal cube root.
    #[must_use]
    pub fn cbrt(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        Self::from_polar(self.modulus().cbrt(), self.argument() / 3.0)
    }

    #[must_use]
    pub fn sin(self) -> Self {
        Self::new(
            maths::sin(self.re) * self.im.cosh(),
            maths::cos(self.re) * self.im.sinh(),
        )
    }

    #[must_use]
    pub fn cos(self) -> Self {
        Self::new(
            maths::cos(self.re) * self.im.cosh(),
            -maths::sin(self.re) * self.im.sinh(),
        )
    }

    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    #[must_use]
    pub fn cot(self) -> Self {
        self.cos() / self.sin()
    }

    #[must_use]
    pub fn sec(self) -> Self {
        self.cos().reciprocal()
    }

    #[must_use]
    pub fn csc(self) -> Self {
        self.sin().reciprocal()
    }

    #[must_use]
    pub fn sinh(self) -> Self {
        Self::new(
            self.re.sinh() * maths::cos(self.im),
            self.re.cosh() * maths::sin(self.im),
        )
    }

    #[must_use]
    pub fn cosh(self) -> Self {
        Self::new(
            self.re.cosh() * maths::cos(self.im),
            self.re.sinh() * maths::sin(self.im),
        )
    }

    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// `asin(z) = -i log(iz + sqrt(1 - z^2))`.
    #[must_use]
    pub fn asin(self) -> Self {
        let root = (Self::ONE - self * self).sqrt();
        -Self::I * (Self::I * self + root).log()
    }

    /// `acos(z) = -i log(z + i sqrt(1 - z^2))`.
    #[must_use]
    pub fn acos(self) -> Self {
        let root = (Self::ONE - self * self).sqrt();
        -Self::I * (self + Self::I * root).log()
    }

    /// `atan(z) = (i/2) (log(1 - iz) - log(1 + iz))`.
    #[must_use]
    pub fn atan(self) -> Self {
        let iz = Self::I * self;
        Self::new(0.0, 0.5) * ((Self::ONE - iz).log() - (Self::ONE + iz).log())
    }

    /// `asinh(z) = log(z + sqrt(z^2 + 1))`.
    #[must_use]
    pub fn asinh(self) -> Self {
        (self + (self * self + Self::ONE).sqrt()).log()
    }

    /// `acosh(z) = log(z + sqrt(z + 1) sqrt(z - 1))`.
    #[must_use]
    pub fn acosh(self) -> Self {
        (self + (self + Self::ONE).sqrt() * (self - Self::ONE).sqrt()).log()
    }

    /// `atanh(z) = (log(1 + z) - log(1 - z)) / 2`.
    #[must_use]
    pub fn atanh(self) -> Self {
        ((Self::ONE + self).log() - (Self::ONE - self).log()).scalar_multiply(0.5)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl Add for Complex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scalar_multiply(rhs)
    }
}

impl Div for Complex {
    type Output = Self;

    /// Smith's algorithm. Division by zero yields `(inf, inf)`.
    fn div(self, rhs: Self) -> Self {
        if rhs.is_zero() {
            return Self::new(f64::INFINITY, f64::INFINITY);
        }
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);
        if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Self::new((a + b * r) / den, (b - a * r) / den)
        } else {
            let r = c / d;
            let den = c * r + d;
            Self::new((a * r + b) / den, (b * r - a) / den)
        }
    }
}

impl Div<f64> for Complex {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self / Self::real(rhs)
    }
}

impl Neg for Complex {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Complex, b: Complex, tol: f64) -> bool {
        (a - b).modulus() <= tol * (1.0 + b.modulus())
    }

    #[test]
    fn exact_integer_multiplication() {
        let z = Complex::new(5.0, 6.0) * Complex::new(-3.0, 4.0);
        assert_eq!(z, Complex::new(-39.0, 2.0));
    }

    #[test]
    fn division_and_sentinel() {
        let z = Complex::new(-39.0, 2.0) / Complex::new(-3.0, 4.0);
        assert!(close(z, Complex::new(5.0, 6.0), 1e-14));
        let inf = Complex::ONE / Complex::ZERO;
        assert!(inf.re.is_infinite() && inf.im.is_infinite());
    }

    #[test]
    fn euler_identity() {
        let z = Complex::new(0.0, PI).exp();
        assert!(close(z, Complex::new(-1.0, 0.0), 1e-15));
    }

    #[test]
    fn principal_square_roots() {
        assert!(close(Complex::real(-4.0).sqrt(), Complex::new(0.0, 2.0), 1e-15));
        assert!(close(Complex::new(0.0, 2.0).sqrt(), Complex::new(1.0, 1.0), 1e-15));
        assert!(close(Complex::new(-3.0, -4.0).sqrt(), Complex::new(1.0, -2.0), 1e-15));
        assert_eq!(Complex::ZERO.sqrt(), Complex::ZERO);
    }

    #[test]
    fn powers() {
        let z = Complex::new(1.0, 1.0);
        assert!(close(z.powi(4), Complex::real(-4.0), 1e-14));
        assert!(close(z.powf(2.0), Complex::new(0.0, 2.0), 1e-14));
        assert!(close(z.powi(-1), Complex::new(0.5, -0.5), 1e-15));
        assert_eq!(Complex::ZERO.pow(Complex::ZERO), Complex::ONE);
        let r = Complex::real(-8.0).cbrt();
        assert!(close(r * r * r, Complex::real(-8.0), 1e-14));
    }

    #[test]
    fn inverse_trig_undo_forward() {
        let z = Complex::new(0.3, -0.7);
        assert!(close(z.asin().sin(), z, 1e-13));
        assert!(close(z.acos().cos(), z, 1e-13));
        assert!(close(z.atan().tan(), z, 1e-13));
        assert!(close(z.asinh().sinh(), z, 1e-13));
        assert!(close(z.acosh().cosh(), z, 1e-13));
        assert!(close(z.atanh().tanh(), z, 1e-13));
    }

    #[test]
    fn real_axis_matches_f64() {
        let x = 0.4;
        assert_relative_eq!(Complex::real(x).asin().re, x.asin(), epsilon = 1e-15);
        assert_relative_eq!(Complex::real(x).atan().re, x.atan(), epsilon = 1e-15);
        assert_relative_eq!(Complex::real(FRAC_PI_2).sin().re, 1.0);
    }

    #[test]
    fn display() {
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Complex::new(1.5, 2.0).to_string(), "1.5+2i");
    }

    proptest! {
        #[test]
        fn exp_undoes_log(re in -1e3f64..1e3, im in -1e3f64..1e3) {
            let z = Complex::new(re, im);
            prop_assume!(z.modulus() > 1e-6);
            let back = z.log().exp();
            prop_assert!((back - z).modulus() <= 1e-10 * z.modulus());
        }
    }
}
