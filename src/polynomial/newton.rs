//! Damped Newton iteration for polynomials with complex coefficients.
//!
//! Each root is searched from a radius below the smallest root modulus. A
//! coarse stage takes bounded, damped steps until Newton's method is clearly
//! contracting, then a second stage takes plain Newton steps until the
//! polynomial value falls under a rigorous bound on its rounding error. The
//! root is deflated and the search repeats; the last two roots come from the
//! quadratic formula.

use crate::error::{PolynomialError, Result};
use crate::math::Complex;

/// Iterations allowed per root before settling for the best estimate.
pub const MAX_ITERATIONS: usize = 50;

/// Multiplier on the evaluation error bound below which a value counts as
/// zero.
const BOUND_FACTOR: f64 = 8.0;

/// Step growth allowed in the coarse stage.
const MAX_STEP_GROWTH: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Coarse,
    Newton,
}

/// All roots of the polynomial with complex `coeffs`, highest degree first.
///
/// # Errors
///
/// Returns an error if `coeffs` is empty, holds a non-finite value, or has a
/// zero leading coefficient.
pub fn roots(coeffs: &[Complex]) -> Result<Vec<Complex>> {
    roots_within(coeffs, MAX_ITERATIONS)
}

fn roots_within(coeffs: &[Complex], max_iterations: usize) -> Result<Vec<Complex>> {
    if coeffs.is_empty() {
        return Err(PolynomialError::Empty.into());
    }
    if let Some((index, value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        let value = if value.re.is_finite() { value.im } else { value.re };
        return Err(PolynomialError::NotFinite { index, value }.into());
    }
    if coeffs[0].is_zero() {
        return Err(PolynomialError::ZeroLeadingCoefficient.into());
    }

    let mut a = coeffs.to_vec();
    let mut zeros = Vec::with_capacity(a.len() - 1);
    while a.len() > 1 && a[a.len() - 1].is_zero() {
        a.pop();
        zeros.push(Complex::ZERO);
    }

    while a.len() > 3 {
        let z = find_root(&a, max_iterations);
        zeros.push(z);
        a = deflate(&a, z);
    }
    match a.len() {
        3 => {
            let (z1, z2) = quadratic(a[0], a[1], a[2]);
            zeros.push(z1);
            zeros.push(z2);
        }
        2 => zeros.push(-a[1] / a[0]),
        _ => {}
    }
    Ok(zeros)
}

/// Value and derivative by Horner's scheme.
fn evaluate(a: &[Complex], z: Complex) -> (Complex, Complex) {
    let mut f = a[0];
    let mut df = Complex::ZERO;
    for &c in &a[1..] {
        df = df * z + f;
        f = f * z + c;
    }
    (f, df)
}

/// Bound on the rounding error of evaluating `a` at `z` by Horner's scheme.
fn error_bound(a: &[Complex], z: Complex) -> f64 {
    let m = z.modulus();
    let mut b = a[0];
    let mut e = b.modulus() * 0.5;
    for &c in &a[1..] {
        b = b * z + c;
        e = e * m + b.modulus();
    }
    BOUND_FACTOR * f64::EPSILON * e
}

/// Rotates the step by about 53 degrees and halves it.
fn change_direction(dz: Complex) -> Complex {
    dz * Complex::new(0.6, 0.8) * 0.5
}

/// Half the smallest `(|a_n| / |a_{n-k}|)^(1/k)`, a safe starting radius.
fn start_radius(a: &[Complex]) -> f64 {
    let n = a.len() - 1;
    let constant = a[n].modulus();
    let mut r = f64::INFINITY;
    for k in 1..=n {
        let m = a[n - k].modulus();
        if m > 0.0 {
            #[allow(clippy::cast_precision_loss)]
            let candidate = (constant / m).powf(1.0 / k as f64);
            r = r.min(candidate);
        }
    }
    0.5 * r
}

/// Stops after `max_iterations` steps and returns the best point so far.
fn find_root(a: &[Complex], max_iterations: usize) -> Complex {
    let n = a.len() - 1;
    let mut z = Complex::ZERO;
    let mut f_mod = a[n].modulus();

    let direction = if a[n - 1].is_zero() {
        Complex::ONE
    } else {
        -a[n] / a[n - 1]
    };
    let radius = start_radius(a);
    let mut dz = if direction.is_zero() {
        Complex::real(radius)
    } else {
        direction * (radius / direction.modulus())
    };
    let mut stage = Stage::Coarse;

    for _ in 0..max_iterations {
        let candidate = z + dz;
        let (f_new, df_new) = evaluate(a, candidate);
        let f_new_mod = f_new.modulus();

        if f_new_mod >= f_mod {
            stage = Stage::Coarse;
            dz = change_direction(dz);
            if dz.modulus() <= f64::EPSILON * z.modulus() {
                return z;
            }
            continue;
        }

        let previous_step = dz.modulus();
        z = candidate;
        f_mod = f_new_mod;
        if f_mod <= error_bound(a, z) {
            return z;
        }

        let newton = if df_new.is_zero() {
            change_direction(dz)
        } else {
            -f_new / df_new
        };
        let newton_step = newton.modulus();
        dz = match stage {
            Stage::Coarse if newton_step > MAX_STEP_GROWTH * previous_step => {
                newton * (MAX_STEP_GROWTH * previous_step / newton_step)
            }
            Stage::Coarse => {
                if newton_step <= 0.5 * previous_step {
                    stage = Stage::Newton;
                }
                newton
            }
            Stage::Newton => newton,
        };
        if dz.modulus() <= f64::EPSILON * z.modulus() {
            return z;
        }
    }

    tracing::warn!(
        degree = n,
        iterations = max_iterations,
        re = z.re,
        im = z.im,
        "complex root search did not converge, using best estimate"
    );
    z
}

/// Divides out `x - z`, dropping the remainder.
fn deflate(a: &[Complex], z: Complex) -> Vec<Complex> {
    let mut out = Vec::with_capacity(a.len() - 1);
    let mut b = a[0];
    out.push(b);
    for &c in &a[1..a.len() - 1] {
        b = b * z + c;
        out.push(b);
    }
    out
}

/// Zeros of `a x^2 + b x + c` with the sign of the square root chosen to
/// avoid cancellation.
fn quadratic(a: Complex, b: Complex, c: Complex) -> (Complex, Complex) {
    let disc = (b * b - a * c * 4.0).sqrt();
    let aligned = b.conjugate() * disc;
    let q = if aligned.re >= 0.0 {
        -(b + disc) * 0.5
    } else {
        -(b - disc) * 0.5
    };
    if q.is_zero() {
        return (Complex::ZERO, Complex::ZERO);
    }
    (q / a, c / q)
}
