//! Gauss–Legendre quadrature.

use crate::error::{PolynomialError, Result};

use super::Polynomial;

/// Upper limit on the rule order.
pub const MAX_ORDER: usize = 20;

/// Nodes and weights of the `order`-point rule on `[-1, 1]`.
///
/// Nodes are the zeros of the Legendre polynomial `P_order`, polished by
/// Newton's method; weights are `2 / ((1 - x^2) P'(x)^2)`.
///
/// # Errors
///
/// Returns [`PolynomialError::InvalidOrder`] if `order` is zero or above
/// [`MAX_ORDER`], and propagates root-finding failures.
#[allow(clippy::float_cmp)]
pub fn gauss_legendre_rule(order: usize) -> Result<Vec<(f64, f64)>> {
    if order == 0 || order > MAX_ORDER {
        return Err(PolynomialError::InvalidOrder(order).into());
    }
    let p = Polynomial::legendre(order).swap_remove(order);
    let dp = p.derivative();
    let mut nodes = p.real_roots(1e-6)?;
    if nodes.len() != order {
        return Err(PolynomialError::NoConvergence {
            degree: order,
            restarts: 0,
        }
        .into());
    }
    for x in &mut nodes {
        for _ in 0..2 {
            let d = dp.evaluate(*x);
            if d != 0.0 {
                *x -= p.evaluate(*x) / d;
            }
        }
    }
    Ok(nodes
        .into_iter()
        .map(|x| {
            let d = dp.evaluate(x);
            (x, 2.0 / ((1.0 - x * x) * d * d))
        })
        .collect())
}

/// Integrates `f` over `[a, b]` with the `order`-point Gauss–Legendre rule,
/// exact for polynomials up to degree `2 order - 1`.
///
/// # Errors
///
/// Same as [`gauss_legendre_rule`].
pub fn gauss_legendre<F>(f: F, a: f64, b: f64, order: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let rule = gauss_legendre_rule(order)?;
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let total: f64 = rule.iter().map(|&(x, w)| w * f(mid + half * x)).sum();
    Ok(half * total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn weights_sum_to_two() {
        for order in [1, 2, 5, 12] {
            let rule = gauss_legendre_rule(order).unwrap();
            assert_eq!(rule.len(), order);
            let total: f64 = rule.iter().map(|(_, w)| w).sum();
            assert_relative_eq!(total, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn two_point_rule() {
        let rule = gauss_legendre_rule(2).unwrap();
        assert_relative_eq!(rule[0].0, -1.0 / 3f64.sqrt(), epsilon = 1e-14);
        assert_relative_eq!(rule[1].0, 1.0 / 3f64.sqrt(), epsilon = 1e-14);
        assert_relative_eq!(rule[0].1, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn exact_for_low_degree() {
        let v = gauss_legendre(|x| x.powi(5) - 2.0 * x, 0.0, 1.0, 3).unwrap();
        assert_relative_eq!(v, 1.0 / 6.0 - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn smooth_integrand() {
        let v = gauss_legendre(f64::sin, 0.0, PI, 10).unwrap();
        assert_relative_eq!(v, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_order() {
        assert!(gauss_legendre(|x| x, 0.0, 1.0, 0).is_err());
        assert!(gauss_legendre_rule(MAX_ORDER + 1).is_err());
    }
}
