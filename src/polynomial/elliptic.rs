//! Elliptic integrals through Carlson's symmetric forms.
//!
//! Legendre's integrals are expressed via `R_F` and `R_D`, both computed by
//! the duplication theorem. Arguments outside the domain give `None`.

use std::f64::consts::PI;

const ERRTOL: f64 = 1.0e-7;
const TINY: f64 = 1.5e-38;
const BIG: f64 = 3.0e37;

/// Carlson's `R_F(x, y, z)`. `x, y, z >= 0` with at most one of them zero.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn carlson_rf(x: f64, y: f64, z: f64) -> Option<f64> {
    const C1: f64 = 1.0 / 24.0;
    const C2: f64 = 0.1;
    const C3: f64 = 3.0 / 44.0;
    const C4: f64 = 1.0 / 14.0;

    if x.min(y).min(z) < 0.0
        || (x + y).min(x + z).min(y + z) < TINY
        || x.max(y).max(z) > BIG
        || !(x + y + z).is_finite()
    {
        return None;
    }

    let (mut xt, mut yt, mut zt) = (x, y, z);
    loop {
        let (sx, sy, sz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        xt = 0.25 * (xt + lambda);
        yt = 0.25 * (yt + lambda);
        zt = 0.25 * (zt + lambda);
        let ave = (xt + yt + zt) / 3.0;
        let dx = (ave - xt) / ave;
        let dy = (ave - yt) / ave;
        let dz = (ave - zt) / ave;
        if dx.abs().max(dy.abs()).max(dz.abs()) <= ERRTOL {
            let e2 = dx * dy - dz * dz;
            let e3 = dx * dy * dz;
            return Some((1.0 + (C1 * e2 - C2 - C3 * e3) * e2 + C4 * e3) / ave.sqrt());
        }
    }
}

/// Carlson's `R_D(x, y, z)`. `x, y >= 0` with at most one zero, `z > 0`.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn carlson_rd(x: f64, y: f64, z: f64) -> Option<f64> {
    const C1: f64 = 3.0 / 14.0;
    const C2: f64 = 1.0 / 6.0;
    const C3: f64 = 9.0 / 22.0;
    const C4: f64 = 3.0 / 26.0;
    const C5: f64 = 0.25 * C3;
    const C6: f64 = 1.5 * C4;

    if x.min(y) < 0.0
        || (x + y).min(z) < TINY
        || x.max(y).max(z) > BIG
        || !(x + y + z).is_finite()
    {
        return None;
    }

    let (mut xt, mut yt, mut zt) = (x, y, z);
    let mut sum = 0.0;
    let mut fac = 1.0;
    loop {
        let (sx, sy, sz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        sum += fac / (sz * (zt + lambda));
        fac *= 0.25;
        xt = 0.25 * (xt + lambda);
        yt = 0.25 * (yt + lambda);
        zt = 0.25 * (zt + lambda);
        let ave = 0.2 * (xt + yt + 3.0 * zt);
        let dx = (ave - xt) / ave;
        let dy = (ave - yt) / ave;
        let dz = (ave - zt) / ave;
        if dx.abs().max(dy.abs()).max(dz.abs()) <= ERRTOL {
            let ea = dx * dy;
            let eb = dz * dz;
            let ec = ea - eb;
            let ed = ea - 6.0 * eb;
            let ee = ed + ec + ec;
            let series = 1.0
                + ed * (-C1 + C5 * ed - C6 * dz * ee)
                + dz * (C2 * ee + dz * (-C3 * ec + dz * C4 * ea));
            return Some(3.0 * sum + fac * series / (ave * ave.sqrt()));
        }
    }
}

/// Complete integral of the first kind `K(k)`, `|k| < 1`.
#[must_use]
pub fn complete_first_kind(k: f64) -> Option<f64> {
    if k.abs() >= 1.0 {
        return None;
    }
    carlson_rf(0.0, 1.0 - k * k, 1.0)
}

/// Complete integral of the second kind `E(k)`, `|k| <= 1`.
#[must_use]
pub fn complete_second_kind(k: f64) -> Option<f64> {
    let k2 = k * k;
    if k2 > 1.0 || k.is_nan() {
        return None;
    }
    if (k2 - 1.0).abs() < f64::EPSILON {
        return Some(1.0);
    }
    let q = 1.0 - k2;
    Some(carlson_rf(0.0, q, 1.0)? - k2 / 3.0 * carlson_rd(0.0, q, 1.0)?)
}

/// Splits `phi` as `phi' + m pi` with `|phi'| <= pi / 2`.
fn reduce(phi: f64) -> (f64, f64) {
    let m = (phi / PI).round();
    (phi - m * PI, m)
}

/// Incomplete integral of the first kind `F(phi, k)`.
///
/// Any amplitude is accepted; whole half-turns contribute `2 K(k)` each.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn incomplete_first_kind(phi: f64, k: f64) -> Option<f64> {
    if !phi.is_finite() {
        return None;
    }
    let (phi, m) = reduce(phi);
    let (s, c) = phi.sin_cos();
    let q = 1.0 - k * k * s * s;
    let partial = if s == 0.0 {
        0.0
    } else {
        s * carlson_rf(c * c, q, 1.0)?
    };
    if m == 0.0 {
        Some(partial)
    } else {
        Some(partial + 2.0 * m * complete_first_kind(k)?)
    }
}

/// Incomplete integral of the second kind `E(phi, k)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn incomplete_second_kind(phi: f64, k: f64) -> Option<f64> {
    if !phi.is_finite() {
        return None;
    }
    let (phi, m) = reduce(phi);
    let (s, c) = phi.sin_cos();
    let cc = c * c;
    let ks = k * s;
    let q = (1.0 - ks) * (1.0 + ks);
    let partial = if s == 0.0 {
        0.0
    } else {
        s * (carlson_rf(cc, q, 1.0)? - ks * ks * carlson_rd(cc, q, 1.0)? / 3.0)
    };
    if m == 0.0 {
        Some(partial)
    } else {
        Some(partial + 2.0 * m * complete_second_kind(k)?)
    }
}
