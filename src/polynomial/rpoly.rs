//! Jenkins–Traub root finder for polynomials with real coefficients.
//!
//! Three stages: a few shift-free iterations to separate the small zeros,
//! fixed-shift iterations that pick out a linear or quadratic factor, and
//! variable-shift iterations that converge onto it. Each factor found is
//! deflated off the polynomial and the process repeats.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{PolynomialError, Result};
use crate::math::Complex;

const ETA: f64 = f64::EPSILON;
/// cos 94 degrees.
const COS_ROTATION: f64 = -0.069_756_474;
/// sin 94 degrees.
const SIN_ROTATION: f64 = 0.997_564_05;
const MAX_RESTARTS: usize = 20;
const NO_SHIFT_STEPS: usize = 5;

/// How the next `K` polynomial is scaled, decided from the remainders of the
/// synthetic divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recurrence {
    /// Scaled by the `c` remainder.
    ByC,
    /// Scaled by the `d` remainder.
    ByD,
    /// `K` is almost a multiple of the quadratic; use the unscaled form.
    NearFactor,
}

/// Control flow of stage three once a shift looks convergent.
#[derive(Debug, Clone, Copy)]
enum Attempt {
    Quadratic,
    Linear,
    Restore,
}

/// All roots of the polynomial with real `coeffs`, highest degree first.
///
/// Roots are reported in the order they are deflated; conjugate pairs are
/// adjacent.
///
/// # Errors
///
/// Returns an error if `coeffs` is empty, holds a non-finite value, has a
/// zero leading coefficient, or if a factor could not be isolated after
/// every shift restart.
pub fn roots(coeffs: &[f64]) -> Result<Vec<Complex>> {
    roots_with_restarts(coeffs, MAX_RESTARTS)
}

/// [`roots`] with a caller-chosen number of fixed-shift restarts per factor.
#[allow(clippy::float_cmp)]
fn roots_with_restarts(coeffs: &[f64], max_restarts: usize) -> Result<Vec<Complex>> {
    if coeffs.is_empty() {
        return Err(PolynomialError::Empty.into());
    }
    if let Some((index, &value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(PolynomialError::NotFinite { index, value }.into());
    }
    if coeffs[0] == 0.0 {
        return Err(PolynomialError::ZeroLeadingCoefficient.into());
    }

    let degree = coeffs.len() - 1;
    let mut zeros = Vec::with_capacity(degree);
    let mut p = coeffs.to_vec();

    while p.len() > 1 && p[p.len() - 1] == 0.0 {
        p.pop();
        zeros.push(Complex::ZERO);
    }

    let mut xx = FRAC_1_SQRT_2;
    let mut yy = -xx;

    loop {
        let n = p.len() - 1;
        match n {
            0 => break,
            1 => {
                zeros.push(Complex::real(-p[1] / p[0]));
                break;
            }
            2 => {
                let (small, large) = quadratic(p[0], p[1], p[2]);
                zeros.push(small);
                zeros.push(large);
                break;
            }
            _ => {}
        }

        scale(&mut p);
        let bound = lower_bound(&p);
        let mut solver = Solver::new(p);
        solver.no_shift();
        let saved = solver.k.clone();

        let mut found = 0;
        for restart in 1..=max_restarts {
            let x = COS_ROTATION * xx - SIN_ROTATION * yy;
            yy = SIN_ROTATION * xx + COS_ROTATION * yy;
            xx = x;
            let sr = bound * xx;
            solver.u = -2.0 * sr;
            found = solver.fixed_shift(20 * restart, sr, bound);
            if found > 0 {
                break;
            }
            tracing::debug!(degree = n, restart, "fixed-shift stage failed, rotating shift");
            solver.k.clone_from(&saved);
        }
        if found == 0 {
            return Err(PolynomialError::NoConvergence {
                degree: n,
                restarts: max_restarts,
            }
            .into());
        }

        zeros.push(Complex::new(solver.szr, solver.szi));
        if found == 2 {
            zeros.push(Complex::new(solver.lzr, solver.lzi));
        }
        let remaining = solver.qp.len() - found;
        solver.qp.truncate(remaining);
        p = solver.qp;
    }

    Ok(zeros)
}

/// Scales coefficients by a power of two so that the smallest modulus is not
/// too close to underflow, while keeping the largest one finite.
#[allow(clippy::float_cmp)]
fn scale(p: &mut [f64]) {
    let lo = f64::MIN_POSITIVE / ETA;
    let mut max = 0.0_f64;
    let mut min = f64::MAX;
    for &c in p.iter() {
        let m = c.abs();
        max = max.max(m);
        if m != 0.0 && m < min {
            min = m;
        }
    }
    let mut sc = lo / min;
    let rescale = if sc > 1.0 {
        f64::MAX / sc >= max
    } else {
        if sc == 0.0 {
            sc = f64::MIN_POSITIVE;
        }
        max >= 10.0
    };
    if !rescale {
        return;
    }
    #[allow(clippy::cast_possible_truncation)]
    let l = (sc.log2() + 0.5) as i32;
    let factor = 2f64.powi(l);
    if factor != 1.0 {
        tracing::debug!(factor, "rescaling coefficients");
        for c in p.iter_mut() {
            *c *= factor;
        }
    }
}

/// Cauchy lower bound on the moduli of the zeros: the positive root of
/// `|a_0| x^n + ... + |a_{n-1}| x - |a_n|`, to about two digits.
#[allow(clippy::float_cmp)]
fn lower_bound(p: &[f64]) -> f64 {
    let n = p.len() - 1;
    let mut pt: Vec<f64> = p.iter().map(|c| c.abs()).collect();
    pt[n] = -pt[n];

    #[allow(clippy::cast_precision_loss)]
    let mut x = (((-pt[n]).ln() - pt[0].ln()) / n as f64).exp();
    if pt[n - 1] != 0.0 {
        let xm = -pt[n] / pt[n - 1];
        if xm < x {
            x = xm;
        }
    }

    loop {
        let xm = x * 0.1;
        let ff = pt.iter().fold(0.0, |acc, &c| acc * xm + c);
        if ff <= 0.0 {
            break;
        }
        x = xm;
    }

    let mut dx = x;
    while (dx / x).abs() > 0.005 {
        let mut ff = pt[0];
        let mut df = ff;
        for &c in &pt[1..n] {
            ff = ff * x + c;
            df = df * x + ff;
        }
        ff = ff * x + pt[n];
        dx = ff / df;
        x -= dx;
    }
    x
}

/// Synthetic division of `p` by `x^2 + u x + v`. The quotient lands in `q`;
/// the remainder is `b (x + u) + a`, returned as `(a, b)`.
fn quadratic_division(u: f64, v: f64, p: &[f64], q: &mut [f64]) -> (f64, f64) {
    let mut b = p[0];
    q[0] = b;
    let mut a = p[1] - u * b;
    q[1] = a;
    for i in 2..p.len() {
        let c = p[i] - u * a - v * b;
        q[i] = c;
        b = a;
        a = c;
    }
    (a, b)
}

/// Zeros of `a x^2 + b x + c`, smaller modulus first, computed without
/// overflow in the discriminant.
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
fn quadratic(a: f64, b: f64, c: f64) -> (Complex, Complex) {
    if a == 0.0 {
        let sr = if b == 0.0 { 0.0 } else { -c / b };
        return (Complex::real(sr), Complex::ZERO);
    }
    if c == 0.0 {
        return (Complex::ZERO, Complex::real(-b / a));
    }
    let b = b / 2.0;
    let (e, d) = if b.abs() >= c.abs() {
        let e = 1.0 - (a / b) * (c / b);
        (e, e.abs().sqrt() * b.abs())
    } else {
        let e = if c < 0.0 { -a } else { a };
        let e = b * (b / c.abs()) - e;
        (e, e.abs().sqrt() * c.abs().sqrt())
    };
    if e >= 0.0 {
        let d = if b >= 0.0 { -d } else { d };
        let lr = (-b + d) / a;
        let sr = if lr == 0.0 { 0.0 } else { (c / lr) / a };
        (Complex::real(sr), Complex::real(lr))
    } else {
        let re = -b / a;
        let im = (d / a).abs();
        (Complex::new(re, im), Complex::new(re, -im))
    }
}

/// Working state of one deflation step.
#[allow(clippy::struct_field_names)]
struct Solver {
    p: Vec<f64>,
    qp: Vec<f64>,
    k: Vec<f64>,
    qk: Vec<f64>,
    svk: Vec<f64>,
    u: f64,
    v: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    a1: f64,
    a3: f64,
    a7: f64,
    e: f64,
    f: f64,
    g: f64,
    h: f64,
    szr: f64,
    szi: f64,
    lzr: f64,
    lzi: f64,
}

impl Solver {
    fn new(p: Vec<f64>) -> Self {
        let nn = p.len();
        let n = nn - 1;
        #[allow(clippy::cast_precision_loss)]
        let nf = n as f64;
        let mut k = vec![0.0; n];
        k[0] = p[0];
        for i in 1..n {
            #[allow(clippy::cast_precision_loss)]
            let weight = (n - i) as f64;
            k[i] = weight * p[i] / nf;
        }
        Self {
            qp: vec![0.0; nn],
            qk: vec![0.0; n],
            svk: vec![0.0; n],
            k,
            p,
            u: 0.0,
            v: 0.0,
            a: 0.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            a1: 0.0,
            a3: 0.0,
            a7: 0.0,
            e: 0.0,
            f: 0.0,
            g: 0.0,
            h: 0.0,
            szr: 0.0,
            szi: 0.0,
            lzr: 0.0,
            lzi: 0.0,
        }
    }

    fn degree(&self) -> usize {
        self.p.len() - 1
    }

    /// Stage one: `K` iterations with no shift.
    #[allow(clippy::float_cmp)]
    fn no_shift(&mut self) {
        let n = self.degree();
        let aa = self.p[n];
        let bb = self.p[n - 1];
        let mut zero_k = self.k[n - 1] == 0.0;
        for _ in 0..NO_SHIFT_STEPS {
            let cc = self.k[n - 1];
            if zero_k {
                for j in (1..n).rev() {
                    self.k[j] = self.k[j - 1];
                }
                self.k[0] = 0.0;
                zero_k = self.k[n - 1] == 0.0;
            } else {
                let t = -aa / cc;
                for j in (1..n).rev() {
                    self.k[j] = t * self.k[j - 1] + self.p[j];
                }
                self.k[0] = self.p[0];
                zero_k = self.k[n - 1].abs() <= bb.abs() * ETA * 10.0;
            }
        }
    }

    /// Stage two: fixed-shift iterations with `l2` steps at most. Moves on to
    /// stage three once the shift estimates settle. Returns the number of
    /// zeros found (0, 1 or 2).
    #[allow(clippy::similar_names, clippy::float_cmp)]
    fn fixed_shift(&mut self, l2: usize, sr: f64, v: f64) -> usize {
        let n = self.degree();
        let mut betav = 0.25;
        let mut betas = 0.25;
        let mut oss = sr;
        let mut ovv = v;
        let mut otv = 0.0;
        let mut ots = 0.0;
        self.v = v;

        self.divide_p();
        let mut kind = self.calc_sc();

        for j in 0..l2 {
            self.next_k(kind);
            kind = self.calc_sc();
            let (ui, vi) = self.newest(kind);
            let vv = vi;
            let ss = if self.k[n - 1] == 0.0 {
                0.0
            } else {
                -self.p[n] / self.k[n - 1]
            };
            let mut tv = 1.0;
            let mut ts = 1.0;

            if j != 0 && kind != Recurrence::NearFactor {
                if vv != 0.0 {
                    tv = ((vv - ovv) / vv).abs();
                }
                if ss != 0.0 {
                    ts = ((ss - oss) / ss).abs();
                }
                let tvv = if tv < otv { tv * otv } else { 1.0 };
                let tss = if ts < ots { ts * ots } else { 1.0 };
                let vpass = tvv < betav;
                let spass = tss < betas;

                if spass || vpass {
                    let svu = self.u;
                    let svv = self.v;
                    self.svk.copy_from_slice(&self.k);
                    let mut s = ss;
                    let mut ui = ui;
                    let mut vi = vi;
                    let mut vtry = false;
                    let mut stry = false;
                    let mut attempt = if spass && (!vpass || tss < tvv) {
                        Attempt::Linear
                    } else {
                        Attempt::Quadratic
                    };

                    loop {
                        match attempt {
                            Attempt::Quadratic => {
                                if self.quadratic_iteration(ui, vi) {
                                    return 2;
                                }
                                vtry = true;
                                betav *= 0.25;
                                if stry || !spass {
                                    attempt = Attempt::Restore;
                                } else {
                                    self.k.copy_from_slice(&self.svk);
                                    attempt = Attempt::Linear;
                                }
                            }
                            Attempt::Linear => {
                                let (converged, cluster) = self.real_iteration(&mut s);
                                if converged {
                                    return 1;
                                }
                                stry = true;
                                betas *= 0.25;
                                if cluster {
                                    ui = -(s + s);
                                    vi = s * s;
                                    attempt = Attempt::Quadratic;
                                } else {
                                    attempt = Attempt::Restore;
                                }
                            }
                            Attempt::Restore => {
                                self.u = svu;
                                self.v = svv;
                                self.k.copy_from_slice(&self.svk);
                                if vpass && !vtry {
                                    attempt = Attempt::Quadratic;
                                } else {
                                    break;
                                }
                            }
                        }
                    }

                    self.divide_p();
                    kind = self.calc_sc();
                }
            }
            ovv = vv;
            oss = ss;
            otv = tv;
            ots = ts;
        }
        0
    }

    /// Divides `p` by the current quadratic into `qp`, keeping the remainder.
    fn divide_p(&mut self) {
        let (a, b) = quadratic_division(self.u, self.v, &self.p, &mut self.qp);
        self.a = a;
        self.b = b;
    }

    /// Divides `K` by the quadratic and computes the scalars the next `K`
    /// and the new quadratic estimate are built from.
    fn calc_sc(&mut self) -> Recurrence {
        let n = self.degree();
        let (c, d) = quadratic_division(self.u, self.v, &self.k, &mut self.qk);
        self.c = c;
        self.d = d;

        if c.abs() <= 100.0 * ETA * self.k[n - 1].abs() && d.abs() <= 100.0 * ETA * self.k[n - 2].abs()
        {
            return Recurrence::NearFactor;
        }

        let (a, b, u) = (self.a, self.b, self.u);
        self.h = self.v * b;
        if d.abs() >= c.abs() {
            self.e = a / d;
            self.f = c / d;
            self.g = u * b;
            self.a3 = (a + self.g) * self.e + self.h * (b / d);
            self.a1 = b * self.f - a;
            self.a7 = (self.f + u) * a + self.h;
            Recurrence::ByD
        } else {
            self.e = a / c;
            self.f = d / c;
            self.g = self.e * u;
            self.a3 = self.e * a + (self.g + self.h / c) * b;
            self.a1 = b - a * (d / c);
            self.a7 = a + self.g * d + self.h * self.f;
            Recurrence::ByC
        }
    }

    fn next_k(&mut self, kind: Recurrence) {
        let n = self.degree();
        if kind == Recurrence::NearFactor {
            self.k[0] = 0.0;
            self.k[1] = 0.0;
            for i in 2..n {
                self.k[i] = self.qk[i - 2];
            }
            return;
        }

        let temp = if kind == Recurrence::ByC { self.b } else { self.a };
        if self.a1.abs() > 10.0 * ETA * temp.abs() {
            self.a7 /= self.a1;
            self.a3 /= self.a1;
            self.k[0] = self.qp[0];
            self.k[1] = self.qp[1] - self.a7 * self.qp[0];
            for i in 2..n {
                self.k[i] = self.a3 * self.qk[i - 2] - self.a7 * self.qp[i - 1] + self.qp[i];
            }
        } else {
            self.k[0] = 0.0;
            self.k[1] = -self.a7 * self.qp[0];
            for i in 2..n {
                self.k[i] = self.a3 * self.qk[i - 2] - self.a7 * self.qp[i - 1];
            }
        }
    }

    /// New estimate `(u, v)` of the quadratic factor; `(0, 0)` when none can
    /// be formed.
    #[allow(clippy::float_cmp)]
    fn newest(&self, kind: Recurrence) -> (f64, f64) {
        if kind == Recurrence::NearFactor {
            return (0.0, 0.0);
        }
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let (u, v) = (self.u, self.v);
        let (a4, a5) = if kind == Recurrence::ByD {
            ((a + self.g) * self.f + self.h, (self.f + u) * c + v * d)
        } else {
            (a + u * b + self.h * self.f, c + (u + v * self.f) * d)
        };

        let n = self.degree();
        let b1 = -self.k[n - 1] / self.p[n];
        let b2 = -(self.k[n - 2] + b1 * self.p[n - 1]) / self.p[n];
        let c1 = v * b2 * self.a1;
        let c2 = b1 * self.a7;
        let c3 = b1 * b1 * self.a3;
        let c4 = c1 - c2 - c3;
        let temp = a5 + b1 * a4 - c4;
        if temp == 0.0 {
            return (0.0, 0.0);
        }
        (
            u - (u * (c3 + c2) + v * (b1 * self.a1 + b2 * self.a7)) / temp,
            v * (1.0 + c4 / temp),
        )
    }

    /// Stage three for a quadratic factor starting at `x^2 + uu x + vv`.
    /// On success the zeros are in `szr, szi, lzr, lzi` and `qp` holds the
    /// deflated polynomial.
    #[allow(clippy::float_cmp)]
    fn quadratic_iteration(&mut self, uu: f64, vv: f64) -> bool {
        let n = self.degree();
        let mut tried = false;
        let mut omp = 0.0_f64;
        let mut relstp = 0.0_f64;
        self.u = uu;
        self.v = vv;
        let mut j = 0;

        loop {
            let (small, large) = quadratic(1.0, self.u, self.v);
            self.szr = small.re;
            self.szi = small.im;
            self.lzr = large.re;
            self.lzi = large.im;

            // Real zeros that are neither close nor of opposite sign are left
            // to the linear iteration.
            if (self.szr.abs() - self.lzr.abs()).abs() > 0.01 * self.lzr.abs() {
                return false;
            }

            self.divide_p();
            let mp = (self.a - self.szr * self.b).abs() + (self.szi * self.b).abs();

            let zm = self.v.abs().sqrt();
            let mut ee = 2.0 * self.qp[0].abs();
            let t = -self.szr * self.b;
            for i in 1..n {
                ee = ee * zm + self.qp[i].abs();
            }
            ee = ee * zm + (self.a + t).abs();
            ee = (9.0 * ee - 7.0 * ((self.a + t).abs() + zm * self.b.abs()) + 2.0 * t.abs()) * ETA;

            if mp <= 20.0 * ee {
                return true;
            }

            j += 1;
            if j > 20 {
                return false;
            }

            if j >= 2 && relstp <= 0.01 && mp >= omp && !tried {
                // A cluster of zeros seems to stall convergence: take a few
                // fixed-shift steps from a nearby quadratic.
                let step: f64 = if relstp < ETA { ETA } else { relstp };
                relstp = step.sqrt();
                self.u -= self.u * relstp;
                self.v += self.v * relstp;
                self.divide_p();
                for _ in 0..5 {
                    let kind = self.calc_sc();
                    self.next_k(kind);
                }
                tried = true;
                j = 0;
            }
            omp = mp;

            let kind = self.calc_sc();
            self.next_k(kind);
            let kind = self.calc_sc();
            let (ui, vi) = self.newest(kind);
            if vi == 0.0 {
                return false;
            }
            relstp = ((vi - self.v) / vi).abs();
            self.u = ui;
            self.v = vi;
        }
    }

    /// Stage three for a real zero starting at `s`. Returns
    /// `(converged, cluster)`; `cluster` asks for a quadratic iteration near
    /// the updated `s` instead.
    fn real_iteration(&mut self, s_start: &mut f64) -> (bool, bool) {
        let n = self.degree();
        let mut s = *s_start;
        let mut omp = 0.0_f64;
        let mut t = 0.0_f64;
        let mut j = 0;

        loop {
            let mut pv = self.p[0];
            self.qp[0] = pv;
            for i in 1..=n {
                pv = pv * s + self.p[i];
                self.qp[i] = pv;
            }
            let mp = pv.abs();

            let ms = s.abs();
            let mut ee = 0.5 * self.qp[0].abs();
            for i in 1..=n {
                ee = ee * ms + self.qp[i].abs();
            }

            if mp <= 20.0 * ETA * (2.0 * ee - mp) {
                self.szr = s;
                self.szi = 0.0;
                return (true, false);
            }

            j += 1;
            if j > 10 {
                return (false, false);
            }
            if j >= 2 && t.abs() <= 0.001 * (s - t).abs() && mp > omp {
                *s_start = s;
                return (false, true);
            }
            omp = mp;

            let mut kv = self.k[0];
            self.qk[0] = kv;
            for i in 1..n {
                kv = kv * s + self.k[i];
                self.qk[i] = kv;
            }
            if kv.abs() <= self.k[n - 1].abs() * 10.0 * ETA {
                self.k[0] = 0.0;
                for i in 1..n {
                    self.k[i] = self.qk[i - 1];
                }
            } else {
                let tt = -pv / kv;
                self.k[0] = self.qp[0];
                for i in 1..n {
                    self.k[i] = tt * self.qk[i - 1] + self.qp[i];
                }
            }

            let mut kv = self.k[0];
            for i in 1..n {
                kv = kv * s + self.k[i];
            }
            t = if kv.abs() > self.k[n - 1].abs() * 10.0 * ETA {
                -pv / kv
            } else {
                0.0
            };
            s += t;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;
    use crate::polynomial::Polynomial;
    use proptest::prelude::*;

    fn residual_within(coeffs: &[f64], z: Complex, tolerance: f64) -> bool {
        let p = Polynomial::new(coeffs.to_vec()).unwrap();
        let value = p.evaluate_complex(z).modulus();
        let m = z.modulus();
        let scale: f64 = coeffs.iter().fold(0.0, |acc, c| acc * m + c.abs());
        value <= tolerance * scale.max(1.0)
    }

    fn residual_ok(coeffs: &[f64], z: Complex) -> bool {
        residual_within(coeffs, z, 1e-9)
    }

    fn sorted_real(mut zs: Vec<Complex>) -> Vec<f64> {
        zs.sort_by(|a, b| a.re.total_cmp(&b.re));
        zs.into_iter().map(|z| z.re).collect()
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(roots(&[]).is_err());
        assert!(roots(&[0.0, 1.0]).is_err());
        assert!(roots(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn constant_has_no_roots() {
        assert!(roots(&[3.0]).unwrap().is_empty());
    }

    #[test]
    fn zeros_at_origin_are_stripped() {
        let zs = roots(&[1.0, -1.0, 0.0, 0.0]).unwrap();
        assert_eq!(zs.len(), 3);
        assert_eq!(zs.iter().filter(|z| z.is_zero()).count(), 2);
    }

    #[test]
    fn double_root_quadratic() {
        let zs = roots(&[1.0, -2.0, 1.0]).unwrap();
        assert_eq!(zs, vec![Complex::real(1.0), Complex::real(1.0)]);
    }

    #[test]
    fn quintic_with_integer_roots() {
        // (x-1)(x-2)(x-3)(x-4)(x-5)
        let coeffs = [1.0, -15.0, 85.0, -225.0, 274.0, -120.0];
        let zs = roots(&coeffs).unwrap();
        assert_eq!(zs.len(), 5);
        for (r, expected) in sorted_real(zs).iter().zip(1..=5) {
            assert!((r - f64::from(expected)).abs() < 1e-8, "{r}");
        }
    }

    #[test]
    fn complex_pairs_come_out_conjugated() {
        // (x^2 + 1)(x^2 + 2x + 5)(x - 2)
        let p = Polynomial::new(vec![1.0, 0.0, 1.0])
            .unwrap()
            .multiply(&Polynomial::new(vec![1.0, 2.0, 5.0]).unwrap())
            .multiply(&Polynomial::new(vec![1.0, -2.0]).unwrap());
        let zs = roots(p.coefficients()).unwrap();
        assert_eq!(zs.len(), 5);
        for z in &zs {
            assert!(residual_ok(p.coefficients(), *z));
        }
        let rebuilt = Polynomial::from_roots(
            &zs.iter()
                .map(|z| if z.im.abs() < 1e-12 { Complex::real(z.re) } else { *z })
                .collect::<Vec<_>>(),
        )
        .unwrap();
        assert!(rebuilt.equal_to(&p, 1e-9));
    }

    #[test]
    fn wide_dynamic_range() {
        let coeffs = [1e-8, 1.0, -1e8 - 1.0, 1e8];
        let zs = roots(&coeffs).unwrap();
        assert_eq!(zs.len(), 3);
        for z in zs {
            assert!(residual_ok(&coeffs, z));
        }
    }

    #[test]
    fn tiny_coefficients_are_rescaled() {
        // RUST_LOG=planar=debug shows the scaling factor.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        let coeffs = [1e-300, -6e-300, 11e-300, -6e-300];
        let zs = sorted_real(roots(&coeffs).unwrap());
        assert_eq!(zs.len(), 3);
        for (z, expected) in zs.iter().zip([1.0, 2.0, 3.0]) {
            assert!((z - expected).abs() < 1e-8);
        }
    }

    #[test]
    fn degree_thirteen_with_mixed_signs() {
        let coeffs = [
            1.0, 7.0867, -7.0513, 3.25, -9.5, 0.75, 4.125, -2.0, 8.5, -6.25, 1.5, -0.5, 9.0, -3.75,
        ];
        let zs = roots(&coeffs).unwrap();
        assert_eq!(zs.len(), 13);
        for z in zs {
            assert!(residual_within(&coeffs, z, 1e-7));
        }
    }

    #[test]
    fn exhausted_restarts_report_no_convergence() {
        let cubic = [1.0, -6.0, 11.0, -6.0];
        let err = roots_with_restarts(&cubic, 0).unwrap_err();
        assert!(matches!(
            err,
            PlanarError::Polynomial(PolynomialError::NoConvergence {
                degree: 3,
                restarts: 0
            })
        ));
        // Degree two and below are solved in closed form and never restart.
        assert_eq!(roots_with_restarts(&[1.0, -3.0, 2.0], 0).unwrap().len(), 2);
        assert_eq!(roots(&cubic).unwrap().len(), 3);
    }

    proptest! {
        #[test]
        fn random_monic_polynomials_converge(
            tail in prop::collection::vec(-10.0f64..10.0, 3..=20),
        ) {
            let mut coeffs = vec![1.0];
            coeffs.extend(tail);
            let zs = roots(&coeffs);
            prop_assert!(zs.is_ok(), "{:?}", zs);
            let zs = zs.unwrap();
            prop_assert_eq!(zs.len(), coeffs.len() - 1);
            for z in &zs {
                prop_assert!(residual_within(&coeffs, *z, 1e-7), "{:?}", z);
            }
        }

        #[test]
        fn recovers_distinct_integer_roots(
            set in prop::collection::btree_set(-10i32..10, 1..7),
            lead in prop_oneof![Just(1.0), Just(-2.5), Just(0.125)],
        ) {
            let expected: Vec<f64> = set.iter().map(|&r| f64::from(r)).collect();
            let roots_in: Vec<Complex> = expected.iter().map(|&r| Complex::real(r)).collect();
            let p = Polynomial::from_roots(&roots_in).unwrap().scalar_multiply(lead);
            let zs = roots(p.coefficients()).unwrap();
            prop_assert_eq!(zs.len(), expected.len());
            for z in &zs {
                prop_assert!(residual_ok(p.coefficients(), *z));
            }
        }
    }
}
