//! Real roots of low-degree polynomials (used by axiom 6).
//!
//! - `solve_quadratic`: `a x² + b x + c`, reduces to linear when `a ≈ 0`.
//! - `solve_cubic`: `a x³ + b x² + c x + d`, reduces to quadratic when the
//!   leading coefficient is negligible relative to the others; otherwise
//!   Cardano (one real root) or the trigonometric form (three real roots),
//!   followed by a few Newton steps.
//!
//! Roots are returned sorted and deduplicated within `eps`. Candidates whose
//! residual is not small relative to the polynomial's term magnitudes are
//! dropped.

use std::f64::consts::TAU;

/// Coefficients below this fraction of the largest one count as zero.
const RELATIVE_ZERO: f64 = 1e-12;
const NEWTON_STEPS: usize = 4;
/// Largest accepted `|f(x)|` as a fraction of `Σ |cᵢ xⁱ|`.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

pub fn solve_quadratic(a: f64, b: f64, c: f64, eps: f64) -> Vec<f64> {
    let scale = a.abs().max(b.abs()).max(c.abs());
    if scale == 0.0 {
        return Vec::new();
    }
    if a.abs() <= RELATIVE_ZERO * scale {
        if b.abs() <= RELATIVE_ZERO * scale {
            return Vec::new();
        }
        return finish(vec![-c / b], eps, &[b, c]);
    }
    let disc = b * b - 4.0 * a * c;
    let roots = if disc.abs() <= eps * scale * scale {
        vec![-b / (2.0 * a)]
    } else if disc < 0.0 {
        Vec::new()
    } else {
        // Numerically stable pairing (avoids cancellation in -b ± √disc).
        let q = -0.5 * (b + b.signum() * disc.sqrt());
        if q == 0.0 {
            vec![0.0]
        } else {
            vec![q / a, c / q]
        }
    };
    finish(roots, eps, &[a, b, c])
}

pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64, eps: f64) -> Vec<f64> {
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs());
    if scale == 0.0 {
        return Vec::new();
    }
    if a.abs() <= RELATIVE_ZERO * scale {
        return solve_quadratic(b, c, d, eps);
    }
    // Depressed cubic t³ + p t + q with x = t − b/(3a).
    let (b, c, d) = (b / a, c / a, d / a);
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let disc = q * q / 4.0 + p * p * p / 27.0;

    let q_term = q * q / 4.0;
    let p_term = (p * p * p / 27.0).abs();
    let ts: Vec<f64> = if p_term <= RELATIVE_ZERO * q_term {
        // t³ + q = 0.
        vec![(-q).cbrt()]
    } else if disc.abs() <= RELATIVE_ZERO * q_term.max(p_term) {
        // Double root plus a simple root.
        vec![3.0 * q / p, -1.5 * q / p]
    } else if disc > 0.0 {
        let s = disc.sqrt();
        vec![(-q / 2.0 + s).cbrt() + (-q / 2.0 - s).cbrt()]
    } else {
        let r = 2.0 * (-p / 3.0).sqrt();
        let arg = ((3.0 * q) / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
        let phi = arg.acos() / 3.0;
        (0..3)
            .map(|k| r * (phi - TAU * k as f64 / 3.0).cos())
            .collect()
    };
    let polished = ts
        .into_iter()
        .map(|t| newton(t - shift, |x| ((x + b) * x + c) * x + d, |x| (3.0 * x + 2.0 * b) * x + c))
        .collect();
    finish(polished, eps, &[1.0, b, c, d])
}

fn newton(mut x: f64, f: impl Fn(f64) -> f64, df: impl Fn(f64) -> f64) -> f64 {
    for _ in 0..NEWTON_STEPS {
        let slope = df(x);
        if slope.abs() < 1e-14 {
            break;
        }
        let next = x - f(x) / slope;
        if !next.is_finite() {
            break;
        }
        x = next;
    }
    x
}

/// `coeffs` runs from the leading coefficient down to the constant term.
fn finish(mut roots: Vec<f64>, eps: f64, coeffs: &[f64]) -> Vec<f64> {
    let tolerance = RESIDUAL_TOLERANCE.max(eps);
    // Floor for roots near zero, where every term is rounding noise.
    let floor = eps * coeffs.iter().fold(0.0f64, |m, c| m.max(c.abs()));
    roots.retain(|&x| {
        if !x.is_finite() {
            return false;
        }
        let (value, magnitude) = coeffs.iter().fold((0.0, 0.0), |(v, m), &c| {
            (v * x + c, m * x.abs() + c.abs())
        });
        value.abs() <= tolerance * magnitude.max(floor)
    });
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    roots.dedup_by(|a, b| (*a - *b).abs() < eps.max(1e-9));
    roots
}
