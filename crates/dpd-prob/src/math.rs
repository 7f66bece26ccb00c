//! Log-space helpers shared by the point-mass formulas.
//!
//! Factorials and large integer powers overflow `f64` long before the
//! probabilities they produce become unrepresentable, so masses are
//! assembled as a sum of logarithms and exponentiated once.

use dpd_core::{Error, Result};
use statrs::function::factorial;

/// `ln C(n, k)`; `k <= n` is the caller's responsibility.
#[inline]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    factorial::ln_binomial(n, k)
}

/// `ln k!`
#[inline]
pub fn ln_factorial(k: u64) -> f64 {
    factorial::ln_factorial(k)
}

/// `(1 - p)^k` via `exp(k * ln(1 - p))`, accurate for small `p`.
#[inline]
pub fn pow_complement(p: f64, k: f64) -> f64 {
    (k * (-p).ln_1p()).exp()
}

/// `1 - (1 - p)^k` without cancellation when `(1 - p)^k` is close to 1.
#[inline]
pub fn one_minus_pow_complement(p: f64, k: f64) -> f64 {
    -(k * (-p).ln_1p()).exp_m1()
}

/// Validate a probability parameter in the open interval `(0, 1)`.
pub fn open_probability(name: &str, p: f64) -> Result<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(Error::Validation(format!("{} must be finite and in (0,1), got {}", name, p)));
    }
    Ok(p)
}

/// Validate a finite, strictly positive parameter.
pub fn positive(name: &str, v: f64) -> Result<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(Error::Validation(format!("{} must be finite and > 0, got {}", name, v)));
    }
    Ok(v)
}
