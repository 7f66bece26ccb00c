//! Geometric distribution (number of trials up to and including the first success).

use dpd_core::{DiscreteModel, Result, Support};
use std::fmt;

use crate::math::{one_minus_pow_complement, open_probability, pow_complement};

/// Trials up to the first success with success probability `p`:
/// `X ~ G(p)` on `{1, 2, ...}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Create `G(p)` with `0 < p < 1`.
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self { p: open_probability("p", p)? })
    }

    /// Success probability per trial
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl fmt::Display for Geometric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X ~ G({})", self.p)
    }
}

impl DiscreteModel for Geometric {
    fn name(&self) -> String {
        self.to_string()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("p", self.p)]
    }

    fn support(&self) -> Support {
        Support::from_lower(1)
    }

    /// `(1-p)^(x-1) p`
    fn mass(&self, x: i64) -> f64 {
        if x < 1 {
            return 0.0;
        }
        pow_complement(self.p, (x - 1) as f64) * self.p
    }

    /// `1 - (1-p)^x`
    fn closed_form_cdf(&self, x: i64) -> Option<f64> {
        Some(if x < 1 { 0.0 } else { one_minus_pow_complement(self.p, x as f64) })
    }

    fn mean(&self) -> f64 {
        1.0 / self.p
    }

    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}
