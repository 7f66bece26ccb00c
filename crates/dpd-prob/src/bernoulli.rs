//! Bernoulli distribution.

use dpd_core::{DiscreteModel, Result, Support};
use std::fmt;

use crate::math::open_probability;

/// Single trial with success probability `p`: `X ~ Bernoulli(p)` on `{0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Create `Bernoulli(p)` with `0 < p < 1`.
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self { p: open_probability("p", p)? })
    }

    /// Success probability
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl fmt::Display for Bernoulli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X ~ Bernoulli({})", self.p)
    }
}

impl DiscreteModel for Bernoulli {
    fn name(&self) -> String {
        self.to_string()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("p", self.p)]
    }

    fn support(&self) -> Support {
        Support::finite(0, 1)
    }

    /// `p^x (1-p)^(1-x)`
    fn mass(&self, x: i64) -> f64 {
        match x {
            0 => 1.0 - self.p,
            1 => self.p,
            _ => 0.0,
        }
    }

    fn mean(&self) -> f64 {
        self.p
    }

    fn variance(&self) -> f64 {
        self.p * (1.0 - self.p)
    }
}
