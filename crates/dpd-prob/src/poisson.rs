//! Poisson distribution.

use dpd_core::{DiscreteModel, Result, Support};
use std::fmt;

use crate::math::{ln_factorial, positive};

/// Count of events at rate `lambda`: `X ~ Poisson(lambda)` on `{0, 1, ...}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Create `Poisson(lambda)` with `lambda > 0`.
    pub fn new(lambda: f64) -> Result<Self> {
        Ok(Self { lambda: positive("lambda", lambda)? })
    }

    /// Rate parameter
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl fmt::Display for Poisson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X ~ Poisson({})", self.lambda)
    }
}

impl DiscreteModel for Poisson {
    fn name(&self) -> String {
        self.to_string()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("lambda", self.lambda)]
    }

    fn support(&self) -> Support {
        Support::from_lower(0)
    }

    /// `lambda^x e^-lambda / x!`
    fn mass(&self, x: i64) -> f64 {
        let Ok(k) = u64::try_from(x) else { return 0.0 };
        (k as f64 * self.lambda.ln() - self.lambda - ln_factorial(k)).exp()
    }

    fn mean(&self) -> f64 {
        self.lambda
    }

    fn variance(&self) -> f64 {
        self.lambda
    }
}
