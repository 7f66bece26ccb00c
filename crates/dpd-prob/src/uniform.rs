//! Discrete uniform distribution.

use dpd_core::{DiscreteModel, Error, Result, Support};
use std::fmt;

/// Equally likely integers `m, m+1, ..., n`: `X ~ Uniform(m, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uniform {
    m: i64,
    n: i64,
}

impl Uniform {
    /// Create `Uniform(m, n)` with `m <= n`.
    pub fn new(m: i64, n: i64) -> Result<Self> {
        if m > n {
            return Err(Error::Validation(format!("Uniform requires m <= n, got m={}, n={}", m, n)));
        }
        Ok(Self { m, n })
    }

    /// Lowest value
    pub fn m(&self) -> i64 {
        self.m
    }

    /// Highest value
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Number of values in the range, as `f64`.
    fn count(&self) -> f64 {
        (i128::from(self.n) - i128::from(self.m) + 1) as f64
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X ~ Uniform({}, {})", self.m, self.n)
    }
}

impl DiscreteModel for Uniform {
    fn name(&self) -> String {
        self.to_string()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("m", self.m as f64), ("n", self.n as f64)]
    }

    fn support(&self) -> Support {
        Support::finite(self.m, self.n)
    }

    /// `1 / (n-m+1)`
    fn mass(&self, x: i64) -> f64 {
        if x < self.m || x > self.n {
            return 0.0;
        }
        1.0 / self.count()
    }

    /// `(x-m+1) / (n-m+1)`
    fn closed_form_cdf(&self, x: i64) -> Option<f64> {
        let below = (i128::from(x) - i128::from(self.m) + 1).clamp(0, i128::from(u64::MAX));
        Some((below as f64 / self.count()).min(1.0))
    }

    fn mean(&self) -> f64 {
        (i128::from(self.m) + i128::from(self.n)) as f64 / 2.0
    }

    /// `(n-m)(n-m+2) / 12`
    fn variance(&self) -> f64 {
        let d = (i128::from(self.n) - i128::from(self.m)) as f64;
        d * (d + 2.0) / 12.0
    }
}
