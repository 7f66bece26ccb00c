//! Binomial distribution.

use dpd_core::numeric::ExactSum;
use dpd_core::{DiscreteModel, Error, RankedRow, Result, Support};
use std::fmt;

use crate::math::{ln_choose, open_probability};

/// Number of successes in `n` independent trials with success probability
/// `p`: `X ~ B(n, p)` on `{0, ..., n}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Create `B(n, p)` with `0 < p < 1`.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        if i64::try_from(n).is_err() {
            return Err(Error::Validation(format!("n must be <= {}, got {}", i64::MAX, n)));
        }
        Ok(Self { n, p: open_probability("p", p)? })
    }

    /// Number of trials
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability per trial
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Every outcome ranked by ascending probability (ties broken by `x`),
    /// with the running cumulative probability.
    ///
    /// Reading the table top-down gives the least likely outcomes first, so a
    /// tail region such as "outcomes with cumulative probability <= 0.05"
    /// is a prefix of the result.
    pub fn ranked_outcomes(&self) -> Vec<RankedRow> {
        let mut outcomes: Vec<(i64, f64)> =
            (0..=self.n as i64).map(|x| (x, self.mass(x))).collect();
        outcomes.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        let mut acc = ExactSum::new();
        outcomes
            .into_iter()
            .map(|(x, p)| {
                acc.add(p);
                RankedRow { x, p, cum_p: acc.value().min(1.0) }
            })
            .collect()
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X ~ B({},{})", self.n, self.p)
    }
}

impl DiscreteModel for Binomial {
    fn name(&self) -> String {
        self.to_string()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("n", self.n as f64), ("p", self.p)]
    }

    fn support(&self) -> Support {
        Support::finite(0, self.n as i64)
    }

    /// `C(n,x) p^x (1-p)^(n-x)`
    fn mass(&self, x: i64) -> f64 {
        let Ok(k) = u64::try_from(x) else { return 0.0 };
        if k > self.n {
            return 0.0;
        }
        let kf = k as f64;
        let nf = self.n as f64;
        (ln_choose(self.n, k) + kf * self.p.ln() + (nf - kf) * (-self.p).ln_1p()).exp()
    }

    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }
}
