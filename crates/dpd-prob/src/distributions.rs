//! The closed set of named distributions and their declarative specs.
//!
//! [`Distribution`] dispatches every query to the canonical per-distribution
//! module in this crate. [`DistributionSpec`] is the serde form used to
//! describe a distribution in JSON or YAML:
//!
//! ```yaml
//! kind: binomial
//! n: 10
//! p: 0.25
//! ```

use dpd_core::{DiscreteModel, Result, Support};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bernoulli::Bernoulli;
use crate::binomial::Binomial;
use crate::geometric::Geometric;
use crate::poisson::Poisson;
use crate::uniform::Uniform;

/// Declarative description of a [`Distribution`], tagged by `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionSpec {
    /// `Bernoulli(p)`
    Bernoulli {
        /// Success probability
        p: f64,
    },
    /// `B(n, p)`
    Binomial {
        /// Number of trials
        n: u64,
        /// Success probability per trial
        p: f64,
    },
    /// `G(p)`
    Geometric {
        /// Success probability per trial
        p: f64,
    },
    /// `Poisson(lambda)`
    Poisson {
        /// Rate
        lambda: f64,
    },
    /// `Uniform(m, n)`
    Uniform {
        /// Lowest value
        m: i64,
        /// Highest value
        n: i64,
    },
}

impl DistributionSpec {
    /// Validate parameters and build the distribution.
    pub fn build(&self) -> Result<Distribution> {
        Distribution::from_spec(self)
    }
}

/// One of the supported discrete distributions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Single trial
    Bernoulli(Bernoulli),
    /// Successes in `n` trials
    Binomial(Binomial),
    /// Trials up to the first success
    Geometric(Geometric),
    /// Event counts
    Poisson(Poisson),
    /// Equally likely integers
    Uniform(Uniform),
}

impl Distribution {
    /// Build from a declarative spec.
    pub fn from_spec(spec: &DistributionSpec) -> Result<Self> {
        Ok(match *spec {
            DistributionSpec::Bernoulli { p } => Bernoulli::new(p)?.into(),
            DistributionSpec::Binomial { n, p } => Binomial::new(n, p)?.into(),
            DistributionSpec::Geometric { p } => Geometric::new(p)?.into(),
            DistributionSpec::Poisson { lambda } => Poisson::new(lambda)?.into(),
            DistributionSpec::Uniform { m, n } => Uniform::new(m, n)?.into(),
        })
    }

    /// Parse a JSON spec and build it.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let spec: DistributionSpec = serde_json::from_str(s)?;
        Self::from_spec(&spec)
    }

    /// Parse a YAML spec and build it.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let spec: DistributionSpec = serde_yaml_ng::from_str(s)?;
        Self::from_spec(&spec)
    }

    /// Declarative spec that rebuilds this distribution.
    pub fn to_spec(&self) -> DistributionSpec {
        match self {
            Distribution::Bernoulli(d) => DistributionSpec::Bernoulli { p: d.p() },
            Distribution::Binomial(d) => DistributionSpec::Binomial { n: d.n(), p: d.p() },
            Distribution::Geometric(d) => DistributionSpec::Geometric { p: d.p() },
            Distribution::Poisson(d) => DistributionSpec::Poisson { lambda: d.lambda() },
            Distribution::Uniform(d) => DistributionSpec::Uniform { m: d.m(), n: d.n() },
        }
    }

    fn inner(&self) -> &dyn DiscreteModel {
        match self {
            Distribution::Bernoulli(d) => d,
            Distribution::Binomial(d) => d,
            Distribution::Geometric(d) => d,
            Distribution::Poisson(d) => d,
            Distribution::Uniform(d) => d,
        }
    }
}

impl DiscreteModel for Distribution {
    fn name(&self) -> String {
        self.inner().name()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        self.inner().parameters()
    }

    fn support(&self) -> Support {
        self.inner().support()
    }

    fn mass(&self, x: i64) -> f64 {
        self.inner().mass(x)
    }

    fn closed_form_cdf(&self, x: i64) -> Option<f64> {
        self.inner().closed_form_cdf(x)
    }

    fn mean(&self) -> f64 {
        self.inner().mean()
    }

    fn variance(&self) -> f64 {
        self.inner().variance()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<Bernoulli> for Distribution {
    fn from(d: Bernoulli) -> Self {
        Distribution::Bernoulli(d)
    }
}

impl From<Binomial> for Distribution {
    fn from(d: Binomial) -> Self {
        Distribution::Binomial(d)
    }
}

impl From<Geometric> for Distribution {
    fn from(d: Geometric) -> Self {
        Distribution::Geometric(d)
    }
}

impl From<Poisson> for Distribution {
    fn from(d: Poisson) -> Self {
        Distribution::Poisson(d)
    }
}

impl From<Uniform> for Distribution {
    fn from(d: Uniform) -> Self {
        Distribution::Uniform(d)
    }
}

impl TryFrom<DistributionSpec> for Distribution {
    type Error = dpd_core::Error;

    fn try_from(spec: DistributionSpec) -> Result<Self> {
        Self::from_spec(&spec)
    }
}
