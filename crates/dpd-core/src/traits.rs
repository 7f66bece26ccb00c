//! Core traits for discrete distributions
//!
//! A distribution only supplies its closed-form pieces (point mass, optional
//! cdf, moments, support). The query surface shared by every distribution
//! (validated pmf/cdf tables, quantiles, range tables) is provided on top of
//! those pieces by [`crate::query`].

use crate::query;
use crate::types::{CdfRow, PmfRow, QuantileRow, Support};
use crate::Result;

/// A discrete random variable X with fixed parameters.
///
/// Implementors are immutable value objects; every query is side-effect free.
pub trait DiscreteModel: Send + Sync {
    /// Display name, e.g. `X ~ B(10,0.25)`
    fn name(&self) -> String;

    /// Parameter names and values, in declaration order
    fn parameters(&self) -> Vec<(&'static str, f64)>;

    /// Integer support range
    fn support(&self) -> Support;

    /// `P(X = x)` for `x` inside the support (not range checked)
    fn mass(&self, x: i64) -> f64;

    /// Closed-form `P(X <= x)` for `x` inside the support, if the
    /// distribution has one. `None` selects the summation strategy.
    fn closed_form_cdf(&self, _x: i64) -> Option<f64> {
        None
    }

    /// Expected value
    fn mean(&self) -> f64;

    /// Variance
    fn variance(&self) -> f64;

    /// Probability mass table for `xs`, in input order.
    fn pmf(&self, xs: &[i64]) -> Result<Vec<PmfRow>> {
        query::pmf(self, xs)
    }

    /// Cumulative distribution table for `xs`, in input order.
    fn cdf(&self, xs: &[i64]) -> Result<Vec<CdfRow>> {
        query::cdf(self, xs)
    }

    /// Quantile table for `quantiles`, each in (0, 1), in ascending order of `a`.
    fn inverse_cdf(&self, quantiles: &[f64]) -> Result<Vec<QuantileRow>> {
        query::inverse_cdf(self, quantiles)
    }

    /// pmf of every integer in `[start, end]`.
    fn pmf_range(&self, start: i64, end: i64) -> Result<Vec<PmfRow>> {
        query::pmf(self, &query::inclusive_range(start, end)?)
    }

    /// cdf of every integer in `[start, end]`.
    fn cdf_range(&self, start: i64, end: i64) -> Result<Vec<CdfRow>> {
        query::cdf(self, &query::inclusive_range(start, end)?)
    }
}
