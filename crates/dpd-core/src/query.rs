//! Generic pmf / cdf / inverse-cdf algorithms over any [`DiscreteModel`].

use crate::numeric::{ExactSum, clamp_probability};
use crate::traits::DiscreteModel;
use crate::types::{CdfRow, PmfRow, QuantileRow};
use crate::{Error, Result};

/// Steps after which an inverse-cdf walk on an unbounded support is logged.
const LONG_WALK_STEPS: u64 = 1_000_000;

/// Largest gap between a quantile target and the total a model's computed
/// masses reach that is still attributed to rounding in the masses.
pub const TAIL_TOLERANCE: f64 = 1e-10;

/// Fail with [`Error::OutOfSupport`] unless `x` lies in the model's support.
pub fn check_in_support<M: DiscreteModel + ?Sized>(model: &M, x: i64) -> Result<()> {
    let support = model.support();
    if support.contains(x) { Ok(()) } else { Err(Error::OutOfSupport { x, support }) }
}

/// Every integer in `[start, end]`.
pub fn inclusive_range(start: i64, end: i64) -> Result<Vec<i64>> {
    if start > end {
        return Err(Error::Validation(format!("start must be <= end, got {}..={}", start, end)));
    }
    Ok((start..=end).collect())
}

fn finite_lower_bound<M: DiscreteModel + ?Sized>(model: &M, what: &str) -> Result<i64> {
    let support = model.support();
    support.lo.ok_or_else(|| {
        Error::Precondition(format!(
            "{} requires a finite lower bound; {} has support {}",
            what,
            model.name(),
            support
        ))
    })
}

/// pmf table. All of `xs` are validated before any row is produced.
pub fn pmf<M: DiscreteModel + ?Sized>(model: &M, xs: &[i64]) -> Result<Vec<PmfRow>> {
    for &x in xs {
        check_in_support(model, x)?;
    }
    Ok(xs.iter().map(|&x| PmfRow { x, p: clamp_probability(model.mass(x)) }).collect())
}

/// cdf table.
///
/// Uses the model's closed-form cdf when it has one. Otherwise walks a single
/// exact running sum of the pmf from the lower bound up to `max(xs)`,
/// visiting the requested values in ascending order.
pub fn cdf<M: DiscreteModel + ?Sized>(model: &M, xs: &[i64]) -> Result<Vec<CdfRow>> {
    for &x in xs {
        check_in_support(model, x)?;
    }
    if xs.is_empty() {
        return Ok(Vec::new());
    }

    let closed: Option<Vec<f64>> = xs.iter().map(|&x| model.closed_form_cdf(x)).collect();
    let values = match closed {
        Some(values) => values,
        None => summed_cdf(model, xs)?,
    };

    Ok(xs
        .iter()
        .zip(values)
        .map(|(&x, f)| CdfRow { x, f: clamp_probability(f) })
        .collect())
}

/// cdf by cumulative summation. `xs` must be non-empty and inside the support.
fn summed_cdf<M: DiscreteModel + ?Sized>(model: &M, xs: &[i64]) -> Result<Vec<f64>> {
    let lo = finite_lower_bound(model, "cdf by summation")?;

    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by_key(|&i| xs[i]);
    let top = xs[order[order.len() - 1]];
    log::debug!("{}: cdf by summation over [{}, {}]", model.name(), lo, top);

    let mut out = vec![0.0; xs.len()];
    let mut cursor = lo;
    let mut acc = ExactSum::with_value(model.mass(lo));
    for i in order {
        let target = xs[i];
        while cursor < target {
            cursor += 1;
            acc.add(model.mass(cursor));
        }
        out[i] = acc.value();
    }
    Ok(out)
}

/// Ascending walk over the support carrying `F(x)` exactly as [`cdf`]
/// reports it: the closed form when the model has one, otherwise the exact
/// running sum of the pmf rounded to `f64`.
struct CdfWalk<'a, M: DiscreteModel + ?Sized> {
    model: &'a M,
    x: i64,
    acc: ExactSum,
    f: f64,
    /// Smallest `x` at which `f` reached its largest value so far.
    peak_x: i64,
    peak_f: f64,
}

impl<'a, M: DiscreteModel + ?Sized> CdfWalk<'a, M> {
    fn start(model: &'a M, lo: i64) -> Self {
        let acc = ExactSum::with_value(model.mass(lo));
        let f = Self::reported(model, lo, &acc);
        Self { model, x: lo, acc, f, peak_x: lo, peak_f: f }
    }

    fn reported(model: &M, x: i64, acc: &ExactSum) -> f64 {
        clamp_probability(model.closed_form_cdf(x).unwrap_or_else(|| acc.value()))
    }

    /// Move to `x + 1`; returns the mass added there.
    fn advance(&mut self) -> Result<f64> {
        self.x = self.x.checked_add(1).ok_or_else(|| {
            Error::Computation(format!("{}: quantile search overflowed i64", self.model.name()))
        })?;
        let m = self.model.mass(self.x);
        self.acc.add(m);
        self.f = Self::reported(self.model, self.x, &self.acc);
        if self.f > self.peak_f {
            self.peak_f = self.f;
            self.peak_x = self.x;
        }
        Ok(m)
    }
}

/// Quantile table: for each `a` the smallest `x` in the support with
/// `F(x) >= a`, where `F` is the value [`cdf`] reports for `x`.
///
/// Quantiles are processed in ascending order so that a single cursor and
/// running cumulative probability serve every query.
///
/// On an unbounded support the computed `F` may level off a few ulps below
/// 1. Once the pmf underflows to zero past the mean the tail is below `f64`
/// resolution; a target within [`TAIL_TOLERANCE`] of the levelled value
/// resolves to the smallest `x` attaining it.
pub fn inverse_cdf<M: DiscreteModel + ?Sized>(
    model: &M,
    quantiles: &[f64],
) -> Result<Vec<QuantileRow>> {
    for &a in quantiles {
        if !(a > 0.0 && a < 1.0) {
            return Err(Error::QuantileOutOfRange { a });
        }
    }
    if quantiles.is_empty() {
        return Ok(Vec::new());
    }

    let mut sorted = quantiles.to_vec();
    sorted.sort_by(f64::total_cmp);

    let support = model.support();
    let lo = finite_lower_bound(model, "inverse cdf")?;
    let mean = model.mean();

    let mut walk = CdfWalk::start(model, lo);
    let mut exhausted = false;
    let mut steps: u64 = 0;
    let mut rows = Vec::with_capacity(sorted.len());

    for a in sorted {
        let qa = loop {
            if walk.f >= a {
                break walk.x;
            }
            // F(hi) = 1 >= a; a shortfall here is rounding only.
            if support.hi.is_some_and(|hi| walk.x >= hi) {
                break walk.x;
            }
            if exhausted {
                if a - walk.peak_f <= TAIL_TOLERANCE {
                    log::debug!(
                        "{}: target {} above computed total {}; using x = {}",
                        model.name(),
                        a,
                        walk.peak_f,
                        walk.peak_x
                    );
                    break walk.peak_x;
                }
                return Err(Error::Computation(format!(
                    "{}: cumulative probability stalled at {} below {} (x = {})",
                    model.name(),
                    walk.peak_f,
                    a,
                    walk.x
                )));
            }

            let m = walk.advance()?;
            if m == 0.0 && support.hi.is_none() && (walk.x as f64) > mean {
                exhausted = true;
            }

            steps += 1;
            if steps == LONG_WALK_STEPS {
                log::warn!(
                    "{}: quantile search walked {} steps from {}; far tail queries are linear in distance",
                    model.name(),
                    steps,
                    lo
                );
            }
        };
        rows.push(QuantileRow { a, qa });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Support;
    use approx::assert_relative_eq;

    /// P(X = k) = 2^-(k+1) on {0, 1, ...}.
    struct Halving;

    impl DiscreteModel for Halving {
        fn name(&self) -> String {
            "X ~ Halving".into()
        }
        fn parameters(&self) -> Vec<(&'static str, f64)> {
            vec![]
        }
        fn support(&self) -> Support {
            Support::from_lower(0)
        }
        fn mass(&self, x: i64) -> f64 {
            0.5f64.powi(x as i32 + 1)
        }
        fn mean(&self) -> f64 {
            1.0
        }
        fn variance(&self) -> f64 {
            2.0
        }
    }

    /// Same masses, support declared without a lower bound.
    struct Unanchored;

    impl DiscreteModel for Unanchored {
        fn name(&self) -> String {
            "X ~ Unanchored".into()
        }
        fn parameters(&self) -> Vec<(&'static str, f64)> {
            vec![]
        }
        fn support(&self) -> Support {
            Support::new(None, None)
        }
        fn mass(&self, x: i64) -> f64 {
            Halving.mass(x)
        }
        fn mean(&self) -> f64 {
            1.0
        }
        fn variance(&self) -> f64 {
            2.0
        }
    }

    /// Uniform on {0, ..., 5} with the cdf given in closed form.
    struct SixFaces;

    impl DiscreteModel for SixFaces {
        fn name(&self) -> String {
            "X ~ SixFaces".into()
        }
        fn parameters(&self) -> Vec<(&'static str, f64)> {
            vec![]
        }
        fn support(&self) -> Support {
            Support::new(Some(0), Some(5))
        }
        fn mass(&self, _x: i64) -> f64 {
            1.0 / 6.0
        }
        fn closed_form_cdf(&self, x: i64) -> Option<f64> {
            Some((x + 1) as f64 / 6.0)
        }
        fn mean(&self) -> f64 {
            2.5
        }
        fn variance(&self) -> f64 {
            35.0 / 12.0
        }
    }

    /// Half the mass at each end of {0, ..., 3}, nothing in between.
    struct Gapped;

    impl DiscreteModel for Gapped {
        fn name(&self) -> String {
            "X ~ Gapped".into()
        }
        fn parameters(&self) -> Vec<(&'static str, f64)> {
            vec![]
        }
        fn support(&self) -> Support {
            Support::new(Some(0), Some(3))
        }
        fn mass(&self, x: i64) -> f64 {
            if x == 0 || x == 3 { 0.5 } else { 0.0 }
        }
        fn mean(&self) -> f64 {
            1.5
        }
        fn variance(&self) -> f64 {
            2.25
        }
    }

    /// Halving masses scaled by `scale`, so they total `scale` instead of 1.
    struct Scaled {
        scale: f64,
    }

    impl DiscreteModel for Scaled {
        fn name(&self) -> String {
            format!("X ~ Scaled({})", self.scale)
        }
        fn parameters(&self) -> Vec<(&'static str, f64)> {
            vec![("scale", self.scale)]
        }
        fn support(&self) -> Support {
            Support::from_lower(0)
        }
        fn mass(&self, x: i64) -> f64 {
            self.scale * Halving.mass(x)
        }
        fn mean(&self) -> f64 {
            1.0
        }
        fn variance(&self) -> f64 {
            2.0
        }
    }

    #[test]
    fn test_summed_cdf_preserves_input_order_and_duplicates() {
        let rows = cdf(&Halving, &[2, 0, 2, 1]).unwrap();
        let xs: Vec<i64> = rows.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![2, 0, 2, 1]);
        assert_relative_eq!(rows[0].f, 0.875, epsilon = 1e-15);
        assert_relative_eq!(rows[1].f, 0.5, epsilon = 1e-15);
        assert_relative_eq!(rows[2].f, 0.875, epsilon = 1e-15);
        assert_relative_eq!(rows[3].f, 0.75, epsilon = 1e-15);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(pmf(&Halving, &[]).unwrap().is_empty());
        assert!(cdf(&Halving, &[]).unwrap().is_empty());
        assert!(inverse_cdf(&Halving, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_support_fails_without_partial_result() {
        let err = pmf(&Halving, &[0, 1, -1]).unwrap_err();
        assert!(matches!(err, Error::OutOfSupport { x: -1, .. }));
        let err = cdf(&Halving, &[3, -2]).unwrap_err();
        assert!(matches!(err, Error::OutOfSupport { x: -2, .. }));
    }

    #[test]
    fn test_summation_requires_lower_bound() {
        let err = cdf(&Unanchored, &[3]).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)), "{}", err);
        let err = inverse_cdf(&Unanchored, &[0.5]).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)), "{}", err);
        // pmf never needs the lower bound
        assert_eq!(pmf(&Unanchored, &[0]).unwrap()[0].p, 0.5);
    }

    #[test]
    fn test_inverse_cdf_sorts_and_reuses_cursor() {
        let rows = inverse_cdf(&Halving, &[0.9, 0.1, 0.5, 0.75]).unwrap();
        let got: Vec<(f64, i64)> = rows.iter().map(|r| (r.a, r.qa)).collect();
        assert_eq!(got, vec![(0.1, 0), (0.5, 0), (0.75, 1), (0.9, 3)]);
    }

    #[test]
    fn test_inverse_cdf_rejects_bounds_and_nan() {
        for a in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let err = inverse_cdf(&Halving, &[0.5, a]).unwrap_err();
            assert!(err.is_range_error(), "a={}", a);
        }
    }

    #[test]
    fn test_inverse_cdf_follows_closed_form_values() {
        // (x + 1) / 6 and a running sum of 1/6 round differently; the search
        // has to agree with what cdf reports.
        for x in 0..5 {
            let f = cdf(&SixFaces, &[x]).unwrap()[0].f;
            let q = inverse_cdf(&SixFaces, &[f]).unwrap()[0].qa;
            assert_eq!(q, x, "F({}) = {}", x, f);
        }
    }

    #[test]
    fn test_inverse_cdf_round_trips_summed_values() {
        let xs: Vec<i64> = (0..50).collect();
        let rows = cdf(&Halving, &xs).unwrap();
        let targets: Vec<f64> = rows.iter().map(|r| r.f).filter(|&f| f < 1.0).collect();
        let got = inverse_cdf(&Halving, &targets).unwrap();
        for (row, q) in rows.iter().zip(&got) {
            assert_eq!(q.qa, row.x, "a = {}", q.a);
        }
    }

    #[test]
    fn test_inverse_cdf_ties_resolve_to_smallest_x() {
        let rows = cdf(&Gapped, &[0, 1, 2]).unwrap();
        assert!(rows.iter().all(|r| r.f == 0.5));
        assert_eq!(inverse_cdf(&Gapped, &[0.5]).unwrap()[0].qa, 0);
        assert_eq!(inverse_cdf(&Gapped, &[0.5000001]).unwrap()[0].qa, 3);
    }

    #[test]
    fn test_inverse_cdf_largest_quantile_below_one() {
        let a = 1.0 - f64::EPSILON / 2.0;
        let q = inverse_cdf(&Halving, &[a]).unwrap()[0].qa;
        // F(x) = 1 - 2^-(x+1) exactly
        assert_eq!(q, 52);
        assert!(cdf(&Halving, &[q - 1]).unwrap()[0].f < a);
    }

    #[test]
    fn test_inverse_cdf_target_above_computed_total() {
        let model = Scaled { scale: 1.0 - 1e-13 };
        let a = 1.0 - f64::EPSILON / 2.0;
        let q = inverse_cdf(&model, &[0.5, a]).unwrap()[1].qa;
        let f = cdf(&model, &[q - 1, q, q + 1]).unwrap();
        assert!(f[0].f < f[1].f);
        assert_eq!(f[1].f, f[2].f);
        // same answer when queried alone
        assert_eq!(inverse_cdf(&model, &[a]).unwrap()[0].qa, q);
    }

    #[test]
    fn test_inverse_cdf_unreachable_target_is_computation_error() {
        let model = Scaled { scale: 0.5 };
        assert_eq!(inverse_cdf(&model, &[0.25]).unwrap()[0].qa, 0);
        let err = inverse_cdf(&model, &[0.9]).unwrap_err();
        assert!(matches!(err, Error::Computation(_)), "{}", err);
    }

    #[test]
    fn test_inclusive_range() {
        assert_eq!(inclusive_range(-1, 2).unwrap(), vec![-1, 0, 1, 2]);
        assert_eq!(inclusive_range(3, 3).unwrap(), vec![3]);
        assert!(matches!(inclusive_range(3, 2), Err(Error::Validation(_))));
    }
}
