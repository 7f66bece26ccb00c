//! Exact accumulation for cumulative probabilities.
//!
//! Every cumulative quantity in this workspace (summation cdf, inverse-cdf
//! walk, ranked tables) goes through [`ExactSum`]. Each `f64` term is a
//! dyadic rational, so the running total is kept as a [`BigRational`] with no
//! rounding at all; the only rounding happens once, when the total is read
//! back as the nearest `f64`. Reading is monotone, so a running total that
//! never decreases is reported as a non-decreasing `f64` sequence.

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Running sum of `f64` terms held as an exact rational.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactSum {
    total: BigRational,
}

impl Default for ExactSum {
    fn default() -> Self {
        Self::new()
    }
}

impl ExactSum {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self { total: BigRational::zero() }
    }

    /// Accumulator seeded with `value`.
    pub fn with_value(value: f64) -> Self {
        let mut acc = Self::new();
        acc.add(value);
        acc
    }

    /// Add one term. Non-finite terms have no rational value and are skipped.
    pub fn add(&mut self, x: f64) {
        if x == 0.0 {
            return;
        }
        if let Some(r) = BigRational::from_float(x) {
            self.total += r;
        }
    }

    /// Exact total.
    pub fn exact(&self) -> &BigRational {
        &self.total
    }

    /// Nearest `f64` to the exact total.
    pub fn value(&self) -> f64 {
        self.total.to_f64().unwrap_or(f64::NAN)
    }
}

impl Extend<f64> for ExactSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<f64> for ExactSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Exact sum of an iterator of `f64`, rounded once to the nearest `f64`.
pub fn exact_sum<I: IntoIterator<Item = f64>>(iter: I) -> f64 {
    iter.into_iter().collect::<ExactSum>().value()
}

/// Clamp a computed probability into `[0, 1]`.
#[inline]
pub fn clamp_probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(exact_sum([1.0, 2.0, 3.0]), 6.0);
        assert_eq!(exact_sum(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_no_lost_low_order_bits() {
        // 1 + 1e100 + 1 - 1e100: naive summation gives 0.
        let v = [1.0, 1e100, 1.0, -1e100];
        let naive: f64 = v.iter().sum();
        assert_eq!(naive, 0.0);
        assert_eq!(exact_sum(v), 2.0);
        let acc: ExactSum = v.into_iter().collect();
        assert_eq!(acc.exact(), &BigRational::from_integer(2.into()));
    }

    #[test]
    fn test_tenths_sum_exactly_to_nearest_float() {
        // Ten copies of the double nearest 0.1 sum to 1 + 5.55e-17, whose
        // nearest double is 1.0; naive left-to-right summation gives 0.9999999999999999.
        let naive: f64 = std::iter::repeat_n(0.1, 10).sum();
        assert_ne!(naive, 1.0);
        assert_eq!(exact_sum(std::iter::repeat_n(0.1, 10)), 1.0);
    }

    #[test]
    fn test_tiny_terms_are_kept() {
        let mut acc = ExactSum::with_value(1e-300);
        acc.add(1e-300);
        assert_eq!(acc.value(), 2e-300);
        // subnormal term is exact too
        let sub = f64::MIN_POSITIVE / 4.0;
        assert_eq!(exact_sum([sub, sub]), f64::MIN_POSITIVE / 2.0);
    }

    #[test]
    fn test_reading_is_monotone() {
        let mut acc = ExactSum::with_value(0.5);
        let mut last = acc.value();
        for _ in 0..200 {
            acc.add(1e-18);
            let v = acc.value();
            assert!(v >= last);
            last = v;
        }
        // 200 * 1e-18 = 2e-16 is above half an ulp of 0.5, so it shows.
        assert!(last > 0.5);
    }

    #[test]
    fn test_non_finite_terms_skipped_and_clamp() {
        let mut acc = ExactSum::with_value(0.25);
        acc.add(f64::NAN);
        acc.add(0.5);
        assert_eq!(acc.value(), 0.75);
        assert_eq!(clamp_probability(1.0 + 1e-15), 1.0);
        assert_eq!(clamp_probability(-1e-18), 0.0);
    }
}
