//! Common data types for discrete distributions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer support range `[lo, hi]` of a discrete random variable.
///
/// `None` on either side means the range is unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Support {
    /// Lower bound (inclusive), `None` = -inf
    pub lo: Option<i64>,
    /// Upper bound (inclusive), `None` = +inf
    pub hi: Option<i64>,
}

impl Support {
    /// Create a support range
    pub fn new(lo: Option<i64>, hi: Option<i64>) -> Self {
        Self { lo, hi }
    }

    /// Finite range `{lo, ..., hi}`
    pub fn finite(lo: i64, hi: i64) -> Self {
        Self { lo: Some(lo), hi: Some(hi) }
    }

    /// Right-unbounded range `{lo, lo+1, ...}`
    pub fn from_lower(lo: i64) -> Self {
        Self { lo: Some(lo), hi: None }
    }

    /// Whether `x` lies inside the range
    pub fn contains(&self, x: i64) -> bool {
        self.lo.is_none_or(|lo| lo <= x) && self.hi.is_none_or(|hi| x <= hi)
    }

    /// Both bounds finite
    pub fn is_finite(&self) -> bool {
        self.lo.is_some() && self.hi.is_some()
    }

    /// Number of integers in the range, `None` if unbounded or too large for `u64`.
    pub fn len(&self) -> Option<u64> {
        let (lo, hi) = (self.lo?, self.hi?);
        u64::try_from(i128::from(hi) - i128::from(lo) + 1).ok()
    }

    /// `true` when the range holds no integers
    pub fn is_empty(&self) -> bool {
        matches!((self.lo, self.hi), (Some(lo), Some(hi)) if lo > hi)
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lo {
            Some(lo) => write!(f, "[{}, ", lo)?,
            None => write!(f, "[-inf, ")?,
        }
        match self.hi {
            Some(hi) => write!(f, "{}]", hi),
            None => write!(f, "inf]"),
        }
    }
}

/// One row of a probability mass table: `(x, P(X = x))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmfRow {
    /// Value of X
    pub x: i64,
    /// P(X = x)
    #[serde(rename = "p(x)")]
    pub p: f64,
}

/// One row of a cumulative distribution table: `(x, P(X <= x))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdfRow {
    /// Value of X
    pub x: i64,
    /// P(X <= x)
    #[serde(rename = "F(x)")]
    pub f: f64,
}

/// One row of a quantile table: `(a, q_a)` where `q_a` is the smallest `x`
/// with `F(x) >= a`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileRow {
    /// Target probability
    pub a: f64,
    /// The a-quantile
    pub qa: i64,
}

/// Outcome ranked by probability, with the running cumulative probability of
/// all outcomes ranked at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Value of X
    pub x: i64,
    /// P(X = x)
    pub p: f64,
    /// Sum of `p` over this row and all rows before it
    pub cum_p: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_contains() {
        let s = Support::finite(0, 10);
        assert!(s.contains(0));
        assert!(s.contains(10));
        assert!(!s.contains(-1));
        assert!(!s.contains(11));

        let g = Support::from_lower(1);
        assert!(g.contains(1));
        assert!(g.contains(i64::MAX));
        assert!(!g.contains(0));

        assert!(Support::new(None, None).contains(i64::MIN));
    }

    #[test]
    fn test_support_len_and_display() {
        assert_eq!(Support::finite(1, 6).len(), Some(6));
        assert_eq!(Support::from_lower(0).len(), None);
        assert!(!Support::finite(1, 1).is_empty());
        assert!(Support::finite(2, 1).is_empty());
        assert_eq!(Support::finite(0, 1).to_string(), "[0, 1]");
        assert_eq!(Support::from_lower(1).to_string(), "[1, inf]");
        assert_eq!(Support::new(None, Some(3)).to_string(), "[-inf, 3]");
    }

    #[test]
    fn test_rows_use_tabular_column_names() {
        let json = serde_json::to_string(&PmfRow { x: 2, p: 0.25 }).unwrap();
        assert_eq!(json, r#"{"x":2,"p(x)":0.25}"#);
        let json = serde_json::to_string(&CdfRow { x: 2, f: 0.75 }).unwrap();
        assert_eq!(json, r#"{"x":2,"F(x)":0.75}"#);
    }
}
