//! Counting permutations and combinations.
//!
//! Exact integer counts for choosing `r` items from `n` types, with the
//! four combinations of "order matters" and "repetition allowed".

use dpd_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of selection being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Ordered, repetition allowed: `n^r`
    PermutationWithRepetition,
    /// Ordered, no repetition: `n!/(n-r)!`
    PermutationWithoutRepetition,
    /// Unordered, repetition allowed: `(r+n-1)!/(r!(n-1)!)`
    CombinationWithRepetition,
    /// Unordered, no repetition: `n!/(r!(n-r)!)`
    CombinationWithoutRepetition,
}

impl Selection {
    /// Pick the selection kind from the two yes/no questions.
    pub fn new(order_matters: bool, with_repetition: bool) -> Self {
        match (order_matters, with_repetition) {
            (true, true) => Selection::PermutationWithRepetition,
            (true, false) => Selection::PermutationWithoutRepetition,
            (false, true) => Selection::CombinationWithRepetition,
            (false, false) => Selection::CombinationWithoutRepetition,
        }
    }

    /// Counting formula in terms of `n` and `r`.
    pub fn formula(&self) -> &'static str {
        match self {
            Selection::PermutationWithRepetition => "n**r",
            Selection::PermutationWithoutRepetition => "n!/(n-r)!",
            Selection::CombinationWithRepetition => "(r+n-1)!/r!(n-1)!",
            Selection::CombinationWithoutRepetition => "n!/r!(n-r)!",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Selection::PermutationWithRepetition => "Permutation with repetition",
            Selection::PermutationWithoutRepetition => "Permutation without repetition",
            Selection::CombinationWithRepetition => "Combination with repetition",
            Selection::CombinationWithoutRepetition => "Combination without repetition",
        };
        f.write_str(s)
    }
}

/// Result of [`count_selections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCount {
    /// What was counted
    pub kind: Selection,
    /// Types to choose from
    pub n: u64,
    /// Number chosen
    pub r: u64,
    /// Number of possible selections
    pub count: u128,
}

impl SelectionCount {
    /// Counting formula for [`Self::kind`]
    pub fn formula(&self) -> &'static str {
        self.kind.formula()
    }
}

impl fmt::Display for SelectionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (formula: {}): {}", self.kind, self.formula(), self.count)
    }
}

fn overflow(kind: Selection, n: u64, r: u64) -> Error {
    Error::Computation(format!("{} count overflows u128 for n={}, r={}", kind, n, r))
}

/// Exact `C(a, k)` with overflow detection.
pub fn choose(a: u64, k: u64) -> Option<u128> {
    if k > a {
        return Some(0);
    }
    let k = k.min(a - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc == C(a, i) here, and C(a, i) * (a - i) is divisible by (i + 1).
        acc = acc.checked_mul(u128::from(a - i))? / u128::from(i + 1);
    }
    Some(acc)
}

/// Number of ways to select `r` items from `n` types.
pub fn count_selections(n: u64, r: u64, kind: Selection) -> Result<SelectionCount> {
    let count = match kind {
        Selection::PermutationWithRepetition => match n {
            0 => u128::from(r == 0),
            1 => 1,
            _ => {
                let exp = u32::try_from(r).map_err(|_| overflow(kind, n, r))?;
                u128::from(n).checked_pow(exp).ok_or_else(|| overflow(kind, n, r))?
            }
        },
        Selection::PermutationWithoutRepetition => {
            require_r_le_n(kind, n, r)?;
            (0..r)
                .try_fold(1u128, |acc, i| acc.checked_mul(u128::from(n - i)))
                .ok_or_else(|| overflow(kind, n, r))?
        }
        Selection::CombinationWithRepetition => {
            if n == 0 {
                u128::from(r == 0)
            } else {
                let top = r.checked_add(n - 1).ok_or_else(|| overflow(kind, n, r))?;
                choose(top, r).ok_or_else(|| overflow(kind, n, r))?
            }
        }
        Selection::CombinationWithoutRepetition => {
            require_r_le_n(kind, n, r)?;
            choose(n, r).ok_or_else(|| overflow(kind, n, r))?
        }
    };
    Ok(SelectionCount { kind, n, r, count })
}

fn require_r_le_n(kind: Selection, n: u64, r: u64) -> Result<()> {
    if r > n {
        return Err(Error::Validation(format!(
            "{} requires r <= n, got n={}, r={}",
            kind, n, r
        )));
    }
    Ok(())
}
