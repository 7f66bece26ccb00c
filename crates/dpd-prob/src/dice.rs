//! Distribution of the sum of fair dice.

use dpd_core::{DiscreteModel, Error, Result, Support};
use std::fmt;

/// Largest number of distinct sums a [`DiceSum`] table may hold.
const MAX_OUTCOMES: u64 = 1_000_000;

/// Upper bound on `dice * outcomes * sides`, the multiply-adds the
/// convolution may spend building the table.
const MAX_CONVOLUTION_WORK: u128 = 200_000_000;

/// Sum of `dice` fair dice with faces `1..=sides`: `X ~ DiceSum(dice, sides)`
/// on `{dice, ..., dice*sides}`.
///
/// The mass table is built once at construction by convolving the single-die
/// distribution with itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceSum {
    dice: u32,
    sides: u32,
    masses: Vec<f64>,
}

impl DiceSum {
    /// Create the distribution of the sum of `dice` fair `sides`-sided dice.
    pub fn new(dice: u32, sides: u32) -> Result<Self> {
        if dice == 0 {
            return Err(Error::Validation("dice must be >= 1".into()));
        }
        if sides == 0 {
            return Err(Error::Validation("sides must be >= 1".into()));
        }
        let outcomes = u64::from(dice) * u64::from(sides - 1) + 1;
        if outcomes > MAX_OUTCOMES {
            return Err(Error::Validation(format!(
                "{} dice with {} sides give {} distinct sums, limit is {}",
                dice, sides, outcomes, MAX_OUTCOMES
            )));
        }
        let work = u128::from(dice) * u128::from(outcomes) * u128::from(sides);
        if work > MAX_CONVOLUTION_WORK {
            return Err(Error::Validation(format!(
                "{} dice with {} sides need about {} steps to tabulate, limit is {}",
                dice, sides, work, MAX_CONVOLUTION_WORK
            )));
        }

        let face = 1.0 / f64::from(sides);
        let width = sides as usize;
        let mut masses = vec![1.0];
        for _ in 0..dice {
            let len = masses.len() + width - 1;
            masses = (0..len)
                .map(|k| {
                    let from = k.saturating_sub(width - 1);
                    let to = k.min(masses.len() - 1);
                    masses[from..=to].iter().sum::<f64>() * face
                })
                .collect();
        }
        log::debug!("DiceSum({}, {}): {} outcomes", dice, sides, masses.len());

        Ok(Self { dice, sides, masses })
    }

    /// Number of dice
    pub fn dice(&self) -> u32 {
        self.dice
    }

    /// Faces per die
    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl fmt::Display for DiceSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X ~ DiceSum({}, {})", self.dice, self.sides)
    }
}

impl DiscreteModel for DiceSum {
    fn name(&self) -> String {
        self.to_string()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("dice", f64::from(self.dice)), ("sides", f64::from(self.sides))]
    }

    fn support(&self) -> Support {
        let lo = i64::from(self.dice);
        Support::finite(lo, lo * i64::from(self.sides))
    }

    fn mass(&self, x: i64) -> f64 {
        x.checked_sub(i64::from(self.dice))
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|i| self.masses.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    fn mean(&self) -> f64 {
        f64::from(self.dice) * (f64::from(self.sides) + 1.0) / 2.0
    }

    fn variance(&self) -> f64 {
        let s = f64::from(self.sides);
        f64::from(self.dice) * (s * s - 1.0) / 12.0
    }
}
