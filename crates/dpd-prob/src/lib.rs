//! Discrete probability distributions.
//!
//! This crate hosts the concrete distributions built on the
//! [`dpd_core::DiscreteModel`] abstraction:
//! - named distributions (Bernoulli, Binomial, Geometric, Poisson, Uniform)
//!   and the [`Distribution`] enum over them
//! - declarative specs for building distributions from JSON/YAML
//! - dice sums and permutation/combination counts
//! - small log-space math helpers

pub mod bernoulli;
pub mod binomial;
pub mod combinatorics;
pub mod dice;
pub mod distributions;
pub mod geometric;
pub mod math;
pub mod poisson;
pub mod uniform;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use combinatorics::{Selection, SelectionCount, count_selections};
pub use dice::DiceSum;
pub use distributions::{Distribution, DistributionSpec};
pub use dpd_core::{DiscreteModel, Error, Result};
pub use geometric::Geometric;
pub use poisson::Poisson;
pub use uniform::Uniform;
