//! Core abstraction for discrete probability distributions.
//!
//! This crate defines the pieces every distribution shares:
//! - the error taxonomy ([`Error`], [`Result`])
//! - support ranges and result rows ([`types`])
//! - the [`DiscreteModel`] trait and its generic query algorithms ([`query`])
//! - exact accumulation for cumulative sums ([`numeric`])
//!
//! Concrete distributions live in `dpd-prob`.

pub mod error;
pub mod numeric;
pub mod query;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::DiscreteModel;
pub use types::{CdfRow, PmfRow, QuantileRow, RankedRow, Support};
