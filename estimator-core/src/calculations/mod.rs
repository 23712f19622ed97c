//! Estimate computation for Northern Beaches construction projects.
//!
//! The engine is a pure fold over the selection and the regional rate
//! table; it has no error conditions and no I/O.

pub mod common;
pub mod estimate;

pub use estimate::{CostBreakdown, CostEstimator, TradeCostLine};
