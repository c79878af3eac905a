//! Statistical accumulation strategies and the drift demonstration.
//!
//! This module holds the algorithmic core of the harness:
//! - Four aggregation strategies over the shared dataset, each executed in a
//!   full-precision fixed-point track, a storage-rounded fixed-point track
//!   and a binary floating-point track
//! - The standalone drift demonstration: forward add/subtract accumulation
//!   against an analytically known difference, followed by compound monthly
//!   growth

pub mod accumulate;
pub mod drift;

pub use accumulate::{cumulative_mean, partial_mean, simple_mean, sums, AlgorithmKind};
pub use drift::DriftReport;
