//! Mathematical utilities for the decomposition

/// Region moments derived from summed-area aggregates
pub mod moments;

pub use moments::RegionMoments;
