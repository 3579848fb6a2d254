//! Statistical preprocessing of the intensity grid

/// Summed-area tables for constant-time rectangle statistics
pub mod statistics;

pub use statistics::{RegionStats, RegionStatsTable};
