//! Centroid, mean and variance of a region derived from its aggregates
//!
//! All divisions are integer divisions. The variance compares the floored
//! mean of squared weights against the square of the floored mean weight, so
//! it can exceed the exact variance by less than `2 * mean + 1`.

use num_traits::ToPrimitive;

use crate::analysis::RegionStats;
use crate::io::error::{Result, VectorizeError};
use crate::spatial::Region;

/// Derived moments of one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMoments {
    /// Row of the weighted centroid
    pub centroid_row: usize,
    /// Column of the weighted centroid
    pub centroid_col: usize,
    /// Mean weight (intensity + 1)
    pub average_weight: u64,
    /// Mean squared weight minus squared mean weight
    pub variance: i128,
}

impl RegionMoments {
    /// Derive moments and validate them against the region
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` when the aggregates are inconsistent with
    /// the region: zero total weight, a negative Cauchy-Schwarz gap, or a
    /// centroid outside the region. Any of these means the prefix tables or
    /// the query arithmetic are wrong.
    pub fn from_stats(stats: &RegionStats, region: Region) -> Result<Self> {
        let violation = |check: &'static str| VectorizeError::InvariantViolation { check, region };

        if region.is_empty() || stats.weight_sum == 0 {
            return Err(violation("region weight is positive"));
        }

        let area = region.area() as u128;
        let weight_sum = u128::from(stats.weight_sum);
        let square_sum = u128::from(stats.weight_square_sum);

        if square_sum * area < weight_sum * weight_sum {
            return Err(violation("weight square sum * area >= weight sum^2"));
        }

        let centroid_col = (stats.weighted_col_sum / stats.weight_sum)
            .to_usize()
            .ok_or_else(|| violation("centroid column fits in usize"))?;
        let centroid_row = (stats.weighted_row_sum / stats.weight_sum)
            .to_usize()
            .ok_or_else(|| violation("centroid row fits in usize"))?;

        if centroid_col < region.col || centroid_row < region.row {
            return Err(violation("centroid >= region origin"));
        }
        if !region.contains(centroid_row, centroid_col) {
            return Err(violation("centroid inside region"));
        }

        let average = weight_sum / area;
        let variance = (square_sum / area) as i128 - (average * average) as i128;
        let average_weight = average
            .to_u64()
            .ok_or_else(|| violation("average weight fits in u64"))?;

        Ok(Self {
            centroid_row,
            centroid_col,
            average_weight,
            variance,
        })
    }

    /// Mean intensity with the `+1` weighting bias removed
    pub fn average_intensity(&self) -> u8 {
        self.average_weight
            .saturating_sub(1)
            .to_u8()
            .unwrap_or(u8::MAX)
    }

    /// Whether the centroid is the bottom-right cell of `region`
    ///
    /// Every cell has positive weight, so this only happens for a single
    /// cell, where no split can shrink the region.
    pub fn centroid_at_last_cell(&self, region: Region) -> bool {
        region.last_row() == Some(self.centroid_row) && region.last_col() == Some(self.centroid_col)
    }
}
