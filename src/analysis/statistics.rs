//! Summed-area tables answering rectangle statistics in constant time
//!
//! Four prefix-sum tables are built from the intensity grid, one per
//! aggregate: weight, squared weight, row-weighted and column-weighted sums.
//! Every cell contributes `intensity + 1` as its weight so that aggregate
//! weights are never zero and centroid divisions are always defined.

use ndarray::{Array2, Axis, Zip};

use crate::io::configuration::MAX_WEIGHT;
use crate::io::error::{Result, VectorizeError};
use crate::spatial::{IntensityGrid, Region};

/// Aggregate statistics over one rectangular region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionStats {
    /// Sum of weights
    pub weight_sum: u64,
    /// Sum of squared weights
    pub weight_square_sum: u64,
    /// Sum of `col * weight`
    pub weighted_col_sum: u64,
    /// Sum of `row * weight`
    pub weighted_row_sum: u64,
}

/// Inclusive 2D prefix sums of the four per-cell aggregates
///
/// Entry (i, j) of each table holds the sum of its quantity over all cells
/// (i', j') with i' <= i and j' <= j.
#[derive(Debug, Clone)]
pub struct RegionStatsTable {
    weight: Array2<u64>,
    weight_square: Array2<u64>,
    col_weighted: Array2<u64>,
    row_weighted: Array2<u64>,
}

impl RegionStatsTable {
    /// Build the four prefix-sum tables from a grid
    ///
    /// Accumulates each quantity down every column first, then across every
    /// row, leaving inclusive 2D prefix sums.
    ///
    /// # Errors
    ///
    /// Returns `GridTooLarge` if the grid is big enough for an accumulated
    /// sum to overflow `u64`
    pub fn build(grid: &IntensityGrid) -> Result<Self> {
        let (rows, cols) = (grid.rows(), grid.cols());
        check_accumulator_bounds(rows, cols)?;

        let weight = grid.cells().mapv(|intensity| u64::from(intensity) + 1);
        let weight_square = weight.mapv(|w| w * w);
        let col_weighted = Zip::indexed(&weight).map_collect(|(_, col), &w| col as u64 * w);
        let row_weighted = Zip::indexed(&weight).map_collect(|(row, _), &w| row as u64 * w);

        let mut table = Self {
            weight,
            weight_square,
            col_weighted,
            row_weighted,
        };

        for prefix in table.tables_mut() {
            prefix.accumulate_axis_inplace(Axis(0), |&above, current| *current += above);
            prefix.accumulate_axis_inplace(Axis(1), |&left, current| *current += left);
        }

        Ok(table)
    }

    /// Number of rows covered by the tables
    pub fn rows(&self) -> usize {
        self.weight.nrows()
    }

    /// Number of columns covered by the tables
    pub fn cols(&self) -> usize {
        self.weight.ncols()
    }

    /// Aggregate statistics over `region`
    ///
    /// Returns `None` for an empty region or one extending past the grid.
    pub fn query(&self, region: Region) -> Option<RegionStats> {
        if region.is_empty() || !region.fits_within(self.rows(), self.cols()) {
            return None;
        }

        Some(RegionStats {
            weight_sum: rectangle_sum(&self.weight, region)?,
            weight_square_sum: rectangle_sum(&self.weight_square, region)?,
            weighted_col_sum: rectangle_sum(&self.col_weighted, region)?,
            weighted_row_sum: rectangle_sum(&self.row_weighted, region)?,
        })
    }

    fn tables_mut(&mut self) -> [&mut Array2<u64>; 4] {
        [
            &mut self.weight,
            &mut self.weight_square,
            &mut self.col_weighted,
            &mut self.row_weighted,
        ]
    }
}

// The largest accumulations are the squared weights and the coordinate
// weighted sums over the full grid
fn check_accumulator_bounds(rows: usize, cols: usize) -> Result<()> {
    let too_large = || VectorizeError::GridTooLarge { rows, cols };

    let area = (rows as u64)
        .checked_mul(cols as u64)
        .ok_or_else(too_large)?;
    let longest_side = rows.max(cols) as u64;

    MAX_WEIGHT
        .checked_mul(MAX_WEIGHT)
        .and_then(|square| square.checked_mul(area))
        .ok_or_else(too_large)?;
    MAX_WEIGHT
        .checked_mul(longest_side)
        .and_then(|coordinate| coordinate.checked_mul(area))
        .ok_or_else(too_large)?;

    Ok(())
}

// Inclusion-exclusion over the prefix table; the caller guarantees the region
// is non-empty and inside the table
fn rectangle_sum(prefix: &Array2<u64>, region: Region) -> Option<u64> {
    let bottom = region.last_row()?;
    let right = region.last_col()?;
    let total = prefix.get((bottom, right)).copied()?;

    match (region.row, region.col) {
        (0, 0) => Some(total),
        (0, col) => {
            let left = prefix.get((bottom, col - 1)).copied()?;
            total.checked_sub(left)
        }
        (row, 0) => {
            let above = prefix.get((row - 1, right)).copied()?;
            total.checked_sub(above)
        }
        (row, col) => {
            let above = prefix.get((row - 1, right)).copied()?;
            let left = prefix.get((bottom, col - 1)).copied()?;
            let corner = prefix.get((row - 1, col - 1)).copied()?;
            total
                .checked_add(corner)?
                .checked_sub(above)?
                .checked_sub(left)
        }
    }
}
