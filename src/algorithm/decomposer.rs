//! Recursive centroid-driven quadrant decomposition
//!
//! Each region is either emitted as one flat rectangle, when its intensity
//! variance is within tolerance, or split into up to four quadrants around
//! its weighted centroid. The centroid cell belongs to the top-left
//! quadrant and quadrants are visited top-left, top-right, bottom-left,
//! bottom-right, so the output order is fully determined by the image.

use crate::analysis::RegionStatsTable;
use crate::io::configuration::{DEFAULT_MAX_DEPTH, DEFAULT_TOLERANCE};
use crate::io::error::{Result, VectorizeError, invalid_parameter};
use crate::math::RegionMoments;
use crate::spatial::{IntensityGrid, RectangleList, Region, SvgRect};

/// Parameters controlling when regions stop splitting
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecomposerConfig {
    /// Largest variance a region may have and still be emitted whole
    pub tolerance: f64,
    /// Maximum nesting of splits before the run is aborted
    pub max_depth: usize,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecomposerConfig {
    /// Default configuration with a different tolerance
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Check that the parameters are usable
    ///
    /// Infinite tolerances are accepted: `+inf` yields a single rectangle
    /// and `-inf` one rectangle per pixel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a NaN tolerance or a zero depth limit
    pub fn validate(&self) -> Result<()> {
        if self.tolerance.is_nan() {
            return Err(invalid_parameter(
                "tolerance",
                &self.tolerance,
                &"must be a number",
            ));
        }
        if self.max_depth == 0 {
            return Err(invalid_parameter(
                "max_depth",
                &self.max_depth,
                &"must allow at least one split",
            ));
        }
        Ok(())
    }
}

/// Splits regions of a grid into flat rectangles using precomputed statistics
pub struct QuadDecomposer<'a> {
    table: &'a RegionStatsTable,
    config: DecomposerConfig,
}

impl<'a> QuadDecomposer<'a> {
    /// Create a decomposer over prebuilt statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(table: &'a RegionStatsTable, config: DecomposerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { table, config })
    }

    /// Active configuration
    pub const fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// Decompose the whole grid into a fresh rectangle list
    ///
    /// # Errors
    ///
    /// Propagates invariant violations and the recursion limit from
    /// [`Self::decompose`]
    pub fn run(&self) -> Result<RectangleList> {
        let mut rectangles = RectangleList::new();
        self.decompose(
            Region::full(self.table.rows(), self.table.cols()),
            &mut rectangles,
        )?;
        Ok(rectangles)
    }

    /// Decompose `region`, appending leaves to `out` in depth-first order
    ///
    /// Empty regions produce nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` when the region statistics are
    /// inconsistent, and `RecursionLimit` when a split would nest deeper than
    /// the configured limit. Rectangles appended before the failure are left
    /// in `out`; callers must discard them.
    pub fn decompose(&self, region: Region, out: &mut RectangleList) -> Result<()> {
        self.decompose_at(region, 0, out)
    }

    fn decompose_at(&self, region: Region, depth: usize, out: &mut RectangleList) -> Result<()> {
        if region.is_empty() {
            return Ok(());
        }

        let stats = self
            .table
            .query(region)
            .ok_or(VectorizeError::InvariantViolation {
                check: "region lies within the statistics table",
                region,
            })?;
        let moments = RegionMoments::from_stats(&stats, region)?;

        if moments.variance as f64 <= self.config.tolerance
            || moments.centroid_at_last_cell(region)
        {
            out.push(SvgRect::from_region(region, moments.average_intensity()));
            return Ok(());
        }

        if depth >= self.config.max_depth {
            return Err(VectorizeError::RecursionLimit {
                max_depth: self.config.max_depth,
                region,
            });
        }

        let quadrants = region
            .split_at(moments.centroid_row, moments.centroid_col)
            .ok_or(VectorizeError::InvariantViolation {
                check: "centroid inside region",
                region,
            })?;

        for quadrant in quadrants {
            self.decompose_at(quadrant, depth + 1, out)?;
        }

        Ok(())
    }
}

/// Approximate a grid with flat rectangles
///
/// Builds the statistics tables and decomposes the full grid. A grid with no
/// rows or no columns yields an empty list.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the grid is too large
/// for the accumulators, or decomposition fails
pub fn vectorize(grid: &IntensityGrid, config: DecomposerConfig) -> Result<RectangleList> {
    let table = RegionStatsTable::build(grid)?;
    let decomposer = QuadDecomposer::new(&table, config)?;
    let rectangles = decomposer.run()?;

    log::debug!(
        "decomposed {}x{} grid into {} rectangles (tolerance {})",
        grid.rows(),
        grid.cols(),
        rectangles.len(),
        config.tolerance
    );

    Ok(rectangles)
}
