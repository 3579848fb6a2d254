//! Raster to vector conversion by variance-driven quadrant decomposition
//!
//! A grayscale image is summarised once into summed-area tables, then split
//! recursively at the weighted centroid of each region until every region is
//! flat enough to be drawn as a single filled rectangle.

#![forbid(unsafe_code)]

/// Quadrant decomposition and tiling verification
pub mod algorithm;
/// Summed-area statistics over rectangular regions
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Region moments derived from aggregate statistics
pub mod math;
/// Grids, regions and emitted rectangles
pub mod spatial;

pub use algorithm::decomposer::{DecomposerConfig, QuadDecomposer, vectorize};
pub use io::error::{Result, VectorizeError};
pub use spatial::{IntensityGrid, RectangleList, Region, SvgRect};
