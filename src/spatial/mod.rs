//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The immutable grayscale intensity grid
//! - Axis-aligned regions addressed by row and column
//! - Flat-colored output rectangles and their ordered collection

/// Grayscale intensity grid
pub mod grid;
/// Output rectangles and the append-only rectangle list
pub mod rectangles;
/// Axis-aligned rectangular regions
pub mod region;

pub use grid::IntensityGrid;
pub use rectangles::{RectangleList, SvgRect};
pub use region::Region;
