//! Immutable grayscale intensity grid consumed by the statistics tables
//!
//! The grid is the boundary between image decoding and the decomposition
//! core. It stores one 8-bit intensity per cell in row-major order and is
//! never modified after construction.

use image::GrayImage;
use ndarray::Array2;

use crate::io::error::{Result, VectorizeError};

/// Dense grid of intensities in `[0, 255]` indexed by (row, col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    cells: Array2<u8>,
}

impl IntensityGrid {
    /// Wrap an existing intensity array of shape (rows, cols)
    pub const fn new(cells: Array2<u8>) -> Self {
        Self { cells }
    }

    /// Build a grid from row-major intensities
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if `data.len()` differs from `rows * cols`
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self> {
        let expected = rows.checked_mul(cols);
        if expected != Some(data.len()) {
            return Err(VectorizeError::InvalidSourceData {
                reason: format!(
                    "{} intensities supplied for a {rows}x{cols} grid",
                    data.len()
                ),
            });
        }

        Array2::from_shape_vec((rows, cols), data)
            .map(Self::new)
            .map_err(|e| VectorizeError::InvalidSourceData {
                reason: e.to_string(),
            })
    }

    /// Build a grid where every cell holds the same intensity
    pub fn uniform(rows: usize, cols: usize, intensity: u8) -> Self {
        Self::new(Array2::from_elem((rows, cols), intensity))
    }

    /// Convert a decoded 8-bit luma image
    pub fn from_luma(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        let mut cells = Array2::zeros((height as usize, width as usize));
        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(cell) = cells.get_mut((y as usize, x as usize)) {
                *cell = pixel.0[0];
            }
        }
        Self::new(cells)
    }

    /// Number of rows (image height)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (image width)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Intensity at (row, col), or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get((row, col)).copied()
    }

    /// Borrow the underlying array
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }
}
