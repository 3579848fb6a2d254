use bitvec::prelude::*;

use crate::io::error::{Result, VectorizeError};
use crate::spatial::{RectangleList, SvgRect};

/// Per-pixel coverage mask for checking that rectangles tile a grid
///
/// One bit per pixel in row-major order. Marking a pixel twice or leaving
/// one unmarked breaks the tiling.
#[derive(Clone, Debug)]
pub struct CoverageMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl CoverageMask {
    /// Create a mask with no pixel covered
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Mark every pixel of `rect` as covered
    ///
    /// # Errors
    ///
    /// Returns `TilingViolation` at the first pixel that lies outside the
    /// grid or is already covered
    pub fn cover(&mut self, rect: &SvgRect) -> Result<()> {
        if !rect.region().fits_within(self.rows, self.cols) {
            return Err(VectorizeError::TilingViolation {
                row: rect.y,
                col: rect.x,
                reason: "rectangle extends outside the grid",
            });
        }

        for row in rect.y..rect.y + rect.height {
            for col in rect.x..rect.x + rect.width {
                let overlap = VectorizeError::TilingViolation {
                    row,
                    col,
                    reason: "pixel covered more than once",
                };
                let Some(mut bit) = self.bits.get_mut(row * self.cols + col) else {
                    return Err(overlap);
                };
                if *bit {
                    return Err(overlap);
                }
                *bit = true;
            }
        }

        Ok(())
    }

    /// First uncovered pixel in row-major order
    pub fn first_gap(&self) -> Option<(usize, usize)> {
        self.bits
            .first_zero()
            .map(|index| (index / self.cols, index % self.cols))
    }

    /// Number of covered pixels
    pub fn covered(&self) -> usize {
        self.bits.count_ones()
    }
}

/// Verify that `rectangles` cover a `rows x cols` grid exactly once
///
/// # Errors
///
/// Returns `TilingViolation` naming the first pixel that is outside the
/// grid, covered twice, or not covered at all
pub fn verify_tiling(rectangles: &RectangleList, rows: usize, cols: usize) -> Result<()> {
    let mut mask = CoverageMask::new(rows, cols);
    for rect in rectangles {
        mask.cover(rect)?;
    }

    match mask.first_gap() {
        Some((row, col)) => Err(VectorizeError::TilingViolation {
            row,
            col,
            reason: "pixel not covered",
        }),
        None => Ok(()),
    }
}
