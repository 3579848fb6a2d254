//! Axis-aligned rectangular regions addressed by top-left cell and extent

use std::fmt;

/// Rectangle `[row, row + rows) x [col, col + cols)` within a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Region {
    /// Top row index (inclusive)
    pub row: usize,
    /// Left column index (inclusive)
    pub col: usize,
    /// Number of rows covered
    pub rows: usize,
    /// Number of columns covered
    pub cols: usize,
}

impl Region {
    /// Create a region from its top-left cell and extent
    pub const fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Region covering an entire `rows x cols` grid
    pub const fn full(rows: usize, cols: usize) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Whether the region covers no cells
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Last covered row, or `None` for an empty region
    pub const fn last_row(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.row + self.rows - 1)
        }
    }

    /// Last covered column, or `None` for an empty region
    pub const fn last_col(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.col + self.cols - 1)
        }
    }

    /// Check whether the region lies inside a `rows x cols` grid
    pub const fn fits_within(&self, rows: usize, cols: usize) -> bool {
        match (self.row.checked_add(self.rows), self.col.checked_add(self.cols)) {
            (Some(row_end), Some(col_end)) => row_end <= rows && col_end <= cols,
            _ => false,
        }
    }

    /// Check if a cell is covered by the region
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row - self.row < self.rows
            && col >= self.col
            && col - self.col < self.cols
    }

    /// Split into four quadrants around a pivot cell
    ///
    /// The pivot belongs to the top-left quadrant. Quadrants are returned in
    /// top-left, top-right, bottom-left, bottom-right order and may be empty
    /// when the pivot sits on the last row or column. Returns `None` if the
    /// pivot is outside the region.
    pub const fn split_at(&self, pivot_row: usize, pivot_col: usize) -> Option<[Self; 4]> {
        if !self.contains(pivot_row, pivot_col) {
            return None;
        }

        let top_rows = pivot_row - self.row + 1;
        let left_cols = pivot_col - self.col + 1;
        let bottom_rows = self.rows - top_rows;
        let right_cols = self.cols - left_cols;

        Some([
            Self::new(self.row, self.col, top_rows, left_cols),
            Self::new(self.row, pivot_col + 1, top_rows, right_cols),
            Self::new(pivot_row + 1, self.col, bottom_rows, left_cols),
            Self::new(pivot_row + 1, pivot_col + 1, bottom_rows, right_cols),
        ])
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at (row {}, col {})",
            self.rows, self.cols, self.row, self.col
        )
    }
}
