//! Flat-colored output rectangles in depth-first emission order

use crate::spatial::region::Region;

/// One filled rectangle of the vector output
///
/// Coordinates follow image conventions: `x` is the left column and `y` the
/// top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SvgRect {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in columns (at least 1)
    pub width: usize,
    /// Height in rows (at least 1)
    pub height: usize,
    /// Fill level applied to all three color channels
    pub intensity: u8,
}

impl SvgRect {
    /// Create a rectangle covering `region` with a flat fill
    pub const fn from_region(region: Region, intensity: u8) -> Self {
        Self {
            x: region.col,
            y: region.row,
            width: region.cols,
            height: region.rows,
            intensity,
        }
    }

    /// Region covered by this rectangle
    pub const fn region(&self) -> Region {
        Region::new(self.y, self.x, self.height, self.width)
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Append-only sequence of emitted rectangles
///
/// Order is the depth-first order in which the decomposer produced the
/// leaves. Rendering does not depend on it since rectangles never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RectangleList {
    rects: Vec<SvgRect>,
}

impl RectangleList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rectangle
    pub fn push(&mut self, rect: SvgRect) {
        self.rects.push(rect);
    }

    /// Number of rectangles
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether no rectangle has been emitted
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Iterate in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, SvgRect> {
        self.rects.iter()
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[SvgRect] {
        &self.rects
    }

    /// Total pixel area covered by all rectangles
    pub fn covered_area(&self) -> usize {
        self.rects.iter().map(SvgRect::area).sum()
    }
}

impl<'a> IntoIterator for &'a RectangleList {
    type Item = &'a SvgRect;
    type IntoIter = std::slice::Iter<'a, SvgRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

impl IntoIterator for RectangleList {
    type Item = SvgRect;
    type IntoIter = std::vec::IntoIter<SvgRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter()
    }
}
