/// Tiling verification of emitted rectangles
pub mod coverage;
/// Recursive centroid quadrant decomposition
pub mod decomposer;
