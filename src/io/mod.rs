//! Input/output collaborators around the decomposition core

/// Command-line interface and batch file processing
pub mod cli;
/// Decomposition constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Grayscale image loading and raster previews
pub mod image;
/// Batch progress display
pub mod progress;
/// SVG serialization
pub mod svg;
