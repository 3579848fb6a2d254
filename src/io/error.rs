//! Error types and path context for vectorization operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::Region;

const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all vectorization operations
#[derive(Debug)]
pub enum VectorizeError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't form a valid intensity grid
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Region statistics broke an invariant of the prefix-sum arithmetic
    ///
    /// Always a defect in table construction or querying; the run is
    /// aborted without partial output.
    InvariantViolation {
        /// The check that failed
        check: &'static str,
        /// Region being decomposed when the check failed
        region: Region,
    },

    /// Grid dimensions would overflow the 64-bit prefix-sum accumulators
    GridTooLarge {
        /// Grid rows
        rows: usize,
        /// Grid columns
        cols: usize,
    },

    /// Decomposition exceeded the configured recursion depth
    RecursionLimit {
        /// Configured maximum depth
        max_depth: usize,
        /// Region that would have been split past the limit
        region: Region,
    },

    /// Emitted rectangles do not tile the grid exactly
    TilingViolation {
        /// Row of the first offending pixel
        row: usize,
        /// Column of the first offending pixel
        col: usize,
        /// Whether the pixel is uncovered or covered twice
        reason: &'static str,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for VectorizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvariantViolation { check, region } => {
                write!(f, "Invariant '{check}' violated for region {region}")
            }
            Self::GridTooLarge { rows, cols } => {
                write!(
                    f,
                    "Grid of {rows}x{cols} would overflow the prefix-sum accumulators"
                )
            }
            Self::RecursionLimit { max_depth, region } => {
                write!(
                    f,
                    "Recursion depth limit {max_depth} reached while splitting region {region}"
                )
            }
            Self::TilingViolation { row, col, reason } => {
                write!(f, "Tiling violated at (row {row}, col {col}): {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for VectorizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for vectorization results
pub type Result<T> = std::result::Result<T, VectorizeError>;

/// Attaches a file path to errors converted without one
pub trait WithPath<T> {
    /// Replace an unknown path in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<VectorizeError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only path-carrying variants benefit from the context
            let slot = match &mut error {
                VectorizeError::ImageLoad { path: slot, .. }
                | VectorizeError::ImageExport { path: slot, .. }
                | VectorizeError::FileSystem { path: slot, .. } => Some(slot),
                _ => None,
            };
            if let Some(slot) = slot.filter(|existing| existing.as_os_str() == UNKNOWN_PATH) {
                *slot = path.to_path_buf();
            }
            error
        })
    }
}

impl From<image::ImageError> for VectorizeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for VectorizeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> VectorizeError {
    VectorizeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> VectorizeError {
    VectorizeError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
