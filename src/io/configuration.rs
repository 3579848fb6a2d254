//! Decomposition constants and runtime configuration defaults

// Variance threshold below which a region is emitted as one rectangle
/// Default variance tolerance
pub const DEFAULT_TOLERANCE: f64 = 100.0;

// Guards against adversarial images driving the recursion arbitrarily deep
/// Default maximum recursion depth
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Largest representable intensity
pub const MAX_INTENSITY: u8 = u8::MAX;

/// Largest per-cell weight (`MAX_INTENSITY + 1`)
pub const MAX_WEIGHT: u64 = MAX_INTENSITY as u64 + 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Extension of the generated vector document
pub const SVG_EXTENSION: &str = "svg";
/// Suffix added to raster preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Extension of the raster preview
pub const PREVIEW_EXTENSION: &str = "png";

/// Input file extensions accepted when scanning a directory
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp",
];

/// SVG namespace URI
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// `XLink` namespace URI
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
