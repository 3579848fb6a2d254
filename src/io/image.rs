//! Grayscale image loading and raster previews of rectangle lists

use std::path::Path;

use image::{GrayImage, Luma};

use crate::io::error::{Result, VectorizeError, file_system_error};
use crate::spatial::{IntensityGrid, RectangleList};

/// Load an image file as a grayscale intensity grid
///
/// Any format supported by the `image` crate is accepted; color images are
/// converted to 8-bit luma.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<IntensityGrid> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| VectorizeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(IntensityGrid::from_luma(&decoded.to_luma8()))
}

/// Paint rectangles onto a `rows x cols` grayscale canvas
///
/// Pixels not covered by any rectangle stay black; parts of rectangles
/// outside the canvas are clipped.
pub fn render_rectangles(rows: usize, cols: usize, rectangles: &RectangleList) -> GrayImage {
    let mut canvas = GrayImage::new(cols as u32, rows as u32);

    for rect in rectangles {
        let row_end = (rect.y + rect.height).min(rows);
        let col_end = (rect.x + rect.width).min(cols);
        for row in rect.y..row_end {
            for col in rect.x..col_end {
                canvas.put_pixel(col as u32, row as u32, Luma([rect.intensity]));
            }
        }
    }

    canvas
}

/// Mean squared intensity error between a grid and a rendered preview
///
/// Returns `None` if the dimensions differ. An empty grid has zero error.
pub fn mean_squared_error(grid: &IntensityGrid, rendered: &GrayImage) -> Option<f64> {
    let (width, height) = rendered.dimensions();
    if width as usize != grid.cols() || height as usize != grid.rows() {
        return None;
    }
    if grid.is_empty() {
        return Some(0.0);
    }

    let total: f64 = rendered
        .enumerate_pixels()
        .filter_map(|(x, y, pixel)| {
            grid.get(y as usize, x as usize).map(|original| {
                let diff = f64::from(original) - f64::from(pixel.0[0]);
                diff * diff
            })
        })
        .sum();

    Some(total / (grid.rows() * grid.cols()) as f64)
}

/// Render rectangles and save them as a raster image
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_preview(
    output_path: &Path,
    rows: usize,
    cols: usize,
    rectangles: &RectangleList,
) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    render_rectangles(rows, cols, rectangles)
        .save(output_path)
        .map_err(|e| VectorizeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
