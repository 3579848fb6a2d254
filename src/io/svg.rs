//! SVG serialization of rectangle lists
//!
//! One `<rect>` element is written per rectangle, in list order, with the
//! intensity replicated across the three color channels.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io::configuration::{SVG_NAMESPACE, XLINK_NAMESPACE};
use crate::io::error::{Result, file_system_error};
use crate::spatial::{RectangleList, SvgRect};

fn svg_header(rows: usize, cols: usize) -> String {
    format!(
        "<svg width=\"{cols}\" height=\"{rows}\" xmlns=\"{SVG_NAMESPACE}\" xmlns:xlink=\"{XLINK_NAMESPACE}\">"
    )
}

fn rect_element(rect: &SvgRect) -> String {
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"fill:rgb({i},{i},{i})\" />",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        i = rect.intensity
    )
}

/// Render an SVG document of `cols x rows` pixels
pub fn render_svg(rows: usize, cols: usize, rectangles: &RectangleList) -> String {
    let mut document = svg_header(rows, cols);
    document.push('\n');
    for rect in rectangles {
        // Writing into a String cannot fail
        let _ = writeln!(document, "{}", rect_element(rect));
    }
    document.push_str("</svg>\n");
    document
}

/// Stream an SVG document to `writer`
///
/// # Errors
///
/// Propagates any error returned by the writer
pub fn write_svg<W: Write>(
    writer: &mut W,
    rows: usize,
    cols: usize,
    rectangles: &RectangleList,
) -> std::io::Result<()> {
    writeln!(writer, "{}", svg_header(rows, cols))?;
    for rect in rectangles {
        writeln!(writer, "{}", rect_element(rect))?;
    }
    writeln!(writer, "</svg>")
}

/// Write an SVG document to `output_path`, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the directory or file cannot be created or
/// written
pub fn export_svg(
    output_path: &Path,
    rows: usize,
    cols: usize,
    rectangles: &RectangleList,
) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    let file =
        File::create(output_path).map_err(|e| file_system_error(output_path, "create file", e))?;
    let mut writer = BufWriter::new(file);
    write_svg(&mut writer, rows, cols, rectangles)
        .and_then(|()| writer.flush())
        .map_err(|e| file_system_error(output_path, "write svg", e))
}
