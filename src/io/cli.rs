//! Command-line interface for batch conversion of raster images to SVG

use crate::algorithm::coverage::verify_tiling;
use crate::algorithm::decomposer::{DecomposerConfig, vectorize};
use crate::io::configuration::{
    DEFAULT_MAX_DEPTH, DEFAULT_TOLERANCE, PREVIEW_EXTENSION, PREVIEW_SUFFIX, SUPPORTED_EXTENSIONS,
    SVG_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::{export_preview, load_grayscale};
use crate::io::progress::{FileStage, ProgressManager};
use crate::io::svg::export_svg;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "vectorizer")]
#[command(
    author,
    version,
    about = "Convert raster images to SVG rectangles by centroid quadrant splitting"
)]
/// Command-line arguments for the vectorization tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Largest intensity variance a region may have and still be drawn as one rectangle
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE, allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Maximum nesting of quadrant splits
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Also write a rendered PNG preview next to the SVG
    #[arg(short, long)]
    pub preview: bool,

    /// Verify that the rectangles tile the image before writing
    #[arg(short, long)]
    pub check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-file summaries
    #[arg(short, long)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level filter for this invocation
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }

    /// Decomposition parameters taken from the arguments
    pub const fn decomposer_config(&self) -> DecomposerConfig {
        DecomposerConfig {
            tolerance: self.tolerance,
            max_depth: self.max_depth,
        }
    }
}

/// Whether `path` has an extension the image loader accepts
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Orchestrates batch conversion of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or target is invalid, or if any
    /// file fails to convert
    pub fn process(&mut self) -> Result<()> {
        self.cli.decomposer_config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("No images to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Input files selected by the target argument
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a supported image nor a
    /// readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file is not a supported image format",
                ));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if path.is_file() && is_supported_image(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let grid = load_grayscale(input_path)?;

        self.report_stage(index, FileStage::Decomposing);
        let rectangles = vectorize(&grid, self.cli.decomposer_config())?;

        if self.cli.check {
            verify_tiling(&rectangles, grid.rows(), grid.cols())?;
        }

        self.report_stage(index, FileStage::Writing);
        export_svg(&output_path, grid.rows(), grid.cols(), &rectangles)?;

        if self.cli.preview {
            let preview_path = Self::get_preview_path(input_path);
            export_preview(&preview_path, grid.rows(), grid.cols(), &rectangles)?;
        }

        log::info!(
            "{}: {}x{} pixels -> {} rectangles in {:.2?}",
            input_path.display(),
            grid.cols(),
            grid.rows(),
            rectangles.len(),
            start_time.elapsed()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, rectangles.len(), start_time.elapsed());
        }

        Ok(())
    }

    fn report_stage(&mut self, index: usize, stage: FileStage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }

    /// Path of the SVG written for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        input_path.with_extension(SVG_EXTENSION)
    }

    /// Path of the raster preview written for `input_path`
    pub fn get_preview_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let preview_name = format!(
            "{}{PREVIEW_SUFFIX}.{PREVIEW_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }
}
