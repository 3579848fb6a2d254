//! CLI entry point for raster to SVG vectorization

use clap::Parser;
use vectorizer::io::cli::{Cli, FileProcessor};

fn main() -> vectorizer::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
