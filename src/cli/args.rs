//! Command-line interface definitions.

use crate::pipeline::DEFAULT_ARCHIVE_NAME;
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Extract JavaScript functions from an HTML page into a zip bundle,
/// rewriting the page to load them externally.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HTML file to process (inline scripts are extracted and rewritten)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub html: PathBuf,

    /// Standalone JS file whose functions are archived as well (optional)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub js: Option<PathBuf>,

    /// Directory the archive is written into
    #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// File name of the emitted archive
    #[arg(long, default_value = DEFAULT_ARCHIVE_NAME)]
    pub archive_name: String,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
