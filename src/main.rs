//! Scriptsplit - extracts JavaScript function definitions from an HTML page
//! (and an optional companion JS file) into a zip bundle, rewriting the page
//! to reference the extracted files instead of inline code.

mod archive;
mod cli;
mod digest;
mod extract;
mod logger;
mod pipeline;
mod rewrite;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    cli::run(&cli)
}
