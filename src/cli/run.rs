//! Single-run command implementation.

use crate::archive::DirSink;
use crate::cli::Cli;
use crate::pipeline;
use crate::utils::plural_count;
use crate::{debug, log};
use anyhow::{Context, Result, bail};

/// Process the input files and emit the archive.
pub fn run(cli: &Cli) -> Result<()> {
    // The HTML input is required; refuse to start without it
    if !cli.html.is_file() {
        bail!("HTML file `{}` not found", cli.html.display());
    }

    let sink = DirSink::new(&cli.output);
    let summary = pipeline::run(&cli.html, cli.js.as_deref(), &cli.archive_name, &sink)
        .context("an error occurred while processing the files")?;

    debug!("extract"; "{} from HTML, {} from JS",
        plural_count(summary.html_functions, "function"),
        plural_count(summary.js_functions, "function"));

    if summary.references_dropped > 0 {
        log!("rewrite"; "no </body> tag in `{}`: {} dropped",
            cli.html.display(),
            plural_count(summary.references_dropped, "script reference"));
    }

    let archived = summary.html_functions + summary.js_functions;
    log!("archive"; "wrote `{}` to {} ({} archived)",
        cli.archive_name,
        cli.output.display(),
        plural_count(archived, "function"));

    Ok(())
}
