//! End-to-end workflow: read inputs, extract, package, rewrite, emit.
//!
//! One run per invocation; nothing persists across runs. The caller receives
//! an explicit [`RunSummary`] instead of any shared status state.

mod package;
#[cfg(test)]
mod tests;

pub use package::package_fragments;

use crate::archive::{ArchiveBuilder, OutputSink};
use crate::extract::extract_functions;
use crate::rewrite::rewrite;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the rewritten HTML entry at the archive root.
pub const UPDATED_HTML_NAME: &str = "updated_file.html";

/// Default file name of the emitted archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "functions.zip";

/// Workflow failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read HTML input `{path}`")]
    HtmlInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read JS input `{path}`")]
    JsInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize archive")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to emit `{name}`")]
    Emit {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Functions extracted from the HTML document.
    pub html_functions: usize,
    /// Functions extracted from the optional JS file.
    pub js_functions: usize,
    /// Script references dropped because the HTML has no `</body>` tag.
    pub references_dropped: usize,
    /// Total entries written into the archive (functions + rewritten HTML).
    pub archive_entries: usize,
}

/// Extraction output before serialization.
pub struct ProcessOutput {
    pub archive: ArchiveBuilder,
    pub summary: RunSummary,
}

/// Pure core of the workflow: extract from both sources, package everything
/// into one shared archive, rewrite the HTML.
///
/// HTML fragments are packaged before JS fragments. Only HTML fragments are
/// referenced by the rewritten page; JS-file functions are archived but not
/// referenced. The rewritten HTML lands at the archive root as
/// `updated_file.html`.
pub fn process(html: &str, js: &str) -> ProcessOutput {
    let html_fragments = extract_functions(html);
    let js_fragments = extract_functions(js);

    let mut archive = ArchiveBuilder::new();
    package_fragments(&html_fragments, &mut archive);
    package_fragments(&js_fragments, &mut archive);

    let rewritten = rewrite(html, &html_fragments);
    archive.insert(UPDATED_HTML_NAME, rewritten.html.into_bytes());

    let summary = RunSummary {
        html_functions: html_fragments.len(),
        js_functions: js_fragments.len(),
        references_dropped: rewritten.dropped_references,
        archive_entries: archive.len(),
    };

    ProcessOutput { archive, summary }
}

/// One complete run: read the input files, process, serialize, emit.
///
/// The HTML file is required. The JS file is optional; an empty JS file
/// behaves the same as no JS file at all.
pub fn run(
    html_path: &Path,
    js_path: Option<&Path>,
    archive_name: &str,
    sink: &dyn OutputSink,
) -> Result<RunSummary, PipelineError> {
    let html = fs::read_to_string(html_path).map_err(|source| PipelineError::HtmlInput {
        path: html_path.to_path_buf(),
        source,
    })?;

    let js = match js_path {
        Some(path) => fs::read_to_string(path).map_err(|source| PipelineError::JsInput {
            path: path.to_path_buf(),
            source,
        })?,
        None => String::new(),
    };

    let output = process(&html, &js);
    let bytes = output.archive.into_zip_bytes()?;

    sink.emit(archive_name, &bytes)
        .map_err(|source| PipelineError::Emit {
            name: archive_name.to_string(),
            source,
        })?;

    Ok(output.summary)
}
