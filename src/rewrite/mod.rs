//! Inline script removal and external script reference injection.

use crate::digest::entry_path;
use crate::extract::FunctionFragment;
use regex::Regex;
use std::sync::LazyLock;

/// Matches one inline `<script ...>...</script>` block, case-insensitively.
/// The body match is lazy: any literal `</script>` closes the nearest
/// preceding opening tag; nested or malformed blocks are not specially
/// handled.
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").unwrap());

/// Marker the generated references are inserted before, matched literally at
/// its first occurrence.
const BODY_CLOSE: &str = "</body>";

/// Result of rewriting an HTML document.
#[derive(Debug)]
pub struct Rewritten {
    /// The stripped and re-referenced HTML.
    pub html: String,
    /// References that could not be placed because the document has no
    /// `</body>` tag. Zero on the happy path.
    pub dropped_references: usize,
}

/// Strip every inline script block from `html` and insert one external
/// `<script src>` reference per fragment immediately before `</body>`.
///
/// References use the same digest-derived paths the packager writes into the
/// archive. Without a `</body>` tag the generated references are dropped
/// (and counted), never appended elsewhere. The input is not mutated.
pub fn rewrite(html: &str, fragments: &[FunctionFragment]) -> Rewritten {
    let stripped = SCRIPT_BLOCK.replace_all(html, "");

    if fragments.is_empty() {
        return Rewritten {
            html: stripped.into_owned(),
            dropped_references: 0,
        };
    }

    let mut tags = String::new();
    for fragment in fragments {
        tags.push_str(&format!(
            "<script src=\"{}\"></script>\n",
            entry_path(fragment.name())
        ));
    }

    match stripped.find(BODY_CLOSE) {
        Some(pos) => {
            let mut html = String::with_capacity(stripped.len() + tags.len());
            html.push_str(&stripped[..pos]);
            html.push_str(&tags);
            html.push_str(&stripped[pos..]);
            Rewritten {
                html,
                dropped_references: 0,
            }
        }
        None => Rewritten {
            html: stripped.into_owned(),
            dropped_references: fragments.len(),
        },
    }
}
