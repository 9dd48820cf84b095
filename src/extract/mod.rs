//! Function extraction from raw source text.
//!
//! Locates `function <name>(...)` headers with a regex, then walks the body
//! with an explicit brace-depth scanner so nested `{...}` blocks do not
//! truncate the fragment. This is still text-level matching, not a JS parser:
//! arrow functions, methods, and braces inside string literals or comments
//! are not understood, and that imprecision is accepted.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a function header: keyword, name, opening of the parameter list.
static FUNCTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+(\w+)\s*\(").unwrap());

/// A text span identified as one complete function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionFragment {
    name: String,
    text: String,
}

impl FunctionFragment {
    /// First identifier following the `function` keyword. Never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw source text, header through the matching closing brace.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Extract every function definition from `content`, in document order.
///
/// Empty input yields an empty sequence. Malformed candidates (unclosed
/// parameter list or body) and function declarations nested inside an
/// already-extracted body are skipped without error.
pub fn extract_functions(content: &str) -> Vec<FunctionFragment> {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    for caps in FUNCTION_HEADER.captures_iter(content) {
        let header = caps.get(0).expect("regex match has a whole-match group");
        if header.start() < cursor {
            // Inside a fragment already consumed (nested declaration)
            continue;
        }

        let name = caps.get(1).expect("header regex has a name group").as_str();
        let Some(end) = find_body_end(content, header.end()) else {
            continue;
        };

        fragments.push(FunctionFragment {
            name: name.to_string(),
            text: content[header.start()..end].to_string(),
        });
        cursor = end;
    }

    fragments
}

/// Scan from just past the opening `(` of the parameter list to the end of
/// the function body. Returns the byte offset one past the closing `}`, or
/// `None` when the parameter list or body never closes.
fn find_body_end(content: &str, params_start: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut i = params_start;

    // Close the parameter list first; parentheses may nest (default values)
    let mut depth = 1usize;
    while i < bytes.len() && depth > 0 {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    if depth > 0 {
        return None;
    }

    // Find the body's opening brace
    while i < bytes.len() && bytes[i] != b'{' {
        i += 1;
    }
    if i == bytes.len() {
        return None;
    }

    // Walk the body tracking brace depth; the first depth-zero `}` ends it
    let mut depth = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}
