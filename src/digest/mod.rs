//! Archive folder naming via a content digest of the function name.
//!
//! One synchronous digest path shared by packaging and rewriting, so the
//! folders created in the archive and the script references emitted into the
//! rewritten HTML always agree.

use std::fmt;

/// Deterministic hex identifier derived from a function name, used as that
/// function's folder name inside the archive.
///
/// Identical names always yield identical keys. Collisions between distinct
/// names are not mitigated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestKey(String);

impl DigestKey {
    /// Derive the key for a function name.
    pub fn of(name: &str) -> Self {
        Self(hex::encode(blake3::hash(name.as_bytes()).as_bytes()))
    }

    /// Get the hex string.
    #[allow(dead_code)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Archive path for a named function: `{digest}/{name}.js`.
///
/// Single source of truth for the archive layout; both the packager and the
/// HTML rewriter go through here.
pub fn entry_path(name: &str) -> String {
    format!("{}/{name}.js", DigestKey::of(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(DigestKey::of("foo"), DigestKey::of("foo"));
    }

    #[test]
    fn test_digest_is_hex_fixed_length() {
        let key = DigestKey::of("foo");
        assert_eq!(key.as_str().len(), 64);
        assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_names_distinct_keys() {
        assert_ne!(DigestKey::of("foo"), DigestKey::of("bar"));
    }

    #[test]
    fn test_entry_path_layout() {
        let path = entry_path("foo");
        assert_eq!(path, format!("{}/foo.js", DigestKey::of("foo")));
    }
}
