//! In-memory archive accumulation, zip serialization, and output emission.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use zip::write::SimpleFileOptions;

// =============================================================================
// Archive Builder
// =============================================================================

/// Ordered set of named entries destined for the output zip.
///
/// Entries keep insertion order. Re-inserting a path overwrites the earlier
/// bytes in place (last write wins), which is how duplicate function names
/// collapse to a single archive file.
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `bytes` at `path`, replacing any earlier entry at that path.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let path = path.into();
        let bytes = bytes.into();
        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some((_, existing)) => *existing = bytes,
            None => self.entries.push((path, bytes)),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry paths in insertion order.
    #[allow(dead_code)]
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Serialize all entries into a zip blob.
    pub fn into_zip_bytes(self) -> zip::result::ZipResult<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (path, bytes) in &self.entries {
            writer.start_file(path.as_str(), options)?;
            writer.write_all(bytes)?;
        }

        Ok(writer.finish()?.into_inner())
    }
}

// =============================================================================
// Output Sink
// =============================================================================

/// Delivery mechanism for the finished archive.
///
/// The original environment triggered a browser download; here the artifact
/// is handed to whatever sink the caller injects.
pub trait OutputSink {
    fn emit(&self, name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes emitted artifacts into a directory, creating it if needed.
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for DirSink {
    fn emit(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(name), bytes)
    }
}
