//! Archive packaging of extracted function fragments.

use crate::archive::ArchiveBuilder;
use crate::digest::entry_path;
use crate::extract::FunctionFragment;

/// Insert one `{digest}/{name}.js` entry per fragment into the archive.
///
/// Fragments sharing a name share a path; a later fragment overwrites the
/// earlier entry (last write wins, in extraction order).
pub fn package_fragments(fragments: &[FunctionFragment], archive: &mut ArchiveBuilder) {
    for fragment in fragments {
        archive.insert(entry_path(fragment.name()), fragment.text().as_bytes());
    }
}
