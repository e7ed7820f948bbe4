//! Persistent favourites manifest: bootstrap, lookup, and merge.

mod merge;
mod template;

pub use merge::{merge_markers, CLOSING_TAG};
pub use template::{create_manifest, MANIFEST_TEMPLATE};

use std::path::{Path, PathBuf};

/// Locate an existing manifest: the working root first, then next to the
/// executable.
pub fn find_manifest(root: &Path, file_name: &str) -> Option<PathBuf> {
    let candidate = root.join(file_name);
    if candidate.exists() {
        return Some(candidate);
    }

    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(file_name);
    if candidate.exists() {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod merge_tests;
