use super::types::{Category, CategoryMap};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// A candidate line must carry both tokens. Two independent substring
/// tests, not a tag parser: the input is arbitrary third-party content
/// and partial or malformed markup should still be picked up.
const MARKER_OPEN_TOKEN: &str = "<Anim";
const MARKER_ATTR_TOKEN: &str = "dict=";

/// Recursively scan every file under `root` for animation-dictionary
/// reference lines, classify them, and dedup per category.
///
/// Returns the map plus the count of newly accepted lines. Nothing here
/// aborts the scan: unreadable files are skipped and non-UTF-8 content is
/// decoded leniently.
pub fn scan_markers(root: &Path) -> (CategoryMap, usize) {
    log::info!("Searching for animation dictionaries...");

    let mut markers = CategoryMap::default();
    let mut found: usize = 0;

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(text) = read_lenient(entry.path()) else {
            continue;
        };

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty()
                || !trimmed.contains(MARKER_OPEN_TOKEN)
                || !trimmed.contains(MARKER_ATTR_TOKEN)
            {
                continue;
            }

            let category = Category::classify(trimmed);
            if markers.insert(category, trimmed) {
                log::info!("Found ({category}): {trimmed}");
                found += 1;
            }
        }
    }

    if found == 0 {
        log::info!("No animation dictionaries found.");
    } else {
        log::info!("Total found: {found} animation dictionary entries.");
    }

    (markers, found)
}

/// Read a file as text. Valid UTF-8 is used as-is; anything else falls
/// back to a Windows-1252 decode, which maps every byte and never fails.
fn read_lenient(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(err) => {
            let (cow, _encoding, _had_errors) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
            Some(cow.into_owned())
        }
    }
}
