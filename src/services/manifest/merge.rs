use crate::services::scanner::{Category, CategoryMap};
use crate::types::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Closing tag of the manifest document. Every merge splices its block
/// immediately before the single occurrence of this tag.
pub const CLOSING_TAG: &str = "</PedAnims>";

/// Merge the categorized marker lines into the manifest. An empty map is
/// a no-op and leaves the file untouched. Returns the number of entry
/// lines written.
///
/// This is a textual splice, not a document-model edit, so the manifest
/// must contain exactly one closing tag; zero or multiple is an error
/// rather than a silent no-op. The merger has no memory of earlier runs:
/// merging the same map twice appends the block twice.
pub fn merge_markers(manifest_path: &Path, markers: &CategoryMap) -> AppResult<usize> {
    if markers.is_empty() {
        return Ok(0);
    }

    let content = fs::read_to_string(manifest_path).map_err(|e| {
        AppError::Manifest(format!("Failed to read {}: {e}", manifest_path.display()))
    })?;

    let occurrences = content.matches(CLOSING_TAG).count();
    if occurrences != 1 {
        return Err(AppError::Manifest(format!(
            "expected exactly one {CLOSING_TAG} in {}, found {occurrences}",
            manifest_path.display()
        )));
    }

    let block = build_block(markers);
    let updated = content.replacen(CLOSING_TAG, &format!("{block}\n{CLOSING_TAG}"), 1);

    fs::write(manifest_path, updated).map_err(|e| {
        AppError::Manifest(format!("Failed to write {}: {e}", manifest_path.display()))
    })?;

    Ok(markers.len())
}

/// One tab-indented header per non-empty category (emission order), each
/// followed by its tab-indented entry lines.
fn build_block(markers: &CategoryMap) -> String {
    let mut lines = Vec::new();
    for category in Category::EMISSION_ORDER {
        let entries = markers.lines(category);
        if entries.is_empty() {
            continue;
        }
        lines.push(format!("\t<Anim dict=\"{}\" name=\"\" />", category.label()));
        for entry in entries {
            lines.push(format!("\t{entry}"));
        }
    }
    lines.join("\n")
}
