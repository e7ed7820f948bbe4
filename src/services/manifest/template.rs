use crate::types::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Default manifest written when none exists yet.
pub const MANIFEST_TEMPLATE: &str = "<?xml version=\"1.0\"?>\n<PedAnims>\n\n</PedAnims>\n";

/// Write the default template to `path`, creating parent directories as
/// needed.
pub fn create_manifest(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Manifest(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }
    fs::write(path, MANIFEST_TEMPLATE)
        .map_err(|e| AppError::Manifest(format!("Failed to create {}: {e}", path.display())))
}
