//! Sequential run pipeline: setup, extract, relocate, scan, merge.

use crate::config::AppConfig;
use crate::services::archive::{self, backend};
use crate::services::file_ops;
use crate::services::manifest;
use crate::services::scanner;
use crate::setup;
use crate::types::errors::{AppError, AppResult};
use serde::Serialize;

/// Counts reported at the end of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub archives_found: usize,
    pub archives_extracted: usize,
    pub assets_moved: usize,
    pub markers_found: usize,
    pub manifest_updated: bool,
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// The user declined one of the setup prompts. Not an error.
    Cancelled,
}

/// Run the full pipeline. `confirm` is the yes/no policy for the two
/// setup prompts; it is skipped entirely when `assume_yes` is set.
///
/// Per-item failures inside the stages are absorbed and logged there; an
/// error returned from here means the run could not proceed at all.
pub fn run(config: &AppConfig, confirm: &mut dyn FnMut(&str) -> bool) -> AppResult<RunOutcome> {
    let manifest_path = match manifest::find_manifest(&config.root, &config.manifest_name) {
        Some(path) => {
            log::info!("Found: '{}'", path.display());
            path
        }
        None => {
            let target = config.root.join(&config.manifest_name);
            let question = format!(
                "The file '{}' does not exist.\nDo you want to create it with the default template? (Y/n): ",
                config.manifest_name
            );
            if !config.assume_yes && !confirm(&question) {
                log::info!("Cancelled. File was not created.");
                return Ok(RunOutcome::Cancelled);
            }
            manifest::create_manifest(&target)?;
            log::info!("File created: '{}'", target.display());
            target
        }
    };

    if config.staging_dir.exists() {
        log::info!("Directory exists: '{}'", config.staging_dir.display());
    } else {
        let question = format!(
            "The directory '{}' does not exist.\nDo you want to create it? (Y/n): ",
            config.staging_dir.display()
        );
        if !config.assume_yes && !confirm(&question) {
            log::info!("Cancelled. Directory was not created.");
            return Ok(RunOutcome::Cancelled);
        }
        setup::ensure_directory(&config.staging_dir)?;
        log::info!("Directory created: '{}'", config.staging_dir.display());
    }

    let rar_backend = backend::resolve(config.unrar_tool.as_deref());
    let outcomes = archive::extract_archives(&config.staging_dir, rar_backend.as_ref(), config.settle)
        .map_err(AppError::Archive)?;
    let archives_found = outcomes.len();
    let archives_extracted = outcomes.iter().filter(|o| o.success()).count();

    let assets_moved = match file_ops::relocate_assets(
        &config.staging_dir,
        &config.assets_dir,
        &config.asset_ext,
    ) {
        Ok(count) => count,
        Err(e) => {
            log::error!("Asset relocation failed: {e}");
            0
        }
    };

    let (markers, markers_found) = scanner::scan_markers(&config.staging_dir);

    let mut manifest_updated = false;
    if markers.is_empty() {
        log::info!("No animations to add.");
    } else {
        match manifest::merge_markers(&manifest_path, &markers) {
            Ok(added) => {
                manifest_updated = true;
                log::info!("Added {added} animation(s) to {}", manifest_path.display());
            }
            Err(e) => log::error!("Error updating manifest: {e}"),
        }
    }

    Ok(RunOutcome::Completed(RunSummary {
        archives_found,
        archives_extracted,
        assets_moved,
        markers_found,
        manifest_updated,
    }))
}
