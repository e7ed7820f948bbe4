use super::backend::RarBackend;
use super::types::{ArchiveFormat, ExtractionOutcome};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// List supported archives directly inside the staging directory
/// (non-recursive), sorted by path for a deterministic extraction order.
pub fn discover_archives(staging_dir: &Path) -> Result<Vec<(PathBuf, ArchiveFormat)>, String> {
    let entries = fs::read_dir(staging_dir).map_err(|e| {
        format!(
            "Failed to read staging directory {}: {e}",
            staging_dir.display()
        )
    })?;

    let mut archives = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(format) = ArchiveFormat::from_path(&path) {
            archives.push((path, format));
        }
    }

    archives.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(archives)
}

/// Extract every supported archive into a sibling directory named after
/// the archive's stem. Pre-existing target directories are reused.
///
/// Failures are per-archive: one corrupt file does not stop the rest.
/// After each successful extraction the configured settle delay gives
/// slow file-system flushers time to finish before the content is
/// scanned.
pub fn extract_archives(
    staging_dir: &Path,
    rar: &dyn RarBackend,
    settle: Duration,
) -> Result<Vec<ExtractionOutcome>, String> {
    let archives = discover_archives(staging_dir)?;

    if archives.is_empty() {
        log::info!("No ZIP or RAR files found.");
        return Ok(Vec::new());
    }
    log::info!("Found {} archive(s) to extract.", archives.len());

    let mut outcomes = Vec::with_capacity(archives.len());
    for (path, format) in archives {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "extracted".to_string());
        let dest = staging_dir.join(&stem);

        let result = extract_one(&path, format, &dest, rar);
        let (files_extracted, error) = match result {
            Ok(count) => {
                log::info!(
                    "Extracted: {} -> {}",
                    path.file_name().unwrap_or_default().to_string_lossy(),
                    dest.display()
                );
                if !settle.is_zero() {
                    std::thread::sleep(settle);
                }
                (count, None)
            }
            Err(e) => {
                log::error!("Error extracting {}: {e}", path.display());
                (0, Some(e))
            }
        };

        outcomes.push(ExtractionOutcome {
            archive: path,
            dest,
            files_extracted,
            error,
        });
    }

    Ok(outcomes)
}

fn extract_one(
    archive: &Path,
    format: ArchiveFormat,
    dest: &Path,
    rar: &dyn RarBackend,
) -> Result<usize, String> {
    fs::create_dir_all(dest)
        .map_err(|e| format!("Failed to create destination {}: {e}", dest.display()))?;

    match format {
        ArchiveFormat::Zip => extract_zip_inner(archive, dest),
        ArchiveFormat::Rar => {
            rar.extract_all(archive, dest)?;
            // The backend does not report a count; tally what landed.
            let count = walkdir::WalkDir::new(dest)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .count();
            Ok(count)
        }
    }
}

fn extract_zip_inner(archive_path: &Path, dest_path: &Path) -> Result<usize, String> {
    let file = fs::File::open(archive_path).map_err(|e| format!("Failed to open archive: {e}"))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| format!("Invalid or corrupt ZIP: {e}"))?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| format!("Failed to read entry {i}: {e}"))?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => continue, // Skip unsafe paths
        };

        let output_path = dest_path.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| format!("Failed to create dir: {e}"))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| format!("Failed to create parent: {e}"))?;
            }
            let mut outfile = fs::File::create(&output_path)
                .map_err(|e| format!("Failed to create file: {e}"))?;
            io::copy(&mut entry, &mut outfile).map_err(|e| format!("Failed to write file: {e}"))?;
            count += 1;
        }
    }
    Ok(count)
}
