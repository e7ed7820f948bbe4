use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Upper bound for the `_<n>` collision suffix search; past this a
/// per-file error is reported instead of looping forever.
const MAX_SUFFIX_ATTEMPTS: usize = 10_000;

/// Recursively move every file with the given extension (ASCII
/// case-insensitive) out of `source_root` into the flat `dest_dir`.
///
/// Name collisions at the destination get an incrementing `_<n>` suffix;
/// existing files are never overwritten. Per-file failures are logged and
/// skipped. Returns the number of files moved, so a second run over an
/// already-relocated tree reports 0.
pub fn relocate_assets(
    source_root: &Path,
    dest_dir: &Path,
    extension: &str,
) -> Result<usize, String> {
    fs::create_dir_all(dest_dir)
        .map_err(|e| format!("Failed to create destination {}: {e}", dest_dir.display()))?;

    let mut moved: usize = 0;
    for entry in WalkDir::new(source_root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        // The destination can sit inside the walk root when overridden.
        if path.starts_with(dest_dir) {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if !matches {
            continue;
        }

        let file_name = match path.file_name() {
            Some(n) => n,
            None => continue,
        };

        let dest = match collision_free_dest(dest_dir, file_name) {
            Ok(d) => d,
            Err(e) => {
                log::error!("Error moving {}: {e}", path.display());
                continue;
            }
        };

        match move_file(path, &dest) {
            Ok(()) => {
                moved += 1;
                log::info!("Moved: {} -> {}", path.display(), dest.display());
            }
            Err(e) => log::error!("Error moving {}: {e}", path.display()),
        }
    }

    log::info!(
        "Moved {moved} .{extension} file(s) to {}",
        dest_dir.display()
    );
    Ok(moved)
}

/// Pick a destination path that does not exist yet: the plain name first,
/// then `stem_1.ext`, `stem_2.ext`, …
fn collision_free_dest(dest_dir: &Path, file_name: &OsStr) -> Result<PathBuf, String> {
    let direct = dest_dir.join(file_name);
    if !direct.exists() {
        return Ok(direct);
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    for i in 1..=MAX_SUFFIX_ATTEMPTS {
        let candidate = dest_dir.join(format!("{stem}_{i}{ext}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(format!(
        "no free name for {} after {MAX_SUFFIX_ATTEMPTS} attempts",
        name.display()
    ))
}

/// Move via `fs::rename`, falling back to copy-and-delete through
/// `fs_extra` when the rename fails (likely a cross-device link error).
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::warn!("fs::rename failed (cross-device?): {e}. Attempting fallback move...");

            if to.exists() {
                return Err(e); // Propagate the original error (e.g., AlreadyExists)
            }
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut options = fs_extra::file::CopyOptions::new();
            options.overwrite = false;

            fs_extra::file::move_file(from, to, &options)
                .map(|_| ())
                .map_err(|err| std::io::Error::other(err.to_string()))
        }
    }
}
