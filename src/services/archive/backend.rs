//! Injectable RAR extraction capability.
//!
//! RAR is not self-describing the way ZIP is for us: the decoder comes
//! from the unrar library, either linked in-process or shelled out to a
//! user-supplied executable. The backend is chosen once at startup and
//! handed to the extractor, never hard-coded to a platform path.

use std::path::{Path, PathBuf};
use std::process::Command;

pub trait RarBackend {
    fn extract_all(&self, archive: &Path, dest: &Path) -> Result<(), String>;
}

/// In-process extraction through the bundled unrar library.
pub struct LibRarBackend;

impl RarBackend for LibRarBackend {
    fn extract_all(&self, archive: &Path, dest: &Path) -> Result<(), String> {
        let path_str = archive.to_str().ok_or("RAR path contains invalid UTF-8")?;
        let dest_str = dest.to_str().ok_or("Dest path contains invalid UTF-8")?;

        rar::Archive::extract_all(path_str, dest_str, "")
            .map(|_| ())
            .map_err(|e| format!("Failed to extract RAR: {e:?}"))
    }
}

/// Extraction through an external unrar executable.
pub struct ToolRarBackend {
    tool: PathBuf,
}

impl ToolRarBackend {
    pub fn new(tool: PathBuf) -> Self {
        Self { tool }
    }
}

impl RarBackend for ToolRarBackend {
    fn extract_all(&self, archive: &Path, dest: &Path) -> Result<(), String> {
        // unrar treats a trailing separator as "extract into this directory".
        let mut dest_arg = dest.as_os_str().to_os_string();
        dest_arg.push(std::path::MAIN_SEPARATOR_STR);

        let output = Command::new(&self.tool)
            .arg("x")
            .arg("-y")
            .arg("-o+")
            .arg(archive)
            .arg(&dest_arg)
            .output()
            .map_err(|e| format!("Failed to launch {}: {e}", self.tool.display()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(format!(
                "{} exited with {}: {}",
                self.tool.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))
        }
    }
}

/// Resolve the backend once at startup from the configured tool path.
pub fn resolve(unrar_tool: Option<&Path>) -> Box<dyn RarBackend> {
    match unrar_tool {
        Some(tool) => {
            log::info!("Using external unrar tool: {}", tool.display());
            Box::new(ToolRarBackend::new(tool.to_path_buf()))
        }
        None => Box::new(LibRarBackend),
    }
}
