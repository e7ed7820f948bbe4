use std::path::{Path, PathBuf};

/// Supported archive format. Anything else in the staging directory is
/// left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Rar,
}

impl ArchiveFormat {
    /// Detect format from file extension, case-insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "zip" => Some(Self::Zip),
            "rar" => Some(Self::Rar),
            _ => None,
        }
    }
}

/// Per-archive result of an extraction pass. Failures are collected here
/// instead of aborting the remaining archives.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub archive: PathBuf,
    pub dest: PathBuf,
    pub files_extracted: usize,
    pub error: Option<String>,
}

impl ExtractionOutcome {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}
