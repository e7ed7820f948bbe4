//! Archive discovery and extraction for the staging directory.

pub mod backend;
mod extract;
mod types;

pub use extract::{discover_archives, extract_archives};
pub use types::{ArchiveFormat, ExtractionOutcome};

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod extract_tests;
