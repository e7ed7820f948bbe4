//! Interactive confirmation and directory bootstrap glue.

use crate::types::errors::{AppError, AppResult};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Ask a yes/no question on stdin. Empty input, EOF, and unreadable input
/// all fall back to the default answer.
pub fn confirm(question: &str, default_yes: bool) -> bool {
    print!("{question}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => default_yes,
        Ok(_) => {
            let answer = input.trim();
            if answer.is_empty() {
                default_yes
            } else {
                matches!(answer.to_lowercase().as_str(), "y" | "yes" | "j" | "ja")
            }
        }
    }
}

/// Create a directory (and any missing parents) if it does not exist yet.
pub fn ensure_directory(path: &Path) -> AppResult<()> {
    fs::create_dir_all(path)
        .map_err(|e| AppError::Io(format!("Failed to create directory {}: {e}", path.display())))
}
