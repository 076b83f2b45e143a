//! Go source file discovery.

use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Resolve the command-line paths into a sorted list of `.go` files.
///
/// Files are taken as given; directories are walked recursively, skipping
/// hidden directories and `vendor` trees. A path that does not exist is an
/// argument error.
pub fn collect_go_files(paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            scan_go_files_recursive(path, &mut files);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(CliError::invalid_argument(format!(
                "path does not exist: {}",
                path.display()
            )));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Recursively collect `.go` files under `dir`.
fn scan_go_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if !name.starts_with('.') && name != "vendor" {
                    scan_go_files_recursive(&path, files);
                }
            } else if path.extension().is_some_and(|ext| ext == "go") {
                files.push(path);
            }
        }
    }
}
