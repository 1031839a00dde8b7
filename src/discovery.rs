//! Workflow file discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ValidateError, ValidateResult};

/// Extensions GitHub recognises for workflow files
pub const DEFAULT_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// List workflow files directly inside `dir` (no recursion).
///
/// Only regular files whose extension matches one of `extensions` exactly are
/// returned, sorted by path so repeated runs see the same order.
pub fn discover_workflows(dir: &Path, extensions: &[String]) -> ValidateResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ValidateError::DirectoryMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if extensions.iter().any(|allowed| allowed == ext) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
