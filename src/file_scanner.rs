use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::Grammar;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files with a supported extension, sorted.
    pub files: BTreeSet<PathBuf>,
    /// Files named explicitly whose extension maps to no grammar.
    pub unsupported: BTreeSet<PathBuf>,
    pub skipped_count: usize,
}

/// Collect source files to check.
///
/// Directories are walked and only `.cs`, `.js` and `.sql` files are kept.
/// Files given directly are always reported: supported ones in `files`,
/// others in `unsupported`.
pub fn scan_paths(paths: &[PathBuf], base_dir: &Path, ignore_patterns: &[String]) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("Invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let is_ignored = |path: &Path| {
        literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
            || glob_patterns
                .iter()
                .any(|p| p.matches(&path.to_string_lossy()))
    };

    for path in paths {
        let path = if path.is_absolute() {
            path.clone()
        } else {
            base_dir.join(path)
        };

        if path.is_file() {
            if Grammar::from_path(&path).is_supported() {
                result.files.insert(path);
            } else {
                result.unsupported.insert(path);
            }
            continue;
        }

        if !path.is_dir() {
            bail!("Path does not exist: {}", path.display());
        }

        for entry in WalkDir::new(&path) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    tracing::warn!("Cannot access path: {}", e);
                    continue;
                }
            };
            let entry_path = entry.path();

            if is_ignored(entry_path) {
                continue;
            }

            if entry_path.is_file() && Grammar::from_path(entry_path).is_supported() {
                result.files.insert(entry_path.to_path_buf());
            }
        }
    }

    Ok(result)
}
