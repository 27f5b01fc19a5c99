// src/core/walker.rs
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::ignore::Patterns;
use crate::utils::is_hidden;

/// File extension of markup host files.
pub const MARKUP_EXT: &str = ".html";
/// File extension of script host files and script reference targets.
pub const SCRIPT_EXT: &str = ".js";
/// File extension of stylesheet reference targets.
pub const STYLE_EXT: &str = ".css";

/// Directory names never traversed during the markup pass, in addition
/// to the build-output directory and any user-supplied names.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// Collects every markup file under the root.
///
/// Skips hidden directories, the fixed excluded set, `exclude_dirs` and
/// anything matched by the ignore patterns. Only set membership of the
/// result is meaningful; traversal order is not part of the contract.
///
/// # Errors
///
/// Returns an error if a directory cannot be read during traversal.
pub fn collect_markup_files(
    root: &Path,
    exclude_dirs: &[&str],
    patterns: &Patterns,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_exclude(e, exclude_dirs, patterns))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if has_extension(entry.path(), MARKUP_EXT) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// Collects every script file under the build-output directory.
///
/// The build-output tree is self-contained, so no exclusion set applies
/// here; the caller decides whether the directory exists at all.
///
/// # Errors
///
/// Returns an error if a directory cannot be read during traversal.
pub fn collect_script_files(dist: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dist).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), SCRIPT_EXT) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(ext))
}

fn should_exclude(entry: &walkdir::DirEntry, exclude_dirs: &[&str], patterns: &Patterns) -> bool {
    if entry.file_type().is_dir() {
        if is_hidden(entry) {
            return true;
        }
        if let Some(name) = entry.file_name().to_str() {
            if EXCLUDED_DIRS.contains(&name) || exclude_dirs.contains(&name) {
                return true;
            }
        }
    }

    patterns.matches(entry.path())
}
