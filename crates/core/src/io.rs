//! Filesystem helpers for generated artifacts.

use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;
use glyphsheet_charset::IMAGE_PREFIX;

/// Create a directory and its parents if they don't exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// Create the parent directory of a file if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Find files matching a glob pattern in a directory.
pub fn glob_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(pattern);
    let pattern_str = pattern.to_str().context("Invalid pattern path")?;
    Ok(glob(pattern_str)
        .with_context(|| format!("Failed to glob pattern: {pattern_str}"))?
        .filter_map(Result::ok)
        .collect())
}

/// Glyph images previously generated into `dir`.
pub fn generated_images(dir: &Path) -> Result<Vec<PathBuf>> {
    glob_files(dir, &format!("{IMAGE_PREFIX}*.png"))
}
