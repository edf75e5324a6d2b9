//! Widget source discovery.
//!
//! Expands the widget glob relative to a project root and yields matching
//! paths in traversal order. Only the glob itself filters: entries that
//! match the pattern but cannot be read as text fail later, inside the
//! per-file processing loop.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default glob for widget sources, relative to the project root.
pub const DEFAULT_PATTERN: &str = "lib/presentation/widgets/**/*.dart";

/// Collects every path matching `pattern` under `root`, recursively.
///
/// Paths come back in the order the glob walks the tree, each at most once.
pub fn collect_widget_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = root.join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .with_context(|| format!("Root path {} is not valid UTF-8", root.display()))?;

    let mut files = Vec::new();
    for entry in
        glob::glob(full_pattern).with_context(|| format!("Invalid glob pattern '{}'", pattern))?
    {
        let path = entry.with_context(|| format!("Failed to walk glob '{}'", pattern))?;
        files.push(path);
    }

    Ok(files)
}
