//! Per-file rewriting and the sequential batch runner.
//!
//! Each file is read fully, transformed in memory (import insertion, then
//! the substitution rules), and written back only when the result differs
//! from the on-disk content. Files are independent: an error in one is
//! reported and the batch moves on.

use crate::imports;
use crate::rules;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A computed change for one file, not yet written.
#[derive(Debug, Clone)]
pub struct PendingChange {
    pub file: PathBuf,
    /// Whether the theme import was inserted into the buffer.
    pub import_inserted: bool,
    /// The fully transformed file content.
    pub new_content: String,
}

/// What happened to a single file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing matched; the file was not touched.
    Unchanged,
    /// The transformed buffer differed and (in write mode) was persisted.
    Updated { import_inserted: bool },
    /// Reading or writing the file failed; the batch continued.
    Failed { error: String },
}

/// Per-file report from a batch run, in input order.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Counters from one batch run.
#[derive(Debug, Default, Serialize)]
pub struct Diagnostics {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub imports_inserted: usize,
    pub errors: usize,
}

/// Detection results for `--json` output.
#[derive(Debug, Serialize)]
pub struct DetectionResult {
    pub changes: Vec<FileReport>,
    pub diagnostics: Diagnostics,
}

/// Transforms a buffer: theme import insertion, then the rule table.
///
/// Returns the new buffer and whether the import was inserted. Pure; the
/// result may equal the input when nothing matched.
pub fn transform(content: &str) -> (String, bool) {
    match imports::ensure_theme_import(content) {
        Some(with_import) => (rules::apply_rules(&with_import), true),
        None => (rules::apply_rules(content), false),
    }
}

/// Reads and transforms `file` in memory.
///
/// Returns `None` when the transformed buffer is identical to the on-disk
/// content, so callers never write (or count) no-op files.
pub fn plan_file(file: &Path) -> Result<Option<PendingChange>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let (new_content, import_inserted) = transform(&content);
    if new_content == content {
        return Ok(None);
    }

    Ok(Some(PendingChange {
        file: file.to_path_buf(),
        import_inserted,
        new_content,
    }))
}

/// Writes a planned change back to its file.
pub fn commit_change(change: &PendingChange) -> Result<()> {
    std::fs::write(&change.file, &change.new_content)
        .with_context(|| format!("Failed to write {}", change.file.display()))?;
    Ok(())
}

/// Processes every file sequentially, isolating per-file errors.
///
/// With `write` set, changed files are rewritten in place; otherwise the
/// transformation is computed but nothing touches disk. Reports come back
/// in input order together with the run counters.
pub fn process_batch(files: &[PathBuf], write: bool) -> (Vec<FileReport>, Diagnostics) {
    let mut reports = Vec::with_capacity(files.len());
    let mut diagnostics = Diagnostics {
        files_scanned: files.len(),
        ..Diagnostics::default()
    };

    for file in files {
        let outcome = match process_one(file, write) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed {
                error: format!("{:#}", e),
            },
        };

        match &outcome {
            Outcome::Updated { import_inserted } => {
                diagnostics.files_changed += 1;
                if *import_inserted {
                    diagnostics.imports_inserted += 1;
                }
            }
            Outcome::Failed { .. } => diagnostics.errors += 1,
            Outcome::Unchanged => {}
        }

        reports.push(FileReport {
            file: file.clone(),
            outcome,
        });
    }

    (reports, diagnostics)
}

fn process_one(file: &Path, write: bool) -> Result<Outcome> {
    match plan_file(file)? {
        Some(change) => {
            if write {
                commit_change(&change)?;
            }
            Ok(Outcome::Updated {
                import_inserted: change.import_inserted,
            })
        }
        None => Ok(Outcome::Unchanged),
    }
}
