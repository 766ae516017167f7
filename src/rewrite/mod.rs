//! Reference rewriting across HTML documents.
//!
//! Every rename record is applied to every configured document; an old
//! basename absent from a given document is simply a no-op there.

mod pattern;

pub use pattern::RefPattern;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::asset::RenameRecord;

/// Outcome of rewriting one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocOutcome {
    /// References were replaced and the file rewritten in place.
    Updated,
    /// No reference matched; the file was left untouched on disk.
    Unchanged,
    /// The configured document does not exist.
    Skipped,
}

/// Build one precompiled pattern per rename record.
pub fn build_patterns(records: &[RenameRecord]) -> Result<Vec<RefPattern>> {
    records
        .iter()
        .map(|r| RefPattern::new(&r.old_name, &r.new_name))
        .collect()
}

/// Rewrite every reference-bearing attribute in one document.
///
/// Missing documents are skipped. Reading or writing an existing one
/// must succeed - a half-updated page set pointing at now-missing
/// filenames is worse than a total abort.
pub fn rewrite_document(path: &Path, patterns: &[RefPattern]) -> Result<DocOutcome> {
    if !path.exists() {
        return Ok(DocOutcome::Skipped);
    }

    let mut content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut changed = false;
    for pattern in patterns {
        if let Some(next) = pattern.apply(&content) {
            content = next;
            changed = true;
        }
    }

    if !changed {
        return Ok(DocOutcome::Unchanged);
    }

    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(DocOutcome::Updated)
}
