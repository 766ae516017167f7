//! Filesystem renaming with embedded fingerprints.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::fingerprint::file_fingerprint;

/// One asset's rename: old and new basenames plus full paths.
///
/// Created exactly once per discovered file and read-only afterwards; the
/// full collection drives reference rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_name: String,
    pub new_name: String,
}

/// Build `<stem>.<fingerprint>.<ext>` from a basename.
///
/// Only the final extension moves: `logo.min.svg` becomes
/// `logo.min.<fp>.svg`. A name that already carries a fingerprint gets
/// stamped again (`app.<fp1>.<fp2>.css`) - nothing marks a file as
/// processed, so the build expects a clean checkout per run.
pub fn hashed_name(file_name: &str, fingerprint: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}.{fingerprint}.{ext}"),
        None => format!("{file_name}.{fingerprint}"),
    }
}

/// Compute the rename for an asset without performing it.
pub fn planned_rename(path: &Path) -> Result<RenameRecord> {
    let old_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid asset file name: {}", path.display()))?
        .to_string();

    let fingerprint = file_fingerprint(path)
        .with_context(|| format!("failed to hash {}", path.display()))?;

    let new_name = hashed_name(&old_name, &fingerprint);
    let new_path = path.with_file_name(&new_name);

    Ok(RenameRecord {
        old_path: path.to_path_buf(),
        new_path,
        old_name,
        new_name,
    })
}

/// Fingerprint an asset and rename it in place.
///
/// The new name lands in the same directory; the old path ceases to
/// exist. A failed rename aborts the whole build - no rollback of
/// earlier renames is attempted.
pub fn rename_with_fingerprint(path: &Path) -> Result<RenameRecord> {
    let record = planned_rename(path)?;

    fs::rename(&record.old_path, &record.new_path).with_context(|| {
        format!(
            "failed to rename {} -> {}",
            record.old_path.display(),
            record.new_name
        )
    })?;

    Ok(record)
}
