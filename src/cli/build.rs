//! The cache-busting build pipeline.
//!
//! Strictly linear: scan -> fingerprint+rename -> rewrite -> report. The
//! rename table is built in full before any document is touched, so a
//! failed rename can never leave pages pointing at a half-renamed tree.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::asset::{self, ExtensionSet, RenameRecord};
use crate::config::BuildConfig;
use crate::report::BuildReport;
use crate::rewrite::{self, DocOutcome};
use crate::{debug, log};

/// Run the full pipeline once.
///
/// Errors out of here abort the process with a non-zero exit; renames
/// already on disk stay there (re-run from a clean checkout to recover).
pub fn run_build(config: &BuildConfig, dry_run: bool) -> Result<BuildReport> {
    let mut report = BuildReport {
        dry_run,
        ..Default::default()
    };

    // Phase 1: discovery (read-only)
    let extensions = ExtensionSet::new(&config.build.extensions);
    let outcome =
        asset::scan_assets(config.asset_roots(), &extensions).context("asset scan failed")?;

    for root in &outcome.missing_roots {
        log!("warning"; "asset directory {} not found, skipping", root.display());
    }
    report.processed_roots = outcome.processed_roots;
    report.missing_roots = outcome.missing_roots;

    if outcome.files.is_empty() {
        log!("warning"; "no asset files found, nothing to do");
        return Ok(report);
    }
    debug!("scan"; "found {} asset file(s)", outcome.files.len());

    // Phase 2: fingerprint + rename (walks the list, never the tree)
    for path in &outcome.files {
        let record = if dry_run {
            asset::planned_rename(path)?
        } else {
            asset::rename_with_fingerprint(path)?
        };
        log!("rename"; "{} -> {}", record.old_name, record.new_name);
        report.renames.push(record);
    }

    warn_duplicate_basenames(&report.renames);

    if dry_run {
        debug!("build"; "dry run, skipping reference rewrite");
        return Ok(report);
    }

    // Phase 3: rewrite references (every record against every page)
    let patterns = rewrite::build_patterns(&report.renames)?;
    for page in config.page_paths() {
        match rewrite::rewrite_document(&page, &patterns)? {
            DocOutcome::Updated => {
                log!("rewrite"; "updated {}", page.display());
                report.updated_pages.push(page);
            }
            DocOutcome::Unchanged => {
                debug!("rewrite"; "{} unchanged", page.display());
                report.unchanged_pages.push(page);
            }
            DocOutcome::Skipped => {
                log!("rewrite"; "{} not found, skipping", page.display());
                report.skipped_pages.push(page);
            }
        }
    }

    Ok(report)
}

/// Rewriting is keyed by basename alone, so two assets sharing one
/// basename would compete for the same references.
fn warn_duplicate_basenames(renames: &[RenameRecord]) {
    let mut seen: FxHashMap<&str, &RenameRecord> = FxHashMap::default();
    for record in renames {
        if let Some(first) = seen.insert(record.old_name.as_str(), record) {
            log!(
                "warning";
                "duplicate basename {}: {} and {}",
                record.old_name,
                first.old_path.display(),
                record.old_path.display()
            );
        }
    }
}
