//! Build report accumulation and printing.

use std::fmt;
use std::io::{Write, stdout};
use std::path::PathBuf;

use owo_colors::OwoColorize;

use crate::asset::RenameRecord;

/// Return "s" suffix for plural counts
#[inline]
pub(crate) fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Everything the build did, accumulated for the final summary.
///
/// Purely observational: printing goes through `.ok()` so a broken pipe
/// after renames have landed on disk cannot fail the build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Asset roots that were walked.
    pub processed_roots: Vec<PathBuf>,
    /// Configured roots missing on disk.
    pub missing_roots: Vec<PathBuf>,
    /// Renames performed, in scan order.
    pub renames: Vec<RenameRecord>,
    /// Pages rewritten in place.
    pub updated_pages: Vec<PathBuf>,
    /// Pages read but left untouched (no reference matched).
    pub unchanged_pages: Vec<PathBuf>,
    /// Configured pages missing on disk.
    pub skipped_pages: Vec<PathBuf>,
    /// Whether this was a dry run (nothing touched disk).
    pub dry_run: bool,
}

impl BuildReport {
    /// Number of assets processed.
    pub fn asset_count(&self) -> usize {
        self.renames.len()
    }

    /// Print the full report: roots, renames, pages, summary.
    pub fn print(&self) {
        let mut out = stdout().lock();

        writeln!(out).ok();
        writeln!(
            out,
            "{} {}",
            "asset roots".bold(),
            format!(
                "({} processed, {} missing)",
                self.processed_roots.len(),
                self.missing_roots.len()
            )
            .dimmed()
        )
        .ok();
        for root in &self.processed_roots {
            writeln!(out, "{} {}", "→".green(), root.display()).ok();
        }
        for root in &self.missing_roots {
            writeln!(
                out,
                "{} {} {}",
                "→".yellow(),
                root.display(),
                "(missing, skipped)".dimmed()
            )
            .ok();
        }

        if !self.renames.is_empty() {
            let label = if self.dry_run {
                "planned renames"
            } else {
                "renamed files"
            };
            writeln!(
                out,
                "\n{} {}",
                label.bold(),
                format!("({})", self.renames.len()).dimmed()
            )
            .ok();
            for rename in &self.renames {
                writeln!(
                    out,
                    "{} {} {} {}",
                    "→".green(),
                    rename.old_name,
                    "→".dimmed(),
                    rename.new_name
                )
                .ok();
            }
        }

        if !(self.updated_pages.is_empty()
            && self.unchanged_pages.is_empty()
            && self.skipped_pages.is_empty())
        {
            writeln!(out, "\n{}", "pages".bold()).ok();
            for page in &self.updated_pages {
                writeln!(out, "{} {}", "→".green(), page.display()).ok();
            }
            for page in &self.unchanged_pages {
                writeln!(
                    out,
                    "{} {} {}",
                    "→".dimmed(),
                    page.display(),
                    "(unchanged)".dimmed()
                )
                .ok();
            }
            for page in &self.skipped_pages {
                writeln!(
                    out,
                    "{} {} {}",
                    "→".yellow(),
                    page.display(),
                    "(missing, skipped)".dimmed()
                )
                .ok();
            }
        }

        let badge = if self.asset_count() == 0 || self.dry_run {
            "∅".yellow().to_string()
        } else {
            "✓".green().to_string()
        };
        writeln!(out, "\n{badge} {self}").ok();
        out.flush().ok();
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assets = self.asset_count();
        if assets == 0 {
            return write!(f, "no assets processed");
        }
        if self.dry_run {
            return write!(
                f,
                "dry run: {assets} asset{} would be renamed",
                plural_s(assets)
            );
        }
        write!(
            f,
            "processed {assets} asset{}, updated {} page{}",
            plural_s(assets),
            self.updated_pages.len(),
            plural_s(self.updated_pages.len()),
        )
    }
}
