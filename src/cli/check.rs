//! Reference validation for built pages.
//!
//! After a build, every local `src`/`href` value in every configured page
//! must name a file that exists on disk. `check` walks the pages and
//! reports the references that do not resolve, exiting non-zero when any
//! are found.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use regex::Regex;

use crate::config::BuildConfig;
use crate::report::plural_s;
use crate::{debug, log};

/// Extract reference-bearing attribute values.
static REF_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:src|href)=["']([^"']+)["']"#).expect("hardcoded pattern")
});

/// Check every configured page and fail on broken references.
pub fn run_check(config: &BuildConfig) -> Result<()> {
    let mut broken: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut page_count = 0usize;
    let mut ref_count = 0usize;

    for page in config.page_paths() {
        if !page.exists() {
            log!("check"; "{} not found, skipping", page.display());
            continue;
        }

        let content = fs::read_to_string(&page)
            .with_context(|| format!("failed to read {}", page.display()))?;
        page_count += 1;
        let page_dir = page.parent().unwrap_or(Path::new("."));

        for caps in REF_ATTR.captures_iter(&content) {
            let dest = &caps[1];
            let Some(local) = local_path(dest) else {
                debug!("check"; "{}: ignoring {}", page.display(), dest);
                continue;
            };
            ref_count += 1;

            let resolved = match local.strip_prefix('/') {
                Some(rooted) => config.root.join(rooted),
                None => page_dir.join(local),
            };
            if !resolved.exists() {
                broken
                    .entry(page.display().to_string())
                    .or_default()
                    .push(local.to_string());
            }
        }
    }

    if broken.is_empty() {
        log!(
            "check";
            "all references resolve ({ref_count} reference{} across {page_count} page{})",
            plural_s(ref_count),
            plural_s(page_count)
        );
        return Ok(());
    }

    let total: usize = broken.values().map(Vec::len).sum();
    eprintln!();
    eprintln!(
        "{} {}",
        "broken references".red().bold(),
        format!(
            "({total} across {} page{})",
            broken.len(),
            plural_s(broken.len())
        )
        .dimmed()
    );
    for (page, dests) in &broken {
        eprintln!("{}{}{}", "[".dimmed(), page.cyan(), "]".dimmed());
        for dest in dests {
            eprintln!("{} {}", "→".red(), dest);
        }
    }

    bail!("{total} broken reference{}", plural_s(total))
}

/// Strip query and fragment from a reference.
///
/// Returns `None` for values the filesystem check cannot resolve:
/// external schemes, protocol-relative URLs, and bare fragments.
fn local_path(dest: &str) -> Option<&str> {
    const EXTERNAL_PREFIXES: [&str; 6] =
        ["http://", "https://", "//", "mailto:", "tel:", "data:"];

    if EXTERNAL_PREFIXES.iter().any(|p| dest.starts_with(p)) {
        return None;
    }

    let path = dest.split(['?', '#']).next().unwrap_or(dest);
    if path.is_empty() { None } else { Some(path) }
}
