//! Asset discovery (pure, no side effects).
//!
//! Discovery is kept strictly separate from renaming: the walk produces a
//! complete list before any file is touched, so it can never observe its
//! own renamed files mid-traversal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ExtensionSet;

/// Result of scanning the configured asset roots.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Discovered asset files, sorted for stable ordering.
    pub files: Vec<PathBuf>,
    /// Roots that were walked.
    pub processed_roots: Vec<PathBuf>,
    /// Configured roots that do not exist on disk.
    pub missing_roots: Vec<PathBuf>,
}

/// Walk the given roots recursively and collect every file with a
/// recognized extension.
///
/// Directories are traversed but never included in the result. A missing
/// root is recorded and skipped; any other read failure aborts the scan.
pub fn scan_assets<I>(roots: I, extensions: &ExtensionSet) -> io::Result<ScanOutcome>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut outcome = ScanOutcome::default();

    for root in roots {
        if !root.exists() {
            outcome.missing_roots.push(root);
            continue;
        }
        scan_recursive(&root, extensions, &mut outcome.files)?;
        outcome.processed_roots.push(root);
    }

    outcome.files.sort();
    Ok(outcome)
}

/// Recursive helper for scanning one directory.
fn scan_recursive(
    dir: &Path,
    extensions: &ExtensionSet,
    files: &mut Vec<PathBuf>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            scan_recursive(&path, extensions, files)?;
        } else if extensions.matches(&path) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nonexistent");

        let outcome = scan_assets([missing.clone()], &ExtensionSet::default()).unwrap();
        assert!(outcome.files.is_empty());
        assert!(outcome.processed_roots.is_empty());
        assert_eq!(outcome.missing_roots, vec![missing]);
    }

    #[test]
    fn test_scan_nested() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        let images = assets.join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(assets.join("app.css"), "body {}").unwrap();
        fs::write(assets.join("shared.js"), "void 0").unwrap();
        fs::write(images.join("logo.svg"), "<svg/>").unwrap();
        fs::write(assets.join("notes.txt"), "not an asset").unwrap();

        let outcome = scan_assets([assets.clone()], &ExtensionSet::default()).unwrap();
        assert_eq!(outcome.files.len(), 3);
        assert!(outcome.files.contains(&assets.join("app.css")));
        assert!(outcome.files.contains(&images.join("logo.svg")));
        assert!(!outcome.files.iter().any(|p| p.ends_with("notes.txt")));
        assert_eq!(outcome.processed_roots, vec![assets]);
    }

    #[test]
    fn test_scan_never_yields_directories() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        // A directory whose name looks like an asset
        fs::create_dir_all(assets.join("fake.css")).unwrap();
        fs::write(assets.join("fake.css").join("real.css"), "body {}").unwrap();

        let outcome = scan_assets([assets.clone()], &ExtensionSet::default()).unwrap();
        assert_eq!(outcome.files, vec![assets.join("fake.css").join("real.css")]);
    }

    #[test]
    fn test_scan_empty_root_succeeds() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();

        let outcome = scan_assets([assets.clone()], &ExtensionSet::default()).unwrap();
        assert!(outcome.files.is_empty());
        assert_eq!(outcome.processed_roots, vec![assets]);
    }

    #[test]
    fn test_scan_is_sorted() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("z.css"), "z").unwrap();
        fs::write(assets.join("a.css"), "a").unwrap();
        fs::write(assets.join("m.js"), "m").unwrap();

        let outcome = scan_assets([assets], &ExtensionSet::default()).unwrap();
        let mut sorted = outcome.files.clone();
        sorted.sort();
        assert_eq!(outcome.files, sorted);
    }
}
