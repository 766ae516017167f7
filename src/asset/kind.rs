//! Recognized asset extensions.

use std::path::Path;

/// Extensions treated as assets when configuration does not override them.
pub const DEFAULT_EXTENSIONS: [&str; 7] =
    [".js", ".css", ".png", ".jpg", ".jpeg", ".svg", ".webp"];

/// Case-insensitive extension filter built from configuration.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    /// Lowercased extensions without the leading dot.
    exts: Vec<String>,
}

impl ExtensionSet {
    /// Build a filter from configured extensions (with or without dots).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        Self { exts }
    }

    /// Check whether a path carries a recognized asset extension.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.exts.iter().any(|e| *e == ext)
            })
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_default_set() {
        let set = ExtensionSet::default();
        assert!(set.matches(Path::new("assets/app.css")));
        assert!(set.matches(Path::new("assets/images/logo.svg")));
        assert!(set.matches(Path::new("shared.js")));
        assert!(!set.matches(Path::new("index.html")));
        assert!(!set.matches(Path::new("README")));
    }

    #[test]
    fn test_matches_case_insensitive() {
        let set = ExtensionSet::default();
        assert!(set.matches(Path::new("photo.JPG")));
        assert!(set.matches(Path::new("photo.JpEg")));
    }

    #[test]
    fn test_new_accepts_dotless() {
        let set = ExtensionSet::new(["css", ".JS"]);
        assert!(set.matches(Path::new("a.css")));
        assert!(set.matches(Path::new("a.js")));
        assert!(!set.matches(Path::new("a.png")));
    }
}
