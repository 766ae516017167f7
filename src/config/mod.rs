//! Build configuration for `cachebust.toml`.
//!
//! The config file is optional: every key has a default reproducing the
//! site's layout, so running `cachebust build` in a plain checkout works
//! without any setup.
//!
//! # Example
//!
//! ```toml
//! [build]
//! assets = ["assets", "vendor/static"]
//! pages = ["index.html", "about.html"]
//! extensions = [".js", ".css", ".svg"]
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::asset::DEFAULT_EXTENSIONS;
use crate::debug;

/// Root configuration structure representing cachebust.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildSection,
}

/// `[build]` section configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Asset root directories, scanned recursively.
    pub assets: Vec<PathBuf>,

    /// HTML documents whose asset references get rewritten.
    pub pages: Vec<PathBuf>,

    /// Recognized asset extensions (leading dot, matched case-insensitively).
    pub extensions: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            build: BuildSection::default(),
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            assets: vec![PathBuf::from("assets")],
            pages: [
                "index.html",
                "about.html",
                "home-alt.html",
                "portfolio.html",
                "services.html",
                "testimonials.html",
                "contact.html",
                "journal.html",
            ]
            .iter()
            .map(PathBuf::from)
            .collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl BuildConfig {
    /// Load configuration from the given path.
    ///
    /// A missing config file is not an error: defaults apply and the
    /// project root is the current directory. With a config file, the
    /// root is the file's parent directory and all configured paths
    /// resolve against it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("config"; "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config: Self = toml::from_str(&raw)?;

        config.root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        config.validate()?;
        Ok(config)
    }

    /// Resolve a configured path against the project root.
    pub fn root_join(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Asset root directories, resolved against the project root.
    pub fn asset_roots(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.build.assets.iter().map(|p| self.root_join(p))
    }

    /// Page paths, resolved against the project root.
    pub fn page_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.build.pages.iter().map(|p| self.root_join(p))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.build.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "[build] extensions must not be empty".to_string(),
            ));
        }
        for ext in &self.build.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::Validation(format!(
                    "[build] extension '{ext}' must start with a dot, e.g. \".css\""
                )));
            }
        }
        if self.build.assets.is_empty() {
            return Err(ConfigError::Validation(
                "[build] assets must name at least one directory".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = BuildConfig::load(Path::new("/nonexistent/cachebust.toml")).unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.build.assets, vec![PathBuf::from("assets")]);
        assert_eq!(config.build.pages.len(), 8);
        assert_eq!(config.build.extensions.len(), 7);
    }

    #[test]
    fn test_load_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cachebust.toml");
        fs::write(
            &path,
            r#"
[build]
assets = ["static"]
pages = ["index.html"]
"#,
        )
        .unwrap();

        let config = BuildConfig::load(&path).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.build.assets, vec![PathBuf::from("static")]);
        assert_eq!(config.build.pages, vec![PathBuf::from("index.html")]);
        // Unset keys keep their defaults
        assert_eq!(config.build.extensions.len(), 7);
    }

    #[test]
    fn test_validate_rejects_dotless_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cachebust.toml");
        fs::write(&path, "[build]\nextensions = [\"css\"]\n").unwrap();

        let err = BuildConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cachebust.toml");
        fs::write(&path, "[build]\nextensions = []\n").unwrap();

        let err = BuildConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_root_join() {
        let config = BuildConfig {
            root: PathBuf::from("/site"),
            build: BuildSection::default(),
        };
        assert_eq!(
            config.root_join(Path::new("assets")),
            PathBuf::from("/site/assets")
        );
        assert_eq!(
            config.root_join(Path::new("/abs/assets")),
            PathBuf::from("/abs/assets")
        );
    }
}
