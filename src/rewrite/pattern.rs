//! Attribute-anchored substitution patterns.
//!
//! Literal-substring rewriting stands in for a markup parse. Each match is
//! anchored to a `src=` or `href=` attribute-and-quote prefix, so text
//! nodes and unrelated attributes are never touched. Anything carrying
//! that prefix is rewritten, including commented-out markup and script
//! string literals that happen to contain it. Callers only see "replace
//! references to A with B", so swapping in a real HTML parser later stays
//! local to this module.

use anyhow::Result;
use regex::{Captures, Regex};

/// Attributes whose values point the browser at an external resource.
const REF_ATTRS: &str = "src|href";

/// Precompiled rewrite of one old basename to its stamped replacement.
#[derive(Debug)]
pub struct RefPattern {
    regex: Regex,
    new_name: String,
}

impl RefPattern {
    /// Build the pattern for one rename.
    ///
    /// The old basename is escaped so its dots match literally:
    /// `logo.min.svg` must not match `logo-min-svg`.
    pub fn new(old_name: &str, new_name: &str) -> Result<Self> {
        let pattern = format!(r#"((?:{REF_ATTRS})=["']){}"#, regex::escape(old_name));
        let regex = Regex::new(&pattern)?;
        Ok(Self {
            regex,
            new_name: new_name.to_string(),
        })
    }

    /// Replace every anchored occurrence of the old basename in `text`.
    ///
    /// Returns the rewritten text, or `None` when nothing matched.
    pub fn apply(&self, text: &str) -> Option<String> {
        if !self.regex.is_match(text) {
            return None;
        }
        let replaced = self
            .regex
            .replace_all(text, |caps: &Captures| {
                format!("{}{}", &caps[1], self.new_name)
            })
            .into_owned();
        Some(replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(old: &str, new: &str) -> RefPattern {
        RefPattern::new(old, new).unwrap()
    }

    #[test]
    fn test_rewrites_src_attribute() {
        let p = pattern("shared.js", "shared.1a2b3c4d.js");
        let html = r#"<script src="shared.js"></script>"#;
        assert_eq!(
            p.apply(html).unwrap(),
            r#"<script src="shared.1a2b3c4d.js"></script>"#
        );
    }

    #[test]
    fn test_rewrites_href_attribute() {
        let p = pattern("app.css", "app.1a2b3c4d.css");
        let html = r#"<link rel="stylesheet" href="app.css">"#;
        assert_eq!(
            p.apply(html).unwrap(),
            r#"<link rel="stylesheet" href="app.1a2b3c4d.css">"#
        );
    }

    #[test]
    fn test_single_quotes() {
        let p = pattern("app.css", "app.1a2b3c4d.css");
        assert_eq!(
            p.apply("<link href='app.css'>").unwrap(),
            "<link href='app.1a2b3c4d.css'>"
        );
    }

    #[test]
    fn test_leaves_plain_text_alone() {
        let p = pattern("app.css", "app.1a2b3c4d.css");
        let html = r#"<p>Edit app.css to change styles.</p><link href="app.css">"#;
        assert_eq!(
            p.apply(html).unwrap(),
            r#"<p>Edit app.css to change styles.</p><link href="app.1a2b3c4d.css">"#
        );
    }

    #[test]
    fn test_leaves_unrelated_attributes_alone() {
        let p = pattern("logo.png", "logo.1a2b3c4d.png");
        let html = r#"<img alt="logo.png" src="logo.png">"#;
        assert_eq!(
            p.apply(html).unwrap(),
            r#"<img alt="logo.png" src="logo.1a2b3c4d.png">"#
        );
    }

    #[test]
    fn test_dots_match_literally() {
        let p = pattern("logo.min.svg", "logo.min.1a2b3c4d.svg");
        // A dot treated as a metacharacter would also match this name
        let decoy = r#"<img src="logoXminXsvg">"#;
        assert!(p.apply(decoy).is_none());

        let html = r#"<img src="logo.min.svg">"#;
        assert_eq!(
            p.apply(html).unwrap(),
            r#"<img src="logo.min.1a2b3c4d.svg">"#
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let p = pattern("logo.png", "logo.1a2b3c4d.png");
        let html = r#"<img src="logo.png"><a href="logo.png">logo</a>"#;
        assert_eq!(
            p.apply(html).unwrap(),
            r#"<img src="logo.1a2b3c4d.png"><a href="logo.1a2b3c4d.png">logo</a>"#
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        let p = pattern("app.css", "app.1a2b3c4d.css");
        assert!(p.apply("<html><body>no styles here</body></html>").is_none());
    }

    #[test]
    fn test_prefix_match_rewrites_value_head() {
        // Matching is anchored to the quote, not the closing quote: a
        // value that merely starts with the basename is still rewritten.
        let p = pattern("app.css", "app.1a2b3c4d.css");
        assert_eq!(
            p.apply(r#"<link href="app.css?v=3">"#).unwrap(),
            r#"<link href="app.1a2b3c4d.css?v=3">"#
        );
    }
}
