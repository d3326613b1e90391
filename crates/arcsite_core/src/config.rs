//! Resource path configuration.
//!
//! # Responsibility
//! - Derive the site's data-resource URLs from one base URL.
//!
//! # Invariants
//! - The article id is percent-encoded wherever it is embedded in a path.

/// Base-URL-rooted layout of the site's JSON resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    base: String,
}

impl ContentPaths {
    /// Creates a layout rooted at `base` (trailing slashes are ignored).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim().trim_end_matches('/').to_string();
        Self { base }
    }

    /// Site metadata resource.
    pub fn site_url(&self) -> String {
        format!("{}/data/site.json", self.base)
    }

    /// Article collection resource.
    pub fn articles_url(&self) -> String {
        format!("{}/data/articles.json", self.base)
    }

    /// Team collection resource.
    pub fn team_url(&self) -> String {
        format!("{}/data/team.json", self.base)
    }

    /// Per-id article full-text resource.
    pub fn article_content_url(&self, id: &str) -> String {
        format!(
            "{}/content/articles/{}.json",
            self.base,
            urlencoding::encode(id)
        )
    }
}
