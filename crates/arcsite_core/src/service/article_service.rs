//! Article use-case service.
//!
//! # Responsibility
//! - Load the article index and per-id full entries.
//! - Merge the two stages into one full entity (full fields win).
//!
//! # Invariants
//! - Loading never raises; a missing index or full resource degrades to
//!   the matching designed state (`Missing` / `IndexOnly`).
//! - Index order is preserved; the service never re-sorts.

use crate::config::ContentPaths;
use crate::fetch::client::Fetcher;
use crate::fetch::shape::decode_list;
use crate::model::article::Article;
use log::warn;
use serde_json::Value;

/// Wrapper key of the article collection resource.
pub const ARTICLES_KEY: &str = "articles";

/// Outcome of a two-stage article load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleDetail {
    /// No index entry with the requested id.
    Missing,
    /// Index entry found, but the full-text resource was unavailable or
    /// undecodable; render what the index carries.
    IndexOnly(Article),
    /// Full entry merged over the index entry.
    Full(Article),
}

/// Article loading facade over the fetcher.
pub struct ArticleService {
    fetcher: Fetcher,
    paths: ContentPaths,
}

impl ArticleService {
    /// Creates a service using the provided fetcher and resource layout.
    pub fn new(fetcher: Fetcher, paths: ContentPaths) -> Self {
        Self { fetcher, paths }
    }

    /// Loads the article index as a flat list, empty on any failure.
    pub async fn list_articles(&self) -> Vec<Article> {
        let payload = self
            .fetcher
            .safe_json(&self.paths.articles_url(), Value::Null)
            .await;
        decode_list(payload, ARTICLES_KEY)
    }

    /// Loads one article through both stages: index entry, then the per-id
    /// full entry merged over it.
    pub async fn load_article(&self, id: &str) -> ArticleDetail {
        let entries = self.list_articles().await;
        let Some(index_entry) = entries.into_iter().find(|entry| entry.id == id) else {
            return ArticleDetail::Missing;
        };

        let full_url = self.paths.article_content_url(id);
        let payload = self.fetcher.safe_json(&full_url, Value::Null).await;
        if payload.is_null() {
            return ArticleDetail::IndexOnly(index_entry);
        }

        match serde_json::from_value::<Article>(payload) {
            Ok(full) => ArticleDetail::Full(index_entry.merged_with(full)),
            Err(err) => {
                warn!("event=article_full_undecodable module=service id={id} error={err}");
                ArticleDetail::IndexOnly(index_entry)
            }
        }
    }
}
