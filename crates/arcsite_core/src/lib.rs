//! Core content pipeline for the arcsite static site.
//! This crate is the single source of truth for loading, normalization,
//! filtering and rendering invariants.

pub mod config;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod service;

pub use config::ContentPaths;
pub use fetch::client::{FetchError, FetchResult, Fetcher};
pub use fetch::shape::{decode_list, to_list};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleContent, ContentBlock};
pub use model::site::{BrandMeta, SiteMeta};
pub use model::team::{MemberLink, TeamMember};
pub use render::escape::escape_html;
pub use render::html::{fragment_html, to_html};
pub use render::node::{build, Attr, Child, Children, Node};
pub use search::filter::{build_chips, collect_tags, filter, search_key, Chip, Facet, Searchable};
pub use service::article_service::{ArticleDetail, ArticleService};
pub use service::site_service::SiteService;
pub use service::team_service::TeamService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
