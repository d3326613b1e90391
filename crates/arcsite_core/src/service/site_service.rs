//! Site bootstrap service.

use crate::config::ContentPaths;
use crate::fetch::client::Fetcher;
use crate::model::site::SiteMeta;
use log::warn;

/// Site metadata facade over the fetcher; consumed once at bootstrap.
pub struct SiteService {
    fetcher: Fetcher,
    paths: ContentPaths,
}

impl SiteService {
    /// Creates a service using the provided fetcher and resource layout.
    pub fn new(fetcher: Fetcher, paths: ContentPaths) -> Self {
        Self { fetcher, paths }
    }

    /// Loads site metadata, `None` on any failure. Callers render their
    /// static defaults when nothing comes back.
    pub async fn load_site(&self) -> Option<SiteMeta> {
        match self
            .fetcher
            .json_as::<SiteMeta>(&self.paths.site_url())
            .await
        {
            Ok(site) => Some(site),
            Err(err) => {
                warn!(
                    "event=site_fallback module=service kind={} url={}",
                    err.kind(),
                    err.url()
                );
                None
            }
        }
    }
}
