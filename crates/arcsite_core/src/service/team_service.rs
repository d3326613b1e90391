//! Team use-case service.

use crate::config::ContentPaths;
use crate::fetch::client::Fetcher;
use crate::fetch::shape::decode_list;
use crate::model::team::TeamMember;
use serde_json::Value;

/// Wrapper key of the team collection resource.
pub const MEMBERS_KEY: &str = "members";

/// Team loading facade over the fetcher.
pub struct TeamService {
    fetcher: Fetcher,
    paths: ContentPaths,
}

impl TeamService {
    /// Creates a service using the provided fetcher and resource layout.
    pub fn new(fetcher: Fetcher, paths: ContentPaths) -> Self {
        Self { fetcher, paths }
    }

    /// Loads the member list, empty on any failure.
    pub async fn list_members(&self) -> Vec<TeamMember> {
        let payload = self
            .fetcher
            .safe_json(&self.paths.team_url(), Value::Null)
            .await;
        decode_list(payload, MEMBERS_KEY)
    }
}
