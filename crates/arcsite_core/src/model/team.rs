//! Team member domain model.

use serde::{Deserialize, Serialize};

/// One team member from the team collection resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    /// Avatar image URL.
    pub avatar: Option<String>,
    pub tags: Vec<String>,
    pub links: Vec<MemberLink>,
}

/// One outbound link on a member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MemberLink {
    pub label: Option<String>,
    pub url: Option<String>,
}
