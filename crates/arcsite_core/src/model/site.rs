//! Site metadata model.
//!
//! Consumed once at bootstrap; every field is an optional display string,
//! so a partially filled resource still renders whatever it carries.

use serde::{Deserialize, Serialize};

/// Flat record of optional display strings from the site resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteMeta {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub hero_title: Option<String>,
    pub hero_desc: Option<String>,
    pub invite_url: Option<String>,
    pub invite_qr: Option<String>,
    pub brand: Option<BrandMeta>,
}

/// Brand assets nested under `brand`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BrandMeta {
    pub logo: Option<String>,
}
