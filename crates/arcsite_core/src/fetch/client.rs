//! HTTP fetcher with no-cache semantics and never-failing safe variants.
//!
//! # Responsibility
//! - Issue JSON/text GETs that bypass intermediate caches.
//! - Expose a typed error taxonomy and collapse it behind safe variants.
//! - Load named resource bundles concurrently, all-or-nothing.
//!
//! # Invariants
//! - Every request carries `Cache-Control: no-store`; deployed content
//!   changes and a stale cache must never be served.
//! - Safe variants return the caller's fallback on any failure and log the
//!   observed failure kind; they are the error-isolation boundary callers
//!   rely on.
//! - `load_bundle` propagates the first failing fetch; it has no per-entry
//!   fallback.

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for fetch APIs.
pub type FetchResult<T> = Result<T, FetchError>;

/// Fetch-layer error for transport, HTTP-status and body-decode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The response arrived with a non-success status.
    Http {
        url: String,
        status: u16,
        status_text: String,
    },
    /// The body could not be parsed as JSON.
    Parse { url: String },
    /// The request never produced a response (DNS, refused, reset).
    Transport { url: String, message: String },
}

impl FetchError {
    /// Stable failure-class label used in log events and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Parse { .. } => "parse",
            Self::Transport { .. } => "transport",
        }
    }

    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. } | Self::Parse { url } | Self::Transport { url, .. } => url,
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                url,
                status,
                status_text,
            } => write!(f, "fetch of `{url}` failed: {status} {status_text}"),
            Self::Parse { url } => write!(f, "response body of `{url}` is not valid JSON"),
            Self::Transport { url, message } => {
                write!(f, "request to `{url}` failed: {message}")
            }
        }
    }
}

impl Error for FetchError {}

/// HTTP resource fetcher.
///
/// Cloning is cheap; the underlying client is shared.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a fetcher whose every request disables intermediate caching.
    ///
    /// # Errors
    /// - Returns a human-readable error string when the HTTP client cannot
    ///   be constructed.
    pub fn try_new() -> Result<Self, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> FetchResult<reqwest::Response> {
        debug!("event=fetch module=fetch url={url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }
        Ok(response)
    }

    /// Fetches one JSON resource as a dynamic value.
    pub async fn json(&self, url: &str) -> FetchResult<Value> {
        let response = self.get(url).await?;
        response.json::<Value>().await.map_err(|_| FetchError::Parse {
            url: url.to_string(),
        })
    }

    /// Fetches one JSON resource decoded into `T`.
    pub async fn json_as<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let response = self.get(url).await?;
        response.json::<T>().await.map_err(|_| FetchError::Parse {
            url: url.to_string(),
        })
    }

    /// Fetches one text resource. There is no parse step, so the only
    /// failure kinds are transport and HTTP status.
    pub async fn text(&self, url: &str) -> FetchResult<String> {
        let response = self.get(url).await?;
        response.text().await.map_err(|err| FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        })
    }

    /// Fetches one JSON resource, collapsing any failure to `fallback`.
    pub async fn safe_json(&self, url: &str, fallback: Value) -> Value {
        match self.json(url).await {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=fetch_fallback module=fetch kind={} url={url}",
                    err.kind()
                );
                fallback
            }
        }
    }

    /// Fetches one text resource, collapsing any failure to `fallback`.
    pub async fn safe_text(&self, url: &str, fallback: String) -> String {
        match self.text(url).await {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=fetch_fallback module=fetch kind={} url={url}",
                    err.kind()
                );
                fallback
            }
        }
    }

    /// Loads a named bundle of JSON resources concurrently.
    ///
    /// Fetches are issued together and joined afterwards; entry order does
    /// not matter. The first failing fetch fails the whole bundle.
    pub async fn load_bundle(
        &self,
        entries: &[(&str, &str)],
    ) -> FetchResult<BTreeMap<String, Value>> {
        let tasks = entries.iter().map(|&(name, url)| async move {
            let value = self.json(url).await?;
            Ok::<(String, Value), FetchError>((name.to_string(), value))
        });

        let resolved = futures::future::try_join_all(tasks).await?;
        Ok(resolved.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn error_kinds_are_stable_labels() {
        let http = FetchError::Http {
            url: "u".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        let parse = FetchError::Parse {
            url: "u".to_string(),
        };
        let transport = FetchError::Transport {
            url: "u".to_string(),
            message: "refused".to_string(),
        };
        assert_eq!(http.kind(), "http");
        assert_eq!(parse.kind(), "parse");
        assert_eq!(transport.kind(), "transport");
    }

    #[test]
    fn display_includes_url_and_status() {
        let err = FetchError::Http {
            url: "http://x/data.json".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("http://x/data.json"));
        assert!(rendered.contains("404"));
    }
}
