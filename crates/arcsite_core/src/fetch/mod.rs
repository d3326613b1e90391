//! Resource loading layer.
//!
//! # Responsibility
//! - Fetch JSON/text resources over HTTP with no-cache semantics.
//! - Normalize heterogeneous payload shapes into ordered lists.
//!
//! # Invariants
//! - Safe variants never fail; every error collapses to the caller's
//!   fallback after its kind has been logged.
//! - Shape normalization is total: absence of data is an empty list.

pub mod client;
pub mod shape;
