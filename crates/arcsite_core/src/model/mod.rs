//! Domain model for site content resources.
//!
//! # Responsibility
//! - Define the canonical records decoded from the JSON resources.
//! - Keep decode tolerant: optional fields default, never fail a record.
//!
//! # Invariants
//! - `Article::id` is opaque and never regenerated by this crate.
//! - Every record is a read-only snapshot of one fetch; no mutation paths.

pub mod article;
pub mod site;
pub mod team;
