//! List filtering and faceting.
//!
//! # Responsibility
//! - Compute filtered subsets of loaded collections from a free-text query
//!   and an optional active tag facet.
//! - Project facet controls (chips) from the loaded data.

pub mod filter;
