//! Page-level orchestration services.
//!
//! # Responsibility
//! - Orchestrate fetch + normalize + decode into per-entity loading APIs.
//! - Keep page wiring decoupled from transport and shape details.
//!
//! # Invariants
//! - Every call site in this layer uses safe fetch variants; loading never
//!   raises, failures surface as empty/absent values.

pub mod article_service;
pub mod site_service;
pub mod team_service;
