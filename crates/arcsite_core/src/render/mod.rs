//! Declarative UI-tree construction and rendering.
//!
//! # Responsibility
//! - Build static node trees from typed attributes and children.
//! - Render entities into card subtrees with documented defaults.
//! - Serialize trees to HTML with escaped text and attributes.
//!
//! # Invariants
//! - Trees are built once per render call; no diffing, no reactivity.
//! - Building never fails; malformed input degrades to a default node.

pub mod card;
pub mod escape;
pub mod html;
pub mod node;
