//! Display formatting helpers.
//!
//! # Responsibility
//! - Provide the small string/date/tag shaping used by search keys and
//!   card rendering.
//!
//! # Invariants
//! - Helpers are total: empty or unparsable input yields a harmless value,
//!   never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("valid date regex"));

/// Date rendering style for [`display_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY/MM/DD`
    Slash,
    /// `YYYY-MM-DD`
    Dash,
}

/// Coerces an optional string to its trimmed form.
pub fn trim(input: Option<&str>) -> String {
    input.unwrap_or("").trim().to_string()
}

/// Coerces an optional string to lowercased, trimmed search form.
pub fn normalize(input: Option<&str>) -> String {
    input.unwrap_or("").to_lowercase().trim().to_string()
}

/// Caps a string at `max` characters, appending an ellipsis when cut.
pub fn ellipsis(input: &str, max: usize) -> String {
    if input.chars().count() <= max {
        return input.to_string();
    }
    let mut capped: String = input.chars().take(max.saturating_sub(1)).collect();
    capped.push('…');
    capped
}

/// Reformats an ISO-ish date string for display.
///
/// Input beginning with `YYYY-MM-DD` is reformatted to the requested style;
/// anything else (including empty input) is passed through trimmed. The
/// date is not validated beyond its shape.
pub fn display_date(input: &str, style: DateStyle) -> String {
    let value = input.trim();
    let Some(caps) = ISO_DATE_RE.captures(value) else {
        return value.to_string();
    };
    let (year, month, day) = (&caps[1], &caps[2], &caps[3]);
    match style {
        DateStyle::Slash => format!("{year}/{month}/{day}"),
        DateStyle::Dash => format!("{year}-{month}-{day}"),
    }
}

/// Joins a name and role into one display line.
pub fn person_line(name: Option<&str>, role: Option<&str>) -> String {
    let name = trim(name);
    let role = trim(role);
    if !name.is_empty() && !role.is_empty() {
        return format!("{name} | {role}");
    }
    if name.is_empty() {
        role
    } else {
        name
    }
}

/// Trims, deduplicates (first occurrence wins) and optionally caps tags.
///
/// Dedup is case-sensitive; the cap is a display limit, not a data change.
pub fn cap_tags(tags: &[String], limit: Option<usize>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();
    for tag in tags {
        let key = tag.trim();
        if key.is_empty() || !seen.insert(key.to_string()) {
            continue;
        }
        unique.push(key.to_string());
    }
    match limit {
        Some(cap) => unique.into_iter().take(cap).collect(),
        None => unique,
    }
}
