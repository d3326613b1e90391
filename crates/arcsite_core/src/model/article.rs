//! Article domain model.
//!
//! # Responsibility
//! - Define the article record shared by the index and full-text stages.
//! - Decode heterogeneous content payloads (bare string or block list).
//!
//! # Invariants
//! - `id` is the stable linking key; it is carried through merges unchanged.
//! - Unknown or missing block kinds decode as paragraphs, never as errors.
//! - Merging keeps the index entry's value wherever the full entry is silent.

use serde::{Deserialize, Serialize};

/// One article, at either load stage.
///
/// The collection resource yields lightweight index entries; the per-id
/// resource yields full entries. Both decode into this one shape with every
/// display field optional, so one record type can serve both stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Article {
    /// Stable unique key used for linking. Empty when the resource omits it.
    pub id: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    /// Cover image URL.
    pub cover: Option<String>,
    /// ISO-ish date string; format is not strictly validated.
    pub date: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub content: Option<ArticleContent>,
}

impl Article {
    /// Field-wise union of a full entry over this index entry.
    ///
    /// The full entry's fields win when present; otherwise the index entry's
    /// fields are retained. The id survives from whichever side carries one.
    pub fn merged_with(&self, full: Article) -> Article {
        Article {
            id: if full.id.is_empty() {
                self.id.clone()
            } else {
                full.id
            },
            title: full.title.or_else(|| self.title.clone()),
            excerpt: full.excerpt.or_else(|| self.excerpt.clone()),
            cover: full.cover.or_else(|| self.cover.clone()),
            date: full.date.or_else(|| self.date.clone()),
            author: full.author.or_else(|| self.author.clone()),
            tags: if full.tags.is_empty() {
                self.tags.clone()
            } else {
                full.tags
            },
            content: full.content.or_else(|| self.content.clone()),
        }
    }
}

/// Article body as delivered by the full-text resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleContent {
    /// Plain text body, rendered as a single paragraph.
    Text(String),
    /// Ordered block list.
    Blocks(Vec<ContentBlock>),
}

/// One content block of a full article.
///
/// Wire kinds are `p`, `h3`, `blockquote` and `ul`; the long-form aliases
/// `paragraph`, `heading`, `quote` and `list` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub enum ContentBlock {
    Paragraph { text: String },
    Heading { text: String },
    Quote { text: String },
    List { items: Vec<String> },
}

/// Wire shape of one block. Everything is optional so a malformed block
/// degrades to an empty paragraph instead of failing the whole article.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
struct RawBlock {
    #[serde(rename = "type")]
    kind: Option<String>,
    text: Option<String>,
    items: Option<Vec<String>>,
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        let kind = raw.kind.as_deref().unwrap_or("p").trim().to_lowercase();
        let text = raw.text.unwrap_or_default();
        match kind.as_str() {
            "h3" | "heading" => Self::Heading { text },
            "blockquote" | "quote" => Self::Quote { text },
            "ul" | "list" => Self::List {
                items: raw.items.unwrap_or_default(),
            },
            _ => Self::Paragraph { text },
        }
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Paragraph { text } => RawBlock {
                kind: Some("p".to_string()),
                text: Some(text),
                items: None,
            },
            ContentBlock::Heading { text } => RawBlock {
                kind: Some("h3".to_string()),
                text: Some(text),
                items: None,
            },
            ContentBlock::Quote { text } => RawBlock {
                kind: Some("blockquote".to_string()),
                text: Some(text),
                items: None,
            },
            ContentBlock::List { items } => RawBlock {
                kind: Some("ul".to_string()),
                text: None,
                items: Some(items),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Article, ArticleContent, ContentBlock};
    use serde_json::json;

    #[test]
    fn merge_keeps_index_fields_when_full_is_silent() {
        let index: Article =
            serde_json::from_value(json!({"id": "a-1", "title": "X"})).expect("index decodes");
        let full: Article =
            serde_json::from_value(json!({"excerpt": "Y"})).expect("full decodes");

        let merged = index.merged_with(full);
        assert_eq!(merged.id, "a-1");
        assert_eq!(merged.title.as_deref(), Some("X"));
        assert_eq!(merged.excerpt.as_deref(), Some("Y"));
    }

    #[test]
    fn merge_prefers_full_fields_when_present() {
        let index: Article = serde_json::from_value(json!({
            "id": "a-1", "title": "old", "tags": ["keep"]
        }))
        .expect("index decodes");
        let full: Article = serde_json::from_value(json!({
            "title": "new", "tags": ["a", "b"]
        }))
        .expect("full decodes");

        let merged = index.merged_with(full);
        assert_eq!(merged.title.as_deref(), Some("new"));
        assert_eq!(merged.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn unknown_block_kind_decodes_as_paragraph() {
        let block: ContentBlock =
            serde_json::from_value(json!({"type": "marquee", "text": "hi"}))
                .expect("block decodes");
        assert_eq!(
            block,
            ContentBlock::Paragraph {
                text: "hi".to_string()
            }
        );
    }

    #[test]
    fn missing_block_kind_decodes_as_paragraph() {
        let block: ContentBlock =
            serde_json::from_value(json!({"text": "loose"})).expect("block decodes");
        assert_eq!(
            block,
            ContentBlock::Paragraph {
                text: "loose".to_string()
            }
        );
    }

    #[test]
    fn content_accepts_bare_string_and_block_list() {
        let text: ArticleContent =
            serde_json::from_value(json!("plain body")).expect("string content decodes");
        assert_eq!(text, ArticleContent::Text("plain body".to_string()));

        let blocks: ArticleContent = serde_json::from_value(json!([
            {"type": "h3", "text": "Intro"},
            {"type": "ul", "items": ["one", "two"]}
        ]))
        .expect("block content decodes");
        assert_eq!(
            blocks,
            ArticleContent::Blocks(vec![
                ContentBlock::Heading {
                    text: "Intro".to_string()
                },
                ContentBlock::List {
                    items: vec!["one".to_string(), "two".to_string()]
                },
            ])
        );
    }
}
