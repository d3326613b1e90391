//! Entity card rendering and shared UI primitives.
//!
//! # Responsibility
//! - Map one normalized entity to a card subtree via the node builder.
//! - Substitute a documented default for every missing optional field.
//!
//! # Invariants
//! - Tag caps are 2 on compact cards and 3 in detail contexts, link cap is
//!   3; these are presentation limits, the entity keeps everything.
//! - Outbound `http` links open in a new browsing context with
//!   `rel="noopener"`.
//! - Image load failure falls back via the element's error event instead of
//!   leaving a broken image.

use crate::format::{cap_tags, display_date, DateStyle};
use crate::model::article::{Article, ArticleContent, ContentBlock};
use crate::model::team::TeamMember;
use crate::render::node::{build, Attr, Child, Children, Node};
use crate::search::filter::Chip;

const DEFAULT_ARTICLE_TITLE: &str = "Untitled article";
const DEFAULT_ARTICLE_EXCERPT: &str = "No excerpt yet.";
const DEFAULT_ARTICLE_COVER: &str = "../assets/img/articles/a-0001-cover.jpg";
const DEFAULT_MEMBER_NAME: &str = "Unnamed";
const DEFAULT_MEMBER_ROLE: &str = "—";
const DEFAULT_MEMBER_BIO: &str = "No bio yet.";
const DEFAULT_MEMBER_AVATAR: &str = "../assets/img/team/gm.png";
const DEFAULT_LINK_LABEL: &str = "Link";
const DEFAULT_EMPTY_TITLE: &str = "No data";

const COMPACT_TAG_LIMIT: usize = 2;
const DETAIL_TAG_LIMIT: usize = 3;
const LINK_LIMIT: usize = 3;

/// Pill color variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillVariant {
    Plain,
    Accent,
    Warn,
    Danger,
}

/// Button color variant for [`button_link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Primary,
    Warn,
}

fn is_external(url: &str) -> bool {
    url.starts_with("http")
}

/// Small labeled pill.
pub fn pill(text: &str, variant: PillVariant) -> Node {
    let class = match variant {
        PillVariant::Plain => "pill",
        PillVariant::Accent => "pill pill-accent",
        PillVariant::Warn => "pill pill-warn",
        PillVariant::Danger => "pill pill-danger",
    };
    build("span", vec![Attr::class(class), Attr::text(text)], Children::Empty)
}

/// Link styled as a button. External links are marked to open in a new
/// context without opener access.
pub fn button_link(label: &str, href: &str, variant: ButtonVariant) -> Node {
    let class = match variant {
        ButtonVariant::Default => "btn",
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Warn => "btn btn-warn",
    };
    let href = if href.trim().is_empty() { "#" } else { href };
    let label = if label.trim().is_empty() {
        DEFAULT_LINK_LABEL
    } else {
        label
    };

    let mut attrs = vec![Attr::class(class), Attr::literal("href", href)];
    if is_external(href) {
        attrs.push(Attr::literal("target", "_blank"));
        attrs.push(Attr::literal("rel", "noopener"));
    }
    build("a", attrs, Children::from(label))
}

/// Designed empty/error state shown instead of missing data.
pub fn empty_state(title: &str, detail: Option<&str>) -> Node {
    let title = if title.trim().is_empty() {
        DEFAULT_EMPTY_TITLE
    } else {
        title
    };
    let mut entries: Vec<Option<Child>> = vec![Some(
        build(
            "div",
            vec![Attr::class("empty-state__title"), Attr::text(title)],
            Children::Empty,
        )
        .into(),
    )];
    if let Some(detail) = detail {
        entries.push(Some(
            build(
                "div",
                vec![Attr::class("empty-state__detail"), Attr::text(detail)],
                Children::Empty,
            )
            .into(),
        ));
    }
    build(
        "div",
        vec![Attr::class("card empty-state")],
        Children::List(entries),
    )
}

/// Facet chip row.
pub fn chip_row(chips: &[Chip]) -> Node {
    let entries = chips
        .iter()
        .map(|chip| {
            let class = if chip.active { "chip active" } else { "chip" };
            Some(
                build(
                    "div",
                    vec![
                        Attr::class(class),
                        Attr::data("facet", chip.facet.label()),
                        Attr::text(chip.facet.label()),
                    ],
                    Children::Empty,
                )
                .into(),
            )
        })
        .collect();
    build("div", vec![Attr::class("chips")], Children::List(entries))
}

/// Renders one article as a compact list card.
pub fn article_card(article: &Article) -> Node {
    let title = article.title.as_deref().unwrap_or(DEFAULT_ARTICLE_TITLE);
    let excerpt = article.excerpt.as_deref().unwrap_or(DEFAULT_ARTICLE_EXCERPT);
    let cover = article.cover.as_deref().unwrap_or(DEFAULT_ARTICLE_COVER);
    let date = article.date.as_deref().unwrap_or("").trim();
    let tags = cap_tags(&article.tags, Some(COMPACT_TAG_LIMIT));

    let cover_img = build(
        "img",
        vec![
            Attr::literal("src", cover),
            Attr::literal("alt", title),
            Attr::event("error", "this.style.opacity='.35'"),
        ],
        Children::Empty,
    );

    let mut meta_entries: Vec<Option<Child>> = Vec::new();
    if !date.is_empty() {
        meta_entries.push(Some(
            pill(&display_date(date, DateStyle::Slash), PillVariant::Plain).into(),
        ));
    }
    meta_entries.extend(
        tags.iter()
            .map(|tag| Some(pill(tag, PillVariant::Accent).into())),
    );
    let meta = build(
        "div",
        vec![Attr::class("article-card__meta")],
        Children::List(meta_entries),
    );

    let read_href = format!("./article.html?id={}", urlencoding::encode(&article.id));
    let shown_id = if article.id.is_empty() {
        "N/A"
    } else {
        article.id.as_str()
    };
    let actions = build(
        "div",
        vec![Attr::class("article-card__actions")],
        Children::List(vec![
            Some(
                build(
                    "a",
                    vec![
                        Attr::class("article-read"),
                        Attr::literal("href", read_href),
                        Attr::text("Read article"),
                    ],
                    Children::Empty,
                )
                .into(),
            ),
            Some(
                build(
                    "span",
                    vec![Attr::class("hint")],
                    Children::List(vec![
                        Some(Child::from("ID: ")),
                        Some(
                            build(
                                "span",
                                vec![Attr::class("mono"), Attr::text(shown_id)],
                                Children::Empty,
                            )
                            .into(),
                        ),
                    ]),
                )
                .into(),
            ),
        ]),
    );

    let body = build(
        "div",
        vec![Attr::class("article-card__body")],
        Children::List(vec![
            Some(
                build(
                    "h3",
                    vec![Attr::class("article-card__title"), Attr::text(title)],
                    Children::Empty,
                )
                .into(),
            ),
            Some(meta.into()),
            Some(
                build(
                    "p",
                    vec![Attr::class("article-card__excerpt"), Attr::text(excerpt)],
                    Children::Empty,
                )
                .into(),
            ),
            Some(actions.into()),
        ]),
    );

    build(
        "article",
        vec![Attr::class("article-card")],
        Children::List(vec![
            Some(
                build(
                    "div",
                    vec![Attr::class("article-card__cover")],
                    Children::Element(cover_img),
                )
                .into(),
            ),
            Some(body.into()),
        ]),
    )
}

/// Renders one team member card.
pub fn team_card(member: &TeamMember) -> Node {
    let name = member.name.as_deref().unwrap_or(DEFAULT_MEMBER_NAME);
    let role = member.role.as_deref().unwrap_or(DEFAULT_MEMBER_ROLE);
    let bio = member.bio.as_deref().unwrap_or(DEFAULT_MEMBER_BIO);
    let avatar = member.avatar.as_deref().unwrap_or(DEFAULT_MEMBER_AVATAR);
    let tags = cap_tags(&member.tags, Some(DETAIL_TAG_LIMIT));

    let avatar_img = build(
        "img",
        vec![
            Attr::literal("src", avatar),
            Attr::literal("alt", name),
            Attr::event("error", format!("this.src='{DEFAULT_MEMBER_AVATAR}'")),
        ],
        Children::Empty,
    );

    let mut role_entries: Vec<Option<Child>> = vec![Some(
        build("span", vec![Attr::text(role)], Children::Empty).into(),
    )];
    role_entries.extend(tags.iter().enumerate().map(|(index, tag)| {
        let variant = if index % 2 == 0 {
            PillVariant::Accent
        } else {
            PillVariant::Warn
        };
        Some(pill(tag, variant).into())
    }));

    let top = build(
        "div",
        vec![Attr::class("team-member__top")],
        Children::List(vec![
            Some(
                build(
                    "div",
                    vec![Attr::class("team-member__avatar")],
                    Children::Element(avatar_img),
                )
                .into(),
            ),
            Some(
                build(
                    "div",
                    vec![Attr::class("team-member__meta")],
                    Children::List(vec![
                        Some(
                            build(
                                "div",
                                vec![Attr::class("team-member__name"), Attr::text(name)],
                                Children::Empty,
                            )
                            .into(),
                        ),
                        Some(
                            build(
                                "div",
                                vec![Attr::class("team-member__role")],
                                Children::List(role_entries),
                            )
                            .into(),
                        ),
                    ]),
                )
                .into(),
            ),
        ]),
    );

    let link_entries = member
        .links
        .iter()
        .take(LINK_LIMIT)
        .map(|link| {
            let url = link.url.as_deref().unwrap_or("#");
            let label = link.label.as_deref().unwrap_or(DEFAULT_LINK_LABEL);
            let mut attrs = vec![
                Attr::class("team-link"),
                Attr::literal("href", url),
                Attr::text(label),
            ];
            if is_external(url) {
                attrs.push(Attr::literal("target", "_blank"));
                attrs.push(Attr::literal("rel", "noopener"));
            }
            Some(build("a", attrs, Children::Empty).into())
        })
        .collect();
    let link_row = build(
        "div",
        vec![Attr::class("team-member__links")],
        Children::List(link_entries),
    );

    build(
        "article",
        vec![Attr::class("team-member")],
        Children::List(vec![
            Some(top.into()),
            Some(
                build(
                    "div",
                    vec![Attr::class("team-member__bio"), Attr::text(bio)],
                    Children::Empty,
                )
                .into(),
            ),
            Some(link_row.into()),
        ]),
    )
}

/// Meta pill row for the article detail surface: date, author, then up to
/// three tags.
pub fn article_meta(article: &Article) -> Node {
    let mut entries: Vec<Option<Child>> = Vec::new();
    if let Some(date) = article.date.as_deref().filter(|value| !value.trim().is_empty()) {
        entries.push(Some(
            pill(&display_date(date, DateStyle::Slash), PillVariant::Plain).into(),
        ));
    }
    if let Some(author) = article
        .author
        .as_deref()
        .filter(|value| !value.trim().is_empty())
    {
        entries.push(Some(pill(author, PillVariant::Plain).into()));
    }
    entries.extend(
        cap_tags(&article.tags, Some(DETAIL_TAG_LIMIT))
            .iter()
            .map(|tag| Some(pill(tag, PillVariant::Accent).into())),
    );
    build(
        "div",
        vec![Attr::class("article-meta")],
        Children::List(entries),
    )
}

/// Renders the article body to content nodes.
///
/// Missing content renders nothing; a bare string renders as one paragraph.
pub fn content_nodes(content: Option<&ArticleContent>) -> Vec<Node> {
    match content {
        None => Vec::new(),
        Some(ArticleContent::Text(text)) => {
            vec![build("p", vec![Attr::text(text.as_str())], Children::Empty)]
        }
        Some(ArticleContent::Blocks(blocks)) => blocks.iter().map(block_node).collect(),
    }
}

fn block_node(block: &ContentBlock) -> Node {
    match block {
        ContentBlock::Paragraph { text } => {
            build("p", vec![Attr::text(text.as_str())], Children::Empty)
        }
        ContentBlock::Heading { text } => {
            build("h3", vec![Attr::text(text.as_str())], Children::Empty)
        }
        ContentBlock::Quote { text } => {
            build("blockquote", vec![Attr::text(text.as_str())], Children::Empty)
        }
        ContentBlock::List { items } => build(
            "ul",
            vec![],
            Children::nodes(
                items
                    .iter()
                    .map(|item| build("li", vec![Attr::text(item.as_str())], Children::Empty))
                    .collect(),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{article_card, pill, team_card, PillVariant};
    use crate::model::article::Article;
    use crate::model::team::TeamMember;
    use crate::render::node::Child;

    #[test]
    fn pill_variant_maps_to_class_list() {
        let node = pill("x", PillVariant::Accent);
        assert_eq!(node.class.as_deref(), Some("pill pill-accent"));
        assert_eq!(node.text.as_deref(), Some("x"));
    }

    #[test]
    fn article_card_compact_caps_tags_at_two() {
        let article = Article {
            id: "a-1".to_string(),
            tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..Article::default()
        };
        let card = article_card(&article);
        let body = match &card.children[1] {
            Child::Element(node) => node,
            other => panic!("unexpected child: {other:?}"),
        };
        let meta = match &body.children[1] {
            Child::Element(node) => node,
            other => panic!("unexpected child: {other:?}"),
        };
        // no date pill, so every meta child is a tag pill
        assert_eq!(meta.children.len(), 2);
    }

    #[test]
    fn team_card_substitutes_defaults_for_missing_fields() {
        let card = team_card(&TeamMember::default());
        let bio = match &card.children[1] {
            Child::Element(node) => node,
            other => panic!("unexpected child: {other:?}"),
        };
        assert_eq!(bio.text.as_deref(), Some("No bio yet."));
    }
}
