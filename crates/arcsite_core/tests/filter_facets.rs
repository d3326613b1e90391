use arcsite_core::{build_chips, collect_tags, filter, Article, Facet};

fn article(id: &str, title: &str, excerpt: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: Some(title.to_string()),
        excerpt: Some(excerpt.to_string()),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        ..Article::default()
    }
}

fn fixture() -> Vec<Article> {
    vec![
        article("a-1", "Getting Started", "first steps", &["guide", "intro"]),
        article("a-2", "Advanced Patterns", "deep dive", &["guide"]),
        article("a-3", "Release Notes", "what changed", &["news"]),
    ]
}

#[test]
fn empty_query_and_all_facet_is_identity() {
    let articles = fixture();
    let visible = filter(&articles, "", &Facet::All);
    assert_eq!(visible.len(), articles.len());
    for (kept, original) in visible.iter().zip(articles.iter()) {
        assert_eq!(kept.id, original.id);
    }
}

#[test]
fn query_matches_by_substring_over_title_excerpt_and_tags() {
    let articles = fixture();

    let by_title = filter(&articles, "  ADVANCED ", &Facet::All);
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "a-2");

    let by_excerpt = filter(&articles, "changed", &Facet::All);
    assert_eq!(by_excerpt.len(), 1);
    assert_eq!(by_excerpt[0].id, "a-3");

    let by_tag = filter(&articles, "intro", &Facet::All);
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, "a-1");
}

#[test]
fn facet_and_query_are_conjunctive() {
    let articles = fixture();
    let facet = Facet::Tag("guide".to_string());

    let faceted = filter(&articles, "", &facet);
    assert_eq!(faceted.len(), 2);

    let both = filter(&articles, "deep", &facet);
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, "a-2");

    let neither = filter(&articles, "changed", &facet);
    assert!(neither.is_empty());
}

#[test]
fn facet_match_is_exact_and_case_sensitive() {
    let articles = fixture();
    assert!(filter(&articles, "", &Facet::Tag("Guide".to_string())).is_empty());
    assert!(filter(&articles, "", &Facet::Tag("gui".to_string())).is_empty());
}

#[test]
fn filtering_preserves_original_relative_order() {
    let articles = fixture();
    let visible = filter(&articles, "e", &Facet::All);
    let ids: Vec<&str> = visible.iter().map(|entry| entry.id.as_str()).collect();
    let mut expected: Vec<&str> = Vec::new();
    for entry in &articles {
        if ids.contains(&entry.id.as_str()) {
            expected.push(entry.id.as_str());
        }
    }
    assert_eq!(ids, expected);
}

#[test]
fn collect_tags_dedups_in_first_occurrence_order() {
    let articles = fixture();
    assert_eq!(collect_tags(&articles), vec!["guide", "intro", "news"]);
}

#[test]
fn chips_lead_with_all_and_keep_source_order() {
    let articles = vec![
        article("a-1", "B first", "", &["b"]),
        article("a-2", "A second", "", &["a"]),
    ];
    let tags = collect_tags(&articles);
    let chips = build_chips(&tags, &Facet::All);

    let labels: Vec<&str> = chips.iter().map(|chip| chip.facet.label()).collect();
    assert_eq!(labels, vec!["All", "b", "a"]);
    assert!(chips[0].active);
    assert!(!chips[1].active);
}

#[test]
fn filter_is_deterministic_for_fixed_inputs() {
    let articles = fixture();
    let facet = Facet::Tag("guide".to_string());
    let first: Vec<&str> = filter(&articles, "g", &facet)
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    let second: Vec<&str> = filter(&articles, "g", &facet)
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(first, second);
}
