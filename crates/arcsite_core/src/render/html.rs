//! Node-tree serialization to HTML.
//!
//! # Responsibility
//! - Turn a built node tree into markup: escaped text and attributes, raw
//!   `Html` payloads emitted as-is, events as `on<name>` attributes.
//!
//! # Invariants
//! - Everything except an explicit `Html` payload passes through the
//!   sanitizer on the way out.
//! - Void elements are self-closed and never render children.

use super::escape::escape_html;
use super::node::{Child, Node};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializes one node tree to an HTML string.
pub fn to_html(node: &Node) -> String {
    let tag = node.tag.as_str();
    let mut out = String::new();
    out.push('<');
    out.push_str(tag);

    if let Some(class) = node.class.as_deref() {
        push_attr(&mut out, "class", class);
    }
    for (name, value) in &node.attrs {
        push_attr(&mut out, name, value);
    }
    for (name, value) in &node.dataset {
        push_attr(&mut out, &format!("data-{name}"), value);
    }
    for (name, handler) in &node.events {
        push_attr(&mut out, &format!("on{name}"), handler);
    }

    if VOID_TAGS.contains(&tag) {
        out.push_str(" />");
        return out;
    }
    out.push('>');

    if let Some(text) = node.text.as_deref() {
        out.push_str(&escape_html(Some(text)));
    } else {
        if let Some(html) = node.html.as_deref() {
            out.push_str(html);
        }
        for child in &node.children {
            match child {
                Child::Element(element) => out.push_str(&to_html(element)),
                Child::Text(text) => out.push_str(&escape_html(Some(text))),
            }
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Serializes a node sequence by simple concatenation.
pub fn fragment_html(nodes: &[Node]) -> String {
    nodes.iter().map(to_html).collect()
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(Some(value)));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::super::node::{build, Attr, Children};
    use super::{fragment_html, to_html};

    #[test]
    fn text_content_is_escaped() {
        let node = build("p", vec![Attr::text("a < b")], Children::Empty);
        assert_eq!(to_html(&node), "<p>a &lt; b</p>");
    }

    #[test]
    fn html_payload_is_emitted_raw() {
        let node = build("div", vec![Attr::html("<em>x</em>")], Children::Empty);
        assert_eq!(to_html(&node), "<div><em>x</em></div>");
    }

    #[test]
    fn img_is_self_closing_with_event_attribute() {
        let node = build(
            "img",
            vec![
                Attr::literal("src", "a.png"),
                Attr::event("error", "this.style.opacity='.35'"),
            ],
            Children::Empty,
        );
        let html = to_html(&node);
        assert!(html.starts_with("<img"));
        assert!(html.ends_with("/>"));
        assert!(html.contains("onerror=\"this.style.opacity=&#039;.35&#039;\""));
    }

    #[test]
    fn dataset_entries_render_as_data_attributes() {
        let node = build(
            "div",
            vec![Attr::data("facet", "All")],
            Children::from("chip"),
        );
        assert_eq!(to_html(&node), "<div data-facet=\"All\">chip</div>");
    }

    #[test]
    fn fragment_concatenates_in_order() {
        let first = build("span", vec![Attr::text("a")], Children::Empty);
        let second = build("span", vec![Attr::text("b")], Children::Empty);
        assert_eq!(
            fragment_html(&[first, second]),
            "<span>a</span><span>b</span>"
        );
    }
}
