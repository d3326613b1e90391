//! Declarative node construction.
//!
//! # Responsibility
//! - Build one UI-tree node from a tag name, typed attributes and a
//!   children shape.
//!
//! # Invariants
//! - Construction never fails; a blank tag degrades to a `div`.
//! - A `Text` attribute wins over any children shape.
//! - Skipped (`None`) list children leave no trace in the tree.

/// Typed node attribute. Each variant carries only its relevant payload and
/// is matched exhaustively during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// Class list as one space-joined string.
    Class(String),
    /// Text content; children are ignored when present.
    Text(String),
    /// Raw inner markup. The caller is responsible for pre-sanitizing.
    Html(String),
    /// One custom-data entry (`data-<name>`).
    Data(String, String),
    /// One event binding; the handler is an inline script snippet.
    Event { name: String, handler: String },
    /// Any other literal attribute.
    Literal(String, String),
}

impl Attr {
    pub fn class(value: impl Into<String>) -> Self {
        Self::Class(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn html(value: impl Into<String>) -> Self {
        Self::Html(value.into())
    }

    pub fn data(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Data(name.into(), value.into())
    }

    pub fn event(name: impl Into<String>, handler: impl Into<String>) -> Self {
        Self::Event {
            name: name.into(),
            handler: handler.into(),
        }
    }

    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Literal(name.into(), value.into())
    }
}

/// One child slot inside a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(Node),
    Text(String),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Element(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Children accepted by [`build`].
///
/// A list may contain `None` entries; they are dropped, which lets callers
/// express conditional children inline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Children {
    #[default]
    Empty,
    /// Sets the node's text content.
    Text(String),
    /// Appends a single node.
    Element(Node),
    /// Appends nodes/strings in order, skipping `None` entries.
    List(Vec<Option<Child>>),
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Self::Element(node)
    }
}

impl Children {
    /// Wraps a plain node list; nothing is skipped.
    pub fn nodes(nodes: Vec<Node>) -> Self {
        Self::List(nodes.into_iter().map(|node| Some(node.into())).collect())
    }
}

/// One static UI-tree node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub tag: String,
    pub class: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub dataset: Vec<(String, String)>,
    pub events: Vec<(String, String)>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Child>,
}

/// Builds one node from a tag name, attributes and children.
///
/// There are no error conditions: a blank tag falls back to `div`, and a
/// `Text` attribute suppresses whatever children were given, keeping
/// rendering resilient to partial data.
pub fn build(tag: &str, attrs: Vec<Attr>, children: Children) -> Node {
    let tag = tag.trim();
    let mut node = Node {
        tag: if tag.is_empty() { "div" } else { tag }.to_string(),
        ..Node::default()
    };

    for attr in attrs {
        match attr {
            Attr::Class(value) => node.class = Some(value),
            Attr::Text(value) => node.text = Some(value),
            Attr::Html(value) => node.html = Some(value),
            Attr::Data(name, value) => node.dataset.push((name, value)),
            Attr::Event { name, handler } => node.events.push((name, handler)),
            Attr::Literal(name, value) => node.attrs.push((name, value)),
        }
    }

    match children {
        Children::Empty => {}
        Children::Text(value) => {
            if node.text.is_none() {
                node.text = Some(value);
            }
        }
        Children::Element(child) => node.children.push(Child::Element(child)),
        Children::List(entries) => node.children.extend(entries.into_iter().flatten()),
    }

    if node.text.is_some() {
        node.children.clear();
    }

    node
}
