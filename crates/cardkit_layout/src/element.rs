//! Element types for the visual tree
//!
//! A render produces a tree of [`Node`]s. Elements carry a tag, an ordered
//! class list, ordered attributes and children; text nodes carry user text
//! that is always escaped on output; raw nodes carry trusted markup (icon
//! SVGs) that is emitted as-is.

use cardkit_core::ClassList;
use indexmap::IndexMap;
use serde::Serialize;

/// A node in the visual tree
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { content: String },
    Raw { markup: String },
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { content } => Some(content),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text { content }
    }
}

/// An element with a tag, classes, attributes and children
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    tag: &'static str,
    #[serde(skip_serializing_if = "ClassList::is_empty")]
    classes: ClassList,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    // ========== Accessors ==========

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text and raw nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    // ========== Builder ==========

    /// Append space separated class tokens, replacing earlier tokens they
    /// conflict with (see [`ClassList::merge`])
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.merge(classes);
        self
    }

    /// Merge every token of a class list
    pub fn classes_from(mut self, classes: &ClassList) -> Self {
        self.classes.merge_from(classes);
        self
    }

    /// Set an attribute, replacing any previous value but keeping its position
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Component slot marker, used by tree queries
    pub fn slot(self, slot: &str) -> Self {
        self.attr("data-slot", slot)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when present
    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    pub fn children_from<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text {
            content: content.into(),
        })
    }

    /// Apply `transform` only when `condition` holds
    pub fn when(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self)
        } else {
            self
        }
    }
}

/// Create an element with an arbitrary tag
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn h2() -> Element {
    Element::new("h2")
}

/// Image element with source and alt text
pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}

/// Escaped text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text {
        content: content.into(),
    }
}

/// Trusted markup, emitted without escaping
pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw {
        markup: markup.into(),
    }
}
