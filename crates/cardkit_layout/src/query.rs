//! Tree queries
//!
//! Read-only helpers for inspecting a rendered tree, mainly so tests and
//! hosts can assert on structure instead of matching markup substrings.

use crate::element::{Element, Node};

impl Element {
    /// Visit this element and every descendant element, depth first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }

    /// All elements (self included) matching `predicate`, in document order
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if predicate(el) {
                found.push(el);
            }
        });
        found
    }

    /// First element matching `predicate`, in document order
    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.find_all(predicate).into_iter().next()
    }

    /// First element with the given `data-slot`
    pub fn find_by_slot(&self, slot: &str) -> Option<&Element> {
        self.find(|el| el.attribute("data-slot") == Some(slot))
    }

    /// All elements with the given `data-slot`
    pub fn find_all_by_slot(&self, slot: &str) -> Vec<&Element> {
        self.find_all(|el| el.attribute("data-slot") == Some(slot))
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|el| el.tag() == tag)
    }

    /// Concatenated text of all descendant text nodes (raw markup excluded)
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in el.children() {
        match child {
            Node::Element(inner) => collect_text(inner, out),
            Node::Text { content } => out.push_str(content),
            Node::Raw { .. } => {}
        }
    }
}
