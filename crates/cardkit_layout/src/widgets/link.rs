//! Link widget
//!
//! An `<a>` element. Outbound links open in a new browsing context and
//! carry `rel="noopener noreferrer"` so the target page gets neither the
//! opener handle nor the referrer.
//!
//! # Example
//!
//! ```ignore
//! use cardkit_layout::prelude::*;
//!
//! // New tab, no opener/referrer leakage
//! link("https://github.com/alexdev").text("alexdev")
//! ```

use crate::element::Element;

/// Browsing context target for outbound links
pub const NEW_CONTEXT: &str = "_blank";

/// Relationship that blocks opener and referrer leakage
pub const NO_LEAKAGE_REL: &str = "noopener noreferrer";

/// Create a link that opens `href` in a new browsing context
pub fn link(href: impl Into<String>) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", NEW_CONTEXT)
        .attr("rel", NO_LEAKAGE_REL)
}

/// True for links that open in a new context without leaking the opener
pub fn is_isolated_link(el: &Element) -> bool {
    el.tag() == "a"
        && el.attribute("target") == Some(NEW_CONTEXT)
        && el
            .attribute("rel")
            .is_some_and(|rel| rel.contains("noopener") && rel.contains("noreferrer"))
}
