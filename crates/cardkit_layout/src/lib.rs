//! Cardkit Layout
//!
//! The visual tree produced by card renders: element builders, HTML
//! serialization and read-only tree queries.

pub mod element;
pub mod query;
pub mod renderer;
pub mod widgets;

pub use element::{Element, Node};

/// Prelude module - import everything commonly needed to build trees
pub mod prelude {
    pub use crate::element::{div, el, h2, img, p, raw, span, text, Element, Node};
    pub use crate::widgets::{is_isolated_link, link};
    pub use cardkit_core::{cn, ClassList};
}
