//! Built-in widgets

pub mod link;

pub use link::{is_isolated_link, link, NEW_CONTEXT, NO_LEAKAGE_REL};
