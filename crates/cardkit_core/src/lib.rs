//! Cardkit Core
//!
//! Foundational primitives shared by the theme resolver and the visual tree.
//!
//! - [`ClassList`]: ordered, duplicate-free style class tokens
//! - [`cn`]: compose several class strings, later utilities winning conflicts

pub mod class_list;
mod conflict;

pub use class_list::{cn, ClassList};
