//! Avatar component - round image with a text fallback.
//!
//! The host's image loader decides whether an image actually loads; the tree
//! carries either the image or the fallback, never both.

use cardkit_layout::prelude::*;

const AVATAR: &str = "relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full";
const AVATAR_IMAGE: &str = "aspect-square h-full w-full";
const AVATAR_FALLBACK: &str = "flex h-full w-full items-center justify-center rounded-full bg-muted";

/// Placeholder shown when no initial can be derived
pub const PLACEHOLDER_GLYPH: &str = "?";

pub fn avatar() -> Element {
    span().slot("avatar").class(AVATAR)
}

pub fn avatar_image(src: impl Into<String>, alt: impl Into<String>) -> Element {
    img(src, alt).slot("avatar-image").class(AVATAR_IMAGE)
}

pub fn avatar_fallback() -> Element {
    span().slot("avatar-fallback").class(AVATAR_FALLBACK)
}

/// Uppercased first character of `name`, or [`PLACEHOLDER_GLYPH`] when
/// `name` is empty.
///
/// Whitespace counts: `" alex"` yields a blank glyph. Uppercasing can widen
/// a character (`ß` becomes `SS`), so the result is a string.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| PLACEHOLDER_GLYPH.to_string())
}
