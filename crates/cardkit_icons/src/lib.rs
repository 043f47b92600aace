//! # Cardkit Icons
//!
//! The Lucide icons a profile card shows next to its links, as `pub const`
//! path data, plus inline SVG generation.
//!
//! ```
//! use cardkit_icons::{icons, inline_svg};
//!
//! let svg = inline_svg(icons::GITHUB, "w-5 h-5");
//! assert!(svg.starts_with("<svg"));
//! ```

#[rustfmt::skip]
pub mod icons;

/// Stroke width shared by all Lucide icons
pub const STROKE_WIDTH: f32 = 2.0;

/// Inline SVG sized by CSS classes, inheriting the text color for its stroke.
///
/// `class` must be trusted (it is written into the markup as-is). The icon is
/// decorative and hidden from assistive technology; the link label carries
/// the meaning.
pub fn inline_svg(path_data: &str, class: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="{STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{path_data}</svg>"#
    )
}
