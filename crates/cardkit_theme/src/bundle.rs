//! Resolved per-region style classes
//!
//! A [`StyleBundle`] is recomputed for every render from the theme and the
//! ambient scheme. It has no identity of its own.

use cardkit_core::ClassList;
use serde::Serialize;

use crate::palette::Palette;
use crate::presets::ThemeName;
use crate::theme::ColorScheme;
use crate::tokens::*;

/// Style classes for each visual region of a card
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleBundle {
    /// Theme the bundle was resolved for (after fallback)
    pub theme: ThemeName,
    /// Ambient scheme the bundle was resolved for
    pub scheme: ColorScheme,
    /// Card frame plus the theme's background/text
    pub card: ClassList,
    /// Contact and footer links
    pub link: ClassList,
    /// Skill badges, including hover colors
    pub badge: ClassList,
    /// Team-member section and footer backgrounds
    pub section: ClassList,
}

impl StyleBundle {
    pub(crate) fn assemble(theme: ThemeName, scheme: ColorScheme, card_colors: ClassList) -> Self {
        let on_light = theme.is_light();

        let card = ClassList::parse(CARD_FRAME).extended(&card_colors);

        // Fragments are appended literally; conflicting hover colors are
        // both emitted and resolved by the stylesheet cascade.
        let mut section = ClassList::parse(if on_light {
            SECTION_ON_LIGHT
        } else {
            SECTION_ON_TINTED
        })
        .with(SECTION_OPACITY);
        // The dark surface is layered after the per-card tint so it wins.
        if scheme.is_dark() {
            section.add(SECTION_DARK_SURFACE);
        }

        let badge = ClassList::parse(if on_light {
            BADGE_ON_LIGHT
        } else {
            BADGE_ON_TINTED
        })
        .with(BADGE_BODY)
        .with(if on_light {
            BADGE_HOVER_ON_LIGHT
        } else {
            BADGE_HOVER_ON_TINTED
        })
        .with(BADGE_SIZE);

        Self {
            theme,
            scheme,
            card,
            link: ClassList::parse(LINK),
            badge,
            section,
        }
    }

    /// Classes for plain text that follows the card foreground
    pub fn text(&self, extra: &str) -> ClassList {
        ClassList::parse(BASE_TEXT).with(extra)
    }
}

/// Resolve a bundle against the built-in palette.
///
/// Total and deterministic: any theme, any scheme, same output every time.
pub fn resolve(theme: ThemeName, scheme: ColorScheme) -> StyleBundle {
    Palette::builtin_ref().resolve(theme, scheme)
}

/// Resolve straight from a theme id, applying the `light` fallback.
pub fn resolve_id(theme: &str, scheme: ColorScheme) -> StyleBundle {
    resolve(ThemeName::parse(theme), scheme)
}
