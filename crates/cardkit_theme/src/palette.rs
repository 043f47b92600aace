//! Card palette lookup table
//!
//! Maps each theme to its card background/text classes. The built-in table
//! covers the whole catalog; overrides replace single entries. A theme with
//! no entry uses the `light` entry, and a table without a `light` entry uses
//! the built-in light classes.

use std::sync::OnceLock;

use cardkit_core::ClassList;
use rustc_hash::FxHashMap;

use crate::bundle::StyleBundle;
use crate::error::ThemeError;
use crate::presets::ThemeName;
use crate::theme::ColorScheme;

static BUILTIN: OnceLock<Palette> = OnceLock::new();

/// Theme -> card classes table
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    cards: FxHashMap<ThemeName, ClassList>,
}

impl Palette {
    /// An empty table; every lookup falls through to the built-in light entry
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog's own classes for all five themes
    pub fn builtin() -> Self {
        let cards = ThemeName::all()
            .iter()
            .map(|theme| (*theme, ClassList::parse(theme.card_classes())))
            .collect();
        Self { cards }
    }

    /// Shared built-in table
    pub fn builtin_ref() -> &'static Palette {
        BUILTIN.get_or_init(Self::builtin)
    }

    /// Build a table from `(theme id, classes)` pairs on top of the built-ins.
    ///
    /// Unlike [`ThemeName::parse`], ids are checked strictly: an override for
    /// a theme outside the catalog is a config mistake, not a render input.
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut palette = Self::builtin();
        for (id, classes) in overrides {
            let theme =
                ThemeName::from_id(id).ok_or_else(|| ThemeError::UnknownTheme(id.to_string()))?;
            let classes = ClassList::parse(classes);
            if classes.is_empty() {
                return Err(ThemeError::EmptyOverride(id.to_string()));
            }
            palette.set_card_classes(theme, classes);
        }
        Ok(palette)
    }

    pub fn set_card_classes(&mut self, theme: ThemeName, classes: impl Into<ClassList>) {
        self.cards.insert(theme, classes.into());
    }

    /// Builder form of [`Palette::set_card_classes`]
    pub fn with_card_classes(mut self, theme: ThemeName, classes: impl Into<ClassList>) -> Self {
        self.set_card_classes(theme, classes);
        self
    }

    /// Drop an entry so the theme falls back to `light`
    pub fn remove_card_classes(&mut self, theme: ThemeName) {
        self.cards.remove(&theme);
    }

    /// Card background/text classes with the `light` fallback
    pub fn card_classes(&self, theme: ThemeName) -> ClassList {
        self.cards
            .get(&theme)
            .or_else(|| self.cards.get(&ThemeName::Light))
            .cloned()
            .unwrap_or_else(|| ClassList::parse(ThemeName::Light.card_classes()))
    }

    /// Resolve the full bundle for a theme in the given ambient scheme
    pub fn resolve(&self, theme: ThemeName, scheme: ColorScheme) -> StyleBundle {
        StyleBundle::assemble(theme, scheme, self.card_classes(theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_catalog() {
        let palette = Palette::builtin();
        for theme in ThemeName::all() {
            assert_eq!(
                palette.card_classes(*theme).to_string(),
                theme.card_classes()
            );
        }
    }

    #[test]
    fn test_missing_entry_uses_light_entry() {
        let palette = Palette::empty().with_card_classes(ThemeName::Light, "bg-slate-50");
        assert_eq!(palette.card_classes(ThemeName::Ocean).to_string(), "bg-slate-50");
    }

    #[test]
    fn test_empty_table_uses_builtin_light() {
        let palette = Palette::empty();
        assert_eq!(
            palette.card_classes(ThemeName::Sunset).to_string(),
            ThemeName::Light.card_classes()
        );
    }

    #[test]
    fn test_override_touches_only_its_theme() {
        let palette = Palette::with_overrides([("ocean", "bg-cyan-700 text-white")]).unwrap();
        assert_eq!(
            palette.card_classes(ThemeName::Ocean).to_string(),
            "bg-cyan-700 text-white"
        );
        assert_eq!(
            palette.card_classes(ThemeName::Nature).to_string(),
            ThemeName::Nature.card_classes()
        );
    }

    #[test]
    fn test_override_rejects_unknown_and_empty() {
        assert_eq!(
            Palette::with_overrides([("forest", "bg-green-900")]),
            Err(ThemeError::UnknownTheme("forest".into()))
        );
        assert_eq!(
            Palette::with_overrides([("dark", "   ")]),
            Err(ThemeError::EmptyOverride("dark".into()))
        );
    }

    #[test]
    fn test_removed_entry_falls_back_to_light() {
        let mut palette = Palette::builtin();
        palette.remove_card_classes(ThemeName::Dark);
        assert_eq!(
            palette.card_classes(ThemeName::Dark),
            palette.card_classes(ThemeName::Light)
        );
    }
}
