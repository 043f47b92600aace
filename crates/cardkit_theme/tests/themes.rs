use cardkit_theme::{resolve, resolve_id, ColorScheme, Palette, ThemeName};

#[test]
fn theme_catalog_contains_expected_themes() {
    let mut ids: Vec<&str> = ThemeName::all().iter().map(|t| t.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["dark", "light", "nature", "ocean", "sunset"]);
}

#[test]
fn unknown_theme_resolves_like_light_in_both_schemes() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let light = resolve(ThemeName::Light, scheme);
        for id in ["", "forest", "OCEAN", "light ", "🌈"] {
            assert_eq!(
                resolve_id(id, scheme),
                light,
                "id={id:?} scheme={scheme:?}"
            );
        }
    }
}

#[test]
fn every_theme_has_distinct_card_classes() {
    let mut seen = Vec::new();
    for theme in ThemeName::all() {
        let card = resolve(*theme, ColorScheme::Light).card.to_string();
        assert!(!seen.contains(&card), "theme {theme:?} duplicates card classes");
        seen.push(card);
    }
}

#[test]
fn resolution_is_deterministic() {
    for theme in ThemeName::all() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(resolve(*theme, scheme), resolve(*theme, scheme));
        }
    }
}

#[test]
fn builtin_palette_matches_free_resolve() {
    let palette = Palette::builtin();
    for theme in ThemeName::all() {
        assert_eq!(
            palette.resolve(*theme, ColorScheme::Dark),
            resolve(*theme, ColorScheme::Dark)
        );
    }
}

#[test]
fn palette_overrides_parse_from_toml_table() {
    let src = r#"
ocean = "bg-sky-800 text-white"
sunset = "bg-rose-500 text-white"
"#;
    let table: std::collections::BTreeMap<String, String> = toml::from_str(src).unwrap();
    let palette =
        Palette::with_overrides(table.iter().map(|(k, v)| (k.as_str(), v.as_str()))).unwrap();

    let ocean = palette.resolve(ThemeName::Ocean, ColorScheme::Light);
    assert!(ocean.card.contains_all("w-full bg-sky-800 text-white"));
    assert!(!ocean.card.contains("from-blue-400"));
}

#[test]
fn bundle_serializes_with_class_strings() {
    let bundle = resolve(ThemeName::Light, ColorScheme::Light);
    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["theme"], "light");
    assert_eq!(json["scheme"], "light");
    assert_eq!(json["section"], "bg-black bg-opacity-10");
}
