use std::fs;

use cardkit_app::prelude::*;
use cardkit_app::CONFIG_FILE;
use pretty_assertions::assert_eq;

#[test]
fn loads_toml_and_json_profiles() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("alex.toml");
    fs::write(
        &toml_path,
        "name = \"Alex\"\nposition = \"Engineer\"\nlinkedin = \"alexdev\"\nskills = \"Go, Rust\"\n",
    )
    .unwrap();

    let json_path = dir.path().join("alex.JSON");
    fs::write(
        &json_path,
        r#"{"name":"Alex","position":"Engineer","linkedin":"alexdev","skills":"Go, Rust"}"#,
    )
    .unwrap();

    let from_toml = load_profile(&toml_path).unwrap();
    let from_json = load_profile(&json_path).unwrap();
    assert_eq!(from_toml, from_json);
    assert_eq!(from_toml.skill_list(), Some(vec!["Go", "Rust"]));
}

#[test]
fn rejects_unknown_profile_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alex.yaml");
    fs::write(&path, "name: Alex").unwrap();
    assert!(matches!(
        load_profile(&path),
        Err(CardkitError::UnsupportedFormat(_))
    ));
}

#[test]
fn reports_profile_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    match load_profile(&path) {
        Err(CardkitError::ProfileParse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_profile_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_profile(&dir.path().join("nope.toml")),
        Err(CardkitError::Io { .. })
    ));
}

#[test]
fn config_saves_and_loads_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = CardkitConfig::new(ThemeName::Ocean);
    let written = config.save_to_dir(dir.path()).unwrap();
    assert_eq!(written, dir.path().join(CONFIG_FILE));

    let loaded = CardkitConfig::load_from_dir(dir.path()).unwrap();
    assert_eq!(loaded, config);

    // A file path is read directly
    let loaded = CardkitConfig::load_from_dir(&written).unwrap();
    assert_eq!(loaded.card.theme, ThemeName::Ocean);
}

#[test]
fn missing_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        CardkitConfig::load_from_dir(dir.path()),
        Err(CardkitError::ConfigNotFound(_))
    ));
}

#[test]
fn invalid_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[card\ntheme = ").unwrap();
    assert!(matches!(
        CardkitConfig::load_from_dir(dir.path()),
        Err(CardkitError::ConfigParse { .. })
    ));
}

#[test]
fn config_drives_a_full_render() {
    let config: CardkitConfig = toml::from_str(
        r#"
[card]
theme = "ocean"

[appearance]
scheme = "dark"

[palette.ocean]
card = "bg-sky-950 text-white"

[profile]
name = "Alex"
position = "Engineer"
linkedin = "alexdev"
skills = "Go, Rust"
"#,
    )
    .unwrap();

    let state = ThemeState::new(
        config.appearance.scheme,
        ColorScheme::Light,
        config.to_palette().unwrap(),
    );
    let snapshot = CardSnapshot {
        profile: config.profile.clone().unwrap(),
        theme: config.card.theme,
    };
    let card = render_snapshot(&snapshot, &state);

    assert!(card.has_class("bg-sky-950"));
    assert!(!card.has_class("from-blue-400"));
    assert_eq!(card.find_all_by_slot("badge").len(), 2);

    let page = render_document(&card, state.scheme(), "Alex");
    assert!(page.contains(r#"<html class="dark" lang="en">"#));
    assert!(page.contains("https://linkedin.com/in/alexdev"));

    let json: serde_json::Value = serde_json::from_str(&to_json(&card).unwrap()).unwrap();
    assert_eq!(json["tag"], "div");
    assert_eq!(json["attributes"]["id"], "profile-card");
}

#[test]
fn global_stores_render_through_adapter() {
    ThemeState::init(ColorSchemePreference::Light, Palette::builtin());
    CardStore::init(ProfileData::new("Alex", "Engineer"), ThemeName::Nature);

    let card = render_from_store().unwrap();
    assert_eq!(
        card.find_by_slot("profile-name").unwrap().text_content(),
        "Alex"
    );
    assert_eq!(card.attribute("id"), Some("profile-card"));
}
