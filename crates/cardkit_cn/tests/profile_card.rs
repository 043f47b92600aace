use cardkit_cn::profile_card::{NAME_PLACEHOLDER, POSITION_PLACEHOLDER};
use cardkit_cn::{render, render_profile_card, ProfileData};
use cardkit_layout::widgets::is_isolated_link;
use cardkit_layout::Element;
use cardkit_theme::{resolve, resolve_id, ColorScheme, ThemeName};
use pretty_assertions::assert_eq;

fn badge_labels(card: &Element) -> Vec<String> {
    card.find_all_by_slot("badge")
        .iter()
        .map(|b| b.text_content())
        .collect()
}

fn alex() -> ProfileData {
    ProfileData {
        name: "Alex".into(),
        position: "Engineer".into(),
        linkedin: Some("alexdev".into()),
        skills: Some("Go, Rust".into()),
        ..Default::default()
    }
}

#[test]
fn ocean_card_end_to_end() {
    let card = render_profile_card(&alex(), ThemeName::Ocean, ColorScheme::Light);
    let bundle = resolve(ThemeName::Ocean, ColorScheme::Light);

    let links = card.find_all_by_slot("contact-link");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].attribute("href"), Some("https://linkedin.com/in/alexdev"));
    assert_eq!(links[0].attribute("data-contact"), Some("linkedin"));
    assert_eq!(links[0].text_content(), " alexdev");

    assert_eq!(badge_labels(&card), vec!["Go", "Rust"]);

    assert_eq!(card.find_by_slot("profile-name").unwrap().text_content(), "Alex");
    assert_eq!(
        card.find_by_slot("profile-position").unwrap().text_content(),
        "Engineer"
    );

    assert!(card.classes().contains_all(&bundle.card.to_string()));
    for b in card.find_all_by_slot("badge") {
        assert!(b.classes().contains_all(&bundle.badge.to_string()));
    }
    assert!(card
        .find_by_slot("team-section")
        .unwrap()
        .classes()
        .contains_all(&bundle.section.to_string()));
    assert!(links[0].classes().contains_all(&bundle.link.to_string()));
}

#[test]
fn skills_split_keeps_empty_piece() {
    let profile = ProfileData {
        skills: Some("a, b ,, c".into()),
        ..Default::default()
    };
    let card = render_profile_card(&profile, ThemeName::Light, ColorScheme::Light);
    assert_eq!(badge_labels(&card), vec!["a", "b", "", "c"]);
}

#[test]
fn absent_fields_render_placeholders_and_no_regions() {
    let card = render_profile_card(&ProfileData::default(), ThemeName::Dark, ColorScheme::Dark);

    assert!(card.find_by_slot("contact-links").is_some());
    assert!(card.find_all_by_slot("contact-link").is_empty());
    assert!(card.find_by_slot("skills").is_none());
    assert!(card.find_all_by_slot("badge").is_empty());

    assert_eq!(
        card.find_by_slot("profile-name").unwrap().text_content(),
        NAME_PLACEHOLDER
    );
    assert_eq!(
        card.find_by_slot("profile-position").unwrap().text_content(),
        POSITION_PLACEHOLDER
    );
}

#[test]
fn empty_strings_count_as_absent() {
    let profile = ProfileData {
        name: "Sam".into(),
        linkedin: Some(String::new()),
        github: Some(String::new()),
        personal_website: Some(String::new()),
        skills: Some(String::new()),
        ..Default::default()
    };
    let card = render_profile_card(&profile, ThemeName::Nature, ColorScheme::Light);
    assert!(card.find_all_by_slot("contact-link").is_empty());
    assert!(card.find_by_slot("skills").is_none());
}

#[test]
fn empty_name_uses_placeholder_glyph() {
    let card = render_profile_card(&ProfileData::default(), ThemeName::Light, ColorScheme::Light);
    let fallback = card.find_by_slot("avatar-fallback").unwrap();
    assert_eq!(fallback.text_content(), "?");
}

#[test]
fn leading_space_in_name_gives_blank_glyph() {
    let profile = ProfileData::new(" alex", "");
    let card = render_profile_card(&profile, ThemeName::Light, ColorScheme::Light);
    assert_eq!(card.find_by_slot("avatar-fallback").unwrap().text_content(), " ");
    assert_eq!(
        card.find_by_slot("profile-name").unwrap().text_content(),
        " alex"
    );
}

#[test]
fn icon_labels_are_spaced_from_their_icons() {
    let profile = ProfileData {
        github: Some("octo".into()),
        personal_website: Some("https://octo.dev".into()),
        ..Default::default()
    };
    let card = render_profile_card(&profile, ThemeName::Nature, ColorScheme::Light);
    let labels: Vec<_> = card
        .find_all_by_slot("contact-link")
        .iter()
        .map(|l| l.text_content())
        .collect();
    assert_eq!(labels, vec![" octo", " https://octo.dev"]);

    let group = card.find_by_slot("group-link").unwrap();
    assert_eq!(group.text_content(), "  Find Web Developer (Bangladesh)");
    assert!(card.to_html().contains("</svg> octo</a>"));
}

#[test]
fn theme_classes_replace_component_defaults() {
    let card = render_profile_card(&alex(), ThemeName::Ocean, ColorScheme::Dark);

    assert!(card.has_class("shadow-lg"));
    assert!(!card.has_class("shadow-sm"));
    assert!(!card.has_class("text-card-foreground"));
    assert!(card.has_class("text-white"));

    let footer = card.find_by_slot("card-footer").unwrap();
    assert!(!footer.has_class("pt-0"));
    assert!(footer.has_class("py-3"));
    assert!(footer.has_class("p-6"));

    for badge in card.find_all_by_slot("badge") {
        for gone in ["px-2.5", "py-0.5", "bg-secondary", "font-semibold", "transition-colors"] {
            assert!(!badge.has_class(gone), "badge kept {gone}");
        }
        assert!(badge.has_class("px-2"));
        assert!(badge.has_class("font-bold"));
    }

    let section = card.find_by_slot("team-section").unwrap();
    assert!(section.has_class("bg-white"));
    assert!(section.has_class("dark:bg-gray-800"));
}

#[test]
fn render_is_idempotent() {
    let profile = ProfileData {
        profile_image: Some("https://x.test/a.png".into()),
        github: Some("alex".into()),
        personal_website: Some("https://alex.dev".into()),
        ..alex()
    };
    for theme in ThemeName::all() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let bundle = resolve(*theme, scheme);
            let first = render(&profile, &bundle);
            let second = render(&profile, &bundle);
            assert_eq!(first, second);
            assert_eq!(first.to_html(), second.to_html());
        }
    }
}

#[test]
fn contact_links_follow_field_order_and_open_isolated() {
    let profile = ProfileData {
        linkedin: Some("alexdev".into()),
        github: Some("alex".into()),
        personal_website: Some("https://alex.dev/?a=1&b=2".into()),
        ..Default::default()
    };
    let card = render_profile_card(&profile, ThemeName::Sunset, ColorScheme::Light);
    let links = card.find_all_by_slot("contact-link");
    let hrefs: Vec<_> = links.iter().filter_map(|l| l.attribute("href")).collect();
    assert_eq!(
        hrefs,
        vec![
            "https://linkedin.com/in/alexdev",
            "https://github.com/alex",
            "https://alex.dev/?a=1&b=2",
        ]
    );
    assert!(links.iter().all(|l| is_isolated_link(l)));
    assert!(is_isolated_link(card.find_by_slot("group-link").unwrap()));

    let html = card.to_html();
    assert!(html.contains(r#"href="https://alex.dev/?a=1&amp;b=2""#));
}

#[test]
fn unknown_theme_renders_like_light() {
    let light = render(&alex(), &resolve(ThemeName::Light, ColorScheme::Dark));
    let unknown = render(&alex(), &resolve_id("midnight", ColorScheme::Dark));
    assert_eq!(light, unknown);
}

#[test]
fn dark_scheme_layers_surface_on_sections_only() {
    let card = render_profile_card(&alex(), ThemeName::Ocean, ColorScheme::Dark);
    let section = card.find_by_slot("team-section").unwrap();
    let footer = card.find_by_slot("card-footer").unwrap();
    assert!(section.has_class("dark:bg-gray-800"));
    assert!(footer.has_class("dark:bg-opacity-50"));
    assert!(!card.has_class("dark:bg-gray-800"));

    let light = render_profile_card(&alex(), ThemeName::Ocean, ColorScheme::Light);
    assert!(!light.find_by_slot("team-section").unwrap().has_class("dark:bg-gray-800"));
}

#[test]
fn user_text_is_escaped_in_markup() {
    let profile = ProfileData {
        name: "<b>Eve</b>".into(),
        position: "R&D".into(),
        ..Default::default()
    };
    let html = render_profile_card(&profile, ThemeName::Light, ColorScheme::Light).to_html();
    assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    assert!(html.contains("R&amp;D"));
    assert!(!html.contains("<b>Eve"));
}

#[test]
fn profile_loads_from_toml() {
    let profile: ProfileData = toml::from_str(
        r#"
name = "Alex"
position = "Engineer"
linkedin = "alexdev"
skills = "Go, Rust"
"#,
    )
    .unwrap();
    assert_eq!(profile, alex());
}
