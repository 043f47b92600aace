//! Profile card - the themed card built from a [`ProfileData`] snapshot.
//!
//! Rendering is a pure function of the profile and a resolved
//! [`StyleBundle`]: the same inputs always produce the same tree. Regions:
//!
//! - header: avatar (image or initial), name, position
//! - team section: fixed caption and group name on the section background
//! - contact links: LinkedIn, GitHub, personal site, each only when set
//! - skills: one badge per comma separated piece, only when set
//! - footer: fixed outbound link to the community group
//!
//! ```
//! use cardkit_cn::{render_profile_card, ProfileData};
//! use cardkit_theme::{ColorScheme, ThemeName};
//!
//! let card = render_profile_card(&ProfileData::new("Alex", "Engineer"), ThemeName::Ocean, ColorScheme::Light);
//! assert_eq!(card.find_by_slot("profile-name").unwrap().text_content(), "Alex");
//! ```

use cardkit_layout::prelude::*;
use cardkit_theme::{resolve, ColorScheme, StyleBundle, ThemeName};

use crate::components::avatar::{avatar, avatar_fallback, avatar_image, initial};
use crate::components::badge::badge;
use crate::components::card::{card, card_content, card_footer, card_header};
use crate::components::icon::{icon, icons};
use crate::profile::{ContactKind, ProfileData};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const POSITION_PLACEHOLDER: &str = "Your Position";
pub const AVATAR_ALT: &str = "Profile";
pub const SKILLS_HEADING: &str = "Skills";
pub const TEAM_CAPTION: &str = "Team Member";
pub const GROUP_NAME: &str = "Find Web Developer (Bangladesh)";
pub const GROUP_URL: &str = "https://www.facebook.com/groups/1371141593218964";

const ICON_SIZE: &str = "w-5 h-5";

/// Builder for a profile card
pub struct ProfileCardBuilder<'a> {
    profile: &'a ProfileData,
    bundle: &'a StyleBundle,
    id: Option<String>,
}

impl<'a> ProfileCardBuilder<'a> {
    pub fn new(profile: &'a ProfileData, bundle: &'a StyleBundle) -> Self {
        Self {
            profile,
            bundle,
            id: None,
        }
    }

    /// Element id on the card root, so a host can locate or capture it
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn build_component(self) -> Element {
        tracing::trace!(
            "rendering profile card: theme={} scheme={}",
            self.bundle.theme.id(),
            self.bundle.scheme
        );

        let mut root = card().classes_from(&self.bundle.card);
        if let Some(id) = &self.id {
            root = root.id(id.clone());
        }

        root.child(self.header())
            .child(
                card_content()
                    .class("space-y-6")
                    .child(self.team_section())
                    .child(self.contact_links())
                    .child_opt(self.skills()),
            )
            .child(self.footer())
    }

    fn header(&self) -> Element {
        let profile = self.profile;

        let picture = match profile.profile_image() {
            Some(src) => avatar_image(src, AVATAR_ALT),
            None => avatar_fallback()
                .class("text-3xl font-bold bg-gray-200 text-gray-900")
                .text(initial(&profile.name)),
        };

        let name = if profile.name.is_empty() {
            NAME_PLACEHOLDER
        } else {
            profile.name.as_str()
        };
        let position = if profile.position.is_empty() {
            POSITION_PLACEHOLDER
        } else {
            profile.position.as_str()
        };

        card_header()
            .class("flex flex-col items-center gap-4 pb-6")
            .child(
                avatar()
                    .class("w-24 h-24 border-4 border-current shadow-md")
                    .child(picture),
            )
            .child(
                div()
                    .class("text-center space-y-1")
                    .child(
                        h2().slot("profile-name")
                            .classes_from(&self.bundle.text("text-2xl font-bold"))
                            .text(name),
                    )
                    .child(
                        p().slot("profile-position")
                            .classes_from(&self.bundle.text("text-lg"))
                            .text(position),
                    ),
            )
    }

    fn team_section(&self) -> Element {
        div()
            .slot("team-section")
            .class("text-center")
            .classes_from(&self.bundle.section)
            .class("py-3 px-4 rounded-md")
            .child(
                p().classes_from(&self.bundle.text("text-sm font-semibold mb-1"))
                    .text(TEAM_CAPTION),
            )
            .child(
                p().classes_from(&self.bundle.text("text-lg font-bold"))
                    .text(GROUP_NAME),
            )
    }

    fn contact_links(&self) -> Element {
        let links = self.profile.contacts().into_iter().map(|contact| {
            let glyph = match contact.kind {
                ContactKind::LinkedIn => icons::LINKEDIN,
                ContactKind::GitHub => icons::GITHUB,
                ContactKind::Website => icons::GLOBE,
            };
            link(contact.href)
                .slot("contact-link")
                .attr("data-contact", contact.kind.id())
                .classes_from(&self.bundle.link)
                .child(icon(glyph).class(ICON_SIZE))
                .text(format!(" {}", contact.label))
        });

        div()
            .slot("contact-links")
            .class("space-y-2 px-4")
            .children_from(links)
    }

    fn skills(&self) -> Option<Element> {
        let skills = self.profile.skill_list()?;

        let badges = skills.into_iter().map(|skill| {
            badge(skill)
                .secondary()
                .classes_from(&self.bundle.badge)
        });

        Some(
            div()
                .slot("skills")
                .class("px-4")
                .child(
                    p().classes_from(&self.bundle.text("font-bold mb-2 text-lg"))
                        .text(SKILLS_HEADING),
                )
                .child(
                    div()
                        .slot("skill-list")
                        .class("flex flex-wrap gap-2")
                        .children_from(badges),
                ),
        )
    }

    fn footer(&self) -> Element {
        card_footer()
            .class("flex flex-col items-center")
            .classes_from(&self.bundle.section)
            .class("mt-4 py-3")
            .child(
                link(GROUP_URL)
                    .slot("group-link")
                    .classes_from(&self.bundle.link)
                    .class("font-bold")
                    .child(icon(icons::FACEBOOK).class(ICON_SIZE))
                    .text(format!("  {GROUP_NAME}")),
            )
    }
}

/// Render a card from a profile and an already resolved bundle
pub fn render(profile: &ProfileData, bundle: &StyleBundle) -> Element {
    ProfileCardBuilder::new(profile, bundle).build_component()
}

/// Resolve the theme against the built-in palette and render
pub fn render_profile_card(profile: &ProfileData, theme: ThemeName, scheme: ColorScheme) -> Element {
    render(profile, &resolve(theme, scheme))
}
