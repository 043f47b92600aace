//! Cardkit Component Library
//!
//! shadcn-style components built on `cardkit_layout` elements, themed through
//! `cardkit_theme` style bundles, plus the profile card itself.
//!
//! # Components
//!
//! - [`card`](components::card): card, header, content, footer
//! - [`avatar`](components::avatar): round image with an initial fallback
//! - [`badge`](components::badge): pill labels with variants
//! - [`icon`](components::icon): inline Lucide SVGs
//!
//! # Profile card
//!
//! ```ignore
//! use cardkit_cn::{render, ProfileData};
//! use cardkit_theme::ThemeState;
//!
//! let bundle = ThemeState::get().resolve(theme);
//! let tree = render(&profile, &bundle);
//! println!("{}", tree.to_html());
//! ```

pub mod components;
pub mod profile;
pub mod profile_card;

pub use components::avatar::{avatar, avatar_fallback, avatar_image, initial, PLACEHOLDER_GLYPH};
pub use components::badge::{badge, BadgeBuilder, BadgeVariant};
pub use components::card::{card, card_content, card_footer, card_header};
pub use components::icon::{icon, icons, IconBuilder};
pub use profile::{Contact, ContactKind, ProfileData};
pub use profile_card::{render, render_profile_card, ProfileCardBuilder};
