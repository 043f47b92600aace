//! Cardkit Application Layer
//!
//! Wires the pieces together for hosts: the global [`CardStore`], the
//! `cardkit.toml` config file, profile loading, and the adapter that reads
//! both global stores and renders the card.
//!
//! # Example
//!
//! ```rust,ignore
//! use cardkit_app::prelude::*;
//!
//! let config = CardkitConfig::load_from_dir(Path::new("."))?;
//! ThemeState::init(config.appearance.scheme, config.to_palette()?);
//! CardStore::init(config.profile.unwrap_or_default(), config.card.theme);
//!
//! let card = render_from_store()?;
//! let page = render_document(&card, ThemeState::get().scheme(), "Profile");
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod store;

pub use config::{AppearanceConfig, CardConfig, CardkitConfig, PaletteEntry, CONFIG_FILE};
pub use error::{CardkitError, Result};
pub use loader::load_profile;
pub use render::{render_document, render_from_store, render_snapshot, to_json, CARD_ID};
pub use store::{CardSnapshot, CardStore};

/// Prelude module - import everything commonly needed to host a card
pub mod prelude {
    pub use crate::config::CardkitConfig;
    pub use crate::error::{CardkitError, Result};
    pub use crate::loader::load_profile;
    pub use crate::render::{render_document, render_from_store, render_snapshot, to_json};
    pub use crate::store::{CardSnapshot, CardStore};
    pub use cardkit_cn::{render, render_profile_card, ProfileCardBuilder, ProfileData};
    pub use cardkit_layout::{Element, Node};
    pub use cardkit_theme::{
        ColorScheme, ColorSchemePreference, Palette, StyleBundle, ThemeName, ThemeState,
    };
}
