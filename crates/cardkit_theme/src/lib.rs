//! Cardkit Theme System
//!
//! Resolves a card theme plus the ambient light/dark scheme into the style
//! classes for every region of a profile card.
//!
//! # Overview
//!
//! - **Catalog**: five named palettes ([`ThemeName`]); unknown names fall back
//!   to `light`
//! - **Palette**: theme -> card background/text table with overrides
//! - **Bundles**: [`StyleBundle`] holds the card, link, badge and section
//!   classes for one render
//! - **Ambient scheme**: [`ThemeState`] follows the system scheme unless the
//!   host forces light or dark
//!
//! # Quick Start
//!
//! ```rust
//! use cardkit_theme::{resolve, ColorScheme, ThemeName};
//!
//! let bundle = resolve(ThemeName::Ocean, ColorScheme::Dark);
//! assert!(bundle.card.contains("from-blue-400"));
//! assert!(bundle.section.contains("dark:bg-gray-800"));
//! ```
//!
//! With the global state:
//!
//! ```rust,ignore
//! use cardkit_theme::{ThemeName, ThemeState};
//!
//! ThemeState::init_default();
//! let bundle = ThemeState::get().resolve(ThemeName::Sunset);
//! ```

pub mod bundle;
pub mod error;
pub mod palette;
pub mod platform;
pub mod presets;
pub mod state;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use bundle::{resolve, resolve_id, StyleBundle};
pub use error::ThemeError;
pub use palette::Palette;
pub use platform::detect_system_color_scheme;
pub use presets::ThemeName;
pub use state::{set_redraw_callback, ThemeState};
pub use theme::{ColorScheme, ColorSchemePreference};
