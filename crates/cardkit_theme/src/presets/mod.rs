//! Built-in card theme catalog.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named card palette.
///
/// Parsing is total: any id outside the catalog falls back to
/// [`ThemeName::Light`], so a stale or mistyped theme never breaks a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum ThemeName {
    Dark,
    #[default]
    Light,
    Nature,
    Ocean,
    Sunset,
}

impl ThemeName {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Nature => "nature",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Nature => "Nature",
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
        }
    }

    /// Full catalog, in menu order.
    pub fn all() -> &'static [ThemeName] {
        const THEMES: [ThemeName; 5] = [
            ThemeName::Dark,
            ThemeName::Light,
            ThemeName::Nature,
            ThemeName::Ocean,
            ThemeName::Sunset,
        ];
        &THEMES
    }

    /// Exact catalog lookup, `None` for unknown ids.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.id() == id)
    }

    /// Total lookup with the `light` fallback.
    pub fn parse(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::debug!("unknown theme '{}', falling back to light", id);
            Self::Light
        })
    }

    /// Background and text classes of the built-in palette.
    pub fn card_classes(self) -> &'static str {
        match self {
            Self::Dark => "bg-gray-900 text-white",
            Self::Light => "bg-white text-gray-900",
            Self::Nature => "bg-gradient-to-br from-green-400 to-blue-500 text-white",
            Self::Ocean => "bg-gradient-to-r from-blue-400 via-blue-500 to-blue-600 text-white",
            Self::Sunset => {
                "bg-gradient-to-br from-orange-400 via-pink-500 to-purple-600 text-white"
            }
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<&str> for ThemeName {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl From<String> for ThemeName {
    fn from(id: String) -> Self {
        Self::parse(&id)
    }
}

impl FromStr for ThemeName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
