//! Cardkit configuration file handling

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cardkit_cn::ProfileData;
use cardkit_theme::{ColorSchemePreference, Palette, ThemeName};
use serde::{Deserialize, Serialize};

use crate::error::{CardkitError, Result};

/// File name looked up by [`CardkitConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "cardkit.toml";

/// Top-level Cardkit configuration (cardkit.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CardkitConfig {
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    /// Card class overrides keyed by theme id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub palette: BTreeMap<String, PaletteEntry>,
    /// Profile rendered when no profile file is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileData>,
}

/// Card settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CardConfig {
    /// Theme id; anything outside the catalog renders as `light`
    #[serde(default)]
    pub theme: ThemeName,
}

/// Ambient appearance settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub scheme: ColorSchemePreference,
}

/// One `[palette.<theme>]` table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaletteEntry {
    pub card: String,
}

impl CardkitConfig {
    /// Load configuration from a directory (looks for cardkit.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            return Err(CardkitError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(&config_path).map_err(|source| CardkitError::Io {
            path: config_path.clone(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| CardkitError::ConfigParse {
            path: config_path.clone(),
            source,
        })?;

        tracing::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Create a new configuration with the given theme and a sample profile
    pub fn new(theme: ThemeName) -> Self {
        Self {
            card: CardConfig { theme },
            appearance: AppearanceConfig::default(),
            palette: BTreeMap::new(),
            profile: Some(ProfileData {
                skills: Some("Rust, TypeScript".to_string()),
                ..ProfileData::new("Your Name", "Your Position")
            }),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write `cardkit.toml` into `dir`, returning the written path
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, self.to_toml()?).map_err(|source| CardkitError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Built-in palette with the `[palette]` overrides applied
    pub fn to_palette(&self) -> Result<Palette> {
        let overrides = self
            .palette
            .iter()
            .map(|(id, entry)| (id.as_str(), entry.card.as_str()));
        Ok(Palette::with_overrides(overrides)?)
    }
}
