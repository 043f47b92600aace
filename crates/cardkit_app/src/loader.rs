//! Profile file loading

use std::fs;
use std::path::Path;

use cardkit_cn::ProfileData;

use crate::error::{CardkitError, Result};

/// Read a profile from a `.toml` or `.json` file, chosen by extension
pub fn load_profile(path: &Path) -> Result<ProfileData> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension != "toml" && extension != "json" {
        return Err(CardkitError::UnsupportedFormat(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| CardkitError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = if extension == "toml" {
        toml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };

    let profile: ProfileData = parsed.map_err(|message| CardkitError::ProfileParse {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::debug!("loaded profile '{}' from {}", profile.name, path.display());
    Ok(profile)
}
