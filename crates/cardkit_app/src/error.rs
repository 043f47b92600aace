//! Application error types

use std::path::PathBuf;

use cardkit_theme::ThemeError;
use thiserror::Error;

/// Errors at the edges of the app: files, formats, and uninitialized state
#[derive(Error, Debug)]
pub enum CardkitError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no cardkit.toml found in {}. Run `cardkit init` to create one.", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to parse profile {}: {message}", .path.display())]
    ProfileParse { path: PathBuf, message: String },

    /// Profiles are read from `.toml` or `.json` files only
    #[error("unsupported profile format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// A global store was read before its `init()` ran
    #[error("{0} not initialized. Call {0}::init() at app startup.")]
    NotInitialized(&'static str),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CardkitError>;
