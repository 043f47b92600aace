//! Theme error types

use thiserror::Error;

/// Errors raised while reading theme configuration.
///
/// Rendering never fails; these only surface when validating user input
/// such as config files or command-line flags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A color scheme other than `light`, `dark` or `system`
    #[error("invalid color scheme '{0}' (expected light, dark or system)")]
    InvalidScheme(String),

    /// A palette override names a theme outside the catalog
    #[error("unknown theme '{0}' in palette override")]
    UnknownTheme(String),

    /// A palette override with no classes
    #[error("palette override for '{0}' has no classes")]
    EmptyOverride(String),
}
