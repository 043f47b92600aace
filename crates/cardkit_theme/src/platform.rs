//! System color scheme detection
//!
//! Cardkit renders outside a browser, so there is no `prefers-color-scheme`
//! media query to ask. Detection reads the environment instead:
//!
//! 1. `CARDKIT_COLOR_SCHEME` (`light` or `dark`), an explicit host override
//! 2. `COLORFGBG` (`fg;bg`), set by many terminal emulators
//!
//! Anything else resolves to [`ColorScheme::Light`].

use crate::theme::ColorScheme;

/// Explicit host override
pub const ENV_COLOR_SCHEME: &str = "CARDKIT_COLOR_SCHEME";
/// Terminal foreground/background hint
pub const ENV_COLORFGBG: &str = "COLORFGBG";

/// Detect the current system color scheme from the process environment
pub fn detect_system_color_scheme() -> ColorScheme {
    let scheme = detect_from(
        std::env::var(ENV_COLOR_SCHEME).ok().as_deref(),
        std::env::var(ENV_COLORFGBG).ok().as_deref(),
    );
    tracing::debug!("detected system color scheme: {}", scheme);
    scheme
}

/// Detection from explicit values (for testing)
pub fn detect_from(override_value: Option<&str>, colorfgbg: Option<&str>) -> ColorScheme {
    if let Some(scheme) = override_value.and_then(|v| v.parse::<ColorScheme>().ok()) {
        return scheme;
    }

    colorfgbg
        .and_then(scheme_from_colorfgbg)
        .unwrap_or(ColorScheme::Light)
}

/// The last field of `COLORFGBG` is the background palette index. Indices
/// 0-6 and 8 are the dark ANSI colors.
fn scheme_from_colorfgbg(value: &str) -> Option<ColorScheme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        0..=6 | 8 => ColorScheme::Dark,
        _ => ColorScheme::Light,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(detect_from(Some("dark"), Some("0;15")), ColorScheme::Dark);
        assert_eq!(detect_from(Some("LIGHT"), Some("15;0")), ColorScheme::Light);
    }

    #[test]
    fn test_invalid_override_is_ignored() {
        assert_eq!(detect_from(Some("sepia"), Some("15;0")), ColorScheme::Dark);
    }

    #[test]
    fn test_colorfgbg_background_index() {
        assert_eq!(detect_from(None, Some("15;0")), ColorScheme::Dark);
        assert_eq!(detect_from(None, Some("0;default;8")), ColorScheme::Dark);
        assert_eq!(detect_from(None, Some("0;15")), ColorScheme::Light);
        assert_eq!(detect_from(None, Some("garbage")), ColorScheme::Light);
    }

    #[test]
    fn test_nothing_set_is_light() {
        assert_eq!(detect_from(None, None), ColorScheme::Light);
    }
}
