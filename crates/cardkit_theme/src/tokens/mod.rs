//! Class tokens for theming
//!
//! The fixed class fragments every bundle is assembled from. Theme-dependent
//! pieces live in [`crate::presets`] and [`crate::palette`].

/// Card frame, applied ahead of the theme's background/text classes
pub const CARD_FRAME: &str = "w-full max-w-md mx-auto overflow-hidden shadow-lg";

/// Text color that follows the card's own foreground
pub const BASE_TEXT: &str = "text-current";

/// Contact and footer link styling (theme-independent)
pub const LINK: &str =
    "text-current flex items-center gap-2 text-sm hover:underline transition-colors duration-200";

/// Section background on a light card
pub const SECTION_ON_LIGHT: &str = "bg-black";
/// Section background on any other card
pub const SECTION_ON_TINTED: &str = "bg-white";
/// Section opacity, shared by both section backgrounds
pub const SECTION_OPACITY: &str = "bg-opacity-10";
/// Surface layered on top of the section when the ambient scheme is dark
pub const SECTION_DARK_SURFACE: &str = "dark:bg-gray-800 dark:bg-opacity-50";

/// Badge background on a light card
pub const BADGE_ON_LIGHT: &str = "bg-black bg-opacity-10";
/// Badge background on any other card
pub const BADGE_ON_TINTED: &str = "bg-white bg-opacity-30";
/// Badge body shared by every theme
pub const BADGE_BODY: &str =
    "text-current hover:bg-opacity-100 hover:text-white font-bold transition-all duration-200";
/// Badge hover on a light card
pub const BADGE_HOVER_ON_LIGHT: &str = "hover:bg-gray-900";
/// Badge hover on any other card
pub const BADGE_HOVER_ON_TINTED: &str = "hover:bg-white hover:text-gray-900";
/// Badge sizing, emitted last
pub const BADGE_SIZE: &str = "px-2 py-1 text-xs whitespace-nowrap overflow-hidden";
