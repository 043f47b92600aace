//! Global ambient theme state singleton
//!
//! Holds the light/dark preference (defaulting to the system scheme) and the
//! active palette. Cards read it once per render through
//! [`ThemeState::resolve`]; nothing in the render path writes to it.

use std::sync::{Mutex, OnceLock, RwLock};

use cardkit_core::ClassList;

use crate::bundle::StyleBundle;
use crate::palette::Palette;
use crate::platform::detect_system_color_scheme;
use crate::presets::ThemeName;
use crate::theme::{ColorScheme, ColorSchemePreference};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to re-render cards
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// The app layer registers a function that re-renders when the ambient
/// scheme or the palette changes.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// Global ambient theme state
pub struct ThemeState {
    /// How the scheme is chosen
    preference: RwLock<ColorSchemePreference>,

    /// Last detected system scheme
    system: RwLock<ColorScheme>,

    /// Card palette, including overrides
    palette: RwLock<Palette>,
}

impl ThemeState {
    /// Build a standalone state (tests and embedded hosts)
    pub fn new(preference: ColorSchemePreference, system: ColorScheme, palette: Palette) -> Self {
        Self {
            preference: RwLock::new(preference),
            system: RwLock::new(system),
            palette: RwLock::new(palette),
        }
    }

    /// Initialize the global theme state (call once at app startup)
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(preference: ColorSchemePreference, palette: Palette) {
        let state = Self::new(preference, detect_system_color_scheme(), palette);
        let _ = THEME_STATE.set(state);
    }

    /// Initialize following the system scheme with the built-in palette
    pub fn init_default() {
        Self::init(ColorSchemePreference::System, Palette::builtin());
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Color Scheme ==========

    pub fn preference(&self) -> ColorSchemePreference {
        *self.preference.read().unwrap()
    }

    /// Change the preference; redraws only when it actually changes
    pub fn set_preference(&self, preference: ColorSchemePreference) {
        let mut current = self.preference.write().unwrap();
        if *current == preference {
            return;
        }
        tracing::debug!(
            "ThemeState::set_preference - switching from {} to {}",
            *current,
            preference
        );
        *current = preference;
        drop(current);

        trigger_redraw();
    }

    /// The effective ambient scheme
    pub fn scheme(&self) -> ColorScheme {
        self.preference()
            .resolve_with(*self.system.read().unwrap())
    }

    /// Force a scheme, overriding the system preference
    pub fn set_scheme(&self, scheme: ColorScheme) {
        self.set_preference(scheme.into());
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    /// Follow the system again
    pub fn use_system(&self) {
        self.set_preference(ColorSchemePreference::System);
    }

    /// Record a new system scheme (for hosts that watch for OS changes)
    pub fn set_system_scheme(&self, scheme: ColorScheme) {
        let mut current = self.system.write().unwrap();
        if *current == scheme {
            return;
        }
        tracing::debug!("ThemeState::set_system_scheme - now {}", scheme);
        *current = scheme;
        drop(current);

        if self.preference() == ColorSchemePreference::System {
            trigger_redraw();
        }
    }

    // ========== Palette ==========

    /// Snapshot of the active palette
    pub fn palette(&self) -> Palette {
        self.palette.read().unwrap().clone()
    }

    /// Override a theme's card classes
    pub fn set_card_override(&self, theme: ThemeName, classes: impl Into<ClassList>) {
        self.palette
            .write()
            .unwrap()
            .set_card_classes(theme, classes);
        trigger_redraw();
    }

    /// Restore a theme's built-in card classes
    pub fn remove_card_override(&self, theme: ThemeName) {
        self.palette
            .write()
            .unwrap()
            .set_card_classes(theme, theme.card_classes());
        trigger_redraw();
    }

    /// Clear all overrides
    pub fn clear_overrides(&self) {
        *self.palette.write().unwrap() = Palette::builtin();
        trigger_redraw();
    }

    // ========== Resolution ==========

    /// Resolve a card theme against the current scheme and palette
    pub fn resolve(&self, theme: ThemeName) -> StyleBundle {
        let scheme = self.scheme();
        self.palette.read().unwrap().resolve(theme, scheme)
    }
}
