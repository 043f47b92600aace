//! Global card store
//!
//! Owns the profile being shown and the card theme chosen for it. Editors
//! write here; renders take a [`CardSnapshot`] and never hold the lock while
//! building the tree.

use std::sync::{Mutex, OnceLock, RwLock};

use cardkit_cn::ProfileData;
use cardkit_theme::ThemeName;
use tracing::debug;

/// Global card store instance
static CARD_STORE: OnceLock<CardStore> = OnceLock::new();

/// Global redraw callback - set by the host to re-render the card
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called after every profile or theme change.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(cb) = *REDRAW_CALLBACK.lock().unwrap() {
        cb();
    }
}

/// Everything a single render reads from the store
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSnapshot {
    pub profile: ProfileData,
    pub theme: ThemeName,
}

/// Profile plus selected theme
pub struct CardStore {
    profile: RwLock<ProfileData>,
    theme: RwLock<ThemeName>,
}

impl CardStore {
    /// Build a standalone store (tests and embedded hosts)
    pub fn new(profile: ProfileData, theme: ThemeName) -> Self {
        Self {
            profile: RwLock::new(profile),
            theme: RwLock::new(theme),
        }
    }

    /// Initialize the global store.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(profile: ProfileData, theme: ThemeName) {
        let _ = CARD_STORE.set(Self::new(profile, theme));
    }

    pub fn get() -> &'static CardStore {
        CARD_STORE
            .get()
            .expect("CardStore not initialized. Call CardStore::init() at app startup.")
    }

    pub fn try_get() -> Option<&'static CardStore> {
        CARD_STORE.get()
    }

    pub fn profile(&self) -> ProfileData {
        self.profile.read().unwrap().clone()
    }

    pub fn theme(&self) -> ThemeName {
        *self.theme.read().unwrap()
    }

    /// Consistent copy of profile and theme
    pub fn snapshot(&self) -> CardSnapshot {
        let profile = self.profile.read().unwrap();
        let theme = self.theme.read().unwrap();
        CardSnapshot {
            profile: profile.clone(),
            theme: *theme,
        }
    }

    pub fn set_profile(&self, profile: ProfileData) {
        debug!("CardStore::set_profile - {}", profile.name);
        *self.profile.write().unwrap() = profile;
        trigger_redraw();
    }

    /// Edit the profile in place
    pub fn update_profile(&self, f: impl FnOnce(&mut ProfileData)) {
        f(&mut self.profile.write().unwrap());
        trigger_redraw();
    }

    /// Change the card theme; redraws only when it actually changes
    pub fn set_theme(&self, theme: ThemeName) {
        let mut current = self.theme.write().unwrap();
        if *current == theme {
            return;
        }
        debug!("CardStore::set_theme - switching from {} to {}", *current, theme);
        *current = theme;
        drop(current);

        trigger_redraw();
    }
}
