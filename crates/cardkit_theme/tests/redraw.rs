//! Redraw notifications from the ambient theme state.
//!
//! The callback is process-global, so this binary holds a single test.

use std::sync::atomic::{AtomicUsize, Ordering};

use cardkit_theme::{
    set_redraw_callback, ColorScheme, ColorSchemePreference, Palette, ThemeName, ThemeState,
};

static REDRAWS: AtomicUsize = AtomicUsize::new(0);

fn count_redraw() {
    REDRAWS.fetch_add(1, Ordering::SeqCst);
}

fn redraws() -> usize {
    REDRAWS.load(Ordering::SeqCst)
}

#[test]
fn scheme_and_palette_changes_request_redraw() {
    set_redraw_callback(count_redraw);
    let state = ThemeState::new(
        ColorSchemePreference::System,
        ColorScheme::Light,
        Palette::builtin(),
    );

    state.set_scheme(ColorScheme::Dark);
    assert_eq!(redraws(), 1);

    // already forced dark
    state.set_scheme(ColorScheme::Dark);
    assert_eq!(redraws(), 1);

    // system changes are ignored while a scheme is forced
    state.set_system_scheme(ColorScheme::Dark);
    assert_eq!(redraws(), 1);

    state.use_system();
    assert_eq!(redraws(), 2);
    state.set_system_scheme(ColorScheme::Light);
    assert_eq!(redraws(), 3);
    assert_eq!(state.scheme(), ColorScheme::Light);

    state.set_card_override(ThemeName::Ocean, "bg-teal-500 text-white");
    assert_eq!(redraws(), 4);
    state.clear_overrides();
    assert_eq!(redraws(), 5);
}
