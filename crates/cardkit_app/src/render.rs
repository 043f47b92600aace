//! Store adapter and page output
//!
//! The profile card renderer takes explicit inputs. This module is the one
//! place that reads the global [`CardStore`] and [`ThemeState`] and hands
//! their values to it.

use cardkit_cn::ProfileCardBuilder;
use cardkit_layout::prelude::*;
use cardkit_theme::{ColorScheme, ThemeState};

use crate::error::{CardkitError, Result};
use crate::store::{CardSnapshot, CardStore};

/// Element id given to cards rendered from the store
pub const CARD_ID: &str = "profile-card";

/// Stylesheet runtime that turns the card's utility classes into CSS
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const TAILWIND_CONFIG: &str = "tailwind.config = { darkMode: 'class' }";

/// Render a snapshot against the ambient scheme and palette of `theme_state`
pub fn render_snapshot(snapshot: &CardSnapshot, theme_state: &ThemeState) -> Element {
    let bundle = theme_state.resolve(snapshot.theme);
    ProfileCardBuilder::new(&snapshot.profile, &bundle)
        .id(CARD_ID)
        .build_component()
}

/// Render the card currently held by the global stores
pub fn render_from_store() -> Result<Element> {
    let store = CardStore::try_get().ok_or(CardkitError::NotInitialized("CardStore"))?;
    let theme_state = ThemeState::try_get().ok_or(CardkitError::NotInitialized("ThemeState"))?;
    Ok(render_snapshot(&store.snapshot(), theme_state))
}

/// Wrap a card in a standalone HTML page.
///
/// The `dark` class goes on `<html>` when `scheme` is dark, which is what the
/// card's `dark:` classes key off.
pub fn render_document(card: &Element, scheme: ColorScheme, title: &str) -> String {
    let head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text(title))
        .child(el("script").attr("src", TAILWIND_CDN))
        .child(el("script").child(raw(TAILWIND_CONFIG)));

    let body = el("body")
        .class("min-h-screen flex items-center justify-center bg-gray-100 dark:bg-gray-900 p-4")
        .child(card.clone());

    let html = el("html")
        .attr("lang", "en")
        .when(scheme.is_dark(), |html| html.class("dark"))
        .child(head)
        .child(body);

    format!("<!DOCTYPE html>\n{}\n", html.to_html())
}

/// Serialize a card tree as pretty JSON
pub fn to_json(card: &Element) -> Result<String> {
    Ok(serde_json::to_string_pretty(card)?)
}
