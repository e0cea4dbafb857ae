//! Theme store: light/dark preference with localStorage persistence.
//!
//! Applies the `dark-mode` class on the `<html>` element. The persisted
//! string is the single source of truth after the default; the backend
//! profile carries no theme field, so nothing is mirrored remotely.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::storage;

/// Visual mode. Defaults to light when nothing is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Injectable theme service. Constructed once in `app.rs` and provided via
/// context.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
        }
    }

    /// Reactive handle to the current theme.
    pub fn theme(self) -> RwSignal<Theme> {
        self.theme
    }

    /// Load the persisted preference and apply it. Runs once, from the
    /// shell.
    pub fn init(self) {
        let theme = storage::theme()
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        self.theme.set(theme);
        apply(theme);
    }

    /// Flip the mode, apply it immediately, and persist it.
    pub fn toggle(self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        apply(next);
        storage::set_theme(next.as_str());
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply or remove the `dark-mode` class on the `<html>` element.
fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                match theme {
                    Theme::Dark => {
                        let _ = class_list.add_1("dark-mode");
                    }
                    Theme::Light => {
                        let _ = class_list.remove_1("dark-mode");
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
