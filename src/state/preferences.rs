//! Persisted theme and sidebar preferences.
//!
//! DESIGN
//! ======
//! The two values are independent: each toggle overwrites its own key with
//! the freshly toggled value, never a value re-read from storage. The store
//! is generic over its backend so the page passes `localStorage` and tests
//! pass an in-memory map.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use crate::config::{SIDEBAR_KEY, THEME_KEY};
use crate::util::storage::KeyValueStore;

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// Sidebar disclosure state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

impl SidebarState {
    /// Only the literal `"open"` opens the sidebar; anything else is closed.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("open") => Self::Open,
            _ => Self::Closed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Visual signals derived from the theme: `aria-pressed`, icon, and label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeIndicator {
    pub pressed: bool,
    pub icon: &'static str,
    pub label: &'static str,
}

impl ThemeIndicator {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                pressed: true,
                icon: "☀️",
                label: "Switch to dark theme",
            },
            Theme::Dark => Self {
                pressed: false,
                icon: "🌙",
                label: "Switch to light theme",
            },
        }
    }
}

/// Preference service over an injected key-value backend.
pub struct PreferenceStore<S> {
    store: S,
    theme: Theme,
    sidebar: SidebarState,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Read both preferences once.
    ///
    /// A missing theme resolves to light and is written back immediately so
    /// later loads see an explicit value. A stored `"light"` or `"dark"` is
    /// kept as-is; any other stored string reads as dark and is left alone
    /// until the next toggle.
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY).as_deref() {
            None => {
                store.set(THEME_KEY, Theme::Light.as_str());
                Theme::Light
            }
            Some("light") => Theme::Light,
            Some(_) => Theme::Dark,
        };
        let sidebar = SidebarState::from_stored(store.get(SIDEBAR_KEY).as_deref());
        Self { store, theme, sidebar }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    pub fn set_sidebar(&mut self, sidebar: SidebarState) {
        self.sidebar = sidebar;
        self.store.set(SIDEBAR_KEY, sidebar.as_str());
    }

    /// Flip the sidebar, persist it, and return the new value.
    pub fn toggle_sidebar(&mut self) -> SidebarState {
        self.set_sidebar(self.sidebar.toggled());
        self.sidebar
    }

    pub fn indicator(&self) -> ThemeIndicator {
        ThemeIndicator::for_theme(self.theme)
    }

    /// Backend handle, mainly for inspection in tests.
    pub fn backend(&self) -> &S {
        &self.store
    }
}
