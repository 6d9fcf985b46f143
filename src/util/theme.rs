//! Theme and sidebar markers on the live document.
//!
//! The root element carries the `light` class when the light theme is
//! active; the theme toggle mirrors it through `aria-pressed`, its icon, and
//! its `aria-label`. The sidebar carries `open` and its toggle mirrors that
//! through `aria-expanded`. Requires a browser environment; other builds
//! no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
use crate::state::preferences::{SidebarState, ThemeIndicator};
use crate::state::preferences::Theme;

/// Class on `<html>` marking the light theme.
pub const LIGHT_CLASS: &str = "light";
/// Class on the sidebar marking it open.
pub const OPEN_CLASS: &str = "open";

/// Set or clear the light marker on the root element.
pub fn apply_root(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(LIGHT_CLASS, theme.is_light()) {
            log::debug!("theme marker not applied: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Sync the toggle's pressed state, icon, and label.
#[cfg(feature = "csr")]
pub fn apply_toggle(toggle: &web_sys::Element, indicator: ThemeIndicator) {
    toggle.set_text_content(Some(indicator.icon));
    let pressed = if indicator.pressed { "true" } else { "false" };
    for (name, value) in [("aria-pressed", pressed), ("aria-label", indicator.label)] {
        if let Err(err) = toggle.set_attribute(name, value) {
            log::debug!("{name} not set on theme toggle: {err:?}");
        }
    }
}

/// Sync the sidebar container and its toggle.
#[cfg(feature = "csr")]
pub fn apply_sidebar(sidebar: &web_sys::Element, toggle: &web_sys::Element, state: SidebarState) {
    if let Err(err) = sidebar.class_list().toggle_with_force(OPEN_CLASS, state.is_open()) {
        log::debug!("sidebar marker not applied: {err:?}");
    }
    let expanded = if state.is_open() { "true" } else { "false" };
    if let Err(err) = toggle.set_attribute("aria-expanded", expanded) {
        log::debug!("aria-expanded not set on sidebar toggle: {err:?}");
    }
}
