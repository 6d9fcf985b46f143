use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Theme
// =============================================================

#[test]
fn first_load_defaults_to_light_and_persists_it() {
    let store = MemoryStore::new();
    let prefs = PreferenceStore::load(&store);
    assert_eq!(prefs.theme(), Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn stored_dark_is_honored_without_rewrite() {
    let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
    let prefs = PreferenceStore::load(&store);
    assert_eq!(prefs.theme(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn unrecognized_theme_reads_as_dark_and_is_not_normalized() {
    let store = MemoryStore::with_entries([(THEME_KEY, "solarized")]);
    let prefs = PreferenceStore::load(&store);
    assert_eq!(prefs.theme(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("solarized"));
}

#[test]
fn set_theme_survives_a_fresh_load() {
    let store = MemoryStore::new();
    {
        let mut prefs = PreferenceStore::load(&store);
        prefs.set_theme(Theme::Dark);
    }
    let reloaded = PreferenceStore::load(&store);
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn toggle_theme_flips_and_persists_each_time() {
    let store = MemoryStore::new();
    let mut prefs = PreferenceStore::load(&store);
    assert_eq!(prefs.toggle_theme(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(prefs.toggle_theme(), Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn indicator_tracks_theme() {
    let light = ThemeIndicator::for_theme(Theme::Light);
    assert!(light.pressed);
    assert_eq!(light.icon, "☀️");
    assert_eq!(light.label, "Switch to dark theme");

    let dark = ThemeIndicator::for_theme(Theme::Dark);
    assert!(!dark.pressed);
    assert_eq!(dark.icon, "🌙");
    assert_eq!(dark.label, "Switch to light theme");
}

#[test]
fn indicator_follows_toggle() {
    let store = MemoryStore::new();
    let mut prefs = PreferenceStore::load(&store);
    assert!(prefs.indicator().pressed);
    prefs.toggle_theme();
    assert!(!prefs.indicator().pressed);
}

// =============================================================
// Sidebar
// =============================================================

#[test]
fn sidebar_defaults_closed_without_writing() {
    let store = MemoryStore::new();
    let prefs = PreferenceStore::load(&store);
    assert_eq!(prefs.sidebar(), SidebarState::Closed);
    assert_eq!(store.get(SIDEBAR_KEY), None);
}

#[test]
fn sidebar_only_literal_open_is_open() {
    assert_eq!(SidebarState::from_stored(Some("open")), SidebarState::Open);
    assert_eq!(SidebarState::from_stored(Some("OPEN")), SidebarState::Closed);
    assert_eq!(SidebarState::from_stored(Some("true")), SidebarState::Closed);
    assert_eq!(SidebarState::from_stored(None), SidebarState::Closed);
}

#[test]
fn toggle_sidebar_persists_literal_values() {
    let store = MemoryStore::new();
    let mut prefs = PreferenceStore::load(&store);
    assert_eq!(prefs.toggle_sidebar(), SidebarState::Open);
    assert_eq!(store.get(SIDEBAR_KEY).as_deref(), Some("open"));
    assert_eq!(prefs.toggle_sidebar(), SidebarState::Closed);
    assert_eq!(store.get(SIDEBAR_KEY).as_deref(), Some("closed"));
}

#[test]
fn theme_and_sidebar_writes_are_independent() {
    let store = MemoryStore::with_entries([(SIDEBAR_KEY, "open")]);
    let mut prefs = PreferenceStore::load(&store);
    prefs.toggle_theme();
    assert_eq!(store.get(SIDEBAR_KEY).as_deref(), Some("open"));
    prefs.toggle_sidebar();
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}
