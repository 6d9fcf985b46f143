//! Compiled-in page contract: element ids, resource locations, storage keys,
//! and scroll-spy geometry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static HTML, so nothing is read from the environment. Every
//! component receives the handles it needs from `pages::portfolio`, which
//! resolves them through this table.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";
/// localStorage key holding `"open"` or `"closed"`.
pub const SIDEBAR_KEY: &str = "sidebar";

/// Fallback header height when `--topbar-height` is missing or unparseable.
pub const DEFAULT_TOPBAR_HEIGHT_PX: u32 = 56;

/// Element ids the page markup is expected to carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub year: &'static str,
    pub theme_toggle: &'static str,
    pub search_input: &'static str,
    pub search_submit: &'static str,
    pub search_status: &'static str,
    pub sidebar: &'static str,
    pub sidebar_toggle: &'static str,
    pub certs_body: &'static str,
    pub certs_inline: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            year: "year",
            theme_toggle: "themeToggle",
            search_input: "siteSearch",
            search_submit: "siteSearchSubmit",
            search_status: "searchStatus",
            sidebar: "sidebar",
            sidebar_toggle: "sidebarToggle",
            certs_body: "certsBody",
            certs_inline: "certs-data",
        }
    }
}

/// Geometry of the viewport band a section must intersect to become active.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpyOptions {
    /// Section ids in page order.
    pub sections: Vec<&'static str>,
    /// Extra pixels trimmed below the fixed header.
    pub header_gap_px: u32,
    /// Share of the viewport bottom excluded from the band, in percent.
    pub bottom_exclusion_pct: u32,
    /// Minimum intersection ratio reported by the observer.
    pub threshold: f64,
}

impl Default for ScrollSpyOptions {
    fn default() -> Self {
        Self {
            sections: vec![
                "projects",
                "design",
                "resume",
                "certifications",
                "salesforce",
                "about",
                "contact",
            ],
            header_gap_px: 8,
            bottom_exclusion_pct: 60,
            threshold: 0.2,
        }
    }
}

impl ScrollSpyOptions {
    /// Observer `rootMargin` for a header of `topbar_height_px`.
    pub fn root_margin(&self, topbar_height_px: u32) -> String {
        let top = topbar_height_px + self.header_gap_px;
        format!("-{top}px 0px -{}% 0px", self.bottom_exclusion_pct)
    }
}

/// Everything the page wiring needs to locate its collaborators.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub ids: ElementIds,
    /// Relative URL of the certifications feed.
    pub certs_url: &'static str,
    /// Selector for the filterable content blocks.
    pub card_selector: &'static str,
    /// Selector for sortable column headers.
    pub sort_header_selector: &'static str,
    /// Selector for in-page navigation links watched by the scroll-spy.
    pub nav_link_selector: &'static str,
    pub home_link_selector: &'static str,
    /// Tag name of disclosure widget hosts.
    pub split_button_tag: &'static str,
    pub scroll_spy: ScrollSpyOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            certs_url: "certs.json",
            card_selector: ".card",
            sort_header_selector: "th[data-sort]",
            nav_link_selector: "#sidebar a[href^=\"#\"]",
            home_link_selector: ".home-link",
            split_button_tag: "split-button",
            scroll_spy: ScrollSpyOptions::default(),
        }
    }
}

/// Parse a CSS length the way `parseInt` would: leading integer digits after
/// optional whitespace, anything after them ignored.
pub fn parse_css_px(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Header height from the raw `--topbar-height` value. Missing, unparseable,
/// and zero values give the default.
pub fn topbar_height_or_default(raw: Option<&str>) -> u32 {
    raw.and_then(parse_css_px)
        .filter(|px| *px > 0)
        .unwrap_or(DEFAULT_TOPBAR_HEIGHT_PX)
}
