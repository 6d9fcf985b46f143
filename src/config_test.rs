use super::*;

#[test]
fn default_ids_match_page_markup() {
    let ids = ElementIds::default();
    assert_eq!(ids.theme_toggle, "themeToggle");
    assert_eq!(ids.certs_body, "certsBody");
    assert_eq!(ids.certs_inline, "certs-data");
    assert_eq!(ids.search_status, "searchStatus");
}

#[test]
fn default_sections_keep_page_order() {
    let opts = ScrollSpyOptions::default();
    assert_eq!(opts.sections.first(), Some(&"projects"));
    assert_eq!(opts.sections.last(), Some(&"contact"));
    assert_eq!(opts.sections.len(), 7);
}

#[test]
fn root_margin_trims_header_and_bottom_band() {
    let opts = ScrollSpyOptions::default();
    assert_eq!(opts.root_margin(56), "-64px 0px -60% 0px");
    assert_eq!(opts.root_margin(72), "-80px 0px -60% 0px");
}

#[test]
fn parse_css_px_reads_integer_prefix() {
    assert_eq!(parse_css_px("56px"), Some(56));
    assert_eq!(parse_css_px("  64px"), Some(64));
    assert_eq!(parse_css_px("48.5px"), Some(48));
    assert_eq!(parse_css_px("auto"), None);
    assert_eq!(parse_css_px(""), None);
}

#[test]
fn topbar_height_falls_back_to_default() {
    assert_eq!(topbar_height_or_default(None), DEFAULT_TOPBAR_HEIGHT_PX);
    assert_eq!(topbar_height_or_default(Some("calc(1rem)")), DEFAULT_TOPBAR_HEIGHT_PX);
    assert_eq!(topbar_height_or_default(Some("0px")), DEFAULT_TOPBAR_HEIGHT_PX);
    assert_eq!(topbar_height_or_default(Some(" 72px")), 72);
}

#[test]
fn site_config_defaults_point_at_certs_feed() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.certs_url, "certs.json");
    assert_eq!(cfg.sort_header_selector, "th[data-sort]");
    assert_eq!(cfg.split_button_tag, "split-button");
}
