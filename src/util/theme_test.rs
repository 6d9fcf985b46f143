#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn apply_root_is_noop_but_callable() {
    apply_root(Theme::Light);
    apply_root(Theme::Dark);
}

#[test]
fn marker_classes_match_stylesheet() {
    assert_eq!(LIGHT_CLASS, "light");
    assert_eq!(OPEN_CLASS, "open");
}
