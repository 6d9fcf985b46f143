//! WASM entry point.
//!
//! Installs the panic hook and console logger, then boots the portfolio page
//! once the document has been parsed.

use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::pages::portfolio;
use crate::util::dom::{document, listen};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }

    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        listen(&doc, "DOMContentLoaded", |_| portfolio::boot(&SiteConfig::default()));
    } else {
        portfolio::boot(&SiteConfig::default());
    }
}
