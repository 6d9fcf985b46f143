//! # portfolio-ui
//!
//! Leptos + WASM interaction layer for a static portfolio page.
//!
//! The page is plain HTML; this crate attaches behavior to it: persisted
//! theme and sidebar preferences, the live content filter, the sortable
//! certifications table, the navigation scroll-spy, and the split-button
//! disclosure widgets. State machines live in `state` and run without a
//! browser; `pages` and `components` bind them to the DOM under the `csr`
//! feature.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
