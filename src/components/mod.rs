//! Leptos components mounted into static page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is server-rendered HTML; components take over only the regions
//! that re-render (the certifications body and each split button's shadow
//! root). Both read their state from signals the page wiring owns.

pub mod certs_table;
pub mod split_button;
