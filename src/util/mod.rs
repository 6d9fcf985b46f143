//! Utility helpers shared across the page wiring and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, DOM glue, theme
//! markers) and value parsing from the state machines, so the latter stay
//! testable without a page.

pub mod dates;
pub mod dom;
pub mod storage;
pub mod theme;
