//! Page interaction state, one module per component.
//!
//! DESIGN
//! ======
//! Each component is a plain state machine with its DOM collaborators
//! behind a trait, so none of them needs a browser to be exercised. The
//! components never call each other.

pub mod disclosure;
pub mod filter;
pub mod preferences;
pub mod scroll_spy;
pub mod table;
