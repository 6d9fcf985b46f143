//! Page-level wiring.
//!
//! ARCHITECTURE
//! ============
//! A page binds state machines and components to the static markup it is
//! served with. Browser builds only.

#[cfg(feature = "csr")]
pub mod portfolio;
