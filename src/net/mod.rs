//! Networking for the certifications feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the feed schema and `certs` resolves which source (network
//! or inline copy) supplies the table.

pub mod certs;
pub mod types;
