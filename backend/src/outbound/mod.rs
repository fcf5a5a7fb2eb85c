//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and their storage
//! representation; they contain no business logic.

pub mod persistence;
