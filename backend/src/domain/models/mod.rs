//! Domain models shared across services and storage.

pub mod audit_entry;
pub mod event;
