//! # In-Memory Storage Module
//!
//! Reference implementation of the storage traits: everything lives in
//! process memory behind the same interfaces a database-backed
//! implementation would use. Persistence technology itself is an external
//! collaborator's concern; this module exists so the domain layer and the
//! test suites have a complete, well-behaved store to run against.
//!
//! Guarantees:
//!
//! - Event listing is ordered by start date ascending, undated events last
//! - History entries keep insertion order per event; the newest-first view
//!   is a derived reversal, not a timestamp sort
//! - History writes are serialized per event id, so one edit's batch of
//!   entries always lands contiguously

pub mod audit_repository;
pub mod connection;
pub mod event_repository;

pub use audit_repository::AuditLogRepository;
pub use connection::MemoryConnection;
pub use event_repository::EventRepository;
