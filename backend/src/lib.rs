//! # Event Tracker Backend
//!
//! Synchronous core for tracking organizational events (conferences, trade
//! shows) from first consideration to completion. This crate provides direct
//! access to the domain services and storage; it deliberately:
//! - Uses synchronous operations (no async/await)
//! - Writes the change history server-side from each save
//! - Excludes any transport or UI layer entirely
//! - Ships an in-memory store as the reference persistence implementation

use std::sync::Arc;

pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use storage::memory::MemoryConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub event_service: domain::EventService,
    pub audit_service: domain::AuditService,
}

impl Backend {
    /// Create a new backend instance over a fresh in-memory store
    pub fn new() -> Self {
        Self::with_connection(Arc::new(MemoryConnection::new()))
    }

    /// Create a backend over an existing connection. All backends built on
    /// the same connection share one store.
    pub fn with_connection(connection: Arc<MemoryConnection>) -> Self {
        let audit_service = domain::AuditService::new(connection.clone());
        let event_service = domain::EventService::new(connection, audit_service.clone());

        Backend {
            event_service,
            audit_service,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
