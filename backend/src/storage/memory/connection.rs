//! In-memory storage connection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::models::audit_entry::AuditEntry;
use crate::domain::models::event::Event;
use crate::storage::memory::audit_repository::AuditLogRepository;
use crate::storage::memory::event_repository::EventRepository;
use crate::storage::traits::Connection;

/// Shared event table: id -> event.
pub(crate) type EventTable = Arc<Mutex<HashMap<String, Event>>>;

/// Shared history logs: event id -> insertion-ordered entries behind a
/// per-event lock.
pub(crate) type AuditLogTable = Arc<Mutex<HashMap<String, Arc<Mutex<Vec<AuditEntry>>>>>>;

/// Connection to the in-memory store.
///
/// Cheap to clone; all clones and every repository created from them share
/// the same underlying tables. This is the reference implementation of the
/// persistence collaborator and what the test suites run against.
#[derive(Clone)]
pub struct MemoryConnection {
    events: EventTable,
    audit_logs: AuditLogTable,
}

impl MemoryConnection {
    /// Create a connection to a fresh, empty store.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(HashMap::new())),
            audit_logs: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for MemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection for MemoryConnection {
    type EventRepository = EventRepository;
    type AuditLogRepository = AuditLogRepository;

    fn create_event_repository(&self) -> EventRepository {
        EventRepository::new(self.events.clone())
    }

    fn create_audit_log_repository(&self) -> AuditLogRepository {
        AuditLogRepository::new(self.audit_logs.clone())
    }
}
