//! # Storage Traits
//!
//! Abstraction over the persistence collaborator. The domain layer works
//! against these traits so the in-memory reference implementation and any
//! future database-backed one are interchangeable.

use anyhow::Result;

use crate::domain::models::audit_entry::AuditEntry;
use crate::domain::models::event::Event;

/// Interface for event storage operations.
pub trait EventStorage: Send + Sync {
    /// Store a new event
    fn store_event(&self, event: &Event) -> Result<()>;

    /// Retrieve a specific event by ID
    fn get_event(&self, event_id: &str) -> Result<Option<Event>>;

    /// List all events ordered by start date ascending; events without a
    /// start date sort last
    fn list_events(&self) -> Result<Vec<Event>>;

    /// Replace an existing event's fields
    fn update_event(&self, event: &Event) -> Result<()>;

    /// Delete an event by ID. Returns true if the event existed
    fn delete_event(&self, event_id: &str) -> Result<bool>;
}

/// Interface for the append-mostly change history.
///
/// Implementations must serialize writes per event id: one edit's batch of
/// entries lands contiguously, and per event the assigned timestamps never
/// decrease in insertion order. Different events are independent.
pub trait AuditLogStorage: Send + Sync {
    /// Append one edit's entries as a single batch, in the given order.
    /// Returns the written entries with their assigned ids and timestamps
    fn append_entries(
        &self,
        event_id: &str,
        actions: &[String],
        actor_email: Option<&str>,
    ) -> Result<Vec<AuditEntry>>;

    /// List all entries for an event, newest first
    fn list_entries(&self, event_id: &str) -> Result<Vec<AuditEntry>>;

    /// Delete one entry, but only if it is among the `newest_window` newest
    /// entries for its event. The window check and the removal happen under
    /// the same per-event lock. Returns true if the entry was deleted
    fn delete_recent_entry(
        &self,
        event_id: &str,
        entry_id: &str,
        newest_window: usize,
    ) -> Result<bool>;

    /// Delete an event's entire history (cascade for event deletion).
    /// Returns the number of entries removed
    fn delete_entries_for_event(&self, event_id: &str) -> Result<usize>;
}

/// Trait defining the interface for storage connections.
///
/// Abstracts away the backing technology and provides factory methods for
/// creating repositories, so the domain layer never names a concrete store.
pub trait Connection: Send + Sync + Clone {
    /// The type of EventStorage this connection creates
    type EventRepository: EventStorage;

    /// The type of AuditLogStorage this connection creates
    type AuditLogRepository: AuditLogStorage;

    /// Create a new event repository for this connection
    fn create_event_repository(&self) -> Self::EventRepository;

    /// Create a new audit log repository for this connection
    fn create_audit_log_repository(&self) -> Self::AuditLogRepository;
}
