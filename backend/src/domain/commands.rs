// backend/src/domain/commands.rs

//! Domain-level command and query types.
//!
//! Services consume these structs; the DTO layer maps the public types in
//! the `shared` crate to and from them.

/// Identity of whoever is performing an operation, as supplied by the
/// caller's auth layer. The core never authenticates anyone itself.
#[derive(Debug, Clone, Default)]
pub struct Actor {
    /// Stamped onto history entries when present.
    pub email: Option<String>,
    /// Grants access to restricted maintenance operations, currently only
    /// history-entry deletion.
    pub privileged: bool,
}

pub mod events {
    use super::Actor;
    use crate::domain::costs::CostRecord;
    use crate::domain::models::event::{CostType, Event, EventDraft};
    use crate::domain::status::PresentationStatus;

    /// Input for creating a new event. Everything not listed starts at its
    /// default (stage planned, not booked, empty lists).
    #[derive(Debug, Clone)]
    pub struct CreateEventCommand {
        pub title: String,
        pub organizer: Option<String>,
        pub city: Option<String>,
        /// ISO `YYYY-MM-DD`.
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        pub cost_type: CostType,
        pub cost_value: f64,
    }

    /// Result of creating an event.
    #[derive(Debug, Clone)]
    pub struct CreateEventResult {
        pub event: Event,
    }

    /// Input for saving an edited event.
    #[derive(Debug, Clone)]
    pub struct UpdateEventCommand {
        pub event_id: String,
        pub draft: EventDraft,
        /// Explicit "mark as attended" intent, reported separately in the
        /// history.
        pub mark_attended: bool,
        pub actor: Actor,
    }

    /// Result of saving an event.
    #[derive(Debug, Clone)]
    pub struct UpdateEventResult {
        pub event: Event,
        /// History entries the save produced, in write order. Empty when
        /// nothing changed.
        pub recorded_actions: Vec<String>,
    }

    /// Input for the "user picks a display status directly" path.
    #[derive(Debug, Clone)]
    pub struct SetPresentationStatusCommand {
        pub event_id: String,
        pub status: PresentationStatus,
        pub actor: Actor,
    }

    /// Input for marking an event as attended.
    #[derive(Debug, Clone)]
    pub struct MarkAttendedCommand {
        pub event_id: String,
        pub actor: Actor,
    }

    /// Input for fetching a single event.
    #[derive(Debug, Clone)]
    pub struct GetEventCommand {
        pub event_id: String,
    }

    /// Result of fetching a single event.
    #[derive(Debug, Clone)]
    pub struct GetEventResult {
        pub event: Option<Event>,
    }

    /// Result of listing events, soonest first.
    #[derive(Debug, Clone)]
    pub struct ListEventsResult {
        pub events: Vec<Event>,
    }

    /// Input for deleting an event.
    #[derive(Debug, Clone)]
    pub struct DeleteEventCommand {
        pub event_id: String,
    }

    /// Result of deleting an event.
    #[derive(Debug, Clone)]
    pub struct DeleteEventResult {
        pub success_message: String,
    }

    /// Result of enriching every event with its computed costs.
    #[derive(Debug, Clone)]
    pub struct EventCostsResult {
        pub records: Vec<CostRecord>,
    }
}

pub mod audit {
    use super::Actor;
    use crate::domain::models::audit_entry::{AuditEntry, DeleteOutcome};

    /// Input for listing an event's history.
    #[derive(Debug, Clone)]
    pub struct ListAuditEntriesCommand {
        pub event_id: String,
    }

    /// Result of listing an event's history, newest first.
    #[derive(Debug, Clone)]
    pub struct ListAuditEntriesResult {
        pub entries: Vec<AuditEntry>,
    }

    /// Input for deleting a single history entry.
    #[derive(Debug, Clone)]
    pub struct DeleteAuditEntryCommand {
        pub event_id: String,
        pub entry_id: String,
        pub actor: Actor,
    }

    /// Result of a deletion attempt. A refusal comes back as
    /// `DeleteOutcome::Denied` with an explanatory message, not as an error.
    #[derive(Debug, Clone)]
    pub struct DeleteAuditEntryResult {
        pub outcome: DeleteOutcome,
        pub message: String,
    }
}
