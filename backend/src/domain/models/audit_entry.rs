//! backend/src/domain/models/audit_entry.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable row of an event's change history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub event_id: String,
    /// Human-readable description of what happened, e.g.
    /// "Status changed to: Booked".
    pub action: String,
    /// Assigned by the log at write time. Per event, timestamps never
    /// decrease in insertion order.
    pub timestamp: DateTime<Utc>,
    pub actor_email: Option<String>,
}

impl AuditEntry {
    /// Generate a unique ID for a history entry.
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Outcome of an attempt to delete a history entry.
///
/// `Denied` is an expected refusal the caller reports to the user, not an
/// error, and it is final (no retry will change it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Denied,
}
