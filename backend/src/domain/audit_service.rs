//! Change-history service: append, list, and the restricted delete.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::audit::{
    DeleteAuditEntryCommand, DeleteAuditEntryResult, ListAuditEntriesCommand,
    ListAuditEntriesResult,
};
use crate::domain::commands::Actor;
use crate::domain::models::audit_entry::{AuditEntry, DeleteOutcome};
use crate::storage::memory::{AuditLogRepository, MemoryConnection};
use crate::storage::traits::{AuditLogStorage, Connection};

/// How many of an event's newest history entries a privileged actor may
/// still delete. The window is over the newest-first index, never over
/// timestamps.
const DELETABLE_WINDOW: usize = 2;

/// Service for an event's change history.
#[derive(Clone)]
pub struct AuditService {
    audit_repository: AuditLogRepository,
}

impl AuditService {
    /// Create a new AuditService
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self {
            audit_repository: connection.create_audit_log_repository(),
        }
    }

    /// Record a single history entry.
    pub fn append(&self, event_id: &str, action: &str, actor: &Actor) -> Result<AuditEntry> {
        let mut written = self.append_all(event_id, &[action.to_string()], actor)?;
        written
            .pop()
            .ok_or_else(|| anyhow::anyhow!("History append wrote nothing for event {}", event_id))
    }

    /// Record one edit's entries as a single batch, in the given order.
    /// Batching keeps concurrent edits of the same event from interleaving
    /// their entries.
    pub fn append_all(
        &self,
        event_id: &str,
        actions: &[String],
        actor: &Actor,
    ) -> Result<Vec<AuditEntry>> {
        if actions.is_empty() {
            return Ok(Vec::new());
        }
        info!(
            "Recording {} history entries for event {}",
            actions.len(),
            event_id
        );
        self.audit_repository
            .append_entries(event_id, actions, actor.email.as_deref())
    }

    /// An event's history, newest first.
    pub fn list(&self, command: ListAuditEntriesCommand) -> Result<ListAuditEntriesResult> {
        let entries = self.audit_repository.list_entries(&command.event_id)?;
        Ok(ListAuditEntriesResult { entries })
    }

    /// Delete a single history entry.
    ///
    /// Allowed only for privileged actors, and only while the entry is
    /// among the 2 newest for its event. Anything else is refused with
    /// `DeleteOutcome::Denied` in the result; refusal is an expected
    /// outcome, not an error, and it is final.
    pub fn delete_entry(&self, command: DeleteAuditEntryCommand) -> Result<DeleteAuditEntryResult> {
        if !command.actor.privileged {
            warn!(
                "Refusing history deletion for event {}: actor is not privileged",
                command.event_id
            );
            return Ok(DeleteAuditEntryResult {
                outcome: DeleteOutcome::Denied,
                message: "Only privileged users may delete history entries".to_string(),
            });
        }

        let deleted = self.audit_repository.delete_recent_entry(
            &command.event_id,
            &command.entry_id,
            DELETABLE_WINDOW,
        )?;

        if deleted {
            info!(
                "Deleted history entry {} for event {}",
                command.entry_id, command.event_id
            );
            Ok(DeleteAuditEntryResult {
                outcome: DeleteOutcome::Deleted,
                message: "History entry deleted".to_string(),
            })
        } else {
            warn!(
                "Refusing history deletion for event {}: entry {} is not among the {} newest",
                command.event_id, command.entry_id, DELETABLE_WINDOW
            );
            Ok(DeleteAuditEntryResult {
                outcome: DeleteOutcome::Denied,
                message: format!(
                    "Only the {} newest history entries can be deleted",
                    DELETABLE_WINDOW
                ),
            })
        }
    }

    /// Remove an event's entire history. Used as the cascade when the event
    /// itself is deleted, so no orphaned entries survive.
    pub fn delete_for_event(&self, event_id: &str) -> Result<usize> {
        let removed = self.audit_repository.delete_entries_for_event(event_id)?;
        if removed > 0 {
            info!(
                "Removed {} history entries for deleted event {}",
                removed, event_id
            );
        }
        Ok(removed)
    }
}
