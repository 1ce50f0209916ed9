//! In-memory audit log repository.
//!
//! Entries for one event live in an insertion-ordered vector; the
//! newest-first view is derived by reversing it, never by re-sorting on
//! timestamps. Writes for one event are serialized by a per-event lock so
//! two concurrent edits cannot interleave their batches; different events
//! do not contend.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use log::debug;

use crate::domain::models::audit_entry::AuditEntry;
use crate::storage::memory::connection::AuditLogTable;
use crate::storage::traits::AuditLogStorage;

#[derive(Clone)]
pub struct AuditLogRepository {
    logs: AuditLogTable,
}

impl AuditLogRepository {
    pub(crate) fn new(logs: AuditLogTable) -> Self {
        Self { logs }
    }

    /// Handle to one event's log, created on first touch. The outer map
    /// lock is held only long enough to fetch the handle.
    fn event_log(&self, event_id: &str) -> Arc<Mutex<Vec<AuditEntry>>> {
        let mut logs = self.logs.lock().unwrap();
        logs.entry(event_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Vec::new())))
            .clone()
    }

    /// Handle to one event's log if it exists, without creating it.
    fn existing_event_log(&self, event_id: &str) -> Option<Arc<Mutex<Vec<AuditEntry>>>> {
        let logs = self.logs.lock().unwrap();
        logs.get(event_id).cloned()
    }
}

impl AuditLogStorage for AuditLogRepository {
    fn append_entries(
        &self,
        event_id: &str,
        actions: &[String],
        actor_email: Option<&str>,
    ) -> Result<Vec<AuditEntry>> {
        if actions.is_empty() {
            return Ok(Vec::new());
        }

        let log = self.event_log(event_id);
        let mut entries = log.lock().unwrap();

        let mut written = Vec::with_capacity(actions.len());
        for action in actions {
            // Timestamps never decrease in insertion order, even if the
            // clock steps backwards between writes.
            let mut timestamp = Utc::now();
            if let Some(last) = entries.last() {
                if timestamp < last.timestamp {
                    timestamp = last.timestamp;
                }
            }
            let entry = AuditEntry {
                id: AuditEntry::generate_id(),
                event_id: event_id.to_string(),
                action: action.clone(),
                timestamp,
                actor_email: actor_email.map(|email| email.to_string()),
            };
            entries.push(entry.clone());
            written.push(entry);
        }

        debug!(
            "Appended {} history entries for event {}",
            written.len(),
            event_id
        );
        Ok(written)
    }

    fn list_entries(&self, event_id: &str) -> Result<Vec<AuditEntry>> {
        match self.existing_event_log(event_id) {
            Some(log) => {
                let entries = log.lock().unwrap();
                Ok(entries.iter().rev().cloned().collect())
            }
            None => Ok(Vec::new()),
        }
    }

    fn delete_recent_entry(
        &self,
        event_id: &str,
        entry_id: &str,
        newest_window: usize,
    ) -> Result<bool> {
        let Some(log) = self.existing_event_log(event_id) else {
            return Ok(false);
        };
        let mut entries = log.lock().unwrap();

        let Some(position) = entries.iter().position(|entry| entry.id == entry_id) else {
            return Ok(false);
        };

        // Index in the newest-first view: the vector's last element is 0.
        let newest_index = entries.len() - 1 - position;
        if newest_index >= newest_window {
            return Ok(false);
        }

        entries.remove(position);
        debug!("Deleted history entry {} for event {}", entry_id, event_id);
        Ok(true)
    }

    fn delete_entries_for_event(&self, event_id: &str) -> Result<usize> {
        let mut logs = self.logs.lock().unwrap();
        let removed = match logs.remove(event_id) {
            Some(log) => log.lock().unwrap().len(),
            None => 0,
        };
        Ok(removed)
    }
}
