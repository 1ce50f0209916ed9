//! In-memory event repository.

use std::cmp::Ordering;

use anyhow::{anyhow, Result};

use crate::domain::models::event::Event;
use crate::storage::memory::connection::EventTable;
use crate::storage::traits::EventStorage;

#[derive(Clone)]
pub struct EventRepository {
    events: EventTable,
}

impl EventRepository {
    pub(crate) fn new(events: EventTable) -> Self {
        Self { events }
    }
}

impl EventStorage for EventRepository {
    fn store_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().unwrap();
        if events.contains_key(&event.id) {
            return Err(anyhow!("Event already exists: {}", event.id));
        }
        events.insert(event.id.clone(), event.clone());
        Ok(())
    }

    fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        let events = self.events.lock().unwrap();
        Ok(events.get(event_id).cloned())
    }

    fn list_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().unwrap();
        let mut list: Vec<Event> = events.values().cloned().collect();
        // Soonest first; undated events go last. Title breaks date ties so
        // the order is deterministic.
        list.sort_by(|a, b| match (a.start_date, b.start_date) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.title.cmp(&b.title)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.title.cmp(&b.title),
        });
        Ok(list)
    }

    fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().unwrap();
        if !events.contains_key(&event.id) {
            return Err(anyhow!("Event not found: {}", event.id));
        }
        events.insert(event.id.clone(), event.clone());
        Ok(())
    }

    fn delete_event(&self, event_id: &str) -> Result<bool> {
        let mut events = self.events.lock().unwrap();
        Ok(events.remove(event_id).is_some())
    }
}
