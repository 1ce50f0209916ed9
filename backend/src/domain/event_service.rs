//! Event lifecycle service.
//!
//! Owns the create/save/delete flows and their side effects: drafts are
//! normalized and validated before anything is written, every save is
//! diffed against the stored record to produce history entries, and
//! deleting an event removes its history with it.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use std::sync::Arc;

use crate::domain::audit_service::AuditService;
use crate::domain::change_detector;
use crate::domain::commands::events::{
    CreateEventCommand, CreateEventResult, DeleteEventCommand, DeleteEventResult, EventCostsResult,
    GetEventCommand, GetEventResult, ListEventsResult, MarkAttendedCommand,
    SetPresentationStatusCommand, UpdateEventCommand, UpdateEventResult,
};
use crate::domain::costs::CostRecord;
use crate::domain::models::event::{
    Event, EventContact, EventDraft, EventRatings, EventStage,
};
use crate::storage::memory::{EventRepository, MemoryConnection};
use crate::storage::traits::{Connection, EventStorage};

/// Service for event lifecycle operations.
#[derive(Clone)]
pub struct EventService {
    event_repository: EventRepository,
    audit_service: AuditService,
}

impl EventService {
    /// Create a new EventService
    pub fn new(connection: Arc<MemoryConnection>, audit_service: AuditService) -> Self {
        Self {
            event_repository: connection.create_event_repository(),
            audit_service,
        }
    }

    /// Create a new event from the quick-create fields. Everything else
    /// starts at its default; creation itself writes no history.
    pub fn create_event(&self, command: CreateEventCommand) -> Result<CreateEventResult> {
        let start_date = parse_optional_date(command.start_date.as_deref(), "start date")?;
        let end_date = parse_optional_date(command.end_date.as_deref(), "end date")?;

        let draft = EventDraft {
            title: command.title,
            organizer: command.organizer,
            city: command.city,
            location: None,
            start_date,
            end_date,
            stage: EventStage::Planned,
            booked: false,
            colleagues: Vec::new(),
            tags: Vec::new(),
            cost_type: command.cost_type,
            cost_value: command.cost_value,
            event_url: None,
            notes: None,
            visitor_notes: None,
            attachments: Vec::new(),
            linkedin_plan: false,
            linkedin_note: None,
            publication_status: false,
            ratings: EventRatings::default(),
            contact: EventContact::default(),
        }
        .normalized();
        draft.validate()?;

        let event = Event::from_draft(Event::generate_id(), draft, Utc::now());
        self.event_repository.store_event(&event)?;
        info!("Created event {} '{}'", event.id, event.title);

        Ok(CreateEventResult { event })
    }

    /// Save an edited event.
    ///
    /// The draft is normalized and validated first. A draft identical to the
    /// stored record is dropped without touching storage. Otherwise the
    /// history entries for the save are recorded, then the event is written.
    pub fn update_event(&self, command: UpdateEventCommand) -> Result<UpdateEventResult> {
        let mut event = self.load_event(&command.event_id)?;

        let mut draft = command.draft.normalized();
        if command.mark_attended {
            draft.stage = EventStage::Attended;
            draft.booked = true;
        }
        draft.validate()?;

        if draft == EventDraft::from_event(&event) {
            debug!("Save for event {} changed nothing, skipping write", event.id);
            return Ok(UpdateEventResult {
                event,
                recorded_actions: Vec::new(),
            });
        }

        let actions = change_detector::audit_actions(&event, &draft, command.mark_attended);
        self.audit_service
            .append_all(&event.id, &actions, &command.actor)?;

        event.apply_draft(draft, Utc::now());
        self.event_repository.update_event(&event)?;
        info!("Updated event {} '{}'", event.id, event.title);

        Ok(UpdateEventResult {
            event,
            recorded_actions: actions,
        })
    }

    /// Set an event's display status directly.
    ///
    /// Stores the canonical raw representation of the chosen status, so
    /// picking the status an event already shows can still rewrite its raw
    /// fields without producing history.
    pub fn set_presentation_status(
        &self,
        command: SetPresentationStatusCommand,
    ) -> Result<UpdateEventResult> {
        let event = self.load_event(&command.event_id)?;
        let mut draft = EventDraft::from_event(&event);
        let (stage, booked) = command.status.to_parts();
        draft.stage = stage;
        draft.booked = booked;

        self.update_event(UpdateEventCommand {
            event_id: command.event_id,
            draft,
            mark_attended: false,
            actor: command.actor,
        })
    }

    /// Mark an event as attended, keeping every other field as stored.
    pub fn mark_attended(&self, command: MarkAttendedCommand) -> Result<UpdateEventResult> {
        let event = self.load_event(&command.event_id)?;

        self.update_event(UpdateEventCommand {
            event_id: command.event_id,
            draft: EventDraft::from_event(&event),
            mark_attended: true,
            actor: command.actor,
        })
    }

    /// Fetch a single event.
    pub fn get_event(&self, command: GetEventCommand) -> Result<GetEventResult> {
        let event = self.event_repository.get_event(&command.event_id)?;
        Ok(GetEventResult { event })
    }

    /// All events, soonest first with dateless events at the end.
    pub fn list_events(&self) -> Result<ListEventsResult> {
        let events = self.event_repository.list_events()?;
        Ok(ListEventsResult { events })
    }

    /// Delete an event and, with it, its entire history.
    pub fn delete_event(&self, command: DeleteEventCommand) -> Result<DeleteEventResult> {
        let event = self.load_event(&command.event_id)?;

        if !self.event_repository.delete_event(&event.id)? {
            return Err(anyhow::anyhow!("Event not found: {}", command.event_id));
        }
        let removed = self.audit_service.delete_for_event(&event.id)?;
        info!(
            "Deleted event {} '{}' along with {} history entries",
            event.id, event.title, removed
        );

        Ok(DeleteEventResult {
            success_message: format!("Event '{}' and its history deleted", event.title),
        })
    }

    /// Every event enriched with its computed costs, in listing order.
    pub fn event_costs(&self) -> Result<EventCostsResult> {
        let events = self.event_repository.list_events()?;
        let records = events.into_iter().map(CostRecord::from_event).collect();
        Ok(EventCostsResult { records })
    }

    fn load_event(&self, event_id: &str) -> Result<Event> {
        self.event_repository
            .get_event(event_id)?
            .ok_or_else(|| anyhow::anyhow!("Event not found: {}", event_id))
    }
}

/// Parse an optional `YYYY-MM-DD` string, treating blank input as absent.
pub(crate) fn parse_optional_date(raw: Option<&str>, field: &str) -> Result<Option<NaiveDate>> {
    match raw {
        Some(text) if !text.trim().is_empty() => {
            let trimmed = text.trim();
            let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .with_context(|| format!("Invalid {} '{}', expected YYYY-MM-DD", field, trimmed))?;
            Ok(Some(parsed))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::audit::ListAuditEntriesCommand;
    use crate::domain::commands::Actor;
    use crate::domain::models::event::CostType;
    use crate::domain::status::PresentationStatus;

    fn setup_test() -> EventService {
        let connection = Arc::new(MemoryConnection::new());
        let audit_service = AuditService::new(connection.clone());
        EventService::new(connection, audit_service)
    }

    fn create_cmd(title: &str) -> CreateEventCommand {
        CreateEventCommand {
            title: title.to_string(),
            organizer: Some("Acme Corp".to_string()),
            city: Some("Berlin".to_string()),
            start_date: Some("2026-04-10".to_string()),
            end_date: Some("2026-04-12".to_string()),
            cost_type: CostType::PerParticipant,
            cost_value: 100.0,
        }
    }

    fn stored_draft(service: &EventService, event_id: &str) -> EventDraft {
        let event = service
            .get_event(GetEventCommand {
                event_id: event_id.to_string(),
            })
            .unwrap()
            .event
            .unwrap();
        EventDraft::from_event(&event)
    }

    fn history(service: &EventService, event_id: &str) -> Vec<String> {
        service
            .audit_service
            .list(ListAuditEntriesCommand {
                event_id: event_id.to_string(),
            })
            .unwrap()
            .entries
            .into_iter()
            .map(|entry| entry.action)
            .collect()
    }

    fn update_cmd(event_id: &str, draft: EventDraft) -> UpdateEventCommand {
        UpdateEventCommand {
            event_id: event_id.to_string(),
            draft,
            mark_attended: false,
            actor: Actor::default(),
        }
    }

    #[test]
    fn test_create_event_uses_defaults_and_writes_no_history() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        assert_eq!(event.stage, EventStage::Planned);
        assert!(!event.booked);
        assert_eq!(event.presentation_status(), PresentationStatus::Planned);
        assert!(event.colleagues.is_empty());
        assert!(event.tags.is_empty());
        assert_eq!(event.created_at, event.updated_at);
        assert!(history(&service, &event.id).is_empty());
    }

    #[test]
    fn test_create_event_rejects_invalid_input() {
        let service = setup_test();

        let mut no_title = create_cmd("  ");
        no_title.start_date = None;
        no_title.end_date = None;
        assert!(service.create_event(no_title).is_err());

        let mut bad_date = create_cmd("Industry Summit");
        bad_date.start_date = Some("April 10th".to_string());
        let err = service.create_event(bad_date).unwrap_err();
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn test_update_records_one_combined_data_entry() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let mut draft = stored_draft(&service, &event.id);
        draft.title = "Industry Summit 2026".to_string();
        draft.notes = Some("Focus on the new product line".to_string());

        let result = service.update_event(update_cmd(&event.id, draft)).unwrap();
        assert_eq!(
            result.recorded_actions,
            vec!["Event data changed (Title, Notes)".to_string()]
        );
        assert_eq!(result.event.title, "Industry Summit 2026");

        // The save landed in storage, not just in the result.
        assert_eq!(
            stored_draft(&service, &event.id).title,
            "Industry Summit 2026"
        );
        assert_eq!(
            history(&service, &event.id),
            vec!["Event data changed (Title, Notes)".to_string()]
        );
    }

    #[test]
    fn test_update_with_identical_draft_skips_write_entirely() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let draft = stored_draft(&service, &event.id);
        let result = service.update_event(update_cmd(&event.id, draft)).unwrap();

        assert!(result.recorded_actions.is_empty());
        assert!(history(&service, &event.id).is_empty());
        // updated_at untouched.
        assert_eq!(result.event.updated_at, event.updated_at);
    }

    #[test]
    fn test_update_records_status_change() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let mut draft = stored_draft(&service, &event.id);
        draft.stage = EventStage::Cancelled;

        let result = service.update_event(update_cmd(&event.id, draft)).unwrap();
        assert_eq!(
            result.recorded_actions,
            vec!["Status changed to: Cancelled".to_string()]
        );
    }

    #[test]
    fn test_update_with_mark_attended_forces_raw_fields_and_orders_entries() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let mut draft = stored_draft(&service, &event.id);
        draft.visitor_notes = Some("Met four prospects".to_string());

        let mut command = update_cmd(&event.id, draft);
        command.mark_attended = true;
        let result = service.update_event(command).unwrap();

        assert_eq!(result.event.stage, EventStage::Attended);
        assert!(result.event.booked);
        assert_eq!(
            result.recorded_actions,
            vec![
                "Marked as booked".to_string(),
                "Status changed to: Booked".to_string(),
                "Event data changed (Visitor notes)".to_string(),
            ]
        );
    }

    #[test]
    fn test_mark_attended_on_planned_event() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let result = service
            .mark_attended(MarkAttendedCommand {
                event_id: event.id.clone(),
                actor: Actor::default(),
            })
            .unwrap();

        assert_eq!(result.event.stage, EventStage::Attended);
        assert!(result.event.booked);
        assert_eq!(
            result.recorded_actions,
            vec![
                "Marked as booked".to_string(),
                "Status changed to: Booked".to_string(),
            ]
        );
    }

    #[test]
    fn test_mark_attended_on_already_booked_event_stays_silent() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        // Booked flag alone already presents as Booked.
        let mut draft = stored_draft(&service, &event.id);
        draft.booked = true;
        service.update_event(update_cmd(&event.id, draft)).unwrap();

        let result = service
            .mark_attended(MarkAttendedCommand {
                event_id: event.id.clone(),
                actor: Actor::default(),
            })
            .unwrap();

        // The raw fields move to the canonical booked pair, but the display
        // status never changed, so nothing is recorded.
        assert_eq!(result.event.stage, EventStage::Attended);
        assert!(result.recorded_actions.is_empty());
        assert_eq!(
            history(&service, &event.id),
            vec!["Status changed to: Booked".to_string()]
        );
    }

    #[test]
    fn test_set_presentation_status_records_transition() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let result = service
            .set_presentation_status(SetPresentationStatusCommand {
                event_id: event.id.clone(),
                status: PresentationStatus::Cancelled,
                actor: Actor::default(),
            })
            .unwrap();

        assert_eq!(result.event.stage, EventStage::Cancelled);
        assert_eq!(
            result.recorded_actions,
            vec!["Status changed to: Cancelled".to_string()]
        );
    }

    #[test]
    fn test_set_same_presentation_status_rewrites_canonically_without_history() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let mut draft = stored_draft(&service, &event.id);
        draft.booked = true;
        service.update_event(update_cmd(&event.id, draft)).unwrap();

        let result = service
            .set_presentation_status(SetPresentationStatusCommand {
                event_id: event.id.clone(),
                status: PresentationStatus::Booked,
                actor: Actor::default(),
            })
            .unwrap();

        assert_eq!(result.event.stage, EventStage::Attended);
        assert!(result.event.booked);
        assert!(result.recorded_actions.is_empty());
    }

    #[test]
    fn test_delete_event_cascades_to_history() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        let mut draft = stored_draft(&service, &event.id);
        draft.stage = EventStage::Cancelled;
        service.update_event(update_cmd(&event.id, draft)).unwrap();
        assert_eq!(history(&service, &event.id).len(), 1);

        let result = service
            .delete_event(DeleteEventCommand {
                event_id: event.id.clone(),
            })
            .unwrap();
        assert!(result.success_message.contains("Industry Summit"));

        assert!(service
            .get_event(GetEventCommand {
                event_id: event.id.clone(),
            })
            .unwrap()
            .event
            .is_none());
        assert!(history(&service, &event.id).is_empty());
    }

    #[test]
    fn test_operations_on_missing_event_fail() {
        let service = setup_test();

        assert!(service
            .update_event(update_cmd("ghost", stored_draft_placeholder()))
            .is_err());
        assert!(service
            .delete_event(DeleteEventCommand {
                event_id: "ghost".to_string(),
            })
            .is_err());
        assert!(service
            .mark_attended(MarkAttendedCommand {
                event_id: "ghost".to_string(),
                actor: Actor::default(),
            })
            .is_err());
    }

    fn stored_draft_placeholder() -> EventDraft {
        EventDraft {
            title: "Ghost".to_string(),
            organizer: None,
            city: None,
            location: None,
            start_date: None,
            end_date: None,
            stage: EventStage::Planned,
            booked: false,
            colleagues: Vec::new(),
            tags: Vec::new(),
            cost_type: CostType::BoothFlat,
            cost_value: 0.0,
            event_url: None,
            notes: None,
            visitor_notes: None,
            attachments: Vec::new(),
            linkedin_plan: false,
            linkedin_note: None,
            publication_status: false,
            ratings: EventRatings::default(),
            contact: EventContact::default(),
        }
    }

    #[test]
    fn test_event_costs_follow_listing_order_and_formulas() {
        let service = setup_test();

        let summit = service.create_event(create_cmd("Industry Summit")).unwrap().event;
        let mut draft = stored_draft(&service, &summit.id);
        draft.colleagues = vec!["Alice".to_string(), "Bob".to_string()];
        service.update_event(update_cmd(&summit.id, draft)).unwrap();

        let mut expo = create_cmd("Expo");
        expo.start_date = Some("2026-03-01".to_string());
        expo.end_date = None;
        expo.cost_type = CostType::BoothFlat;
        expo.cost_value = 500.0;
        service.create_event(expo).unwrap();

        let records = service.event_costs().unwrap().records;
        assert_eq!(records.len(), 2);
        // March before April.
        assert_eq!(records[0].event.title, "Expo");
        assert_eq!(records[0].total_cost, 500.0);
        assert_eq!(records[1].event.title, "Industry Summit");
        assert_eq!(records[1].participant_count, 2);
        assert_eq!(records[1].total_cost, 200.0);
        assert_eq!(records[1].cost_per_participant, 100.0);
    }

    #[test]
    fn test_update_normalizes_draft_before_diffing() {
        let service = setup_test();
        let event = service.create_event(create_cmd("Industry Summit")).unwrap().event;

        // Whitespace-only differences vanish during normalization, so this
        // save is a no-op.
        let mut draft = stored_draft(&service, &event.id);
        draft.title = format!("  {}  ", draft.title);
        draft.city = Some(" Berlin ".to_string());

        let result = service.update_event(update_cmd(&event.id, draft)).unwrap();
        assert!(result.recorded_actions.is_empty());
        assert!(history(&service, &event.id).is_empty());
    }
}
