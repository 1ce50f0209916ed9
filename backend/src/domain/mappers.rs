// backend/src/domain/mappers.rs

//! Conversions between domain types and the DTOs of the `shared` crate.
//!
//! Mappers are the only place wire strings (stage names, cost type names,
//! ISO dates) are parsed or produced; the services on either side deal in
//! typed values exclusively.

use anyhow::Result;
use chrono::NaiveDate;

use shared::{
    AuditEntryDto, CostReportDto, CostSummaryDto, CostTypeSliceDto, CreateEventRequest,
    DeleteAuditEntryResponse, EventCostDto, EventDto, EventFilterRequest, FilterOptionsDto,
    MonthlyCostsDto, OrganizerCostsDto, UpdateEventRequest, UpdateEventResponse,
};

use crate::domain::aggregation::{CostReport, MonthlyCosts};
use crate::domain::commands::audit::DeleteAuditEntryResult;
use crate::domain::commands::events::{CreateEventCommand, UpdateEventResult};
use crate::domain::costs::CostRecord;
use crate::domain::event_service::parse_optional_date;
use crate::domain::filter::{CostBracket, DateScope, EventFilter, FilterOptions};
use crate::domain::models::audit_entry::{AuditEntry, DeleteOutcome};
use crate::domain::models::event::{
    CostType, Event, EventContact, EventDraft, EventRatings, EventStage,
};
use crate::domain::status::PresentationStatus;

/// Maps events between domain and DTO representations.
pub struct EventMapper;

impl EventMapper {
    pub fn to_dto(event: &Event) -> EventDto {
        EventDto {
            id: event.id.clone(),
            title: event.title.clone(),
            organizer: event.organizer.clone(),
            city: event.city.clone(),
            location: event.location.clone(),
            start_date: event.start_date.map(|date| date.to_string()),
            end_date: event.end_date.map(|date| date.to_string()),
            status: event.stage.as_str().to_string(),
            booked: event.booked,
            presentation_status: event.presentation_status().label().to_string(),
            colleagues: event.colleagues.clone(),
            tags: event.tags.clone(),
            cost_type: event.cost_type.as_str().to_string(),
            cost_value: event.cost_value,
            event_url: event.event_url.clone(),
            notes: event.notes.clone(),
            visitor_notes: event.visitor_notes.clone(),
            attachments: event.attachments.clone(),
            linkedin_plan: event.linkedin_plan,
            linkedin_note: event.linkedin_note.clone(),
            publication_status: event.publication_status,
            rating_sales: event.ratings.sales,
            rating_kam: event.ratings.kam,
            rating_marketing: event.ratings.marketing,
            rating_clevel: event.ratings.clevel,
            contact_name: event.contact.name.clone(),
            contact_email: event.contact.email.clone(),
            contact_phone: event.contact.phone.clone(),
            created_at: event.created_at.to_rfc3339(),
            updated_at: event.updated_at.to_rfc3339(),
        }
    }

    /// Turn a save payload into a domain draft.
    pub fn draft_from_request(request: &UpdateEventRequest) -> Result<EventDraft> {
        let stage = EventStage::from_string(&request.status).map_err(|e| anyhow::anyhow!(e))?;
        let cost_type =
            CostType::from_string(&request.cost_type).map_err(|e| anyhow::anyhow!(e))?;

        Ok(EventDraft {
            title: request.title.clone(),
            organizer: request.organizer.clone(),
            city: request.city.clone(),
            location: request.location.clone(),
            start_date: parse_optional_date(request.start_date.as_deref(), "start date")?,
            end_date: parse_optional_date(request.end_date.as_deref(), "end date")?,
            stage,
            booked: request.booked,
            colleagues: request.colleagues.clone(),
            tags: request.tags.clone(),
            cost_type,
            cost_value: request.cost_value,
            event_url: request.event_url.clone(),
            notes: request.notes.clone(),
            visitor_notes: request.visitor_notes.clone(),
            attachments: request.attachments.clone(),
            // Derived from the note when the draft is normalized.
            linkedin_plan: false,
            linkedin_note: request.linkedin_note.clone(),
            publication_status: request.publication_status,
            ratings: EventRatings {
                sales: request.rating_sales,
                kam: request.rating_kam,
                marketing: request.rating_marketing,
                clevel: request.rating_clevel,
            },
            contact: EventContact {
                name: request.contact_name.clone(),
                email: request.contact_email.clone(),
                phone: request.contact_phone.clone(),
            },
        })
    }

    pub fn update_response(result: &UpdateEventResult) -> UpdateEventResponse {
        UpdateEventResponse {
            event: Self::to_dto(&result.event),
            recorded_actions: result.recorded_actions.clone(),
        }
    }

    /// Turn a quick-create payload into a domain command.
    pub fn create_command(request: &CreateEventRequest) -> Result<CreateEventCommand> {
        Ok(CreateEventCommand {
            title: request.title.clone(),
            organizer: request.organizer.clone(),
            city: request.city.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            cost_type: CostType::from_string(&request.cost_type)
                .map_err(|e| anyhow::anyhow!(e))?,
            cost_value: request.cost_value,
        })
    }
}

/// Maps history entries to their DTO representation.
pub struct AuditMapper;

impl AuditMapper {
    pub fn to_dto(entry: &AuditEntry) -> AuditEntryDto {
        AuditEntryDto {
            id: entry.id.clone(),
            event_id: entry.event_id.clone(),
            action: entry.action.clone(),
            timestamp: entry.timestamp.to_rfc3339(),
            user_email: entry.actor_email.clone(),
        }
    }

    pub fn delete_response(result: &DeleteAuditEntryResult) -> DeleteAuditEntryResponse {
        DeleteAuditEntryResponse {
            deleted: result.outcome == DeleteOutcome::Deleted,
            message: result.message.clone(),
        }
    }
}

/// Maps cost aggregation results to their DTO representations.
pub struct ReportMapper;

impl ReportMapper {
    pub fn cost_to_dto(record: &CostRecord) -> EventCostDto {
        EventCostDto {
            id: record.event.id.clone(),
            title: record.event.title.clone(),
            organizer: record.event.organizer.clone(),
            city: record.event.city.clone(),
            presentation_status: record.event.presentation_status().label().to_string(),
            start_date: record.event.start_date.map(|date| date.to_string()),
            cost_type: record.event.cost_type.as_str().to_string(),
            cost_value: record.event.cost_value,
            colleagues: record.event.colleagues.clone(),
            colleagues_count: record.participant_count,
            total_cost: record.total_cost,
            cost_per_participant: record.cost_per_participant,
        }
    }

    pub fn monthly_to_dto(costs: &MonthlyCosts) -> MonthlyCostsDto {
        MonthlyCostsDto {
            month: costs.month.clone(),
            label: costs.first_day.format("%B %Y").to_string(),
            total_cost: costs.total_cost,
        }
    }

    pub fn to_dto(report: &CostReport) -> CostReportDto {
        CostReportDto {
            generated_at: report.generated_at.to_rfc3339(),
            summary: CostSummaryDto {
                total_events: report.summary.total_events,
                total_participants: report.summary.total_participants,
                total_cost: report.summary.total_cost,
                avg_cost_per_event: report.summary.avg_cost_per_event,
                avg_participants_per_event: report.summary.avg_participants_per_event,
                cost_per_participant: report.summary.cost_per_participant,
            },
            cost_types: report
                .cost_types
                .iter()
                .map(|total| CostTypeSliceDto {
                    cost_type: total.cost_type.as_str().to_string(),
                    label: total.cost_type.label().to_string(),
                    total_cost: total.total_cost,
                })
                .collect(),
            events: report.records.iter().map(Self::cost_to_dto).collect(),
            by_organizer: report
                .by_organizer
                .iter()
                .map(|share| OrganizerCostsDto {
                    organizer: share.organizer.clone(),
                    total_cost: share.total_cost,
                    percentage: share.percentage,
                })
                .collect(),
            by_month: report.by_month.iter().map(Self::monthly_to_dto).collect(),
        }
    }
}

/// Maps filter requests and options between wire and domain form.
pub struct FilterMapper;

impl FilterMapper {
    /// Parse a filter request. `today` anchors the upcoming/past scopes.
    pub fn from_request(request: &EventFilterRequest, today: NaiveDate) -> Result<EventFilter> {
        let cost_types = request
            .cost_types
            .iter()
            .map(|raw| CostType::from_string(raw).map_err(|e| anyhow::anyhow!(e)))
            .collect::<Result<Vec<_>>>()?;
        let statuses = request
            .statuses
            .iter()
            .map(|raw| PresentationStatus::from_label(raw).map_err(|e| anyhow::anyhow!(e)))
            .collect::<Result<Vec<_>>>()?;
        let cost_brackets = request
            .cost_brackets
            .iter()
            .map(|raw| CostBracket::from_string(raw).map_err(|e| anyhow::anyhow!(e)))
            .collect::<Result<Vec<_>>>()?;

        let date_scope = match request.date_scope.to_lowercase().as_str() {
            "" | "all" => DateScope::All,
            "upcoming" => DateScope::Upcoming(today),
            "past" => DateScope::Past(today),
            other => return Err(anyhow::anyhow!("Invalid date scope: {}", other)),
        };

        Ok(EventFilter {
            years: request.years.clone(),
            quarters: request.quarters.clone(),
            cost_types,
            statuses,
            organizers: request.organizers.clone(),
            cities: request.cities.clone(),
            colleagues: request.colleagues.clone(),
            tags: request.tags.clone(),
            cost_brackets,
            search: request.search.clone(),
            date_scope,
        })
    }

    pub fn options_to_dto(options: &FilterOptions) -> FilterOptionsDto {
        FilterOptionsDto {
            organizers: options.organizers.clone(),
            cities: options.cities.clone(),
            colleagues: options.colleagues.clone(),
            tags: options.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregation;

    fn sample_event() -> Event {
        let draft = EventDraft {
            title: "Industry Summit".to_string(),
            organizer: Some("Acme Corp".to_string()),
            city: Some("Berlin".to_string()),
            location: Some("Messe Halle 2".to_string()),
            start_date: NaiveDate::from_ymd_opt(2026, 4, 10),
            end_date: NaiveDate::from_ymd_opt(2026, 4, 12),
            stage: EventStage::Planned,
            booked: false,
            colleagues: vec!["Alice".to_string(), "Bob".to_string()],
            tags: vec!["sales".to_string()],
            cost_type: CostType::PerParticipant,
            cost_value: 100.0,
            event_url: None,
            notes: None,
            visitor_notes: None,
            attachments: vec![],
            linkedin_plan: false,
            linkedin_note: None,
            publication_status: true,
            ratings: EventRatings {
                sales: Some(4),
                ..EventRatings::default()
            },
            contact: EventContact::default(),
        };
        Event::from_draft("evt-1".to_string(), draft, chrono::Utc::now())
    }

    fn sample_request() -> UpdateEventRequest {
        UpdateEventRequest {
            id: "evt-1".to_string(),
            title: "Industry Summit".to_string(),
            organizer: Some("Acme Corp".to_string()),
            city: Some("Berlin".to_string()),
            location: None,
            start_date: Some("2026-04-10".to_string()),
            end_date: Some("2026-04-12".to_string()),
            status: "planned".to_string(),
            booked: false,
            colleagues: vec!["Alice".to_string()],
            tags: vec![],
            cost_type: "participant".to_string(),
            cost_value: 100.0,
            event_url: None,
            notes: None,
            visitor_notes: None,
            attachments: vec![],
            linkedin_note: Some("Post about the booth".to_string()),
            publication_status: false,
            rating_sales: None,
            rating_kam: None,
            rating_marketing: None,
            rating_clevel: None,
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            mark_attended: false,
        }
    }

    #[test]
    fn test_event_to_dto_uses_wire_names_and_iso_dates() {
        let dto = EventMapper::to_dto(&sample_event());

        assert_eq!(dto.id, "evt-1");
        assert_eq!(dto.status, "planned");
        assert_eq!(dto.presentation_status, "Planned");
        assert_eq!(dto.start_date, Some("2026-04-10".to_string()));
        assert_eq!(dto.end_date, Some("2026-04-12".to_string()));
        assert_eq!(dto.cost_type, "participant");
        assert_eq!(dto.rating_sales, Some(4));
        assert!(dto.created_at.contains('T'));
    }

    #[test]
    fn test_draft_from_request_parses_wire_values() {
        let draft = EventMapper::draft_from_request(&sample_request()).unwrap();

        assert_eq!(draft.stage, EventStage::Planned);
        assert_eq!(draft.cost_type, CostType::PerParticipant);
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2026, 4, 10));
        assert_eq!(draft.end_date, NaiveDate::from_ymd_opt(2026, 4, 12));

        // The plan flag comes out of normalization, not the payload.
        let normalized = draft.normalized();
        assert!(normalized.linkedin_plan);
    }

    #[test]
    fn test_draft_from_request_rejects_unknown_wire_names() {
        let mut bad_stage = sample_request();
        bad_stage.status = "archived".to_string();
        assert!(EventMapper::draft_from_request(&bad_stage).is_err());

        let mut bad_cost = sample_request();
        bad_cost.cost_type = "free".to_string();
        assert!(EventMapper::draft_from_request(&bad_cost).is_err());

        let mut bad_date = sample_request();
        bad_date.start_date = Some("10.04.2026".to_string());
        assert!(EventMapper::draft_from_request(&bad_date).is_err());
    }

    #[test]
    fn test_create_command_parses_cost_type() {
        let request = CreateEventRequest {
            title: "Expo".to_string(),
            organizer: None,
            city: None,
            start_date: None,
            end_date: None,
            cost_type: "booth".to_string(),
            cost_value: 500.0,
        };
        let command = EventMapper::create_command(&request).unwrap();
        assert_eq!(command.cost_type, CostType::BoothFlat);

        let mut bad = request;
        bad.cost_type = "free".to_string();
        assert!(EventMapper::create_command(&bad).is_err());
    }

    #[test]
    fn test_update_response_carries_event_and_actions() {
        let result = UpdateEventResult {
            event: sample_event(),
            recorded_actions: vec!["Status changed to: Booked".to_string()],
        };
        let response = EventMapper::update_response(&result);
        assert_eq!(response.event.id, "evt-1");
        assert_eq!(
            response.recorded_actions,
            vec!["Status changed to: Booked".to_string()]
        );
    }

    #[test]
    fn test_delete_response_flattens_the_outcome() {
        let denied = AuditMapper::delete_response(&DeleteAuditEntryResult {
            outcome: DeleteOutcome::Denied,
            message: "Only privileged users may delete history entries".to_string(),
        });
        assert!(!denied.deleted);
        assert!(denied.message.contains("privileged"));

        let deleted = AuditMapper::delete_response(&DeleteAuditEntryResult {
            outcome: DeleteOutcome::Deleted,
            message: "History entry deleted".to_string(),
        });
        assert!(deleted.deleted);
    }

    #[test]
    fn test_audit_entry_to_dto() {
        let entry = AuditEntry {
            id: "entry-1".to_string(),
            event_id: "evt-1".to_string(),
            action: "Status changed to: Booked".to_string(),
            timestamp: chrono::Utc::now(),
            actor_email: Some("ops@example.com".to_string()),
        };
        let dto = AuditMapper::to_dto(&entry);

        assert_eq!(dto.action, "Status changed to: Booked");
        assert_eq!(dto.user_email, Some("ops@example.com".to_string()));
        assert!(dto.timestamp.contains('T'));
    }

    #[test]
    fn test_monthly_costs_label() {
        let dto = ReportMapper::monthly_to_dto(&MonthlyCosts {
            month: "2026-04".to_string(),
            first_day: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            total_cost: 700.0,
        });
        assert_eq!(dto.month, "2026-04");
        assert_eq!(dto.label, "April 2026");
        assert_eq!(dto.first_day(), NaiveDate::from_ymd_opt(2026, 4, 1));
    }

    #[test]
    fn test_report_to_dto_carries_all_sections() {
        let records = vec![CostRecord::from_event(sample_event())];
        let report = aggregation::build_cost_report(records, chrono::Utc::now());
        let dto = ReportMapper::to_dto(&report);

        assert_eq!(dto.summary.total_events, 1);
        assert_eq!(dto.summary.total_cost, 200.0);
        assert_eq!(dto.cost_types.len(), 3);
        assert_eq!(dto.cost_types[0].label, "Per participant");
        assert_eq!(dto.events.len(), 1);
        assert_eq!(dto.events[0].colleagues_count, 2);
        assert_eq!(dto.by_organizer.len(), 1);
        assert_eq!(dto.by_organizer[0].organizer, "Acme Corp");
        assert_eq!(dto.by_month.len(), 1);
        assert_eq!(dto.by_month[0].month, "2026-04");
    }

    #[test]
    fn test_filter_from_request_parses_each_dimension() {
        let request = EventFilterRequest {
            years: vec![2026],
            quarters: vec![2],
            cost_types: vec!["participant".to_string()],
            statuses: vec!["Booked".to_string()],
            organizers: vec!["Acme Corp".to_string()],
            cities: vec![],
            colleagues: vec![],
            tags: vec![],
            cost_brackets: vec!["low".to_string()],
            search: Some("summit".to_string()),
            date_scope: "upcoming".to_string(),
        };
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let filter = FilterMapper::from_request(&request, today).unwrap();

        assert_eq!(filter.years, vec![2026]);
        assert_eq!(filter.cost_types, vec![CostType::PerParticipant]);
        assert_eq!(filter.statuses, vec![PresentationStatus::Booked]);
        assert_eq!(filter.cost_brackets, vec![CostBracket::Low]);
        assert_eq!(filter.date_scope, DateScope::Upcoming(today));
    }

    #[test]
    fn test_filter_from_request_rejects_unknown_values() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let mut bad_status = EventFilterRequest::default();
        bad_status.statuses = vec!["archived".to_string()];
        assert!(FilterMapper::from_request(&bad_status, today).is_err());

        let mut bad_scope = EventFilterRequest::default();
        bad_scope.date_scope = "yesterday".to_string();
        assert!(FilterMapper::from_request(&bad_scope, today).is_err());
    }

    #[test]
    fn test_filter_default_request_maps_to_unconstrained_filter() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let filter = FilterMapper::from_request(&EventFilterRequest::default(), today).unwrap();
        assert_eq!(filter.date_scope, DateScope::All);
        assert!(filter.years.is_empty());
        assert!(filter.statuses.is_empty());
    }
}
