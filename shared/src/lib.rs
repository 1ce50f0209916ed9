use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full event row exposed to presentation layers.
///
/// Dates are calendar dates (ISO `YYYY-MM-DD`), timestamps are RFC 3339.
/// `status` is the stored lifecycle stage; `presentation_status` is the
/// four-valued display status derived from stage + booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub title: String,
    pub organizer: Option<String>,
    pub city: Option<String>,
    /// Venue within the city, e.g. a conference centre.
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Stored stage: "planned" | "consider" | "attended" | "cancelled".
    pub status: String,
    pub booked: bool,
    /// Derived display status: "Review" | "Planned" | "Booked" | "Cancelled".
    pub presentation_status: String,
    /// Participating colleagues, order as entered.
    pub colleagues: Vec<String>,
    pub tags: Vec<String>,
    /// "participant" | "booth" | "sponsoring".
    pub cost_type: String,
    pub cost_value: f64,
    pub event_url: Option<String>,
    pub notes: Option<String>,
    pub visitor_notes: Option<String>,
    /// Opaque attachment link strings, order as entered.
    pub attachments: Vec<String>,
    /// True iff `linkedin_note` is non-empty after trimming.
    pub linkedin_plan: bool,
    pub linkedin_note: Option<String>,
    /// Whether the event is published on the public website.
    pub publication_status: bool,
    pub rating_sales: Option<u8>,
    pub rating_kam: Option<u8>,
    pub rating_marketing: Option<u8>,
    pub rating_clevel: Option<u8>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Event row enriched with computed costs for the cost overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCostDto {
    pub id: String,
    pub title: String,
    pub organizer: Option<String>,
    pub city: Option<String>,
    pub presentation_status: String,
    pub start_date: Option<String>,
    pub cost_type: String,
    pub cost_value: f64,
    pub colleagues: Vec<String>,
    pub colleagues_count: usize,
    /// Total cost of the event (per-head price scaled by participants, or
    /// the flat amount as-is).
    pub total_cost: f64,
    /// Cost per participant; 0.0 when there are no participants.
    pub cost_per_participant: f64,
}

/// One entry of an event's change history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntryDto {
    pub id: String,
    pub event_id: String,
    /// Human-readable description, e.g. "Status changed to: Booked".
    pub action: String,
    /// RFC 3339 timestamp assigned at write time.
    pub timestamp: String,
    pub user_email: Option<String>,
}

/// Per-organizer cost total for the "by organizer" summary view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizerCostsDto {
    pub organizer: String,
    pub total_cost: f64,
    /// Share of the grand total, in percent (0.0 when the grand total is 0).
    pub percentage: f64,
}

/// Per-month cost total keyed by the start date's `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCostsDto {
    /// Grouping key, e.g. "2026-04".
    pub month: String,
    /// Display label, e.g. "April 2026".
    pub label: String,
    pub total_cost: f64,
}

impl MonthlyCostsDto {
    /// First calendar day of the month, for chart axes and sorting.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.month), "%Y-%m-%d").ok()
    }
}

/// Headline figures for the cost report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummaryDto {
    pub total_events: usize,
    /// Sum of participant counts across all events in the report.
    pub total_participants: usize,
    pub total_cost: f64,
    pub avg_cost_per_event: f64,
    pub avg_participants_per_event: f64,
    /// Grand total divided by total participants (0.0 without participants).
    pub cost_per_participant: f64,
}

/// Cost total for one cost type, for breakdown charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTypeSliceDto {
    /// Wire name: "participant" | "booth" | "sponsoring".
    pub cost_type: String,
    /// Display label, e.g. "Per participant".
    pub label: String,
    pub total_cost: f64,
}

/// Complete cost report over a (possibly filtered) set of events,
/// consumed by table, chart and file-export renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReportDto {
    /// RFC 3339 timestamp of report assembly.
    pub generated_at: String,
    pub summary: CostSummaryDto,
    pub cost_types: Vec<CostTypeSliceDto>,
    pub events: Vec<EventCostDto>,
    pub by_organizer: Vec<OrganizerCostsDto>,
    pub by_month: Vec<MonthlyCostsDto>,
}

/// Distinct values available for the selector UIs, each sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterOptionsDto {
    pub organizers: Vec<String>,
    pub cities: Vec<String>,
    pub colleagues: Vec<String>,
    pub tags: Vec<String>,
}

/// Request to create an event with the minimal required fields.
/// Everything not listed defaults to empty / planned / not booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub organizer: Option<String>,
    pub city: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub cost_type: String,
    pub cost_value: f64,
}

/// Full draft payload for saving an edited event. The backend diffs this
/// against the persisted record and writes the change history itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub id: String,
    pub title: String,
    pub organizer: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Stored stage wire name.
    pub status: String,
    pub booked: bool,
    pub colleagues: Vec<String>,
    pub tags: Vec<String>,
    pub cost_type: String,
    pub cost_value: f64,
    pub event_url: Option<String>,
    pub notes: Option<String>,
    pub visitor_notes: Option<String>,
    pub attachments: Vec<String>,
    /// The plan flag is derived server-side from the note; only the note
    /// travels with the request.
    pub linkedin_note: Option<String>,
    pub publication_status: bool,
    pub rating_sales: Option<u8>,
    pub rating_kam: Option<u8>,
    pub rating_marketing: Option<u8>,
    pub rating_clevel: Option<u8>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// Explicit "mark as attended" intent from the caller.
    #[serde(default)]
    pub mark_attended: bool,
}

/// Response to a save: the stored event plus the history entries the save
/// produced, in the order they were written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEventResponse {
    pub event: EventDto,
    pub recorded_actions: Vec<String>,
}

/// Filter selections sent by the UI. Empty vectors impose no constraint;
/// dimensions combine with logical AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFilterRequest {
    pub years: Vec<i32>,
    /// Calendar quarters 1-4 derived from the start date.
    pub quarters: Vec<u8>,
    pub cost_types: Vec<String>,
    /// Presentation status labels ("Review", "Planned", "Booked", "Cancelled").
    pub statuses: Vec<String>,
    pub organizers: Vec<String>,
    pub cities: Vec<String>,
    pub colleagues: Vec<String>,
    pub tags: Vec<String>,
    /// Cost brackets: "low" (< 500), "medium" (500 to < 2000), "high" (>= 2000).
    pub cost_brackets: Vec<String>,
    /// Case-insensitive search over title, city and organizer.
    pub search: Option<String>,
    /// "all" | "upcoming" | "past", judged against today.
    pub date_scope: String,
}

impl Default for EventFilterRequest {
    fn default() -> Self {
        Self {
            years: Vec::new(),
            quarters: Vec::new(),
            cost_types: Vec::new(),
            statuses: Vec::new(),
            organizers: Vec::new(),
            cities: Vec::new(),
            colleagues: Vec::new(),
            tags: Vec::new(),
            cost_brackets: Vec::new(),
            search: None,
            date_scope: "all".to_string(),
        }
    }
}

/// Response to an attempt to delete a history entry. Refusal is an
/// expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAuditEntryResponse {
    pub deleted: bool,
    pub message: String,
}
