//! backend/src/domain/models/event.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::status::PresentationStatus;

/// Stored lifecycle stage of an event.
///
/// This is the raw persisted value. Users never see it directly; the
/// four-valued display status is derived from stage plus the booked flag
/// (see `domain::status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStage {
    Planned,
    Consider,
    Attended,
    Cancelled,
}

impl EventStage {
    /// Wire name used by storage and the DTO layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStage::Planned => "planned",
            EventStage::Consider => "consider",
            EventStage::Attended => "attended",
            EventStage::Cancelled => "cancelled",
        }
    }

    /// Parse a wire name.
    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(EventStage::Planned),
            "consider" => Ok(EventStage::Consider),
            "attended" => Ok(EventStage::Attended),
            "cancelled" => Ok(EventStage::Cancelled),
            _ => Err(format!("Invalid event stage: {}", s)),
        }
    }
}

/// How the cost value of an event is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostType {
    /// `cost_value` is a per-head price; the total scales with the
    /// participant count.
    #[serde(rename = "participant")]
    PerParticipant,
    /// `cost_value` is a flat booth price, independent of participants.
    #[serde(rename = "booth")]
    BoothFlat,
    /// `cost_value` is a flat sponsorship package price.
    #[serde(rename = "sponsoring")]
    SponsorshipFlat,
}

impl CostType {
    /// Wire name used by storage and the DTO layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostType::PerParticipant => "participant",
            CostType::BoothFlat => "booth",
            CostType::SponsorshipFlat => "sponsoring",
        }
    }

    /// Parse a wire name.
    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "participant" => Ok(CostType::PerParticipant),
            "booth" => Ok(CostType::BoothFlat),
            "sponsoring" => Ok(CostType::SponsorshipFlat),
            _ => Err(format!("Invalid cost type: {}", s)),
        }
    }

    /// Display label for reports and charts.
    pub fn label(&self) -> &'static str {
        match self {
            CostType::PerParticipant => "Per participant",
            CostType::BoothFlat => "Booth",
            CostType::SponsorshipFlat => "Sponsoring",
        }
    }
}

/// Internal stakeholder ratings, each on a 1-5 scale when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRatings {
    pub sales: Option<u8>,
    pub kam: Option<u8>,
    pub marketing: Option<u8>,
    pub clevel: Option<u8>,
}

impl EventRatings {
    pub fn as_array(&self) -> [Option<u8>; 4] {
        [self.sales, self.kam, self.marketing, self.clevel]
    }
}

/// Contact person at the organizer, all fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Domain model for one tracked event (conference, trade show, ...).
///
/// Optional text fields are normalized: trimmed, with empty strings stored
/// as `None`. The list fields keep the order they were entered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub organizer: Option<String>,
    pub city: Option<String>,
    /// Venue within the city.
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub stage: EventStage,
    /// Booked flag, independent of the stage.
    pub booked: bool,
    pub colleagues: Vec<String>,
    pub tags: Vec<String>,
    pub cost_type: CostType,
    pub cost_value: f64,
    pub event_url: Option<String>,
    pub notes: Option<String>,
    pub visitor_notes: Option<String>,
    pub attachments: Vec<String>,
    /// Kept consistent with `linkedin_note`: true iff the note is non-empty.
    pub linkedin_plan: bool,
    pub linkedin_note: Option<String>,
    /// Whether the event is published on the public website.
    pub publication_status: bool,
    pub ratings: EventRatings,
    pub contact: EventContact,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Generate a unique ID for an event.
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn participant_count(&self) -> usize {
        self.colleagues.len()
    }

    /// Derived four-valued display status.
    pub fn presentation_status(&self) -> PresentationStatus {
        PresentationStatus::from_parts(self.stage, self.booked)
    }

    /// Materialize a new event from a (normalized, validated) draft.
    pub fn from_draft(id: String, draft: EventDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            organizer: draft.organizer,
            city: draft.city,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            stage: draft.stage,
            booked: draft.booked,
            colleagues: draft.colleagues,
            tags: draft.tags,
            cost_type: draft.cost_type,
            cost_value: draft.cost_value,
            event_url: draft.event_url,
            notes: draft.notes,
            visitor_notes: draft.visitor_notes,
            attachments: draft.attachments,
            linkedin_plan: draft.linkedin_plan,
            linkedin_note: draft.linkedin_note,
            publication_status: draft.publication_status,
            ratings: draft.ratings,
            contact: draft.contact,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields with the draft's values.
    pub fn apply_draft(&mut self, draft: EventDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.organizer = draft.organizer;
        self.city = draft.city;
        self.location = draft.location;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.stage = draft.stage;
        self.booked = draft.booked;
        self.colleagues = draft.colleagues;
        self.tags = draft.tags;
        self.cost_type = draft.cost_type;
        self.cost_value = draft.cost_value;
        self.event_url = draft.event_url;
        self.notes = draft.notes;
        self.visitor_notes = draft.visitor_notes;
        self.attachments = draft.attachments;
        self.linkedin_plan = draft.linkedin_plan;
        self.linkedin_note = draft.linkedin_note;
        self.publication_status = draft.publication_status;
        self.ratings = draft.ratings;
        self.contact = draft.contact;
        self.updated_at = now;
    }
}

/// Editable snapshot of an event's mutable fields.
///
/// This is what the save flow diffs against the stored record. `id` and the
/// timestamps are deliberately absent: they are owned by the stored side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub organizer: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub stage: EventStage,
    pub booked: bool,
    pub colleagues: Vec<String>,
    pub tags: Vec<String>,
    pub cost_type: CostType,
    pub cost_value: f64,
    pub event_url: Option<String>,
    pub notes: Option<String>,
    pub visitor_notes: Option<String>,
    pub attachments: Vec<String>,
    pub linkedin_plan: bool,
    pub linkedin_note: Option<String>,
    pub publication_status: bool,
    pub ratings: EventRatings,
    pub contact: EventContact,
}

impl EventDraft {
    /// Snapshot the mutable fields of a stored event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            organizer: event.organizer.clone(),
            city: event.city.clone(),
            location: event.location.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            stage: event.stage,
            booked: event.booked,
            colleagues: event.colleagues.clone(),
            tags: event.tags.clone(),
            cost_type: event.cost_type,
            cost_value: event.cost_value,
            event_url: event.event_url.clone(),
            notes: event.notes.clone(),
            visitor_notes: event.visitor_notes.clone(),
            attachments: event.attachments.clone(),
            linkedin_plan: event.linkedin_plan,
            linkedin_note: event.linkedin_note.clone(),
            publication_status: event.publication_status,
            ratings: event.ratings,
            contact: event.contact.clone(),
        }
    }

    /// Apply the same cleanup the edit form applies before saving: trim
    /// strings, store empties as `None`, re-parse the free-text lists and
    /// derive the LinkedIn plan flag from the note.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.organizer = clean_optional(self.organizer);
        self.city = clean_optional(self.city);
        self.location = clean_optional(self.location);
        self.event_url = clean_optional(self.event_url);
        self.notes = clean_optional(self.notes);
        self.visitor_notes = clean_optional(self.visitor_notes);
        self.contact.name = clean_optional(self.contact.name);
        self.contact.email = clean_optional(self.contact.email);
        self.contact.phone = clean_optional(self.contact.phone);
        self.colleagues = parse_comma_list(&self.colleagues.join(","));
        self.tags = parse_comma_list(&self.tags.join(","));
        self.attachments = parse_line_list(&self.attachments.join("\n"));
        self.linkedin_note = clean_optional(self.linkedin_note);
        self.linkedin_plan = self.linkedin_note.is_some();
        self
    }

    /// Validate the draft. Expects `normalized()` to have run already.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if self.title.chars().count() > 256 {
            return Err(EventValidationError::TitleTooLong);
        }
        if self.cost_value < 0.0 {
            return Err(EventValidationError::NegativeCostValue);
        }
        for rating in self.ratings.as_array().into_iter().flatten() {
            if !(1..=5).contains(&rating) {
                return Err(EventValidationError::RatingOutOfRange);
            }
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(EventValidationError::EndBeforeStart);
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EventValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title cannot exceed 256 characters")]
    TitleTooLong,
    #[error("Cost value cannot be negative")]
    NegativeCostValue,
    #[error("Ratings must be between 1 and 5")]
    RatingOutOfRange,
    #[error("End date cannot be before start date")]
    EndBeforeStart,
}

/// Split a comma-separated free-text field into trimmed, non-empty items.
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| item.to_string())
        .collect()
}

/// Split a newline-separated free-text field into trimmed, non-empty items.
pub fn parse_line_list(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| item.to_string())
        .collect()
}

fn clean_optional(value: Option<String>) -> Option<String> {
    match value {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}
