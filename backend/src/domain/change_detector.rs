//! Snapshot diff between a stored event and an edited draft.
//!
//! Changes are reported per semantic field group rather than per field so a
//! busy edit produces one readable history entry instead of a dozen. The
//! groups and their order are fixed; list fields compare order-sensitively
//! because the lists are edited as free text and re-parsed, so an apparent
//! reordering is a real edit.

use log::debug;

use crate::domain::models::event::{Event, EventDraft};
use crate::domain::status::PresentationStatus;

/// Semantic field groups, in the fixed order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Title,
    Organizer,
    Location,
    Schedule,
    Costs,
    EventUrl,
    Notes,
    VisitorNotes,
    Ratings,
    LinkedIn,
    WebsitePublication,
    Colleagues,
    Tags,
    Attachments,
}

impl FieldGroup {
    /// Every group in reporting order.
    pub const ALL: [FieldGroup; 14] = [
        FieldGroup::Title,
        FieldGroup::Organizer,
        FieldGroup::Location,
        FieldGroup::Schedule,
        FieldGroup::Costs,
        FieldGroup::EventUrl,
        FieldGroup::Notes,
        FieldGroup::VisitorNotes,
        FieldGroup::Ratings,
        FieldGroup::LinkedIn,
        FieldGroup::WebsitePublication,
        FieldGroup::Colleagues,
        FieldGroup::Tags,
        FieldGroup::Attachments,
    ];

    /// Group name as it appears in history entries.
    pub fn label(&self) -> &'static str {
        match self {
            FieldGroup::Title => "Title",
            FieldGroup::Organizer => "Organizer",
            FieldGroup::Location => "Location",
            FieldGroup::Schedule => "Schedule",
            FieldGroup::Costs => "Costs",
            FieldGroup::EventUrl => "Event URL",
            FieldGroup::Notes => "Notes",
            FieldGroup::VisitorNotes => "Visitor notes",
            FieldGroup::Ratings => "Ratings",
            FieldGroup::LinkedIn => "LinkedIn",
            FieldGroup::WebsitePublication => "Website publication",
            FieldGroup::Colleagues => "Colleagues",
            FieldGroup::Tags => "Tags",
            FieldGroup::Attachments => "Attachments",
        }
    }

    fn differs(&self, persisted: &Event, draft: &EventDraft) -> bool {
        match self {
            FieldGroup::Title => persisted.title.trim() != draft.title.trim(),
            FieldGroup::Organizer => persisted.organizer != draft.organizer,
            FieldGroup::Location => {
                persisted.city != draft.city || persisted.location != draft.location
            }
            FieldGroup::Schedule => {
                persisted.start_date != draft.start_date || persisted.end_date != draft.end_date
            }
            FieldGroup::Costs => {
                persisted.cost_type != draft.cost_type || persisted.cost_value != draft.cost_value
            }
            FieldGroup::EventUrl => persisted.event_url != draft.event_url,
            FieldGroup::Notes => persisted.notes != draft.notes,
            FieldGroup::VisitorNotes => persisted.visitor_notes != draft.visitor_notes,
            FieldGroup::Ratings => persisted.ratings != draft.ratings,
            FieldGroup::LinkedIn => {
                persisted.linkedin_plan != draft.linkedin_plan
                    || persisted.linkedin_note != draft.linkedin_note
            }
            FieldGroup::WebsitePublication => {
                persisted.publication_status != draft.publication_status
            }
            FieldGroup::Colleagues => persisted.colleagues != draft.colleagues,
            FieldGroup::Tags => persisted.tags != draft.tags,
            FieldGroup::Attachments => persisted.attachments != draft.attachments,
        }
    }
}

/// Field groups that differ between the stored event and the draft, in
/// reporting order.
pub fn detect_changes(persisted: &Event, draft: &EventDraft) -> Vec<FieldGroup> {
    FieldGroup::ALL
        .iter()
        .copied()
        .filter(|group| group.differs(persisted, draft))
        .collect()
}

/// History entries a save should produce, in write order.
///
/// Transition entries come first ("Marked as booked" before the generic
/// status change, when both apply), followed by one combined entry covering
/// all changed field groups. Identical snapshots produce nothing; whether a
/// save still happens is the caller's decision.
pub fn audit_actions(persisted: &Event, draft: &EventDraft, mark_attended: bool) -> Vec<String> {
    let mut actions = Vec::new();

    let before = persisted.presentation_status();
    let after = PresentationStatus::from_parts(draft.stage, draft.booked);

    if mark_attended && before != PresentationStatus::Booked && after == PresentationStatus::Booked
    {
        actions.push("Marked as booked".to_string());
    }
    if before != after {
        actions.push(format!("Status changed to: {}", after.label()));
    }

    let changed = detect_changes(persisted, draft);
    if !changed.is_empty() {
        let labels: Vec<&str> = changed.iter().map(|group| group.label()).collect();
        actions.push(format!("Event data changed ({})", labels.join(", ")));
    }

    if !actions.is_empty() {
        debug!(
            "Detected changes for event {}: {} history action(s)",
            persisted.id,
            actions.len()
        );
    }

    actions
}
