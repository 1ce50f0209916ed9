//! Presentation status derivation.
//!
//! Events persist two raw fields (lifecycle stage + booked flag) but users
//! see a single four-valued status. The forward mapping collapses several
//! raw combinations into the same display value, so the inverse can only
//! return a canonical representative. That lossiness is a property of the
//! stored data model and is deliberately kept, not resolved.

use serde::{Deserialize, Serialize};

use crate::domain::models::event::EventStage;

/// The four-valued status shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationStatus {
    /// Still being evaluated.
    Review,
    /// On the plan, not yet committed.
    Planned,
    /// Committed or already attended.
    Booked,
    Cancelled,
}

impl PresentationStatus {
    pub const ALL: [PresentationStatus; 4] = [
        PresentationStatus::Review,
        PresentationStatus::Planned,
        PresentationStatus::Booked,
        PresentationStatus::Cancelled,
    ];

    /// Derive the display status from the stored fields.
    ///
    /// Priority: cancellation wins over everything, attendance and the
    /// booked flag both present as Booked, Consider presents as Review,
    /// and only then does an event show as Planned.
    pub fn from_parts(stage: EventStage, booked: bool) -> Self {
        match stage {
            EventStage::Cancelled => PresentationStatus::Cancelled,
            EventStage::Attended => PresentationStatus::Booked,
            _ if booked => PresentationStatus::Booked,
            EventStage::Consider => PresentationStatus::Review,
            EventStage::Planned => PresentationStatus::Planned,
        }
    }

    /// Canonical (stage, booked) pair for this status.
    ///
    /// The forward mapping is many-to-one (`(Attended, true)` and
    /// `(Planned, true)` both present as Booked), so this picks one
    /// representative per status. Round-tripping the representative
    /// through `from_parts` always yields the same status.
    pub fn to_parts(&self) -> (EventStage, bool) {
        match self {
            PresentationStatus::Review => (EventStage::Consider, false),
            PresentationStatus::Planned => (EventStage::Planned, false),
            PresentationStatus::Booked => (EventStage::Attended, true),
            PresentationStatus::Cancelled => (EventStage::Cancelled, false),
        }
    }

    /// Display label, also used in history entries and filters.
    pub fn label(&self) -> &'static str {
        match self {
            PresentationStatus::Review => "Review",
            PresentationStatus::Planned => "Planned",
            PresentationStatus::Booked => "Booked",
            PresentationStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a display label.
    pub fn from_label(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "review" => Ok(PresentationStatus::Review),
            "planned" => Ok(PresentationStatus::Planned),
            "booked" => Ok(PresentationStatus::Booked),
            "cancelled" => Ok(PresentationStatus::Cancelled),
            _ => Err(format!("Invalid presentation status: {}", s)),
        }
    }
}
