//! Pure cost computation over events.

use serde::{Deserialize, Serialize};

use crate::domain::models::event::{CostType, Event};

/// Computed cost figures for one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total: f64,
    /// Per-head figure; 0.0 when there is nobody to divide a flat cost by.
    /// Callers tell "zero" and "not applicable" apart via the participant
    /// count, not via this value.
    pub per_participant: f64,
}

/// Compute total and per-participant cost from the three source fields.
///
/// Pure function; the same inputs always produce the same figures whether
/// computed at write time or re-derived at read time. Inputs are assumed
/// non-negative (enforced by draft validation upstream).
pub fn compute_cost(cost_type: CostType, unit_value: f64, participant_count: usize) -> CostBreakdown {
    match cost_type {
        CostType::PerParticipant => CostBreakdown {
            total: unit_value * participant_count as f64,
            per_participant: unit_value,
        },
        CostType::BoothFlat | CostType::SponsorshipFlat => CostBreakdown {
            total: unit_value,
            per_participant: if participant_count > 0 {
                unit_value / participant_count as f64
            } else {
                0.0
            },
        },
    }
}

/// An event enriched with its computed costs.
///
/// Derived at read time and never persisted; the stored event remains the
/// single source of truth for the cost fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub event: Event,
    pub participant_count: usize,
    pub total_cost: f64,
    pub cost_per_participant: f64,
}

impl CostRecord {
    pub fn from_event(event: Event) -> Self {
        let participant_count = event.participant_count();
        let breakdown = compute_cost(event.cost_type, event.cost_value, participant_count);
        Self {
            event,
            participant_count,
            total_cost: breakdown.total,
            cost_per_participant: breakdown.per_participant,
        }
    }
}
