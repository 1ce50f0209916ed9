//! Cost aggregation over the (filtered) event list.
//!
//! All aggregations are pure sums of each event's computed total cost.
//! Per-participant figures are never summed across events; where a
//! per-participant number appears it is re-derived from the relevant
//! totals.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::domain::costs::CostRecord;
use crate::domain::models::event::CostType;

/// Cost total attributed to one organizer.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizerCosts {
    pub organizer: String,
    pub total_cost: f64,
}

/// Organizer total plus its share of the grand total. The grand total
/// includes costs of events without an organizer, so shares do not have to
/// add up to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizerShare {
    pub organizer: String,
    pub total_cost: f64,
    /// In percent; 0.0 when the grand total is 0.
    pub percentage: f64,
}

/// Cost total for one calendar month of event start dates.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCosts {
    /// Grouping key, `YYYY-MM`.
    pub month: String,
    /// First day of the month, for chart axes.
    pub first_day: NaiveDate,
    pub total_cost: f64,
}

/// Cost total for one cost type.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTypeTotal {
    pub cost_type: CostType,
    pub total_cost: f64,
}

/// Headline figures over a set of events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostSummary {
    pub total_events: usize,
    pub total_participants: usize,
    pub total_cost: f64,
    pub avg_cost_per_event: f64,
    pub avg_participants_per_event: f64,
    /// Grand total divided by the summed participant count, not an average
    /// of the per-event figures.
    pub cost_per_participant: f64,
}

/// Complete cost report over a set of cost-enriched events.
#[derive(Debug, Clone, PartialEq)]
pub struct CostReport {
    pub generated_at: DateTime<Utc>,
    pub summary: CostSummary,
    pub cost_types: Vec<CostTypeTotal>,
    pub records: Vec<CostRecord>,
    pub by_organizer: Vec<OrganizerShare>,
    pub by_month: Vec<MonthlyCosts>,
}

/// Sum totals per organizer, highest first. Events without an organizer are
/// left out; their costs still count toward the grand total elsewhere.
pub fn by_organizer(records: &[CostRecord]) -> Vec<OrganizerCosts> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records {
        if let Some(organizer) = &record.event.organizer {
            *totals.entry(organizer.clone()).or_insert(0.0) += record.total_cost;
        }
    }

    let mut costs: Vec<OrganizerCosts> = totals
        .into_iter()
        .map(|(organizer, total_cost)| OrganizerCosts {
            organizer,
            total_cost,
        })
        .collect();
    costs.sort_by(|a, b| {
        b.total_cost
            .total_cmp(&a.total_cost)
            .then_with(|| a.organizer.cmp(&b.organizer))
    });
    costs
}

/// Sum totals per start-date month, oldest first. Events without a start
/// date are left out.
pub fn by_month(records: &[CostRecord]) -> Vec<MonthlyCosts> {
    let mut totals: BTreeMap<String, (NaiveDate, f64)> = BTreeMap::new();
    for record in records {
        if let Some(date) = record.event.start_date {
            let key = format!("{:04}-{:02}", date.year(), date.month());
            let first_day = date.with_day(1).unwrap_or(date);
            let entry = totals.entry(key).or_insert((first_day, 0.0));
            entry.1 += record.total_cost;
        }
    }

    totals
        .into_iter()
        .map(|(month, (first_day, total_cost))| MonthlyCosts {
            month,
            first_day,
            total_cost,
        })
        .collect()
}

/// Sum totals per cost type. Always yields one row per type, in a fixed
/// order, so breakdown charts keep stable slices.
pub fn by_cost_type(records: &[CostRecord]) -> Vec<CostTypeTotal> {
    const ORDER: [CostType; 3] = [
        CostType::PerParticipant,
        CostType::BoothFlat,
        CostType::SponsorshipFlat,
    ];

    ORDER
        .into_iter()
        .map(|cost_type| CostTypeTotal {
            cost_type,
            total_cost: records
                .iter()
                .filter(|record| record.event.cost_type == cost_type)
                .map(|record| record.total_cost)
                .sum(),
        })
        .collect()
}

/// Headline figures. All ratios are 0.0 when their divisor is 0.
pub fn summarize(records: &[CostRecord]) -> CostSummary {
    let total_events = records.len();
    let total_participants: usize = records.iter().map(|record| record.participant_count).sum();
    let total_cost: f64 = records.iter().map(|record| record.total_cost).sum();

    let avg_cost_per_event = if total_events > 0 {
        total_cost / total_events as f64
    } else {
        0.0
    };
    let avg_participants_per_event = if total_events > 0 {
        total_participants as f64 / total_events as f64
    } else {
        0.0
    };
    let cost_per_participant = if total_participants > 0 {
        total_cost / total_participants as f64
    } else {
        0.0
    };

    CostSummary {
        total_events,
        total_participants,
        total_cost,
        avg_cost_per_event,
        avg_participants_per_event,
        cost_per_participant,
    }
}

/// Assemble the full report over a set of cost-enriched events. The record
/// order is kept as given.
pub fn build_cost_report(records: Vec<CostRecord>, generated_at: DateTime<Utc>) -> CostReport {
    let summary = summarize(&records);
    let cost_types = by_cost_type(&records);
    let by_month = by_month(&records);

    let grand_total = summary.total_cost;
    let by_organizer = by_organizer(&records)
        .into_iter()
        .map(|costs| OrganizerShare {
            percentage: if grand_total > 0.0 {
                costs.total_cost / grand_total * 100.0
            } else {
                0.0
            },
            organizer: costs.organizer,
            total_cost: costs.total_cost,
        })
        .collect();

    CostReport {
        generated_at,
        summary,
        cost_types,
        records,
        by_organizer,
        by_month,
    }
}
