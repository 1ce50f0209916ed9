//! Event list filtering.
//!
//! A filter is a set of dimensions. Dimensions combine with AND; the
//! selected values within one dimension combine with OR. An empty dimension
//! constrains nothing, so the default filter passes every event through
//! unchanged and in the same order.

use chrono::{Datelike, NaiveDate};

use crate::domain::costs::CostRecord;
use crate::domain::models::event::{CostType, Event};
use crate::domain::status::PresentationStatus;

/// Bracket an event's computed total cost falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostBracket {
    /// Total below 500.
    Low,
    /// Total from 500 up to but not including 2000.
    Medium,
    /// Total of 2000 or more.
    High,
}

impl CostBracket {
    /// Classify a total cost. The boundaries belong to the upper bracket.
    pub fn from_total(total: f64) -> Self {
        if total < 500.0 {
            CostBracket::Low
        } else if total < 2000.0 {
            CostBracket::Medium
        } else {
            CostBracket::High
        }
    }

    /// Wire name used by the filter request.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostBracket::Low => "low",
            CostBracket::Medium => "medium",
            CostBracket::High => "high",
        }
    }

    /// Parse a wire name.
    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "low" => Ok(CostBracket::Low),
            "medium" => Ok(CostBracket::Medium),
            "high" => Ok(CostBracket::High),
            _ => Err(format!("Invalid cost bracket: {}", s)),
        }
    }
}

/// Temporal slice of the event list, judged against a reference date.
///
/// Scoping uses an event's end date, falling back to its start date.
/// Events without any date only appear in the `All` scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateScope {
    #[default]
    All,
    /// Events still ahead of (or ending on) the reference date.
    Upcoming(NaiveDate),
    /// Events already over before the reference date.
    Past(NaiveDate),
}

impl DateScope {
    fn matches(&self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> bool {
        let effective = end_date.or(start_date);
        match (self, effective) {
            (DateScope::All, _) => true,
            (_, None) => false,
            (DateScope::Upcoming(reference), Some(date)) => date >= *reference,
            (DateScope::Past(reference), Some(date)) => date < *reference,
        }
    }
}

/// Filter over cost-enriched events. All dimensions empty means
/// "match everything".
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Calendar years of the start date.
    pub years: Vec<i32>,
    /// Calendar quarters (1-4) of the start date.
    pub quarters: Vec<u8>,
    pub cost_types: Vec<CostType>,
    pub statuses: Vec<PresentationStatus>,
    pub organizers: Vec<String>,
    pub cities: Vec<String>,
    /// Matches events attended by any of the named colleagues.
    pub colleagues: Vec<String>,
    /// Matches events carrying any of the named tags.
    pub tags: Vec<String>,
    pub cost_brackets: Vec<CostBracket>,
    /// Case-insensitive substring over title, city and organizer.
    pub search: Option<String>,
    pub date_scope: DateScope,
}

impl EventFilter {
    pub fn matches(&self, record: &CostRecord) -> bool {
        let event = &record.event;

        if !self.years.is_empty() {
            match event.start_date {
                Some(date) if self.years.contains(&date.year()) => {}
                _ => return false,
            }
        }

        if !self.quarters.is_empty() {
            match event.start_date {
                Some(date) if self.quarters.contains(&quarter_of(date)) => {}
                _ => return false,
            }
        }

        if !self.cost_types.is_empty() && !self.cost_types.contains(&event.cost_type) {
            return false;
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&event.presentation_status()) {
            return false;
        }

        if !self.organizers.is_empty() {
            match &event.organizer {
                Some(organizer) if self.organizers.contains(organizer) => {}
                _ => return false,
            }
        }

        if !self.cities.is_empty() {
            match &event.city {
                Some(city) if self.cities.contains(city) => {}
                _ => return false,
            }
        }

        if !self.colleagues.is_empty()
            && !event
                .colleagues
                .iter()
                .any(|colleague| self.colleagues.contains(colleague))
        {
            return false;
        }

        if !self.tags.is_empty() && !event.tags.iter().any(|tag| self.tags.contains(tag)) {
            return false;
        }

        if !self.cost_brackets.is_empty()
            && !self
                .cost_brackets
                .contains(&CostBracket::from_total(record.total_cost))
        {
            return false;
        }

        if let Some(query) = &self.search {
            let query = query.trim().to_lowercase();
            if !query.is_empty() && !search_matches(event, &query) {
                return false;
            }
        }

        self.date_scope.matches(event.start_date, event.end_date)
    }

    /// Apply the filter, keeping the input order.
    pub fn apply(&self, records: Vec<CostRecord>) -> Vec<CostRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Calendar quarter (1-4) of a date.
pub fn quarter_of(date: NaiveDate) -> u8 {
    (date.month0() / 3 + 1) as u8
}

fn search_matches(event: &Event, query: &str) -> bool {
    if event.title.to_lowercase().contains(query) {
        return true;
    }
    if let Some(city) = &event.city {
        if city.to_lowercase().contains(query) {
            return true;
        }
    }
    if let Some(organizer) = &event.organizer {
        if organizer.to_lowercase().contains(query) {
            return true;
        }
    }
    false
}

/// Distinct values the stored events offer for the picker dimensions,
/// sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub organizers: Vec<String>,
    pub cities: Vec<String>,
    pub colleagues: Vec<String>,
    pub tags: Vec<String>,
}

/// Collect the picker options from the full event list.
pub fn filter_options(records: &[CostRecord]) -> FilterOptions {
    let mut options = FilterOptions::default();
    for record in records {
        if let Some(organizer) = &record.event.organizer {
            options.organizers.push(organizer.clone());
        }
        if let Some(city) = &record.event.city {
            options.cities.push(city.clone());
        }
        options.colleagues.extend(record.event.colleagues.clone());
        options.tags.extend(record.event.tags.clone());
    }
    for list in [
        &mut options.organizers,
        &mut options.cities,
        &mut options.colleagues,
        &mut options.tags,
    ] {
        list.sort();
        list.dedup();
    }
    options
}
