//! # Domain Module
//!
//! Contains all business logic for the event tracker.
//!
//! This module encapsulates the entities, rules and services that define how
//! events are modeled, how their change history is written, and how costs
//! are computed and aggregated. It operates independently of any specific UI
//! framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **event_service**: Event lifecycle operations (create, save, status, delete)
//! - **audit_service**: Change history with its restricted deletion policy
//! - **status**: Derivation of the four-valued display status
//! - **change_detector**: Field-group diffing that produces history entries
//! - **costs**: Per-event cost computation
//! - **filter**: Multi-dimension filtering of the event list
//! - **aggregation**: Cost summaries, breakdowns and the full report
//! - **mappers**: Conversions between domain types and the `shared` DTOs
//!
//! ## Key Responsibilities
//!
//! - **Event Management**: Creating, validating and saving events
//! - **History Writing**: Deriving human-readable entries from each save
//! - **Status Derivation**: Collapsing raw stage + booked into one display value
//! - **Cost Computation**: Scaling per-head prices, passing flat prices through
//! - **Filtering and Reporting**: Slicing the event list and summing its costs
//!
//! ## Business Rules
//!
//! - Drafts are normalized (trimmed, empties dropped) before validation
//! - A save identical to the stored record writes nothing at all
//! - History entries are derived server-side, never supplied by callers
//! - Deleting history entries is restricted to the two newest per event
//! - Aggregations sum computed totals only; per-head figures are re-derived

pub mod aggregation;
pub mod audit_service;
pub mod change_detector;
pub mod commands;
pub mod costs;
pub mod event_service;
pub mod filter;
pub mod mappers;
pub mod models;
pub mod status;

pub use aggregation::*;
pub use audit_service::*;
pub use change_detector::*;
pub use commands::*;
pub use costs::*;
pub use event_service::*;
pub use filter::*;
pub use mappers::*;
pub use status::*;
