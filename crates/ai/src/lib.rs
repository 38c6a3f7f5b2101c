//! `pharmawatch-ai`
//!
//! **Responsibility:** pluggable insight capability for the dashboard.
//!
//! This crate sits outside the health classifier:
//! - It reads inventory snapshots but never mutates them.
//! - The classifier never depends on it.
//! - It emits **insights**, not alerts.

pub mod canned;
pub mod insight;
pub mod inventory_insight;
pub mod job;
pub mod result;
pub mod rule_based;
pub mod scheduler;

pub use canned::CannedInsights;
pub use insight::{Insight, InsightGenerator};
pub use inventory_insight::InventoryInsightJob;
pub use job::AiJob;
pub use result::{AiError, AiResult};
pub use rule_based::RuleBasedInsights;
pub use scheduler::{AiScheduler, FacilityScope, FacilitySnapshot, LocalAiScheduler};
