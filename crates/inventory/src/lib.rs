//! Inventory health module.
//!
//! This crate turns a snapshot of pharmaceutical inventory records into status
//! buckets, aggregate reports, alerts and dashboard KPIs. Everything here is
//! deterministic domain logic (no IO, no storage, no wall clock): callers pass
//! the evaluation time in explicitly.

pub mod alert;
pub mod config;
pub mod evaluation;
pub mod fault;
pub mod filter;
pub mod item;
pub mod kpi;
pub mod report;
pub mod status;

pub use alert::{AlertBatch, AlertEvent, AlertRule, AlertSeverity, derive_alerts};
pub use config::{DEFAULT_EXPIRY_HORIZON_DAYS, HealthConfig};
pub use evaluation::{HealthEvaluation, evaluate};
pub use fault::{FaultKind, ItemFault};
pub use filter::InventoryFilter;
pub use item::{Category, InventoryItem, parse_expiry_date};
pub use kpi::DashboardKpis;
pub use report::{AggregateReport, PerBucket, aggregate};
pub use status::{StatusBucket, classify};
