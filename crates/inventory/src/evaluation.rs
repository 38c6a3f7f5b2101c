//! One-call health pipeline: report + alerts + faults + KPIs for a snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alert::{AlertBatch, AlertEvent, collect_item_alerts};
use crate::config::HealthConfig;
use crate::fault::ItemFault;
use crate::item::InventoryItem;
use crate::kpi::DashboardKpis;
use crate::report::{AggregateReport, aggregate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEvaluation {
    pub report: AggregateReport,
    pub alerts: Vec<AlertEvent>,
    /// Per-item faults, in input order. Flagged items are still counted.
    pub faults: Vec<ItemFault>,
    pub kpis: DashboardKpis,
}

impl HealthEvaluation {
    pub fn has_faults(&self) -> bool {
        !self.faults.is_empty()
    }
}

/// Evaluate a snapshot at the injected time `now`.
///
/// Negative counts are flagged as `InvalidQuantity` and clamped by the
/// classifier; missing or malformed expiry dates are flagged as
/// `InvalidExpiryDate`. Neither stops the remaining items from being evaluated.
pub fn evaluate(items: &[InventoryItem], now: DateTime<Utc>, config: &HealthConfig) -> HealthEvaluation {
    let report = aggregate(items);

    let mut batch = AlertBatch::default();
    for item in items {
        if let Some(fault) = item.quantity_fault() {
            batch.faults.push(fault);
        }
        collect_item_alerts(item, now, config.expiry_horizon_days, &mut batch);
    }

    let kpis = DashboardKpis::compute(items, &report, &batch.alerts);

    debug!(
        total = report.total,
        adequate = report.counts.adequate,
        low_stock = report.counts.low_stock,
        critical = report.counts.critical,
        alerts = batch.alerts.len(),
        faults = batch.faults.len(),
        "inventory snapshot evaluated"
    );

    HealthEvaluation {
        report,
        alerts: batch.alerts,
        faults: batch.faults,
        kpis,
    }
}
