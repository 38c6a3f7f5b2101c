use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use pharmawatch_core::{ItemId, ValueObject};

use crate::alert::{AlertEvent, AlertRule};
use crate::item::InventoryItem;
use crate::report::AggregateReport;

/// Headline figures for the admin dashboard cards.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_items: u64,
    /// Sum of on-hand quantities; malformed negative counts contribute nothing.
    pub total_units: u64,
    pub facilities: u64,
    pub low_stock: u64,
    pub critical: u64,
    /// Distinct items with a near-expiry alert.
    pub expiring_soon: u64,
    /// Share of `Adequate` items, 0..=100.
    pub health_score: u8,
}

impl DashboardKpis {
    pub fn compute(items: &[InventoryItem], report: &AggregateReport, alerts: &[AlertEvent]) -> Self {
        let facilities: BTreeSet<_> = items.iter().map(|i| i.facility).collect();
        let expiring: BTreeSet<ItemId> = alerts
            .iter()
            .filter(|a| a.rule == AlertRule::NearExpiry)
            .map(|a| a.item_id)
            .collect();
        let total_units = items
            .iter()
            .map(|i| u64::try_from(i.quantity).unwrap_or(0))
            .fold(0u64, u64::saturating_add);

        Self {
            total_items: report.total,
            total_units,
            facilities: facilities.len() as u64,
            low_stock: report.counts.low_stock,
            critical: report.counts.critical,
            expiring_soon: expiring.len() as u64,
            health_score: report.percentages.adequate,
        }
    }
}

impl ValueObject for DashboardKpis {}
