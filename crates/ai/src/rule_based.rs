use std::collections::BTreeMap;

use pharmawatch_core::FacilityId;
use pharmawatch_inventory::{Category, InventoryItem, StatusBucket, aggregate};

use crate::insight::{Insight, InsightGenerator};
use crate::result::AiError;

/// Deterministic insights derived from the stock classification.
#[derive(Debug, Copy, Clone)]
pub struct RuleBasedInsights {
    /// How many item names to list before summarising as "and N more".
    max_listed: usize,
}

impl RuleBasedInsights {
    pub fn new() -> Self {
        Self { max_listed: 3 }
    }

    pub fn with_max_listed(mut self, max_listed: usize) -> Self {
        self.max_listed = max_listed;
        self
    }

    fn list_names(&self, names: &[&str]) -> String {
        let shown = self.max_listed.max(1).min(names.len());
        let mut out = names[..shown].join(", ");
        if names.len() > shown {
            out.push_str(&format!(" and {} more", names.len() - shown));
        }
        out
    }
}

impl Default for RuleBasedInsights {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator for RuleBasedInsights {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    fn generate_insights(&self, items: &[InventoryItem]) -> Result<Vec<Insight>, AiError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let report = aggregate(items);
        let mut insights = Vec::new();

        let critical: Vec<&str> = items
            .iter()
            .filter(|i| i.status() == StatusBucket::Critical)
            .map(|i| i.name.as_str())
            .collect();
        if !critical.is_empty() {
            insights.push(Insight::new(
                format!("Reorder {} out-of-stock item(s) now", critical.len()),
                format!("{} cannot be dispensed until restocked", self.list_names(&critical)),
                0.95,
            ));
        }

        let low: Vec<&InventoryItem> = items
            .iter()
            .filter(|i| i.status() == StatusBucket::LowStock)
            .collect();
        if !low.is_empty() {
            let shortfall = low
                .iter()
                .map(|i| i.min_threshold.saturating_sub(i.quantity))
                .fold(0i64, i64::saturating_add);
            insights.push(Insight::new(
                format!("{} item(s) below reorder point", low.len()),
                format!(
                    "{}% of tracked items are below their minimum; combined shortfall is {} units",
                    report.percentages.low_stock, shortfall
                ),
                0.85,
            ));
        }

        let pressure = |category: Category| {
            let in_category = items.iter().filter(|i| i.category == category);
            let total = in_category.clone().count();
            let attention = in_category.filter(|i| i.status().needs_attention()).count();
            (attention, total)
        };
        let (rx_attention, rx_total) = pressure(Category::Prescription);
        let (otc_attention, otc_total) = pressure(Category::Otc);
        if rx_attention > otc_attention {
            insights.push(Insight::new(
                "Prescription stock under pressure",
                format!("{rx_attention} of {rx_total} prescription items need attention"),
                0.7,
            ));
        } else if otc_attention > rx_attention {
            insights.push(Insight::new(
                "OTC stock under pressure",
                format!("{otc_attention} of {otc_total} OTC items need attention"),
                0.7,
            ));
        }

        let mut per_facility: BTreeMap<FacilityId, usize> = BTreeMap::new();
        for item in items.iter().filter(|i| i.status().needs_attention()) {
            *per_facility.entry(item.facility).or_default() += 1;
        }
        if per_facility.len() > 1 {
            // Ties resolve to the lowest facility id.
            let (facility, issues) = per_facility
                .iter()
                .fold((None, 0usize), |best, (f, n)| if *n > best.1 { (Some(*f), *n) } else { best });
            if let Some(facility) = facility {
                insights.push(Insight::new(
                    "Stock issues concentrated at one facility",
                    format!("facility {facility} accounts for {issues} of {} flagged items", report.attention_count()),
                    0.6,
                ));
            }
        }

        if insights.is_empty() {
            insights.push(Insight::new(
                "Stock levels healthy",
                format!("all {} tracked items are at or above their reorder point", report.total),
                0.9,
            ));
        }

        Ok(insights)
    }
}
