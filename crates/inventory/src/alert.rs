use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use pharmawatch_core::{FacilityId, ItemId, ValueObject};

use crate::fault::ItemFault;
use crate::item::InventoryItem;
use crate::status::StatusBucket;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Expiring,
}

/// Which condition produced an alert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertRule {
    OutOfStock,
    BelowThreshold,
    NearExpiry,
}

impl AlertRule {
    pub fn severity(self) -> AlertSeverity {
        match self {
            AlertRule::OutOfStock => AlertSeverity::Critical,
            AlertRule::BelowThreshold => AlertSeverity::Warning,
            AlertRule::NearExpiry => AlertSeverity::Expiring,
        }
    }
}

/// Stateless notification derived from one record during one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub item_id: ItemId,
    pub item_name: String,
    pub facility: FacilityId,
    pub rule: AlertRule,
    pub severity: AlertSeverity,
    pub message: String,
    pub generated_at: DateTime<Utc>,
}

impl AlertEvent {
    fn new(item: &InventoryItem, rule: AlertRule, message: String, now: DateTime<Utc>) -> Self {
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            facility: item.facility,
            rule,
            severity: rule.severity(),
            message,
            generated_at: now,
        }
    }
}

impl ValueObject for AlertEvent {}

/// Alerts in input order, plus the per-item faults met on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertBatch {
    pub alerts: Vec<AlertEvent>,
    pub faults: Vec<ItemFault>,
}

impl AlertBatch {
    pub fn by_severity(&self, severity: AlertSeverity) -> impl Iterator<Item = &AlertEvent> {
        self.alerts.iter().filter(move |a| a.severity == severity)
    }

    pub fn for_item(&self, item_id: ItemId) -> impl Iterator<Item = &AlertEvent> {
        self.alerts.iter().filter(move |a| a.item_id == item_id)
    }
}

/// Derive stock and expiry alerts for a snapshot.
///
/// Per item, in input order:
/// - `Critical` → one `critical` alert; else `Low Stock` → one `warning` alert.
/// - Independently, expiry within `expiry_horizon_days` calendar days of `now`
///   (today included, already expired excluded) → one `expiring` alert.
///
/// A missing or malformed expiry date is recorded as an `InvalidExpiryDate`
/// fault; the item's stock alert and the remaining items are still evaluated.
pub fn derive_alerts<'a>(
    items: impl IntoIterator<Item = &'a InventoryItem>,
    now: DateTime<Utc>,
    expiry_horizon_days: u32,
) -> AlertBatch {
    let mut batch = AlertBatch::default();
    for item in items {
        collect_item_alerts(item, now, expiry_horizon_days, &mut batch);
    }
    batch
}

pub(crate) fn collect_item_alerts(
    item: &InventoryItem,
    now: DateTime<Utc>,
    expiry_horizon_days: u32,
    batch: &mut AlertBatch,
) {
    match item.status() {
        StatusBucket::Critical => batch.alerts.push(AlertEvent::new(
            item,
            AlertRule::OutOfStock,
            format!("{} is out of stock (minimum {})", item.name, item.min_threshold.max(0)),
            now,
        )),
        StatusBucket::LowStock => batch.alerts.push(AlertEvent::new(
            item,
            AlertRule::BelowThreshold,
            format!(
                "{} is running low: {} on hand, minimum {}",
                item.name, item.quantity, item.min_threshold
            ),
            now,
        )),
        StatusBucket::Adequate => {}
    }

    let today = now.date_naive();
    match item.expiry() {
        Ok(expiry) => {
            let days = (expiry - today).num_days();
            if (0..=i64::from(expiry_horizon_days)).contains(&days) {
                batch.alerts.push(AlertEvent::new(
                    item,
                    AlertRule::NearExpiry,
                    expiry_message(&item.name, expiry, days),
                    now,
                ));
            }
        }
        Err(fault) => batch.faults.push(fault),
    }
}

fn expiry_message(name: &str, expiry: NaiveDate, days: i64) -> String {
    match days {
        0 => format!("{name} expires today ({expiry})"),
        1 => format!("{name} expires tomorrow ({expiry})"),
        n => format!("{name} expires in {n} days ({expiry})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::FaultKind;
    use crate::item::Category;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 9, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, quantity: i64, min_threshold: i64, expiry: NaiveDate) -> InventoryItem {
        InventoryItem::new(name, Category::Prescription, FacilityId::from_u128(1))
            .with_stock(quantity, min_threshold)
            .with_expiry_date(expiry)
    }

    #[test]
    fn adequate_item_expiring_soon_yields_single_expiring_alert() {
        let items = vec![item("Metformin 850mg", 50, 10, date(2026, 1, 15))];
        let batch = derive_alerts(&items, now(), 30);

        assert_eq!(batch.alerts.len(), 1);
        assert!(batch.faults.is_empty());
        let alert = &batch.alerts[0];
        assert_eq!(alert.severity, AlertSeverity::Expiring);
        assert_eq!(alert.rule, AlertRule::NearExpiry);
        assert_eq!(alert.generated_at, now());
        assert_eq!(alert.message, "Metformin 850mg expires in 14 days (2026-01-15)");
    }

    #[test]
    fn critical_and_expiring_yields_two_alerts_stock_first() {
        let items = vec![item("Salbutamol inhaler", 0, 10, date(2026, 1, 10))];
        let batch = derive_alerts(&items, now(), 30);

        let severities: Vec<_> = batch.alerts.iter().map(|a| a.severity).collect();
        assert_eq!(severities, vec![AlertSeverity::Critical, AlertSeverity::Expiring]);
    }

    #[test]
    fn low_stock_yields_warning() {
        let items = vec![item("Lisinopril 10mg", 4, 20, date(2027, 6, 1))];
        let batch = derive_alerts(&items, now(), 30);

        assert_eq!(batch.alerts.len(), 1);
        assert_eq!(batch.alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(
            batch.alerts[0].message,
            "Lisinopril 10mg is running low: 4 on hand, minimum 20"
        );
    }

    #[test]
    fn adequate_and_far_from_expiry_yields_nothing() {
        let items = vec![item("Cetirizine 10mg", 100, 20, date(2026, 12, 31))];
        let batch = derive_alerts(&items, now(), 30);
        assert_eq!(batch, AlertBatch::default());
    }

    #[test]
    fn horizon_bounds_are_inclusive_and_expired_is_excluded() {
        let items = vec![
            item("today", 100, 1, date(2026, 1, 1)),
            item("edge", 100, 1, date(2026, 1, 31)),
            item("past edge", 100, 1, date(2026, 2, 1)),
            item("expired", 100, 1, date(2025, 12, 31)),
        ];
        let batch = derive_alerts(&items, now(), 30);

        let names: Vec<_> = batch.alerts.iter().map(|a| a.item_name.as_str()).collect();
        assert_eq!(names, vec!["today", "edge"]);
        assert_eq!(batch.alerts[0].message, "today expires today (2026-01-01)");
    }

    #[test]
    fn zero_horizon_only_flags_same_day() {
        let items = vec![
            item("a", 100, 1, date(2026, 1, 1)),
            item("b", 100, 1, date(2026, 1, 2)),
        ];
        let batch = derive_alerts(&items, now(), 0);
        assert_eq!(batch.alerts.len(), 1);
        assert_eq!(batch.alerts[0].item_name, "a");
    }

    #[test]
    fn preserves_input_order() {
        let items = vec![
            item("z", 0, 10, date(2027, 1, 1)),
            item("a", 5, 10, date(2027, 1, 1)),
            item("m", 50, 10, date(2026, 1, 5)),
        ];
        let batch = derive_alerts(&items, now(), 30);
        let names: Vec<_> = batch.alerts.iter().map(|a| a.item_name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn malformed_expiry_is_reported_without_aborting() {
        let broken = InventoryItem::new("Warfarin 5mg", Category::Prescription, FacilityId::from_u128(1))
            .with_stock(0, 10)
            .with_raw_expiry_date("31/01/2026");
        let items = vec![broken.clone(), item("Aspirin 81mg", 50, 10, date(2026, 1, 20))];
        let batch = derive_alerts(&items, now(), 30);

        assert_eq!(batch.faults.len(), 1);
        assert_eq!(batch.faults[0].item_id, broken.id);
        assert_eq!(batch.faults[0].kind.tag(), "InvalidExpiryDate");
        // Stock alert for the broken item, expiry alert for the healthy one.
        assert_eq!(batch.alerts.len(), 2);
        assert_eq!(batch.alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(batch.alerts[1].severity, AlertSeverity::Expiring);
    }

    #[test]
    fn missing_expiry_is_reported() {
        let undated = InventoryItem::new("Gauze pads", Category::Otc, FacilityId::from_u128(1))
            .with_stock(100, 10);
        let batch = derive_alerts(&vec![undated], now(), 30);
        assert!(batch.alerts.is_empty());
        assert_eq!(batch.faults[0].kind, FaultKind::InvalidExpiryDate { raw: None });
    }

    #[test]
    fn alert_count_is_bounded_by_twice_input() {
        let items: Vec<_> = (0..10)
            .map(|i| item("x", i % 3, 2, date(2026, 1, 1 + (i as u32))))
            .collect();
        let batch = derive_alerts(&items, now(), 30);
        assert!(batch.alerts.len() <= 2 * items.len());
        for it in &items {
            assert!(batch.for_item(it.id).count() <= 2);
        }
    }

    #[test]
    fn serializes_severity_lowercase() {
        let items = vec![item("Morphine 10mg", 1, 5, date(2030, 1, 1))];
        let batch = derive_alerts(&items, now(), 30);
        let json = serde_json::to_value(&batch.alerts[0]).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["rule"], "BelowThreshold");
    }
}
