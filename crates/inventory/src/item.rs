use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use pharmawatch_core::{Entity, FacilityId, ItemId};

use crate::fault::{FaultKind, ItemFault};
use crate::status::{StatusBucket, classify};

/// Regulatory category of a stocked product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Over-the-counter.
    #[serde(rename = "OTC")]
    Otc,
    Prescription,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Otc => "OTC",
            Category::Prescription => "Prescription",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inventory record as held by the Record Store.
///
/// Counts are signed and the expiry date is kept in its stored string form so
/// that malformed upstream documents can be represented and reported instead of
/// failing deserialization of the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub quantity: i64,
    pub min_threshold: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub facility: FacilityId,
}

impl InventoryItem {
    /// Build a record with a fresh identifier, no stock and no expiry date.
    pub fn new(name: impl Into<String>, category: Category, facility: FacilityId) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            category,
            quantity: 0,
            min_threshold: 0,
            expiry_date: None,
            facility,
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    pub fn with_stock(mut self, quantity: i64, min_threshold: i64) -> Self {
        self.quantity = quantity;
        self.min_threshold = min_threshold;
        self
    }

    pub fn with_expiry_date(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    /// Set the expiry date exactly as the store would hand it over (may be malformed).
    pub fn with_raw_expiry_date(mut self, raw: impl Into<String>) -> Self {
        self.expiry_date = Some(raw.into());
        self
    }

    pub fn status(&self) -> StatusBucket {
        classify(self)
    }

    /// Stock counts are expected to be non-negative.
    pub fn has_valid_quantities(&self) -> bool {
        self.quantity >= 0 && self.min_threshold >= 0
    }

    pub(crate) fn quantity_fault(&self) -> Option<ItemFault> {
        if self.has_valid_quantities() {
            return None;
        }
        Some(ItemFault::new(
            self,
            FaultKind::InvalidQuantity {
                quantity: self.quantity,
                min_threshold: self.min_threshold,
            },
        ))
    }

    /// Parsed expiry date.
    pub fn expiry(&self) -> Result<NaiveDate, ItemFault> {
        self.expiry_date
            .as_deref()
            .and_then(parse_expiry_date)
            .ok_or_else(|| {
                ItemFault::new(
                    self,
                    FaultKind::InvalidExpiryDate {
                        raw: self.expiry_date.clone(),
                    },
                )
            })
    }

    /// Whole calendar days from `today` until expiry (negative once expired).
    pub fn days_until_expiry(&self, today: NaiveDate) -> Result<i64, ItemFault> {
        Ok((self.expiry()? - today).num_days())
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Parse a stored expiry date.
///
/// Accepts a plain ISO date (`2026-01-15`) or an RFC 3339 timestamp, in which
/// case the UTC calendar date is used.
pub fn parse_expiry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}
