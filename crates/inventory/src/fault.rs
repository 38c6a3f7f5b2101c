//! Per-item faults.
//!
//! A fault on one record never aborts evaluation of the rest of the snapshot;
//! faults are collected next to the otherwise-valid results and the caller
//! decides whether to surface them.

use serde::{Deserialize, Serialize};

use pharmawatch_core::{DomainError, ItemId};

use crate::item::InventoryItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum FaultKind {
    /// Expiry date missing or unparseable.
    InvalidExpiryDate { raw: Option<String> },
    /// Negative stock count or reorder threshold.
    InvalidQuantity { quantity: i64, min_threshold: i64 },
}

impl FaultKind {
    pub fn tag(&self) -> &'static str {
        match self {
            FaultKind::InvalidExpiryDate { .. } => "InvalidExpiryDate",
            FaultKind::InvalidQuantity { .. } => "InvalidQuantity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFault {
    pub item_id: ItemId,
    pub item_name: String,
    #[serde(flatten)]
    pub kind: FaultKind,
}

impl ItemFault {
    pub(crate) fn new(item: &InventoryItem, kind: FaultKind) -> Self {
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            kind,
        }
    }
}

impl core::fmt::Display for ItemFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&DomainError::from(self.clone()), f)
    }
}

impl From<ItemFault> for DomainError {
    fn from(fault: ItemFault) -> Self {
        let item = fault.item_id.to_string();
        match fault.kind {
            FaultKind::InvalidExpiryDate { raw } => match raw {
                Some(raw) => DomainError::invalid_expiry_date(item, format!("unparseable value {raw:?}")),
                None => DomainError::invalid_expiry_date(item, "missing"),
            },
            FaultKind::InvalidQuantity {
                quantity,
                min_threshold,
            } => DomainError::invalid_quantity(item, quantity, min_threshold),
        }
    }
}
