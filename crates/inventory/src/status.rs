use serde::{Deserialize, Serialize};

use pharmawatch_core::ValueObject;

use crate::item::InventoryItem;

/// Stock status derived from quantity vs. reorder threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusBucket {
    Adequate,
    #[serde(rename = "Low Stock")]
    LowStock,
    Critical,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 3] = [
        StatusBucket::Adequate,
        StatusBucket::LowStock,
        StatusBucket::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusBucket::Adequate => "Adequate",
            StatusBucket::LowStock => "Low Stock",
            StatusBucket::Critical => "Critical",
        }
    }

    pub fn needs_attention(self) -> bool {
        !matches!(self, StatusBucket::Adequate)
    }
}

impl core::fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl ValueObject for StatusBucket {}

/// Classify one record. First matching rule wins:
///
/// 1. no stock (`quantity <= 0`) → `Critical`
/// 2. `quantity < min_threshold` → `Low Stock`
/// 3. otherwise → `Adequate`
///
/// Negative quantities are malformed but classify as `Critical`; a negative
/// threshold behaves like zero.
pub fn classify(item: &InventoryItem) -> StatusBucket {
    classify_levels(item.quantity, item.min_threshold)
}

pub fn classify_levels(quantity: i64, min_threshold: i64) -> StatusBucket {
    if quantity <= 0 {
        StatusBucket::Critical
    } else if quantity < min_threshold {
        StatusBucket::LowStock
    } else {
        StatusBucket::Adequate
    }
}
