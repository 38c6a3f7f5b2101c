//! Aggregate health report over a snapshot.
//!
//! Percentages are rounded per bucket, independently, so they can sum to 99 or
//! 101. That drift is left as is; consumers that need a closed 100% must
//! normalise on their side.

use serde::{Deserialize, Serialize};

use pharmawatch_core::ValueObject;

use crate::item::InventoryItem;
use crate::status::{StatusBucket, classify};

/// One value per status bucket. All three buckets are always present.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerBucket<T> {
    #[serde(rename = "Adequate")]
    pub adequate: T,
    #[serde(rename = "Low Stock")]
    pub low_stock: T,
    #[serde(rename = "Critical")]
    pub critical: T,
}

impl<T: Copy> PerBucket<T> {
    pub fn get(&self, bucket: StatusBucket) -> T {
        match bucket {
            StatusBucket::Adequate => self.adequate,
            StatusBucket::LowStock => self.low_stock,
            StatusBucket::Critical => self.critical,
        }
    }

    pub fn get_mut(&mut self, bucket: StatusBucket) -> &mut T {
        match bucket {
            StatusBucket::Adequate => &mut self.adequate,
            StatusBucket::LowStock => &mut self.low_stock,
            StatusBucket::Critical => &mut self.critical,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatusBucket, T)> + '_ {
        StatusBucket::ALL.into_iter().map(|b| (b, self.get(b)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> PerBucket<U> {
        PerBucket {
            adequate: f(self.adequate),
            low_stock: f(self.low_stock),
            critical: f(self.critical),
        }
    }
}

impl<T: Copy> core::ops::Index<StatusBucket> for PerBucket<T> {
    type Output = T;

    fn index(&self, bucket: StatusBucket) -> &T {
        match bucket {
            StatusBucket::Adequate => &self.adequate,
            StatusBucket::LowStock => &self.low_stock,
            StatusBucket::Critical => &self.critical,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub total: u64,
    pub counts: PerBucket<u64>,
    /// Integer percentages in `[0, 100]`, rounded half away from zero.
    pub percentages: PerBucket<u8>,
}

impl AggregateReport {
    pub fn from_counts(counts: PerBucket<u64>) -> Self {
        let total = counts.adequate + counts.low_stock + counts.critical;
        Self {
            total,
            counts,
            percentages: counts.map(|c| percentage(c, total)),
        }
    }

    pub fn count(&self, bucket: StatusBucket) -> u64 {
        self.counts.get(bucket)
    }

    pub fn percentage(&self, bucket: StatusBucket) -> u8 {
        self.percentages.get(bucket)
    }

    /// Items that are not `Adequate`.
    pub fn attention_count(&self) -> u64 {
        self.counts.low_stock + self.counts.critical
    }
}

impl ValueObject for AggregateReport {}

/// Classify every item and tally the buckets.
///
/// Pure and order-independent; an empty snapshot yields all zeros.
pub fn aggregate<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> AggregateReport {
    let mut counts = PerBucket::<u64>::default();
    for item in items {
        *counts.get_mut(classify(item)) += 1;
    }
    AggregateReport::from_counts(counts)
}

/// `round(count / total * 100)` in exact integer arithmetic, 0 when `total == 0`.
pub(crate) fn percentage(count: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = u128::from(count.min(total));
    let total = u128::from(total);
    // floor((200c + t) / 2t) == round-half-up(100c / t) for non-negative c.
    ((200 * count + total) / (2 * total)) as u8
}
