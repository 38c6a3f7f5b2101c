//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (malformed
/// identifiers and records). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An inventory record carries a missing or unparseable expiry date.
    #[error("invalid expiry date on item {item}: {detail}")]
    InvalidExpiryDate { item: String, detail: String },

    /// An inventory record carries a negative quantity or reorder threshold.
    #[error("invalid quantity on item {item}: quantity={quantity}, min_threshold={min_threshold}")]
    InvalidQuantity {
        item: String,
        quantity: i64,
        min_threshold: i64,
    },
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_expiry_date(item: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidExpiryDate {
            item: item.into(),
            detail: detail.into(),
        }
    }

    pub fn invalid_quantity(item: impl Into<String>, quantity: i64, min_threshold: i64) -> Self {
        Self::InvalidQuantity {
            item: item.into(),
            quantity,
            min_threshold,
        }
    }

    /// Per-item faults are recoverable: the offending record is flagged and the
    /// rest of the snapshot is still evaluated.
    pub fn is_item_fault(&self) -> bool {
        matches!(
            self,
            Self::InvalidExpiryDate { .. } | Self::InvalidQuantity { .. }
        )
    }
}
