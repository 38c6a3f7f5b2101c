use serde::{Deserialize, Serialize};

use pharmawatch_core::FacilityId;

use crate::item::{Category, InventoryItem};
use crate::status::StatusBucket;

/// Inventory table filter. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    /// Case-insensitive substring of the item name.
    pub search: Option<String>,
    pub category: Option<Category>,
    pub status: Option<StatusBucket>,
    pub facility: Option<FacilityId>,
}

impl InventoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term.trim().to_lowercase())
        };
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn status(mut self, status: StatusBucket) -> Self {
        self.status = Some(status);
        self
    }

    pub fn facility(mut self, facility: FacilityId) -> Self {
        self.facility = Some(facility);
        self
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(term) = &self.search {
            if !item.name.to_lowercase().contains(&term.to_lowercase()) {
                return false;
            }
        }
        self.category.is_none_or(|c| c == item.category)
            && self.facility.is_none_or(|f| f == item.facility)
            && self.status.is_none_or(|s| s == item.status())
    }

    /// Matching items, in input order.
    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}
