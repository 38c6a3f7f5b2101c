use serde::{Deserialize, Serialize};

use pharmawatch_inventory::InventoryItem;

use crate::result::AiError;

/// One dashboard insight card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub detail: String,
    /// Confidence in \[0, 1\].
    pub confidence: f64,
}

impl Insight {
    pub fn new(title: impl Into<String>, detail: impl Into<String>, confidence: f64) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Pluggable insight capability.
pub trait InsightGenerator: Send + Sync {
    /// Short identifier recorded in job metadata.
    fn name(&self) -> &'static str;

    fn generate_insights(&self, items: &[InventoryItem]) -> Result<Vec<Insight>, AiError>;
}

impl<G> InsightGenerator for std::sync::Arc<G>
where
    G: InsightGenerator + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn generate_insights(&self, items: &[InventoryItem]) -> Result<Vec<Insight>, AiError> {
        (**self).generate_insights(items)
    }
}
