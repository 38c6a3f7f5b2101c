use serde_json::json;

use pharmawatch_core::FacilityId;

use crate::insight::InsightGenerator;
use crate::job::AiJob;
use crate::result::{AiError, AiResult};
use crate::scheduler::FacilitySnapshot;

/// Runs an insight generator over one facility's snapshot.
///
/// Score is the number of insights produced; confidence is their mean
/// confidence (1.0 when there is nothing to say).
#[derive(Debug, Clone)]
pub struct InventoryInsightJob<G> {
    facility_id: FacilityId,
    input: FacilitySnapshot,
    generator: G,
}

impl<G: InsightGenerator> InventoryInsightJob<G> {
    pub fn new(facility_id: FacilityId, input: FacilitySnapshot, generator: G) -> Self {
        Self {
            facility_id,
            input,
            generator,
        }
    }
}

impl<G> AiJob for InventoryInsightJob<G>
where
    G: InsightGenerator + 'static,
{
    type Input = FacilitySnapshot;

    fn facility_id(&self) -> FacilityId {
        self.facility_id
    }

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<AiResult, AiError> {
        if self.input.facility_id != self.facility_id {
            return Err(AiError::InvalidInput(
                "facility_id mismatch between job and snapshot".to_string(),
            ));
        }

        let foreign = self.input.foreign_items();
        if foreign > 0 {
            return Err(AiError::InvalidInput(format!(
                "snapshot contains {foreign} record(s) from other facilities"
            )));
        }

        let insights = self.generator.generate_insights(&self.input.items)?;

        let score = insights.len() as f64;
        let confidence = if insights.is_empty() {
            1.0
        } else {
            insights.iter().map(|i| i.confidence).sum::<f64>() / score
        };

        Ok(AiResult::new(score, confidence)
            .with_explanation(format!(
                "generated {} insight(s) from {} inventory record(s) using {}",
                insights.len(),
                self.input.items.len(),
                self.generator.name()
            ))
            .with_metadata(json!({
                "kind": "inventory.insights",
                "facility_id": self.facility_id.to_string(),
                "generator": self.generator.name(),
                "insights": insights,
            })))
    }
}
