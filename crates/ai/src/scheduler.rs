use serde::{Deserialize, Serialize};

use pharmawatch_core::FacilityId;
use pharmawatch_inventory::InventoryItem;

use crate::job::AiJob;
use crate::result::{AiError, AiResult};

/// Read-only inventory snapshot for one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySnapshot {
    pub facility_id: FacilityId,
    pub items: Vec<InventoryItem>,
}

impl FacilitySnapshot {
    pub fn new(facility_id: FacilityId, items: Vec<InventoryItem>) -> Self {
        Self { facility_id, items }
    }

    /// Records in the snapshot that belong to another facility.
    pub fn foreign_items(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.facility != self.facility_id)
            .count()
    }
}

/// Facility scope for execution.
///
/// - `Any`: run jobs for any facility (organisation-wide dashboards).
/// - `Facility`: only accept jobs for the specified facility.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FacilityScope {
    Any,
    Facility(FacilityId),
}

impl FacilityScope {
    pub fn allows(&self, facility_id: FacilityId) -> bool {
        match self {
            FacilityScope::Any => true,
            FacilityScope::Facility(f) => *f == facility_id,
        }
    }
}

/// Scheduler/executor for AI jobs.
pub trait AiScheduler: Send + Sync + 'static {
    fn scope(&self) -> FacilityScope;

    fn run<J: AiJob>(&self, job: J) -> Result<AiResult, AiError> {
        if !self.scope().allows(job.facility_id()) {
            return Err(AiError::InvalidInput(
                "facility scope violation (job facility not allowed by scheduler)".to_string(),
            ));
        }
        job.run()
    }
}

/// Simple synchronous scheduler that runs jobs immediately in-process.
#[derive(Debug, Copy, Clone)]
pub struct LocalAiScheduler {
    scope: FacilityScope,
}

impl LocalAiScheduler {
    pub fn new(scope: FacilityScope) -> Self {
        Self { scope }
    }

    pub fn for_facility(facility_id: FacilityId) -> Self {
        Self::new(FacilityScope::Facility(facility_id))
    }
}

impl AiScheduler for LocalAiScheduler {
    fn scope(&self) -> FacilityScope {
        self.scope
    }
}
