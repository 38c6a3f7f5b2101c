use pharmawatch_core::FacilityId;

use crate::result::{AiError, AiResult};

/// A facility-scoped AI inference unit.
///
/// Inputs are provided by callers (infra/monitor); this crate stays
/// storage-agnostic.
pub trait AiJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;

    /// The facility this job belongs to.
    fn facility_id(&self) -> FacilityId;

    /// The input snapshot the job will run inference on.
    fn input(&self) -> &Self::Input;

    /// Execute inference and return an AI result.
    ///
    /// Must not mutate inventory state.
    fn run(&self) -> Result<AiResult, AiError>;
}
