use serde::{Deserialize, Serialize};

use pharmawatch_core::ValueObject;

/// Expiry alerts fire this many days ahead unless configured otherwise.
pub const DEFAULT_EXPIRY_HORIZON_DAYS: u32 = 30;

/// Classifier tuning knobs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthConfig {
    pub expiry_horizon_days: u32,
}

impl HealthConfig {
    pub fn new() -> Self {
        Self {
            expiry_horizon_days: DEFAULT_EXPIRY_HORIZON_DAYS,
        }
    }

    pub fn with_expiry_horizon_days(mut self, days: u32) -> Self {
        self.expiry_horizon_days = days;
        self
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for HealthConfig {}
