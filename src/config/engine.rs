//! Weight engine configuration

use serde::Deserialize;

use crate::domain::weighting::{RebalanceStrategy, Tolerance, WeightEngine};

use super::error::ValidationError;

/// Weight engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Maximum distance from 100 that still counts as balanced
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Strategy applied when a measure is added or removed
    #[serde(default)]
    pub membership_strategy: RebalanceStrategy,
}

impl EngineConfig {
    /// Build an engine from the configured tolerance
    pub fn engine(&self) -> Result<WeightEngine, ValidationError> {
        Tolerance::try_new(self.tolerance)
            .map(WeightEngine::with_tolerance)
            .map_err(|_| ValidationError::InvalidTolerance(self.tolerance))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            membership_strategy: RebalanceStrategy::default(),
        }
    }
}

fn default_tolerance() -> f64 {
    Tolerance::DEFAULT.value()
}
