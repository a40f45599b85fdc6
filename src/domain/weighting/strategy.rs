//! Rebalance strategy - which engine operation restores a sibling set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a caller restores balance after a sibling set changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebalanceStrategy {
    /// Equal shares of the unlocked remainder.
    #[default]
    AutoBalance,
    /// Proportional rescale preserving relative weights.
    Normalize,
    /// Leave weights as they are.
    None,
}

impl RebalanceStrategy {
    /// Returns the wire name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            RebalanceStrategy::AutoBalance => "auto_balance",
            RebalanceStrategy::Normalize => "normalize",
            RebalanceStrategy::None => "none",
        }
    }
}

impl fmt::Display for RebalanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
