//! Balance report - advisory validation result for a sibling set.

use serde::{Deserialize, Serialize};

use super::engine::TARGET_TOTAL;

/// Result of checking whether a sibling set sums to 100%.
///
/// `is_valid == false` is a warning to surface, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    pub is_valid: bool,
    pub message: String,
    pub total: f64,
}

impl BalanceReport {
    /// Builds a report for a total already judged against the tolerance.
    pub(crate) fn from_total(total: f64, is_valid: bool) -> Self {
        let deviation = total - TARGET_TOTAL;
        let message = if is_valid {
            "Weights total 100%".to_string()
        } else if deviation > 0.0 {
            format!("Weights exceed 100% by {:.1}%", deviation)
        } else {
            format!("Weights are under 100% by {:.1}%", -deviation)
        };

        Self {
            is_valid,
            message,
            total,
        }
    }

    /// Signed distance from 100%: positive when over, negative when under.
    pub fn deviation(&self) -> f64 {
        self.total - TARGET_TOTAL
    }
}
