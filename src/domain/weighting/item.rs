//! Weighted item - one sub-measure's share of its parent objective.

use serde::{Deserialize, Deserializer, Serialize};

/// A sub-measure carrying a relative importance weight in percentage points.
///
/// A missing or `null` weight deserializes to `0.0`. Non-finite weights are
/// treated as `0.0` by every engine operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedItem {
    /// Opaque identifier, unique within one sibling set.
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_weight")]
    pub weight: f64,
    /// Locked items are never touched by automatic redistribution.
    #[serde(default)]
    pub is_weight_locked: bool,
}

impl WeightedItem {
    /// Creates an unlocked item.
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            is_weight_locked: false,
        }
    }

    /// Creates a locked item.
    pub fn locked(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            is_weight_locked: true,
        }
    }

    /// Returns the weight used for arithmetic: non-finite values count as zero.
    pub fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() {
            self.weight
        } else {
            0.0
        }
    }

    /// Returns whether automatic redistribution may change this item.
    pub fn is_adjustable(&self) -> bool {
        !self.is_weight_locked
    }
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Returns a copy of the sibling set with every weight replaced by its effective weight.
///
/// Every public engine operation starts here.
pub(crate) fn coerce_items(items: &[WeightedItem]) -> Vec<WeightedItem> {
    items
        .iter()
        .map(|item| WeightedItem {
            weight: item.effective_weight(),
            ..item.clone()
        })
        .collect()
}

/// Sums weights of already-coerced items.
pub(crate) fn sum_weights<'a>(items: impl IntoIterator<Item = &'a WeightedItem>) -> f64 {
    items.into_iter().map(|item| item.weight).sum()
}
