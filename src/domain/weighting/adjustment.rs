//! Suggested adjustment - one row of a normalize preview.

use serde::{Deserialize, Serialize};

use super::engine::ADJUSTMENT_THRESHOLD;
use super::WeightedItem;

/// The change `normalize` would make to a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAdjustment {
    pub item_id: String,
    pub current_weight: f64,
    pub suggested_weight: f64,
    /// Always `suggested_weight - current_weight`.
    pub adjustment: f64,
}

impl SuggestedAdjustment {
    /// Creates an adjustment from a before/after pair.
    pub fn new(item_id: impl Into<String>, current_weight: f64, suggested_weight: f64) -> Self {
        Self {
            item_id: item_id.into(),
            current_weight,
            suggested_weight,
            adjustment: suggested_weight - current_weight,
        }
    }

    /// Returns whether the suggestion raises the item's weight.
    pub fn is_increase(&self) -> bool {
        self.adjustment > 0.0
    }

    /// Pairs up a set before and after an engine call, keeping items that moved
    /// by more than 0.01. Non-finite `before` weights read as zero.
    pub fn diff(before: &[WeightedItem], after: &[WeightedItem]) -> Vec<Self> {
        before
            .iter()
            .zip(after)
            .map(|(b, a)| Self::new(&b.id, b.effective_weight(), a.weight))
            .filter(|adj| adj.adjustment.abs() > ADJUSTMENT_THRESHOLD)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_is_difference() {
        let adj = SuggestedAdjustment::new("kr-1", 30.0, 35.29);
        assert!((adj.adjustment - 5.29).abs() < 1e-9);
        assert!(adj.is_increase());
    }

    #[test]
    fn negative_adjustment_is_decrease() {
        let adj = SuggestedAdjustment::new("kr-1", 60.0, 45.0);
        assert_eq!(adj.adjustment, -15.0);
        assert!(!adj.is_increase());
    }

    #[test]
    fn diff_skips_items_that_did_not_move() {
        let before = vec![WeightedItem::locked("a", 40.0), WeightedItem::new("b", 10.0)];
        let after = vec![WeightedItem::locked("a", 40.0), WeightedItem::new("b", 60.0)];

        let diff = SuggestedAdjustment::diff(&before, &after);

        assert_eq!(diff, vec![SuggestedAdjustment::new("b", 10.0, 60.0)]);
    }

    #[test]
    fn diff_ignores_moves_at_the_threshold() {
        let before = vec![WeightedItem::new("a", 50.0), WeightedItem::new("b", 50.0)];
        let after = vec![WeightedItem::new("a", 50.01), WeightedItem::new("b", 49.5)];

        let diff = SuggestedAdjustment::diff(&before, &after);

        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].item_id, "b");
    }

    #[test]
    fn diff_reads_non_finite_before_as_zero() {
        let before = vec![WeightedItem::new("a", f64::NAN)];
        let after = vec![WeightedItem::new("a", 100.0)];

        let diff = SuggestedAdjustment::diff(&before, &after);

        assert_eq!(diff[0].current_weight, 0.0);
        assert_eq!(diff[0].adjustment, 100.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(SuggestedAdjustment::new("kr-1", 10.0, 20.0)).unwrap();
        assert_eq!(json["itemId"], "kr-1");
        assert_eq!(json["currentWeight"], 10.0);
        assert_eq!(json["suggestedWeight"], 20.0);
        assert_eq!(json["adjustment"], 10.0);
    }
}
