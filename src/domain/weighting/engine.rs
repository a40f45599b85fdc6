//! Weight Engine - balance checks, equal distribution and proportional normalization.

use tracing::debug;

use super::item::{coerce_items, sum_weights};
use super::rounding::round_to_hundredths;
use super::{BalanceReport, RebalanceStrategy, SuggestedAdjustment, Tolerance, WeightedItem};

/// The total every sibling set is driven toward, in percentage points.
pub const TARGET_TOTAL: f64 = 100.0;

/// Adjustments at or below this magnitude are not worth suggesting.
pub const ADJUSTMENT_THRESHOLD: f64 = 0.01;

/// Residuals at or below this are floating-point noise, not rounding slack.
const RESIDUAL_EPSILON: f64 = 1e-9;

/// Stateless weight balancing operations over one sibling set.
///
/// Every operation takes a snapshot and returns a new one; inputs are never
/// mutated and nothing is retained between calls. The only tunable is the
/// balance tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightEngine {
    tolerance: Tolerance,
}

impl WeightEngine {
    /// Creates an engine with the default tolerance of 0.01.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom balance tolerance.
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Returns the balance tolerance.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Sums all weights, counting missing or non-finite weights as zero.
    pub fn total_weight(items: &[WeightedItem]) -> f64 {
        sum_weights(&coerce_items(items))
    }

    /// Checks whether the set sums to 100 within this engine's tolerance.
    ///
    /// # Edge Cases
    /// - Empty set: total is 0, so never balanced
    pub fn is_balanced(&self, items: &[WeightedItem]) -> bool {
        Self::is_balanced_within(items, self.tolerance)
    }

    /// Checks whether the set sums to 100 within an explicit tolerance.
    pub fn is_balanced_within(items: &[WeightedItem], tolerance: Tolerance) -> bool {
        tolerance.admits(Self::total_weight(items) - TARGET_TOTAL)
    }

    /// Describes the balance state for display next to the weights.
    pub fn describe_balance(&self, items: &[WeightedItem]) -> BalanceReport {
        let total = Self::total_weight(items);
        BalanceReport::from_total(total, self.tolerance.admits(total - TARGET_TOTAL))
    }

    /// Splits whatever the locked items leave over equally among unlocked items.
    ///
    /// # Algorithm
    /// share = round2((100 - Σ locked) / count(unlocked))
    ///
    /// # Edge Cases
    /// - Empty set: returned unchanged
    /// - Single item: forced to 100, even when locked
    /// - All locked: returned unchanged
    /// - Locked total above 100: unlocked shares go negative and are not clamped
    pub fn auto_balance(items: &[WeightedItem]) -> Vec<WeightedItem> {
        let mut items = coerce_items(items);
        if items.len() <= 1 {
            return claim_whole(items);
        }

        let unlocked_count = items.iter().filter(|i| i.is_adjustable()).count();
        if unlocked_count == 0 {
            debug!(items = items.len(), "auto_balance skipped: every item is locked");
            return items;
        }

        let locked_total = sum_weights(items.iter().filter(|i| i.is_weight_locked));
        let remaining = TARGET_TOTAL - locked_total;
        if remaining < 0.0 {
            debug!(locked_total, "locked weights exceed 100%, unlocked shares will be negative");
        }

        let share = round_to_hundredths(remaining / unlocked_count as f64);
        for item in items.iter_mut().filter(|i| i.is_adjustable()) {
            item.weight = share;
        }

        items
    }

    /// Rescales unlocked weights so the set sums to exactly 100, keeping their ratios.
    ///
    /// # Algorithm
    /// 1. each unlocked weight becomes round2(weight / Σ unlocked × (100 - Σ locked)),
    ///    or round2(weight) when Σ unlocked <= 0
    /// 2. locked weights pass through
    /// 3. the rounding residual goes entirely to the largest unlocked item
    ///    (earliest wins ties)
    ///
    /// # Edge Cases
    /// - Empty set: returned unchanged
    /// - Single item: forced to 100, even when locked
    /// - Already balanced within tolerance: returned unchanged
    /// - All locked: returned unchanged
    /// - All unlocked weights zero: the first unlocked item absorbs the full remainder
    pub fn normalize(&self, items: &[WeightedItem]) -> Vec<WeightedItem> {
        self.normalize_coerced(coerce_items(items))
    }

    /// Previews what `normalize` would change, item by item.
    ///
    /// Only items that would move by more than 0.01 are listed, in input order.
    pub fn suggested_adjustments(&self, items: &[WeightedItem]) -> Vec<SuggestedAdjustment> {
        let current = coerce_items(items);
        let suggested = self.normalize_coerced(current.clone());
        SuggestedAdjustment::diff(&current, &suggested)
    }

    /// Applies the operation a strategy names.
    pub fn rebalance(&self, items: &[WeightedItem], strategy: RebalanceStrategy) -> Vec<WeightedItem> {
        match strategy {
            RebalanceStrategy::AutoBalance => Self::auto_balance(items),
            RebalanceStrategy::Normalize => self.normalize(items),
            RebalanceStrategy::None => coerce_items(items),
        }
    }

    fn normalize_coerced(&self, mut items: Vec<WeightedItem>) -> Vec<WeightedItem> {
        if items.len() <= 1 {
            return claim_whole(items);
        }

        if self.tolerance.admits(sum_weights(&items) - TARGET_TOTAL) {
            return items;
        }

        if !items.iter().any(|i| i.is_adjustable()) {
            debug!(items = items.len(), "normalize skipped: every item is locked");
            return items;
        }

        let locked_total = sum_weights(items.iter().filter(|i| i.is_weight_locked));
        let unlocked_total = sum_weights(items.iter().filter(|i| i.is_adjustable()));
        let target_unlocked_total = TARGET_TOTAL - locked_total;

        // Share first, then scale: `target / total` overflows for subnormal totals.
        for item in items.iter_mut().filter(|i| i.is_adjustable()) {
            let scaled = if unlocked_total > 0.0 {
                item.weight / unlocked_total * target_unlocked_total
            } else {
                item.weight
            };
            item.weight = round_to_hundredths(scaled);
        }

        let residual = TARGET_TOTAL - sum_weights(&items);
        if residual.abs() > RESIDUAL_EPSILON {
            if let Some(sink) = largest_adjustable(&items) {
                items[sink].weight += residual;
            }
        }

        items
    }
}

/// A lone item always owns the whole parent.
fn claim_whole(mut items: Vec<WeightedItem>) -> Vec<WeightedItem> {
    if let [only] = items.as_mut_slice() {
        only.weight = TARGET_TOTAL;
    }
    items
}

/// Index of the unlocked item with the largest weight, earliest on ties.
fn largest_adjustable(items: &[WeightedItem]) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_adjustable())
        .fold(None, |best: Option<(usize, f64)>, (idx, item)| match best {
            Some((_, weight)) if weight >= item.weight => best,
            _ => Some((idx, item.weight)),
        })
        .map(|(idx, _)| idx)
}
