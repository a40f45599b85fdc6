//! Property-based invariant tests for the weight engine.
//!
//! These tests verify invariants that must hold for any sibling set:
//!
//! 1. Normalize is idempotent.
//! 2. Normalize of an unbalanced set with an unlocked item totals exactly 100.
//! 3. A lone item always becomes 100, locked or not.
//! 4. Locked weights never move in sets of two or more.
//! 5. All-locked sets are returned unchanged.
//! 6. Auto-balance gives every unlocked item round2((100 - locked) / unlocked).
//! 7. Suggested adjustments agree with normalize.
//! 8. Inputs are never mutated.
//! 9. Non-finite weights count as zero.
//! 10. Zero unlocked weights beside locked ones still reach exactly 100.

use objective_weights::domain::weighting::{round_to_hundredths, WeightEngine, WeightedItem};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn build(specs: Vec<(f64, bool)>) -> Vec<WeightedItem> {
    specs
        .into_iter()
        .enumerate()
        .map(|(idx, (weight, locked))| WeightedItem {
            id: format!("kr-{}", idx),
            weight,
            is_weight_locked: locked,
        })
        .collect()
}

/// Ordinary weights mixed with zero, subnormal and near-zero values.
fn edge_weight() -> impl Strategy<Value = f64> {
    prop_oneof![
        6 => 0.0f64..100.0,
        1 => Just(0.0),
        1 => Just(1e-310),
        1 => Just(f64::MIN_POSITIVE),
        1 => Just(5e-324),
        1 => Just(1e-12),
    ]
}

fn sibling_set() -> impl Strategy<Value = Vec<WeightedItem>> {
    prop::collection::vec((edge_weight(), any::<bool>()), 2..8).prop_map(build)
}

fn unlocked_set() -> impl Strategy<Value = Vec<WeightedItem>> {
    prop::collection::vec(edge_weight(), 2..8)
        .prop_map(|weights| build(weights.into_iter().map(|w| (w, false)).collect()))
}

fn locked_set() -> impl Strategy<Value = Vec<WeightedItem>> {
    prop::collection::vec(0.0f64..100.0, 2..8)
        .prop_map(|weights| build(weights.into_iter().map(|w| (w, true)).collect()))
}

/// Locked weights first, then unlocked items that all weigh zero.
fn zero_unlocked_set() -> impl Strategy<Value = (usize, Vec<WeightedItem>)> {
    (
        prop::collection::vec(0.0f64..100.0, 1..4),
        1usize..4,
    )
        .prop_map(|(locked, zeros)| {
            let locked_count = locked.len();
            let specs = locked
                .into_iter()
                .map(|w| (w, true))
                .chain(std::iter::repeat((0.0, false)).take(zeros))
                .collect();
            (locked_count, build(specs))
        })
}

fn weight_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0f64..1000.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn total(items: &[WeightedItem]) -> f64 {
    WeightEngine::total_weight(items)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Normalize is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_is_idempotent(items in sibling_set()) {
        let engine = WeightEngine::new();
        let once = engine.normalize(&items);
        let twice = engine.normalize(&once);
        prop_assert_eq!(twice, once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Exact sum after normalize
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_totals_exactly_one_hundred(items in sibling_set()) {
        let engine = WeightEngine::new();
        prop_assume!(items.iter().any(|i| !i.is_weight_locked));
        prop_assume!(!engine.is_balanced(&items));

        let result = engine.normalize(&items);
        prop_assert!(
            (total(&result) - 100.0).abs() <= 1e-9,
            "total {} for {:?}",
            total(&result),
            result
        );
    }

    #[test]
    fn normalize_of_unlocked_set_is_balanced(items in unlocked_set()) {
        let engine = WeightEngine::new();
        prop_assert!(engine.is_balanced(&engine.normalize(&items)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Single-item rule
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lone_item_takes_full_weight(weight in weight_value(), locked in any::<bool>()) {
        let items = build(vec![(weight, locked)]);
        let engine = WeightEngine::new();

        for result in [WeightEngine::auto_balance(&items), engine.normalize(&items)] {
            prop_assert_eq!(result.len(), 1);
            prop_assert_eq!(result[0].weight, 100.0);
            prop_assert_eq!(result[0].is_weight_locked, locked);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Lock preservation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn locked_weights_never_move(items in sibling_set()) {
        let engine = WeightEngine::new();

        for result in [WeightEngine::auto_balance(&items), engine.normalize(&items)] {
            for (before, after) in items.iter().zip(&result) {
                prop_assert_eq!(&before.id, &after.id);
                if before.is_weight_locked {
                    prop_assert_eq!(before.weight, after.weight);
                    prop_assert!(after.is_weight_locked);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. All-locked no-op
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn all_locked_set_is_unchanged(items in locked_set()) {
        let engine = WeightEngine::new();
        prop_assert_eq!(&WeightEngine::auto_balance(&items), &items);
        prop_assert_eq!(&engine.normalize(&items), &items);
        prop_assert!(engine.suggested_adjustments(&items).is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Auto-balance equal split
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn auto_balance_splits_remainder_equally(items in sibling_set()) {
        let unlocked = items.iter().filter(|i| !i.is_weight_locked).count();
        prop_assume!(unlocked > 0);

        let locked_total: f64 = items
            .iter()
            .filter(|i| i.is_weight_locked)
            .map(|i| i.weight)
            .sum();
        let share = round_to_hundredths((100.0 - locked_total) / unlocked as f64);

        let result = WeightEngine::auto_balance(&items);
        for item in result.iter().filter(|i| !i.is_weight_locked) {
            prop_assert_eq!(item.weight, share);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Suggestions agree with normalize
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn suggestions_preview_normalize(items in sibling_set()) {
        let engine = WeightEngine::new();
        let normalized = engine.normalize(&items);
        let suggestions = engine.suggested_adjustments(&items);

        let moved: Vec<usize> = items
            .iter()
            .zip(&normalized)
            .enumerate()
            .filter(|(_, (before, after))| (after.weight - before.weight).abs() > 0.01)
            .map(|(idx, _)| idx)
            .collect();

        prop_assert_eq!(suggestions.len(), moved.len());
        for (suggestion, idx) in suggestions.iter().zip(moved) {
            prop_assert_eq!(&suggestion.item_id, &items[idx].id);
            prop_assert_eq!(suggestion.current_weight, items[idx].weight);
            prop_assert_eq!(suggestion.suggested_weight, normalized[idx].weight);
            prop_assert_eq!(
                suggestion.adjustment,
                suggestion.suggested_weight - suggestion.current_weight
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Inputs are never mutated
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn operations_leave_input_untouched(items in sibling_set()) {
        let snapshot = items.clone();
        let engine = WeightEngine::new();

        let _ = WeightEngine::auto_balance(&items);
        let _ = engine.normalize(&items);
        let _ = engine.suggested_adjustments(&items);
        let _ = engine.describe_balance(&items);

        prop_assert_eq!(items, snapshot);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Non-finite weights count as zero
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_finite_weights_never_leak(weights in prop::collection::vec(weight_value(), 2..8)) {
        let items = build(weights.into_iter().map(|w| (w, false)).collect());
        let engine = WeightEngine::new();

        prop_assert!(total(&items).is_finite());
        for result in [WeightEngine::auto_balance(&items), engine.normalize(&items)] {
            prop_assert!(result.iter().all(|i| i.weight.is_finite()));
        }
        prop_assert!(engine
            .suggested_adjustments(&items)
            .iter()
            .all(|s| s.adjustment.is_finite()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Zero unlocked weights beside locked ones
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_unlocked_items_absorb_the_remainder((locked_count, items) in zero_unlocked_set()) {
        let engine = WeightEngine::new();
        prop_assume!(!engine.is_balanced(&items));

        let result = engine.normalize(&items);
        prop_assert!(
            (total(&result) - 100.0).abs() <= 1e-9,
            "total {} for {:?}",
            total(&result),
            result
        );

        let locked_total: f64 = items[..locked_count].iter().map(|i| i.weight).sum();
        prop_assert!((result[locked_count].weight - (100.0 - locked_total)).abs() <= 1e-9);
        for item in &result[locked_count + 1..] {
            prop_assert_eq!(item.weight, 0.0);
        }
        for (before, after) in items[..locked_count].iter().zip(&result) {
            prop_assert_eq!(before.weight, after.weight);
        }
    }
}
