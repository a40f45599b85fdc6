//! Weighting domain events.
//!
//! Published after a sibling set is persisted so that downstream rollups can
//! recompute parent progress from the new weights.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, ObjectiveId, Timestamp};

use super::{RebalanceStrategy, WeightedItem};

/// What caused a sibling set to be rebalanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebalanceTrigger {
    MeasureAdded,
    MeasureRemoved,
    Manual,
}

/// Published when an engine operation rewrote an objective's weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsRebalanced {
    pub event_id: EventId,
    pub objective_id: ObjectiveId,
    pub trigger: RebalanceTrigger,
    pub strategy: RebalanceStrategy,
    /// The persisted sibling set after rebalancing.
    pub weights: Vec<WeightedItem>,
    pub total: f64,
    pub occurred_at: Timestamp,
}

domain_event!(
    WeightsRebalanced,
    event_type = "weights.rebalanced.v1",
    aggregate_id = objective_id,
    aggregate_type = "Objective",
    occurred_at = occurred_at,
    event_id = event_id
);

/// Published when a user edits one measure's weight or lock by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsEdited {
    pub event_id: EventId,
    pub objective_id: ObjectiveId,
    pub measure_id: String,
    pub weight: f64,
    pub locked: bool,
    /// Whether the set still sums to 100 after the edit.
    pub is_balanced: bool,
    pub occurred_at: Timestamp,
}

domain_event!(
    WeightsEdited,
    event_type = "weights.edited.v1",
    aggregate_id = objective_id,
    aggregate_type = "Objective",
    occurred_at = occurred_at,
    event_id = event_id
);
