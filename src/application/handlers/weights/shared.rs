//! Steps shared by the weight handlers.

use crate::domain::foundation::{EventId, ObjectiveId, SerializableDomainEvent, Timestamp};
use crate::domain::weighting::{
    RebalanceStrategy, RebalanceTrigger, WeightEngine, WeightedItem, WeightsRebalanced,
};
use crate::ports::{EventPublisher, SiblingSetRepository};

use super::WeightCommandError;

/// Loads a sibling set that must already exist.
pub(super) async fn load_existing(
    repository: &dyn SiblingSetRepository,
    objective_id: &ObjectiveId,
) -> Result<Vec<WeightedItem>, WeightCommandError> {
    repository
        .load(objective_id)
        .await?
        .ok_or(WeightCommandError::ObjectiveNotFound(*objective_id))
}

/// Finds a measure's position, failing with `MeasureNotFound`.
pub(super) fn position_of(
    items: &[WeightedItem],
    objective_id: &ObjectiveId,
    measure_id: &str,
) -> Result<usize, WeightCommandError> {
    items
        .iter()
        .position(|item| item.id == measure_id)
        .ok_or_else(|| WeightCommandError::MeasureNotFound {
            objective_id: *objective_id,
            measure_id: measure_id.to_string(),
        })
}

/// Builds and publishes a `WeightsRebalanced` event for a persisted set.
pub(super) async fn publish_rebalanced(
    publisher: &dyn EventPublisher,
    objective_id: ObjectiveId,
    trigger: RebalanceTrigger,
    strategy: RebalanceStrategy,
    items: &[WeightedItem],
) -> Result<WeightsRebalanced, WeightCommandError> {
    let event = WeightsRebalanced {
        event_id: EventId::new(),
        objective_id,
        trigger,
        strategy,
        weights: items.to_vec(),
        total: WeightEngine::total_weight(items),
        occurred_at: Timestamp::now(),
    };

    publisher.publish(event.to_envelope()?).await?;
    Ok(event)
}
