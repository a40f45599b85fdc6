//! UpdateWeightHandler - Command handler for a manual weight or lock edit.
//!
//! The edit is stored exactly as the user made it. If it knocks the set out
//! of balance, the result carries the normalize preview so the caller can
//! offer a one-click fix through `RebalanceHandler`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{EventId, ObjectiveId, SerializableDomainEvent, Timestamp};
use crate::domain::weighting::{
    BalanceReport, SuggestedAdjustment, WeightEngine, WeightedItem, WeightsEdited,
};
use crate::ports::{EventPublisher, SiblingSetRepository};

use super::shared::{load_existing, position_of};
use super::WeightCommandError;

/// Command to edit one measure's weight and/or lock flag.
#[derive(Debug, Clone)]
pub struct UpdateWeightCommand {
    pub objective_id: ObjectiveId,
    pub measure_id: String,
    /// New weight, if changing.
    pub weight: Option<f64>,
    /// New lock flag, if changing.
    pub locked: Option<bool>,
}

/// Result of a manual edit.
#[derive(Debug, Clone)]
pub struct UpdateWeightResult {
    /// The persisted sibling set.
    pub items: Vec<WeightedItem>,
    /// Balance state after the edit.
    pub balance: BalanceReport,
    /// What normalize would change; empty when already balanced.
    pub suggestions: Vec<SuggestedAdjustment>,
    /// The emitted event.
    pub event: WeightsEdited,
}

/// Handler for manual weight edits.
pub struct UpdateWeightHandler {
    repository: Arc<dyn SiblingSetRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    engine: WeightEngine,
}

impl UpdateWeightHandler {
    pub fn new(
        repository: Arc<dyn SiblingSetRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        engine: WeightEngine,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateWeightCommand,
    ) -> Result<UpdateWeightResult, WeightCommandError> {
        let mut items = load_existing(self.repository.as_ref(), &cmd.objective_id).await?;
        let position = position_of(&items, &cmd.objective_id, &cmd.measure_id)?;

        let item = &mut items[position];
        if let Some(weight) = cmd.weight {
            item.weight = weight;
        }
        if let Some(locked) = cmd.locked {
            item.is_weight_locked = locked;
        }
        let edited = item.clone();

        self.repository.save(&cmd.objective_id, &items).await?;

        let balance = self.engine.describe_balance(&items);
        let suggestions = self.engine.suggested_adjustments(&items);

        let event = WeightsEdited {
            event_id: EventId::new(),
            objective_id: cmd.objective_id,
            weight: edited.effective_weight(),
            locked: edited.is_weight_locked,
            measure_id: edited.id,
            is_balanced: balance.is_valid,
            occurred_at: Timestamp::now(),
        };
        self.event_publisher.publish(event.to_envelope()?).await?;

        info!(
            objective_id = %cmd.objective_id,
            measure_id = %cmd.measure_id,
            weight = event.weight,
            locked = event.locked,
            "Measure weight edited"
        );
        if !balance.is_valid {
            debug!(
                objective_id = %cmd.objective_id,
                suggestions = suggestions.len(),
                "{}",
                balance.message
            );
        }

        Ok(UpdateWeightResult {
            items,
            balance,
            suggestions,
            event,
        })
    }
}
