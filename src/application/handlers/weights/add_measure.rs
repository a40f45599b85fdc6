//! AddMeasureHandler - Command handler for adding a key result to an objective.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{ObjectiveId, ValidationError};
use crate::domain::weighting::{
    BalanceReport, RebalanceStrategy, RebalanceTrigger, WeightEngine, WeightedItem,
    WeightsRebalanced,
};
use crate::ports::{EventPublisher, SiblingSetRepository};

use super::shared::publish_rebalanced;
use super::WeightCommandError;

/// Command to add a measure to an objective's sibling set.
#[derive(Debug, Clone)]
pub struct AddMeasureCommand {
    /// Objective the measure belongs to. Created on first add.
    pub objective_id: ObjectiveId,
    /// Identifier of the new measure, unique within the objective.
    pub measure_id: String,
    /// Initial weight; defaults to 0 before rebalancing.
    pub weight: Option<f64>,
    /// Whether the new measure's weight is locked.
    pub locked: bool,
}

/// Result of successfully adding a measure.
#[derive(Debug, Clone)]
pub struct AddMeasureResult {
    /// The persisted sibling set.
    pub items: Vec<WeightedItem>,
    /// Balance state of the persisted set.
    pub balance: BalanceReport,
    /// The emitted event.
    pub event: WeightsRebalanced,
}

/// Handler for adding measures.
pub struct AddMeasureHandler {
    repository: Arc<dyn SiblingSetRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    engine: WeightEngine,
    strategy: RebalanceStrategy,
}

impl AddMeasureHandler {
    pub fn new(
        repository: Arc<dyn SiblingSetRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        engine: WeightEngine,
        strategy: RebalanceStrategy,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            engine,
            strategy,
        }
    }

    pub async fn handle(&self, cmd: AddMeasureCommand) -> Result<AddMeasureResult, WeightCommandError> {
        // 1. Validate the identifier
        if cmd.measure_id.trim().is_empty() {
            return Err(ValidationError::empty_field("measure_id").into());
        }

        // 2. Load the current set; a new objective starts empty
        let mut items = self
            .repository
            .load(&cmd.objective_id)
            .await?
            .unwrap_or_default();

        if items.iter().any(|item| item.id == cmd.measure_id) {
            return Err(WeightCommandError::DuplicateMeasure {
                objective_id: cmd.objective_id,
                measure_id: cmd.measure_id,
            });
        }

        // 3. Append and rebalance
        items.push(WeightedItem {
            id: cmd.measure_id.clone(),
            weight: cmd.weight.unwrap_or(0.0),
            is_weight_locked: cmd.locked,
        });
        let items = self.engine.rebalance(&items, self.strategy);

        // 4. Persist
        self.repository.save(&cmd.objective_id, &items).await?;

        // 5. Publish
        let event = publish_rebalanced(
            self.event_publisher.as_ref(),
            cmd.objective_id,
            RebalanceTrigger::MeasureAdded,
            self.strategy,
            &items,
        )
        .await?;

        let balance = self.engine.describe_balance(&items);
        info!(
            objective_id = %cmd.objective_id,
            measure_id = %cmd.measure_id,
            strategy = %self.strategy,
            total = balance.total,
            "Measure added"
        );

        Ok(AddMeasureResult {
            items,
            balance,
            event,
        })
    }
}
