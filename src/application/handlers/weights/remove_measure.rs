//! RemoveMeasureHandler - Command handler for removing a key result from an objective.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::ObjectiveId;
use crate::domain::weighting::{
    BalanceReport, RebalanceStrategy, RebalanceTrigger, WeightEngine, WeightedItem,
    WeightsRebalanced,
};
use crate::ports::{EventPublisher, SiblingSetRepository};

use super::shared::{load_existing, position_of, publish_rebalanced};
use super::WeightCommandError;

/// Command to remove a measure from an objective's sibling set.
#[derive(Debug, Clone)]
pub struct RemoveMeasureCommand {
    pub objective_id: ObjectiveId,
    pub measure_id: String,
}

/// Result of successfully removing a measure.
#[derive(Debug, Clone)]
pub struct RemoveMeasureResult {
    /// The measure as it was before removal.
    pub removed: WeightedItem,
    /// The persisted sibling set.
    pub items: Vec<WeightedItem>,
    /// Balance state of the persisted set.
    pub balance: BalanceReport,
    /// The emitted event.
    pub event: WeightsRebalanced,
}

/// Handler for removing measures.
pub struct RemoveMeasureHandler {
    repository: Arc<dyn SiblingSetRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    engine: WeightEngine,
    strategy: RebalanceStrategy,
}

impl RemoveMeasureHandler {
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

    pub async fn handle(
        &self,
        cmd: RemoveMeasureCommand,
    ) -> Result<RemoveMeasureResult, WeightCommandError> {
        let mut items = load_existing(self.repository.as_ref(), &cmd.objective_id).await?;
        let position = position_of(&items, &cmd.objective_id, &cmd.measure_id)?;

        let removed = items.remove(position);
        let items = self.engine.rebalance(&items, self.strategy);

        self.repository.save(&cmd.objective_id, &items).await?;

        let event = publish_rebalanced(
            self.event_publisher.as_ref(),
            cmd.objective_id,
            RebalanceTrigger::MeasureRemoved,
            self.strategy,
            &items,
        )
        .await?;

        let balance = self.engine.describe_balance(&items);
        info!(
            objective_id = %cmd.objective_id,
            measure_id = %cmd.measure_id,
            remaining = items.len(),
            total = balance.total,
            "Measure removed"
        );

        Ok(RemoveMeasureResult {
            removed,
            items,
            balance,
            event,
        })
    }
}
