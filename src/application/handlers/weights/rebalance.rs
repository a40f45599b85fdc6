//! RebalanceHandler - Command handler for an explicit rebalance request.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::ObjectiveId;
use crate::domain::weighting::{
    BalanceReport, RebalanceStrategy, RebalanceTrigger, SuggestedAdjustment, WeightEngine,
    WeightedItem, WeightsRebalanced,
};
use crate::ports::{EventPublisher, SiblingSetRepository};

use super::shared::{load_existing, publish_rebalanced};
use super::WeightCommandError;

/// Command to rebalance an objective's measures with a chosen strategy.
#[derive(Debug, Clone)]
pub struct RebalanceCommand {
    pub objective_id: ObjectiveId,
    pub strategy: RebalanceStrategy,
}

/// Result of a rebalance.
#[derive(Debug, Clone)]
pub struct RebalanceResult {
    /// The persisted sibling set.
    pub items: Vec<WeightedItem>,
    /// Per-item changes that were applied.
    pub applied: Vec<SuggestedAdjustment>,
    /// Balance state of the persisted set.
    pub balance: BalanceReport,
    /// The emitted event.
    pub event: WeightsRebalanced,
}

/// Handler for explicit rebalances.
pub struct RebalanceHandler {
    repository: Arc<dyn SiblingSetRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    engine: WeightEngine,
}

impl RebalanceHandler {
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

    pub async fn handle(&self, cmd: RebalanceCommand) -> Result<RebalanceResult, WeightCommandError> {
        let before = load_existing(self.repository.as_ref(), &cmd.objective_id).await?;

        let items = self.engine.rebalance(&before, cmd.strategy);
        let applied = SuggestedAdjustment::diff(&before, &items);

        self.repository.save(&cmd.objective_id, &items).await?;

        let event = publish_rebalanced(
            self.event_publisher.as_ref(),
            cmd.objective_id,
            RebalanceTrigger::Manual,
            cmd.strategy,
            &items,
        )
        .await?;

        let balance = self.engine.describe_balance(&items);
        info!(
            objective_id = %cmd.objective_id,
            strategy = %cmd.strategy,
            changed = applied.len(),
            total = balance.total,
            "Weights rebalanced"
        );

        Ok(RebalanceResult {
            items,
            applied,
            balance,
            event,
        })
    }
}
