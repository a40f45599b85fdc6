//! GetBalanceHandler - Query handler for an objective's current weight balance.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::ObjectiveId;
use crate::domain::weighting::{BalanceReport, SuggestedAdjustment, WeightEngine, WeightedItem};
use crate::ports::SiblingSetRepository;

use super::shared::load_existing;
use super::WeightCommandError;

/// Query for the balance state of one objective.
#[derive(Debug, Clone)]
pub struct GetBalanceQuery {
    pub objective_id: ObjectiveId,
}

/// Read model shown next to an objective's weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceView {
    pub items: Vec<WeightedItem>,
    pub balance: BalanceReport,
    pub suggestions: Vec<SuggestedAdjustment>,
}

/// Handler for balance queries. Never writes.
pub struct GetBalanceHandler {
    repository: Arc<dyn SiblingSetRepository>,
    engine: WeightEngine,
}

impl GetBalanceHandler {
    pub fn new(repository: Arc<dyn SiblingSetRepository>, engine: WeightEngine) -> Self {
        Self { repository, engine }
    }

    pub async fn handle(&self, query: GetBalanceQuery) -> Result<BalanceView, WeightCommandError> {
        let items = load_existing(self.repository.as_ref(), &query.objective_id).await?;

        let balance = self.engine.describe_balance(&items);
        let suggestions = self.engine.suggested_adjustments(&items);

        debug!(
            objective_id = %query.objective_id,
            total = balance.total,
            is_valid = balance.is_valid,
            "Balance queried"
        );

        Ok(BalanceView {
            items,
            balance,
            suggestions,
        })
    }
}
