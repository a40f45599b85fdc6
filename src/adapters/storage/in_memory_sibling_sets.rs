//! In-Memory Sibling Set Adapter
//!
//! Stores each objective's weighted key results in memory.
//! Useful for testing and the command line tool.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ObjectiveId};
use crate::domain::weighting::WeightedItem;
use crate::ports::SiblingSetRepository;

/// In-memory storage for sibling sets. Last write wins.
#[derive(Debug, Clone)]
pub struct InMemorySiblingSets {
    sets: Arc<RwLock<HashMap<ObjectiveId, Vec<WeightedItem>>>>,
}

impl InMemorySiblingSets {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            sets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a storage pre-populated with one objective's sibling set
    pub async fn with_set(objective_id: ObjectiveId, items: Vec<WeightedItem>) -> Self {
        let storage = Self::new();
        storage.sets.write().await.insert(objective_id, items);
        storage
    }

    /// Get the number of stored objectives
    pub async fn objective_count(&self) -> usize {
        self.sets.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.sets.write().await.clear();
    }
}

impl Default for InMemorySiblingSets {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SiblingSetRepository for InMemorySiblingSets {
    async fn load(&self, objective_id: &ObjectiveId) -> Result<Option<Vec<WeightedItem>>, DomainError> {
        let sets = self.sets.read().await;
        Ok(sets.get(objective_id).cloned())
    }

    async fn save(&self, objective_id: &ObjectiveId, items: &[WeightedItem]) -> Result<(), DomainError> {
        let mut sets = self.sets.write().await;
        sets.insert(*objective_id, items.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_returns_none_for_unknown_objective() {
        let storage = InMemorySiblingSets::new();
        let loaded = storage.load(&ObjectiveId::new()).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_then_load_preserves_order() {
        let storage = InMemorySiblingSets::new();
        let objective_id = ObjectiveId::new();
        let items = vec![
            WeightedItem::new("kr-2", 60.0),
            WeightedItem::locked("kr-1", 40.0),
        ];

        storage.save(&objective_id, &items).await.unwrap();

        assert_eq!(storage.load(&objective_id).await.unwrap(), Some(items));
    }

    #[tokio::test]
    async fn save_replaces_previous_set() {
        let objective_id = ObjectiveId::new();
        let storage =
            InMemorySiblingSets::with_set(objective_id, vec![WeightedItem::new("kr-1", 100.0)])
                .await;

        storage.save(&objective_id, &[]).await.unwrap();

        assert_eq!(storage.load(&objective_id).await.unwrap(), Some(vec![]));
        assert_eq!(storage.objective_count().await, 1);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let storage = InMemorySiblingSets::new();
        let clone = storage.clone();
        let objective_id = ObjectiveId::new();

        clone.save(&objective_id, &[WeightedItem::new("kr-1", 100.0)]).await.unwrap();

        assert!(storage.load(&objective_id).await.unwrap().is_some());
        storage.clear().await;
        assert_eq!(clone.objective_count().await, 0);
    }
}
