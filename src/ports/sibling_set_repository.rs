//! Sibling set repository port.
//!
//! Defines the contract for loading and persisting the weighted key results
//! of one objective. Implementations handle the actual storage.
//!
//! # Design
//!
//! - **Snapshot-based**: the whole sibling set is read and written together
//! - **Order-preserving**: items come back in the order they were saved
//! - **Caller-owned concurrency**: conflicting writes are resolved here, not in the engine

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ObjectiveId};
use crate::domain::weighting::WeightedItem;

/// Repository port for the sibling set of an objective.
#[async_trait]
pub trait SiblingSetRepository: Send + Sync {
    /// Load the sibling set of an objective.
    ///
    /// Returns `None` if the objective has never been saved.
    async fn load(&self, objective_id: &ObjectiveId) -> Result<Option<Vec<WeightedItem>>, DomainError>;

    /// Replace the sibling set of an objective.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, objective_id: &ObjectiveId, items: &[WeightedItem]) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SiblingSetRepository) {}
}
