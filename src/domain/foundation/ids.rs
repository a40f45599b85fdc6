//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an objective, the parent of one sibling set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveId(Uuid);

impl ObjectiveId {
    /// Creates a new random ObjectiveId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectiveId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectiveId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_id_generates_unique_values() {
        assert_ne!(ObjectiveId::new(), ObjectiveId::new());
    }

    #[test]
    fn objective_id_parses_from_string() {
        let id = ObjectiveId::new();
        let parsed: ObjectiveId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn objective_id_rejects_invalid_uuid() {
        assert!("not-a-uuid".parse::<ObjectiveId>().is_err());
    }

    #[test]
    fn objective_id_serializes_as_bare_string() {
        let id = ObjectiveId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
