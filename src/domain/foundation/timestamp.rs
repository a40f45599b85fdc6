//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_is_ordered() {
        let earlier: Timestamp = serde_json::from_str(r#""2024-01-01T00:00:00Z""#).unwrap();
        assert!(earlier < Timestamp::now());
    }

    #[test]
    fn timestamp_displays_as_rfc3339() {
        let ts: Timestamp = serde_json::from_str(r#""2024-03-15T12:30:00Z""#).unwrap();
        assert_eq!(ts.to_string(), "2024-03-15T12:30:00+00:00");
    }
}
