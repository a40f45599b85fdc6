//! Balance tolerance value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum distance from 100% at which a sibling set still counts as balanced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// The default tolerance of one hundredth of a percentage point.
    pub const DEFAULT: Self = Self(0.01);

    /// Upper bound (exclusive) for a tolerance.
    pub const MAX: f64 = 100.0;

    /// Creates a Tolerance, returning error unless finite and within `[0, 100)`.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 || value >= Self::MAX {
            return Err(ValidationError::out_of_range(
                "tolerance",
                0.0,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value in percentage points.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Checks whether a deviation from the target falls inside this tolerance.
    pub fn admits(&self, deviation: f64) -> bool {
        deviation.abs() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "±{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_hundredth() {
        assert_eq!(Tolerance::default().value(), 0.01);
    }

    #[test]
    fn try_new_accepts_zero_and_small_values() {
        assert!(Tolerance::try_new(0.0).is_ok());
        assert!(Tolerance::try_new(0.5).is_ok());
        assert!(Tolerance::try_new(99.9).is_ok());
    }

    #[test]
    fn try_new_rejects_invalid_values() {
        assert!(Tolerance::try_new(-0.01).is_err());
        assert!(Tolerance::try_new(100.0).is_err());
        assert!(Tolerance::try_new(f64::NAN).is_err());
        assert!(Tolerance::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn try_new_reports_out_of_range_field() {
        match Tolerance::try_new(-1.0) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "tolerance");
                assert_eq!(actual, -1.0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn admits_is_inclusive_and_symmetric() {
        let tolerance = Tolerance::try_new(0.5).unwrap();
        assert!(tolerance.admits(0.5));
        assert!(tolerance.admits(-0.5));
        assert!(!tolerance.admits(0.51));
    }

    #[test]
    fn deserializes_from_number_with_validation() {
        let tolerance: Tolerance = serde_json::from_str("0.25").unwrap();
        assert_eq!(tolerance.value(), 0.25);
        assert!(serde_json::from_str::<Tolerance>("-3").is_err());
    }

    #[test]
    fn displays_with_plus_minus() {
        assert_eq!(Tolerance::DEFAULT.to_string(), "±0.01%");
    }
}
