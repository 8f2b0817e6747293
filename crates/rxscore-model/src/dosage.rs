//! Dosage values with exact equality.
//!
//! Dosage is an enumerated quantity: a request dose either is one of the
//! observed doses or it is not. Comparison is exact (`500` equals `500.0`,
//! `500.5` never equals `500`), which lets a [`Dosage`] act as a set or map key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A finite dosage in milligrams.
///
/// `-0.0` is stored as `0.0` so that equality, ordering and hashing agree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Dosage(f64);

impl Dosage {
    /// Create a dosage, rejecting NaN and infinities.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ModelError::NonFiniteDosage(value));
        }
        // Collapse negative zero.
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Dosage {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Dosage> for f64 {
    fn from(dosage: Dosage) -> Self {
        dosage.0
    }
}

impl PartialEq for Dosage {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Dosage {}

impl PartialOrd for Dosage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dosage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Dosage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Dosage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn integer_and_float_forms_are_equal() {
        let int_form: Dosage = serde_json::from_str("500").unwrap();
        let float_form: Dosage = serde_json::from_str("500.0").unwrap();
        assert_eq!(int_form, float_form);
        assert_ne!(Dosage::new(500.5).unwrap(), int_form);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let negative = Dosage::new(-0.0).unwrap();
        let positive = Dosage::new(0.0).unwrap();
        assert_eq!(negative, positive);
        let set: BTreeSet<Dosage> = [negative, positive].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(Dosage::new(f64::NAN).is_err());
        assert!(Dosage::new(f64::INFINITY).is_err());
        assert!(Dosage::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn display_drops_trailing_fraction() {
        assert_eq!(Dosage::new(500.0).unwrap().to_string(), "500");
        assert_eq!(Dosage::new(2.5).unwrap().to_string(), "2.5");
    }
}
