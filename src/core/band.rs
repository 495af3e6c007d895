//! Glucose bands and the thresholds that separate them.

use crate::builder::ConfigError;
use crate::validation::{self, rules};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete classification of a glucose reading.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Band {
    Low,
    Normal,
    High,
}

impl Band {
    /// All bands, lowest first.
    pub const ALL: [Band; 3] = [Band::Low, Band::Normal, Band::High];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two boundaries of the homeostatic band, `lower < upper`.
///
/// # Example
///
/// ```rust
/// use islet::core::{Band, Thresholds};
///
/// let thresholds = Thresholds::new(0.8, 1.2).unwrap();
/// assert_eq!(thresholds.classify(0.5), Band::Low);
/// assert_eq!(thresholds.classify(0.8), Band::Normal);
/// assert_eq!(thresholds.classify(1.2), Band::High);
///
/// assert!(Thresholds::new(1.2, 0.8).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    lower: f64,
    upper: f64,
}

impl Thresholds {
    /// Validate and build a pair of thresholds.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfigError> {
        validation::enforce(vec![
            rules::finite("lower_bound", lower),
            rules::finite("upper_bound", upper),
            rules::ordered_thresholds(lower, upper),
        ])?;
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Classify a reading. Lower bound inclusive for NORMAL, upper bound
    /// inclusive for HIGH. NaN compares false everywhere and lands in HIGH.
    pub fn classify(&self, reading: f64) -> Band {
        if reading < self.lower {
            Band::Low
        } else if reading < self.upper {
            Band::Normal
        } else {
            Band::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ConfigViolation;

    #[test]
    fn classify_splits_into_three_bands() {
        let thresholds = Thresholds::new(0.8, 1.2).unwrap();

        assert_eq!(thresholds.classify(0.5), Band::Low);
        assert_eq!(thresholds.classify(1.0), Band::Normal);
        assert_eq!(thresholds.classify(1.5), Band::High);
    }

    #[test]
    fn boundaries_belong_to_upper_band() {
        let thresholds = Thresholds::new(-0.3, 0.3).unwrap();

        assert_eq!(thresholds.classify(-0.3), Band::Normal);
        assert_eq!(thresholds.classify(0.3), Band::High);
        assert_eq!(thresholds.classify(-0.3000001), Band::Low);
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let err = Thresholds::new(1.2, 0.8).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid(vec![ConfigViolation::InvertedThresholds {
                lower: 1.2,
                upper: 0.8
            }])
        );
    }

    #[test]
    fn equal_thresholds_are_rejected() {
        assert!(Thresholds::new(1.0, 1.0).is_err());
    }

    #[test]
    fn non_finite_thresholds_are_rejected() {
        let err = Thresholds::new(f64::NAN, 1.0).unwrap_err();
        match err {
            ConfigError::Invalid(violations) => {
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::NotFinite { name, .. } if *name == "lower_bound")));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn band_names_are_upper_case() {
        let names: Vec<_> = Band::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(names, vec!["LOW", "NORMAL", "HIGH"]);
    }
}
