//! Validation of simulation configuration.
//!
//! Configuration checks use Stillwater's `Validation` type so that every
//! broken rule is reported at once instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use islet::builder::ConfigError;
//! use islet::validation::{self, rules};
//!
//! let result = validation::enforce(vec![
//!     rules::ordered_thresholds(1.2, 0.8),
//!     rules::fraction_in_range(0.7),
//! ]);
//!
//! match result {
//!     Err(ConfigError::Invalid(violations)) => assert_eq!(violations.len(), 2),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use violations::ConfigViolation;

use crate::builder::ConfigError;
use rules::Check;
use stillwater::validation::Validation;

/// Evaluate all checks, collecting ALL violations into one error.
pub fn enforce(checks: Vec<Check>) -> Result<(), ConfigError> {
    if checks.is_empty() {
        return Ok(());
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(ConfigError::Invalid(errors.iter().cloned().collect())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforce_accumulates_all_violations() {
        let result = enforce(vec![
            rules::point_count(0),
            rules::time_range(5.0, 1.0),
            rules::fraction_in_range(0.9),
        ]);

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.contains(&ConfigViolation::NoPoints));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::EmptyTimeRange { .. })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::FractionOutOfRange { .. })));
            }
            other => panic!("Expected accumulated violations, got {other:?}"),
        }
    }

    #[test]
    fn enforce_succeeds_when_all_checks_pass() {
        let result = enforce(vec![rules::point_count(10), rules::time_range(0.0, 1.0)]);
        assert!(result.is_ok());
    }

    #[test]
    fn enforce_with_no_checks_succeeds() {
        assert!(enforce(Vec::new()).is_ok());
    }
}
