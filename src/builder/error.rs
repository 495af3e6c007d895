//! Configuration errors for simulations and classifiers.

use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a simulation or its parts.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Signal not specified. Call .signal(shape) before .build()")]
    MissingSignal,

    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
