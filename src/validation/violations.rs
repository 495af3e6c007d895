//! Configuration violations.

use thiserror::Error;

/// A single broken configuration rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Parameter '{name}' must be finite (got {value})")]
    NotFinite { name: &'static str, value: f64 },

    #[error("Lower bound ({lower}) must be below upper bound ({upper})")]
    InvertedThresholds { lower: f64, upper: f64 },

    #[error("Fraction ({fraction}) must lie strictly between 0 and 0.5")]
    FractionOutOfRange { fraction: f64 },

    #[error("Time range [{t_min}, {t_max}] is empty; t_min must be below t_max")]
    EmptyTimeRange { t_min: f64, t_max: f64 },

    #[error("Point count must be at least 1")]
    NoPoints,

    #[error("Parameter '{name}' must be positive (got {value})")]
    NotPositive { name: &'static str, value: f64 },

    #[error("Rounding to {digits} digits is not supported; at most {max} digits")]
    RoundDigitsTooLarge { digits: u32, max: u32 },

    #[error("Rounding to {digits} digits collapses the band [{lower}, {upper}) to [{rounded_lower}, {rounded_upper}); use more digits or no rounding")]
    RoundingCollapsesBand {
        digits: u32,
        lower: f64,
        upper: f64,
        rounded_lower: f64,
        rounded_upper: f64,
    },

    #[error("Observed signal range [{g_min}, {g_max}] is degenerate; no homeostatic band can be derived")]
    DegenerateSignal { g_min: f64, g_max: f64 },
}
