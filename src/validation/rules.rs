//! Individual configuration checks.
//!
//! Each check returns a `Validation` so that callers can evaluate several of
//! them and report every failure together.

use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single configuration check.
pub type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

pub fn finite(name: &'static str, value: f64) -> Check {
    check(value.is_finite(), || ConfigViolation::NotFinite { name, value })
}

pub fn positive(name: &'static str, value: f64) -> Check {
    check(value > 0.0, || ConfigViolation::NotPositive { name, value })
}

pub fn ordered_thresholds(lower: f64, upper: f64) -> Check {
    check(lower < upper, || ConfigViolation::InvertedThresholds { lower, upper })
}

pub fn fraction_in_range(fraction: f64) -> Check {
    check(fraction > 0.0 && fraction < 0.5, || {
        ConfigViolation::FractionOutOfRange { fraction }
    })
}

pub fn time_range(t_min: f64, t_max: f64) -> Check {
    check(t_min < t_max, || ConfigViolation::EmptyTimeRange { t_min, t_max })
}

pub fn point_count(num_points: usize) -> Check {
    check(num_points > 0, || ConfigViolation::NoPoints)
}

/// Largest supported number of rounding digits; beyond this `f64` has no
/// decimal precision left.
pub const MAX_ROUND_DIGITS: u32 = 15;

pub fn round_digits(digits: Option<u32>) -> Check {
    match digits {
        Some(digits) => check(digits <= MAX_ROUND_DIGITS, || {
            ConfigViolation::RoundDigitsTooLarge {
                digits,
                max: MAX_ROUND_DIGITS,
            }
        }),
        None => Validation::success(()),
    }
}

pub fn signal_range(g_min: f64, g_max: f64) -> Check {
    check(g_min < g_max, || ConfigViolation::DegenerateSignal { g_min, g_max })
}
