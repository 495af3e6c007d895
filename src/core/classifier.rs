//! Glucose band classifier.
//!
//! A classifier owns the two thresholds and one representative scalar per
//! band. Thresholds come either from fixed constants or from statistics of
//! the signal's own observed range.

use crate::builder::ConfigError;
use crate::core::band::{Band, Thresholds};
use crate::signal::{SignalSource, TimeGrid};
use crate::validation::{self, rules, ConfigViolation};
use serde::{Deserialize, Serialize};

/// Default margin taken from each extreme of the observed signal range.
pub const DEFAULT_FRACTION: f64 = 0.35;

/// Default number of decimal digits derived statistics are rounded to.
pub const DEFAULT_ROUND_DIGITS: u32 = 1;

/// How a classifier obtains its thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClassifierConfig {
    /// Sample the signal over `grid` and place the thresholds `fraction` of
    /// the observed range in from each extreme.
    Statistical {
        grid: TimeGrid,
        fraction: f64,
        round_digits: Option<u32>,
    },
    /// Constant thresholds, independent of the signal.
    Fixed { lower: f64, upper: f64 },
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::Statistical {
            grid: TimeGrid::default(),
            fraction: DEFAULT_FRACTION,
            round_digits: Some(DEFAULT_ROUND_DIGITS),
        }
    }
}

/// One canonical reading per band.
///
/// Used wherever a continuous reading is replaced by its band's
/// representative extreme or midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Representatives {
    pub low: f64,
    pub middle: f64,
    pub high: f64,
}

/// Maps readings to bands.
///
/// # Example
///
/// ```rust
/// use islet::core::{Band, Classifier};
/// use islet::signal::{SignalShape, TimeGrid};
///
/// let classifier =
///     Classifier::statistical(&SignalShape::canonical(), &TimeGrid::default(), 0.35, Some(1))
///         .unwrap();
///
/// assert_eq!(classifier.g_min(), -1.0);
/// assert_eq!(classifier.g_max(), 1.0);
/// assert_eq!(classifier.classify(0.9), Band::High);
/// assert_eq!(classifier.quantize(-0.8), -1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    thresholds: Thresholds,
    representatives: Representatives,
}

impl Classifier {
    /// Classifier with constant thresholds.
    ///
    /// No signal range is observed, so representatives are placed half a band
    /// width outside each threshold and at the centre of the NORMAL band.
    pub fn fixed(lower: f64, upper: f64) -> Result<Self, ConfigError> {
        let thresholds = Thresholds::new(lower, upper)?;
        let half_width = (upper - lower) / 2.0;
        Ok(Self {
            thresholds,
            representatives: Representatives {
                low: lower - half_width,
                middle: lower + half_width,
                high: upper + half_width,
            },
        })
    }

    /// Classifier derived from the observed range of `signal` over `grid`.
    ///
    /// With `G_range = G_max - G_min`, the thresholds are
    /// `G_min + fraction * G_range` and `G_min + (1 - fraction) * G_range`.
    /// When `round_digits` is set, the extremes, their midpoint and both
    /// thresholds are rounded to that many decimals. Rounding that leaves no
    /// room between the thresholds is reported as
    /// [`ConfigViolation::RoundingCollapsesBand`].
    ///
    /// Rounding can also move a threshold onto an extreme (e.g. a small
    /// fraction puts `lower` on `G_min`), so a representative is not
    /// guaranteed to classify into its own band.
    pub fn statistical<S: SignalSource + ?Sized>(
        signal: &S,
        grid: &TimeGrid,
        fraction: f64,
        round_digits: Option<u32>,
    ) -> Result<Self, ConfigError> {
        validation::enforce(vec![
            rules::finite("fraction", fraction),
            rules::fraction_in_range(fraction),
            rules::round_digits(round_digits),
        ])?;
        grid.validate()?;

        let round = |value: f64| match round_digits {
            Some(digits) => round_to(value, digits),
            None => value,
        };

        let readings = grid.sample(signal);
        let observed_min = readings.iter().copied().fold(f64::INFINITY, f64::min);
        let observed_max = readings.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let g_min = round(observed_min);
        let g_max = round(observed_max);
        validation::enforce(vec![
            rules::finite("G_min", g_min),
            rules::finite("G_max", g_max),
            rules::signal_range(g_min, g_max),
        ])?;

        let g_middle = round((g_min + g_max) / 2.0);
        let g_range = g_max - g_min;
        let raw_lower = g_min + fraction * g_range;
        let raw_upper = g_min + (1.0 - fraction) * g_range;
        let lower = round(raw_lower);
        let upper = round(raw_upper);

        if let Some(digits) = round_digits {
            if lower >= upper {
                return Err(ConfigError::Invalid(vec![
                    ConfigViolation::RoundingCollapsesBand {
                        digits,
                        lower: raw_lower,
                        upper: raw_upper,
                        rounded_lower: lower,
                        rounded_upper: upper,
                    },
                ]));
            }
        }

        log::debug!(
            "Derived thresholds from {} samples: G_min={g_min}, G_max={g_max}, lower={lower}, upper={upper}",
            readings.len()
        );

        Ok(Self {
            thresholds: Thresholds::new(lower, upper)?,
            representatives: Representatives {
                low: g_min,
                middle: g_middle,
                high: g_max,
            },
        })
    }

    /// Build a classifier from configuration, sampling `signal` if the
    /// configuration is statistical.
    pub fn from_config<S: SignalSource + ?Sized>(
        config: &ClassifierConfig,
        signal: &S,
    ) -> Result<Self, ConfigError> {
        match config {
            ClassifierConfig::Statistical {
                grid,
                fraction,
                round_digits,
            } => Self::statistical(signal, grid, *fraction, *round_digits),
            ClassifierConfig::Fixed { lower, upper } => Self::fixed(*lower, *upper),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn representatives(&self) -> &Representatives {
        &self.representatives
    }

    pub fn lower_bound(&self) -> f64 {
        self.thresholds.lower()
    }

    pub fn upper_bound(&self) -> f64 {
        self.thresholds.upper()
    }

    pub fn g_min(&self) -> f64 {
        self.representatives.low
    }

    pub fn g_middle(&self) -> f64 {
        self.representatives.middle
    }

    pub fn g_max(&self) -> f64 {
        self.representatives.high
    }

    pub fn classify(&self, reading: f64) -> Band {
        self.thresholds.classify(reading)
    }

    /// Representative scalar of a band.
    pub fn representative(&self, band: Band) -> f64 {
        match band {
            Band::Low => self.representatives.low,
            Band::Normal => self.representatives.middle,
            Band::High => self.representatives.high,
        }
    }

    /// Replace a reading by the representative of its band.
    pub fn quantize(&self, reading: f64) -> f64 {
        self.representative(self.classify(reading))
    }
}

fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}
