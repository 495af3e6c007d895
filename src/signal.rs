//! Synthetic glucose signal sources and the time grid they are sampled on.
//!
//! A signal is a stateless, deterministic function of time. Readings never
//! depend on the automaton state, so a whole reading sequence can be computed
//! up front if needed.

use crate::builder::ConfigError;
use crate::validation::{self, rules};
use serde::{Deserialize, Serialize};

/// A scalar glucose-like value for every point in time.
///
/// Implemented for the built-in [`SignalShape`]s and for any `Fn(f64) -> f64`.
///
/// # Example
///
/// ```rust
/// use islet::signal::SignalSource;
///
/// let ramp = |t: f64| t / 10.0;
/// assert_eq!(ramp.value(5.0), 0.5);
/// ```
pub trait SignalSource {
    fn value(&self, t: f64) -> f64;
}

impl<F> SignalSource for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Periodic shapes a simulation can be configured with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SignalShape {
    /// `offset + amplitude * sin(t / period_scale)`
    Sine {
        amplitude: f64,
        period_scale: f64,
        offset: f64,
    },
    /// `offset + amplitude` for the first half of each period,
    /// `offset - amplitude` for the second half.
    Square {
        amplitude: f64,
        period: f64,
        offset: f64,
    },
    /// The same value at every time.
    Constant { value: f64 },
}

impl SignalShape {
    /// `sin(t / 2)`, the signal the islet model was tuned against.
    pub fn canonical() -> Self {
        Self::Sine {
            amplitude: 1.0,
            period_scale: 2.0,
            offset: 0.0,
        }
    }

    /// Check parameters, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = match *self {
            Self::Sine {
                amplitude,
                period_scale,
                offset,
            } => vec![
                rules::finite("amplitude", amplitude),
                rules::finite("offset", offset),
                rules::finite("period_scale", period_scale),
                rules::positive("period_scale", period_scale),
            ],
            Self::Square {
                amplitude,
                period,
                offset,
            } => vec![
                rules::finite("amplitude", amplitude),
                rules::finite("offset", offset),
                rules::finite("period", period),
                rules::positive("period", period),
            ],
            Self::Constant { value } => vec![rules::finite("value", value)],
        };
        validation::enforce(checks)
    }
}

impl Default for SignalShape {
    fn default() -> Self {
        Self::canonical()
    }
}

impl SignalSource for SignalShape {
    fn value(&self, t: f64) -> f64 {
        match *self {
            Self::Sine {
                amplitude,
                period_scale,
                offset,
            } => offset + amplitude * (t / period_scale).sin(),
            Self::Square {
                amplitude,
                period,
                offset,
            } => {
                if (t / period).rem_euclid(1.0) < 0.5 {
                    offset + amplitude
                } else {
                    offset - amplitude
                }
            }
            Self::Constant { value } => value,
        }
    }
}

/// `num_points` evenly spaced time points over `[t_min, t_max]`, both ends
/// included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    pub t_min: f64,
    pub t_max: f64,
    pub num_points: usize,
}

impl TimeGrid {
    pub fn new(t_min: f64, t_max: f64, num_points: usize) -> Result<Self, ConfigError> {
        let grid = Self {
            t_min,
            t_max,
            num_points,
        };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::enforce(vec![
            rules::finite("t_min", self.t_min),
            rules::finite("t_max", self.t_max),
            rules::time_range(self.t_min, self.t_max),
            rules::point_count(self.num_points),
        ])
    }

    /// Distance between consecutive points; zero for a single-point grid.
    pub fn step(&self) -> f64 {
        if self.num_points > 1 {
            (self.t_max - self.t_min) / (self.num_points - 1) as f64
        } else {
            0.0
        }
    }

    /// The time points in ascending order.
    ///
    /// ```rust
    /// use islet::signal::TimeGrid;
    ///
    /// let grid = TimeGrid::new(0.0, 1.0, 5).unwrap();
    /// let points: Vec<f64> = grid.points().collect();
    /// assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.step();
        let last = self.num_points.saturating_sub(1);
        (0..self.num_points).map(move |i| {
            if i == last && i > 0 {
                self.t_max
            } else {
                self.t_min + step * i as f64
            }
        })
    }

    /// Readings of `signal` at every grid point.
    pub fn sample<S: SignalSource + ?Sized>(&self, signal: &S) -> Vec<f64> {
        self.points().map(|t| signal.value(t)).collect()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: 100.0,
            num_points: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ConfigViolation;

    #[test]
    fn canonical_signal_is_half_rate_sine() {
        let signal = SignalShape::canonical();
        assert_eq!(signal.value(0.0), 0.0);
        assert!((signal.value(std::f64::consts::PI) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn square_wave_alternates_each_half_period() {
        let signal = SignalShape::Square {
            amplitude: 0.5,
            period: 10.0,
            offset: 1.0,
        };

        assert_eq!(signal.value(0.0), 1.5);
        assert_eq!(signal.value(4.9), 1.5);
        assert_eq!(signal.value(5.0), 0.5);
        assert_eq!(signal.value(12.0), 1.5);
        assert_eq!(signal.value(-2.0), 0.5);
    }

    #[test]
    fn constant_signal_ignores_time() {
        let signal = SignalShape::Constant { value: 1.5 };
        assert_eq!(signal.value(0.0), 1.5);
        assert_eq!(signal.value(99.0), 1.5);
    }

    #[test]
    fn closures_are_signal_sources() {
        let signal = |t: f64| 2.0 * t;
        assert_eq!(SignalSource::value(&signal, 3.0), 6.0);
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        let shape = SignalShape::Square {
            amplitude: f64::INFINITY,
            period: 0.0,
            offset: 0.0,
        };
        match shape.validate() {
            Err(ConfigError::Invalid(violations)) => assert_eq!(violations.len(), 2),
            other => panic!("Expected two violations, got {other:?}"),
        }
    }

    #[test]
    fn grid_includes_both_ends() {
        let grid = TimeGrid::default();
        let points: Vec<f64> = grid.points().collect();

        assert_eq!(points.len(), 1000);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[999], 100.0);
    }

    #[test]
    fn single_point_grid_yields_t_min() {
        let grid = TimeGrid::new(3.0, 4.0, 1).unwrap();
        let points: Vec<f64> = grid.points().collect();
        assert_eq!(points, vec![3.0]);
    }

    #[test]
    fn grid_rejects_empty_range_and_zero_points() {
        let err = TimeGrid::new(10.0, 0.0, 0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid(vec![
                ConfigViolation::EmptyTimeRange {
                    t_min: 10.0,
                    t_max: 0.0
                },
                ConfigViolation::NoPoints,
            ])
        );
    }

    #[test]
    fn sample_reads_signal_at_each_point() {
        let grid = TimeGrid::new(0.0, 2.0, 3).unwrap();
        let readings = grid.sample(&|t: f64| t * t);
        assert_eq!(readings, vec![0.0, 1.0, 4.0]);
    }
}
