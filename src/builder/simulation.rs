//! Builder for constructing simulations.

use crate::builder::error::ConfigError;
use crate::core::{CellState, ClassifierConfig, DEFAULT_FRACTION, DEFAULT_ROUND_DIGITS};
use crate::signal::{SignalShape, TimeGrid};
use crate::simulation::{Simulation, SimulationConfig};
use crate::validation::{self, rules};

/// Builder for constructing simulations with a fluent API.
///
/// Initial state and signal are required. The time grid defaults to
/// `[0, 100]` at 1000 points and the classifier to statistical thresholds
/// at fraction 0.35, sampled on the simulation grid.
///
/// # Example
///
/// ```rust
/// use islet::builder::SimulationBuilder;
/// use islet::core::CellState;
/// use islet::signal::SignalShape;
///
/// let simulation = SimulationBuilder::new()
///     .initial(CellState::Alpha)
///     .signal(SignalShape::Constant { value: 1.5 })
///     .time_range(0.0, 4.0)
///     .points(5)
///     .fixed_thresholds(0.8, 1.2)
///     .build()
///     .unwrap();
///
/// assert_eq!(simulation.run().final_state(), CellState::Beta);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationBuilder {
    initial: Option<CellState>,
    signal: Option<SignalShape>,
    t_min: Option<f64>,
    t_max: Option<f64>,
    num_points: Option<usize>,
    classifier: Option<ClassifierConfig>,
    fraction: Option<f64>,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: CellState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the glucose signal (required).
    pub fn signal(mut self, signal: SignalShape) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn time_range(mut self, t_min: f64, t_max: f64) -> Self {
        self.t_min = Some(t_min);
        self.t_max = Some(t_max);
        self
    }

    pub fn points(mut self, num_points: usize) -> Self {
        self.num_points = Some(num_points);
        self
    }

    /// Use constant thresholds.
    pub fn fixed_thresholds(mut self, lower: f64, upper: f64) -> Self {
        self.classifier = Some(ClassifierConfig::Fixed { lower, upper });
        self.fraction = None;
        self
    }

    /// Derive thresholds from the signal over the simulation grid.
    pub fn statistical(mut self, fraction: f64) -> Self {
        self.classifier = None;
        self.fraction = Some(fraction);
        self
    }

    /// Use an explicit classifier configuration.
    pub fn classifier(mut self, config: ClassifierConfig) -> Self {
        self.classifier = Some(config);
        self.fraction = None;
        self
    }

    /// Assemble the configuration without deriving the classifier.
    /// Returns every problem found in one error.
    pub fn config(self) -> Result<SimulationConfig, ConfigError> {
        let initial_state = self.initial.ok_or(ConfigError::MissingInitialState)?;
        let signal = self.signal.ok_or(ConfigError::MissingSignal)?;

        let defaults = TimeGrid::default();
        let grid = TimeGrid {
            t_min: self.t_min.unwrap_or(defaults.t_min),
            t_max: self.t_max.unwrap_or(defaults.t_max),
            num_points: self.num_points.unwrap_or(defaults.num_points),
        };

        let classifier = match (self.classifier, self.fraction) {
            (Some(config), _) => config,
            (None, fraction) => ClassifierConfig::Statistical {
                grid,
                fraction: fraction.unwrap_or(DEFAULT_FRACTION),
                round_digits: Some(DEFAULT_ROUND_DIGITS),
            },
        };

        let mut checks = vec![
            rules::finite("t_min", grid.t_min),
            rules::finite("t_max", grid.t_max),
            rules::time_range(grid.t_min, grid.t_max),
            rules::point_count(grid.num_points),
        ];
        match &classifier {
            ClassifierConfig::Fixed { lower, upper } => {
                checks.push(rules::finite("lower_bound", *lower));
                checks.push(rules::finite("upper_bound", *upper));
                checks.push(rules::ordered_thresholds(*lower, *upper));
            }
            ClassifierConfig::Statistical {
                fraction,
                round_digits,
                ..
            } => {
                checks.push(rules::finite("fraction", *fraction));
                checks.push(rules::fraction_in_range(*fraction));
                checks.push(rules::round_digits(*round_digits));
            }
        }
        validation::enforce(checks)?;

        Ok(SimulationConfig {
            grid,
            initial_state,
            signal,
            classifier,
        })
    }

    /// Build the simulation.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        Simulation::new(self.config()?)
    }
}
