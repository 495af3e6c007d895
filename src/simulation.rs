//! Simulation loop: the imperative shell around the pure core.
//!
//! A [`Simulation`] owns a validated configuration and the classifier derived
//! from it. Running it samples the signal on the time grid, classifies every
//! reading and feeds the band to the automaton, accumulating a
//! [`Trajectory`].

use crate::builder::ConfigError;
use crate::core::{Band, CellState, Classifier, ClassifierConfig, Trajectory};
use crate::graph::TransitionGraph;
use crate::signal::{SignalShape, SignalSource, TimeGrid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to reproduce a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub grid: TimeGrid,
    pub initial_state: CellState,
    pub signal: SignalShape,
    pub classifier: ClassifierConfig,
}

impl Default for SimulationConfig {
    /// `sin(t / 2)` over `[0, 100]` at 1000 points, starting from `(1, 0, 0)`,
    /// with statistical thresholds at fraction 0.35.
    fn default() -> Self {
        Self {
            grid: TimeGrid::default(),
            initial_state: CellState::Alpha,
            signal: SignalShape::canonical(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// A configured, ready-to-run simulation.
///
/// # Example
///
/// ```rust
/// use islet::simulation::{Simulation, SimulationConfig};
///
/// let simulation = Simulation::new(SimulationConfig::default()).unwrap();
/// let trajectory = simulation.run();
///
/// assert_eq!(trajectory.len(), 1000);
/// assert_eq!(trajectory.initial_state(), simulation.config().initial_state);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    classifier: Classifier,
}

impl Simulation {
    /// Validate `config` and derive its classifier.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.grid.validate()?;
        config.signal.validate()?;
        let classifier = Classifier::from_config(&config.classifier, &config.signal)?;

        log::debug!(
            "Configured simulation: thresholds [{}, {}), representatives {:?}",
            classifier.lower_bound(),
            classifier.upper_bound(),
            classifier.representatives()
        );

        Ok(Self { config, classifier })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Run the simulation over the configured grid.
    pub fn run(&self) -> Trajectory {
        log::info!(
            "Simulating {} points over [{}, {}] from state ({})",
            self.config.grid.num_points,
            self.config.grid.t_min,
            self.config.grid.t_max,
            self.config.initial_state
        );

        let trajectory = simulate(
            &self.config.grid,
            self.config.initial_state,
            &self.config.signal,
            &self.classifier,
        );

        log::info!(
            "Simulation finished in state ({}) after {} steps",
            trajectory.final_state(),
            trajectory.len()
        );
        trajectory
    }

    /// Full transition graph under this simulation's classifier.
    pub fn transition_graph(&self) -> TransitionGraph {
        TransitionGraph::build(&self.classifier)
    }
}

/// Core simulation loop.
///
/// At each grid point the signal is read and classified, the sample is
/// recorded against the current state, and the automaton advances.
pub fn simulate<S: SignalSource + ?Sized>(
    grid: &TimeGrid,
    initial: CellState,
    signal: &S,
    classifier: &Classifier,
) -> Trajectory {
    grid.points().fold(
        Trajectory::with_capacity(initial, grid.num_points),
        |trajectory, time| {
            let reading = signal.value(time);
            let band = classifier.classify(reading);
            log::trace!(
                "t={time:.2} G={reading:.4} band={band} state=({})",
                trajectory.final_state()
            );
            trajectory.record(time, reading, band)
        },
    )
}

/// One line of the textual trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceLine {
    pub time: f64,
    pub reading: f64,
    pub band: Band,
    pub state: CellState,
    pub next: CellState,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:6.2}, G={:.4}, state={:<10} -> next={}",
            self.time,
            self.reading,
            self.state.label(),
            self.next.label()
        )
    }
}

/// Diagnostic trace: time, reading, current state and the state it leads to.
pub fn trace(trajectory: &Trajectory) -> Vec<TraceLine> {
    trajectory
        .samples()
        .iter()
        .zip(trajectory.transitions())
        .map(|(sample, (state, next))| TraceLine {
            time: sample.time,
            reading: sample.reading,
            band: sample.band,
            state,
            next,
        })
        .collect()
}
