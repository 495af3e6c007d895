//! Simulation trajectories.
//!
//! A trajectory is the time-ordered record of every reading fed to the
//! automaton together with the state it was fed to.

use crate::core::band::Band;
use crate::core::state::CellState;
use crate::core::transition::transition;
use serde::{Deserialize, Serialize};

/// One simulation step: the state *before* the reading was applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub state: CellState,
    pub reading: f64,
    pub band: Band,
}

/// Ordered record of `(time, state, reading)` samples.
///
/// The first sample holds the initial state and every following sample holds
/// the transition of its predecessor's state under its predecessor's band.
/// `final_state` is the state reached after the last reading.
///
/// # Example
///
/// ```rust
/// use islet::core::{Band, CellState, Trajectory};
///
/// let trajectory = Trajectory::new(CellState::Alpha)
///     .record(0.0, 1.5, Band::High)
///     .record(1.0, 1.0, Band::Normal);
///
/// assert_eq!(trajectory.len(), 2);
/// assert_eq!(
///     trajectory.path(),
///     vec![CellState::Alpha, CellState::Beta, CellState::Beta]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    initial_state: CellState,
    samples: Vec<Sample>,
    final_state: CellState,
}

impl Trajectory {
    /// Create an empty trajectory starting at `initial`.
    pub fn new(initial: CellState) -> Self {
        Self::with_capacity(initial, 0)
    }

    pub fn with_capacity(initial: CellState, capacity: usize) -> Self {
        Self {
            initial_state: initial,
            samples: Vec::with_capacity(capacity),
            final_state: initial,
        }
    }

    /// Record a reading against the current state and advance the automaton.
    pub fn record(mut self, time: f64, reading: f64, band: Band) -> Self {
        let state = self.final_state;
        self.samples.push(Sample {
            time,
            state,
            reading,
            band,
        });
        self.final_state = transition(state, band);
        self
    }

    pub fn initial_state(&self) -> CellState {
        self.initial_state
    }

    /// State after the last recorded reading; the initial state if empty.
    pub fn final_state(&self) -> CellState {
        self.final_state
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn readings(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.reading).collect()
    }

    pub fn states(&self) -> Vec<CellState> {
        self.samples.iter().map(|s| s.state).collect()
    }

    pub fn bands(&self) -> Vec<Band> {
        self.samples.iter().map(|s| s.band).collect()
    }

    /// Every state visited, including the final one: `len() + 1` entries.
    pub fn path(&self) -> Vec<CellState> {
        let mut path = self.states();
        path.push(self.final_state);
        path
    }

    /// `(state, next_state)` pairs, one per sample.
    pub fn transitions(&self) -> impl Iterator<Item = (CellState, CellState)> + '_ {
        let next = self
            .samples
            .iter()
            .skip(1)
            .map(|s| s.state)
            .chain(std::iter::once(self.final_state));
        self.samples.iter().map(|s| s.state).zip(next)
    }

    /// Distinct sampled states ordered by label, for plotting on a
    /// categorical axis. A state's position in the result is its axis index.
    pub fn state_axis(&self) -> Vec<CellState> {
        let mut states = self.states();
        states.sort_by_key(|s| s.label());
        states.dedup();
        states
    }
}
