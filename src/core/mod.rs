//! Pure core of the islet automaton.
//!
//! This module contains everything the simulation is built from:
//! - `CellState`: the closed set of eight alpha/beta/delta states
//! - `Band`, `Thresholds` and `Classifier`: reading classification
//! - `transition`: the automaton itself
//! - `Trajectory`: the immutable record of a run
//!
//! All logic in this module is pure (no side effects, no I/O).

#[macro_use]
mod macros;

mod band;
mod classifier;
mod state;
mod trajectory;
mod transition;

pub use band::{Band, Thresholds};
pub use classifier::{
    Classifier, ClassifierConfig, Representatives, DEFAULT_FRACTION, DEFAULT_ROUND_DIGITS,
};
pub use state::{CellState, StateError};
pub use trajectory::{Sample, Trajectory};
pub use transition::transition;
