//! Builder API for ergonomic simulation construction.
//!
//! The builder collects time range, signal, thresholds and initial state, and
//! validates all of them together when `.build()` is called.

pub mod error;
pub mod simulation;

pub use error::ConfigError;
pub use simulation::SimulationBuilder;
