//! Islet: a pure functional model of pancreatic islet glucose regulation
//!
//! Three cell groups share one automaton state: alpha cells (raise glucose),
//! beta cells (lower glucose) and delta cells (inhibit both). A synthetic
//! glucose signal is classified into LOW, NORMAL or HIGH bands, and each band
//! drives one transition of the automaton.
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! (states, classification, transitions, trajectories) is made of pure
//! functions; the simulation loop, reports and logging sit around it.
//!
//! # Core Concepts
//!
//! - **CellState**: closed enumeration of the eight `(alpha, beta, delta)` tuples
//! - **Classifier**: splits readings into bands with two thresholds
//! - **transition**: threshold crossing, conflict resolution and hysteresis
//! - **Trajectory**: time-ordered record of readings and states
//! - **TransitionGraph**: every state under every band, as a directed graph
//!
//! # Example
//!
//! ```rust
//! use islet::builder::SimulationBuilder;
//! use islet::core::CellState;
//! use islet::signal::SignalShape;
//!
//! let simulation = SimulationBuilder::new()
//!     .initial(CellState::Alpha)
//!     .signal(SignalShape::canonical())
//!     .build()
//!     .unwrap();
//!
//! let trajectory = simulation.run();
//! assert_eq!(trajectory.len(), 1000);
//!
//! let graph = simulation.transition_graph();
//! assert_eq!(graph.nodes().len(), 8);
//! ```

pub mod builder;
pub mod core;
pub mod graph;
pub mod report;
pub mod signal;
pub mod simulation;
pub mod validation;

// Re-export commonly used types
pub use builder::{ConfigError, SimulationBuilder};
pub use crate::core::{transition, Band, CellState, Classifier, Trajectory};
pub use graph::TransitionGraph;
pub use simulation::{Simulation, SimulationConfig};
