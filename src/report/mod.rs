//! Serializable snapshots of finished simulation runs.
//!
//! A report bundles the configuration, the derived thresholds, the trajectory
//! and the full transition graph, so that presentation tools can render a run
//! without re-simulating it.

use crate::core::{Representatives, Thresholds, Trajectory};
use crate::graph::TransitionGraph;
use crate::simulation::{Simulation, SimulationConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Snapshot of a run.
///
/// # Example
///
/// ```rust
/// use islet::report::SimulationReport;
/// use islet::simulation::{Simulation, SimulationConfig};
///
/// let simulation = Simulation::new(SimulationConfig::default()).unwrap();
/// let report = SimulationReport::new(&simulation, simulation.run());
///
/// let bytes = report.to_bytes().unwrap();
/// let restored = SimulationReport::from_bytes(&bytes).unwrap();
/// assert_eq!(restored.trajectory, report.trajectory);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: String,

    /// When the report was created
    pub created_at: DateTime<Utc>,

    pub config: SimulationConfig,

    pub thresholds: Thresholds,

    pub representatives: Representatives,

    pub trajectory: Trajectory,

    pub graph: TransitionGraph,
}

impl SimulationReport {
    /// Capture `trajectory`, produced by `simulation`, with its graph.
    pub fn new(simulation: &Simulation, trajectory: Trajectory) -> Self {
        let classifier = simulation.classifier();
        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            config: simulation.config().clone(),
            thresholds: *classifier.thresholds(),
            representatives: *classifier.representatives(),
            trajectory,
            graph: simulation.transition_graph(),
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    fn check_version(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SimulationBuilder;
    use crate::core::CellState;
    use crate::signal::SignalShape;

    fn small_report() -> SimulationReport {
        let simulation = SimulationBuilder::new()
            .initial(CellState::Alpha)
            .signal(SignalShape::Constant { value: 1.5 })
            .time_range(0.0, 4.0)
            .points(5)
            .fixed_thresholds(0.8, 1.2)
            .build()
            .unwrap();
        SimulationReport::new(&simulation, simulation.run())
    }

    #[test]
    fn report_captures_run() {
        let report = small_report();

        assert_eq!(report.version, REPORT_VERSION);
        assert_eq!(report.trajectory.len(), 5);
        assert_eq!(report.thresholds.lower(), 0.8);
        assert_eq!(report.graph.nodes().len(), 8);
        assert!(Uuid::parse_str(&report.id).is_ok());
    }

    #[test]
    fn json_roundtrip_preserves_run() {
        let report = small_report();

        let json = report.to_json().unwrap();
        let restored = SimulationReport::from_json(&json).unwrap();

        assert_eq!(restored.id, report.id);
        assert_eq!(restored.config, report.config);
        assert_eq!(restored.trajectory, report.trajectory);
        assert_eq!(restored.graph.edges().len(), report.graph.edges().len());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut report = small_report();
        report.version = REPORT_VERSION + 1;

        let json = report.to_json().unwrap();
        let result = SimulationReport::from_json(&json);

        assert!(matches!(
            result,
            Err(ReportError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_input_fails_to_deserialize() {
        assert!(matches!(
            SimulationReport::from_json("{not json"),
            Err(ReportError::DeserializationFailed(_))
        ));
        assert!(matches!(
            SimulationReport::from_bytes(&[1, 2, 3]),
            Err(ReportError::DeserializationFailed(_))
        ));
    }
}
