//! Full transition graph of the islet automaton.
//!
//! The graph is an exhaustive materialization of the transition table: every
//! state is fed every band, and each distinct `(state, next_state)` pair
//! becomes one edge labelled with the bands' representative readings.

use crate::core::{transition, Band, CellState, Classifier};
use serde::{Deserialize, Serialize};

/// A band, with the representative reading used for it, that produced an edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub band: Band,
    pub reading: f64,
}

/// Directed edge between two states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub from: CellState,
    pub to: CellState,
    pub triggers: Vec<Trigger>,
}

impl TransitionEdge {
    /// One `(reading, alpha, beta, delta)` line per trigger, newline separated.
    pub fn label(&self) -> String {
        let (alpha, beta, delta) = self.from.flags();
        self.triggers
            .iter()
            .map(|t| format!("({:?}, {alpha}, {beta}, {delta})", t.reading))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Directed graph with the eight states as nodes and observed transitions as
/// edges.
///
/// # Example
///
/// ```rust
/// use islet::core::{CellState, Classifier};
/// use islet::graph::TransitionGraph;
///
/// let classifier = Classifier::fixed(0.8, 1.2).unwrap();
/// let graph = TransitionGraph::build(&classifier);
///
/// assert_eq!(graph.nodes().len(), 8);
/// assert_eq!(graph.successors(CellState::AlphaBeta), vec![CellState::Delta]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionGraph {
    nodes: Vec<CellState>,
    edges: Vec<TransitionEdge>,
}

impl TransitionGraph {
    /// Evaluate the automaton on every state and band.
    ///
    /// Each band drives the automaton directly; its representative reading
    /// only annotates the edge label.
    ///
    /// Edges appear in the order they are first observed: states in
    /// declaration order, bands LOW, NORMAL, HIGH.
    pub fn build(classifier: &Classifier) -> Self {
        let nodes = CellState::ALL.to_vec();
        let mut edges: Vec<TransitionEdge> = Vec::new();

        for &from in &nodes {
            for band in Band::ALL {
                let to = transition(from, band);
                let trigger = Trigger {
                    band,
                    reading: classifier.representative(band),
                };

                match edges.iter_mut().find(|e| e.from == from && e.to == to) {
                    Some(edge) => edge.triggers.push(trigger),
                    None => edges.push(TransitionEdge {
                        from,
                        to,
                        triggers: vec![trigger],
                    }),
                }
            }
        }

        log::debug!(
            "Built transition graph: {} nodes, {} edges",
            nodes.len(),
            edges.len()
        );

        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[CellState] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TransitionEdge] {
        &self.edges
    }

    pub fn edge(&self, from: CellState, to: CellState) -> Option<&TransitionEdge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    /// Distinct successors of `state`, in edge order.
    pub fn successors(&self, state: CellState) -> Vec<CellState> {
        self.edges
            .iter()
            .filter(|e| e.from == state)
            .map(|e| e.to)
            .collect()
    }

    /// States with at least one incoming edge.
    pub fn reachable(&self) -> Vec<CellState> {
        self.nodes
            .iter()
            .copied()
            .filter(|&n| self.edges.iter().any(|e| e.to == n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassifierConfig;
    use crate::signal::{SignalShape, TimeGrid};

    fn canonical_graph() -> TransitionGraph {
        let classifier =
            Classifier::from_config(&ClassifierConfig::default(), &SignalShape::canonical())
                .unwrap();
        TransitionGraph::build(&classifier)
    }

    #[test]
    fn graph_has_every_state_as_node() {
        let graph = canonical_graph();
        assert_eq!(graph.nodes(), CellState::ALL);
    }

    #[test]
    fn every_state_and_band_pair_is_a_trigger() {
        let graph = canonical_graph();
        let triggers: usize = graph.edges().iter().map(|e| e.triggers.len()).sum();

        assert_eq!(triggers, 24);
        assert_eq!(graph.edges().len(), 16);
    }

    #[test]
    fn quiescent_state_has_three_successors() {
        let graph = canonical_graph();
        assert_eq!(
            graph.successors(CellState::Quiescent),
            vec![CellState::Alpha, CellState::Quiescent, CellState::Beta]
        );
    }

    #[test]
    fn shared_edges_concatenate_labels() {
        let graph = canonical_graph();

        let edge = graph.edge(CellState::AlphaBeta, CellState::Delta).unwrap();
        assert_eq!(edge.label(), "(-1.0, 1, 1, 0)\n(0.0, 1, 1, 0)\n(1.0, 1, 1, 0)");

        let edge = graph.edge(CellState::Alpha, CellState::Alpha).unwrap();
        assert!(edge.is_self_loop());
        assert_eq!(
            edge.triggers.iter().map(|t| t.band).collect::<Vec<_>>(),
            vec![Band::Low, Band::Normal]
        );
    }

    #[test]
    fn conflict_states_are_never_reached() {
        let reachable = canonical_graph().reachable();

        assert!(!reachable.iter().any(|s| s.is_conflict()));
        assert_eq!(
            reachable,
            vec![
                CellState::Quiescent,
                CellState::Alpha,
                CellState::Beta,
                CellState::Delta
            ]
        );
    }

    #[test]
    fn boundary_representatives_keep_their_band() {
        let classifier = Classifier::statistical(
            &SignalShape::canonical(),
            &TimeGrid::default(),
            0.01,
            Some(1),
        )
        .unwrap();
        assert_eq!(classifier.lower_bound(), classifier.g_min());
        assert_eq!(classifier.classify(classifier.g_min()), Band::Normal);

        let graph = TransitionGraph::build(&classifier);

        let edge = graph.edge(CellState::Beta, CellState::Alpha).unwrap();
        assert_eq!(
            edge.triggers,
            vec![Trigger {
                band: Band::Low,
                reading: -1.0
            }]
        );

        let edge = graph.edge(CellState::Beta, CellState::Beta).unwrap();
        assert!(edge.triggers.iter().all(|t| t.band != Band::Low));
        assert_eq!(graph, canonical_graph());
    }

    #[test]
    fn graph_serializes_correctly() {
        let graph = canonical_graph();
        let json = serde_json::to_string(&graph).unwrap();
        let deserialized: TransitionGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, deserialized);
    }
}
