//! The closed set of islet automaton states.
//!
//! A state records which of the three cell groups (alpha, beta, delta) is
//! currently active. All eight flag combinations are representable and the
//! automaton accepts any of them as input.

use thiserror::Error;

/// Errors raised when converting raw flag tuples into states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    /// The tuple is not one of the eight binary `(alpha, beta, delta)` tuples.
    #[error("Unknown cell state ({alpha}, {beta}, {delta}); flags must be 0 or 1")]
    UnknownFlags { alpha: u8, beta: u8, delta: u8 },
}

crate::cell_states! {
    /// Activity of the alpha, beta and delta cell groups.
    ///
    /// # Example
    ///
    /// ```rust
    /// use islet::core::CellState;
    ///
    /// let state = CellState::from_flags(1, 0, 0).unwrap();
    /// assert_eq!(state, CellState::Alpha);
    /// assert_eq!(state.label(), "1, 0, 0");
    /// assert!(state.alpha());
    /// assert!(!state.is_conflict());
    /// ```
    pub enum CellState {
        /// No group active.
        Quiescent = (0, 0, 0),
        /// Glucagon-releasing alpha cells active.
        Alpha = (1, 0, 0),
        /// Insulin-releasing beta cells active.
        Beta = (0, 1, 0),
        /// Somatostatin-releasing delta cells active.
        Delta = (0, 0, 1),
        /// Alpha and beta both active: a conflict.
        AlphaBeta = (1, 1, 0),
        AlphaDelta = (1, 0, 1),
        BetaDelta = (0, 1, 1),
        /// All three active, also a conflict.
        AllActive = (1, 1, 1),
    }
}

impl CellState {
    /// Build a state from boolean flags. Total over all eight combinations.
    pub const fn from_bools(alpha: bool, beta: bool, delta: bool) -> Self {
        match (alpha, beta, delta) {
            (false, false, false) => Self::Quiescent,
            (true, false, false) => Self::Alpha,
            (false, true, false) => Self::Beta,
            (false, false, true) => Self::Delta,
            (true, true, false) => Self::AlphaBeta,
            (true, false, true) => Self::AlphaDelta,
            (false, true, true) => Self::BetaDelta,
            (true, true, true) => Self::AllActive,
        }
    }

    pub const fn alpha(self) -> bool {
        self.flags().0 == 1
    }

    pub const fn beta(self) -> bool {
        self.flags().1 == 1
    }

    pub const fn delta(self) -> bool {
        self.flags().2 == 1
    }

    /// Alpha and beta are active at the same time.
    ///
    /// The transition rules never produce such a state on their own; it can
    /// only be injected as an initial state.
    pub const fn is_conflict(self) -> bool {
        self.alpha() && self.beta()
    }
}

impl Default for CellState {
    /// The canonical initial state `(1, 0, 0)`.
    fn default() -> Self {
        Self::Alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_eight_distinct_states() {
        assert_eq!(CellState::ALL.len(), 8);
        let mut flags: Vec<_> = CellState::ALL.iter().map(|s| s.flags()).collect();
        flags.sort();
        flags.dedup();
        assert_eq!(flags.len(), 8);
    }

    #[test]
    fn from_bools_agrees_with_flags() {
        for state in CellState::ALL {
            let rebuilt = CellState::from_bools(state.alpha(), state.beta(), state.delta());
            assert_eq!(rebuilt, *state);
        }
    }

    #[test]
    fn labels_match_flag_tuples() {
        assert_eq!(CellState::Quiescent.label(), "0, 0, 0");
        assert_eq!(CellState::Beta.label(), "0, 1, 0");
        assert_eq!(CellState::BetaDelta.label(), "0, 1, 1");
        assert_eq!(CellState::AllActive.to_string(), "1, 1, 1");
    }

    #[test]
    fn non_binary_flags_fail_loudly() {
        let result = CellState::from_flags(2, 0, 0);
        assert!(matches!(result, Err(StateError::UnknownFlags { alpha: 2, .. })));
    }

    #[test]
    fn conflict_states_are_alpha_and_beta() {
        let conflicts: Vec<_> = CellState::ALL
            .iter()
            .copied()
            .filter(|s| s.is_conflict())
            .collect();
        assert_eq!(conflicts, vec![CellState::AlphaBeta, CellState::AllActive]);
    }

    #[test]
    fn default_is_alpha() {
        assert_eq!(CellState::default(), CellState::Alpha);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CellState::BetaDelta;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CellState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
