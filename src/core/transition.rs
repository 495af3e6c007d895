//! The islet transition function.
//!
//! Pure and total: every one of the eight states combined with every band
//! yields one of the eight states.

use crate::core::band::Band;
use crate::core::state::CellState;

/// Compute the next state from the current state and the glucose band.
///
/// Rules, in order of precedence:
///
/// 1. A conflict in the previous state (alpha and beta both active) always
///    resolves to delta alone, `(0, 0, 1)`, whatever the band.
/// 2. HIGH activates beta and silences alpha, `(0, 1, 0)`.
/// 3. LOW activates alpha and silences beta, `(1, 0, 0)`.
/// 4. NORMAL carries alpha and beta forward unchanged. Cells active before
///    entering the homeostatic band stay active (hysteresis).
///
/// Delta never persists: outside of rule 1 it is always cleared.
///
/// # Example
///
/// ```rust
/// use islet::core::{transition, Band, CellState};
///
/// assert_eq!(transition(CellState::Alpha, Band::High), CellState::Beta);
/// assert_eq!(transition(CellState::Beta, Band::Normal), CellState::Beta);
/// assert_eq!(transition(CellState::AlphaBeta, Band::Low), CellState::Delta);
/// ```
pub fn transition(state: CellState, band: Band) -> CellState {
    if state.is_conflict() {
        return CellState::Delta;
    }

    let (alpha, beta) = match band {
        Band::High => (false, true),
        Band::Low => (true, false),
        Band::Normal => (state.alpha(), state.beta()),
    };

    CellState::from_bools(alpha, beta, false)
}
