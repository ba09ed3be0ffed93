//! Moore detector: output is a function of the state alone.

use crate::config::SimulationOptions;
use crate::core::{simulate, MachineKind, SimulationResult, State, Symbol, Transducer};
use crate::error::SimulationError;

state_enum! {
    /// States of the Moore detector.
    pub enum MooreState {
        A,
        B,
        /// Reached right after `01`; the only state that outputs `1`.
        C,
    }
}

impl MooreState {
    /// The fixed state output.
    pub fn output(self) -> Symbol {
        match self {
            Self::A | Self::B => Symbol::Zero,
            Self::C => Symbol::One,
        }
    }

    /// Composite `state/output` label, e.g. `C/1`.
    pub fn label(self) -> String {
        format!("{}/{}", self.name(), self.output())
    }
}

/// Three-state transducer whose arrival in `C` signals `01`.
///
/// | state | symbol | next |
/// |-------|--------|------|
/// | A/0   | 0      | B    |
/// | A/0   | 1      | A    |
/// | B/0   | 0      | B    |
/// | B/0   | 1      | C    |
/// | C/1   | 0      | B    |
/// | C/1   | 1      | A    |
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceDetectorMoore;

impl Transducer for SequenceDetectorMoore {
    type State = MooreState;
    const KIND: MachineKind = MachineKind::Moore;

    fn initial() -> MooreState {
        MooreState::A
    }

    fn transition(state: MooreState, symbol: Symbol) -> (MooreState, Option<Symbol>) {
        let next = match (state, symbol) {
            (MooreState::A, Symbol::Zero) => MooreState::B,
            (MooreState::A, Symbol::One) => MooreState::A,
            (MooreState::B, Symbol::Zero) => MooreState::B,
            (MooreState::B, Symbol::One) => MooreState::C,
            (MooreState::C, Symbol::Zero) => MooreState::B,
            (MooreState::C, Symbol::One) => MooreState::A,
        };
        (next, Some(next.output()))
    }

    fn initial_output(state: MooreState) -> Option<Symbol> {
        Some(state.output())
    }

    fn label(state: MooreState) -> String {
        state.label()
    }
}

/// Simulate the Moore detector, rejecting characters outside `{0,1}`.
///
/// The output string starts with the output of `A` and then carries one
/// character per input symbol.
///
/// # Example
///
/// ```
/// use seqdetect::simulate_moore;
///
/// let result = simulate_moore("0110101").unwrap();
/// assert_eq!(result.output(), "00100101");
/// assert_eq!(result.steps()[2].state, "C/1");
/// ```
pub fn simulate_moore(input: &str) -> Result<SimulationResult, SimulationError> {
    simulate_moore_with(input, &SimulationOptions::default())
}

/// Simulate the Moore detector under explicit options.
pub fn simulate_moore_with(
    input: &str,
    options: &SimulationOptions,
) -> Result<SimulationResult, SimulationError> {
    simulate::<SequenceDetectorMoore>(input, options)
}
