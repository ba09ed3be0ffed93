//! Mealy detector: output is a function of (state, input).

use crate::config::SimulationOptions;
use crate::core::{simulate, MachineKind, SimulationResult, State, Symbol, Transducer};
use crate::error::SimulationError;

state_enum! {
    /// States of the Mealy detector.
    pub enum MealyState {
        /// Start state; the last symbol was not `0`.
        A,
        /// The last symbol was `0`.
        B,
    }
}

/// Two-state transducer that emits `1` on the step completing `01`.
///
/// | state | symbol | next | output |
/// |-------|--------|------|--------|
/// | A     | 0      | B    | -      |
/// | A     | 1      | A    | -      |
/// | B     | 0      | B    | -      |
/// | B     | 1      | A    | 1      |
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceDetectorMealy;

impl Transducer for SequenceDetectorMealy {
    type State = MealyState;
    const KIND: MachineKind = MachineKind::Mealy;

    fn initial() -> MealyState {
        MealyState::A
    }

    fn transition(state: MealyState, symbol: Symbol) -> (MealyState, Option<Symbol>) {
        match (state, symbol) {
            (MealyState::A, Symbol::Zero) => (MealyState::B, None),
            (MealyState::A, Symbol::One) => (MealyState::A, None),
            (MealyState::B, Symbol::Zero) => (MealyState::B, None),
            (MealyState::B, Symbol::One) => (MealyState::A, Some(Symbol::One)),
        }
    }

    fn initial_output(_: MealyState) -> Option<Symbol> {
        None
    }

    fn label(state: MealyState) -> String {
        state.name().to_string()
    }
}

/// Simulate the Mealy detector, rejecting characters outside `{0,1}`.
///
/// The output string holds one character per input symbol: `1` where `01`
/// completes, `0` elsewhere.
///
/// # Example
///
/// ```
/// use seqdetect::simulate_mealy;
///
/// let result = simulate_mealy("0110101").unwrap();
/// assert_eq!(result.output(), "0100101");
/// assert_eq!(result.steps()[2].to_string(), "(2, 1, A, 1)");
/// ```
pub fn simulate_mealy(input: &str) -> Result<SimulationResult, SimulationError> {
    simulate_mealy_with(input, &SimulationOptions::default())
}

/// Simulate the Mealy detector under explicit options.
pub fn simulate_mealy_with(
    input: &str,
    options: &SimulationOptions,
) -> Result<SimulationResult, SimulationError> {
    simulate::<SequenceDetectorMealy>(input, options)
}
