//! The transducer seam shared by both detectors, and the run loop.

use super::state::State;
use super::symbol::{parse_input, Symbol};
use super::trace::{SimulationResult, StepRecord};
use crate::config::SimulationOptions;
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Which output model a transducer follows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineKind {
    /// Output depends on the current state and the input symbol.
    Mealy,
    /// Output depends only on the state.
    Moore,
}

impl fmt::Display for MachineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mealy => f.write_str("mealy"),
            Self::Moore => f.write_str("moore"),
        }
    }
}

/// A deterministic finite-state transducer over `{0,1}`.
///
/// Implementations are stateless: every method is a pure function of its
/// arguments, so a run keeps its current state in a local variable.
pub trait Transducer {
    /// The machine's state set.
    type State: State;

    /// The output model this machine follows.
    const KIND: MachineKind;

    /// The state a run starts in.
    fn initial() -> Self::State;

    /// Total transition function: next state and the symbol emitted on the
    /// way there, `None` when the transition is silent.
    fn transition(state: Self::State, symbol: Symbol) -> (Self::State, Option<Symbol>);

    /// Output before any input is consumed.
    fn initial_output(state: Self::State) -> Option<Symbol>;

    /// Label shown for a state in a trace.
    fn label(state: Self::State) -> String;
}

/// Run a transducer over already parsed symbols.
///
/// Step 0 contributes its output only when it has one. Every later step
/// contributes exactly one character; a silent transition writes `0`.
pub fn run<T: Transducer>(symbols: &[Symbol]) -> SimulationResult {
    debug!(machine = %T::KIND, symbols = symbols.len(), "running transducer");

    let mut state = T::initial();
    let mut steps = Vec::with_capacity(symbols.len() + 1);
    let mut output = String::with_capacity(symbols.len() + 1);

    let initial_output = T::initial_output(state);
    if let Some(symbol) = initial_output {
        output.push(symbol.as_char());
    }
    steps.push(StepRecord {
        step: 0,
        input: None,
        state: T::label(state),
        output: initial_output,
    });

    for (index, &symbol) in symbols.iter().enumerate() {
        let (next, emitted) = T::transition(state, symbol);
        trace!(
            machine = %T::KIND,
            step = index + 1,
            from = state.name(),
            to = next.name(),
            %symbol,
            "transition"
        );
        state = next;
        output.push(emitted.unwrap_or(Symbol::Zero).as_char());
        steps.push(StepRecord {
            step: index + 1,
            input: Some(symbol),
            state: T::label(state),
            output: emitted,
        });
    }

    SimulationResult::new(steps, output)
}

/// Parse raw input under `options` and run a transducer over it.
///
/// Fails before any step is simulated when the input is rejected.
pub fn simulate<T: Transducer>(
    input: &str,
    options: &SimulationOptions,
) -> Result<SimulationResult, SimulationError> {
    let symbols = parse_input(input, options.invalid_symbols)?;
    Ok(run::<T>(&symbols))
}

/// One edge of a transducer's transition diagram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRow<S> {
    pub from: S,
    pub symbol: Symbol,
    pub to: S,
    pub output: Option<Symbol>,
}

/// Enumerate every `(state, symbol)` pair of a transducer.
///
/// Rows come in state order, then `0` before `1`.
pub fn transition_table<T: Transducer>() -> Vec<TransitionRow<T::State>> {
    T::State::all()
        .iter()
        .flat_map(|&from| {
            Symbol::ALL.into_iter().map(move |symbol| {
                let (to, output) = T::transition(from, symbol);
                TransitionRow {
                    from,
                    symbol,
                    to,
                    output,
                }
            })
        })
        .collect()
}
