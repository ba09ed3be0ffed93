//! Core transducer types and the shared run loop.
//!
//! This module contains the pure functional core:
//! - State definitions via the `State` trait
//! - The binary alphabet and raw input parsing
//! - Step traces
//! - The `Transducer` seam and the loop that drives it
//!
//! Nothing in this module keeps state between calls.

mod state;
mod symbol;
mod trace;
mod transducer;

pub use state::State;
pub use symbol::{parse_input, sanitize, Symbol};
pub use trace::{SimulationResult, StepRecord};
pub use transducer::{run, simulate, transition_table, MachineKind, Transducer, TransitionRow};
