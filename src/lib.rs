//! Seqdetect: pure Mealy and Moore detectors for the sequence `01`
//!
//! Two hard-coded finite-state transducers read a binary string and report,
//! step by step, where `01` occurs. They contrast the two output models:
//!
//! - **Mealy**: output depends on the current state *and* the input symbol.
//!   Two states, and `1` is emitted on the very transition that completes `01`.
//! - **Moore**: output depends only on the state. A third state `C/1` is
//!   needed, and `1` is the output of the state entered after `01`.
//!
//! Every run is a pure function of its input. Nothing is shared between
//! runs, so simulators can be called from any number of threads at once.
//!
//! # Example
//!
//! ```rust
//! use seqdetect::{simulate_mealy, simulate_moore};
//!
//! let mealy = simulate_mealy("0110101").unwrap();
//! assert_eq!(mealy.len(), 8);
//! assert_eq!(mealy.output(), "0100101");
//!
//! let moore = simulate_moore("0110101").unwrap();
//! assert_eq!(moore.output(), "00100101");
//! assert_eq!(moore.steps()[5].state, "C/1");
//! ```

#[macro_use]
mod macros;

pub mod compare;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod machines;

// Re-export commonly used types
pub use compare::{compare, compare_with, Comparison, DEFAULT_INPUT};
pub use config::{InvalidSymbolPolicy, SimulationOptions};
pub use crate::core::{SimulationResult, StepRecord, Symbol};
pub use error::SimulationError;
pub use machines::{
    simulate_mealy, simulate_mealy_with, simulate_moore, simulate_moore_with,
    SequenceDetectorMealy, SequenceDetectorMoore,
};
