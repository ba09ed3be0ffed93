//! Simulation errors.

use thiserror::Error;

/// Errors that can occur when simulating a transducer over raw input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A character outside the binary alphabet `{0,1}`.
    ///
    /// `position` is the 0-based character index in the raw input.
    #[error("Invalid symbol {symbol:?} at position {position}, expected '0' or '1'")]
    InvalidSymbol { symbol: char, position: usize },
}
