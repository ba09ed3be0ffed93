//! Simulation options.
//!
//! Options are plain serde values so a caller can load them from whatever
//! configuration source it already has. Missing fields fall back to
//! [`SimulationOptions::default`].

use serde::{Deserialize, Serialize};

/// What to do with a character outside the alphabet `{0,1}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidSymbolPolicy {
    /// Fail the whole run with [`SimulationError::InvalidSymbol`](crate::SimulationError).
    #[default]
    Reject,

    /// Drop the character and keep going, as an input box that filters
    /// keystrokes would.
    Skip,
}

/// Options shared by every simulator entry point.
///
/// # Example
///
/// ```
/// use seqdetect::{InvalidSymbolPolicy, SimulationOptions};
///
/// let options = SimulationOptions::new().on_invalid_symbol(InvalidSymbolPolicy::Skip);
/// assert_eq!(options.invalid_symbols, InvalidSymbolPolicy::Skip);
///
/// let parsed: SimulationOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(parsed, SimulationOptions::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    /// Policy for characters outside `{0,1}`.
    pub invalid_symbols: InvalidSymbolPolicy,
}

impl SimulationOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the invalid symbol policy.
    pub fn on_invalid_symbol(mut self, policy: InvalidSymbolPolicy) -> Self {
        self.invalid_symbols = policy;
        self
    }
}
