//! The binary input/output alphabet and raw input handling.

use crate::config::InvalidSymbolPolicy;
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A symbol of the alphabet `{0,1}`.
///
/// Serializes as the strings `"0"` and `"1"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
}

impl Symbol {
    /// Both symbols, `0` first.
    pub const ALL: [Symbol; 2] = [Symbol::Zero, Symbol::One];

    /// The character written for this symbol.
    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Map `'0'`/`'1'` to a symbol; anything else is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse raw text into symbols.
///
/// Under [`InvalidSymbolPolicy::Reject`] the first character outside
/// `{0,1}` fails the parse and nothing is returned. Under
/// [`InvalidSymbolPolicy::Skip`] such characters are dropped.
///
/// # Example
///
/// ```
/// use seqdetect::core::{parse_input, Symbol};
/// use seqdetect::{InvalidSymbolPolicy, SimulationError};
///
/// let symbols = parse_input("01", InvalidSymbolPolicy::Reject).unwrap();
/// assert_eq!(symbols, vec![Symbol::Zero, Symbol::One]);
///
/// let err = parse_input("0a1", InvalidSymbolPolicy::Reject).unwrap_err();
/// assert_eq!(err, SimulationError::InvalidSymbol { symbol: 'a', position: 1 });
///
/// let skipped = parse_input("0a1", InvalidSymbolPolicy::Skip).unwrap();
/// assert_eq!(skipped.len(), 2);
/// ```
pub fn parse_input(input: &str, policy: InvalidSymbolPolicy) -> Result<Vec<Symbol>, SimulationError> {
    let mut symbols = Vec::with_capacity(input.len());
    for (position, c) in input.chars().enumerate() {
        match (Symbol::from_char(c), policy) {
            (Some(symbol), _) => symbols.push(symbol),
            (None, InvalidSymbolPolicy::Reject) => {
                return Err(SimulationError::InvalidSymbol {
                    symbol: c,
                    position,
                })
            }
            (None, InvalidSymbolPolicy::Skip) => {
                debug!(symbol = ?c, position, "skipping symbol outside {{0,1}}");
            }
        }
    }
    Ok(symbols)
}

/// Remove every character that is not `0` or `1`.
///
/// ```
/// assert_eq!(seqdetect::core::sanitize("01 2x10"), "0110");
/// ```
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| matches!(c, '0' | '1')).collect()
}
