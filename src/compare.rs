//! Running both detectors side by side.

use crate::config::SimulationOptions;
use crate::core::{parse_input, run, SimulationResult};
use crate::error::SimulationError;
use crate::machines::{SequenceDetectorMealy, SequenceDetectorMoore};
use serde::{Deserialize, Serialize};

/// Input shown before the user types anything.
pub const DEFAULT_INPUT: &str = "0110101";

/// Traces of both detectors over the same input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub mealy: SimulationResult,
    pub moore: SimulationResult,
}

impl Comparison {
    /// Steps at which the Mealy machine emitted `1`.
    ///
    /// The Moore machine enters `C/1` at exactly these steps.
    pub fn detections(&self) -> Vec<usize> {
        self.mealy.detections()
    }

    /// Whether both machines signalled `01` at the same steps.
    pub fn agree(&self) -> bool {
        self.mealy.detections() == self.moore.detections()
    }
}

/// Run both detectors over `input`, rejecting characters outside `{0,1}`.
///
/// # Example
///
/// ```
/// use seqdetect::{compare, DEFAULT_INPUT};
///
/// let comparison = compare(DEFAULT_INPUT).unwrap();
/// assert!(comparison.agree());
/// assert_eq!(comparison.detections(), vec![2, 5, 7]);
/// ```
pub fn compare(input: &str) -> Result<Comparison, SimulationError> {
    compare_with(input, &SimulationOptions::default())
}

/// Run both detectors over `input` under explicit options.
///
/// Input is parsed once, so both machines see the same symbols.
pub fn compare_with(
    input: &str,
    options: &SimulationOptions,
) -> Result<Comparison, SimulationError> {
    let symbols = parse_input(input, options.invalid_symbols)?;
    Ok(Comparison {
        mealy: run::<SequenceDetectorMealy>(&symbols),
        moore: run::<SequenceDetectorMoore>(&symbols),
    })
}
