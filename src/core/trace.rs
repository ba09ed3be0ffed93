//! Step-by-step simulation traces.
//!
//! A trace is produced once per run and owned by the caller. It is never
//! updated after the run returns.

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single simulation step.
///
/// Step 0 describes the machine before any input is consumed; its `input`
/// is always `None`. Step `i` describes the machine right after the i-th
/// symbol.
///
/// `None` in `input` or `output` is the "nothing here" sentinel and is
/// displayed as `-`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Index of the step, starting at 0
    pub step: usize,
    /// Symbol consumed to reach this step
    pub input: Option<Symbol>,
    /// Label of the state after this step
    pub state: String,
    /// Symbol emitted at this step
    pub output: Option<Symbol>,
}

impl StepRecord {
    /// Whether this step emitted `1`.
    pub fn is_detection(&self) -> bool {
        self.output == Some(Symbol::One)
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentinel = |s: Option<Symbol>| s.map_or('-', Symbol::as_char);
        write!(
            f,
            "({}, {}, {}, {})",
            self.step,
            sentinel(self.input),
            self.state,
            sentinel(self.output)
        )
    }
}

/// Result of one simulation run.
///
/// Holds one [`StepRecord`] per step (input length + 1) and the output
/// string accumulated over the run.
///
/// # Example
///
/// ```
/// use seqdetect::simulate_mealy;
///
/// let result = simulate_mealy("01").unwrap();
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.output(), "01");
/// assert_eq!(result.detections(), vec![2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    steps: Vec<StepRecord>,
    output: String,
}

impl SimulationResult {
    pub(crate) fn new(steps: Vec<StepRecord>, output: String) -> Self {
        Self { steps, output }
    }

    /// All step records in step order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// The accumulated output string.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of step records, including step 0.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A trace always carries step 0, so this only holds for a value that
    /// was not produced by a simulator.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The record of the last step taken.
    pub fn final_step(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    /// Indices of the steps that emitted `1`.
    pub fn detections(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter(|record| record.is_detection())
            .map(|record| record.step)
            .collect()
    }

    /// Split into the step records and the output string.
    pub fn into_parts(self) -> (Vec<StepRecord>, String) {
        (self.steps, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(step: usize, input: Option<Symbol>, state: &str, output: Option<Symbol>) -> StepRecord {
        StepRecord {
            step,
            input,
            state: state.to_string(),
            output,
        }
    }

    #[test]
    fn display_uses_dash_for_sentinels() {
        assert_eq!(record(0, None, "A", None).to_string(), "(0, -, A, -)");
        assert_eq!(
            record(2, Some(Symbol::One), "C/1", Some(Symbol::One)).to_string(),
            "(2, 1, C/1, 1)"
        );
    }

    #[test]
    fn detections_lists_steps_emitting_one() {
        let result = SimulationResult::new(
            vec![
                record(0, None, "A", None),
                record(1, Some(Symbol::Zero), "B", None),
                record(2, Some(Symbol::One), "A", Some(Symbol::One)),
            ],
            "01".to_string(),
        );

        assert_eq!(result.detections(), vec![2]);
        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
        assert_eq!(result.final_step().map(|r| r.state.as_str()), Some("A"));
    }

    #[test]
    fn into_parts_returns_fields() {
        let result = SimulationResult::new(vec![record(0, None, "A/0", Some(Symbol::Zero))], "0".into());
        let (steps, output) = result.into_parts();
        assert_eq!(steps.len(), 1);
        assert_eq!(output, "0");
    }

    #[test]
    fn result_serializes_with_digit_symbols() {
        let result = SimulationResult::new(vec![record(0, None, "A", None)], String::new());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"steps":[{"step":0,"input":null,"state":"A","output":null}],"output":""}"#
        );
    }
}
