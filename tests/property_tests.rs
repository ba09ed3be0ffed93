//! Property-based tests for both detectors.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use seqdetect::core::sanitize;
use seqdetect::{
    compare, simulate_mealy, simulate_mealy_with, simulate_moore, simulate_moore_with,
    InvalidSymbolPolicy, SimulationError, SimulationOptions, Symbol,
};

prop_compose! {
    fn binary_input()(bits in prop::collection::vec(any::<bool>(), 0..64)) -> String {
        bits.into_iter().map(|b| if b { '1' } else { '0' }).collect()
    }
}

/// Whether the step consuming `input[i]` completes `01`.
fn completes_01(input: &[u8], i: usize) -> bool {
    i > 0 && input[i - 1] == b'0' && input[i] == b'1'
}

proptest! {
    #[test]
    fn step_count_is_input_length_plus_one(input in binary_input()) {
        prop_assert_eq!(simulate_mealy(&input).unwrap().len(), input.len() + 1);
        prop_assert_eq!(simulate_moore(&input).unwrap().len(), input.len() + 1);
    }

    #[test]
    fn output_lengths_follow_output_model(input in binary_input()) {
        prop_assert_eq!(simulate_mealy(&input).unwrap().output().len(), input.len());
        prop_assert_eq!(simulate_moore(&input).unwrap().output().len(), input.len() + 1);
    }

    #[test]
    fn steps_are_numbered_from_zero(input in binary_input()) {
        let result = simulate_moore(&input).unwrap();
        for (index, record) in result.steps().iter().enumerate() {
            prop_assert_eq!(record.step, index);
        }
        prop_assert_eq!(result.steps()[0].input, None);
    }

    #[test]
    fn simulators_are_deterministic(input in binary_input()) {
        prop_assert_eq!(simulate_mealy(&input).unwrap(), simulate_mealy(&input).unwrap());
        prop_assert_eq!(simulate_moore(&input).unwrap(), simulate_moore(&input).unwrap());
    }

    #[test]
    fn mealy_emits_exactly_where_01_completes(input in binary_input()) {
        let result = simulate_mealy(&input).unwrap();
        let bytes = input.as_bytes();

        prop_assert_eq!(result.steps()[0].output, None);
        for i in 0..bytes.len() {
            let record = &result.steps()[i + 1];
            let expected = completes_01(bytes, i);
            prop_assert_eq!(record.output == Some(Symbol::One), expected);
            prop_assert_eq!(result.output().as_bytes()[i] == b'1', expected);
        }
    }

    #[test]
    fn moore_enters_c_exactly_where_01_completes(input in binary_input()) {
        let result = simulate_moore(&input).unwrap();
        let bytes = input.as_bytes();

        prop_assert_eq!(result.steps()[0].state.as_str(), "A/0");
        for i in 0..bytes.len() {
            let record = &result.steps()[i + 1];
            prop_assert_eq!(record.state == "C/1", completes_01(bytes, i));
        }
    }

    #[test]
    fn moore_output_lags_mealy_by_initial_symbol(input in binary_input()) {
        let comparison = compare(&input).unwrap();
        prop_assert!(comparison.agree());
        prop_assert_eq!(
            comparison.moore.output(),
            format!("0{}", comparison.mealy.output())
        );
    }

    #[test]
    fn skip_policy_matches_sanitized_input(raw in "[01a-z ,]{0,32}") {
        let skip = SimulationOptions::new().on_invalid_symbol(InvalidSymbolPolicy::Skip);
        let clean = sanitize(&raw);

        prop_assert_eq!(
            simulate_mealy_with(&raw, &skip).unwrap(),
            simulate_mealy(&clean).unwrap()
        );
        prop_assert_eq!(
            simulate_moore_with(&raw, &skip).unwrap(),
            simulate_moore(&clean).unwrap()
        );
    }

    #[test]
    fn reject_policy_points_at_first_invalid_character(
        prefix in binary_input(),
        bad in "[a-z2-9]",
        suffix in "[01a-z]{0,8}"
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let expected = SimulationError::InvalidSymbol {
            symbol: bad.chars().next().unwrap(),
            position: prefix.len(),
        };

        prop_assert_eq!(simulate_mealy(&input).unwrap_err(), expected.clone());
        prop_assert_eq!(simulate_moore(&input).unwrap_err(), expected);
    }
}
