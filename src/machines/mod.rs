//! The two hard-coded "01" detectors.

mod mealy;
mod moore;

pub use mealy::{simulate_mealy, simulate_mealy_with, MealyState, SequenceDetectorMealy};
pub use moore::{simulate_moore, simulate_moore_with, MooreState, SequenceDetectorMoore};
