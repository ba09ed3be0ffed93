//! Core State trait for transducer states.
//!
//! States are small `Copy` values. The trait exposes pure accessors only.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for transducer states.
///
/// All methods are pure. Implementations are normally generated with
/// [`state_enum!`](crate::state_enum).
///
/// # Required Traits
///
/// - `Copy`: states are threaded through the run loop by value
/// - `Eq` + `Hash`: states can key lookup tables
/// - `Serialize` + `Deserialize`: states can travel with exported traces
///
/// # Example
///
/// ```rust
/// use seqdetect::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Light {
///     Off,
///     On,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Off, Self::On]
///     }
/// }
///
/// assert_eq!(Light::On.name(), "On");
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display and logging.
    fn name(&self) -> &'static str;

    /// Every state of the machine, in a stable order.
    fn all() -> &'static [Self];
}
