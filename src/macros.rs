//! Macros for declaring transducer state sets.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// Every variant becomes a state whose name is the variant identifier, and
/// the declaration order fixes the order of [`State::all`](crate::core::State::all).
///
/// # Example
///
/// ```
/// use seqdetect::core::State;
/// use seqdetect::state_enum;
///
/// state_enum! {
///     pub enum Parity {
///         Even,
///         Odd,
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// assert_eq!(Parity::all(), &[Parity::Even, Parity::Odd]);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}
