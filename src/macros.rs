//! Macros for declaring closed state enums.

/// Declare a closed enum and implement [`State`](crate::core::State) for it.
///
/// The enum derives `Clone`, `PartialEq`, `Debug` and the serde traits.
/// Extra derives may be added through outer attributes.
///
/// # Example
///
/// ```
/// use washbay::core::State;
/// use washbay::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Barrier {
///         Down,
///         Rising,
///         Up,
///     }
///     resting: [Down]
/// }
///
/// assert_eq!(Barrier::Rising.name(), "Rising");
/// assert!(Barrier::Down.is_resting());
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

        $(resting: [$($resting:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_resting(&self) -> bool {
                match self {
                    $($(Self::$resting => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
