//! Core State trait for closed phase enums.
//!
//! Machines in this crate describe their position with a closed enum. The
//! trait gives the history and logging code a uniform, side-effect free view
//! of such an enum.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing the
/// current position of a machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: states are compared when walking a route
/// - `Debug`: states are printed in diagnostics
/// - `Serialize` + `DeserializeOwned`: states are reported to hosts
///
/// # Example
///
/// ```rust
/// use washbay::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Closed,
///     Opening,
///     Open,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///         }
///     }
///
///     fn is_resting(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(Door::Closed.is_resting());
/// assert_eq!(Door::Opening.name(), "Opening");
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a resting state.
    ///
    /// A resting state holds no work in progress: the machine may sit there
    /// indefinitely and a new unit of work starts from it.
    ///
    /// Default implementation returns `false`.
    fn is_resting(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lamp {
        Off,
        Warming,
        On,
    }

    impl State for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::Warming => "Warming",
                Self::On => "On",
            }
        }

        fn is_resting(&self) -> bool {
            matches!(self, Self::Off)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Bare;

    impl State for Bare {
        fn name(&self) -> &str {
            "Bare"
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Lamp::Off.name(), "Off");
        assert_eq!(Lamp::Warming.name(), "Warming");
        assert_eq!(Lamp::On.name(), "On");
    }

    #[test]
    fn is_resting_identifies_rest_states() {
        assert!(Lamp::Off.is_resting());
        assert!(!Lamp::Warming.is_resting());
        assert!(!Lamp::On.is_resting());
    }

    #[test]
    fn is_resting_defaults_to_false() {
        assert!(!Bare.is_resting());
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&Lamp::Warming).unwrap();
        let deserialized: Lamp = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Lamp::Warming);
    }
}
