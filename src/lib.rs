//! Washbay: a state machine and billing core for self-service car-wash bays.
//!
//! A [`WashBay`] walks each wash cycle through a fixed sequence of
//! [`Phase`]s. Manual add-ons chosen when the cycle starts insert or swap
//! phases, and entering the charge phase bills the cycle against a
//! [`PriceList`].
//!
//! # Core Concepts
//!
//! - **Phase**: closed enum of the bay's operational stages
//! - **Options**: manual pre-soak, manual drying and waxing, fixed per cycle
//! - **Revenue**: integer-cent total that only ever grows
//! - **History**: timestamped transitions of the current cycle
//!
//! # Example
//!
//! ```rust
//! use washbay::{Phase, WashBay, WashOptions};
//!
//! let mut bay = WashBay::new();
//! let phases = bay.run_cycle(WashOptions::new(false, false, false)).unwrap();
//!
//! assert_eq!(
//!     phases,
//!     vec![
//!         Phase::AutoPresoak,
//!         Phase::AutoWash,
//!         Phase::AutoDry,
//!         Phase::PreCharge,
//!         Phase::ChargeStandard,
//!         Phase::Idle,
//!     ]
//! );
//! assert_eq!(bay.revenue().to_string(), "5.00");
//! ```

pub mod bay;
pub mod config;
pub mod core;
mod macros;
pub mod pricing;

// Re-export commonly used types
pub use crate::bay::{BayError, BayResult, Phase, WashBay, WashOptions};
pub use crate::config::{BayConfig, ConfigError};
pub use crate::core::{State, StateHistory, StateTransition};
pub use crate::pricing::{Money, PriceList};
