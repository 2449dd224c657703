//! Core state machine types.
//!
//! This module contains the pure pieces shared by the machines of the crate:
//! - State definitions via the `State` trait
//! - Immutable, timestamped transition history
//!
//! Nothing here performs I/O or logging.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
