//! Errors raised by wash bay operations.

use super::phase::Phase;
use thiserror::Error;

/// Usage errors of a [`WashBay`](super::WashBay).
///
/// None of these are retryable. Every failing operation leaves the bay
/// exactly as it was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BayError {
    #[error("Invalid option combination: waxing requires manual drying")]
    InvalidOptionCombination,

    #[error("Bay is busy: a cycle is already in progress (phase: {phase})")]
    Busy { phase: Phase },

    #[error("Bay is idle: start a cycle before advancing")]
    Idle,
}

impl BayError {
    /// Whether the operation was called in the wrong machine state.
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::Busy { .. } | Self::Idle)
    }
}

pub type BayResult<T> = Result<T, BayError>;
