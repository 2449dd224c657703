//! State transition history tracking.
//!
//! Provides an immutable, timestamped log of the transitions a machine made
//! during one unit of work.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use washbay::bay::Phase;
/// use washbay::core::StateTransition;
///
/// let transition = StateTransition {
///     from: Phase::Idle,
///     to: Phase::AutoPresoak,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Phase::AutoPresoak);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Create a transition stamped with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use washbay::bay::Phase;
/// use washbay::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(Phase::Idle, Phase::AutoPresoak))
///     .record(StateTransition::now(Phase::AutoPresoak, Phase::AutoWash));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Idle, &Phase::AutoPresoak, &Phase::AutoWash]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Most recent state reached, if any transition was recorded.
    pub fn last_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
