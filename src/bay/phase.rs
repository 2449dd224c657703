//! Wash phases and the route a cycle takes through them.

use super::options::WashOptions;
use crate::core::State;
use std::fmt;

crate::state_enum! {
    /// Operational phase of a wash bay.
    ///
    /// Exactly one phase is active at a time. Declaration order matches the
    /// historical numeric phase identifiers, see [`Phase::code`].
    #[derive(Copy, Eq, Hash, Default)]
    pub enum Phase {
        /// No cycle in progress.
        #[default]
        Idle,
        AutoPresoak,
        /// Attendant pre-soak, only when purchased.
        ManualPresoak,
        AutoWash,
        AutoDry,
        PreCharge,
        /// Charge step for cycles without manual drying.
        ChargeStandard,
        /// Charge step for cycles with manual drying.
        ChargeManualDry,
        /// Entered after the charge when waxing was purchased.
        Waxing,
    }
    resting: [Idle]
}

impl Phase {
    /// Phase every cycle starts in.
    pub const FIRST: Phase = Phase::AutoPresoak;

    /// Phase the next advance enters, or `None` at the end of the route.
    ///
    /// `Idle` has no successor: cycles are entered through `start_cycle`,
    /// never by advancing.
    pub fn next(self, options: &WashOptions) -> Option<Phase> {
        match self {
            Phase::Idle => None,
            Phase::AutoPresoak if options.manual_presoak => Some(Phase::ManualPresoak),
            Phase::AutoPresoak | Phase::ManualPresoak => Some(Phase::AutoWash),
            Phase::AutoWash => Some(Phase::AutoDry),
            Phase::AutoDry => Some(Phase::PreCharge),
            Phase::PreCharge if options.manual_dry => Some(Phase::ChargeManualDry),
            Phase::PreCharge => Some(Phase::ChargeStandard),
            Phase::ChargeManualDry if options.waxing => Some(Phase::Waxing),
            Phase::ChargeStandard | Phase::ChargeManualDry | Phase::Waxing => None,
        }
    }

    /// Full planned route of a cycle, starting at [`Phase::FIRST`].
    pub fn route(options: &WashOptions) -> Vec<Phase> {
        let mut route = vec![Phase::FIRST];
        let mut current = Phase::FIRST;
        while let Some(next) = current.next(options) {
            route.push(next);
            current = next;
        }
        route
    }

    /// Whether entering this phase bills the cycle.
    pub fn is_charge(self) -> bool {
        matches!(self, Phase::ChargeStandard | Phase::ChargeManualDry)
    }

    /// Historical numeric identifier of the phase.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
