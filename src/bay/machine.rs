//! The wash bay state machine.

use super::error::{BayError, BayResult};
use super::options::WashOptions;
use super::phase::Phase;
use crate::config::BayConfig;
use crate::core::{State, StateHistory, StateTransition};
use crate::pricing::{Money, PriceList};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Identifier of a bay, used to tell bays apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BayId(Uuid);

impl BayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single self-service wash bay.
///
/// The bay walks a cycle through its [`Phase`]s, bills it when a charge
/// phase is entered and keeps the revenue across cycles.
///
/// # Example
///
/// ```rust
/// use washbay::bay::{Phase, WashBay, WashOptions};
///
/// let mut bay = WashBay::new();
/// bay.start_cycle(WashOptions::new(false, true, true)).unwrap();
/// assert!(bay.is_busy());
///
/// while bay.is_busy() {
///     bay.advance_phase().unwrap();
/// }
/// assert_eq!(bay.phase(), Phase::ChargeManualDry);
/// assert_eq!(bay.revenue().cents(), 720);
///
/// // Waxing is still entered after billing.
/// assert_eq!(bay.advance_phase().unwrap(), Phase::Waxing);
///
/// bay.reset();
/// assert_eq!(bay.phase(), Phase::Idle);
/// assert_eq!(bay.revenue().cents(), 720);
/// ```
#[derive(Debug, Clone)]
pub struct WashBay {
    id: BayId,
    phase: Phase,
    busy: bool,
    options: WashOptions,
    revenue: Money,
    prices: PriceList,
    completed_cycles: u64,
    history: StateHistory<Phase>,
}

impl Default for WashBay {
    fn default() -> Self {
        Self::new()
    }
}

impl WashBay {
    /// Create an idle bay with the default price list and no revenue.
    pub fn new() -> Self {
        Self::with_prices(PriceList::default())
    }

    pub fn with_prices(prices: PriceList) -> Self {
        Self {
            id: BayId::new(),
            phase: Phase::Idle,
            busy: false,
            options: WashOptions::default(),
            revenue: Money::ZERO,
            prices,
            completed_cycles: 0,
            history: StateHistory::new(),
        }
    }

    pub fn from_config(config: &BayConfig) -> Self {
        Self::with_prices(config.pricing)
    }

    pub fn id(&self) -> BayId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from `start_cycle` until the charge phase is entered.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn options(&self) -> WashOptions {
        self.options
    }

    pub fn manual_presoak(&self) -> bool {
        self.options.manual_presoak
    }

    pub fn manual_dry(&self) -> bool {
        self.options.manual_dry
    }

    pub fn waxing(&self) -> bool {
        self.options.waxing
    }

    /// Total billed over the bay's lifetime.
    pub fn revenue(&self) -> Money {
        self.revenue
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Number of cycles that reached a charge phase.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Transitions of the current or most recently finished cycle.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Phase the next `advance_phase` would enter.
    pub fn next_phase(&self) -> Option<Phase> {
        self.phase.next(&self.options)
    }

    /// Price a selection without touching the bay.
    pub fn quote(&self, options: WashOptions) -> BayResult<Money> {
        options.validate()?;
        Ok(self.prices.quote(&options))
    }

    /// Begin a cycle with the given add-ons.
    ///
    /// The option combination is checked before the busy flag, and neither
    /// failure mutates the bay.
    pub fn start_cycle(&mut self, options: WashOptions) -> BayResult<()> {
        options.validate()?;
        if self.busy {
            return Err(BayError::Busy { phase: self.phase });
        }

        let from = self.phase;
        self.options = options;
        self.busy = true;
        self.phase = Phase::FIRST;
        self.history = StateHistory::new().record(StateTransition::now(from, Phase::FIRST));

        info!(
            bay = %self.id,
            manual_presoak = options.manual_presoak,
            manual_dry = options.manual_dry,
            waxing = options.waxing,
            "Wash cycle started"
        );
        Ok(())
    }

    /// Move one step along the cycle's route and return the phase the bay
    /// is in afterwards.
    ///
    /// At the end of the route this is a no-op; `reset` returns the bay to
    /// idle.
    pub fn advance_phase(&mut self) -> BayResult<Phase> {
        if self.phase.is_resting() {
            return Err(BayError::Idle);
        }

        let Some(next) = self.next_phase() else {
            debug!(bay = %self.id, phase = %self.phase, "End of route, phase unchanged");
            return Ok(self.phase);
        };

        self.enter(next);
        if next.is_charge() {
            self.settle();
        }
        Ok(self.phase)
    }

    /// Return the bay to idle, keeping the revenue.
    ///
    /// A cycle that was not billed yet is terminated without charge.
    pub fn reset(&mut self) {
        if self.phase.is_resting() {
            return;
        }
        if self.busy {
            warn!(bay = %self.id, phase = %self.phase, "Cycle terminated before charging");
        }

        self.enter(Phase::Idle);
        self.busy = false;
        self.options = WashOptions::default();
    }

    /// Drive a full cycle and return every phase visited, ending with idle.
    pub fn run_cycle(&mut self, options: WashOptions) -> BayResult<Vec<Phase>> {
        self.start_cycle(options)?;

        let mut visited = vec![self.phase];
        while self.next_phase().is_some() {
            visited.push(self.advance_phase()?);
        }

        self.reset();
        visited.push(self.phase);
        Ok(visited)
    }

    fn enter(&mut self, to: Phase) {
        let from = self.phase;
        self.history = self.history.record(StateTransition::now(from, to));
        self.phase = to;
        debug!(bay = %self.id, %from, %to, "Phase transition");
    }

    /// Bill the cycle. Only reached by entering a charge phase.
    ///
    /// Revenue saturates instead of wrapping.
    fn settle(&mut self) {
        let amount = self.prices.quote(&self.options);
        self.revenue = self.revenue.saturating_add(amount);
        self.completed_cycles += 1;
        self.busy = false;

        info!(
            bay = %self.id,
            phase = %self.phase,
            amount = %amount,
            revenue = %self.revenue,
            "Cycle charged"
        );
    }
}
