//! Add-on services selected when a cycle starts.

use super::error::{BayError, BayResult};
use serde::{Deserialize, Serialize};

/// Manual add-ons purchased for one cycle.
///
/// The selection is captured by `start_cycle` and stays fixed until the
/// bay is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WashOptions {
    pub manual_presoak: bool,
    pub manual_dry: bool,
    /// Only sold together with `manual_dry`.
    pub waxing: bool,
}

impl WashOptions {
    pub const fn new(manual_presoak: bool, manual_dry: bool, waxing: bool) -> Self {
        Self {
            manual_presoak,
            manual_dry,
            waxing,
        }
    }

    /// Reject waxing without manual drying.
    pub fn validate(&self) -> BayResult<()> {
        if self.waxing && !self.manual_dry {
            return Err(BayError::InvalidOptionCombination);
        }
        Ok(())
    }

    /// True when no add-on is selected.
    pub fn is_empty(&self) -> bool {
        !(self.manual_presoak || self.manual_dry || self.waxing)
    }
}
