//! Base fee and per-option surcharges.

use super::money::Money;
use crate::bay::WashOptions;
use serde::{Deserialize, Serialize};

/// Prices charged by a bay, in cents.
///
/// Missing fields fall back to the default price of that item when read from
/// a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    pub base_fee: Money,
    pub manual_presoak: Money,
    pub manual_dry: Money,
    pub waxing: Money,
}

impl PriceList {
    pub const DEFAULT_BASE_FEE: Money = Money::from_major_minor(5, 0);
    pub const DEFAULT_MANUAL_PRESOAK: Money = Money::from_major_minor(1, 50);
    pub const DEFAULT_MANUAL_DRY: Money = Money::from_major_minor(1, 0);
    pub const DEFAULT_WAXING: Money = Money::from_major_minor(1, 20);

    /// Price of one cycle with the given add-ons.
    ///
    /// Does not validate the selection; callers go through
    /// [`WashOptions::validate`] first. Clamped at [`Money::MAX`]; see
    /// [`PriceList::checked_quote`] to detect that case.
    pub fn quote(&self, options: &WashOptions) -> Money {
        self.selected(options)
            .fold(self.base_fee, Money::saturating_add)
    }

    /// Price of one cycle, `None` if the sum does not fit in [`Money`].
    pub fn checked_quote(&self, options: &WashOptions) -> Option<Money> {
        self.selected(options)
            .try_fold(self.base_fee, Money::checked_add)
    }

    fn selected(&self, options: &WashOptions) -> impl Iterator<Item = Money> {
        [
            (options.manual_presoak, self.manual_presoak),
            (options.manual_dry, self.manual_dry),
            (options.waxing, self.waxing),
        ]
        .into_iter()
        .filter(|(selected, _)| *selected)
        .map(|(_, price)| price)
    }
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            base_fee: Self::DEFAULT_BASE_FEE,
            manual_presoak: Self::DEFAULT_MANUAL_PRESOAK,
            manual_dry: Self::DEFAULT_MANUAL_DRY,
            waxing: Self::DEFAULT_WAXING,
        }
    }
}
