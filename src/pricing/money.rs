//! Integer money amounts.
//!
//! Every price and the bay revenue are whole numbers of cents. Sums of
//! surcharges stay exact: 5.00 + 1.50 + 1.00 + 1.20 is 870 cents, not a
//! float that happens to print as 8.7.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative monetary value in the smallest currency unit.
///
/// ```rust
/// use washbay::pricing::Money;
///
/// let fee = Money::from_major_minor(5, 0);
/// let total = fee + Money::from_cents(150);
/// assert_eq!(total.cents(), 650);
/// assert_eq!(total.to_string(), "6.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(u64::MAX);

    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Build an amount from whole units and cents, e.g. `(7, 20)` is 7.20.
    ///
    /// `minor` must be below 100.
    #[inline]
    pub const fn from_major_minor(major: u64, minor: u64) -> Self {
        debug_assert!(minor < 100, "minor units must be below 100");
        Money(major * 100 + minor)
    }

    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whole units.
    #[inline]
    pub const fn major(&self) -> u64 {
        self.0 / 100
    }

    /// Cents past the whole units, always below 100.
    #[inline]
    pub const fn minor(&self) -> u64 {
        self.0 % 100
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Sum of two amounts, `None` if it does not fit.
    #[inline]
    pub const fn checked_add(self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Sum of two amounts, clamped at the largest representable amount.
    #[inline]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Plain decimal, two fractional digits, no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major(), self.minor())
    }
}
