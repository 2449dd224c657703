//! Pricing of wash cycles.

mod money;
mod price_list;

pub use money::Money;
pub use price_list::PriceList;
