//! A single self-service wash bay.
//!
//! [`WashBay`] owns the whole state of one bay: the active [`Phase`], the
//! busy flag, the [`WashOptions`] of the running cycle and the revenue.
//! Hosts managing several bays create one `WashBay` per bay; bays share
//! nothing.

mod error;
mod machine;
mod options;
mod phase;

pub use error::{BayError, BayResult};
pub use machine::{BayId, WashBay};
pub use options::WashOptions;
pub use phase::Phase;
