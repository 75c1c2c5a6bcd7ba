//! Completion and streak analysis.
//!
//! Everything in this module is a pure function of `(cadence, history, now)`.
//! Callers snapshot the history and the reference date before calling in;
//! nothing here reads the clock or touches storage.
//!
//! - [`period_distance`]: signed distance in days or ISO weeks
//! - [`evaluate`]: is the habit done for the current period?
//! - [`streaks`]: current and longest run of consecutive periods

mod completion;
mod period;
mod streak;

pub use completion::evaluate;
pub use period::{iso_sort_key, period_distance, WEEKS_PER_YEAR};
pub use streak::streaks;
