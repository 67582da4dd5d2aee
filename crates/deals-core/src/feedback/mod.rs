//! Copy feedback module.
//!
//! Tracks which redemption codes were just copied so the page can show a
//! check mark for a short while.

mod clock;
mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use tracker::{CopyFeedback, FEEDBACK_DURATION};
