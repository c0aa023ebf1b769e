//! Chronos Clock Infrastructure
//!
//! Holds the displayed time and the machinery that keeps it moving:
//!
//! - [`WallClock`]: the single shared time value. Mutated by a sync seed
//!   (full replace), the one-second tick, or a user override; every
//!   mutation is pushed to the display sink.
//! - [`periodic::schedule`]: repeating background tasks with cancelable
//!   ownership handles ([`CancelHandle`]), used for both the one-second
//!   ticker and the hourly resync trigger.

pub mod periodic;
mod state;

pub use periodic::{CancelHandle, schedule};
pub use state::WallClock;
