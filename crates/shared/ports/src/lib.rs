//! Chronos Ports
//!
//! Trait seams between the clock core and its collaborators:
//!
//! - [`TimeFetcher`]: obtains one timestamp from the remote time source
//! - [`DisplaySink`]: consumes every displayed clock state change
//!
//! Infrastructure crates implement these; the sync and clock crates only
//! depend on the contracts.

mod display;
mod error;
mod fetch;

pub use display::DisplaySink;
pub use error::FetchError;
pub use fetch::TimeFetcher;
