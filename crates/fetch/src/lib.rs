//! Chronos Fetch
//!
//! HTTP implementation of the [`chronos_ports::TimeFetcher`] port against
//! a world-time REST API.

mod worldtime;

pub use worldtime::{DEFAULT_TIME_URL, RestError, WorldTimeClient};
