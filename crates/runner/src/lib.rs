//! Chronos Runner - Synchronized Clock Application
//!
//! Wires the clock system together:
//!
//! - **Bootstrap**: configuration and component assembly
//! - **Display**: log-backed display sink adapter
//! - **Input**: user time-override handling
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────┐   fetch_time    ┌──────────────────┐
//!   │  SyncScheduler   │ ──────────────► │  WorldTimeClient │
//!   │  (retry cycle,   │                 │  (REST API)      │
//!   │   hourly resync) │ ◄────────────── │                  │
//!   └────────┬─────────┘    timestamp    └──────────────────┘
//!            │ seed / start ticker
//!            ▼
//!   ┌──────────────────┐     render      ┌──────────────────┐
//!   │    WallClock     │ ──────────────► │   DisplaySink    │
//!   │  (ticks 1/sec)   │                 │  (time + hands)  │
//!   └────────▲─────────┘                 └──────────────────┘
//!            │ apply_override
//!   ┌────────┴─────────┐
//!   │  OverrideInput   │  (user edits hour/minute/second)
//!   └──────────────────┘
//! ```

pub mod bootstrap;
pub mod display;
pub mod input;

// Re-export main types
pub use bootstrap::{AppConfig, ClockApp};
pub use display::ConsoleDisplay;
pub use input::OverrideInput;
