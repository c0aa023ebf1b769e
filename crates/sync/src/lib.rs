//! Chronos Sync
//!
//! Drives the acquisition of remote time and keeps the displayed clock
//! fresh:
//!
//! - [`SyncScheduler::run_sync_cycle`]: one full attempt sequence against
//!   the remote source. Retries with fixed backoff on network failure,
//!   aborts immediately on a malformed payload, and seeds the clock plus
//!   starts the ticker on success.
//! - [`SyncScheduler::schedule_hourly`]: re-runs a fresh cycle on a fixed
//!   cadence for as long as the returned handle is held.
//!
//! Cycles never overlap: a trigger that arrives while a cycle is in
//! flight is rejected and reported as [`CycleOutcome::AlreadyRunning`].

mod scheduler;

pub use scheduler::{CycleOutcome, SyncConfig, SyncScheduler, SyncStatus};
