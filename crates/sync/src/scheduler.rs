use log::{error, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::sleep;

use chronos_clock::{CancelHandle, WallClock, schedule};
use chronos_ports::{DisplaySink, FetchError, TimeFetcher};

/// Where the current (or most recent) sync cycle stands
///
/// Each `run_sync_cycle` call drives a fresh instance of this machine:
/// `Idle -> Fetching -> {Succeeded, FailedExhausted}`. An aborted cycle
/// (malformed payload) falls back to `Idle`; its result is reported
/// through [`CycleOutcome`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Idle,
    Fetching,
    Succeeded,
    FailedExhausted,
}

/// Terminal result of one `run_sync_cycle` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A timestamp was acquired and the clock seeded
    Succeeded,
    /// Every attempt failed on the network; the clock was left untouched
    Exhausted,
    /// The server answered with a payload we could not parse; no retry
    Aborted,
    /// Another cycle was already in flight; this trigger was dropped
    AlreadyRunning,
}

/// Sync cycle tuning
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Fetch attempts per cycle before giving up
    pub max_attempts: u32,
    /// Fixed delay between failed attempts
    pub retry_delay: Duration,
    /// Cadence of the automatic resync
    pub resync_interval: Duration,
    /// Period of the display ticker
    pub tick_period: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            retry_delay: Duration::from_secs(3),
            resync_interval: Duration::from_secs(3600),
            tick_period: Duration::from_secs(1),
        }
    }
}

/// Owns the retry loop, the ticker handle and the sync status
pub struct SyncScheduler {
    fetcher: Arc<dyn TimeFetcher>,
    clock: Arc<WallClock>,
    sink: Arc<dyn DisplaySink>,
    config: SyncConfig,
    status: RwLock<SyncStatus>,
    in_flight: AtomicBool,
    ticker: Mutex<Option<CancelHandle>>,
}

impl SyncScheduler {
    pub fn new(
        fetcher: Arc<dyn TimeFetcher>,
        clock: Arc<WallClock>,
        sink: Arc<dyn DisplaySink>,
        config: SyncConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            fetcher,
            clock,
            sink,
            config,
            status: RwLock::new(SyncStatus::Idle),
            in_flight: AtomicBool::new(false),
            ticker: Mutex::new(None),
        })
    }

    /// Run one full sync cycle against the remote time source
    ///
    /// Disables both user affordances for the duration of the cycle and
    /// re-enables them exactly once at the end, whatever the outcome. A
    /// call that overlaps an unfinished cycle is rejected without
    /// touching any cycle state.
    pub async fn run_sync_cycle(&self) -> CycleOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            warn!("Sync cycle already in flight, dropping trigger");
            return CycleOutcome::AlreadyRunning;
        }

        *self.status.write().await = SyncStatus::Fetching;
        self.sink.set_connecting();
        self.sink.set_retry_available(false);
        self.sink.set_settings_available(false);

        let mut attempts = 0;
        let outcome = loop {
            if attempts >= self.config.max_attempts {
                error!(
                    "Unable to reach time service after {} attempts",
                    self.config.max_attempts
                );
                break CycleOutcome::Exhausted;
            }

            match self.fetcher.fetch_time().await {
                Ok(time) => {
                    info!("Current server time: {}", time);
                    self.clock.seed(time).await;
                    self.start_ticker().await;
                    break CycleOutcome::Succeeded;
                }
                Err(FetchError::Parse(msg)) => {
                    error!("Error parsing time data: {}", msg);
                    break CycleOutcome::Aborted;
                }
                Err(FetchError::Network(msg)) => {
                    attempts += 1;
                    error!("Attempt {} failed: {}", attempts, msg);
                    sleep(self.config.retry_delay).await;
                }
            }
        };

        *self.status.write().await = match outcome {
            CycleOutcome::Succeeded => SyncStatus::Succeeded,
            CycleOutcome::Exhausted => SyncStatus::FailedExhausted,
            _ => SyncStatus::Idle,
        };

        self.sink.set_retry_available(true);
        self.sink.set_settings_available(true);
        self.in_flight.store(false, Ordering::SeqCst);

        outcome
    }

    /// Re-run a fresh sync cycle on the configured cadence
    ///
    /// The first firing comes one full interval after scheduling. Each
    /// firing goes through the same overlap guard as a manual trigger,
    /// so a resync that lands mid-cycle is dropped rather than
    /// interleaved. The schedule runs until the handle is dropped.
    pub fn schedule_hourly(self: Arc<Self>) -> CancelHandle {
        let period = self.config.resync_interval;
        info!("Scheduling resync every {:?}", period);
        schedule(period, period, move || {
            let scheduler = self.clone();
            async move {
                scheduler.run_sync_cycle().await;
            }
        })
    }

    /// Current sync status
    pub async fn status(&self) -> SyncStatus {
        *self.status.read().await
    }

    /// Whether the one-second ticker is running
    pub async fn ticker_running(&self) -> bool {
        self.ticker.lock().await.as_ref().is_some_and(CancelHandle::is_active)
    }

    /// Start the display ticker if it is not already running
    ///
    /// Idempotent: a live ticker is left alone, so repeated successful
    /// syncs never stack a second one. Callers seed the clock first; the
    /// seed therefore happens-before the ticker's first tick.
    async fn start_ticker(&self) {
        let mut slot = self.ticker.lock().await;
        if slot.as_ref().is_some_and(CancelHandle::is_active) {
            return;
        }

        info!("Starting display ticker with period {:?}", self.config.tick_period);
        let clock = self.clock.clone();
        *slot = Some(schedule(Duration::ZERO, self.config.tick_period, move || {
            let clock = clock.clone();
            async move {
                clock.advance_one_second().await;
            }
        }));
    }
}
