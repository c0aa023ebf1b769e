//! Bootstrap - configuration and component assembly
//!
//! Builds the clock, the scheduler and the display adapter, runs the
//! initial sync and installs the hourly resync.

use log::info;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use chronos_clock::{CancelHandle, WallClock};
use chronos_fetch::{DEFAULT_TIME_URL, WorldTimeClient};
use chronos_ports::{DisplaySink, TimeFetcher};
use chronos_sync::{CycleOutcome, SyncConfig, SyncScheduler};

use crate::display::ConsoleDisplay;
use crate::input::OverrideInput;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Endpoint of the remote time API
    pub time_url: String,
    /// Sync cycle tuning
    pub sync: SyncConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            time_url: DEFAULT_TIME_URL.to_string(),
            sync: SyncConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default configuration with environment overrides applied
    ///
    /// `CHRONOS_TIME_URL` replaces the time API endpoint.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("CHRONOS_TIME_URL") {
            config.time_url = url;
        }
        config
    }
}

/// The assembled clock application
pub struct ClockApp {
    clock: Arc<WallClock>,
    scheduler: Arc<SyncScheduler>,
    input: OverrideInput,
    settings_visible: AtomicBool,
    resync: Mutex<Option<CancelHandle>>,
}

impl ClockApp {
    /// Assemble the application with the real HTTP fetcher and the
    /// console display
    pub fn new(config: AppConfig) -> Self {
        let fetcher: Arc<dyn TimeFetcher> = Arc::new(WorldTimeClient::new(&config.time_url));
        let sink: Arc<dyn DisplaySink> = Arc::new(ConsoleDisplay::new());
        Self::with_parts(config, fetcher, sink)
    }

    /// Assemble the application from explicit collaborators
    pub fn with_parts(
        config: AppConfig,
        fetcher: Arc<dyn TimeFetcher>,
        sink: Arc<dyn DisplaySink>,
    ) -> Self {
        let clock = WallClock::new(sink.clone());
        let scheduler = SyncScheduler::new(fetcher, clock.clone(), sink, config.sync);

        Self {
            input: OverrideInput::new(clock.clone()),
            clock,
            scheduler,
            settings_visible: AtomicBool::new(false),
            resync: Mutex::new(None),
        }
    }

    /// Run the initial sync cycle and install the periodic resync
    pub async fn start(&self) -> CycleOutcome {
        let outcome = self.scheduler.run_sync_cycle().await;
        let handle = self.scheduler.clone().schedule_hourly();
        *self.resync.lock().await = Some(handle);
        info!("Clock application started: {:?}", outcome);
        outcome
    }

    /// Manually trigger a new sync cycle
    pub async fn retry(&self) -> CycleOutcome {
        self.scheduler.run_sync_cycle().await
    }

    /// Forward a user edit of the time fields
    pub async fn on_field_edited(&self, hour: &str, minute: &str, second: &str) {
        self.input.on_field_edited(hour, minute, second).await;
    }

    /// Flip the settings panel visibility, returning the new state
    pub fn toggle_settings(&self) -> bool {
        let visible = !self.settings_visible.load(Ordering::SeqCst);
        self.settings_visible.store(visible, Ordering::SeqCst);
        visible
    }

    pub fn settings_visible(&self) -> bool {
        self.settings_visible.load(Ordering::SeqCst)
    }

    pub fn clock(&self) -> &Arc<WallClock> {
        &self.clock
    }

    pub fn scheduler(&self) -> &Arc<SyncScheduler> {
        &self.scheduler
    }
}
