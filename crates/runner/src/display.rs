use log::info;
use std::sync::atomic::{AtomicBool, Ordering};

use chronos_core::HandPositions;
use chronos_ports::DisplaySink;

/// Log-backed display adapter
///
/// Renders the clock face as log lines and tracks the availability of
/// the two user affordances so the command loop can consult them.
pub struct ConsoleDisplay {
    retry_available: AtomicBool,
    settings_available: AtomicBool,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self {
            retry_available: AtomicBool::new(true),
            settings_available: AtomicBool::new(true),
        }
    }

    pub fn retry_available(&self) -> bool {
        self.retry_available.load(Ordering::SeqCst)
    }

    pub fn settings_available(&self) -> bool {
        self.settings_available.load(Ordering::SeqCst)
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for ConsoleDisplay {
    fn render(&self, formatted: &str, hands: HandPositions) {
        info!(
            "{} | hands h={:.4} m={:.4} s={:.4}",
            formatted, hands.hour, hands.minute, hands.second
        );
    }

    fn set_retry_available(&self, available: bool) {
        self.retry_available.store(available, Ordering::SeqCst);
    }

    fn set_settings_available(&self, available: bool) {
        self.settings_available.store(available, Ordering::SeqCst);
    }

    fn set_connecting(&self) {
        info!("Connecting...");
    }
}
