use chrono::Duration;
use std::sync::Arc;
use tokio::sync::RwLock;

use chronos_core::{HandPositions, Timestamp, TimeOfDay, format_hms};
use chronos_ports::DisplaySink;

/// The displayed clock value
///
/// Starts unseeded; the first successful sync (or a user override)
/// establishes a value. All three mutators run under one write lock, so a
/// seed, a tick, and an override never interleave, and the sink sees
/// renders in mutation order.
pub struct WallClock {
    time: RwLock<Option<Timestamp>>,
    sink: Arc<dyn DisplaySink>,
}

impl WallClock {
    pub fn new(sink: Arc<dyn DisplaySink>) -> Arc<Self> {
        Arc::new(Self {
            time: RwLock::new(None),
            sink,
        })
    }

    /// Replace the whole value with a freshly synced timestamp
    pub async fn seed(&self, time: Timestamp) {
        let mut guard = self.time.write().await;
        *guard = Some(time);
        self.publish(time);
    }

    /// Advance the clock by exactly one second
    ///
    /// Delegates to calendar arithmetic, so minute, hour, day, month and
    /// year boundaries all roll over correctly. A clock that has never
    /// been seeded stays unseeded.
    pub async fn advance_one_second(&self) {
        let mut guard = self.time.write().await;
        if let Some(current) = *guard {
            let next = current + Duration::seconds(1);
            *guard = Some(next);
            self.publish(next);
        }
    }

    /// Replace the time-of-day, preserving the date components
    ///
    /// Independent of sync state: before the first sync the override
    /// lands on the epoch date, and the clock stays still until a sync
    /// succeeds and starts the ticker.
    pub async fn apply_override(&self, fields: TimeOfDay) {
        let mut guard = self.time.write().await;
        let date = guard.unwrap_or_default().date();
        let next = fields.at_date(date);
        *guard = Some(next);
        self.publish(next);
    }

    /// Current value, or `None` if nothing has been seeded yet
    pub async fn current(&self) -> Option<Timestamp> {
        *self.time.read().await
    }

    fn publish(&self, time: Timestamp) {
        self.sink
            .render(&format_hms(time), HandPositions::from_time(time));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct RecordingSink {
        renders: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                renders: Mutex::new(Vec::new()),
            })
        }

        fn rendered(&self) -> Vec<String> {
            self.renders.lock().unwrap().clone()
        }
    }

    impl DisplaySink for RecordingSink {
        fn render(&self, formatted: &str, _hands: HandPositions) {
            self.renders.lock().unwrap().push(formatted.to_string());
        }

        fn set_retry_available(&self, _available: bool) {}
        fn set_settings_available(&self, _available: bool) {}
        fn set_connecting(&self) {}
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[tokio::test]
    async fn test_seed_replaces_and_renders() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        assert_eq!(clock.current().await, None);

        clock.seed(at(2024, 3, 15, 10, 20, 30)).await;
        assert_eq!(clock.current().await, Some(at(2024, 3, 15, 10, 20, 30)));
        assert_eq!(sink.rendered(), vec!["10:20:30"]);
    }

    #[tokio::test]
    async fn test_advance_rolls_over_midnight() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        clock.seed(at(2023, 12, 31, 23, 59, 59)).await;
        clock.advance_one_second().await;
        assert_eq!(clock.current().await, Some(at(2024, 1, 1, 0, 0, 0)));
    }

    #[tokio::test]
    async fn test_advance_rolls_over_leap_day() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        clock.seed(at(2024, 2, 28, 23, 59, 59)).await;
        clock.advance_one_second().await;
        assert_eq!(clock.current().await, Some(at(2024, 2, 29, 0, 0, 0)));
    }

    #[tokio::test]
    async fn test_advance_full_day_is_exactly_one_day_later() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        let start = at(2024, 2, 28, 11, 30, 45);
        clock.seed(start).await;
        for _ in 0..86_400 {
            clock.advance_one_second().await;
        }
        assert_eq!(
            clock.current().await,
            Some(start + Duration::days(1)),
            "86400 ticks must advance exactly one calendar day"
        );
    }

    #[tokio::test]
    async fn test_advance_without_seed_is_noop() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        clock.advance_one_second().await;
        assert_eq!(clock.current().await, None);
        assert!(sink.rendered().is_empty());
    }

    #[tokio::test]
    async fn test_override_preserves_date() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        clock.seed(at(2024, 7, 4, 1, 2, 3)).await;
        clock
            .apply_override(TimeOfDay::parse_clamped("22", "45", "0"))
            .await;
        assert_eq!(clock.current().await, Some(at(2024, 7, 4, 22, 45, 0)));
    }

    #[tokio::test]
    async fn test_override_before_seed_uses_epoch_date() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        clock
            .apply_override(TimeOfDay::parse_clamped("7", "30", "15"))
            .await;
        assert_eq!(clock.current().await, Some(at(1970, 1, 1, 7, 30, 15)));
        assert_eq!(sink.rendered(), vec!["07:30:15"]);
    }

    #[tokio::test]
    async fn test_every_mutation_renders_once() {
        let sink = RecordingSink::new();
        let clock = WallClock::new(sink.clone());

        clock.seed(at(2024, 1, 1, 0, 0, 0)).await;
        clock.advance_one_second().await;
        clock
            .apply_override(TimeOfDay::parse_clamped("5", "6", "7"))
            .await;
        assert_eq!(sink.rendered(), vec!["00:00:00", "00:00:01", "05:06:07"]);
    }
}
