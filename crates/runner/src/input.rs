use log::debug;
use std::sync::Arc;

use chronos_clock::WallClock;
use chronos_core::TimeOfDay;

/// Handles direct user edits of the displayed time
///
/// Works the same whether or not a sync has ever succeeded; an edit on a
/// fresh clock simply establishes the first value.
pub struct OverrideInput {
    clock: Arc<WallClock>,
}

impl OverrideInput {
    pub fn new(clock: Arc<WallClock>) -> Self {
        Self { clock }
    }

    /// React to an edit of any of the three time fields
    ///
    /// All three fields are re-read, parsed and clamped on every edit,
    /// then applied in one step. Bad input is coerced, never reported.
    pub async fn on_field_edited(&self, hour: &str, minute: &str, second: &str) {
        let fields = TimeOfDay::parse_clamped(hour, minute, second);
        debug!(
            "Applying time override {:02}:{:02}:{:02}",
            fields.hour, fields.minute, fields.second
        );
        self.clock.apply_override(fields).await;
    }
}
