use chronos_core::HandPositions;

/// Port for the rendering surface
///
/// The clock pushes every state change here: the formatted time string
/// plus the analog hand positions, and the availability of the two
/// user-facing affordances while a sync cycle is in flight.
pub trait DisplaySink: Send + Sync {
    /// Render the displayed time
    fn render(&self, formatted: &str, hands: HandPositions);

    /// Enable or disable the manual-retry affordance
    fn set_retry_available(&self, available: bool);

    /// Enable or disable the time-settings affordance
    fn set_settings_available(&self, available: bool);

    /// Show the connecting message at the start of a sync cycle
    fn set_connecting(&self);
}
