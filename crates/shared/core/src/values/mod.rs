use chrono::NaiveDateTime;

/// Wall-clock calendar instant in the configured remote timezone
///
/// The clock displays local time for a single fixed timezone, so values
/// carry no offset of their own.
pub type Timestamp = NaiveDateTime;

/// Format a timestamp as the displayed "HH:mm:ss" string
pub fn format_hms(time: Timestamp) -> String {
    time.format("%H:%M:%S").to_string()
}
