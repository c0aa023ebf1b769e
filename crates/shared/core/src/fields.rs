use chrono::{NaiveDate, NaiveTime};

use crate::values::Timestamp;

/// A validated time-of-day, produced only from clamped user input
///
/// Invariant: `hour` in `[0, 23]`, `minute` and `second` in `[0, 59]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// Parse the three edit fields, clamping each one independently
    ///
    /// Out-of-range numbers clamp to the nearest bound; text that is not
    /// an integer at all falls back to the field minimum (0). Invalid
    /// input is never an error surfaced to the user.
    pub fn parse_clamped(hour: &str, minute: &str, second: &str) -> Self {
        Self {
            hour: parse_field(hour, 0, 23),
            minute: parse_field(minute, 0, 59),
            second: parse_field(second, 0, 59),
        }
    }

    /// Place this time-of-day on the given calendar date
    pub fn at_date(&self, date: NaiveDate) -> Timestamp {
        date.and_hms_opt(self.hour, self.minute, self.second)
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
    }
}

fn parse_field(text: &str, min: u32, max: u32) -> u32 {
    match text.trim().parse::<i64>() {
        Ok(value) => value.clamp(i64::from(min), i64::from(max)) as u32,
        Err(_) => min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_out_of_range_clamps_to_bounds() {
        let fields = TimeOfDay::parse_clamped("25", "-1", "70");
        assert_eq!(
            fields,
            TimeOfDay {
                hour: 23,
                minute: 0,
                second: 59
            }
        );
    }

    #[test]
    fn test_unparseable_falls_back_to_zero() {
        let fields = TimeOfDay::parse_clamped("abc", "30", "abc");
        assert_eq!(
            fields,
            TimeOfDay {
                hour: 0,
                minute: 30,
                second: 0
            }
        );
    }

    #[test]
    fn test_empty_fields_are_zero() {
        let fields = TimeOfDay::parse_clamped("", "", "");
        assert_eq!(
            fields,
            TimeOfDay {
                hour: 0,
                minute: 0,
                second: 0
            }
        );
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let fields = TimeOfDay::parse_clamped(" 7 ", "05", " 59");
        assert_eq!(
            fields,
            TimeOfDay {
                hour: 7,
                minute: 5,
                second: 59
            }
        );
    }

    #[test]
    fn test_at_date_keeps_the_date() {
        let fields = TimeOfDay::parse_clamped("22", "10", "45");
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let time = fields.at_date(date);
        assert_eq!(time.year(), 2024);
        assert_eq!(time.month(), 2);
        assert_eq!(time.day(), 29);
        assert_eq!(crate::format_hms(time), "22:10:45");
    }
}
