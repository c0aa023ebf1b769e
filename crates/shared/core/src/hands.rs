use chrono::Timelike;

use crate::values::Timestamp;

/// Analog hand positions derived from a timestamp
///
/// Each field is the hand's angular position as a fraction of one full
/// revolution, always in `[0, 1)`:
/// - second hand: `s / 60`
/// - minute hand: `m / 60 + s / 3600`
/// - hour hand: `(h mod 12) / 12 + m / 720`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPositions {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandPositions {
    /// Compute hand positions for the given wall-clock time
    pub fn from_time(time: Timestamp) -> Self {
        let hour = f64::from(time.hour() % 12);
        let minute = f64::from(time.minute());
        let second = f64::from(time.second());

        Self {
            hour: hour / 12.0 + minute / 720.0,
            minute: minute / 60.0 + second / 3600.0,
            second: second / 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32, second: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_midnight_is_zero() {
        let hands = HandPositions::from_time(at(0, 0, 0));
        assert_eq!(hands.hour, 0.0);
        assert_eq!(hands.minute, 0.0);
        assert_eq!(hands.second, 0.0);
    }

    #[test]
    fn test_noon_wraps_hour_hand() {
        let hands = HandPositions::from_time(at(12, 0, 0));
        assert_eq!(hands.hour, 0.0);
    }

    #[test]
    fn test_quarter_past_three() {
        let hands = HandPositions::from_time(at(15, 15, 0));
        assert!((hands.hour - (3.0 / 12.0 + 15.0 / 720.0)).abs() < 1e-12);
        assert!((hands.minute - 0.25).abs() < 1e-12);
        assert_eq!(hands.second, 0.0);
    }

    #[test]
    fn test_fractions_stay_in_unit_interval() {
        for hour in 0..24 {
            for minute in (0..60).step_by(7) {
                for second in (0..60).step_by(11) {
                    let hands = HandPositions::from_time(at(hour, minute, second));
                    for frac in [hands.hour, hands.minute, hands.second] {
                        assert!((0.0..1.0).contains(&frac), "{frac} out of range");
                    }
                }
            }
        }
        // Worst case: one tick before midnight
        let hands = HandPositions::from_time(at(23, 59, 59));
        assert!(hands.hour < 1.0);
        assert!(hands.minute < 1.0);
        assert!(hands.second < 1.0);
    }
}
