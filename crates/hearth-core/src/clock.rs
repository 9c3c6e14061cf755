//! Wall-clock display formatting
//!
//! The display uses a 12-hour clock without a meridiem suffix, matching the
//! lock-screen aesthetic: `9:05`, `12:00`, `1:30:07`.

use chrono::{DateTime, Local, Timelike};

/// Convert a 24-hour hour value to its 12-hour display value.
///
/// Midnight and noon both display as 12.
pub fn format_hours(hours: u32) -> u32 {
    if hours % 12 == 0 {
        12
    } else {
        hours % 12
    }
}

/// Zero-pad a minute/second segment to two digits.
pub fn format_segment(segment: u32) -> String {
    format!("{segment:02}")
}

/// Format a timestamp as `H:MM`.
pub fn format_clock(time: &DateTime<Local>) -> String {
    format!(
        "{}:{}",
        format_hours(time.hour()),
        format_segment(time.minute())
    )
}

/// Format a timestamp as `H:MM:SS`.
pub fn format_clock_seconds(time: &DateTime<Local>) -> String {
    format!(
        "{}:{}:{}",
        format_hours(time.hour()),
        format_segment(time.minute()),
        format_segment(time.second())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_time(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, h, m, s).unwrap()
    }

    #[test]
    fn test_format_hours_midnight_is_twelve() {
        assert_eq!(format_hours(0), 12);
    }

    #[test]
    fn test_format_hours_noon_is_twelve() {
        assert_eq!(format_hours(12), 12);
    }

    #[test]
    fn test_format_hours_afternoon_wraps() {
        assert_eq!(format_hours(13), 1);
        assert_eq!(format_hours(23), 11);
    }

    #[test]
    fn test_format_hours_morning_passthrough() {
        assert_eq!(format_hours(9), 9);
    }

    #[test]
    fn test_format_segment_pads_single_digit() {
        assert_eq!(format_segment(5), "05");
    }

    #[test]
    fn test_format_segment_two_digits_unchanged() {
        assert_eq!(format_segment(45), "45");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(&local_time(0, 7, 30)), "12:07");
        assert_eq!(format_clock(&local_time(13, 45, 0)), "1:45");
    }

    #[test]
    fn test_format_clock_seconds() {
        assert_eq!(format_clock_seconds(&local_time(23, 5, 9)), "11:05:09");
    }
}
