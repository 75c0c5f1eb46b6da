//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical UTC representation handed to the
//! astronomical provider as a Julian Day (UT).

use serde::Serialize;

use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fractional day of month (`day + time / 24h`).
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY
    }

    /// Julian Day (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Convert a Julian Day (UT) back to a calendar instant.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut);
        let day = day_frac.floor() as u32;
        // Round to the microsecond so 12:00 does not come back as 11:59:59.99999.
        let total_seconds = (day_frac.fract() * SECONDS_PER_DAY * 1e6).round() / 1e6;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn j2000_jd() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.to_jd_ut() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip_keeps_clock_time() {
        let t = UtcTime::new(1985, 6, 2, 4, 15, 0.0);
        let back = UtcTime::from_jd_ut(t.to_jd_ut());
        assert_eq!(back.year, 1985);
        assert_eq!(back.month, 6);
        assert_eq!(back.day, 2);
        assert_eq!(back.hour, 4);
        assert_eq!(back.minute, 15);
        assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }
}
