//! Birth input contract: date, wall-clock time, place and UTC offset.
//!
//! The form layer hands over strings; this module validates them and
//! produces the Julian Day (UT) the astronomical provider consumes.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month};
use crate::utc_time::UtcTime;

/// Largest offset in use anywhere (UTC+14:00, Line Islands).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Fixed offset from UTC, east positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { minutes: 0 };

    /// Build from a signed minute count.
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(format!("{minutes} minutes")));
        }
        Ok(Self { minutes })
    }

    /// Signed offset in minutes.
    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Parse `Z`, `UTC`, `+05:30`, `-0400`, `+5`, `UTC+05:30`, `GMT-3`.
    ///
    /// IANA names such as `Asia/Kolkata` are rejected: resolving them needs
    /// a tz database, which belongs to the caller.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bad = || TimeError::InvalidOffset(s.to_string());
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let body = upper
            .strip_prefix("UTC")
            .or_else(|| upper.strip_prefix("GMT"))
            .unwrap_or(&upper);
        if body.is_empty() || body == "Z" {
            return Ok(Self::UTC);
        }

        let (sign, rest) = match body.as_bytes()[0] {
            b'+' => (1, &body[1..]),
            b'-' => (-1, &body[1..]),
            _ => return Err(bad()),
        };

        let (hh, mm) = if let Some((h, m)) = rest.split_once(':') {
            (h, m)
        } else if rest.len() == 4 && rest.is_ascii() {
            rest.split_at(2)
        } else {
            (rest, "0")
        };
        let hours: i32 = hh.parse().map_err(|_| bad())?;
        let mins: i32 = mm.parse().map_err(|_| bad())?;
        if !(0..60).contains(&mins) || hours < 0 {
            return Err(bad());
        }
        Self::from_minutes(sign * (hours * 60 + mins)).map_err(|_| bad())
    }
}

/// Parse `YYYY-MM-DD` into `(year, month, day)`, checking the day exists.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let bad = || TimeError::InvalidDate(s.to_string());
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(bad());
    }
    let year: i32 = parts[0].parse().map_err(|_| bad())?;
    let month: u32 = parts[1].parse().map_err(|_| bad())?;
    let day: u32 = parts[2].parse().map_err(|_| bad())?;
    let max_day = days_in_month(year, month).ok_or_else(bad)?;
    if day == 0 || day > max_day {
        return Err(bad());
    }
    Ok((year, month, day))
}

/// Parse `HH:MM` (seconds optional) into `(hour, minute, second)`.
pub fn parse_time(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let bad = || TimeError::InvalidTime(s.to_string());
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(bad());
    }
    let hour: u32 = parts[0].parse().map_err(|_| bad())?;
    let minute: u32 = parts[1].parse().map_err(|_| bad())?;
    let second: f64 = match parts.get(2) {
        Some(p) => p.parse().map_err(|_| bad())?,
        None => 0.0,
    };
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(bad());
    }
    Ok((hour, minute, second))
}

/// Raw birth data as collected by the form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    /// `YYYY-MM-DD`, local civil date.
    pub date_of_birth: String,
    /// `HH:MM`, local wall-clock time.
    pub time_of_birth: String,
    /// Geographic latitude in degrees, north positive [-90, 90].
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive [-180, 180].
    pub longitude: f64,
    /// UTC offset string (see [`UtcOffset::parse`]).
    pub timezone: String,
}

/// A validated birth instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthMoment {
    /// Birth instant in UTC.
    pub utc: UtcTime,
    /// Julian Day (UT) of the birth instant.
    pub jd_ut: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Offset the local time was given in.
    pub offset: UtcOffset,
}

impl BirthInput {
    /// Validate every field and convert to a UT instant.
    pub fn to_moment(&self) -> Result<BirthMoment, TimeError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TimeError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TimeError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        let (year, month, day) = parse_date(&self.date_of_birth)?;
        let (hour, minute, second) = parse_time(&self.time_of_birth)?;
        let offset = UtcOffset::parse(&self.timezone)?;

        let local = UtcTime::new(year, month, day, hour, minute, second);
        let jd_ut = calendar_to_jd(year, month, local.day_fraction())
            - offset.minutes() as f64 / 1440.0;

        Ok(BirthMoment {
            utc: UtcTime::from_jd_ut(jd_ut),
            jd_ut,
            latitude: self.latitude,
            longitude: self.longitude,
            offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str, time: &str, tz: &str) -> BirthInput {
        BirthInput {
            date_of_birth: date.to_string(),
            time_of_birth: time.to_string(),
            latitude: 28.6139,
            longitude: 77.2090,
            timezone: tz.to_string(),
        }
    }

    #[test]
    fn offset_variants() {
        assert_eq!(UtcOffset::parse("Z").unwrap().minutes(), 0);
        assert_eq!(UtcOffset::parse("UTC").unwrap().minutes(), 0);
        assert_eq!(UtcOffset::parse("+05:30").unwrap().minutes(), 330);
        assert_eq!(UtcOffset::parse("-0400").unwrap().minutes(), -240);
        assert_eq!(UtcOffset::parse("UTC+5").unwrap().minutes(), 300);
        assert_eq!(UtcOffset::parse("gmt-03:00").unwrap().minutes(), -180);
    }

    #[test]
    fn offset_rejects_iana_and_garbage() {
        assert!(UtcOffset::parse("Asia/Kolkata").is_err());
        assert!(UtcOffset::parse("+5:75").is_err());
        assert!(UtcOffset::parse("+15:00").is_err());
    }

    #[test]
    fn date_validation() {
        assert_eq!(parse_date("1990-08-15").unwrap(), (1990, 8, 15));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("15/08/1990").is_err());
    }

    #[test]
    fn time_validation() {
        assert_eq!(parse_time("06:45").unwrap().0, 6);
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn ist_birth_converts_to_ut() {
        // 2000-01-01 17:30 IST == 12:00 UT == J2000.0
        let m = input("2000-01-01", "17:30", "+05:30").to_moment().unwrap();
        assert!((m.jd_ut - 2_451_545.0).abs() < 1e-9);
        assert_eq!(m.utc.hour, 12);
        assert_eq!(m.utc.minute, 0);
    }

    #[test]
    fn negative_offset_crosses_midnight() {
        // 1999-12-31 22:00 at UTC-04:00 == 2000-01-01 02:00 UT
        let m = input("1999-12-31", "22:00", "-04:00").to_moment().unwrap();
        assert_eq!(m.utc.year, 2000);
        assert_eq!(m.utc.day, 1);
        assert_eq!(m.utc.hour, 2);
    }

    #[test]
    fn latitude_out_of_range() {
        let mut i = input("2000-01-01", "12:00", "Z");
        i.latitude = 91.0;
        assert!(matches!(i.to_moment(), Err(TimeError::InvalidLocation(_))));
    }
}
