//! Calendar conversion and birth-time handling.
//!
//! This crate provides:
//! - Julian Day <-> Gregorian calendar conversions
//! - A `UtcTime` instant type
//! - Birth input parsing (`YYYY-MM-DD`, `HH:MM`, UTC offset) to JD UT

pub mod birth;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use birth::{BirthInput, BirthMoment, UtcOffset, parse_date, parse_time};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
};
pub use utc_time::UtcTime;
