//! Error types for birth-time parsing and calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion or birth input parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is malformed or names a day that does not exist.
    InvalidDate(String),
    /// Time string is not a valid `HH:MM` (or `HH:MM:SS`) wall-clock time.
    InvalidTime(String),
    /// UTC offset could not be parsed (IANA zone names are not resolved here).
    InvalidOffset(String),
    /// Geographic coordinate outside its valid range.
    InvalidLocation(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
            Self::InvalidTime(s) => write!(f, "invalid time: {s}"),
            Self::InvalidOffset(s) => write!(f, "invalid UTC offset: {s}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for TimeError {}
