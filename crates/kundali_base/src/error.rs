//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_core::EphemerisError;
use kundali_time::TimeError;

use crate::graha::Graha;

/// Errors from chart, varga, yoga and dasha calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed longitude, degree or index passed to a pure function.
    InvalidInput(&'static str),
    /// A required graha position is missing.
    IncompleteChart(Graha),
    /// Divisional factor outside the implemented set.
    UnsupportedDivision(u16),
    /// Current-dasha lookup past one full 120-year cycle.
    AgeOutOfRange { age_years: f64 },
    /// Error from the astronomical provider.
    Ephemeris(EphemerisError),
    /// Error from birth-time conversion.
    Time(TimeError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::IncompleteChart(g) => {
                write!(f, "incomplete chart: missing {}", g.english_name())
            }
            Self::UnsupportedDivision(d) => write!(f, "unsupported division: D{d}"),
            Self::AgeOutOfRange { age_years } => {
                write!(f, "age {age_years} is beyond the 120-year cycle")
            }
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
