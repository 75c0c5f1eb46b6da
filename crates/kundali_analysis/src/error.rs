//! Error types for section analysis and report synthesis.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_base::ChartError;

/// Hard structural failures raised before a report is handed out.
///
/// Soft issues (empty fields, low quality scores) never become errors;
/// they are collected in [`crate::ReportValidation`] and
/// [`crate::QualityReport`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Chart-level computation failed.
    Chart(ChartError),
    /// A required report section is absent.
    MissingSection(String),
    /// The report could not be rendered as structured data.
    MalformedReport(String),
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::MissingSection(s) => write!(f, "missing required section: {s}"),
            Self::MalformedReport(msg) => write!(f, "malformed report: {msg}"),
        }
    }
}

impl Error for AnalysisError {}

impl From<ChartError> for AnalysisError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedReport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_section() {
        let e = AnalysisError::MissingSection("career".to_string());
        assert_eq!(e.to_string(), "missing required section: career");
    }

    #[test]
    fn chart_error_converts() {
        let e: AnalysisError = ChartError::InvalidInput("bad").into();
        assert_eq!(e, AnalysisError::Chart(ChartError::InvalidInput("bad")));
    }
}
