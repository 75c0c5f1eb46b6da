//! Shared utility functions for vedic calculations.

use crate::error::ChartError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular separation in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Reject NaN and infinite degrees.
pub fn require_finite(deg: f64, what: &'static str) -> Result<f64, ChartError> {
    if deg.is_finite() {
        Ok(deg)
    } else {
        Err(ChartError::InvalidInput(what))
    }
}
