//! Fixed-table provider.
//!
//! Answers every query from a table captured at one instant. Used to replay
//! provider output that was computed elsewhere (positions files, fixtures).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AstronomicalProvider, Body, BodyPosition, EphemerisError, Zodiac};

/// Provider backed by a fixed position table.
///
/// The table is independent of time and location; `valid_range` optionally
/// restricts which Julian Days it accepts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableProvider {
    #[serde(default)]
    pub zodiac: Zodiac,
    #[serde(default)]
    pub ayanamsa: f64,
    pub ascendant: f64,
    #[serde(default)]
    pub positions: BTreeMap<Body, BodyPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_range: Option<(f64, f64)>,
}

impl TableProvider {
    /// Empty sidereal table with the given ascendant.
    pub fn new(ascendant: f64) -> Self {
        Self {
            ascendant,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, body: Body, position: BodyPosition) -> Self {
        self.positions.insert(body, position);
        self
    }

    pub fn with_longitude(self, body: Body, longitude: f64) -> Self {
        self.with_position(body, BodyPosition::new(longitude))
    }

    /// Parse a table from its JSON form.
    pub fn from_json_str(s: &str) -> Result<Self, EphemerisError> {
        serde_json::from_str(s).map_err(|e| EphemerisError::Provider(e.to_string()))
    }

    fn check_range(&self, jd_ut: f64) -> Result<(), EphemerisError> {
        match self.valid_range {
            Some((start, end)) if !(start..=end).contains(&jd_ut) => {
                Err(EphemerisError::OutOfRange { jd_ut })
            }
            _ => Ok(()),
        }
    }
}

impl AstronomicalProvider for TableProvider {
    fn zodiac(&self) -> Zodiac {
        self.zodiac
    }

    fn calculate_position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        self.check_range(jd_ut)?;
        self.positions
            .get(&body)
            .copied()
            .ok_or(EphemerisError::Unavailable { body })
    }

    fn calculate_ascendant(
        &self,
        jd_ut: f64,
        _latitude_deg: f64,
        _longitude_deg: f64,
    ) -> Result<f64, EphemerisError> {
        self.check_range(jd_ut)?;
        Ok(self.ascendant)
    }

    fn ayanamsa_at(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.check_range(jd_ut)?;
        Ok(self.ayanamsa)
    }
}
