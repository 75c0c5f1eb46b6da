//! Core types for Vimshottari dasha periods.
//!
//! Periods are measured in years of age from birth rather than Julian
//! Days; [`DashaPeriod::duration_days`] gives the span in days.

use serde::Serialize;

use crate::graha::Graha;

/// Year length used to convert ages to days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Length of one full Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Maximum dasha depth. Levels 0-4 supported.
pub const MAX_DASHA_LEVEL: u8 = 4;

/// Default depth for snapshots and hierarchies.
pub const DEFAULT_DASHA_LEVEL: u8 = 2;

/// Hard cap on periods per level.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    /// Ruling graha.
    #[serde(rename = "planet")]
    pub lord: Graha,
    pub level: DashaLevel,
    /// Age in years, inclusive.
    pub start_age: f64,
    /// Age in years, exclusive.
    pub end_age: f64,
    /// Duration in years.
    pub period: f64,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    /// Whether `age_years` falls in `[start_age, end_age)`.
    pub fn contains(&self, age_years: f64) -> bool {
        self.start_age <= age_years && age_years < self.end_age
    }

    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.period * DAYS_PER_YEAR
    }
}

/// Complete hierarchy: `levels[0]` are the Mahadashas, `levels[1]` the
/// Antardashas of all of them, and so on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaHierarchy {
    pub levels: Vec<Vec<DashaPeriod>>,
}

impl DashaHierarchy {
    pub fn mahadashas(&self) -> &[DashaPeriod] {
        self.levels.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Active periods at one age, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaSnapshot {
    pub age_years: f64,
    pub periods: Vec<DashaPeriod>,
}

impl DashaSnapshot {
    pub fn mahadasha(&self) -> Option<&DashaPeriod> {
        self.periods.first()
    }

    pub fn antardasha(&self) -> Option<&DashaPeriod> {
        self.periods.get(1)
    }

    pub fn pratyantardasha(&self) -> Option<&DashaPeriod> {
        self.periods.get(2)
    }
}
