//! Vimshottari sequence data and Mahadasha generation.
//!
//! Nine grahas rule in a fixed cycle totalling 120 years. The cycle
//! starts from the lord of the Moon's birth nakshatra.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::ChartError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

use super::types::{
    DEFAULT_DASHA_LEVEL, DashaLevel, DashaPeriod, MAX_DASHA_LEVEL, VIMSHOTTARI_TOTAL_YEARS,
};

/// Vimshottari graha sequence with full periods in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Full Mahadasha length of `graha` in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    match graha {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}

/// Position of `graha` in [`VIMSHOTTARI_SEQUENCE`].
pub const fn sequence_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// The nine `(lord, years)` pairs in cyclic order starting at `start`.
pub fn cycle_from(start: Graha) -> [(Graha, f64); 9] {
    let offset = sequence_position(start);
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(offset + i) % 9])
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How a nakshatra number (1..=27) maps to its dasha lord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NakshatraLordScheme {
    /// Consecutive blocks of three nakshatras share a lord:
    /// 1-3 Ketu, 4-6 Venus, ..., 25-27 Mercury.
    #[default]
    Block,
    /// Parashari rotation: `number % 9` indexes the sequence, 0 meaning
    /// the ninth lord. Ashwini Ketu, Bharani Venus, Krittika Sun, ...
    Cyclic,
}

/// Dasha engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashaConfig {
    pub nakshatra_lord_scheme: NakshatraLordScheme,
    /// Deepest level produced by snapshots and hierarchies (0..=4).
    pub max_level: u8,
    /// Start the cycle from the Moon's remaining nakshatra balance instead
    /// of a full first Mahadasha at age 0.
    pub use_birth_balance: bool,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            nakshatra_lord_scheme: NakshatraLordScheme::Block,
            max_level: DEFAULT_DASHA_LEVEL,
            use_birth_balance: false,
        }
    }
}

impl DashaConfig {
    /// `max_level` clamped to the supported depth.
    pub fn effective_max_level(&self) -> u8 {
        self.max_level.min(MAX_DASHA_LEVEL)
    }
}

// ---------------------------------------------------------------------------
// Starting lord
// ---------------------------------------------------------------------------

/// Dasha lord for a 1-based nakshatra number.
pub fn starting_dasha_lord(
    nakshatra_number: u8,
    scheme: NakshatraLordScheme,
) -> Result<Graha, ChartError> {
    if !(1..=27).contains(&nakshatra_number) {
        return Err(ChartError::InvalidInput("nakshatra number must be in 1..=27"));
    }
    let idx = match scheme {
        NakshatraLordScheme::Block => ((nakshatra_number - 1) / 3) as usize,
        NakshatraLordScheme::Cyclic => match nakshatra_number % 9 {
            0 => 8,
            n => (n - 1) as usize,
        },
    };
    Ok(VIMSHOTTARI_SEQUENCE[idx].0)
}

/// Dasha lord of the Moon's nakshatra in `chart`.
pub fn moon_dasha_lord(chart: &Chart, scheme: NakshatraLordScheme) -> Result<Graha, ChartError> {
    let info = nakshatra_from_longitude(chart.longitude(Graha::Chandra))?;
    starting_dasha_lord(info.number, scheme)
}

// ---------------------------------------------------------------------------
// Mahadashas
// ---------------------------------------------------------------------------

/// Lay out `cycle` back to back from `start_age`.
pub(crate) fn lay_out(
    cycle: &[(Graha, f64)],
    start_age: f64,
    first_period: f64,
    level: DashaLevel,
) -> Vec<DashaPeriod> {
    let mut periods = Vec::with_capacity(cycle.len());
    let mut cursor = start_age;
    for (i, &(lord, years)) in cycle.iter().enumerate() {
        let period = if i == 0 { first_period } else { years };
        let end = cursor + period;
        periods.push(DashaPeriod {
            lord,
            level,
            start_age: cursor,
            end_age: end,
            period,
            order: (i as u16) + 1,
        });
        cursor = end;
    }
    periods
}

/// Nine Mahadashas from age 0, starting with `starting_lord`.
///
/// Periods abut exactly and the last ends at 120.
pub fn generate_mahadasha_sequence(starting_lord: Graha) -> Vec<DashaPeriod> {
    let cycle = cycle_from(starting_lord);
    let mut periods = lay_out(&cycle, 0.0, cycle[0].1, DashaLevel::Mahadasha);
    if let Some(last) = periods.last_mut() {
        last.end_age = VIMSHOTTARI_TOTAL_YEARS;
        last.period = last.end_age - last.start_age;
    }
    periods
}
