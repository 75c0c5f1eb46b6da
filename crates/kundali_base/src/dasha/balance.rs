//! Birth balance: the portion of the first Mahadasha left at birth.
//!
//! The Moon's elapsed fraction of its nakshatra is the elapsed fraction
//! of the first lord's period. A balanced timeline keeps the full 120-year
//! cycle but shifts it so that birth (age 0) falls that far into the
//! first Mahadasha.

use crate::error::ChartError;
use crate::nakshatra::nakshatra_from_longitude;

use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::{NakshatraLordScheme, cycle_from, lay_out, starting_dasha_lord};

/// Nakshatra birth balance.
///
/// Returns `(nakshatra_number, balance_years, elapsed_fraction)`:
/// - `nakshatra_number`: 1-based nakshatra of the Moon
/// - `balance_years`: remaining years of the entry period at birth
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(
    moon_sidereal_lon: f64,
    entry_period_years: f64,
) -> Result<(u8, f64, f64), ChartError> {
    let info = nakshatra_from_longitude(moon_sidereal_lon)?;
    let balance = entry_period_years * (1.0 - info.elapsed_fraction);
    Ok((info.number, balance, info.elapsed_fraction))
}

/// Mahadashas anchored on the Moon's nakshatra balance.
///
/// The first period starts at a non-positive age so that exactly
/// `balance_years` of it remain at birth; the nine periods still cover
/// 120 contiguous years.
pub fn balanced_mahadasha_sequence(
    moon_sidereal_lon: f64,
    scheme: NakshatraLordScheme,
) -> Result<Vec<DashaPeriod>, ChartError> {
    let info = nakshatra_from_longitude(moon_sidereal_lon)?;
    let lord = starting_dasha_lord(info.number, scheme)?;
    let cycle = cycle_from(lord);
    let first = cycle[0].1;
    let start_age = -first * info.elapsed_fraction;
    Ok(lay_out(&cycle, start_age, first, DashaLevel::Mahadasha))
}
