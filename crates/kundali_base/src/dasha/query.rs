//! Chart-level dasha queries: current period, snapshot, hierarchy.

use crate::chart::Chart;
use crate::error::ChartError;
use crate::graha::Graha;

use super::balance::balanced_mahadasha_sequence;
use super::subperiod::{complete_level, sub_periods};
use super::types::{
    DashaHierarchy, DashaPeriod, DashaSnapshot, MAX_PERIODS_PER_LEVEL, VIMSHOTTARI_TOTAL_YEARS,
};
use super::vimshottari::{DashaConfig, generate_mahadasha_sequence, moon_dasha_lord};

/// Index of the period containing `age_years` (linear scan).
pub fn find_active_period(periods: &[DashaPeriod], age_years: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(age_years))
}

/// Mahadasha sequence for `chart` under `config`.
pub fn mahadasha_sequence(
    chart: &Chart,
    config: &DashaConfig,
) -> Result<Vec<DashaPeriod>, ChartError> {
    if config.use_birth_balance {
        balanced_mahadasha_sequence(
            chart.longitude(Graha::Chandra),
            config.nakshatra_lord_scheme,
        )
    } else {
        let lord = moon_dasha_lord(chart, config.nakshatra_lord_scheme)?;
        Ok(generate_mahadasha_sequence(lord))
    }
}

fn check_age(age_years: f64) -> Result<(), ChartError> {
    if !age_years.is_finite() || age_years < 0.0 {
        return Err(ChartError::InvalidInput(
            "age must be a finite, non-negative number of years",
        ));
    }
    if age_years >= VIMSHOTTARI_TOTAL_YEARS {
        return Err(ChartError::AgeOutOfRange { age_years });
    }
    Ok(())
}

/// Mahadasha running at `current_age_years`.
///
/// Fails with [`ChartError::AgeOutOfRange`] at or beyond 120 years, and
/// also when a balanced cycle has already ended before that age.
pub fn calculate_current_dasha(
    chart: &Chart,
    current_age_years: f64,
    config: &DashaConfig,
) -> Result<DashaPeriod, ChartError> {
    check_age(current_age_years)?;
    let seq = mahadasha_sequence(chart, config)?;
    find_active_period(&seq, current_age_years)
        .map(|i| seq[i])
        .ok_or(ChartError::AgeOutOfRange {
            age_years: current_age_years,
        })
}

/// Active period at every level down to `config.max_level`.
pub fn dasha_snapshot(
    chart: &Chart,
    age_years: f64,
    config: &DashaConfig,
) -> Result<DashaSnapshot, ChartError> {
    let current = calculate_current_dasha(chart, age_years, config)?;
    Ok(snapshot_from(current, age_years, config.effective_max_level()))
}

/// Snapshot over an already computed Mahadasha sequence.
///
/// Unlike [`dasha_snapshot`] this accepts any age inside the sequence,
/// including the negative ages of a balanced cycle. None when no
/// Mahadasha contains `age_years`.
pub fn snapshot_in(
    mahadashas: &[DashaPeriod],
    age_years: f64,
    max_level: u8,
) -> Option<DashaSnapshot> {
    let idx = find_active_period(mahadashas, age_years)?;
    Some(snapshot_from(mahadashas[idx], age_years, max_level))
}

fn snapshot_from(mahadasha: DashaPeriod, age_years: f64, max_level: u8) -> DashaSnapshot {
    let mut current = mahadasha;
    let mut periods = vec![current];
    for _ in 0..max_level {
        let children = sub_periods(&current);
        match find_active_period(&children, age_years) {
            Some(idx) => {
                current = children[idx];
                periods.push(current);
            }
            None => break,
        }
    }
    DashaSnapshot { age_years, periods }
}

/// Fold `age_years` back into the span covered by `mahadashas`.
///
/// The Vimshottari cycle repeats, so an age past the last Mahadasha maps
/// to the same offset in the next cycle. Ages already inside the span
/// are returned unchanged.
pub fn wrap_age_into_cycle(mahadashas: &[DashaPeriod], age_years: f64) -> f64 {
    let (Some(first), Some(last)) = (mahadashas.first(), mahadashas.last()) else {
        return age_years;
    };
    let span = last.end_age - first.start_age;
    if span <= 0.0 || (first.start_age..last.end_age).contains(&age_years) {
        return age_years;
    }
    first.start_age + (age_years - first.start_age).rem_euclid(span)
}

/// Full hierarchy down to `config.max_level`.
pub fn dasha_hierarchy(chart: &Chart, config: &DashaConfig) -> Result<DashaHierarchy, ChartError> {
    let level0 = mahadasha_sequence(chart, config)?;
    let mut levels = vec![level0];
    for _ in 0..config.effective_max_level() {
        let Some(parent) = levels.last() else { break };
        let next = complete_level(parent);
        if next.len() > MAX_PERIODS_PER_LEVEL {
            return Err(ChartError::InvalidInput("dasha level exceeds period cap"));
        }
        levels.push(next);
    }
    log::debug!(
        "dasha hierarchy: {} levels, {} periods at deepest",
        levels.len(),
        levels.last().map_or(0, Vec::len)
    );
    Ok(DashaHierarchy { levels })
}
