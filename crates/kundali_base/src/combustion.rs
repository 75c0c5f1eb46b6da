//! Combustion (Asta) detection.
//!
//! A graha is combust when it is too close to the Sun. The classical
//! thresholds vary by planet and retrograde status; callers may override
//! them with a single fixed orb.

use crate::chart::Chart;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::util::angular_separation;

/// Classical combustion threshold (degrees from Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu (not applicable).
/// For Mercury and Venus, retrograde thresholds are tighter.
pub fn combustion_threshold(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(if is_retrograde { 12.0 } else { 14.0 }),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(if is_retrograde { 8.0 } else { 10.0 }),
        Graha::Shani => Some(15.0),
    }
}

/// Check if a single graha is combust.
///
/// `fixed_orb` replaces the classical threshold when set. A graha at
/// exactly the threshold distance is not combust (strict less-than).
/// Always `false` for Sun, Rahu, and Ketu.
pub fn is_combust(
    graha: Graha,
    graha_sid_lon: f64,
    sun_sid_lon: f64,
    is_retrograde: bool,
    fixed_orb: Option<f64>,
) -> bool {
    let threshold = match (combustion_threshold(graha, is_retrograde), fixed_orb) {
        (None, _) => return false,
        (Some(_), Some(orb)) => orb,
        (Some(t), None) => t,
    };
    angular_separation(graha_sid_lon, sun_sid_lon) < threshold
}

/// Whether `graha` is combust in `chart`.
pub fn is_combust_in(chart: &Chart, graha: Graha, fixed_orb: Option<f64>) -> bool {
    is_combust(
        graha,
        chart.longitude(graha),
        chart.longitude(Graha::Surya),
        chart.is_retrograde(graha),
        fixed_orb,
    )
}

/// All combust grahas in `chart`, in `ALL_GRAHAS` order.
pub fn combust_grahas(chart: &Chart, fixed_orb: Option<f64>) -> Vec<Graha> {
    ALL_GRAHAS
        .into_iter()
        .filter(|g| is_combust_in(chart, *g, fixed_orb))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert!(combustion_threshold(Graha::Surya, false).is_none());
        assert!(combustion_threshold(Graha::Ketu, false).is_none());
        assert_eq!(combustion_threshold(Graha::Mangal, true), Some(17.0));
        assert_eq!(combustion_threshold(Graha::Buddh, false), Some(14.0));
        assert_eq!(combustion_threshold(Graha::Buddh, true), Some(12.0));
        assert_eq!(combustion_threshold(Graha::Shukra, true), Some(8.0));
    }

    #[test]
    fn exact_threshold_not_combust() {
        assert!(!is_combust(Graha::Guru, 111.0, 100.0, false, None));
        assert!(is_combust(Graha::Guru, 110.9, 100.0, false, None));
    }

    #[test]
    fn wraps_across_zero() {
        assert!(is_combust(Graha::Shani, 355.0, 5.0, false, None));
    }

    #[test]
    fn retrograde_mercury_tighter() {
        assert!(is_combust(Graha::Buddh, 113.0, 100.0, false, None));
        assert!(!is_combust(Graha::Buddh, 113.0, 100.0, true, None));
    }

    #[test]
    fn fixed_orb_overrides() {
        assert!(!is_combust(Graha::Mangal, 110.0, 100.0, false, Some(8.0)));
        assert!(is_combust(Graha::Mangal, 107.0, 100.0, false, Some(8.0)));
        assert!(!is_combust(Graha::Rahu, 100.0, 100.0, false, Some(8.0)));
    }
}
