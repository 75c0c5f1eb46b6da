//! Kendra-Trikona Raja Yoga.
//!
//! A kendra lord (houses 1, 4, 7, 10) combined with a trikona lord
//! (houses 1, 5, 9) by conjunction, mutual 180-degree aspect, or sign
//! exchange. Lordship is counted whole-sign from the ascendant sign.
//! A graha ruling both a kendra and a trikona is never paired with itself.

use std::collections::BTreeSet;

use crate::chart::Chart;
use crate::graha::Graha;
use crate::graha_relationships::is_own_sign;
use crate::util::angular_separation;

use super::{
    KENDRA_HOUSES, RajaYogaConfig, TRIKONA_HOUSES, Yoga, YogaDetection, YogaFamily, YogaKind,
    average_strength, strength_factors,
};

const ASPECT_MULTIPLIER: f64 = 0.8;
const PARIVARTANA_MULTIPLIER: f64 = 1.2;

fn lords_of(chart: &Chart, houses: &[u8]) -> Vec<Graha> {
    let mut out: Vec<Graha> = Vec::with_capacity(houses.len());
    for &h in houses {
        let lord = chart.house_lord(h);
        if !out.contains(&lord) {
            out.push(lord);
        }
    }
    out
}

/// Distinct lords of the kendra houses, in house order.
pub fn kendra_lords(chart: &Chart) -> Vec<Graha> {
    lords_of(chart, &KENDRA_HOUSES)
}

/// Distinct lords of the trikona houses, in house order.
pub fn trikona_lords(chart: &Chart) -> Vec<Graha> {
    lords_of(chart, &TRIKONA_HOUSES)
}

/// Detect Kendra-Trikona Raja Yogas.
///
/// Each relationship type is reported separately, so one pair may yield
/// both a conjunction and a parivartana. An unordered pair is reported
/// at most once per type.
pub fn detect_raja_yogas(chart: &Chart, config: &RajaYogaConfig) -> YogaDetection {
    let kendra = kendra_lords(chart);
    let trikona = trikona_lords(chart);
    let mut seen: BTreeSet<(u8, u8, YogaKind)> = BTreeSet::new();
    let mut yogas = Vec::new();

    for &k in &kendra {
        for &t in &trikona {
            if k == t {
                continue;
            }
            let key = |kind| (k.index().min(t.index()), k.index().max(t.index()), kind);
            let sep = angular_separation(chart.longitude(k), chart.longitude(t));
            let pair = [k, t];
            let base = average_strength(chart, &pair, config.combustion_orb);

            if sep <= config.conjunction_orb && seen.insert(key(YogaKind::KendraTrikonaConjunction)) {
                let house = chart.house(k);
                yogas.push(Yoga {
                    kind: YogaKind::KendraTrikonaConjunction,
                    grahas: pair.to_vec(),
                    houses: vec![house],
                    strength: base,
                    factors: strength_factors(chart, &pair, config.combustion_orb),
                    description: format!(
                        "Kendra lord {} conjunct trikona lord {} in house {}",
                        k.english_name(),
                        t.english_name(),
                        house
                    ),
                });
            }

            if (180.0 - sep) <= config.aspect_orb && seen.insert(key(YogaKind::KendraTrikonaAspect)) {
                yogas.push(Yoga {
                    kind: YogaKind::KendraTrikonaAspect,
                    grahas: pair.to_vec(),
                    houses: vec![chart.house(k), chart.house(t)],
                    strength: base * ASPECT_MULTIPLIER,
                    factors: strength_factors(chart, &pair, config.combustion_orb),
                    description: format!(
                        "Kendra lord {} and trikona lord {} in mutual aspect",
                        k.english_name(),
                        t.english_name()
                    ),
                });
            }

            let exchanged = is_own_sign(k, chart.rashi(t)) && is_own_sign(t, chart.rashi(k));
            if exchanged && seen.insert(key(YogaKind::KendraTrikonaParivartana)) {
                yogas.push(Yoga {
                    kind: YogaKind::KendraTrikonaParivartana,
                    grahas: pair.to_vec(),
                    houses: vec![chart.house(k), chart.house(t)],
                    strength: base * PARIVARTANA_MULTIPLIER,
                    factors: strength_factors(chart, &pair, config.combustion_orb),
                    description: format!(
                        "Kendra lord {} in {} and trikona lord {} in {} exchange signs",
                        k.english_name(),
                        chart.rashi(k).western_name(),
                        t.english_name(),
                        chart.rashi(t).western_name()
                    ),
                });
            }
        }
    }

    YogaDetection::new(YogaFamily::Raja, yogas)
}
