//! Dhana Yoga: combinations of the wealth houses 2, 5, 9 and 11.
//!
//! Three checks, reported in this order: two wealth lords exchanging
//! houses, two or more natural benefics in one wealth house, and two
//! wealth lords in conjunction. Lordship is whole-sign from the ascendant
//! sign; occupancy is degree-based from the ascendant.

use std::collections::BTreeSet;

use crate::chart::Chart;
use crate::drishti::ordinal;
use crate::graha::Graha;
use crate::graha_relationships::{BeneficNature, natural_benefic_malefic};
use crate::util::angular_separation;

use super::{
    RajaYogaConfig, Yoga, YogaDetection, YogaFamily, YogaKind, average_strength,
    strength_factors,
};

/// Houses 2, 5, 9, 11.
pub const WEALTH_HOUSES: [u8; 4] = [2, 5, 9, 11];

const EXCHANGE_MULTIPLIER: f64 = 1.3;
const STRENGTH_PER_BENEFIC: f64 = 2.0;
const MIN_BENEFICS: usize = 2;

/// Lords of the wealth houses, paired with their house.
pub fn wealth_lords(chart: &Chart) -> [(u8, Graha); 4] {
    WEALTH_HOUSES.map(|h| (h, chart.house_lord(h)))
}

fn exchanges(chart: &Chart, config: &RajaYogaConfig) -> Vec<Yoga> {
    let lords = wealth_lords(chart);
    let mut out = Vec::new();
    for i in 0..lords.len() {
        for j in (i + 1)..lords.len() {
            let (h1, g1) = lords[i];
            let (h2, g2) = lords[j];
            if g1 == g2 || chart.house(g1) != h2 || chart.house(g2) != h1 {
                continue;
            }
            let pair = [g1, g2];
            out.push(Yoga {
                kind: YogaKind::WealthLordsExchange,
                grahas: pair.to_vec(),
                houses: vec![h1, h2],
                strength: average_strength(chart, &pair, config.combustion_orb)
                    * EXCHANGE_MULTIPLIER,
                factors: strength_factors(chart, &pair, config.combustion_orb),
                description: format!(
                    "{} lord {} in the {} and {} lord {} in the {} forming exchange Dhana Yoga",
                    ordinal(h1),
                    g1.english_name(),
                    ordinal(h2),
                    ordinal(h2),
                    g2.english_name(),
                    ordinal(h1)
                ),
            });
        }
    }
    out
}

fn benefic_placements(chart: &Chart) -> Vec<Yoga> {
    let mut out = Vec::new();
    for house in WEALTH_HOUSES {
        let benefics: Vec<Graha> = chart
            .occupants(house)
            .into_iter()
            .filter(|g| natural_benefic_malefic(*g) == BeneficNature::Benefic)
            .collect();
        if benefics.len() < MIN_BENEFICS {
            continue;
        }
        let names: Vec<&str> = benefics.iter().map(|g| g.english_name()).collect();
        out.push(Yoga {
            kind: YogaKind::MultipleBeneficsInWealthHouse,
            strength: benefics.len() as f64 * STRENGTH_PER_BENEFIC,
            houses: vec![house],
            factors: Vec::new(),
            description: format!(
                "{} benefic planets ({}) in the {} house forming wealth combination",
                benefics.len(),
                names.join(", "),
                ordinal(house)
            ),
            grahas: benefics,
        });
    }
    out
}

fn conjunctions(chart: &Chart, config: &RajaYogaConfig) -> Vec<Yoga> {
    let lords = wealth_lords(chart);
    let mut seen: BTreeSet<(u8, u8)> = BTreeSet::new();
    let mut out = Vec::new();
    for i in 0..lords.len() {
        for j in (i + 1)..lords.len() {
            let (h1, g1) = lords[i];
            let (h2, g2) = lords[j];
            if g1 == g2 {
                continue;
            }
            let sep = angular_separation(chart.longitude(g1), chart.longitude(g2));
            let key = (g1.index().min(g2.index()), g1.index().max(g2.index()));
            if sep > config.conjunction_orb || !seen.insert(key) {
                continue;
            }
            let pair = [g1, g2];
            out.push(Yoga {
                kind: YogaKind::WealthLordsConjunction,
                grahas: pair.to_vec(),
                houses: vec![h1, h2],
                strength: average_strength(chart, &pair, config.combustion_orb),
                factors: strength_factors(chart, &pair, config.combustion_orb),
                description: format!(
                    "{} lord {} conjunct {} lord {} in the {} house forming Dhana Yoga",
                    ordinal(h1),
                    g1.english_name(),
                    ordinal(h2),
                    g2.english_name(),
                    ordinal(chart.house(g1))
                ),
            });
        }
    }
    out
}

/// Detect Dhana (wealth) Yogas.
///
/// A graha ruling two wealth houses is never paired with itself, and an
/// unordered pair of grahas yields at most one conjunction.
pub fn detect_dhana_yogas(chart: &Chart, config: &RajaYogaConfig) -> YogaDetection {
    let mut yogas = exchanges(chart, config);
    yogas.extend(benefic_placements(chart));
    yogas.extend(conjunctions(chart, config));
    YogaDetection::new(YogaFamily::Dhana, yogas)
}
