//! Viparita Raja Yoga: lords of the dusthanas (6, 8, 12) exchanging houses.

use crate::chart::Chart;
use crate::drishti::ordinal;
use crate::graha::Graha;

use super::{
    DUSTHANA_HOUSES, RajaYogaConfig, Yoga, YogaDetection, YogaFamily, YogaKind, average_strength,
    strength_factors,
};

/// Lords of houses 6, 8 and 12, paired with their house.
pub fn dusthana_lords(chart: &Chart) -> [(u8, Graha); 3] {
    DUSTHANA_HOUSES.map(|h| (h, chart.house_lord(h)))
}

const fn kind_for(a: u8, b: u8) -> YogaKind {
    match (a, b) {
        (6, 8) | (8, 6) => YogaKind::Harsha,
        (6, 12) | (12, 6) => YogaKind::Sarala,
        _ => YogaKind::Vimala,
    }
}

/// Detect Viparita Raja Yogas.
///
/// For each pair of dusthana houses, the yoga forms when the lord of the
/// first occupies the second and the lord of the second occupies the
/// first. Occupancy is degree-based from the ascendant.
pub fn detect_viparita_raja(chart: &Chart, config: &RajaYogaConfig) -> YogaDetection {
    let lords = dusthana_lords(chart);
    let mut yogas = Vec::new();
    for i in 0..lords.len() {
        for j in (i + 1)..lords.len() {
            let (h1, g1) = lords[i];
            let (h2, g2) = lords[j];
            if chart.house(g1) != h2 || chart.house(g2) != h1 {
                continue;
            }
            let pair = [g1, g2];
            let kind = kind_for(h1, h2);
            yogas.push(Yoga {
                kind,
                grahas: pair.to_vec(),
                houses: vec![h1, h2],
                strength: average_strength(chart, &pair, config.combustion_orb),
                factors: strength_factors(chart, &pair, config.combustion_orb),
                description: format!(
                    "{} lord in {} and {} lord in {} forming {}",
                    ordinal(h1),
                    ordinal(h2),
                    ordinal(h2),
                    ordinal(h1),
                    kind.name()
                ),
            });
        }
    }
    YogaDetection::new(YogaFamily::ViparitaRaja, yogas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlanetaryPosition;
    use crate::graha::ALL_GRAHAS;

    fn chart(asc: f64, lons: [f64; 9]) -> Chart {
        let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
            .collect();
        Chart::new(asc, &positions).unwrap()
    }

    #[test]
    fn dusthana_lords_aries() {
        let c = chart(15.0, [0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 30.0]);
        assert_eq!(
            dusthana_lords(&c),
            [(6, Graha::Buddh), (8, Graha::Mangal), (12, Graha::Guru)]
        );
    }

    #[test]
    fn harsha_from_six_eight_exchange() {
        // Aries rising at 15: Mercury (6th lord) in house 8, Mars (8th lord) in house 6.
        let c = chart(15.0, [240.0, 60.0, 170.0, 230.0, 100.0, 280.0, 320.0, 10.0, 190.0]);
        let d = detect_viparita_raja(&c, &RajaYogaConfig::default());
        assert_eq!(d.total_count, 1);
        assert_eq!(d.yogas[0].kind, YogaKind::Harsha);
        assert_eq!(d.yogas[0].houses, vec![6, 8]);
    }

    #[test]
    fn no_exchange_no_yoga() {
        let c = chart(15.0, [240.0, 60.0, 170.0, 100.0, 230.0, 280.0, 320.0, 10.0, 190.0]);
        assert!(!detect_viparita_raja(&c, &RajaYogaConfig::default()).present);
    }

    #[test]
    fn pair_kinds() {
        assert_eq!(kind_for(6, 8), YogaKind::Harsha);
        assert_eq!(kind_for(12, 6), YogaKind::Sarala);
        assert_eq!(kind_for(8, 12), YogaKind::Vimala);
    }
}
