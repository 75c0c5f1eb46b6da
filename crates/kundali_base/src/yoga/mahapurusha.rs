//! Pancha Mahapurusha Yogas.
//!
//! Mars, Mercury, Jupiter, Venus or Saturn in its own or exaltation sign
//! while occupying a kendra: Ruchaka, Bhadra, Hamsa, Malavya, Sasa.

use crate::chart::Chart;
use crate::graha::Graha;
use crate::graha_relationships::{SignDignity, dignity_of};

use super::{
    RajaYogaConfig, Yoga, YogaDetection, YogaFamily, YogaKind, is_kendra, planet_score,
    strength_factors,
};

const MAHAPURUSHA: [(Graha, YogaKind); 5] = [
    (Graha::Mangal, YogaKind::Ruchaka),
    (Graha::Buddh, YogaKind::Bhadra),
    (Graha::Guru, YogaKind::Hamsa),
    (Graha::Shukra, YogaKind::Malavya),
    (Graha::Shani, YogaKind::Sasa),
];

const EXALTED_MULTIPLIER: f64 = 1.3;

/// Extra strength for the angular houses that count most.
fn house_bonus(house: u8) -> f64 {
    match house {
        1 => 1.0,
        10 => 0.5,
        _ => 0.0,
    }
}

/// Mahapurusha kind formed by `graha`, if it is one of the five.
pub fn mahapurusha_kind(graha: Graha) -> Option<YogaKind> {
    MAHAPURUSHA
        .iter()
        .find(|(g, _)| *g == graha)
        .map(|(_, kind)| *kind)
}

/// Detect Pancha Mahapurusha Yogas.
pub fn detect_pancha_mahapurusha(chart: &Chart, config: &RajaYogaConfig) -> YogaDetection {
    let mut yogas = Vec::new();
    for (g, kind) in MAHAPURUSHA {
        let house = chart.house(g);
        if !is_kendra(house) {
            continue;
        }
        let sign = chart.rashi(g);
        let dignity = dignity_of(g, sign);
        let (label, multiplier) = match dignity {
            SignDignity::Exalted => ("exaltation", EXALTED_MULTIPLIER),
            SignDignity::OwnSign => ("own sign", 1.0),
            _ => continue,
        };
        let score =
            (planet_score(chart, g, config.combustion_orb) + house_bonus(house)).clamp(1.0, 10.0);
        yogas.push(Yoga {
            kind,
            grahas: vec![g],
            houses: vec![house],
            strength: score * multiplier,
            factors: strength_factors(chart, &[g], config.combustion_orb),
            description: format!(
                "{} in {} {} in house {} forming {}",
                g.english_name(),
                label,
                sign.western_name(),
                house,
                kind.name()
            ),
        });
    }
    YogaDetection::new(YogaFamily::PanchaMahapurusha, yogas)
}
