//! Neecha Bhanga: cancellation of a graha's debilitation.
//!
//! Checked for the seven classical grahas only. Houses are counted from
//! the ascendant degree.

use crate::chart::Chart;
use crate::graha::{SAPTA_GRAHAS, rashi_lord};
use crate::graha_relationships::{debilitation_rashi, exaltation_rashi};

use super::{Yoga, YogaDetection, YogaFamily, YogaKind, is_kendra};

pub const DISPOSITOR_IN_KENDRA: &str = "Dispositor in Kendra";
pub const DEBILITATED_IN_KENDRA: &str = "Debilitated planet in Kendra";
pub const EXALTATION_LORD_IN_KENDRA: &str = "Exaltation lord in Kendra";

/// Detect Neecha Bhanga yogas.
///
/// For every graha sitting in its debilitation sign, collects the
/// cancellation factors present: the sign's lord in a kendra, the graha
/// itself in a kendra, the lord of its exaltation sign in a kendra.
/// Strength is two per factor. A debilitated graha with no factor yields
/// no entry.
pub fn detect_neecha_bhanga(chart: &Chart) -> YogaDetection {
    let mut yogas = Vec::new();
    for g in SAPTA_GRAHAS {
        let sign = chart.rashi(g);
        if sign != debilitation_rashi(g) {
            continue;
        }
        let house = chart.house(g);
        let mut factors: Vec<String> = Vec::new();
        if is_kendra(chart.house(rashi_lord(sign))) {
            factors.push(DISPOSITOR_IN_KENDRA.to_string());
        }
        if is_kendra(house) {
            factors.push(DEBILITATED_IN_KENDRA.to_string());
        }
        if is_kendra(chart.house(rashi_lord(exaltation_rashi(g)))) {
            factors.push(EXALTATION_LORD_IN_KENDRA.to_string());
        }
        if factors.is_empty() {
            continue;
        }
        let description = format!(
            "{} debilitated in {} but forming Neecha Bhanga due to {}",
            g.english_name(),
            sign.western_name(),
            factors.join(", ")
        );
        yogas.push(Yoga {
            kind: YogaKind::NeechaBhanga,
            grahas: vec![g],
            houses: vec![house],
            strength: 2.0 * factors.len() as f64,
            factors,
            description,
        });
    }
    YogaDetection::new(YogaFamily::NeechaBhanga, yogas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlanetaryPosition;
    use crate::graha::{ALL_GRAHAS, Graha};

    fn chart(asc: f64, lons: [f64; 9]) -> Chart {
        let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
            .collect();
        Chart::new(asc, &positions).unwrap()
    }

    #[test]
    fn dispositor_in_first_house() {
        // Aquarius rising; Jupiter debilitated in Capricorn (house 12),
        // Saturn in house 1, Moon (Cancer's lord) in house 5.
        let c = chart(300.0, [10.0, 75.0, 250.0, 20.0, 285.0, 330.0, 305.0, 100.0, 280.0]);
        let d = detect_neecha_bhanga(&c);
        assert_eq!(d.total_count, 1);
        let y = &d.yogas[0];
        assert_eq!(y.grahas, vec![Graha::Guru]);
        assert_eq!(y.factors, vec![DISPOSITOR_IN_KENDRA.to_string()]);
        assert!((y.strength - 2.0).abs() < 1e-12);
        assert_eq!(y.houses, vec![12]);
    }

    #[test]
    fn all_three_factors() {
        // Aries rising; Sun debilitated in Libra (house 7). Venus in
        // house 1, Mars (Aries lord) in house 10.
        let c = chart(0.0, [190.0, 60.0, 280.0, 170.0, 120.0, 15.0, 300.0, 45.0, 225.0]);
        let d = detect_neecha_bhanga(&c);
        let y = d.yogas.iter().find(|y| y.grahas == vec![Graha::Surya]).unwrap();
        assert_eq!(y.factors.len(), 3);
        assert!((y.strength - 6.0).abs() < 1e-12);
    }

    #[test]
    fn no_factor_no_entry() {
        // Aries rising; Mercury debilitated in Pisces (house 12) is also
        // its own exaltation lord. Jupiter sits in house 2.
        let c = chart(0.0, [100.0, 40.0, 130.0, 345.0, 50.0, 200.0, 160.0, 80.0, 260.0]);
        let d = detect_neecha_bhanga(&c);
        assert!(!d.present);
        assert!(d.yogas.is_empty());
    }

    #[test]
    fn idempotent() {
        let c = chart(300.0, [10.0, 75.0, 250.0, 20.0, 285.0, 330.0, 305.0, 100.0, 280.0]);
        assert_eq!(detect_neecha_bhanga(&c), detect_neecha_bhanga(&c));
    }
}
