//! Integration tests for sign, house, dignity, aspect and yoga behaviour.
//!
//! Pure-math tests over hand-built charts.

use kundali_base::yoga::neecha_bhanga::DISPOSITOR_IN_KENDRA;
use kundali_base::{
    ALL_GRAHAS, AspectKind, Chart, Graha, PlanetaryPosition, RajaYogaConfig, Rashi, SAPTA_GRAHAS,
    SignDignity, YogaKind, aspects_of, debilitation_rashi, detect_neecha_bhanga,
    detect_raja_yogas, dignity_of, exaltation_rashi, house_of, sign_lord, sign_of,
    sign_of_house,
};

/// Longitudes in `ALL_GRAHAS` order: Sun, Moon, Mars, Mercury, Jupiter,
/// Venus, Saturn, Rahu, Ketu.
fn chart(asc: f64, lons: [f64; 9]) -> Chart {
    let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
        .iter()
        .zip(lons)
        .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
        .collect();
    Chart::new(asc, &positions).unwrap()
}

// ---------------------------------------------------------------------------
// Signs and houses
// ---------------------------------------------------------------------------

#[test]
fn sign_round_trip_all_12() {
    for idx in 1..=12u8 {
        let pos = sign_of(idx as f64 * 30.0 - 15.0).unwrap();
        assert_eq!(pos.sign_index, idx);
        assert!((pos.degree_in_sign - 15.0).abs() < 1e-9);
    }
}

#[test]
fn house_wraparound() {
    assert_eq!(house_of(5.0, 350.0).unwrap(), 2);
    assert_eq!(house_of(10.0, 350.0).unwrap(), 2);
    assert_eq!(house_of(349.9, 350.0).unwrap(), 12);
}

#[test]
fn nan_longitude_is_invalid_input() {
    assert!(sign_of(f64::NAN).is_err());
    assert!(house_of(f64::NAN, 10.0).is_err());
}

#[test]
fn sign_lords_hardcoded() {
    let expected = [
        Graha::Mangal,
        Graha::Shukra,
        Graha::Buddh,
        Graha::Chandra,
        Graha::Surya,
        Graha::Buddh,
        Graha::Shukra,
        Graha::Mangal,
        Graha::Guru,
        Graha::Shani,
        Graha::Shani,
        Graha::Guru,
    ];
    for (i, g) in expected.iter().enumerate() {
        assert_eq!(sign_lord(i as u8 + 1).unwrap(), *g);
    }
}

/// Libra rising: houses 1..12 run Libra through Virgo.
#[test]
fn scenario_libra_ascendant_houses() {
    let expected = [
        Rashi::Tula,
        Rashi::Vrischika,
        Rashi::Dhanu,
        Rashi::Makara,
        Rashi::Kumbha,
        Rashi::Meena,
        Rashi::Mesha,
        Rashi::Vrishabha,
        Rashi::Mithuna,
        Rashi::Karka,
        Rashi::Simha,
        Rashi::Kanya,
    ];
    let c = chart(185.0, [10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
    assert_eq!(c.ascendant().sign_index, 7);
    for (n, r) in (1..=12u8).zip(expected) {
        assert_eq!(sign_of_house(7, n), Some(r));
        assert_eq!(c.house_sign(n), r);
        assert_eq!(r.number(), (7 - 1 + n - 1) % 12 + 1);
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

#[test]
fn dignity_exaltation_debilitation_exclusive() {
    for g in SAPTA_GRAHAS {
        let ex = exaltation_rashi(g);
        let deb = debilitation_rashi(g);
        assert_ne!(ex, deb, "{}", g.english_name());
        assert_eq!(dignity_of(g, ex), SignDignity::Exalted);
        assert_eq!(dignity_of(g, deb), SignDignity::Debilitated);
    }
}

// ---------------------------------------------------------------------------
// Aspects
// ---------------------------------------------------------------------------

#[test]
fn seventh_aspect_is_mutual() {
    let c = chart(185.0, [10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
    let aspects = aspects_of(&c);
    for a in aspects.iter().filter(|a| a.kind == AspectKind::Seventh) {
        assert!(
            aspects.iter().any(|b| b.kind == AspectKind::Seventh
                && b.source == a.target.graha
                && b.target.graha == a.source),
            "{} -> {} not mutual",
            a.source.english_name(),
            a.target.graha.english_name()
        );
    }
}

#[test]
fn special_aspect_is_not_mutual() {
    // Mars in house 1, Sun in house 4.
    let c = chart(0.0, [100.0, 200.0, 10.0, 250.0, 160.0, 290.0, 330.0, 45.0, 225.0]);
    let aspects = aspects_of(&c);
    assert!(aspects.iter().any(|a| a.source == Graha::Mangal
        && a.target.graha == Graha::Surya
        && a.kind == AspectKind::Fourth));
    assert!(
        !aspects
            .iter()
            .any(|a| a.source == Graha::Surya && a.target.graha == Graha::Mangal)
    );
}

// ---------------------------------------------------------------------------
// Yogas
// ---------------------------------------------------------------------------

/// Jupiter debilitated in Capricorn, its dispositor Saturn in house 1.
#[test]
fn scenario_neecha_bhanga_dispositor_in_kendra() {
    let c = chart(300.0, [10.0, 75.0, 250.0, 20.0, 285.0, 330.0, 305.0, 100.0, 280.0]);
    let d = detect_neecha_bhanga(&c);
    assert!(d.present);
    assert_eq!(d.yogas.len(), 1);
    let y = &d.yogas[0];
    assert_eq!(y.kind, YogaKind::NeechaBhanga);
    assert!(y.factors.iter().any(|f| f == DISPOSITOR_IN_KENDRA));
    assert!((y.strength - 2.0).abs() < 1e-12);
}

#[test]
fn degenerate_charts_never_fail() {
    // Every graha stacked on the ascendant degree.
    let c = chart(0.0, [0.0; 9]);
    let d = detect_raja_yogas(&c, &RajaYogaConfig::default());
    assert_eq!(d.total_count, d.yogas.len());
}

#[test]
fn detectors_are_idempotent() {
    let c = chart(95.0, [200.0, 40.0, 150.0, 230.0, 282.0, 280.0, 330.0, 10.0, 190.0]);
    let cfg = RajaYogaConfig::default();

    let a = serde_json::to_string(&detect_raja_yogas(&c, &cfg)).unwrap();
    let b = serde_json::to_string(&detect_raja_yogas(&c, &cfg)).unwrap();
    assert_eq!(a, b);

    let a = serde_json::to_string(&detect_neecha_bhanga(&c)).unwrap();
    let b = serde_json::to_string(&detect_neecha_bhanga(&c)).unwrap();
    assert_eq!(a, b);

    let a = serde_json::to_string(&aspects_of(&c)).unwrap();
    let b = serde_json::to_string(&aspects_of(&c)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn yoga_serializes_type_code() {
    let c = chart(95.0, [200.0, 40.0, 150.0, 230.0, 282.0, 280.0, 330.0, 10.0, 190.0]);
    let d = detect_raja_yogas(&c, &RajaYogaConfig::default());
    let json = serde_json::to_value(&d).unwrap();
    let types: Vec<&str> = json["yogas"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|y| y["type"].as_str())
        .collect();
    assert!(types.contains(&"KENDRA_TRIKONA_CONJUNCTION"));
    assert_eq!(json["present"], true);
}
