//! Gaja Kesari Yoga: Jupiter in a kendra counted from the Moon.

use crate::chart::Chart;
use crate::drishti::ordinal;
use crate::graha::Graha;
use crate::graha_relationships::{SignDignity, dignity_of};
use crate::rashi::house_from_degrees;

use super::{
    RajaYogaConfig, Yoga, YogaDetection, YogaFamily, YogaKind, average_strength, is_kendra,
    strength_factors,
};

fn effect(distance: u8) -> &'static str {
    match distance {
        1 => "Strong personality, wisdom, good health, leadership qualities",
        4 => "Happiness, good education, landed property, vehicles, maternal blessings",
        7 => "Good spouse, successful partnerships, business acumen, public recognition",
        10 => "Career success, fame, authority, government favor, high status",
        _ => "General prosperity and wisdom",
    }
}

fn multiplier(jupiter: SignDignity, moon: SignDignity) -> f64 {
    let mut m = 1.0;
    match jupiter {
        SignDignity::Exalted => m += 0.5,
        SignDignity::OwnSign => m += 0.3,
        _ => {}
    }
    match moon {
        SignDignity::Exalted => m += 0.3,
        SignDignity::OwnSign => m += 0.2,
        _ => {}
    }
    m
}

/// Detect Gaja Kesari Yoga.
///
/// The distance from the Moon is counted in 30-degree steps from the
/// Moon's longitude. The yoga is present when Jupiter falls in the 1st,
/// 4th, 7th or 10th of those.
pub fn detect_gaja_kesari(chart: &Chart, config: &RajaYogaConfig) -> YogaDetection {
    let moon_lon = chart.longitude(Graha::Chandra);
    let distance = house_from_degrees(chart.longitude(Graha::Guru), moon_lon);
    if !is_kendra(distance) {
        return YogaDetection::new(YogaFamily::GajaKesari, Vec::new()).with_description(format!(
            "Jupiter is in {} house from Moon (not in kendra).",
            ordinal(distance)
        ));
    }

    let jupiter_dignity = dignity_of(Graha::Guru, chart.rashi(Graha::Guru));
    let moon_dignity = dignity_of(Graha::Chandra, chart.rashi(Graha::Chandra));
    let pair = [Graha::Guru, Graha::Chandra];
    let strength =
        average_strength(chart, &pair, config.combustion_orb) * multiplier(jupiter_dignity, moon_dignity);

    let mut text = effect(distance).to_string();
    if jupiter_dignity == SignDignity::Exalted {
        text.push_str(". Enhanced due to exalted Jupiter");
    }
    if moon_dignity == SignDignity::Exalted {
        text.push_str(". Amplified due to exalted Moon");
    }

    let jupiter_house = chart.house(Graha::Guru);
    let moon_house = chart.house(Graha::Chandra);
    let yoga = Yoga {
        kind: YogaKind::GajaKesari,
        grahas: pair.to_vec(),
        houses: vec![jupiter_house, moon_house],
        strength,
        factors: strength_factors(chart, &pair, config.combustion_orb),
        description: format!(
            "Jupiter in {} house from Moon forming Gaja Kesari Yoga. {}",
            ordinal(distance),
            text
        ),
    };
    YogaDetection::new(YogaFamily::GajaKesari, vec![yoga])
}
