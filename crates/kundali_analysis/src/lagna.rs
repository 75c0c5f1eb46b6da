//! Lagna (ascendant) analysis: sign traits, lagna lord, functional roles.

use serde::Serialize;

use kundali_base::drishti::ordinal;
use kundali_base::{
    ALL_GRAHAS, Chart, Element, Graha, Modality, Nakshatra, Rashi, SignDignity, dignity_of,
    nakshatra_from_longitude, rashi_lord,
};

use crate::error::AnalysisError;
use crate::strength::{
    FunctionalNature, functional_nature, placement_strength, strength_description,
};

/// Temperament keywords per sign, indexed by `Rashi::index()`. The last
/// entry of each row is the sign's characteristic weakness.
static SIGN_CHARACTERISTICS: [[&str; 6]; 12] = [
    [
        "Dynamic and energetic",
        "Natural leadership qualities",
        "Pioneering spirit",
        "Quick to act and decide",
        "Courageous and adventurous",
        "Can be impulsive and impatient",
    ],
    [
        "Patient and persistent",
        "Practical and reliable",
        "Strong determination",
        "Appreciation for beauty and comfort",
        "Stable and trustworthy",
        "Can be stubborn and possessive",
    ],
    [
        "Intellectual and curious",
        "Excellent communication skills",
        "Adaptable and versatile",
        "Quick-witted and humorous",
        "Social and friendly",
        "Can be restless and scattered",
    ],
    [
        "Emotional and intuitive",
        "Strong family bonds",
        "Protective and nurturing",
        "Good memory and imagination",
        "Home-loving and domestic",
        "Can be moody and sensitive",
    ],
    [
        "Charismatic and confident",
        "Natural leadership abilities",
        "Generous and warm-hearted",
        "Creative and dramatic",
        "Loyal and protective",
        "Can be proud and attention-seeking",
    ],
    [
        "Analytical and detail-oriented",
        "Practical and efficient",
        "Service-oriented and helpful",
        "Modest and humble",
        "Health-conscious",
        "Can be critical and perfectionist",
    ],
    [
        "Diplomatic and fair-minded",
        "Social and charming",
        "Appreciation for beauty and harmony",
        "Good sense of justice",
        "Cooperative and balanced",
        "Can be indecisive and dependent",
    ],
    [
        "Intense and passionate",
        "Mysterious and secretive",
        "Strong willpower and determination",
        "Penetrating insight",
        "Loyal and protective",
        "Can be jealous and vengeful",
    ],
    [
        "Optimistic and enthusiastic",
        "Adventurous and freedom-loving",
        "Philosophical and wise",
        "Honest and straightforward",
        "Generous and open-minded",
        "Can be tactless and restless",
    ],
    [
        "Ambitious and disciplined",
        "Responsible and practical",
        "Patient and persistent",
        "Good organizational skills",
        "Traditional and conservative",
        "Can be pessimistic and rigid",
    ],
    [
        "Independent and original",
        "Humanitarian and idealistic",
        "Intellectual and innovative",
        "Friendly and social",
        "Progressive and forward-thinking",
        "Can be rebellious and detached",
    ],
    [
        "Compassionate and empathetic",
        "Intuitive and spiritual",
        "Artistic and creative",
        "Selfless and sacrificing",
        "Adaptable and flexible",
        "Can be escapist and unrealistic",
    ],
];

/// What the lagna lord brings to the house it occupies, 1-based.
const LORD_IN_HOUSE: [&str; 12] = [
    "a self-made life shaped by personal initiative",
    "a life oriented around family, resources and speech",
    "courage and success through one's own efforts",
    "attachment to home, comfort and inner contentment",
    "intelligence, creativity and merit from past actions",
    "a life of service and struggle against obstacles",
    "a life shaped by partners and public dealings",
    "an interest in research, hidden matters and sudden change",
    "fortune, higher learning and guidance from mentors",
    "public standing and achievement through work",
    "gains, networks and fulfilled ambitions",
    "spiritual inclination, expenses or life abroad",
];

pub fn sign_characteristics(rashi: Rashi) -> &'static [&'static str; 6] {
    &SIGN_CHARACTERISTICS[rashi.index() as usize]
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LagnaLordAnalysis {
    pub graha: Graha,
    pub rashi: Rashi,
    pub house: u8,
    pub dignity: SignDignity,
    pub strength: f64,
    pub effects: Vec<String>,
}

/// Grahas grouped by their functional role for this ascendant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunctionalNatures {
    pub benefic: Vec<Graha>,
    pub malefic: Vec<Graha>,
    pub neutral: Vec<Graha>,
}

/// Sun and Moon placements feeding the personality portrait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Luminaries {
    pub sun_sign: Rashi,
    pub sun_house: u8,
    pub moon_sign: Rashi,
    pub moon_house: u8,
    pub moon_nakshatra: Nakshatra,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LagnaAnalysis {
    pub rashi: Rashi,
    pub sign: &'static str,
    pub degree_in_sign: f64,
    pub element: Element,
    pub modality: Modality,
    pub characteristics: &'static [&'static str],
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub lord: LagnaLordAnalysis,
    pub functional_nature: FunctionalNatures,
    pub luminaries: Luminaries,
    /// 1..10.
    pub overall_strength: u8,
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Overall lagna strength on 1..10.
///
/// Base 5; +1 for an early degree (0..=5), -1 for a late one (25 and
/// above); plus half the lagna lord's deviation from 5. Rounded.
pub fn lagna_strength(degree_in_sign: f64, lord_strength: f64) -> u8 {
    let mut strength: f64 = 5.0;
    if degree_in_sign <= 5.0 {
        strength += 1.0;
    } else if degree_in_sign >= 25.0 {
        strength -= 1.0;
    }
    strength += (lord_strength - 5.0) / 2.0;
    strength.round().clamp(1.0, 10.0) as u8
}

fn functional_natures(chart: &Chart) -> FunctionalNatures {
    let lagna = chart.ascendant().rashi;
    let mut out = FunctionalNatures::default();
    for g in ALL_GRAHAS {
        match functional_nature(lagna, g) {
            Some(FunctionalNature::Benefic) => out.benefic.push(g),
            Some(FunctionalNature::Malefic) => out.malefic.push(g),
            Some(FunctionalNature::Neutral) => out.neutral.push(g),
            None => {}
        }
    }
    out
}

fn lagna_lord(chart: &Chart) -> LagnaLordAnalysis {
    let graha = rashi_lord(chart.ascendant().rashi);
    let placement = chart.placement(graha);
    let dignity = dignity_of(graha, placement.rashi);
    let mut effects = vec![format!(
        "Lagna lord in the {} house gives {}",
        ordinal(placement.house),
        LORD_IN_HOUSE[(placement.house - 1) as usize]
    )];
    match dignity {
        SignDignity::Exalted | SignDignity::OwnSign => {
            effects.push(format!(
                "{} in {} strengthens the whole chart",
                graha.english_name(),
                dignity.name().to_lowercase()
            ));
        }
        SignDignity::Debilitated => {
            effects.push(format!(
                "{} debilitated weakens self-confidence and vitality",
                graha.english_name()
            ));
        }
        _ => {}
    }
    LagnaLordAnalysis {
        graha,
        rashi: placement.rashi,
        house: placement.house,
        dignity,
        strength: placement_strength(chart, graha),
        effects,
    }
}

/// Analyze the ascendant of `chart`.
pub fn analyze_lagna(chart: &Chart) -> Result<LagnaAnalysis, AnalysisError> {
    let asc = chart.ascendant();
    let traits = sign_characteristics(asc.rashi);
    let lord = lagna_lord(chart);
    let overall_strength = lagna_strength(asc.degree_in_sign, lord.strength);

    let moon = chart.placement(Graha::Chandra);
    let sun = chart.placement(Graha::Surya);
    let luminaries = Luminaries {
        sun_sign: sun.rashi,
        sun_house: sun.house,
        moon_sign: moon.rashi,
        moon_house: moon.house,
        moon_nakshatra: nakshatra_from_longitude(moon.longitude)?.nakshatra,
    };

    let summary = format!(
        "You have a {} Ascendant, which gives you a {} nature. Your Lagna lord {} is placed in the {} house, indicating {}. Overall, this suggests a {} personality that is {}.",
        asc.rashi.western_name(),
        traits[0].to_lowercase(),
        lord.graha.english_name(),
        ordinal(lord.house),
        LORD_IN_HOUSE[(lord.house - 1) as usize],
        strength_description(lord.strength),
        traits[1].to_lowercase(),
    );
    log::debug!(
        "lagna {} lord {} strength {overall_strength}",
        asc.rashi.western_name(),
        lord.graha.english_name()
    );

    Ok(LagnaAnalysis {
        rashi: asc.rashi,
        sign: asc.rashi.western_name(),
        degree_in_sign: asc.degree_in_sign,
        element: asc.rashi.element(),
        modality: asc.rashi.modality(),
        characteristics: traits,
        strengths: traits[..5].to_vec(),
        challenges: traits[5..].to_vec(),
        functional_nature: functional_natures(chart),
        luminaries,
        overall_strength,
        summary,
        lord,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::PlanetaryPosition;

    fn chart(asc: f64, lons: [f64; 9]) -> Chart {
        let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
            .collect();
        Chart::new(asc, &positions).unwrap()
    }

    #[test]
    fn lagna_strength_degree_bands() {
        assert_eq!(lagna_strength(3.0, 5.0), 6);
        assert_eq!(lagna_strength(15.0, 5.0), 5);
        assert_eq!(lagna_strength(27.0, 5.0), 4);
        assert_eq!(lagna_strength(3.0, 10.0), 9);
        assert_eq!(lagna_strength(27.0, 1.0), 2);
    }

    #[test]
    fn leo_rising_with_sun_in_own_sign() {
        // Leo ascendant at 122, Sun at 130 in Leo (own sign, house 1).
        let c = chart(122.0, [130.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
        let a = analyze_lagna(&c).unwrap();
        assert_eq!(a.rashi, Rashi::Simha);
        assert_eq!(a.lord.graha, Graha::Surya);
        assert_eq!(a.lord.house, 1);
        assert_eq!(a.lord.dignity, SignDignity::OwnSign);
        // 5 + 2 own + 1 kendra.
        assert!((a.lord.strength - 8.0).abs() < 1e-12);
        // 5 + 1 early degree + 1.5, rounded.
        assert_eq!(a.overall_strength, 8);
        assert_eq!(a.strengths.len(), 5);
        assert_eq!(a.challenges, vec!["Can be proud and attention-seeking"]);
        assert!(a.summary.starts_with("You have a Leo Ascendant"));
        assert!(a.functional_nature.benefic.contains(&Graha::Surya));
        assert_eq!(a.luminaries.moon_sign, Rashi::Vrishabha);
    }

    #[test]
    fn functional_groups_cover_seven_grahas() {
        let c = chart(185.0, [10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
        let f = analyze_lagna(&c).unwrap().functional_nature;
        assert_eq!(f.benefic.len() + f.malefic.len() + f.neutral.len(), 7);
    }
}
