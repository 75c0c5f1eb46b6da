//! Twelve-house analysis: lords, occupants and aspects per bhava.

use serde::Serialize;

use kundali_base::drishti::ordinal;
use kundali_base::yoga::{DUSTHANA_HOUSES, is_kendra};
use kundali_base::{
    BeneficNature, Chart, Graha, HouseAspectAnalysis, Rashi, SignDignity, chart_benefic_nature,
    dignity_of,
};

use crate::context::AnalysisContext;
use crate::error::AnalysisError;
use crate::strength::placement_strength;

/// Name, natural karaka and significations of each house, 1-based.
static HOUSE_INFO: [(&str, Graha, [&str; 4]); 12] = [
    ("Lagna", Graha::Surya, ["self", "personality", "health", "appearance"]),
    ("Dhana", Graha::Guru, ["wealth", "family", "speech", "food"]),
    ("Sahaja", Graha::Mangal, ["siblings", "courage", "communication", "short journeys"]),
    ("Sukha", Graha::Chandra, ["mother", "home", "property", "vehicles"]),
    ("Putra", Graha::Guru, ["children", "education", "intelligence", "romance"]),
    ("Roga", Graha::Mangal, ["enemies", "health", "service", "debts"]),
    ("Yuvati", Graha::Shukra, ["marriage", "partnerships", "business", "foreign"]),
    ("Mrityu", Graha::Shani, ["longevity", "mysteries", "transformation", "occult"]),
    ("Dharma", Graha::Guru, ["father", "dharma", "luck", "higher education"]),
    ("Karma", Graha::Surya, ["career", "status", "authority", "karma"]),
    ("Labha", Graha::Guru, ["gains", "income", "friends", "fulfillment"]),
    ("Vyaya", Graha::Shani, ["expenses", "losses", "spirituality", "foreign"]),
];

/// Significations of `house` (1..12), lowercase.
pub fn house_significations(house: u8) -> &'static [&'static str] {
    &HOUSE_INFO[(house.clamp(1, 12) - 1) as usize].2
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseAnalysis {
    pub number: u8,
    pub name: &'static str,
    pub karaka: Graha,
    pub significations: &'static [&'static str],
    pub rashi: Rashi,
    pub lord: Graha,
    pub lord_house: u8,
    pub lord_dignity: SignDignity,
    pub lord_strength: f64,
    pub occupants: Vec<Graha>,
    pub aspects: Vec<HouseAspectAnalysis>,
    pub summary: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Three or more grahas in one house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stellium {
    pub house: u8,
    pub grahas: Vec<Graha>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HousesAnalysis {
    /// Houses 1..12 in order.
    pub houses: Vec<HouseAnalysis>,
    pub empty_houses: Vec<u8>,
    pub stelliums: Vec<Stellium>,
}

impl HousesAnalysis {
    /// Analysis of `house` (1..12).
    pub fn house(&self, house: u8) -> Option<&HouseAnalysis> {
        self.houses.iter().find(|h| h.number == house)
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

fn analyze_house(chart: &Chart, house: u8, aspects: &[HouseAspectAnalysis]) -> HouseAnalysis {
    let (name, karaka, significations) = &HOUSE_INFO[(house - 1) as usize];
    let rashi = chart.house_sign(house);
    let lord = chart.house_lord(house);
    let lord_strength = placement_strength(chart, lord);
    let occupants = chart.occupants(house);
    let aspects: Vec<HouseAspectAnalysis> =
        aspects.iter().filter(|a| a.house == house).cloned().collect();

    let mut strengths = Vec::new();
    let mut challenges = Vec::new();
    if occupants
        .iter()
        .any(|g| chart_benefic_nature(chart, *g) == BeneficNature::Benefic)
    {
        strengths.push("Benefic planets enhance positive results".to_string());
    }
    if occupants
        .iter()
        .any(|g| chart_benefic_nature(chart, *g) == BeneficNature::Malefic)
    {
        challenges.push("Malefic planets may cause challenges".to_string());
    }
    if is_kendra(house) {
        strengths.push("Kendra house placement gives strong results".to_string());
    }
    if DUSTHANA_HOUSES.contains(&house) {
        challenges.push("Dusthana house placement may cause difficulties".to_string());
    }
    if lord_strength >= 7.0 {
        strengths.push(format!("House lord {} is strong", lord.english_name()));
    } else if lord_strength <= 3.0 {
        challenges.push(format!("House lord {} is weak", lord.english_name()));
    }

    let occupant_names = if occupants.is_empty() {
        "no planets".to_string()
    } else {
        occupants
            .iter()
            .map(|g| g.english_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let summary = format!(
        "The {} house is in {} and ruled by {} (placed in the {} house). It contains {}.",
        ordinal(house),
        rashi.western_name(),
        lord.english_name(),
        ordinal(chart.house(lord)),
        occupant_names
    );

    HouseAnalysis {
        number: house,
        name: *name,
        karaka: *karaka,
        significations,
        rashi,
        lord,
        lord_house: chart.house(lord),
        lord_dignity: dignity_of(lord, chart.rashi(lord)),
        lord_strength,
        occupants,
        aspects,
        summary,
        strengths,
        challenges,
        recommendations: vec![
            format!("Focus on {} for best results", significations[0]),
            "Practice patience and discipline".to_string(),
        ],
    }
}

pub(crate) fn analyze_houses_with_ctx(
    ctx: &mut AnalysisContext<'_>,
) -> Result<HousesAnalysis, AnalysisError> {
    let chart = ctx.chart();
    let aspects = ctx.house_aspects()?;
    let houses: Vec<HouseAnalysis> = (1..=12u8)
        .map(|h| analyze_house(chart, h, aspects))
        .collect();
    let empty_houses = houses
        .iter()
        .filter(|h| h.occupants.is_empty())
        .map(|h| h.number)
        .collect();
    let stelliums = houses
        .iter()
        .filter(|h| h.occupants.len() >= 3)
        .map(|h| Stellium {
            house: h.number,
            grahas: h.occupants.clone(),
        })
        .collect();
    Ok(HousesAnalysis {
        houses,
        empty_houses,
        stelliums,
    })
}

/// Analyze all twelve houses of `chart`.
pub fn analyze_houses(chart: &Chart) -> Result<HousesAnalysis, AnalysisError> {
    analyze_houses_with_ctx(&mut AnalysisContext::new(chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::{ALL_GRAHAS, PlanetaryPosition};

    fn chart(asc: f64, lons: [f64; 9]) -> Chart {
        let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
            .collect();
        Chart::new(asc, &positions).unwrap()
    }

    #[test]
    fn twelve_houses_with_libra_rising() {
        let c = chart(185.0, [10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
        let a = analyze_houses(&c).unwrap();
        assert_eq!(a.houses.len(), 12);
        let tenth = a.house(10).unwrap();
        assert_eq!(tenth.rashi, Rashi::Karka);
        assert_eq!(tenth.lord, Graha::Chandra);
        assert_eq!(tenth.name, "Karma");
        assert!(tenth.summary.starts_with("The 10th house is in Cancer"));
        let occupied: usize = a.houses.iter().map(|h| h.occupants.len()).sum();
        assert_eq!(occupied, 9);
    }

    #[test]
    fn stellium_detected() {
        // Sun, Mercury and Venus together in house 1.
        let c = chart(0.0, [10.0, 200.0, 250.0, 15.0, 150.0, 20.0, 220.0, 60.0, 240.0]);
        let a = analyze_houses(&c).unwrap();
        assert_eq!(a.stelliums.len(), 1);
        assert_eq!(a.stelliums[0].house, 1);
        assert_eq!(
            a.stelliums[0].grahas,
            vec![Graha::Surya, Graha::Buddh, Graha::Shukra]
        );
        assert!(!a.empty_houses.contains(&1));
    }

    #[test]
    fn dusthana_flagged_as_challenge() {
        let c = chart(185.0, [10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
        let a = analyze_houses(&c).unwrap();
        for h in [6, 8, 12] {
            assert!(
                a.house(h)
                    .unwrap()
                    .challenges
                    .iter()
                    .any(|c| c.contains("Dusthana"))
            );
        }
    }
}
