//! Graha drishti (planetary aspects).
//!
//! Every graha aspects the 7th house from itself. Mars additionally aspects
//! the 4th and 8th, Jupiter the 5th and 9th, Saturn the 3rd and 10th.
//! Houses are counted inclusively from the source's own house, wrapping
//! modulo 12. Each aspect also carries its classical virupa strength
//! computed from the exact angular distance.

use serde::Serialize;

use crate::chart::Chart;
use crate::error::ChartError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::graha_relationships::{BeneficNature, natural_benefic_malefic};
use crate::rashi::house_distance;
use crate::util::normalize_360;

/// Aspect type by inclusive house count from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AspectKind {
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    #[serde(rename = "5th")]
    Fifth,
    #[serde(rename = "7th")]
    Seventh,
    #[serde(rename = "8th")]
    Eighth,
    #[serde(rename = "9th")]
    Ninth,
    #[serde(rename = "10th")]
    Tenth,
}

impl AspectKind {
    /// Inclusive house count (7 for the 7th aspect).
    pub const fn house_count(self) -> u8 {
        match self {
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Seventh => 7,
            Self::Eighth => 8,
            Self::Ninth => 9,
            Self::Tenth => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Third => "3rd",
            Self::Fourth => "4th",
            Self::Fifth => "5th",
            Self::Seventh => "7th",
            Self::Eighth => "8th",
            Self::Ninth => "9th",
            Self::Tenth => "10th",
        }
    }
}

/// All aspects cast by `graha`, the 7th first.
pub const fn aspect_kinds(graha: Graha) -> &'static [AspectKind] {
    match graha {
        Graha::Mangal => &[AspectKind::Seventh, AspectKind::Fourth, AspectKind::Eighth],
        Graha::Guru => &[AspectKind::Seventh, AspectKind::Fifth, AspectKind::Ninth],
        Graha::Shani => &[AspectKind::Seventh, AspectKind::Third, AspectKind::Tenth],
        _ => &[AspectKind::Seventh],
    }
}

/// Aspect `graha` casts on a house `distance` away (inclusive count).
pub fn aspect_for_distance(graha: Graha, distance: u8) -> Option<AspectKind> {
    aspect_kinds(graha)
        .iter()
        .copied()
        .find(|k| k.house_count() == distance)
}

/// Houses aspected by `graha` sitting in `from_house`, with the aspect type.
pub fn aspected_houses(graha: Graha, from_house: u8) -> Vec<(u8, AspectKind)> {
    aspect_kinds(graha)
        .iter()
        .map(|k| ((from_house + k.house_count() - 2) % 12 + 1, *k))
        .collect()
}

// ---------------------------------------------------------------------------
// Virupa strength
// ---------------------------------------------------------------------------

/// Piecewise base virupa for a given angular distance.
///
/// - `[0, 30)`:   0
/// - `[30, 90)`:  `(A - 30) * 0.75`
/// - `[90, 150)`: `45 - (A - 90) * 0.75`
/// - `[150, 180)`: `(A - 150) * 2`
/// - `[180, 300)`: `60 - (A - 180) * 0.5`
/// - `[300, 360)`: 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Bonus virupa for the special aspects of Mars, Jupiter and Saturn.
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    match graha {
        Graha::Mangal if (90.0..120.0).contains(&a) || (210.0..240.0).contains(&a) => 15.0,
        Graha::Guru if (120.0..150.0).contains(&a) || (240.0..270.0).contains(&a) => 30.0,
        Graha::Shani if (60.0..90.0).contains(&a) || (270.0..300.0).contains(&a) => 45.0,
        _ => 0.0,
    }
}

/// Total virupa from `source_lon` onto `target_lon`.
pub fn drishti_virupa(graha: Graha, source_lon: f64, target_lon: f64) -> f64 {
    let a = normalize_360(target_lon - source_lon);
    base_virupa(a) + special_virupa(graha, a)
}

// ---------------------------------------------------------------------------
// Chart aspects
// ---------------------------------------------------------------------------

/// Graha receiving an aspect and the house it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectTarget {
    pub graha: Graha,
    pub house: u8,
}

/// One directional aspect between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub source: Graha,
    pub source_house: u8,
    pub target: AspectTarget,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    pub virupa: f64,
}

/// All graha-to-graha aspects in `chart`.
///
/// For each ordered pair of distinct grahas an aspect is emitted when the
/// target's house is one the source aspects. Output order follows
/// `ALL_GRAHAS` for source, then target.
pub fn aspects_of(chart: &Chart) -> Vec<Aspect> {
    let mut out = Vec::new();
    for src in ALL_GRAHAS {
        let sp = chart.placement(src);
        for tgt in ALL_GRAHAS {
            if tgt == src {
                continue;
            }
            let tp = chart.placement(tgt);
            let distance = house_distance(sp.house, tp.house);
            if let Some(kind) = aspect_for_distance(src, distance) {
                out.push(Aspect {
                    source: src,
                    source_house: sp.house,
                    target: AspectTarget {
                        graha: tgt,
                        house: tp.house,
                    },
                    kind,
                    virupa: drishti_virupa(src, sp.longitude, tp.longitude),
                });
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// House interpretation
// ---------------------------------------------------------------------------

/// Positive and challenging themes of each house, 1-based.
const HOUSE_THEMES: [(&str, &str); 12] = [
    (
        "personality, health, and self-expression",
        "delays, challenges, or a sense of responsibility to the self",
    ),
    (
        "wealth, speech, and family harmony",
        "financial difficulties or family disputes",
    ),
    (
        "courage, communication, and siblings",
        "communication problems or sibling conflicts",
    ),
    (
        "happiness, property, and education",
        "domestic troubles or property issues",
    ),
    (
        "intelligence, creativity, and good fortune with children",
        "educational setbacks or worries about children",
    ),
    (
        "overcoming enemies and obstacles",
        "health issues or conflicts",
    ),
    (
        "partnerships and marriage harmony",
        "delays, challenges, or a sense of responsibility to partnerships",
    ),
    (
        "transformation and hidden knowledge",
        "obstacles and sudden changes",
    ),
    (
        "dharma, wisdom, and good fortune",
        "spiritual confusion or ethical dilemmas",
    ),
    (
        "career success and reputation",
        "professional obstacles or reputation issues",
    ),
    (
        "gains, friendships, and wish fulfillment",
        "disappointments in gains or friendship troubles",
    ),
    (
        "spiritual liberation and foreign connections",
        "losses or isolation",
    ),
];

/// English ordinal for a house number.
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Effect of an aspect on a house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseAspectAnalysis {
    pub house: u8,
    pub aspecting_graha: Graha,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    pub nature: BeneficNature,
    pub interpretation: String,
}

/// Interpret `graha`'s aspect of type `kind` on `house`.
///
/// Nature comes from the fixed natural table: Moon, Mercury, Jupiter and
/// Venus benefic; Sun, Mars, Saturn, Rahu and Ketu malefic.
pub fn analyze_aspect_on_house(
    house: u8,
    graha: Graha,
    kind: AspectKind,
) -> Result<HouseAspectAnalysis, ChartError> {
    if !(1..=12).contains(&house) {
        return Err(ChartError::InvalidInput("house must be in 1..=12"));
    }
    let (positive, challenges) = HOUSE_THEMES[(house - 1) as usize];
    let nature = natural_benefic_malefic(graha);
    let interpretation = match nature {
        BeneficNature::Benefic => format!(
            "{} {} aspect blesses the {} house, promoting {}",
            graha.english_name(),
            kind.label(),
            ordinal(house),
            positive
        ),
        BeneficNature::Malefic => format!(
            "{} {} aspect can bring {} ({} house)",
            graha.english_name(),
            kind.label(),
            challenges,
            ordinal(house)
        ),
    };
    Ok(HouseAspectAnalysis {
        house,
        aspecting_graha: graha,
        kind,
        nature,
        interpretation,
    })
}

/// Every graha aspect falling on `house`, interpreted.
pub fn aspects_on_house(chart: &Chart, house: u8) -> Result<Vec<HouseAspectAnalysis>, ChartError> {
    let mut out = Vec::new();
    for p in chart.placements() {
        for (h, kind) in aspected_houses(p.graha, p.house) {
            if h == house {
                out.push(analyze_aspect_on_house(house, p.graha, kind)?);
            }
        }
    }
    Ok(out)
}
