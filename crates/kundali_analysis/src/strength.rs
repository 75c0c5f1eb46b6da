//! Shared scoring tables for the section analyzers.
//!
//! Analyzer strength differs from yoga strength: it also rewards angular
//! and trinal placement and penalises dusthanas, since a section reads a
//! graha's capacity to deliver results rather than a combination's force.

use serde::Serialize;

use kundali_base::yoga::{DUSTHANA_HOUSES, is_kendra};
use kundali_base::{Chart, Graha, Rashi, SignDignity, dignity_of, is_combust_in};

/// Three-step qualitative rating used across report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Moderate,
    High,
}

impl Rating {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// 7 and above is High, 4 and above Moderate, anything lower Low.
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Placement strength of `graha` on a 1..10 scale.
///
/// Starts at 5. Dignity: exalted +3, own +2, friendly +1, enemy -1,
/// debilitated -2. House: kendra or trikona +1, dusthana -1. Retrograde
/// +1, combust (classical thresholds) -2.
pub fn placement_strength(chart: &Chart, graha: Graha) -> f64 {
    let mut strength: f64 = 5.0;
    strength += match dignity_of(graha, chart.rashi(graha)) {
        SignDignity::Exalted => 3.0,
        SignDignity::OwnSign => 2.0,
        SignDignity::Friendly => 1.0,
        SignDignity::Enemy => -1.0,
        SignDignity::Debilitated => -2.0,
        SignDignity::Neutral => 0.0,
    };
    let house = chart.house(graha);
    if is_kendra(house) || matches!(house, 5 | 9) {
        strength += 1.0;
    } else if DUSTHANA_HOUSES.contains(&house) {
        strength -= 1.0;
    }
    if chart.is_retrograde(graha) {
        strength += 1.0;
    }
    if is_combust_in(chart, graha, None) {
        strength -= 2.0;
    }
    strength.clamp(1.0, 10.0)
}

pub fn strength_description(strength: f64) -> &'static str {
    if strength >= 8.0 {
        "very strong"
    } else if strength >= 6.0 {
        "strong"
    } else if strength >= 4.0 {
        "moderate"
    } else {
        "weak"
    }
}

/// Houses (1..12) whose sign `graha` rules. Empty for the nodes.
pub fn houses_ruled_by(chart: &Chart, graha: Graha) -> Vec<u8> {
    (1..=12u8).filter(|&h| chart.house_lord(h) == graha).collect()
}

// ---------------------------------------------------------------------------
// Functional nature
// ---------------------------------------------------------------------------

/// Functional role of a graha for a given ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FunctionalNature {
    Benefic,
    Malefic,
    Neutral,
}

type FunctionalRow = ([Graha; 3], [Graha; 3], Graha);

use Graha::{Buddh, Chandra, Guru, Mangal, Shani, Shukra, Surya};

/// (benefics, malefics, neutral) per ascendant, indexed by `Rashi::index()`.
const FUNCTIONAL_TABLE: [FunctionalRow; 12] = [
    ([Mangal, Surya, Guru], [Shukra, Shani, Buddh], Chandra),
    ([Shukra, Buddh, Shani], [Mangal, Surya, Guru], Chandra),
    ([Buddh, Shukra, Shani], [Guru, Mangal, Surya], Chandra),
    ([Chandra, Mangal, Guru], [Shani, Buddh, Shukra], Surya),
    ([Surya, Mangal, Guru], [Shani, Shukra, Buddh], Chandra),
    ([Buddh, Shukra, Shani], [Guru, Mangal, Surya], Chandra),
    ([Shukra, Shani, Buddh], [Mangal, Surya, Guru], Chandra),
    ([Mangal, Guru, Surya], [Shukra, Shani, Buddh], Chandra),
    ([Guru, Surya, Mangal], [Buddh, Shukra, Shani], Chandra),
    ([Shani, Buddh, Shukra], [Guru, Mangal, Surya], Chandra),
    ([Shani, Buddh, Shukra], [Guru, Mangal, Surya], Chandra),
    ([Guru, Shukra, Chandra], [Buddh, Mangal, Surya], Shani),
];

/// Functional nature of `graha` for an ascendant in `lagna`.
///
/// `None` for Rahu and Ketu, which the table does not classify.
pub fn functional_nature(lagna: Rashi, graha: Graha) -> Option<FunctionalNature> {
    let (benefic, malefic, neutral) = &FUNCTIONAL_TABLE[lagna.index() as usize];
    if benefic.contains(&graha) {
        Some(FunctionalNature::Benefic)
    } else if malefic.contains(&graha) {
        Some(FunctionalNature::Malefic)
    } else if *neutral == graha {
        Some(FunctionalNature::Neutral)
    } else {
        None
    }
}
