//! Report synthesis: section analyses folded into six life areas.

use serde::Serialize;

use kundali_base::{Graha, Nakshatra, Rashi, SignDignity, YogaFamily, YogaKind};

use crate::aspects::AspectsAnalysis;
use crate::dasha::{DashaAnalysis, DashaEvent, UpcomingDasha};
use crate::error::AnalysisError;
use crate::houses::{HouseAnalysis, HousesAnalysis};
use crate::lagna::LagnaAnalysis;
use crate::navamsa::NavamsaAnalysis;
use crate::strength::Rating;
use crate::timeline::{Timeline, integrate_timeline};
use crate::yogas::YogaAnalysis;

/// Report sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Personality,
    Health,
    Career,
    Financial,
    Relationships,
    Predictions,
}

pub const ALL_SECTIONS: [SectionId; 6] = [
    SectionId::Personality,
    SectionId::Health,
    SectionId::Career,
    SectionId::Financial,
    SectionId::Relationships,
    SectionId::Predictions,
];

impl SectionId {
    /// Key of the section in the serialized report.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Personality => "personality",
            Self::Health => "health",
            Self::Career => "career",
            Self::Financial => "financial",
            Self::Relationships => "relationships",
            Self::Predictions => "predictions",
        }
    }
}

/// Every section analyzer's output for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionAnalyses {
    pub lagna: LagnaAnalysis,
    pub houses: HousesAnalysis,
    pub aspects: AspectsAnalysis,
    pub dasha: DashaAnalysis,
    pub yogas: YogaAnalysis,
    pub navamsa: NavamsaAnalysis,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalitySection {
    pub lagna_sign: &'static str,
    pub lagna_strength: u8,
    pub moon_sign: Rashi,
    pub moon_nakshatra: Nakshatra,
    pub sun_sign: Rashi,
    pub traits: Vec<&'static str>,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub confidence: Rating,
    pub summary: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSection {
    pub lagna_sign: &'static str,
    pub vitality: Rating,
    pub vitality_description: &'static str,
    pub sixth_house_occupants: Vec<Graha>,
    pub concerns: Vec<String>,
    pub summary: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSection {
    pub success: Rating,
    pub tenth_lord: Graha,
    pub tenth_lord_house: u8,
    pub tenth_lord_dignity: SignDignity,
    pub supporting_yogas: Vec<YogaKind>,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub summary: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSection {
    pub prospects: Rating,
    pub second_lord: Graha,
    pub eleventh_lord: Graha,
    pub wealth_yogas: Vec<YogaKind>,
    pub summary: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipSection {
    pub harmony: Rating,
    pub seventh_lord: Graha,
    pub seventh_lord_dignity: SignDignity,
    pub venus_navamsa_dignity: SignDignity,
    pub marriage_indication: Rating,
    pub vargottama: Vec<Graha>,
    pub summary: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSection {
    pub current_mahadasha: Graha,
    pub current_antardasha: Graha,
    /// Houses ruled by the running Mahadasha lord.
    pub mahadasha_houses: Vec<u8>,
    /// The requested age lies past the first Vimshottari cycle.
    pub beyond_standard_cycle: bool,
    pub timeline: Timeline,
    pub upcoming: Vec<UpcomingDasha>,
    pub events: Vec<DashaEvent>,
    pub summary: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossReference {
    pub connected: bool,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_health: Option<CrossReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_career: Option<CrossReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_career: Option<CrossReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub summary: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub key_themes: Vec<&'static str>,
}

/// Six life areas plus the links between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Synthesis {
    pub overview: Overview,
    pub personality: PersonalitySection,
    pub health: HealthSection,
    pub career: CareerSection,
    pub financial: FinancialSection,
    pub relationships: RelationshipSection,
    pub predictions: PredictionSection,
    pub cross_references: CrossReferences,
}

impl Synthesis {
    /// Free-text notes of `section`, where resolutions are recorded.
    pub fn notes_mut(&mut self, section: SectionId) -> &mut Vec<String> {
        match section {
            SectionId::Personality => &mut self.personality.notes,
            SectionId::Health => &mut self.health.notes,
            SectionId::Career => &mut self.career.notes,
            SectionId::Financial => &mut self.financial.notes,
            SectionId::Relationships => &mut self.relationships.notes,
            SectionId::Predictions => &mut self.predictions.notes,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn house(houses: &HousesAnalysis, n: u8) -> Result<&HouseAnalysis, AnalysisError> {
    houses
        .house(n)
        .ok_or_else(|| AnalysisError::MalformedReport(format!("houses analysis lacks house {n}")))
}

fn has_malefic_challenge(h: &HouseAnalysis) -> bool {
    h.challenges.iter().any(|c| c.starts_with("Malefic"))
}

/// Five-tier wording for a vitality score on 1..10.
pub fn vitality_description(score: f64) -> &'static str {
    if score >= 8.0 {
        "Excellent vitality and a strong constitution"
    } else if score >= 6.0 {
        "Good vitality with sound recuperative power"
    } else if score >= 4.0 {
        "Moderate vitality; regular routines keep health steady"
    } else if score >= 2.0 {
        "Sensitive constitution that needs consistent care"
    } else {
        "Low vitality; preventive care is essential"
    }
}

fn personality(a: &SectionAnalyses) -> PersonalitySection {
    let l = &a.lagna;
    PersonalitySection {
        lagna_sign: l.sign,
        lagna_strength: l.overall_strength,
        moon_sign: l.luminaries.moon_sign,
        moon_nakshatra: l.luminaries.moon_nakshatra,
        sun_sign: l.luminaries.sun_sign,
        traits: l.characteristics.to_vec(),
        strengths: l.strengths.iter().map(|s| s.to_string()).collect(),
        challenges: l.challenges.iter().map(|s| s.to_string()).collect(),
        confidence: Rating::from_score(f64::from(l.overall_strength)),
        summary: l.summary.clone(),
        notes: Vec::new(),
    }
}

fn health(a: &SectionAnalyses) -> Result<HealthSection, AnalysisError> {
    let first = house(&a.houses, 1)?;
    let sixth = house(&a.houses, 6)?;
    let eighth = house(&a.houses, 8)?;

    let mut score = f64::from(a.lagna.overall_strength);
    if first.strengths.iter().any(|s| s.starts_with("Benefic")) {
        score += 1.0;
    }
    if has_malefic_challenge(first) {
        score -= 1.0;
    }
    if has_malefic_challenge(sixth) {
        score -= 1.0;
    }
    if has_malefic_challenge(eighth) {
        score -= 1.0;
    }
    let score = score.clamp(1.0, 10.0);
    let vitality = Rating::from_score(score);

    let mut concerns = Vec::new();
    for h in [sixth, eighth] {
        for g in &h.occupants {
            concerns.push(format!(
                "{} in the {} house ({})",
                g.english_name(),
                h.name,
                h.significations.join(", ")
            ));
        }
    }
    if first.lord_strength <= 3.0 {
        concerns.push(format!(
            "Weak lagna lord {} lowers resistance",
            first.lord.english_name()
        ));
    }

    Ok(HealthSection {
        lagna_sign: a.lagna.sign,
        vitality,
        vitality_description: vitality_description(score),
        sixth_house_occupants: sixth.occupants.clone(),
        summary: format!(
            "{} Ascendant with {} vitality. {}.",
            a.lagna.sign,
            vitality.name(),
            vitality_description(score)
        ),
        concerns,
        notes: Vec::new(),
    })
}

fn career(a: &SectionAnalyses) -> Result<CareerSection, AnalysisError> {
    let tenth = house(&a.houses, 10)?;
    let detections = &a.yogas.detections;
    let supporting_yogas: Vec<YogaKind> = detections
        .raja
        .yogas
        .iter()
        .chain(&detections.gaja_kesari.yogas)
        .chain(&detections.pancha_mahapurusha.yogas)
        .map(|y| y.kind)
        .collect();

    let mut score = tenth.lord_strength;
    if a.yogas.has(YogaFamily::Raja) {
        score += 1.0;
    }
    if a.yogas.has(YogaFamily::PanchaMahapurusha) {
        score += 1.0;
    }
    let success = Rating::from_score(score.min(10.0));

    Ok(CareerSection {
        success,
        tenth_lord: tenth.lord,
        tenth_lord_house: tenth.lord_house,
        tenth_lord_dignity: tenth.lord_dignity,
        strengths: tenth.strengths.clone(),
        challenges: tenth.challenges.clone(),
        summary: format!(
            "Career prospects are {}. The 10th lord {} sits in the house of {} ({}), supported by {} yoga(s).",
            success.name(),
            tenth.lord.english_name(),
            house(&a.houses, tenth.lord_house)?.significations[0],
            tenth.lord_dignity.name().to_lowercase(),
            supporting_yogas.len()
        ),
        supporting_yogas,
        notes: Vec::new(),
    })
}

fn financial(a: &SectionAnalyses) -> Result<FinancialSection, AnalysisError> {
    let second = house(&a.houses, 2)?;
    let eleventh = house(&a.houses, 11)?;
    let wealth_yogas: Vec<YogaKind> = a.yogas.wealth_yogas.iter().map(|y| y.kind).collect();
    let bonus = (0.5 * wealth_yogas.len() as f64).min(2.0);
    let score = ((second.lord_strength + eleventh.lord_strength) / 2.0 + bonus).min(10.0);
    let prospects = Rating::from_score(score);
    let mut summary = format!(
        "Financial prospects are {}. Wealth (2nd) is ruled by {} and gains (11th) by {}.",
        prospects.name(),
        second.lord.english_name(),
        eleventh.lord.english_name()
    );
    if !wealth_yogas.is_empty() {
        summary.push_str(&format!(" {} Dhana Yoga(s) support wealth.", wealth_yogas.len()));
    }
    Ok(FinancialSection {
        prospects,
        second_lord: second.lord,
        eleventh_lord: eleventh.lord,
        summary,
        wealth_yogas,
        notes: Vec::new(),
    })
}

fn relationships(a: &SectionAnalyses) -> Result<RelationshipSection, AnalysisError> {
    let seventh = house(&a.houses, 7)?;
    let navamsa = &a.navamsa;
    let d9_points = match navamsa.marriage_indication {
        Rating::High => 8.0,
        Rating::Moderate => 5.5,
        Rating::Low => 3.0,
    };
    let harmony = Rating::from_score((seventh.lord_strength + d9_points) / 2.0);
    Ok(RelationshipSection {
        harmony,
        seventh_lord: seventh.lord,
        seventh_lord_dignity: seventh.lord_dignity,
        venus_navamsa_dignity: navamsa.venus_dignity,
        marriage_indication: navamsa.marriage_indication,
        vargottama: navamsa.vargottama.clone(),
        summary: format!(
            "Relationship harmony is {}. The 7th lord {} is {} and Navamsa shows {} marriage prospects.",
            harmony.name(),
            seventh.lord.english_name(),
            seventh.lord_dignity.name().to_lowercase(),
            navamsa.marriage_indication.name()
        ),
        notes: Vec::new(),
    })
}

fn predictions(a: &SectionAnalyses) -> Result<PredictionSection, AnalysisError> {
    let dasha = &a.dasha;
    let Some(md) = dasha.mahadasha() else {
        return Err(AnalysisError::MalformedReport(
            "dasha analysis has no running mahadasha".to_string(),
        ));
    };
    let mahadasha_houses = a
        .houses
        .houses
        .iter()
        .filter(|h| h.lord == md.lord)
        .map(|h| h.number)
        .collect();
    let mut notes = Vec::new();
    if dasha.beyond_standard_cycle {
        notes.push(
            "Beyond standard cycle: periods are read from the repeating Vimshottari sequence"
                .to_string(),
        );
    }
    Ok(PredictionSection {
        current_mahadasha: md.lord,
        current_antardasha: dasha.period_effects.antardasha_lord,
        mahadasha_houses,
        beyond_standard_cycle: dasha.beyond_standard_cycle,
        timeline: integrate_timeline(dasha),
        upcoming: dasha.upcoming.clone(),
        events: dasha.period_effects.events.clone(),
        summary: dasha.summary.clone(),
        notes,
    })
}

fn cross_references(
    a: &SectionAnalyses,
    health: &HealthSection,
    career: &CareerSection,
) -> Result<CrossReferences, AnalysisError> {
    let seventh = house(&a.houses, 7)?;
    let tenth = house(&a.houses, 10)?;
    let second = house(&a.houses, 2)?;
    let eleventh = house(&a.houses, 11)?;

    let career_health = (career.success == Rating::High || health.vitality == Rating::Low)
        .then_some(CrossReference {
            connected: true,
            notes: "Career stress may affect health",
        });
    let relationship_career = (seventh.lord == tenth.lord
        || seventh.lord_house == 10
        || tenth.lord_house == 7)
        .then_some(CrossReference {
            connected: true,
            notes: "Partnership may influence career",
        });
    let financial_career = (tenth.lord == second.lord
        || tenth.lord == eleventh.lord
        || matches!(tenth.lord_house, 2 | 11)
        || second.lord_house == 10
        || eleventh.lord_house == 10)
        .then_some(CrossReference {
            connected: true,
            notes: "Career directly impacts finances",
        });

    Ok(CrossReferences {
        career_health,
        relationship_career,
        financial_career,
    })
}

/// Fold the section analyses into a report synthesis.
///
/// Fails with [`AnalysisError::MalformedReport`] when a house or the
/// running Mahadasha is missing from the inputs.
pub fn synthesize_analysis(analyses: &SectionAnalyses) -> Result<Synthesis, AnalysisError> {
    let personality = personality(analyses);
    let health = health(analyses)?;
    let career = career(analyses)?;
    let financial = financial(analyses)?;
    let relationships = relationships(analyses)?;
    let predictions = predictions(analyses)?;
    let cross_references = cross_references(analyses, &health, &career)?;

    let mut strengths = personality.strengths.clone();
    strengths.extend(career.strengths.iter().cloned());
    strengths.extend(analyses.yogas.highlights.iter().cloned());
    let mut challenges = personality.challenges.clone();
    challenges.extend(career.challenges.iter().cloned());
    challenges.extend(health.concerns.iter().cloned());

    let overview = Overview {
        summary: format!("Analysis covers {} life areas.", ALL_SECTIONS.len()),
        strengths,
        challenges,
        key_themes: analyses
            .dasha
            .period_effects
            .key_themes
            .iter()
            .take(5)
            .copied()
            .collect(),
    };
    log::debug!(
        "synthesis: vitality {}, career {}, finance {}, harmony {}",
        health.vitality.name(),
        career.success.name(),
        financial.prospects.name(),
        relationships.harmony.name()
    );

    Ok(Synthesis {
        overview,
        personality,
        health,
        career,
        financial,
        relationships,
        predictions,
        cross_references,
    })
}
