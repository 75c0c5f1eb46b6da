//! Known contradiction patterns between report sections.
//!
//! Only the enumerated patterns are resolved. Other differences between
//! sections are legitimate and left alone.

use serde::Serialize;

use crate::strength::Rating;
use crate::synthesis::{SectionId, Synthesis};

/// Closed list of recognised contradictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContradictionPattern {
    /// Weak vitality alongside a strong career outlook.
    LowVitalityHighCareer,
    /// Strained relationships alongside a strong career outlook.
    LowHarmonyHighCareer,
    /// Strong wealth indications with a weak career.
    HighWealthLowCareer,
    /// A confident personality in a fragile body.
    HighConfidenceLowVitality,
}

pub const ALL_PATTERNS: [ContradictionPattern; 4] = [
    ContradictionPattern::LowVitalityHighCareer,
    ContradictionPattern::LowHarmonyHighCareer,
    ContradictionPattern::HighWealthLowCareer,
    ContradictionPattern::HighConfidenceLowVitality,
];

impl ContradictionPattern {
    pub fn matches(self, s: &Synthesis) -> bool {
        match self {
            Self::LowVitalityHighCareer => {
                s.health.vitality == Rating::Low && s.career.success == Rating::High
            }
            Self::LowHarmonyHighCareer => {
                s.relationships.harmony == Rating::Low && s.career.success == Rating::High
            }
            Self::HighWealthLowCareer => {
                s.financial.prospects == Rating::High && s.career.success == Rating::Low
            }
            Self::HighConfidenceLowVitality => {
                s.personality.confidence == Rating::High && s.health.vitality == Rating::Low
            }
        }
    }

    /// Sections the pattern spans.
    pub const fn sections(self) -> [SectionId; 2] {
        match self {
            Self::LowVitalityHighCareer => [SectionId::Health, SectionId::Career],
            Self::LowHarmonyHighCareer => [SectionId::Relationships, SectionId::Career],
            Self::HighWealthLowCareer => [SectionId::Financial, SectionId::Career],
            Self::HighConfidenceLowVitality => [SectionId::Personality, SectionId::Health],
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::LowVitalityHighCareer => "Low vitality conflicts with high career success",
            Self::LowHarmonyHighCareer => {
                "Low relationship harmony conflicts with high career success"
            }
            Self::HighWealthLowCareer => "High financial prospects conflict with low career success",
            Self::HighConfidenceLowVitality => "High confidence conflicts with low vitality",
        }
    }

    /// Canned resolution appended to the notes of both sections.
    pub const fn resolution(self) -> &'static str {
        match self {
            Self::LowVitalityHighCareer => {
                "Career success is achievable but demands attention to health; pace ambitions and build rest into demanding periods"
            }
            Self::LowHarmonyHighCareer => {
                "Professional focus may strain partnerships; deliberately reserve time for close relationships"
            }
            Self::HighWealthLowCareer => {
                "Wealth is likely to come through inheritance, investments or partners rather than a conventional career"
            }
            Self::HighConfidenceLowVitality => {
                "Strong will can override physical limits; match commitments to actual energy levels"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contradiction {
    pub pattern: ContradictionPattern,
    pub sections: [SectionId; 2],
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub pattern: ContradictionPattern,
    pub resolution: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionReport {
    pub contradictions: Vec<Contradiction>,
    pub resolutions: Vec<Resolution>,
    /// Input synthesis with each resolution added to the involved sections' notes.
    pub resolved_data: Synthesis,
}

/// Scan `synthesis` for the known contradiction patterns and resolve them.
pub fn resolve_contradictions(synthesis: &Synthesis) -> ContradictionReport {
    let mut resolved_data = synthesis.clone();
    let mut contradictions = Vec::new();
    let mut resolutions = Vec::new();
    for pattern in ALL_PATTERNS {
        if !pattern.matches(synthesis) {
            continue;
        }
        log::warn!("contradiction: {}", pattern.description());
        for section in pattern.sections() {
            resolved_data
                .notes_mut(section)
                .push(pattern.resolution().to_string());
        }
        contradictions.push(Contradiction {
            pattern,
            sections: pattern.sections(),
            description: pattern.description(),
        });
        resolutions.push(Resolution {
            pattern,
            resolution: pattern.resolution(),
        });
    }
    ContradictionReport {
        contradictions,
        resolutions,
        resolved_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportConfig, analyze_all};
    use crate::synthesis::synthesize_analysis;
    use kundali_base::{ALL_GRAHAS, Chart, PlanetaryPosition};

    fn synthesis() -> Synthesis {
        let lons = [200.0, 30.0, 95.0, 150.0, 100.0, 250.0, 320.0, 10.0, 190.0];
        let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
            .collect();
        let chart = Chart::new(185.0, &positions).unwrap();
        let analyses = analyze_all(&chart, 20.0, &ReportConfig::default()).unwrap();
        synthesize_analysis(&analyses).unwrap()
    }

    #[test]
    fn low_vitality_high_career_resolved() {
        let mut s = synthesis();
        s.health.vitality = Rating::Low;
        s.career.success = Rating::High;
        s.personality.confidence = Rating::Moderate;
        s.relationships.harmony = Rating::Moderate;
        s.financial.prospects = Rating::Moderate;
        let r = resolve_contradictions(&s);
        assert_eq!(r.contradictions.len(), 1);
        assert_eq!(
            r.contradictions[0].pattern,
            ContradictionPattern::LowVitalityHighCareer
        );
        assert_eq!(r.resolutions.len(), 1);
        assert_eq!(r.resolved_data.health.notes.len(), 1);
        assert_eq!(r.resolved_data.career.notes.len(), 1);
        assert!(r.resolved_data.financial.notes.is_empty());
    }

    #[test]
    fn overlapping_patterns_all_fire() {
        let mut s = synthesis();
        s.health.vitality = Rating::Low;
        s.career.success = Rating::High;
        s.personality.confidence = Rating::High;
        s.relationships.harmony = Rating::Low;
        s.financial.prospects = Rating::Moderate;
        let r = resolve_contradictions(&s);
        assert_eq!(r.contradictions.len(), 3);
        // Health takes part in two patterns.
        assert_eq!(r.resolved_data.health.notes.len(), 2);
    }

    #[test]
    fn unmatched_differences_left_alone() {
        let mut s = synthesis();
        s.health.vitality = Rating::Moderate;
        s.career.success = Rating::High;
        s.relationships.harmony = Rating::Moderate;
        s.financial.prospects = Rating::Low;
        let r = resolve_contradictions(&s);
        assert!(r.contradictions.is_empty());
        assert_eq!(r.resolved_data, s);
    }
}
