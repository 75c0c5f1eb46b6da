//! Rule-based priority ranking of report areas.

use serde::Serialize;

use kundali_base::SignDignity;
use kundali_base::yoga::DUSTHANA_HOUSES;

use crate::strength::Rating;
use crate::synthesis::{ALL_SECTIONS, SectionId, Synthesis};

/// Lagna strength at or below which the lagna counts as weak.
pub const WEAK_LAGNA_STRENGTH: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityItem {
    pub area: SectionId,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Priorities {
    pub critical: Vec<PriorityItem>,
    pub high: Vec<PriorityItem>,
    pub medium: Vec<PriorityItem>,
    pub low: Vec<PriorityItem>,
}

impl Priorities {
    fn mentions(&self, area: SectionId) -> bool {
        [&self.critical, &self.high, &self.medium]
            .iter()
            .any(|bucket| bucket.iter().any(|i| i.area == area))
    }
}

fn item(area: SectionId, reason: impl Into<String>) -> PriorityItem {
    PriorityItem {
        area,
        reason: reason.into(),
    }
}

/// Sort report areas into critical/high/medium/low buckets.
///
/// Critical: weak lagna, low vitality. High: debilitated 10th or 7th
/// lord, low financial prospects, a Mahadasha lord ruling a dusthana.
/// Medium: any area rated high. Low: every area not ranked above.
pub fn rank_analysis_priorities(s: &Synthesis) -> Priorities {
    let mut p = Priorities::default();

    if s.personality.lagna_strength <= WEAK_LAGNA_STRENGTH {
        p.critical.push(item(
            SectionId::Personality,
            format!("Weak lagna (strength {}/10)", s.personality.lagna_strength),
        ));
    }
    if s.health.vitality == Rating::Low {
        p.critical.push(item(SectionId::Health, "Low vitality"));
    }

    if s.career.tenth_lord_dignity == SignDignity::Debilitated {
        p.high.push(item(
            SectionId::Career,
            format!(
                "10th lord {} is debilitated",
                s.career.tenth_lord.english_name()
            ),
        ));
    }
    if s.relationships.seventh_lord_dignity == SignDignity::Debilitated {
        p.high.push(item(
            SectionId::Relationships,
            format!(
                "7th lord {} is debilitated",
                s.relationships.seventh_lord.english_name()
            ),
        ));
    }
    if s.financial.prospects == Rating::Low {
        p.high.push(item(SectionId::Financial, "Low financial prospects"));
    }
    if s
        .predictions
        .mahadasha_houses
        .iter()
        .any(|h| DUSTHANA_HOUSES.contains(h))
    {
        p.high.push(item(
            SectionId::Predictions,
            format!(
                "Running {} Mahadasha rules a dusthana",
                s.predictions.current_mahadasha.english_name()
            ),
        ));
    }

    let ratings = [
        (SectionId::Personality, s.personality.confidence),
        (SectionId::Health, s.health.vitality),
        (SectionId::Career, s.career.success),
        (SectionId::Financial, s.financial.prospects),
        (SectionId::Relationships, s.relationships.harmony),
    ];
    for (area, rating) in ratings {
        if rating == Rating::High {
            p.medium.push(item(area, format!("Strong {} indications", area.key())));
        }
    }

    for area in ALL_SECTIONS {
        if !p.mentions(area) {
            p.low.push(item(area, "No pressing indications"));
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportConfig, analyze_all};
    use crate::synthesis::synthesize_analysis;
    use kundali_base::{ALL_GRAHAS, Chart, Graha, PlanetaryPosition};

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
    fn weak_lagna_is_critical() {
        let mut s = synthesis();
        s.personality.lagna_strength = 2;
        let p = rank_analysis_priorities(&s);
        assert!(p.critical.iter().any(|i| i.area == SectionId::Personality));
    }

    #[test]
    fn debilitated_tenth_lord_is_high() {
        let mut s = synthesis();
        s.career.tenth_lord = Graha::Chandra;
        s.career.tenth_lord_dignity = SignDignity::Debilitated;
        let p = rank_analysis_priorities(&s);
        assert!(
            p.high
                .iter()
                .any(|i| i.area == SectionId::Career && i.reason == "10th lord Moon is debilitated")
        );
    }

    #[test]
    fn venus_dasha_for_libra_rules_eighth() {
        // Venus rules the 1st and 8th for a Libra ascendant.
        let p = rank_analysis_priorities(&synthesis());
        assert!(p.high.iter().any(|i| i.area == SectionId::Predictions));
    }

    #[test]
    fn every_area_lands_somewhere() {
        let p = rank_analysis_priorities(&synthesis());
        for area in ALL_SECTIONS {
            let listed = [&p.critical, &p.high, &p.medium, &p.low]
                .iter()
                .any(|b| b.iter().any(|i| i.area == area));
            assert!(listed, "{area:?} not ranked");
        }
    }

    #[test]
    fn deterministic() {
        let s = synthesis();
        assert_eq!(rank_analysis_priorities(&s), rank_analysis_priorities(&s));
    }
}
