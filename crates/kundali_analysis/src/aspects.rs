//! Aspect section: graha drishti between planets and onto houses.

use serde::Serialize;

use kundali_base::{Aspect, AspectKind, BeneficNature, Chart, Graha, HouseAspectAnalysis};

use crate::context::AnalysisContext;
use crate::error::AnalysisError;

/// Two grahas aspecting each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MutualAspect {
    pub first: Graha,
    pub second: Graha,
    /// Aspect cast by `first` on `second`.
    pub first_kind: AspectKind,
    /// Aspect cast by `second` on `first`.
    pub second_kind: AspectKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectsAnalysis {
    pub aspects: Vec<Aspect>,
    pub mutual_aspects: Vec<MutualAspect>,
    pub house_effects: Vec<HouseAspectAnalysis>,
    pub benefic_influences: usize,
    pub malefic_influences: usize,
    pub summary: String,
}

fn mutual_aspects(aspects: &[Aspect]) -> Vec<MutualAspect> {
    let mut out = Vec::new();
    for a in aspects {
        if a.source.index() >= a.target.graha.index() {
            continue;
        }
        if let Some(back) = aspects
            .iter()
            .find(|b| b.source == a.target.graha && b.target.graha == a.source)
        {
            out.push(MutualAspect {
                first: a.source,
                second: a.target.graha,
                first_kind: a.kind,
                second_kind: back.kind,
            });
        }
    }
    out
}

pub(crate) fn analyze_aspects_with_ctx(
    ctx: &mut AnalysisContext<'_>,
) -> Result<AspectsAnalysis, AnalysisError> {
    let aspects = ctx.aspects().to_vec();
    let house_effects = ctx.house_aspects()?.to_vec();
    let mutual = mutual_aspects(&aspects);
    let benefic = house_effects
        .iter()
        .filter(|e| e.nature == BeneficNature::Benefic)
        .count();
    let malefic = house_effects.len() - benefic;
    let summary = format!(
        "{} planetary aspects, {} of them mutual. Houses receive {} benefic and {} malefic influences.",
        aspects.len(),
        mutual.len(),
        benefic,
        malefic
    );
    Ok(AspectsAnalysis {
        aspects,
        mutual_aspects: mutual,
        house_effects,
        benefic_influences: benefic,
        malefic_influences: malefic,
        summary,
    })
}

/// Analyze graha drishti in `chart`.
pub fn analyze_aspects(chart: &Chart) -> Result<AspectsAnalysis, AnalysisError> {
    analyze_aspects_with_ctx(&mut AnalysisContext::new(chart))
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
    fn opposition_is_mutual() {
        // Sun in house 1, Moon in house 7; everyone else kept off those axes.
        let c = chart(0.0, [10.0, 190.0, 40.0, 70.0, 100.0, 130.0, 160.0, 250.0, 280.0]);
        let a = analyze_aspects(&c).unwrap();
        assert!(a.mutual_aspects.iter().any(|m| m.first == Graha::Surya
            && m.second == Graha::Chandra
            && m.first_kind == AspectKind::Seventh
            && m.second_kind == AspectKind::Seventh));
    }

    #[test]
    fn influence_counts_add_up() {
        let c = chart(185.0, [10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
        let a = analyze_aspects(&c).unwrap();
        assert_eq!(a.benefic_influences + a.malefic_influences, a.house_effects.len());
        // Moon, Mercury, Jupiter (3 aspects), Venus.
        assert_eq!(a.benefic_influences, 6);
    }

    #[test]
    fn mutual_pairs_listed_once() {
        let c = chart(185.0, [10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
        let a = analyze_aspects(&c).unwrap();
        for m in &a.mutual_aspects {
            assert!(m.first.index() < m.second.index());
        }
    }
}
