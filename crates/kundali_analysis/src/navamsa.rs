//! Navamsa (D9) section: marriage and inner strength.

use serde::Serialize;

use kundali_base::{ALL_GRAHAS, Chart, DivisionalChart, Graha, Rashi, SignDignity, dignity_of};

use crate::context::AnalysisContext;
use crate::error::AnalysisError;
use crate::strength::{Rating, placement_strength};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavamsaPlacement {
    pub graha: Graha,
    pub rashi: Rashi,
    pub house: u8,
    pub dignity: SignDignity,
    /// Same sign in D1 and D9.
    pub vargottama: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavamsaAnalysis {
    pub chart: DivisionalChart,
    pub ascendant: Rashi,
    pub placements: Vec<NavamsaPlacement>,
    pub vargottama: Vec<Graha>,
    pub seventh_lord: Graha,
    pub seventh_lord_dignity: SignDignity,
    pub venus_dignity: SignDignity,
    pub marriage_indication: Rating,
    pub summary: String,
}

/// Marriage score on 1..10 from the D9 seventh lord and Venus.
fn marriage_score(d9: &Chart, seventh_lord: Graha, venus_vargottama: bool) -> f64 {
    let mut score =
        (placement_strength(d9, seventh_lord) + placement_strength(d9, Graha::Shukra)) / 2.0;
    if venus_vargottama {
        score += 1.0;
    }
    score.min(10.0)
}

pub(crate) fn analyze_navamsa_with_ctx(
    ctx: &mut AnalysisContext<'_>,
) -> Result<NavamsaAnalysis, AnalysisError> {
    let natal = ctx.chart();
    let d9 = ctx.navamsa()?.clone();
    let varga = d9.chart();

    let placements: Vec<NavamsaPlacement> = ALL_GRAHAS
        .iter()
        .map(|&g| {
            let rashi = varga.rashi(g);
            NavamsaPlacement {
                graha: g,
                rashi,
                house: varga.house(g),
                dignity: dignity_of(g, rashi),
                vargottama: rashi == natal.rashi(g),
            }
        })
        .collect();
    let vargottama: Vec<Graha> = placements
        .iter()
        .filter(|p| p.vargottama)
        .map(|p| p.graha)
        .collect();

    let seventh_lord = varga.house_lord(7);
    let seventh_lord_dignity = dignity_of(seventh_lord, varga.rashi(seventh_lord));
    let venus_dignity = dignity_of(Graha::Shukra, varga.rashi(Graha::Shukra));
    let score = marriage_score(varga, seventh_lord, vargottama.contains(&Graha::Shukra));
    let marriage_indication = Rating::from_score(score);

    let mut summary = format!(
        "Navamsa ascendant is {}. The D9 seventh lord {} is {} and Venus is {}, giving {} marriage prospects.",
        varga.ascendant().rashi.western_name(),
        seventh_lord.english_name(),
        seventh_lord_dignity.name().to_lowercase(),
        venus_dignity.name().to_lowercase(),
        marriage_indication.name()
    );
    if !vargottama.is_empty() {
        summary.push_str(&format!(
            " Vargottama: {}.",
            vargottama
                .iter()
                .map(|g| g.english_name())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    Ok(NavamsaAnalysis {
        ascendant: varga.ascendant().rashi,
        placements,
        vargottama,
        seventh_lord,
        seventh_lord_dignity,
        venus_dignity,
        marriage_indication,
        summary,
        chart: d9,
    })
}

/// Analyze the navamsa projection of `chart`.
pub fn analyze_navamsa(chart: &Chart) -> Result<NavamsaAnalysis, AnalysisError> {
    analyze_navamsa_with_ctx(&mut AnalysisContext::new(chart))
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
    fn first_pada_of_movable_sign_is_vargottama() {
        // Venus at 1 Aries stays in Aries; Sun at 21 Leo falls in Libra.
        let c = chart(0.5, [141.0, 40.0, 95.0, 150.0, 200.0, 1.0, 300.0, 340.0, 160.0]);
        let a = analyze_navamsa(&c).unwrap();
        assert_eq!(a.ascendant, Rashi::Mesha);
        assert!(a.vargottama.contains(&Graha::Shukra));
        let sun = a.placements.iter().find(|p| p.graha == Graha::Surya).unwrap();
        assert_eq!(sun.rashi, Rashi::Tula);
        assert_eq!(sun.dignity, SignDignity::Debilitated);
        assert!(!sun.vargottama);
        assert_eq!(a.chart.division(), 9);
    }

    #[test]
    fn seventh_lord_read_from_d9() {
        // D9 lagna Aries, so the D9 seventh house is Libra ruled by Venus.
        let c = chart(0.5, [141.0, 40.0, 95.0, 150.0, 200.0, 1.0, 300.0, 340.0, 160.0]);
        let a = analyze_navamsa(&c).unwrap();
        assert_eq!(a.seventh_lord, Graha::Shukra);
        assert_eq!(a.seventh_lord_dignity, a.venus_dignity);
        assert!(a.summary.starts_with("Navamsa ascendant is Aries"));
    }
}
