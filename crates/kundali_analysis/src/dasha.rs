//! Dasha section: the running period, its effects and what comes next.

use std::collections::BTreeMap;

use serde::Serialize;

use kundali_base::dasha::{mahadasha_sequence, snapshot_in, wrap_age_into_cycle};
use kundali_base::drishti::ordinal;
use kundali_base::{
    ALL_GRAHAS, BeneficNature, Chart, ChartError, DashaConfig, DashaPeriod, DashaSnapshot, Graha,
    calculate_antardashas, dasha_snapshot, natural_benefic_malefic,
};

use crate::error::AnalysisError;
use crate::houses::house_significations;
use crate::strength::{houses_ruled_by, placement_strength};

/// How many following Mahadashas are described.
pub const UPCOMING_COUNT: usize = 3;

/// Natural significations of each graha, in `ALL_GRAHAS` order.
const GRAHA_SIGNIFICATIONS: [&[&str]; 9] = [
    &["authority", "ego", "father", "government"],
    &["mind", "emotions", "mother", "public"],
    &["energy", "courage", "siblings", "property"],
    &["communication", "business", "education"],
    &["wisdom", "children", "teachers", "wealth"],
    &["relationships", "arts", "luxury", "spouse"],
    &["discipline", "service", "delays", "old age"],
    &["foreign", "sudden events", "technology", "obsession"],
    &["spirituality", "detachment", "research", "moksha"],
];

pub fn graha_significations(graha: Graha) -> &'static [&'static str] {
    GRAHA_SIGNIFICATIONS[graha.index() as usize]
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Event category activated by a period's lords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashaEventKind {
    Marriage,
    Career,
    Finance,
    Education,
    Health,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaEvent {
    #[serde(rename = "type")]
    pub kind: DashaEventKind,
    pub probability: &'static str,
    pub timing: &'static str,
    pub description: String,
}

/// Houses and themes switched on by the running Mahadasha/Antardasha pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodEffects {
    pub mahadasha_lord: Graha,
    pub antardasha_lord: Graha,
    pub activated_houses: Vec<u8>,
    pub key_themes: Vec<&'static str>,
    pub events: Vec<DashaEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDasha {
    pub planet: Graha,
    pub start_age: f64,
    pub end_age: f64,
    pub period: f64,
    pub general_tenor: String,
    pub key_themes: &'static [&'static str],
    pub life_focus: String,
    pub challenges: &'static [&'static str],
    pub opportunities: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaAnalysis {
    pub age_years: f64,
    /// The age lies past the end of the first Vimshottari cycle and was
    /// folded into the next one; `current.age_years` holds the folded age.
    pub beyond_standard_cycle: bool,
    pub mahadashas: Vec<DashaPeriod>,
    pub current: DashaSnapshot,
    /// Antardashas of the running Mahadasha.
    pub antardashas: Vec<DashaPeriod>,
    pub period_effects: PeriodEffects,
    pub upcoming: Vec<UpcomingDasha>,
    /// Timeline tags for every graha as a period lord.
    pub lord_effects: BTreeMap<Graha, Vec<&'static str>>,
    pub summary: String,
    pub recommendations: Vec<String>,
}

impl DashaAnalysis {
    pub fn mahadasha(&self) -> Option<&DashaPeriod> {
        self.current.mahadasha()
    }

    pub fn antardasha(&self) -> Option<&DashaPeriod> {
        self.current.antardasha()
    }
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

fn activates(houses: &[u8], wanted: &[u8]) -> bool {
    houses.iter().any(|h| wanted.contains(h))
}

/// Timeline tags for `lord` as a period ruler in `chart`.
///
/// Significance tags: `major` when it rules the 1st or 10th,
/// `transformation` for the nodes, Saturn or the 8th lord, `opportunity`
/// for a strong lord or the lord of the 9th or 11th. Topic tags follow
/// the ruled houses.
pub fn period_lord_effects(chart: &Chart, lord: Graha) -> Vec<&'static str> {
    let ruled = houses_ruled_by(chart, lord);
    let mut out = Vec::new();
    if activates(&ruled, &[1, 10]) {
        out.push("major");
    }
    if lord.is_node() || lord == Graha::Shani || ruled.contains(&8) {
        out.push("transformation");
    }
    if !lord.is_node() && (placement_strength(chart, lord) >= 7.0 || activates(&ruled, &[9, 11]))
    {
        out.push("opportunity");
    }
    if ruled.contains(&10) {
        out.push("career");
    }
    if ruled.contains(&7) {
        out.push("relationship");
    }
    if activates(&ruled, &[6, 8]) {
        out.push("health");
    }
    if activates(&ruled, &[2, 11]) {
        out.push("wealth");
    }
    if lord == Graha::Ketu || activates(&ruled, &[9, 12]) {
        out.push("spiritual");
    }
    out
}

fn predict_events(md: Graha, ad: Graha, houses: &[u8]) -> Vec<DashaEvent> {
    let pair = format!("{}-{}", md.english_name(), ad.english_name());
    let mut events = Vec::new();
    if houses.contains(&7) {
        events.push(DashaEvent {
            kind: DashaEventKind::Marriage,
            probability: "High",
            timing: "Early to mid period",
            description: format!(
                "Marriage or significant relationship development during {pair} period"
            ),
        });
    }
    if houses.contains(&10) {
        events.push(DashaEvent {
            kind: DashaEventKind::Career,
            probability: "High",
            timing: "Throughout period",
            description: format!(
                "Career advancement, job change, or professional recognition during {pair} period"
            ),
        });
    }
    if activates(houses, &[2, 11]) {
        events.push(DashaEvent {
            kind: DashaEventKind::Finance,
            probability: "Moderate to High",
            timing: "Mid to late period",
            description: format!(
                "Financial gains, property acquisition, or wealth accumulation during {pair} period"
            ),
        });
    }
    if activates(houses, &[5, 9]) {
        events.push(DashaEvent {
            kind: DashaEventKind::Education,
            probability: "Moderate",
            timing: "Early period",
            description: format!(
                "Educational pursuits, learning, or intellectual growth during {pair} period"
            ),
        });
    }
    if activates(houses, &[6, 8]) {
        events.push(DashaEvent {
            kind: DashaEventKind::Health,
            probability: "Moderate",
            timing: "Throughout period",
            description: format!("Health challenges or medical procedures during {pair} period"),
        });
    }
    events
}

fn period_effects(chart: &Chart, md: Graha, ad: Graha) -> PeriodEffects {
    let mut houses = houses_ruled_by(chart, md);
    houses.extend(houses_ruled_by(chart, ad));
    houses.sort_unstable();
    houses.dedup();

    let mut key_themes: Vec<&'static str> = Vec::new();
    for h in &houses {
        key_themes.push(house_significations(*h)[0]);
    }
    for t in graha_significations(md).iter().chain(graha_significations(ad)) {
        if !key_themes.contains(t) {
            key_themes.push(t);
        }
    }
    PeriodEffects {
        mahadasha_lord: md,
        antardasha_lord: ad,
        events: predict_events(md, ad, &houses),
        activated_houses: houses,
        key_themes,
    }
}

fn upcoming(chart: &Chart, p: &DashaPeriod) -> UpcomingDasha {
    let themes = graha_significations(p.lord);
    let ruled = houses_ruled_by(chart, p.lord);
    let life_focus = if ruled.is_empty() {
        format!(
            "affairs of the {} house it occupies",
            ordinal(chart.house(p.lord))
        )
    } else {
        ruled
            .iter()
            .map(|h| house_significations(*h).join(", "))
            .collect::<Vec<_>>()
            .join("; ")
    };
    let (challenges, opportunities): (&[&str], &[&str]) = match natural_benefic_malefic(p.lord) {
        BeneficNature::Malefic => (
            &["Delays", "Obstacles", "Health issues"],
            &["Learning opportunities", "Character building"],
        ),
        BeneficNature::Benefic => (&["Minimal challenges"], &["Growth", "Success", "Fulfillment"]),
    };
    UpcomingDasha {
        planet: p.lord,
        start_age: p.start_age,
        end_age: p.end_age,
        period: p.period,
        general_tenor: format!("{} period brings {}", p.lord.english_name(), themes.join(", ")),
        key_themes: themes,
        life_focus,
        challenges,
        opportunities,
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Analyze the dasha running at `age_years` in `chart`.
///
/// An age past the end of the cycle (120 years, or earlier when the
/// cycle is anchored on the birth balance) is folded into the next cycle
/// and flagged with `beyond_standard_cycle`. A negative or non-finite age
/// is still a chart error.
pub fn analyze_dasha(
    chart: &Chart,
    age_years: f64,
    config: &DashaConfig,
) -> Result<DashaAnalysis, AnalysisError> {
    let mahadashas = mahadasha_sequence(chart, config)?;
    let (current, beyond_standard_cycle) = match dasha_snapshot(chart, age_years, config) {
        Ok(snapshot) => (snapshot, false),
        Err(ChartError::AgeOutOfRange { .. }) => {
            let cycle_age = wrap_age_into_cycle(&mahadashas, age_years);
            let snapshot = snapshot_in(&mahadashas, cycle_age, config.effective_max_level())
                .ok_or(ChartError::AgeOutOfRange { age_years })?;
            log::warn!(
                "age {age_years:.2} is beyond the standard dasha cycle, reading it as {cycle_age:.2}"
            );
            (snapshot, true)
        }
        Err(e) => return Err(e.into()),
    };
    let cycle_age = current.age_years;
    let Some(md) = current.mahadasha().copied() else {
        return Err(AnalysisError::MalformedReport(
            "dasha snapshot has no mahadasha".to_string(),
        ));
    };
    let antardashas = calculate_antardashas(&md);
    let ad_lord = current
        .antardasha()
        .map(|p| p.lord)
        .or_else(|| antardashas.iter().find(|p| p.contains(cycle_age)).map(|p| p.lord))
        .unwrap_or(md.lord);

    let upcoming: Vec<UpcomingDasha> = mahadashas
        .iter()
        .filter(|p| p.start_age >= md.end_age)
        .take(UPCOMING_COUNT)
        .map(|p| upcoming(chart, p))
        .collect();
    let lord_effects = ALL_GRAHAS
        .iter()
        .map(|g| (*g, period_lord_effects(chart, *g)))
        .collect();
    let effects = period_effects(chart, md.lord, ad_lord);

    let mut summary = String::new();
    if beyond_standard_cycle {
        summary.push_str(&format!(
            "Age {age_years:.1} is beyond the standard cycle; read as age {cycle_age:.1} of the next cycle. "
        ));
    }
    summary.push_str(&format!(
        "Currently running {} Mahadasha ({:.1} to {:.1} years) with {} Antardasha. Focus falls on {}.",
        md.lord.english_name(),
        md.start_age,
        md.end_age,
        ad_lord.english_name(),
        effects
            .key_themes
            .iter()
            .take(3)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    ));
    log::debug!(
        "dasha at {age_years:.2}: {} / {}",
        md.lord.english_name(),
        ad_lord.english_name()
    );

    Ok(DashaAnalysis {
        age_years,
        beyond_standard_cycle,
        mahadashas,
        current,
        antardashas,
        period_effects: effects,
        upcoming,
        lord_effects,
        summary,
        recommendations: vec![
            format!(
                "Focus on areas ruled by {}, the current dasha lord",
                md.lord.english_name()
            ),
            "Practice patience during challenging periods".to_string(),
            "Utilize beneficial periods for important decisions".to_string(),
        ],
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

    /// Moon at 30 degrees: Krittika, Ketu block, Venus from age 7 to 27.
    fn sample() -> Chart {
        chart(185.0, [200.0, 30.0, 95.0, 150.0, 100.0, 250.0, 320.0, 10.0, 190.0])
    }

    #[test]
    fn venus_mahadasha_at_twenty() {
        let a = analyze_dasha(&sample(), 20.0, &DashaConfig::default()).unwrap();
        let md = a.mahadasha().unwrap();
        assert_eq!(md.lord, Graha::Shukra);
        assert!((md.start_age - 7.0).abs() < 1e-9);
        assert_eq!(a.antardashas.len(), 9);
        assert_eq!(a.antardashas[0].lord, Graha::Shukra);
        assert!(a.antardasha().is_some());
        assert_eq!(a.period_effects.mahadasha_lord, Graha::Shukra);
        assert!(a.summary.starts_with("Currently running Venus Mahadasha"));
    }

    #[test]
    fn upcoming_follow_current() {
        let a = analyze_dasha(&sample(), 20.0, &DashaConfig::default()).unwrap();
        let planets: Vec<Graha> = a.upcoming.iter().map(|u| u.planet).collect();
        assert_eq!(planets, vec![Graha::Surya, Graha::Chandra, Graha::Mangal]);
        assert!((a.upcoming[0].start_age - 27.0).abs() < 1e-9);
    }

    #[test]
    fn last_mahadasha_has_nothing_upcoming() {
        let a = analyze_dasha(&sample(), 119.0, &DashaConfig::default()).unwrap();
        assert!(a.upcoming.is_empty());
    }

    #[test]
    fn venus_rules_first_and_eighth_for_libra() {
        // Libra rising: Venus rules houses 1 and 8, Mars 2 and 7.
        let effects = period_lord_effects(&sample(), Graha::Shukra);
        assert!(effects.contains(&"major"));
        assert!(effects.contains(&"transformation"));
        assert!(effects.contains(&"health"));
        let mars = period_lord_effects(&sample(), Graha::Mangal);
        assert!(mars.contains(&"relationship"));
        assert!(mars.contains(&"wealth"));
    }

    #[test]
    fn events_follow_activated_houses() {
        let e = period_effects(&sample(), Graha::Shukra, Graha::Mangal);
        assert_eq!(e.activated_houses, vec![1, 2, 7, 8]);
        let kinds: Vec<DashaEventKind> = e.events.iter().map(|ev| ev.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DashaEventKind::Marriage,
                DashaEventKind::Finance,
                DashaEventKind::Health
            ]
        );
    }

    #[test]
    fn age_past_cycle_wraps_into_next() {
        // 130 years reads as 10 years into the second cycle: Venus again.
        let a = analyze_dasha(&sample(), 130.0, &DashaConfig::default()).unwrap();
        assert!(a.beyond_standard_cycle);
        assert!((a.current.age_years - 10.0).abs() < 1e-9);
        assert_eq!(a.mahadasha().map(|p| p.lord), Some(Graha::Shukra));
        assert!(a.summary.starts_with("Age 130.0 is beyond the standard cycle"));
    }

    #[test]
    fn age_past_balanced_cycle_degrades() {
        // Balanced cycle runs -1.75 to 118.25; 119 folds to -1.0 (Ketu).
        let cfg = DashaConfig {
            use_birth_balance: true,
            ..DashaConfig::default()
        };
        let a = analyze_dasha(&sample(), 119.0, &cfg).unwrap();
        assert!(a.beyond_standard_cycle);
        assert_eq!(a.mahadasha().map(|p| p.lord), Some(Graha::Ketu));
        assert_eq!(a.antardashas[0].lord, Graha::Ketu);
        assert!((a.current.age_years + 1.0).abs() < 1e-9);
    }

    #[test]
    fn age_inside_cycle_is_not_flagged() {
        let a = analyze_dasha(&sample(), 20.0, &DashaConfig::default()).unwrap();
        assert!(!a.beyond_standard_cycle);
        assert!((a.current.age_years - 20.0).abs() < 1e-12);
    }

    #[test]
    fn negative_age_is_chart_error() {
        let err = analyze_dasha(&sample(), -1.0, &DashaConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Chart(ChartError::InvalidInput(_))));
    }
}
