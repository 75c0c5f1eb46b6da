//! Dasha timeline: periods in age order, key periods and timing advice.

use serde::Serialize;

use kundali_base::{DashaLevel, DashaPeriod, Graha};

use crate::dasha::DashaAnalysis;

/// Effect tags that make a period significant.
pub const SIGNIFICANT_EFFECTS: [&str; 3] = ["major", "transformation", "opportunity"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Display label, e.g. "Venus Mahadasha" or "Venus-Sun Antardasha".
    pub period: String,
    pub planet: Graha,
    pub level: DashaLevel,
    pub start_age: f64,
    pub end_age: f64,
    pub effects: Vec<&'static str>,
}

impl TimelineEntry {
    pub fn is_significant(&self) -> bool {
        self.effects.iter().any(|e| SIGNIFICANT_EFFECTS.contains(e))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingRecommendation {
    pub period: String,
    pub recommendation: String,
    /// Start age of the period in years.
    pub timing: f64,
    pub focus: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub key_periods: Vec<TimelineEntry>,
    pub recommendations: Vec<TimingRecommendation>,
    pub summary: String,
}

fn recommendation(entry: &TimelineEntry) -> String {
    if entry.effects.contains(&"opportunity") {
        format!("Favorable period for new initiatives during {}", entry.period)
    } else if entry.effects.contains(&"transformation") {
        format!("Period of significant change during {}", entry.period)
    } else {
        format!("Important period requiring attention during {}", entry.period)
    }
}

/// Life area a period's effects point at.
pub fn focus(effects: &[&str]) -> &'static str {
    if effects.contains(&"career") {
        "Professional growth"
    } else if effects.contains(&"relationship") {
        "Personal relationships"
    } else if effects.contains(&"health") {
        "Health and wellness"
    } else if effects.contains(&"spiritual") {
        "Spiritual development"
    } else {
        "General life areas"
    }
}

fn entry(analysis: &DashaAnalysis, p: &DashaPeriod, parent: Graha) -> TimelineEntry {
    let period = match p.level {
        DashaLevel::Mahadasha => format!("{} Mahadasha", p.lord.english_name()),
        _ => format!(
            "{}-{} Antardasha",
            parent.english_name(),
            p.lord.english_name()
        ),
    };
    TimelineEntry {
        period,
        planet: p.lord,
        level: p.level,
        start_age: p.start_age,
        end_age: p.end_age,
        effects: analysis
            .lord_effects
            .get(&p.lord)
            .cloned()
            .unwrap_or_default(),
    }
}

/// Merge the Mahadashas and the running Mahadasha's Antardashas into one
/// age-ordered timeline.
pub fn integrate_timeline(analysis: &DashaAnalysis) -> Timeline {
    let md_lord = analysis.mahadasha().map(|p| p.lord);
    let mut entries: Vec<TimelineEntry> = analysis
        .mahadashas
        .iter()
        .map(|p| entry(analysis, p, p.lord))
        .collect();
    if let Some(parent) = md_lord {
        entries.extend(analysis.antardashas.iter().map(|p| entry(analysis, p, parent)));
    }
    entries.sort_by(|a, b| {
        a.start_age
            .total_cmp(&b.start_age)
            .then(a.level.cmp(&b.level))
    });

    let key_periods: Vec<TimelineEntry> =
        entries.iter().filter(|e| e.is_significant()).cloned().collect();
    let recommendations = key_periods
        .iter()
        .map(|e| TimingRecommendation {
            period: e.period.clone(),
            recommendation: recommendation(e),
            timing: e.start_age,
            focus: focus(&e.effects),
        })
        .collect();
    let summary = format!(
        "{} significant periods identified in the timeline.",
        key_periods.len()
    );

    Timeline {
        entries,
        key_periods,
        recommendations,
        summary,
    }
}
