//! Yoga section: every detector family, ranked and summarized.

use serde::Serialize;

use kundali_base::{AllYogas, Chart, Graha, RajaYogaConfig, Yoga, YogaFamily, combust_grahas};

use crate::context::AnalysisContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaAnalysis {
    pub detections: AllYogas,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongest: Option<Yoga>,
    /// Dhana yogas, which feed the financial outlook.
    pub wealth_yogas: Vec<Yoga>,
    /// Grahas losing yoga strength to combustion, under the configured orb.
    pub combust_grahas: Vec<Graha>,
    pub highlights: Vec<String>,
    pub summary: String,
}

impl YogaAnalysis {
    /// Whether any yoga of `family` was found.
    pub fn has(&self, family: YogaFamily) -> bool {
        self.detections
            .families()
            .iter()
            .any(|d| d.family == family && d.present)
    }
}

pub(crate) fn analyze_yogas_with_ctx(
    ctx: &mut AnalysisContext<'_>,
    config: &RajaYogaConfig,
) -> YogaAnalysis {
    let detections = ctx.yogas(config).clone();
    let strongest = detections
        .iter()
        .max_by(|a, b| a.strength.total_cmp(&b.strength))
        .cloned();
    let wealth_yogas = detections.dhana.yogas.clone();
    let combust = combust_grahas(ctx.chart(), config.combustion_orb);
    let highlights: Vec<String> = detections
        .families()
        .iter()
        .filter(|d| d.present)
        .map(|d| d.description.clone())
        .collect();

    let mut summary = match &strongest {
        Some(y) => format!(
            "{} yoga(s) found across {} families. Strongest is {} ({:.1}/10).",
            detections.total_count,
            highlights.len(),
            y.kind.name(),
            y.strength.min(10.0)
        ),
        None => "No major yogas are formed in this chart.".to_string(),
    };
    if !combust.is_empty() {
        let names: Vec<&str> = combust.iter().map(|g| g.english_name()).collect();
        summary.push_str(&format!(" Combust: {}.", names.join(", ")));
    }
    log::debug!("yogas: {} total", detections.total_count);

    YogaAnalysis {
        total_count: detections.total_count,
        detections,
        strongest,
        wealth_yogas,
        combust_grahas: combust,
        highlights,
        summary,
    }
}

/// Detect and summarize all yoga families in `chart`.
pub fn analyze_yogas(chart: &Chart, config: &RajaYogaConfig) -> YogaAnalysis {
    analyze_yogas_with_ctx(&mut AnalysisContext::new(chart), config)
}
