//! End-to-end report pipeline.

use serde::{Deserialize, Serialize};

use kundali_base::{Chart, DashaConfig, RajaYogaConfig};

use crate::aspects::analyze_aspects_with_ctx;
use crate::context::AnalysisContext;
use crate::contradictions::{Contradiction, Resolution, resolve_contradictions};
use crate::dasha::analyze_dasha;
use crate::error::AnalysisError;
use crate::houses::analyze_houses_with_ctx;
use crate::lagna::analyze_lagna;
use crate::navamsa::analyze_navamsa_with_ctx;
use crate::priorities::{Priorities, rank_analysis_priorities};
use crate::qa::{
    AnalysisConfig, QualityReport, ReportValidation, validate_report_quality_with,
    validate_report_with,
};
use crate::synthesis::{SectionAnalyses, Synthesis, synthesize_analysis};
use crate::yogas::analyze_yogas_with_ctx;

/// Settings for every stage of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub yoga: RajaYogaConfig,
    pub dasha: DashaConfig,
    pub analysis: AnalysisConfig,
}

/// Synthesized, resolved and validated report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(flatten)]
    pub synthesis: Synthesis,
    pub contradictions: Vec<Contradiction>,
    pub resolutions: Vec<Resolution>,
    pub priorities: Priorities,
    pub validation: ReportValidation,
    pub quality: QualityReport,
}

/// Run every section analyzer over `chart`, sharing intermediates.
pub fn analyze_all(
    chart: &Chart,
    age_years: f64,
    config: &ReportConfig,
) -> Result<SectionAnalyses, AnalysisError> {
    let mut ctx = AnalysisContext::new(chart);
    Ok(SectionAnalyses {
        lagna: analyze_lagna(chart)?,
        houses: analyze_houses_with_ctx(&mut ctx)?,
        aspects: analyze_aspects_with_ctx(&mut ctx)?,
        dasha: analyze_dasha(chart, age_years, &config.dasha)?,
        yogas: analyze_yogas_with_ctx(&mut ctx, &config.yoga),
        navamsa: analyze_navamsa_with_ctx(&mut ctx)?,
    })
}

/// Analyze `chart` at `age_years` and assemble the full report.
///
/// Contradictions are resolved before validation. A report that still
/// lacks a required section fails with [`AnalysisError::MissingSection`].
pub fn build_report(
    chart: &Chart,
    age_years: f64,
    config: &ReportConfig,
) -> Result<Report, AnalysisError> {
    let analyses = analyze_all(chart, age_years, config)?;
    let synthesis = synthesize_analysis(&analyses)?;
    let resolved = resolve_contradictions(&synthesis);
    let priorities = rank_analysis_priorities(&resolved.resolved_data);

    let value = serde_json::to_value(&resolved.resolved_data)?;
    let required = &config.analysis.required_sections;
    let validation = validate_report_with(&value, required);
    if let Some(section) = validation.missing_sections.first() {
        return Err(AnalysisError::MissingSection(section.clone()));
    }
    for w in &validation.warnings {
        log::warn!("report: {w}");
    }
    let quality = validate_report_quality_with(&value, required);
    log::info!(
        "report synthesized: quality {} ({}), {} contradiction(s)",
        quality.score,
        quality.grade.letter(),
        resolved.contradictions.len()
    );

    Ok(Report {
        synthesis: resolved.resolved_data,
        contradictions: resolved.contradictions,
        resolutions: resolved.resolutions,
        priorities,
        validation,
        quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::{ALL_GRAHAS, PlanetaryPosition};

    fn chart() -> Chart {
        let lons = [200.0, 30.0, 95.0, 150.0, 100.0, 250.0, 320.0, 10.0, 190.0];
        let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
            .collect();
        Chart::new(185.0, &positions).unwrap()
    }

    #[test]
    fn report_passes_validation() {
        let r = build_report(&chart(), 20.0, &ReportConfig::default()).unwrap();
        assert!(r.validation.passed);
        assert_eq!(r.validation.completeness.len(), 6);
        assert!(r.quality.score > 0);
    }

    #[test]
    fn unknown_required_section_is_error() {
        let mut config = ReportConfig::default();
        config.analysis.required_sections.push("remedies".to_string());
        let err = build_report(&chart(), 20.0, &config).unwrap_err();
        assert_eq!(err, AnalysisError::MissingSection("remedies".to_string()));
    }

    #[test]
    fn report_flattens_sections() {
        let r = build_report(&chart(), 20.0, &ReportConfig::default()).unwrap();
        let v = serde_json::to_value(&r).unwrap();
        assert!(v.get("personality").is_some());
        assert!(v.get("priorities").is_some());
        assert!(v.get("synthesis").is_none());
    }

    #[test]
    fn age_beyond_balanced_cycle_still_reports() {
        // Moon a quarter into Krittika: the balanced cycle ends at 118.25.
        let mut config = ReportConfig::default();
        config.dasha.use_birth_balance = true;
        let r = build_report(&chart(), 119.0, &config).unwrap();
        assert!(r.validation.passed);
        assert!(r.synthesis.predictions.beyond_standard_cycle);
        assert_eq!(r.synthesis.predictions.current_mahadasha, kundali_base::Graha::Ketu);
        assert!(
            r.synthesis
                .predictions
                .notes
                .iter()
                .any(|n| n.starts_with("Beyond standard cycle"))
        );
    }

    #[test]
    fn age_past_120_reads_next_cycle() {
        let r = build_report(&chart(), 125.0, &ReportConfig::default()).unwrap();
        assert!(r.synthesis.predictions.beyond_standard_cycle);
        // 125 folds to 5: still the opening Ketu Mahadasha.
        assert_eq!(r.synthesis.predictions.current_mahadasha, kundali_base::Graha::Ketu);
    }

    #[test]
    fn negative_age_fails() {
        let err = build_report(&chart(), -3.0, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Chart(_)));
    }
}
