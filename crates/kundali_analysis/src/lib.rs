//! Section analyzers and report synthesis over a natal chart.
//!
//! This crate provides:
//! - Section analyzers: lagna, houses, aspects, dasha, yogas, navamsa
//! - Synthesis of the sections into six life areas with cross-references
//! - Contradiction resolution and priority ranking
//! - Report validation and quality scoring over the serialized report
//! - Dasha timeline integration
//!
//! [`build_report`] runs the whole pipeline. Each stage is also usable on
//! its own; all of them are pure functions of their inputs.

pub mod aspects;
pub mod context;
pub mod contradictions;
pub mod dasha;
pub mod error;
pub mod houses;
pub mod lagna;
pub mod navamsa;
pub mod priorities;
pub mod qa;
pub mod report;
pub mod strength;
pub mod synthesis;
pub mod timeline;
pub mod yogas;

pub use aspects::{AspectsAnalysis, MutualAspect, analyze_aspects};
pub use context::AnalysisContext;
pub use contradictions::{
    Contradiction, ContradictionPattern, ContradictionReport, Resolution, resolve_contradictions,
};
pub use dasha::{DashaAnalysis, DashaEvent, DashaEventKind, UpcomingDasha, analyze_dasha};
pub use error::AnalysisError;
pub use houses::{HouseAnalysis, HousesAnalysis, Stellium, analyze_houses};
pub use lagna::{LagnaAnalysis, analyze_lagna};
pub use navamsa::{NavamsaAnalysis, analyze_navamsa};
pub use priorities::{Priorities, PriorityItem, rank_analysis_priorities};
pub use qa::{
    AnalysisConfig, Grade, QualityReport, ReportValidation, validate_report,
    validate_report_quality, validate_report_quality_with, validate_report_with,
};
pub use report::{Report, ReportConfig, analyze_all, build_report};
pub use strength::{Rating, placement_strength};
pub use synthesis::{ALL_SECTIONS, SectionAnalyses, SectionId, Synthesis, synthesize_analysis};
pub use timeline::{Timeline, TimelineEntry, integrate_timeline};
pub use yogas::{YogaAnalysis, analyze_yogas};
