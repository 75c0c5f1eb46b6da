//! Report quality assurance over the serialized report.
//!
//! Both checks read a `serde_json::Value` so they apply equally to a
//! freshly synthesized report and to one loaded back from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sections every report must carry unless configured otherwise.
pub const DEFAULT_REQUIRED_SECTIONS: [&str; 6] = [
    "personality",
    "health",
    "career",
    "financial",
    "relationships",
    "predictions",
];

/// QA settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub required_sections: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            required_sections: DEFAULT_REQUIRED_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Structural validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionPresence {
    Present,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportValidation {
    pub passed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub completeness: BTreeMap<String, SectionPresence>,
    pub missing_sections: Vec<String>,
}

/// Missing, null, empty string and `false` all count as absent.
fn section_present(report: &Value, section: &str) -> bool {
    !matches!(
        report.get(section),
        None | Some(Value::Null) | Some(Value::Bool(false))
    ) && report.get(section) != Some(&Value::String(String::new()))
}

/// Dotted paths of null or empty-string leaves. Recurses into objects,
/// not into arrays.
pub fn find_empty_fields(obj: &Map<String, Value>, prefix: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Null => out.push(path),
            Value::String(s) if s.is_empty() => out.push(path),
            Value::Object(inner) => out.extend(find_empty_fields(inner, &path)),
            _ => {}
        }
    }
    out
}

fn lagna_sign(section: Option<&Value>) -> Option<&str> {
    let section = section?;
    section
        .get("lagnaSign")
        .or_else(|| section.get("lagna").and_then(|l| l.get("sign")))
        .and_then(Value::as_str)
}

/// Validate against the default required sections.
pub fn validate_report(report: &Value) -> ReportValidation {
    validate_report_with(report, &AnalysisConfig::default().required_sections)
}

/// Check that every required section is present and scan for empty
/// fields. Missing sections are errors; empty fields and inconsistent
/// lagna signs are warnings.
pub fn validate_report_with(report: &Value, required: &[String]) -> ReportValidation {
    let mut v = ReportValidation {
        passed: true,
        errors: Vec::new(),
        warnings: Vec::new(),
        completeness: BTreeMap::new(),
        missing_sections: Vec::new(),
    };

    for section in required {
        if section_present(report, section) {
            v.completeness
                .insert(section.clone(), SectionPresence::Present);
        } else {
            v.errors.push(format!("Missing required section: {section}"));
            v.completeness
                .insert(section.clone(), SectionPresence::Missing);
            v.missing_sections.push(section.clone());
            v.passed = false;
        }
    }

    if let (Some(a), Some(b)) = (
        lagna_sign(report.get("personality")),
        lagna_sign(report.get("health")),
    ) {
        if a != b {
            v.warnings.push(
                "Lagna sign inconsistency between personality and health sections".to_string(),
            );
        }
    }

    if let Value::Object(sections) = report {
        for (section, data) in sections {
            if let Value::Object(fields) = data {
                let empty = find_empty_fields(fields, "");
                if !empty.is_empty() {
                    v.warnings
                        .push(format!("Empty fields in {section}: {}", empty.join(", ")));
                }
            }
        }
    }
    v
}

// ---------------------------------------------------------------------------
// Quality score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessCheck {
    pub score: u32,
    pub missing_sections: Vec<String>,
    pub incomplete_sections: Vec<String>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyCheck {
    pub score: u32,
    pub inconsistencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccuracyCheck {
    pub score: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub score: u32,
    pub grade: Grade,
    pub completeness: CompletenessCheck,
    pub consistency: ConsistencyCheck,
    pub accuracy: AccuracyCheck,
    pub issues: Vec<String>,
    pub recommendations: Vec<&'static str>,
}

fn penalized(per_issue: u32, count: usize) -> u32 {
    100u32.saturating_sub(per_issue.saturating_mul(count as u32))
}

fn check_completeness(report: &Value, required: &[String]) -> CompletenessCheck {
    let missing_sections: Vec<String> = required
        .iter()
        .filter(|s| !section_present(report, s))
        .cloned()
        .collect();
    let incomplete_sections: Vec<String> = match report {
        Value::Object(sections) => sections
            .iter()
            .filter(|(_, data)| matches!(data, Value::Object(m) if m.len() < 2))
            .map(|(k, _)| k.clone())
            .collect(),
        _ => Vec::new(),
    };
    let issues = missing_sections
        .iter()
        .map(|s| format!("Missing section: {s}"))
        .chain(
            incomplete_sections
                .iter()
                .map(|s| format!("Incomplete section: {s}")),
        )
        .collect();
    CompletenessCheck {
        score: penalized(20, missing_sections.len()).saturating_sub(10 * incomplete_sections.len() as u32),
        missing_sections,
        incomplete_sections,
        issues,
    }
}

fn is_rating(section: Option<&Value>, field: &str, rating: &str) -> bool {
    section
        .and_then(|s| s.get(field))
        .and_then(Value::as_str)
        == Some(rating)
}

fn check_consistency(report: &Value) -> ConsistencyCheck {
    let mut inconsistencies = Vec::new();
    let health = report.get("health");
    let notes_empty = health
        .and_then(|h| h.get("notes"))
        .and_then(Value::as_array)
        .is_none_or(|n| n.is_empty());
    if is_rating(health, "vitality", "low")
        && is_rating(report.get("career"), "success", "high")
        && notes_empty
    {
        inconsistencies.push("Health and career success may be inconsistent".to_string());
    }
    let no_phases = report
        .get("predictions")
        .and_then(|p| p.get("timeline"))
        .and_then(|t| t.get("entries"))
        .and_then(Value::as_array)
        .is_some_and(|e| e.is_empty());
    if no_phases {
        inconsistencies.push("Timeline has no phases defined".to_string());
    }
    ConsistencyCheck {
        score: penalized(15, inconsistencies.len()),
        inconsistencies,
    }
}

fn check_accuracy(report: &Value) -> AccuracyCheck {
    let mut issues = Vec::new();
    if let Value::Object(sections) = report {
        for (section, data) in sections {
            if let Some(summary) = data.get("summary").and_then(Value::as_str) {
                if summary.chars().count() < 10 {
                    issues.push(format!("{section} summary too brief"));
                }
            }
        }
    }
    AccuracyCheck {
        score: penalized(10, issues.len()),
        issues,
    }
}

fn recommendation(issue: &str) -> &'static str {
    if issue.contains("Missing section") {
        "Add the missing analysis section"
    } else if issue.contains("Incomplete section") {
        "Complete the analysis for this section"
    } else if issue.contains("inconsistent") {
        "Review and resolve logical inconsistencies"
    } else {
        "Review and improve this aspect"
    }
}

pub fn validate_report_quality(report: &Value) -> QualityReport {
    validate_report_quality_with(report, &AnalysisConfig::default().required_sections)
}

/// Score completeness, consistency and accuracy; the overall score is
/// their rounded mean.
pub fn validate_report_quality_with(report: &Value, required: &[String]) -> QualityReport {
    let completeness = check_completeness(report, required);
    let consistency = check_consistency(report);
    let accuracy = check_accuracy(report);
    let sum = completeness.score + consistency.score + accuracy.score;
    let score = (f64::from(sum) / 3.0).round() as u32;

    let issues: Vec<String> = completeness
        .issues
        .iter()
        .chain(&consistency.inconsistencies)
        .chain(&accuracy.issues)
        .cloned()
        .collect();
    let recommendations = issues.iter().map(|i| recommendation(i)).collect();
    QualityReport {
        score,
        grade: Grade::from_score(score),
        completeness,
        consistency,
        accuracy,
        issues,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full() -> Value {
        json!({
            "personality": {"lagnaSign": "Libra", "summary": "A balanced and diplomatic nature."},
            "health": {"lagnaSign": "Libra", "vitality": "moderate", "notes": []},
            "career": {"success": "high", "summary": "Career prospects are high."},
            "financial": {"prospects": "moderate", "summary": "Steady finances overall."},
            "relationships": {"harmony": "moderate", "summary": "Harmonious partnerships."},
            "predictions": {"timeline": {"entries": [1]}, "summary": "Venus Mahadasha is running."}
        })
    }

    #[test]
    fn complete_report_passes() {
        let v = validate_report(&full());
        assert!(v.passed);
        assert!(v.errors.is_empty());
        assert!(v.warnings.is_empty());
        assert_eq!(v.completeness.len(), 6);
    }

    #[test]
    fn missing_section_fails() {
        let mut r = full();
        r.as_object_mut().unwrap().remove("health");
        r["career"] = Value::Bool(false);
        let v = validate_report(&r);
        assert!(!v.passed);
        assert_eq!(v.missing_sections, vec!["health", "career"]);
        assert_eq!(v.errors[0], "Missing required section: health");
        assert_eq!(v.completeness["health"], SectionPresence::Missing);
    }

    #[test]
    fn empty_leaves_are_warnings() {
        let mut r = full();
        r["career"]["tenthLord"] = Value::Null;
        r["career"]["detail"] = json!({"note": "", "list": [null]});
        let v = validate_report(&r);
        assert!(v.passed);
        assert_eq!(
            v.warnings,
            vec!["Empty fields in career: detail.note, tenthLord"]
        );
    }

    #[test]
    fn lagna_mismatch_warns() {
        let mut r = full();
        r["health"]["lagnaSign"] = json!("Aries");
        let v = validate_report(&r);
        assert!(v.passed);
        assert!(v.warnings[0].starts_with("Lagna sign inconsistency"));
    }

    #[test]
    fn custom_required_sections() {
        let required = vec!["personality".to_string(), "remedies".to_string()];
        let v = validate_report_with(&full(), &required);
        assert!(!v.passed);
        assert_eq!(v.missing_sections, vec!["remedies"]);
    }

    #[test]
    fn perfect_quality_is_a() {
        let q = validate_report_quality(&full());
        assert_eq!(q.score, 100);
        assert_eq!(q.grade, Grade::A);
        assert!(q.issues.is_empty());
    }

    #[test]
    fn quality_penalties() {
        let mut r = full();
        r["health"]["vitality"] = json!("low");
        r["predictions"]["timeline"]["entries"] = json!([]);
        r["financial"]["summary"] = json!("ok");
        r.as_object_mut().unwrap().remove("relationships");
        let q = validate_report_quality(&r);
        assert_eq!(q.completeness.score, 80);
        assert_eq!(q.consistency.score, 70);
        assert_eq!(q.accuracy.score, 90);
        // (80 + 70 + 90) / 3
        assert_eq!(q.score, 80);
        assert_eq!(q.grade, Grade::B);
        assert_eq!(q.issues.len(), 4);
        assert_eq!(q.recommendations[0], "Add the missing analysis section");
        assert_eq!(
            q.recommendations[1],
            "Review and resolve logical inconsistencies"
        );
    }

    #[test]
    fn resolved_notes_clear_inconsistency() {
        let mut r = full();
        r["health"]["vitality"] = json!("low");
        r["health"]["notes"] = json!(["Pace ambitions"]);
        let q = validate_report_quality(&r);
        assert!(q.consistency.inconsistencies.is_empty());
    }

    #[test]
    fn incomplete_section_penalized() {
        let mut r = full();
        r["extra"] = json!({"only": 1});
        let q = validate_report_quality(&r);
        assert_eq!(q.completeness.incomplete_sections, vec!["extra"]);
        assert_eq!(q.completeness.score, 90);
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
    }
}
