//! Yoga (planetary combination) detection.
//!
//! Every detector is a pure scan over a [`Chart`] and returns a
//! [`YogaDetection`] for its family. Strength uses one convention across
//! families: each participating graha starts at 5, gains 3 when exalted
//! or 2 in its own sign, loses 2 when debilitated, gains 1 when
//! retrograde and loses 2 when combust, clamped to [1, 10]. A yoga's
//! strength is the mean over its grahas times a family multiplier.
//!
//! Families:
//! - Raja (kendra lord with trikona lord): conjunction, mutual aspect, parivartana
//! - Neecha Bhanga (cancelled debilitation)
//! - Gaja Kesari (Jupiter in a kendra from the Moon)
//! - Pancha Mahapurusha (Ruchaka, Bhadra, Hamsa, Malavya, Sasa)
//! - Viparita Raja (dusthana lord exchange: Harsha, Sarala, Vimala)
//! - Dhana (wealth lords of houses 2, 5, 9, 11)

pub mod dhana;
pub mod gaja_kesari;
pub mod mahapurusha;
pub mod neecha_bhanga;
pub mod raja;
pub mod viparita;

pub use dhana::{WEALTH_HOUSES, detect_dhana_yogas, wealth_lords};
pub use gaja_kesari::detect_gaja_kesari;
pub use mahapurusha::detect_pancha_mahapurusha;
pub use neecha_bhanga::detect_neecha_bhanga;
pub use raja::{detect_raja_yogas, kendra_lords, trikona_lords};
pub use viparita::{detect_viparita_raja, dusthana_lords};

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::combustion::is_combust_in;
use crate::graha::Graha;
use crate::graha_relationships::{SignDignity, dignity_of};

/// Houses 1, 4, 7, 10.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Houses 1, 5, 9.
pub const TRIKONA_HOUSES: [u8; 3] = [1, 5, 9];

/// Houses 6, 8, 12.
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

pub const fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// Detector family a yoga belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YogaFamily {
    Raja,
    NeechaBhanga,
    GajaKesari,
    PanchaMahapurusha,
    ViparitaRaja,
    Dhana,
}

impl YogaFamily {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raja => "Raja",
            Self::NeechaBhanga => "Neecha Bhanga",
            Self::GajaKesari => "Gaja Kesari",
            Self::PanchaMahapurusha => "Pancha Mahapurusha",
            Self::ViparitaRaja => "Viparita Raja",
            Self::Dhana => "Dhana",
        }
    }
}

/// Closed set of yoga kinds. Serialized as SCREAMING_SNAKE_CASE codes
/// (`KENDRA_TRIKONA_CONJUNCTION`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YogaKind {
    KendraTrikonaConjunction,
    KendraTrikonaAspect,
    KendraTrikonaParivartana,
    NeechaBhanga,
    GajaKesari,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Sasa,
    Harsha,
    Sarala,
    Vimala,
    WealthLordsConjunction,
    WealthLordsExchange,
    MultipleBeneficsInWealthHouse,
}

impl YogaKind {
    pub const fn family(self) -> YogaFamily {
        match self {
            Self::KendraTrikonaConjunction
            | Self::KendraTrikonaAspect
            | Self::KendraTrikonaParivartana => YogaFamily::Raja,
            Self::NeechaBhanga => YogaFamily::NeechaBhanga,
            Self::GajaKesari => YogaFamily::GajaKesari,
            Self::Ruchaka | Self::Bhadra | Self::Hamsa | Self::Malavya | Self::Sasa => {
                YogaFamily::PanchaMahapurusha
            }
            Self::Harsha | Self::Sarala | Self::Vimala => YogaFamily::ViparitaRaja,
            Self::WealthLordsConjunction
            | Self::WealthLordsExchange
            | Self::MultipleBeneficsInWealthHouse => YogaFamily::Dhana,
        }
    }

    /// Stable code, identical to the serialized form.
    pub const fn code(self) -> &'static str {
        match self {
            Self::KendraTrikonaConjunction => "KENDRA_TRIKONA_CONJUNCTION",
            Self::KendraTrikonaAspect => "KENDRA_TRIKONA_ASPECT",
            Self::KendraTrikonaParivartana => "KENDRA_TRIKONA_PARIVARTANA",
            Self::NeechaBhanga => "NEECHA_BHANGA",
            Self::GajaKesari => "GAJA_KESARI",
            Self::Ruchaka => "RUCHAKA",
            Self::Bhadra => "BHADRA",
            Self::Hamsa => "HAMSA",
            Self::Malavya => "MALAVYA",
            Self::Sasa => "SASA",
            Self::Harsha => "HARSHA",
            Self::Sarala => "SARALA",
            Self::Vimala => "VIMALA",
            Self::WealthLordsConjunction => "WEALTH_LORDS_CONJUNCTION",
            Self::WealthLordsExchange => "WEALTH_LORDS_EXCHANGE",
            Self::MultipleBeneficsInWealthHouse => "MULTIPLE_BENEFICS_IN_WEALTH_HOUSE",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::KendraTrikonaConjunction => "Kendra-Trikona Raja Yoga (conjunction)",
            Self::KendraTrikonaAspect => "Kendra-Trikona Raja Yoga (mutual aspect)",
            Self::KendraTrikonaParivartana => "Kendra-Trikona Raja Yoga (parivartana)",
            Self::NeechaBhanga => "Neecha Bhanga Raja Yoga",
            Self::GajaKesari => "Gaja Kesari Yoga",
            Self::Ruchaka => "Ruchaka Yoga",
            Self::Bhadra => "Bhadra Yoga",
            Self::Hamsa => "Hamsa Yoga",
            Self::Malavya => "Malavya Yoga",
            Self::Sasa => "Sasa Yoga",
            Self::Harsha => "Harsha Yoga",
            Self::Sarala => "Sarala Yoga",
            Self::Vimala => "Vimala Yoga",
            Self::WealthLordsConjunction => "Dhana Yoga (wealth lords conjunction)",
            Self::WealthLordsExchange => "Dhana Yoga (wealth lords exchange)",
            Self::MultipleBeneficsInWealthHouse => "Dhana Yoga (benefics in wealth house)",
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One detected yoga.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Yoga {
    #[serde(rename = "type")]
    pub kind: YogaKind,
    /// Participating grahas, in detection order.
    pub grahas: Vec<Graha>,
    /// Houses of the participants (or the single house the yoga forms in).
    pub houses: Vec<u8>,
    pub strength: f64,
    /// Cancellation factors for Neecha Bhanga, contributing factors otherwise.
    pub factors: Vec<String>,
    pub description: String,
}

/// Output of one family detector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaDetection {
    pub family: YogaFamily,
    pub present: bool,
    pub yogas: Vec<Yoga>,
    pub total_count: usize,
    pub description: String,
}

impl YogaDetection {
    pub fn new(family: YogaFamily, yogas: Vec<Yoga>) -> Self {
        let description = if yogas.is_empty() {
            format!("No significant {} Yogas detected.", family.name())
        } else {
            format!("{} {} Yoga(s) detected.", yogas.len(), family.name())
        };
        Self {
            family,
            present: !yogas.is_empty(),
            total_count: yogas.len(),
            yogas,
            description,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// Strongest yoga of the family, if any.
    pub fn strongest(&self) -> Option<&Yoga> {
        self.yogas
            .iter()
            .max_by(|a, b| a.strength.total_cmp(&b.strength))
    }
}

/// Every family detected on one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllYogas {
    pub raja: YogaDetection,
    pub neecha_bhanga: YogaDetection,
    pub gaja_kesari: YogaDetection,
    pub pancha_mahapurusha: YogaDetection,
    pub viparita_raja: YogaDetection,
    pub dhana: YogaDetection,
    pub total_count: usize,
}

impl AllYogas {
    /// All detections in fixed family order.
    pub fn families(&self) -> [&YogaDetection; 6] {
        [
            &self.raja,
            &self.neecha_bhanga,
            &self.gaja_kesari,
            &self.pancha_mahapurusha,
            &self.viparita_raja,
            &self.dhana,
        ]
    }

    /// All yogas flattened, in family order.
    pub fn iter(&self) -> impl Iterator<Item = &Yoga> {
        self.families().into_iter().flat_map(|d| d.yogas.iter())
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Orbs used by the yoga detectors.
///
/// Both orbs default to 8 degrees: a conjunction is a separation of at
/// most 8, a mutual aspect a separation within 172..=188. The wider
/// 10-degree conjunction and 170..=190 opposition bands are available by
/// setting both orbs to 10.0 (`[yoga]` in the TOML config).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RajaYogaConfig {
    /// Maximum separation in degrees for a conjunction.
    pub conjunction_orb: f64,
    /// Maximum deviation from 180 degrees for a mutual aspect.
    pub aspect_orb: f64,
    /// Fixed combustion orb; `None` uses the classical per-planet thresholds.
    pub combustion_orb: Option<f64>,
}

impl Default for RajaYogaConfig {
    fn default() -> Self {
        Self {
            conjunction_orb: 8.0,
            aspect_orb: 8.0,
            combustion_orb: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Strength
// ---------------------------------------------------------------------------

/// Unclamped strength contribution of one graha.
pub(crate) fn planet_score(chart: &Chart, graha: Graha, combustion_orb: Option<f64>) -> f64 {
    let mut score = 5.0;
    match dignity_of(graha, chart.rashi(graha)) {
        SignDignity::Exalted => score += 3.0,
        SignDignity::OwnSign => score += 2.0,
        SignDignity::Debilitated => score -= 2.0,
        _ => {}
    }
    if chart.is_retrograde(graha) {
        score += 1.0;
    }
    if is_combust_in(chart, graha, combustion_orb) {
        score -= 2.0;
    }
    score
}

/// Strength contribution of one graha, clamped to [1, 10].
pub fn planet_strength(chart: &Chart, graha: Graha, combustion_orb: Option<f64>) -> f64 {
    planet_score(chart, graha, combustion_orb).clamp(1.0, 10.0)
}

/// Mean clamped strength over `grahas`; 0 for an empty slice.
pub fn average_strength(chart: &Chart, grahas: &[Graha], combustion_orb: Option<f64>) -> f64 {
    if grahas.is_empty() {
        return 0.0;
    }
    let total: f64 = grahas
        .iter()
        .map(|g| planet_strength(chart, *g, combustion_orb))
        .sum();
    total / grahas.len() as f64
}

/// Human-readable strength modifiers for `grahas`.
pub(crate) fn strength_factors(
    chart: &Chart,
    grahas: &[Graha],
    combustion_orb: Option<f64>,
) -> Vec<String> {
    let mut out = Vec::new();
    for &g in grahas {
        let name = g.english_name();
        match dignity_of(g, chart.rashi(g)) {
            SignDignity::Exalted => out.push(format!("{name} exalted")),
            SignDignity::OwnSign => out.push(format!("{name} in own sign")),
            SignDignity::Debilitated => out.push(format!("{name} debilitated")),
            _ => {}
        }
        if chart.is_retrograde(g) {
            out.push(format!("{name} retrograde"));
        }
        if is_combust_in(chart, g, combustion_orb) {
            out.push(format!("{name} combust"));
        }
    }
    out
}

/// Run every family detector on `chart`.
pub fn detect_all_yogas(chart: &Chart, config: &RajaYogaConfig) -> AllYogas {
    let raja = detect_raja_yogas(chart, config);
    let neecha_bhanga = detect_neecha_bhanga(chart);
    let gaja_kesari = detect_gaja_kesari(chart, config);
    let pancha_mahapurusha = detect_pancha_mahapurusha(chart, config);
    let viparita_raja = detect_viparita_raja(chart, config);
    let dhana = detect_dhana_yogas(chart, config);
    let total_count = raja.total_count
        + neecha_bhanga.total_count
        + gaja_kesari.total_count
        + pancha_mahapurusha.total_count
        + viparita_raja.total_count
        + dhana.total_count;
    log::debug!(
        "yogas: raja={} neecha_bhanga={} gaja_kesari={} mahapurusha={} viparita={} dhana={}",
        raja.total_count,
        neecha_bhanga.total_count,
        gaja_kesari.total_count,
        pancha_mahapurusha.total_count,
        viparita_raja.total_count,
        dhana.total_count
    );
    AllYogas {
        raja,
        neecha_bhanga,
        gaja_kesari,
        pancha_mahapurusha,
        viparita_raja,
        dhana,
        total_count,
    }
}
