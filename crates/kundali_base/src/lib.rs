//! Classical Vedic chart calculations over provider-supplied positions.
//!
//! This crate provides:
//! - Sign, house and nakshatra classification of sidereal longitudes
//! - Validated natal charts and divisional (varga) projections
//! - Dignity, combustion and graha drishti (aspects)
//! - Yoga detection: Raja, Neecha Bhanga, Gaja Kesari, Pancha Mahapurusha, Viparita Raja
//! - Vimshottari dasha periods down to Pranadasha
//!
//! Everything here is pure and deterministic. The only external input
//! is an [`kundali_core::AstronomicalProvider`] used by [`cast_chart`].

pub mod amsha;
pub mod chart;
pub mod combustion;
pub mod dasha;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod yoga;

pub use amsha::{ALL_AMSHAS, Amsha, amsha_longitude, amsha_rashi};
pub use chart::{
    Ascendant, Chart, ChartConfig, ChartInput, DivisionalChart, Placement, PlanetaryPosition,
    build_divisional_chart, cast_chart, cast_chart_at, divisional_charts,
};
pub use combustion::{combust_grahas, combustion_threshold, is_combust, is_combust_in};
pub use dasha::{
    DashaConfig, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, NakshatraLordScheme,
    balanced_mahadasha_sequence, calculate_antardashas, calculate_current_dasha,
    dasha_hierarchy, dasha_snapshot, generate_mahadasha_sequence, starting_dasha_lord,
};
pub use drishti::{
    Aspect, AspectKind, AspectTarget, HouseAspectAnalysis, analyze_aspect_on_house,
    aspect_kinds, aspected_houses, aspects_of, aspects_on_house,
};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, nth_rashi_from, rashi_lord, sign_lord};
pub use graha_relationships::{
    BeneficNature, NaisargikaMaitri, SignDignity, chart_benefic_nature, chart_dignities,
    debilitation_rashi, dignity_of, exaltation_rashi, natural_benefic_malefic, own_signs,
};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Modality, Rashi, SignPosition, deg_to_dms, house_distance,
    house_of, sign_of, sign_of_house,
};
pub use util::normalize_360;
pub use yoga::{
    AllYogas, RajaYogaConfig, WEALTH_HOUSES, Yoga, YogaDetection, YogaFamily, YogaKind,
    detect_all_yogas, detect_dhana_yogas, detect_gaja_kesari, detect_neecha_bhanga, detect_pancha_mahapurusha, detect_raja_yogas,
    detect_viparita_raja,
};
