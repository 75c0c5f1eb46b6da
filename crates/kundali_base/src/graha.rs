//! Vedic planet (graha) enum and rashi lordship.
//!
//! Each rashi has exactly one planetary lord. The table is the classical
//! Parashari rulership and is hardcoded, never derived.

use kundali_core::Body;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
///
/// Serialized under the English name; Sanskrit names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Sun", alias = "Surya")]
    Surya,
    #[serde(rename = "Moon", alias = "Chandra")]
    Chandra,
    #[serde(rename = "Mars", alias = "Mangal")]
    Mangal,
    #[serde(rename = "Mercury", alias = "Buddh")]
    Buddh,
    #[serde(rename = "Jupiter", alias = "Guru")]
    Guru,
    #[serde(rename = "Venus", alias = "Shukra")]
    Shukra,
    #[serde(rename = "Saturn", alias = "Shani")]
    Shani,
    #[serde(rename = "Rahu", alias = "NorthNode")]
    Rahu,
    #[serde(rename = "Ketu", alias = "SouthNode")]
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Provider body that reports this graha's position.
    pub const fn body(self) -> Body {
        match self {
            Self::Surya => Body::Sun,
            Self::Chandra => Body::Moon,
            Self::Mangal => Body::Mars,
            Self::Buddh => Body::Mercury,
            Self::Guru => Body::Jupiter,
            Self::Shukra => Body::Venus,
            Self::Shani => Body::Saturn,
            Self::Rahu => Body::NorthNode,
            Self::Ketu => Body::SouthNode,
        }
    }

    pub const fn from_body(body: Body) -> Self {
        match body {
            Body::Sun => Self::Surya,
            Body::Moon => Self::Chandra,
            Body::Mars => Self::Mangal,
            Body::Mercury => Self::Buddh,
            Body::Jupiter => Self::Guru,
            Body::Venus => Self::Shukra,
            Body::Saturn => Self::Shani,
            Body::NorthNode => Self::Rahu,
            Body::SouthNode => Self::Ketu,
        }
    }

    /// Parse an English or Sanskrit name, case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        ALL_GRAHAS.into_iter().find(|g| {
            g.english_name().eq_ignore_ascii_case(s) || g.name().eq_ignore_ascii_case(s)
        })
    }

    /// True for Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika -> Mangal (Mars)
/// - Vrishabha/Tula -> Shukra (Venus)
/// - Mithuna/Kanya -> Buddh (Mercury)
/// - Karka -> Chandra (Moon)
/// - Simha -> Surya (Sun)
/// - Dhanu/Meena -> Guru (Jupiter)
/// - Makara/Kumbha -> Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Lord of a 1-based sign index (1 = Aries .. 12 = Pisces).
pub fn sign_lord(sign_index: u8) -> Result<Graha, ChartError> {
    Rashi::from_number(sign_index)
        .map(rashi_lord)
        .ok_or(ChartError::InvalidInput("sign index must be in 1..=12"))
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1 (next rashi).
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}
