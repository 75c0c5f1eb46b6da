//! Rashi (zodiac sign) classification and house counting.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Houses are counted from the
//! ascendant degree in 30-degree arcs, wrapping at 360.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::util::{normalize_360, require_finite};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element (tattva) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Modality {
    /// Chara.
    Movable,
    /// Sthira.
    Fixed,
    /// Dwiswabhava.
    Dual,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 0-based index.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_RASHIS[index as usize])
        } else {
            None
        }
    }

    /// Rashi from a 1-based sign number.
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(ALL_RASHIS[(number - 1) as usize])
        } else {
            None
        }
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// Odd signs (Mesha, Mithuna, ...) are masculine.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// The n-th rashi counted inclusively from this one (1 = self).
    pub const fn nth(self, n: u8) -> Self {
        ALL_RASHIS[((self.index() as u16 + (n as u16 % 12) + 11) % 12) as usize]
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignPosition {
    pub rashi: Rashi,
    /// 1-based sign index (1 = Mesha).
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
}

/// Rashi for an already-validated longitude.
pub(crate) fn rashi_from_longitude(lon: f64) -> SignPosition {
    let lon = normalize_360(lon);
    // Clamp in case of floating point edge (exactly 360.0)
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degree_in_sign = lon - idx as f64 * 30.0;
    SignPosition {
        rashi: ALL_RASHIS[idx as usize],
        sign_index: idx + 1,
        degree_in_sign,
        dms: deg_to_dms(degree_in_sign),
    }
}

/// Sign and degree-within-sign of a sidereal longitude.
///
/// Any finite input is accepted and normalized first; NaN and infinities
/// are rejected.
pub fn sign_of(longitude: f64) -> Result<SignPosition, ChartError> {
    let lon = require_finite(longitude, "longitude must be finite")?;
    Ok(rashi_from_longitude(lon))
}

/// 1-based house of `longitude` counted from `ascendant` in 30-degree arcs.
pub(crate) fn house_from_degrees(longitude: f64, ascendant: f64) -> u8 {
    ((normalize_360(longitude - ascendant) / 30.0).floor() as u8).min(11) + 1
}

/// House (1..12) of a longitude relative to the ascendant longitude.
///
/// `house_of(5.0, 350.0) == 2`: the arc is measured forward from the
/// ascendant and wraps at 360.
pub fn house_of(longitude: f64, ascendant_longitude: f64) -> Result<u8, ChartError> {
    let lon = require_finite(longitude, "longitude must be finite")?;
    let asc = require_finite(ascendant_longitude, "ascendant longitude must be finite")?;
    Ok(house_from_degrees(lon, asc))
}

/// Sign occupying `house` in a whole-sign layout from the ascendant sign.
///
/// Both arguments are 1-based. Returns None for out-of-range input.
pub fn sign_of_house(ascendant_sign_index: u8, house: u8) -> Option<Rashi> {
    if !(1..=12).contains(&ascendant_sign_index) || !(1..=12).contains(&house) {
        return None;
    }
    Rashi::from_number((ascendant_sign_index - 1 + house - 1) % 12 + 1)
}

/// House distance from `from` to `to` counted inclusively (1..12).
pub const fn house_distance(from: u8, to: u8) -> u8 {
    ((to as i16 - from as i16).rem_euclid(12) + 1) as u8
}
