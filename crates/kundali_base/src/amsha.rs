//! Amsha (divisional chart / varga) longitude mapping.
//!
//! Each amsha divides the 30-degree rashi span into D equal parts and maps
//! each part to a target rashi using a varga-specific starting-sign rule.
//! The position within the part is scaled back up to a 0-30 degree span so
//! the result is itself a full sidereal longitude.

use serde::Serialize;

use crate::error::ChartError;
use crate::rashi::{Element, Modality, Rashi};
use crate::util::{normalize_360, require_finite};

/// Implemented divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Amsha {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D30,
    D60,
}

/// All implemented amshas in order.
pub const ALL_AMSHAS: [Amsha; 13] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D4,
    Amsha::D7,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D16,
    Amsha::D20,
    Amsha::D24,
    Amsha::D30,
    Amsha::D60,
];

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D30 => 30,
            Self::D60 => 60,
        }
    }

    pub const fn code(self) -> u16 {
        self.divisions()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D30 => "Trimshamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// Life area the varga is read for.
    pub const fn signification(self) -> &'static str {
        match self {
            Self::D1 => "body and overall life",
            Self::D2 => "wealth",
            Self::D3 => "siblings",
            Self::D4 => "property and fortune",
            Self::D7 => "children",
            Self::D9 => "marriage and dharma",
            Self::D10 => "career",
            Self::D12 => "parents",
            Self::D16 => "vehicles and comforts",
            Self::D20 => "spiritual practice",
            Self::D24 => "learning",
            Self::D30 => "misfortunes",
            Self::D60 => "past karma",
        }
    }

    /// Look up an amsha by division factor.
    pub fn from_code(code: u16) -> Result<Amsha, ChartError> {
        ALL_AMSHAS
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or(ChartError::UnsupportedDivision(code))
    }
}

/// Starting-sign rule for the amsha sequence of one natal rashi.
///
/// * `natal` - rashi of the natal position
/// * `div_idx` - 0-based division index within the rashi
fn amsha_target_rashi(amsha: Amsha, natal: Rashi, div_idx: u16) -> u8 {
    let natal_idx = natal.index() as u16;
    let target = match amsha {
        Amsha::D1 => natal_idx,

        // Odd rashi: Leo then Cancer; even rashi: Cancer then Leo
        Amsha::D2 => {
            if natal.is_odd() {
                if div_idx == 0 { 4 } else { 3 }
            } else if div_idx == 0 {
                3
            } else {
                4
            }
        }

        // Trine progression: self, 5th, 9th
        Amsha::D3 => natal_idx + div_idx * 4,

        // Kendra progression: self, 4th, 7th, 10th
        Amsha::D4 => natal_idx + div_idx * 3,

        // Odd rashi from itself, even rashi from the 7th / 9th / 5th
        Amsha::D7 => increment_start(natal, 6) + div_idx,
        Amsha::D10 => increment_start(natal, 8) + div_idx,
        Amsha::D24 => {
            let start = if natal.is_odd() { 4 } else { 3 };
            start + div_idx
        }

        // Movable from itself, fixed from the 9th, dual from the 5th
        Amsha::D9 => {
            let offset = match natal.modality() {
                Modality::Movable => 0,
                Modality::Fixed => 8,
                Modality::Dual => 4,
            };
            natal_idx + offset + div_idx
        }

        // Movable from Mesha, fixed from Simha, dual from Dhanu
        Amsha::D16 => {
            let start = match natal.modality() {
                Modality::Movable => 0,
                Modality::Fixed => 4,
                Modality::Dual => 8,
            };
            start + div_idx
        }

        // Movable from Mesha, fixed from Dhanu, dual from Simha
        Amsha::D20 => {
            let start = match natal.modality() {
                Modality::Movable => 0,
                Modality::Fixed => 8,
                Modality::Dual => 4,
            };
            start + div_idx
        }

        Amsha::D30 => trimshamsha_rashi(natal, div_idx),

        // Fire from Mesha, earth from Makara, air from Tula, water from Karka
        Amsha::D60 => {
            let start = match natal.element() {
                Element::Fire => 0,
                Element::Earth => 9,
                Element::Air => 6,
                Element::Water => 3,
            };
            start + div_idx
        }

        Amsha::D12 => natal_idx + div_idx,
    };
    (target % 12) as u8
}

/// Odd rashi starts from itself, even rashi from itself + offset.
fn increment_start(natal: Rashi, even_offset: u16) -> u16 {
    let idx = natal.index() as u16;
    if natal.is_odd() { idx } else { idx + even_offset }
}

/// Parashari trimshamsha: unequal 5/5/8/7/5 degree portions ruled by
/// Mars, Saturn, Jupiter, Mercury, Venus in odd signs, reversed in even.
fn trimshamsha_rashi(natal: Rashi, div_idx: u16) -> u16 {
    // div_idx is a 1-degree slot (0..29)
    if natal.is_odd() {
        match div_idx {
            0..=4 => 0,   // Mesha (Mars)
            5..=9 => 10,  // Kumbha (Saturn)
            10..=17 => 8, // Dhanu (Jupiter)
            18..=24 => 2, // Mithuna (Mercury)
            _ => 6,       // Tula (Venus)
        }
    } else {
        match div_idx {
            0..=4 => 1,   // Vrishabha (Venus)
            5..=11 => 5,  // Kanya (Mercury)
            12..=19 => 11, // Meena (Jupiter)
            20..=24 => 9, // Makara (Saturn)
            _ => 7,       // Vrischika (Mars)
        }
    }
}

/// Transform a sidereal longitude through an amsha division.
///
/// Returns the amsha longitude in [0, 360).
pub fn amsha_longitude(sidereal_lon: f64, amsha: Amsha) -> Result<f64, ChartError> {
    let lon = normalize_360(require_finite(sidereal_lon, "longitude must be finite")?);
    if amsha == Amsha::D1 {
        return Ok(lon);
    }

    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let natal = crate::rashi::ALL_RASHIS[rashi_idx as usize];
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
    let total_divisions = amsha.divisions();
    let deg_per_div = 30.0 / total_divisions as f64;

    let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(total_divisions - 1);
    let target_rashi_idx = amsha_target_rashi(amsha, natal, div_idx);

    // Scale position within division to 0-30 range
    let pos_in_div = pos_in_rashi - div_idx as f64 * deg_per_div;
    let scaled_pos = pos_in_div / deg_per_div * 30.0;

    Ok(normalize_360(target_rashi_idx as f64 * 30.0 + scaled_pos))
}

/// Rashi a longitude falls into in the given amsha.
pub fn amsha_rashi(sidereal_lon: f64, amsha: Amsha) -> Result<Rashi, ChartError> {
    let lon = amsha_longitude(sidereal_lon, amsha)?;
    Ok(crate::rashi::rashi_from_longitude(lon).rashi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn codes_roundtrip() {
        for a in ALL_AMSHAS {
            assert_eq!(Amsha::from_code(a.code()).unwrap(), a);
        }
    }

    #[test]
    fn unsupported_code() {
        assert_eq!(
            Amsha::from_code(11),
            Err(ChartError::UnsupportedDivision(11))
        );
        assert_eq!(Amsha::from_code(0), Err(ChartError::UnsupportedDivision(0)));
    }

    #[test]
    fn d1_identity() {
        for lon in [0.0, 45.5, 123.456, 359.99] {
            let r = amsha_longitude(lon, Amsha::D1).unwrap();
            assert!((r - lon).abs() < 1e-10);
        }
    }

    #[test]
    fn d9_movable_starts_from_itself() {
        // 5 deg Mesha: div 1 (3d20'-6d40') -> Vrishabha
        assert_eq!(amsha_rashi(5.0, Amsha::D9).unwrap(), Rashi::Vrishabha);
        // 1 deg Karka -> Karka
        assert_eq!(amsha_rashi(91.0, Amsha::D9).unwrap(), Rashi::Karka);
    }

    #[test]
    fn d9_fixed_starts_from_ninth() {
        // 1 deg Vrishabha -> Makara
        assert_eq!(amsha_rashi(31.0, Amsha::D9).unwrap(), Rashi::Makara);
        // 1 deg Simha -> Mesha
        assert_eq!(amsha_rashi(121.0, Amsha::D9).unwrap(), Rashi::Mesha);
    }

    #[test]
    fn d9_dual_starts_from_fifth() {
        // 1 deg Mithuna -> Tula
        assert_eq!(amsha_rashi(61.0, Amsha::D9).unwrap(), Rashi::Tula);
        // 1 deg Meena -> Karka
        assert_eq!(amsha_rashi(331.0, Amsha::D9).unwrap(), Rashi::Karka);
    }

    #[test]
    fn d9_modality_rule_matches_element_rule() {
        for r in ALL_RASHIS {
            let start = amsha_rashi(r.index() as f64 * 30.0 + 0.5, Amsha::D9).unwrap();
            let by_element = match r.element() {
                Element::Fire => Rashi::Mesha,
                Element::Earth => Rashi::Makara,
                Element::Air => Rashi::Tula,
                Element::Water => Rashi::Karka,
            };
            assert_eq!(start, by_element, "{}", r.name());
        }
    }

    #[test]
    fn d9_last_navamsa_of_mesha_is_dhanu() {
        assert_eq!(amsha_rashi(29.9, Amsha::D9).unwrap(), Rashi::Dhanu);
    }

    #[test]
    fn d10_even_sign_starts_from_ninth() {
        // 1 deg Vrishabha -> Makara
        assert_eq!(amsha_rashi(31.0, Amsha::D10).unwrap(), Rashi::Makara);
        // 1 deg Mesha -> Mesha
        assert_eq!(amsha_rashi(1.0, Amsha::D10).unwrap(), Rashi::Mesha);
    }

    #[test]
    fn d7_even_sign_starts_from_seventh() {
        assert_eq!(amsha_rashi(31.0, Amsha::D7).unwrap(), Rashi::Vrischika);
        assert_eq!(amsha_rashi(61.0, Amsha::D7).unwrap(), Rashi::Mithuna);
    }

    #[test]
    fn d12_starts_from_itself() {
        assert_eq!(amsha_rashi(31.0, Amsha::D12).unwrap(), Rashi::Vrishabha);
        // 29 deg Vrishabha: 12th part -> Mesha
        assert_eq!(amsha_rashi(59.0, Amsha::D12).unwrap(), Rashi::Mesha);
    }

    #[test]
    fn d2_hora_sun_and_moon() {
        assert_eq!(amsha_rashi(5.0, Amsha::D2).unwrap(), Rashi::Simha);
        assert_eq!(amsha_rashi(20.0, Amsha::D2).unwrap(), Rashi::Karka);
        assert_eq!(amsha_rashi(35.0, Amsha::D2).unwrap(), Rashi::Karka);
    }

    #[test]
    fn d30_odd_and_even() {
        assert_eq!(amsha_rashi(2.0, Amsha::D30).unwrap(), Rashi::Mesha);
        assert_eq!(amsha_rashi(12.0, Amsha::D30).unwrap(), Rashi::Dhanu);
        assert_eq!(amsha_rashi(32.0, Amsha::D30).unwrap(), Rashi::Vrishabha);
        assert_eq!(amsha_rashi(58.0, Amsha::D30).unwrap(), Rashi::Vrischika);
    }

    #[test]
    fn scaled_position() {
        // 5 deg Mesha in D9: 5 - 3.333 = 1.667 into div 1 -> 15 deg of Vrishabha
        let r = amsha_longitude(5.0, Amsha::D9).unwrap();
        assert!((r - 45.0).abs() < 1e-9);
    }

    #[test]
    fn results_in_range() {
        for a in ALL_AMSHAS {
            let mut lon = 0.0;
            while lon < 360.0 {
                let r = amsha_longitude(lon, a).unwrap();
                assert!((0.0..360.0).contains(&r), "{:?} at {lon}: {r}", a);
                lon += 0.7;
            }
        }
    }

    #[test]
    fn rejects_nan() {
        assert!(amsha_longitude(f64::NAN, Amsha::D9).is_err());
    }
}
