//! Dignity and natural relationships of the grahas.
//!
//! Provides exaltation/debilitation data, own-sign ownership, natural
//! (naisargika) friendship, sign dignity and benefic/malefic
//! classification. All tables are fixed Parashari data.

use serde::Serialize;

use crate::chart::Chart;
use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;
use crate::util::{angular_separation, normalize_360};

// ---------------------------------------------------------------------------
// Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Exaltation degree (sidereal) for sapta grahas. Returns None for Rahu/Ketu.
///
/// Sun 10 Ari=10, Moon 3 Tau=33, Mars 28 Cap=298,
/// Mercury 15 Vir=165, Jupiter 5 Can=95, Venus 27 Pis=357, Saturn 20 Lib=200.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree = exaltation + 180 mod 360. Returns None for Rahu/Ketu.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            if d >= 360.0 { Some(d - 360.0) } else { Some(d) }
        }
        None => None,
    }
}

/// Exaltation sign. Nodes follow the Rahu-in-Mithuna school.
pub const fn exaltation_rashi(graha: Graha) -> Rashi {
    match graha {
        Graha::Surya => Rashi::Mesha,
        Graha::Chandra => Rashi::Vrishabha,
        Graha::Mangal => Rashi::Makara,
        Graha::Buddh => Rashi::Kanya,
        Graha::Guru => Rashi::Karka,
        Graha::Shukra => Rashi::Meena,
        Graha::Shani => Rashi::Tula,
        Graha::Rahu => Rashi::Mithuna,
        Graha::Ketu => Rashi::Dhanu,
    }
}

/// Debilitation sign: always the 7th from the exaltation sign.
pub const fn debilitation_rashi(graha: Graha) -> Rashi {
    exaltation_rashi(graha).nth(7)
}

/// Own-sign rashis. Empty for Rahu/Ketu.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    own_signs(graha).contains(&rashi)
}

// ---------------------------------------------------------------------------
// Natural Friendship (Naisargika Maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship between two sapta grahas.
/// Returns Neutral for any pairing involving Rahu/Ketu.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemy=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemy=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Sign Dignity
// ---------------------------------------------------------------------------

/// Dignity of a graha in a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignDignity {
    Exalted,
    Debilitated,
    OwnSign,
    Friendly,
    Enemy,
    Neutral,
}

impl SignDignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::OwnSign => "Own Sign",
            Self::Friendly => "Friendly",
            Self::Enemy => "Enemy",
            Self::Neutral => "Neutral",
        }
    }

    /// Exalted or own sign.
    pub const fn is_dignified(self) -> bool {
        matches!(self, Self::Exalted | Self::OwnSign)
    }
}

/// Sign dignity of `graha` in `rashi`.
///
/// Checked in order: exaltation, debilitation, own sign, natural
/// friendship with the sign lord; anything else is Neutral. Nodes have
/// exaltation/debilitation signs but no lordship or friendships.
pub fn dignity_of(graha: Graha, rashi: Rashi) -> SignDignity {
    if exaltation_rashi(graha) == rashi {
        return SignDignity::Exalted;
    }
    if debilitation_rashi(graha) == rashi {
        return SignDignity::Debilitated;
    }
    if is_own_sign(graha, rashi) {
        return SignDignity::OwnSign;
    }
    match naisargika_maitri(graha, rashi_lord(rashi)) {
        NaisargikaMaitri::Friend => SignDignity::Friendly,
        NaisargikaMaitri::Enemy => SignDignity::Enemy,
        NaisargikaMaitri::Neutral => SignDignity::Neutral,
    }
}

/// Dignity of every graha in `chart`, in `ALL_GRAHAS` order.
pub fn chart_dignities(chart: &Chart) -> Vec<(Graha, SignDignity)> {
    chart
        .placements()
        .iter()
        .map(|p| (p.graha, dignity_of(p.graha, p.rashi)))
        .collect()
}

// ---------------------------------------------------------------------------
// Benefic/Malefic
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

impl BeneficNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Benefic => "Benefic",
            Self::Malefic => "Malefic",
        }
    }
}

/// Fixed natural table: Moon, Mercury, Jupiter, Venus benefic; Sun, Mars,
/// Saturn, Rahu, Ketu malefic.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

/// Moon is benefic when at least 72 degrees from the Sun on either side.
pub fn moon_benefic_nature(moon_sun_elongation: f64) -> BeneficNature {
    let elong = normalize_360(moon_sun_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    if phase >= 72.0 {
        BeneficNature::Benefic
    } else {
        BeneficNature::Malefic
    }
}

/// Nature of a graha in a specific chart.
///
/// The Moon follows its phase; Mercury turns malefic when it shares a
/// sign with a natural malefic. Everyone else keeps the natural table.
pub fn chart_benefic_nature(chart: &Chart, graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra => {
            let sep = angular_separation(chart.longitude(Graha::Chandra), chart.longitude(Graha::Surya));
            moon_benefic_nature(sep)
        }
        Graha::Buddh => {
            let sign = chart.rashi(Graha::Buddh);
            let afflicted = chart.placements().iter().any(|p| {
                p.graha != Graha::Buddh
                    && p.rashi == sign
                    && natural_benefic_malefic(p.graha) == BeneficNature::Malefic
            });
            if afflicted {
                BeneficNature::Malefic
            } else {
                BeneficNature::Benefic
            }
        }
        _ => natural_benefic_malefic(graha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PlanetaryPosition;
    use crate::graha::{ALL_GRAHAS, SAPTA_GRAHAS};
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn exaltation_degrees_fall_in_exaltation_signs() {
        for g in SAPTA_GRAHAS {
            let deg = exaltation_degree(g).unwrap();
            assert_eq!(
                ALL_RASHIS[(deg / 30.0) as usize],
                exaltation_rashi(g),
                "{}",
                g.english_name()
            );
        }
    }

    #[test]
    fn debilitation_degree_opposite() {
        assert_eq!(debilitation_degree(Graha::Surya), Some(190.0));
        assert_eq!(debilitation_degree(Graha::Shukra), Some(177.0));
        assert_eq!(debilitation_degree(Graha::Rahu), None);
    }

    #[test]
    fn exaltation_and_debilitation_exclusive() {
        for g in ALL_GRAHAS {
            assert_ne!(exaltation_rashi(g), debilitation_rashi(g));
        }
    }

    #[test]
    fn exalted_and_debilitated_lookup() {
        for g in SAPTA_GRAHAS {
            assert_eq!(dignity_of(g, exaltation_rashi(g)), SignDignity::Exalted);
            assert_eq!(dignity_of(g, debilitation_rashi(g)), SignDignity::Debilitated);
        }
    }

    #[test]
    fn own_sign_lookup() {
        assert_eq!(dignity_of(Graha::Mangal, Rashi::Vrischika), SignDignity::OwnSign);
        assert_eq!(dignity_of(Graha::Surya, Rashi::Simha), SignDignity::OwnSign);
        // Mercury's exaltation wins over own sign in Kanya
        assert_eq!(dignity_of(Graha::Buddh, Rashi::Kanya), SignDignity::Exalted);
    }

    #[test]
    fn friendly_enemy_neutral() {
        // Sun in Karka: Moon is a friend
        assert_eq!(dignity_of(Graha::Surya, Rashi::Karka), SignDignity::Friendly);
        // Sun in Makara: Saturn is an enemy
        assert_eq!(dignity_of(Graha::Surya, Rashi::Makara), SignDignity::Enemy);
        // Sun in Mithuna: Mercury neutral
        assert_eq!(dignity_of(Graha::Surya, Rashi::Mithuna), SignDignity::Neutral);
        // Rahu outside its exaltation axis
        assert_eq!(dignity_of(Graha::Rahu, Rashi::Mesha), SignDignity::Neutral);
    }

    #[test]
    fn moon_has_no_enemies() {
        for g in SAPTA_GRAHAS {
            assert_ne!(naisargika_maitri(Graha::Chandra, g), NaisargikaMaitri::Enemy);
        }
    }

    #[test]
    fn natural_table() {
        assert_eq!(natural_benefic_malefic(Graha::Guru), BeneficNature::Benefic);
        assert_eq!(natural_benefic_malefic(Graha::Ketu), BeneficNature::Malefic);
    }

    #[test]
    fn moon_phase_threshold() {
        assert_eq!(moon_benefic_nature(180.0), BeneficNature::Benefic);
        assert_eq!(moon_benefic_nature(72.0), BeneficNature::Benefic);
        assert_eq!(moon_benefic_nature(30.0), BeneficNature::Malefic);
        assert_eq!(moon_benefic_nature(330.0), BeneficNature::Malefic);
    }

    #[test]
    fn chart_nature_refinements() {
        let lons = [10.0, 20.0, 100.0, 15.0, 200.0, 250.0, 300.0, 340.0, 160.0];
        let positions: Vec<_> = ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, l)| PlanetaryPosition::new(*g, l))
            .collect();
        let chart = Chart::new(0.0, &positions).unwrap();
        // Moon 10 deg from the Sun
        assert_eq!(chart_benefic_nature(&chart, Graha::Chandra), BeneficNature::Malefic);
        // Mercury shares Mesha with the Sun
        assert_eq!(chart_benefic_nature(&chart, Graha::Buddh), BeneficNature::Malefic);
        assert_eq!(chart_benefic_nature(&chart, Graha::Guru), BeneficNature::Benefic);
    }
}
