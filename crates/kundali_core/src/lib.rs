//! Astronomical provider contract.
//!
//! Kundali math never computes planetary positions itself. It consumes an
//! [`AstronomicalProvider`] that returns ecliptic longitudes (and optionally
//! latitude/speed) for the nine bodies plus the rising degree. Providers
//! report either sidereal output directly or tropical output together with
//! an ayanamsa, which [`sidereal_position`] and [`sidereal_ascendant`]
//! subtract on the caller side.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod table;

pub use table::TableProvider;

/// Bodies a provider must be able to answer for.
///
/// The lunar nodes are computed points, not physical bodies; their codes sit
/// outside the NAIF range used for the planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Ascending lunar node (Rahu).
    NorthNode,
    /// Descending lunar node (Ketu).
    SouthNode,
}

/// All provider bodies in a fixed order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::NorthNode,
    Body::SouthNode,
];

impl Body {
    /// NAIF-style body code. Nodes use 10001/10002.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
            Self::NorthNode => 10001,
            Self::SouthNode => 10002,
        }
    }

    /// Convert a body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            10001 => Some(Self::NorthNode),
            10002 => Some(Self::SouthNode),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::NorthNode => "NorthNode",
            Self::SouthNode => "SouthNode",
        }
    }
}

/// Zodiac the provider reports longitudes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    /// Ayanamsa already applied.
    #[default]
    Sidereal,
    /// Caller subtracts [`AstronomicalProvider::ayanamsa_at`].
    Tropical,
}

/// Ecliptic position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees.
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude speed in degrees/day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl BodyPosition {
    pub const fn new(longitude: f64) -> Self {
        Self {
            longitude,
            latitude: None,
            speed: None,
        }
    }

    /// Negative longitude speed. Unknown speed counts as direct.
    pub fn is_retrograde(&self) -> bool {
        self.speed.is_some_and(|s| s < 0.0)
    }
}

/// Provider-originated failures.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no data for this body.
    Unavailable { body: Body },
    /// The requested instant is outside the provider's coverage.
    OutOfRange { jd_ut: f64 },
    InvalidLocation(&'static str),
    /// Opaque failure reported by the backing library.
    Provider(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { body } => {
                write!(f, "ephemeris unavailable for {}", body.name())
            }
            Self::OutOfRange { jd_ut } => write!(f, "epoch out of range: JD {jd_ut}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Provider(msg) => write!(f, "provider error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Contract for the external ephemeris.
///
/// Implementations must surface failures as [`EphemerisError`] and never
/// substitute an approximate value. Providers are [`Send`] + [`Sync`] so a
/// single instance can serve independent chart requests from many threads.
pub trait AstronomicalProvider: Send + Sync {
    /// Zodiac of the longitudes returned by this provider.
    fn zodiac(&self) -> Zodiac {
        Zodiac::Sidereal
    }

    fn calculate_position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError>;

    /// Rising degree for the instant and geographic location.
    fn calculate_ascendant(
        &self,
        jd_ut: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, EphemerisError>;

    /// Ayanamsa in degrees. Only consulted for tropical providers.
    fn ayanamsa_at(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(0.0)
    }
}

fn normalize(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

fn validate_location(latitude_deg: f64, longitude_deg: f64) -> Result<(), EphemerisError> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(EphemerisError::InvalidLocation("latitude must be in [-90, 90]"));
    }
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(EphemerisError::InvalidLocation(
            "longitude must be in [-180, 180]",
        ));
    }
    Ok(())
}

/// Sidereal position of `body`, normalized to [0, 360).
///
/// Tropical providers have their ayanamsa subtracted here.
pub fn sidereal_position<P: AstronomicalProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
    body: Body,
) -> Result<BodyPosition, EphemerisError> {
    if !jd_ut.is_finite() {
        return Err(EphemerisError::OutOfRange { jd_ut });
    }
    let mut pos = provider.calculate_position(jd_ut, body)?;
    if !pos.longitude.is_finite() {
        return Err(EphemerisError::Provider(format!(
            "non-finite longitude for {}",
            body.name()
        )));
    }
    if provider.zodiac() == Zodiac::Tropical {
        pos.longitude -= provider.ayanamsa_at(jd_ut)?;
    }
    pos.longitude = normalize(pos.longitude);
    Ok(pos)
}

/// Sidereal ascendant, normalized to [0, 360).
pub fn sidereal_ascendant<P: AstronomicalProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, EphemerisError> {
    if !jd_ut.is_finite() {
        return Err(EphemerisError::OutOfRange { jd_ut });
    }
    validate_location(latitude_deg, longitude_deg)?;
    let mut asc = provider.calculate_ascendant(jd_ut, latitude_deg, longitude_deg)?;
    if !asc.is_finite() {
        return Err(EphemerisError::Provider("non-finite ascendant".to_string()));
    }
    if provider.zodiac() == Zodiac::Tropical {
        asc -= provider.ayanamsa_at(jd_ut)?;
    }
    Ok(normalize(asc))
}

/// Sidereal positions for a batch of bodies at one instant.
///
/// Fails on the first body the provider cannot answer for.
pub fn sidereal_positions<P: AstronomicalProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
    bodies: &[Body],
) -> Result<Vec<(Body, BodyPosition)>, EphemerisError> {
    let mut out = Vec::with_capacity(bodies.len());
    for &body in bodies {
        out.push((body, sidereal_position(provider, jd_ut, body)?));
    }
    log::debug!("resolved {} bodies at JD {jd_ut}", out.len());
    Ok(out)
}
