//! Natal and divisional chart types.
//!
//! A [`Chart`] is validated once at construction: all nine grahas present,
//! no duplicates, finite longitudes. Longitudes are normalized to [0, 360)
//! and every placement carries its sign and house. Charts are never
//! mutated afterwards; divisional charts are separate projections.

use kundali_core::{AstronomicalProvider, sidereal_ascendant, sidereal_position};
use kundali_time::BirthMoment;
use serde::{Deserialize, Serialize};

use crate::amsha::{Amsha, amsha_longitude};
use crate::error::ChartError;
use crate::graha::{ALL_GRAHAS, Graha, rashi_lord};
use crate::rashi::{Rashi, house_from_degrees, rashi_from_longitude};
use crate::util::{normalize_360, require_finite};

/// Raw position of one graha, as delivered by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryPosition {
    #[serde(alias = "planet")]
    pub graha: Graha,
    /// Sidereal longitude in degrees.
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude speed in degrees/day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default)]
    pub is_retrograde: bool,
}

impl PlanetaryPosition {
    pub const fn new(graha: Graha, longitude: f64) -> Self {
        Self {
            graha,
            longitude,
            latitude: None,
            speed: None,
            is_retrograde: false,
        }
    }

    /// Attach a speed; negative speed marks the position retrograde.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self.is_retrograde = speed < 0.0;
        self
    }

    pub fn retrograde(mut self) -> Self {
        self.is_retrograde = true;
        self
    }
}

/// Rising degree of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ascendant {
    pub longitude: f64,
    pub rashi: Rashi,
    /// 1-based sign index.
    pub sign_index: u8,
    pub degree_in_sign: f64,
}

impl Ascendant {
    pub fn new(longitude: f64) -> Result<Self, ChartError> {
        let lon = normalize_360(require_finite(longitude, "ascendant longitude must be finite")?);
        let sign = rashi_from_longitude(lon);
        Ok(Self {
            longitude: lon,
            rashi: sign.rashi,
            sign_index: sign.sign_index,
            degree_in_sign: sign.degree_in_sign,
        })
    }
}

/// A graha placed in a chart: position plus derived sign and house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub graha: Graha,
    pub longitude: f64,
    pub rashi: Rashi,
    pub sign_index: u8,
    pub degree_in_sign: f64,
    /// 1-based house counted from the ascendant degree.
    pub house: u8,
    pub is_retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// Immutable natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    ascendant: Ascendant,
    /// Indexed by `Graha::index()`.
    placements: Vec<Placement>,
}

impl Chart {
    /// Build and validate a chart from an ascendant and nine positions.
    pub fn new(ascendant_longitude: f64, positions: &[PlanetaryPosition]) -> Result<Self, ChartError> {
        let ascendant = Ascendant::new(ascendant_longitude)?;
        let mut slots: [Option<PlanetaryPosition>; 9] = [None; 9];
        for pos in positions {
            require_finite(pos.longitude, "planet longitude must be finite")?;
            let slot = &mut slots[pos.graha.index() as usize];
            if slot.is_some() {
                return Err(ChartError::InvalidInput("duplicate graha position"));
            }
            *slot = Some(*pos);
        }

        let mut placements = Vec::with_capacity(9);
        for graha in ALL_GRAHAS {
            let pos = slots[graha.index() as usize].ok_or(ChartError::IncompleteChart(graha))?;
            let lon = normalize_360(pos.longitude);
            let sign = rashi_from_longitude(lon);
            placements.push(Placement {
                graha,
                longitude: lon,
                rashi: sign.rashi,
                sign_index: sign.sign_index,
                degree_in_sign: sign.degree_in_sign,
                house: house_from_degrees(lon, ascendant.longitude),
                is_retrograde: pos.is_retrograde || pos.speed.is_some_and(|s| s < 0.0),
                latitude: pos.latitude,
                speed: pos.speed,
            });
        }
        Ok(Self {
            ascendant,
            placements,
        })
    }

    pub fn ascendant(&self) -> &Ascendant {
        &self.ascendant
    }

    /// All placements in `ALL_GRAHAS` order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement(&self, graha: Graha) -> &Placement {
        &self.placements[graha.index() as usize]
    }

    pub fn longitude(&self, graha: Graha) -> f64 {
        self.placement(graha).longitude
    }

    pub fn rashi(&self, graha: Graha) -> Rashi {
        self.placement(graha).rashi
    }

    pub fn house(&self, graha: Graha) -> u8 {
        self.placement(graha).house
    }

    pub fn is_retrograde(&self, graha: Graha) -> bool {
        self.placement(graha).is_retrograde
    }

    /// Sign on the cusp of `house` (1..12) in a whole-sign layout.
    pub fn house_sign(&self, house: u8) -> Rashi {
        self.ascendant.rashi.nth(house)
    }

    /// Lord of the sign on `house` (1..12).
    pub fn house_lord(&self, house: u8) -> Graha {
        rashi_lord(self.house_sign(house))
    }

    /// Grahas occupying `house`, in `ALL_GRAHAS` order.
    pub fn occupants(&self, house: u8) -> Vec<Graha> {
        self.placements
            .iter()
            .filter(|p| p.house == house)
            .map(|p| p.graha)
            .collect()
    }

    /// Project this chart through a divisional mapping.
    pub fn varga(&self, amsha: Amsha) -> Result<DivisionalChart, ChartError> {
        let asc = amsha_longitude(self.ascendant.longitude, amsha)?;
        let mut positions = Vec::with_capacity(9);
        for p in &self.placements {
            positions.push(PlanetaryPosition {
                graha: p.graha,
                longitude: amsha_longitude(p.longitude, amsha)?,
                latitude: None,
                speed: p.speed,
                is_retrograde: p.is_retrograde,
            });
        }
        Ok(DivisionalChart {
            amsha,
            chart: Chart::new(asc, &positions)?,
        })
    }
}

/// Read-only divisional projection of a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub amsha: Amsha,
    #[serde(flatten)]
    chart: Chart,
}

impl DivisionalChart {
    pub fn division(&self) -> u16 {
        self.amsha.divisions()
    }

    /// Divisional placements as a chart, for dignity and house lookups.
    pub fn chart(&self) -> &Chart {
        &self.chart
    }
}

/// Build the divisional chart for division factor `d`.
///
/// Fails with [`ChartError::UnsupportedDivision`] for an unknown factor.
pub fn build_divisional_chart(chart: &Chart, d: u16) -> Result<DivisionalChart, ChartError> {
    let amsha = Amsha::from_code(d)?;
    let out = chart.varga(amsha)?;
    log::debug!(
        "built D{d} chart, ascendant {}",
        out.chart.ascendant.rashi.western_name()
    );
    Ok(out)
}

/// Which divisional charts a pipeline builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Division factors, built in this order.
    pub vargas: Vec<u16>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            vargas: vec![1, 9, 10, 7, 12],
        }
    }
}

/// Build every divisional chart named in `config`.
pub fn divisional_charts(
    chart: &Chart,
    config: &ChartConfig,
) -> Result<Vec<DivisionalChart>, ChartError> {
    config
        .vargas
        .iter()
        .map(|&d| build_divisional_chart(chart, d))
        .collect()
}

/// Serialized chart input: an ascendant plus nine positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub ascendant: f64,
    pub positions: Vec<PlanetaryPosition>,
}

impl ChartInput {
    pub fn to_chart(&self) -> Result<Chart, ChartError> {
        Chart::new(self.ascendant, &self.positions)
    }
}

/// Cast a sidereal natal chart for an instant and location.
///
/// Every graha is requested from the provider; a missing body surfaces as
/// [`ChartError::Ephemeris`], never as a defaulted position.
pub fn cast_chart_at<P: AstronomicalProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<Chart, ChartError> {
    let asc = sidereal_ascendant(provider, jd_ut, latitude_deg, longitude_deg)?;
    let mut positions = Vec::with_capacity(9);
    for graha in ALL_GRAHAS {
        let pos = sidereal_position(provider, jd_ut, graha.body())?;
        positions.push(PlanetaryPosition {
            graha,
            longitude: pos.longitude,
            latitude: pos.latitude,
            speed: pos.speed,
            is_retrograde: pos.is_retrograde(),
        });
    }
    log::debug!("cast chart at JD {jd_ut}, ascendant {asc:.4}");
    Chart::new(asc, &positions)
}

/// Cast the natal chart for a validated birth moment.
pub fn cast_chart<P: AstronomicalProvider + ?Sized>(
    provider: &P,
    moment: &BirthMoment,
) -> Result<Chart, ChartError> {
    cast_chart_at(provider, moment.jd_ut, moment.latitude, moment.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_core::{Body, TableProvider};

    fn positions(lons: [f64; 9]) -> Vec<PlanetaryPosition> {
        ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(g, l)| PlanetaryPosition::new(*g, l))
            .collect()
    }

    fn sample() -> Chart {
        Chart::new(
            185.0,
            &positions([10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]),
        )
        .unwrap()
    }

    #[test]
    fn houses_from_ascendant_degree() {
        let c = sample();
        assert_eq!(c.ascendant().rashi, Rashi::Tula);
        assert_eq!(c.house(Graha::Surya), 7);
        assert_eq!(c.house(Graha::Guru), 1);
        assert_eq!(c.house(Graha::Buddh), 12);
    }

    #[test]
    fn longitudes_normalized() {
        let mut p = positions([370.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
        p[1].longitude = -20.0;
        let c = Chart::new(-10.0, &p).unwrap();
        assert!((c.longitude(Graha::Surya) - 10.0).abs() < 1e-10);
        assert!((c.longitude(Graha::Chandra) - 340.0).abs() < 1e-10);
        assert!((c.ascendant().longitude - 350.0).abs() < 1e-10);
    }

    #[test]
    fn missing_graha_is_incomplete() {
        let mut p = positions([0.0; 9]);
        p.retain(|x| x.graha != Graha::Ketu);
        assert_eq!(
            Chart::new(0.0, &p),
            Err(ChartError::IncompleteChart(Graha::Ketu))
        );
    }

    #[test]
    fn duplicate_and_nan_rejected() {
        let mut p = positions([0.0; 9]);
        p.push(PlanetaryPosition::new(Graha::Surya, 1.0));
        assert!(matches!(Chart::new(0.0, &p), Err(ChartError::InvalidInput(_))));

        let mut p = positions([0.0; 9]);
        p[3].longitude = f64::NAN;
        assert!(matches!(Chart::new(0.0, &p), Err(ChartError::InvalidInput(_))));
        assert!(Chart::new(f64::NAN, &positions([0.0; 9])).is_err());
    }

    #[test]
    fn house_lords_whole_sign() {
        let c = sample();
        assert_eq!(c.house_sign(1), Rashi::Tula);
        assert_eq!(c.house_lord(1), Graha::Shukra);
        assert_eq!(c.house_lord(10), Graha::Chandra);
        assert_eq!(c.house_sign(7), Rashi::Mesha);
    }

    #[test]
    fn negative_speed_marks_retrograde() {
        let mut p = positions([0.0; 9]);
        p[6] = p[6].with_speed(-0.03);
        let c = Chart::new(0.0, &p).unwrap();
        assert!(c.is_retrograde(Graha::Shani));
        assert!(!c.is_retrograde(Graha::Guru));
    }

    #[test]
    fn divisional_chart_is_projection() {
        let c = sample();
        let d9 = build_divisional_chart(&c, 9).unwrap();
        assert_eq!(d9.division(), 9);
        // Mars at 5 deg Karka: second navamsa -> Simha
        assert_eq!(d9.chart().rashi(Graha::Mangal), Rashi::Simha);
        // natal untouched
        assert_eq!(c.rashi(Graha::Mangal), Rashi::Karka);
        let d1 = build_divisional_chart(&c, 1).unwrap();
        assert_eq!(d1.chart(), &c);
    }

    #[test]
    fn default_vargas_built_in_order() {
        let out = divisional_charts(&sample(), &ChartConfig::default()).unwrap();
        let codes: Vec<u16> = out.iter().map(|d| d.division()).collect();
        assert_eq!(codes, vec![1, 9, 10, 7, 12]);
    }

    #[test]
    fn unsupported_division() {
        assert_eq!(
            build_divisional_chart(&sample(), 11).unwrap_err(),
            ChartError::UnsupportedDivision(11)
        );
    }

    #[test]
    fn chart_input_json() {
        let json = r#"{"ascendant": 185.0, "positions": [
            {"graha": "Sun", "longitude": 10.0},
            {"graha": "Moon", "longitude": 40.0},
            {"graha": "Mars", "longitude": 95.0},
            {"graha": "Mercury", "longitude": 150.0},
            {"planet": "Jupiter", "longitude": 200.0},
            {"graha": "Venus", "longitude": 250.0},
            {"graha": "Saturn", "longitude": 300.0, "isRetrograde": true},
            {"graha": "Rahu", "longitude": 340.0},
            {"graha": "Ketu", "longitude": 160.0}
        ]}"#;
        let input: ChartInput = serde_json::from_str(json).unwrap();
        let c = input.to_chart().unwrap();
        assert_eq!(c, {
            let mut p = positions([10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0]);
            p[6] = p[6].retrograde();
            Chart::new(185.0, &p).unwrap()
        });
    }

    #[test]
    fn cast_from_table_provider() {
        let mut t = TableProvider::new(185.0);
        for (g, l) in ALL_GRAHAS
            .iter()
            .zip([10.0, 40.0, 95.0, 150.0, 200.0, 250.0, 300.0, 340.0, 160.0])
        {
            t = t.with_longitude(g.body(), l);
        }
        let c = cast_chart_at(&t, 2_451_545.0, 28.6, 77.2).unwrap();
        assert_eq!(c, sample());
    }

    #[test]
    fn cast_propagates_missing_body() {
        let t = TableProvider::new(185.0).with_longitude(Body::Sun, 10.0);
        assert!(matches!(
            cast_chart_at(&t, 2_451_545.0, 28.6, 77.2),
            Err(ChartError::Ephemeris(_))
        ));
    }
}
