use serde::{Deserialize, Serialize};

use crate::angle;
use crate::error::{Result, UraniaError};
use crate::zodiac::Sign;

use super::ids;

/// Below this speed magnitude (degrees/day) a body counts as stationary.
pub const STATIONARY_SPEED: f64 = 0.0003;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCategory {
    Luminary,
    Planet,
    Node,
    CalculatedPoint,
    Angle,
    HouseCusp,
}

impl PointCategory {
    /// Bodies, nodes and calculated points carry their own speed; angles and cusps are fixed.
    pub fn is_moving(self) -> bool {
        !matches!(self, PointCategory::Angle | PointCategory::HouseCusp)
    }
}

/// Own motion of a point along the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    Direct,
    Retrograde,
    Stationary,
}

/// A resolved position on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub id: String,
    pub category: PointCategory,
    /// Ecliptic longitude in degrees, [0, 360)
    pub lon: f64,
    /// Ecliptic latitude in degrees
    #[serde(default)]
    pub lat: f64,
    /// Longitudinal speed in degrees per day. Required for moving categories.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Maximum deviation tolerated for a major aspect
    #[serde(default)]
    pub orb: f64,
}

impl ChartPoint {
    pub fn new(
        id: impl Into<String>,
        category: PointCategory,
        lon: f64,
        lat: f64,
        speed: Option<f64>,
        orb: f64,
    ) -> Result<Self> {
        let point = Self {
            id: id.into(),
            category,
            lon: angle::normalize(lon),
            lat,
            speed,
            orb,
        };
        point.validate()?;
        Ok(point)
    }

    /// Builds a point for a well-known id, taking category and orb from the defaults.
    pub fn body(id: &str, lon: f64, lat: f64, speed: f64) -> Result<Self> {
        Self::new(id, ids::category_of(id), lon, lat, Some(speed), ids::default_orb(id))
    }

    /// Builds a chart angle (ascendant, midheaven, ...) at a longitude.
    pub fn angle(id: &str, lon: f64) -> Result<Self> {
        Self::new(id, PointCategory::Angle, lon, 0.0, Some(0.0), 0.0)
    }

    /// Checks the fields the engines rely on.
    pub fn validate(&self) -> Result<()> {
        if !self.lon.is_finite() || !self.lat.is_finite() {
            return Err(UraniaError::degenerate(&self.id, "non-finite coordinates"));
        }
        if !self.orb.is_finite() || self.orb < 0.0 {
            return Err(UraniaError::degenerate(
                &self.id,
                "orb capacity must be finite and non-negative",
            ));
        }
        match self.speed {
            Some(speed) if !speed.is_finite() => {
                Err(UraniaError::degenerate(&self.id, "non-finite speed"))
            }
            None if self.category.is_moving() => {
                Err(UraniaError::degenerate(&self.id, "moving point without speed"))
            }
            _ => Ok(()),
        }
    }

    /// Signed longitudinal speed; fixed categories report zero.
    pub fn lon_speed(&self) -> f64 {
        if self.category.is_moving() {
            self.speed.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    pub fn is_moving(&self) -> bool {
        self.category.is_moving()
    }

    pub fn sign(&self) -> Sign {
        Sign::from_longitude(self.lon)
    }

    /// Longitude within the sign, [0, 30).
    pub fn sign_lon(&self) -> f64 {
        angle::normalize(self.lon) % 30.0
    }

    pub fn motion(&self) -> Motion {
        self.motion_with(STATIONARY_SPEED)
    }

    pub fn motion_with(&self, stationary_speed: f64) -> Motion {
        let speed = self.lon_speed();
        if speed.abs() < stationary_speed {
            Motion::Stationary
        } else if speed > 0.0 {
            Motion::Direct
        } else {
            Motion::Retrograde
        }
    }

    /// Copy of this point moved to another longitude.
    pub fn relocate(&self, lon: f64) -> Self {
        Self {
            lon: angle::normalize(lon),
            ..self.clone()
        }
    }

    /// Mirror across the solstitial (Cancer/Capricorn) axis.
    pub fn antiscia(&self) -> Self {
        Self {
            category: PointCategory::CalculatedPoint,
            speed: Some(self.lon_speed()),
            ..self.relocate(360.0 - self.lon + 180.0)
        }
    }

    /// Mirror across the equinoctial (Aries/Libra) axis.
    pub fn contra_antiscia(&self) -> Self {
        Self {
            category: PointCategory::CalculatedPoint,
            speed: Some(self.lon_speed()),
            ..self.relocate(360.0 - self.lon)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults() {
        let sun = ChartPoint::body(ids::SUN, 352.79, 0.0, 0.9976).unwrap();
        assert_eq!(sun.category, PointCategory::Luminary);
        assert_eq!(sun.orb, 15.0);
        assert_eq!(sun.sign(), Sign::Pisces);
        assert!((sun.sign_lon() - 22.79).abs() < 1e-9);
    }

    #[test]
    fn test_motion() {
        let jupiter = ChartPoint::body(ids::JUPITER, 133.6, 0.98, -0.079).unwrap();
        assert_eq!(jupiter.motion(), Motion::Retrograde);
        let still = ChartPoint::body(ids::SATURN, 244.9, 2.0, 0.0001).unwrap();
        assert_eq!(still.motion(), Motion::Stationary);
        let node = ChartPoint::body(ids::NORTH_NODE, 191.1, 0.0, -0.05).unwrap();
        assert_eq!(node.lon_speed(), -0.05);
        assert_eq!(node.motion(), Motion::Retrograde);
        let asc =
            ChartPoint::new(ids::ASC, PointCategory::Angle, 10.0, 0.0, Some(1.0), 0.0).unwrap();
        assert_eq!(asc.lon_speed(), 0.0);
    }

    #[test]
    fn test_missing_speed_is_degenerate() {
        let err = ChartPoint::new("mars", PointCategory::Planet, 10.0, 0.0, None, 8.0).unwrap_err();
        assert!(matches!(err, UraniaError::DegenerateInput { .. }));
        assert!(ChartPoint::new("asc", PointCategory::Angle, 10.0, 0.0, None, 0.0).is_ok());
        let err = ChartPoint::new("syzygy", PointCategory::CalculatedPoint, 10.0, 0.0, None, 0.0);
        assert!(matches!(err, Err(UraniaError::DegenerateInput { .. })));
    }

    #[test]
    fn test_mirrors() {
        let venus = ChartPoint::body(ids::VENUS, 25.5, -0.1, 1.2).unwrap();
        assert!((venus.antiscia().lon - 154.5).abs() < 1e-9);
        assert!((venus.contra_antiscia().lon - 334.5).abs() < 1e-9);
        assert_eq!(venus.antiscia().lat, -0.1);
        assert_eq!(venus.antiscia().category, PointCategory::CalculatedPoint);
        let asc = ChartPoint::angle(ids::ASC, 100.0).unwrap();
        assert!(asc.antiscia().validate().is_ok());
    }
}
