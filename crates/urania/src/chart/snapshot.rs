use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::angle;
use crate::equatorial::EclipticProjection;
use crate::error::{Result, UraniaError};

use super::ids;
use super::types::ChartPoint;

/// Immutable set of resolved chart points for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    /// Point id -> point
    pub points: BTreeMap<String, ChartPoint>,
    /// Geographic latitude in degrees, north positive
    pub latitude: f64,
    /// Right ascension of the midheaven. Projected from the `mc` point when absent.
    #[serde(default)]
    pub meridian_ra: Option<f64>,
}

impl ChartSnapshot {
    pub fn new(latitude: f64) -> Self {
        Self {
            points: BTreeMap::new(),
            latitude,
            meridian_ra: None,
        }
    }

    /// Builds a snapshot from points, rejecting duplicated ids.
    pub fn from_points(
        latitude: f64,
        points: impl IntoIterator<Item = ChartPoint>,
    ) -> Result<Self> {
        let mut snapshot = Self::new(latitude);
        for point in points {
            point.validate()?;
            if snapshot.points.contains_key(&point.id) {
                return Err(UraniaError::degenerate(&point.id, "duplicated point id"));
            }
            snapshot.insert(point);
        }
        Ok(snapshot)
    }

    /// Parses and validates a snapshot serialized as JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut snapshot: ChartSnapshot =
            serde_json::from_str(json).map_err(|e| UraniaError::InvalidJson(e.to_string()))?;
        snapshot.validate()?;
        for (id, point) in snapshot.points.iter_mut() {
            if *id != point.id {
                let message = format!("stored under a different id than {}", point.id);
                return Err(UraniaError::degenerate(id, message));
            }
            point.lon = angle::normalize(point.lon);
        }
        Ok(snapshot)
    }

    pub fn with_meridian_ra(mut self, ra: f64) -> Self {
        self.meridian_ra = Some(ra);
        self
    }

    /// Adds or replaces a point, wrapping its longitude into [0, 360).
    pub fn insert(&mut self, mut point: ChartPoint) {
        point.lon = angle::normalize(point.lon);
        self.points.insert(point.id.clone(), point);
    }

    pub fn get(&self, id: &str) -> Result<&ChartPoint> {
        self.points
            .get(id)
            .ok_or_else(|| UraniaError::not_found("chart", id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.points.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points.values()
    }

    /// Validates every point and the geographic latitude.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || self.latitude.abs() > 90.0 {
            return Err(UraniaError::degenerate("chart", "latitude must be within [-90, 90]"));
        }
        self.points.values().try_for_each(ChartPoint::validate)
    }

    /// Right ascension of the upper meridian.
    pub fn meridian_ra(&self, projection: &EclipticProjection) -> Result<f64> {
        if let Some(ra) = self.meridian_ra {
            return Ok(ra);
        }
        let mc = self.get(ids::MC)?;
        Ok(projection.to_equatorial(mc.lon, mc.lat).ra)
    }
}
