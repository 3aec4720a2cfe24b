//! Boundary to the ephemeris provider.
//!
//! Zodiac mode and topocentric correction travel inside each request, so a
//! provider with global state can serialize resolution per configuration.
//! Nothing in this crate reads or mutates provider state.

pub mod types;

pub use types::{EphemerisSettings, GeoLocation, ResolveRequest, ZodiacMode};

use crate::chart::ChartSnapshot;
use crate::error::{Result, UraniaError};

/// Resolves chart positions for a moment, place and configuration.
pub trait PositionSource {
    fn resolve(&self, request: &ResolveRequest) -> Result<ChartSnapshot>;
}

/// Locations closer than this (degrees) count as the same place.
const LOCATION_TOLERANCE: f64 = 1e-6;

/// Positions resolved ahead of time for one place under one configuration.
///
/// Houses and angles depend on the observer, so a request for any other
/// location is refused rather than answered with the stored positions.
#[derive(Debug, Clone)]
pub struct FixedPositions {
    settings: EphemerisSettings,
    location: GeoLocation,
    snapshot: ChartSnapshot,
}

impl FixedPositions {
    pub fn new(
        settings: EphemerisSettings,
        location: GeoLocation,
        snapshot: ChartSnapshot,
    ) -> Self {
        Self {
            settings,
            location,
            snapshot,
        }
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }
}

impl PositionSource for FixedPositions {
    fn resolve(&self, request: &ResolveRequest) -> Result<ChartSnapshot> {
        if request.settings != self.settings {
            return Err(UraniaError::not_found(
                "fixed positions",
                format!("{:?}", request.settings),
            ));
        }
        let GeoLocation { lat, lon } = request.location;
        if (lat - self.location.lat).abs() > LOCATION_TOLERANCE
            || (lon - self.location.lon).abs() > LOCATION_TOLERANCE
        {
            return Err(UraniaError::not_found(
                "fixed positions",
                format!("location {lat}, {lon}"),
            ));
        }
        Ok(self.snapshot.clone())
    }
}
