//! Ecliptic to equatorial projection and horizon geometry.
//!
//! Arc values returned here are full diurnal/nocturnal arcs. The semi-arc
//! used by the direction engine is half of each.

use serde::{Deserialize, Serialize};

use crate::angle;

/// Mean obliquity of the ecliptic used when none is configured.
pub const DEFAULT_OBLIQUITY: f64 = 23.44;

/// Slack when testing a point against the horizon.
const HORIZON_TOLERANCE: f64 = 0.0003;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoords {
    /// Right ascension in degrees, [0, 360)
    pub ra: f64,
    /// Declination in degrees
    pub decl: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiurnalArcs {
    pub diurnal: f64,
    pub nocturnal: f64,
}

/// Projects ecliptic positions onto the equator for a fixed obliquity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticProjection {
    pub obliquity: f64,
}

impl Default for EclipticProjection {
    fn default() -> Self {
        Self::new(DEFAULT_OBLIQUITY)
    }
}

impl EclipticProjection {
    pub fn new(obliquity: f64) -> Self {
        Self { obliquity }
    }

    /// Converts ecliptic longitude/latitude to right ascension/declination.
    pub fn to_equatorial(&self, lon: f64, lat: f64) -> EquatorialCoords {
        let lambda = lon.to_radians();
        let beta = lat.to_radians();
        let eps = self.obliquity.to_radians();

        let sin_decl = beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin();
        let decl = sin_decl.clamp(-1.0, 1.0).asin();
        let ra = (lambda.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lambda.cos());

        EquatorialCoords {
            ra: angle::normalize(ra.to_degrees()),
            decl: decl.to_degrees(),
        }
    }
}

/// Ascensional difference of a declination at a geographic latitude.
///
/// Circumpolar and never-rising points saturate at ±90.
pub fn ascensional_difference(decl: f64, lat: f64) -> f64 {
    let x = decl.to_radians().tan() * lat.to_radians().tan();
    x.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Diurnal and nocturnal arcs of a declination at a geographic latitude.
pub fn diurnal_arcs(decl: f64, lat: f64) -> DiurnalArcs {
    let diurnal = 180.0 + 2.0 * ascensional_difference(decl, lat);
    DiurnalArcs {
        diurnal,
        nocturnal: 360.0 - diurnal,
    }
}

/// Whether an equatorial position is above the local horizon, given the
/// right ascension of the upper meridian.
pub fn is_above_horizon(ra: f64, decl: f64, mc_ra: f64, lat: f64) -> bool {
    let arcs = diurnal_arcs(decl, lat);
    let dist = angle::closest_distance(mc_ra, ra).abs();
    dist <= arcs.diurnal / 2.0 + HORIZON_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_equinox_and_solstice_points() {
        let proj = EclipticProjection::default();
        let aries = proj.to_equatorial(0.0, 0.0);
        assert!(close(aries.ra, 0.0));
        assert!(close(aries.decl, 0.0));

        let cancer = proj.to_equatorial(90.0, 0.0);
        assert!(close(cancer.ra, 90.0));
        assert!(close(cancer.decl, DEFAULT_OBLIQUITY));

        let libra = proj.to_equatorial(180.0, 0.0);
        assert!(close(libra.ra, 180.0));

        let capricorn = proj.to_equatorial(270.0, 0.0);
        assert!(close(capricorn.ra, 270.0));
        assert!(close(capricorn.decl, -DEFAULT_OBLIQUITY));
    }

    #[test]
    fn test_equator_arcs_are_even() {
        let arcs = diurnal_arcs(0.0, 38.5);
        assert!(close(arcs.diurnal, 180.0));
        assert!(close(arcs.nocturnal, 180.0));

        let arcs = diurnal_arcs(20.0, 0.0);
        assert!(close(arcs.diurnal, 180.0));
    }

    #[test]
    fn test_circumpolar_saturates() {
        let arcs = diurnal_arcs(80.0, 70.0);
        assert!(close(arcs.diurnal, 360.0));
        assert!(close(arcs.nocturnal, 0.0));
    }

    #[test]
    fn test_is_above_horizon() {
        assert!(is_above_horizon(10.0, 0.0, 0.0, 40.0));
        assert!(is_above_horizon(350.0, 0.0, 0.0, 40.0));
        assert!(!is_above_horizon(180.0, 0.0, 0.0, 40.0));
        // northern declinations stay up longer at northern latitudes
        assert!(is_above_horizon(95.0, 20.0, 0.0, 40.0));
        assert!(!is_above_horizon(95.0, -20.0, 0.0, 40.0));
    }
}
