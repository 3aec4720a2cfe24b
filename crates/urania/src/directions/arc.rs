//! Arc of direction by the proportional semi-arc method.

use crate::angle;
use crate::equatorial::{self, DiurnalArcs, EquatorialCoords};

/// Arc of direction from a promissor to a significator.
///
/// The significator's position decides the frame: above the horizon the
/// midheaven and diurnal arcs are used, below it the opposite meridian and
/// nocturnal arcs.
pub fn arc_of_direction(
    promissor: EquatorialCoords,
    significator: EquatorialCoords,
    mc_ra: f64,
    lat: f64,
) -> f64 {
    let p_arcs = equatorial::diurnal_arcs(promissor.decl, lat);
    let s_arcs = equatorial::diurnal_arcs(significator.decl, lat);
    let above = equatorial::is_above_horizon(significator.ra, significator.decl, mc_ra, lat);
    proportional_arc(promissor.ra, p_arcs, significator.ra, s_arcs, above, mc_ra)
}

/// Core of [`arc_of_direction`] once arcs and horizon side are known.
pub fn proportional_arc(
    p_ra: f64,
    p_arcs: DiurnalArcs,
    s_ra: f64,
    s_arcs: DiurnalArcs,
    significator_above: bool,
    mc_ra: f64,
) -> f64 {
    let (meridian_ra, p_arc, s_arc) = if significator_above {
        (mc_ra, p_arcs.diurnal, s_arcs.diurnal)
    } else {
        (angle::normalize(mc_ra + 180.0), p_arcs.nocturnal, s_arcs.nocturnal)
    };

    let mut p_dist = angle::closest_distance(meridian_ra, p_ra);
    let s_dist = angle::closest_distance(meridian_ra, s_ra);

    // The promissor must trail the significator in primary motion
    if p_dist < s_dist {
        p_dist += 360.0;
    }

    let s_prop = s_dist / (s_arc / 2.0);
    let p_prop = p_dist / (p_arc / 2.0);
    (p_prop - s_prop) * (p_arc / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_arc_scenario() {
        let arcs = DiurnalArcs {
            diurnal: 90.0,
            nocturnal: 270.0,
        };
        let arc = proportional_arc(40.0, arcs, 10.0, arcs, true, 0.0);
        assert!((arc - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_promissor_behind_wraps() {
        let arcs = DiurnalArcs {
            diurnal: 180.0,
            nocturnal: 180.0,
        };
        let arc = proportional_arc(5.0, arcs, 10.0, arcs, true, 0.0);
        assert!((arc - 355.0).abs() < 1e-9);
    }

    #[test]
    fn test_below_horizon_uses_opposite_meridian() {
        let p_arcs = DiurnalArcs {
            diurnal: 200.0,
            nocturnal: 160.0,
        };
        let s_arcs = DiurnalArcs {
            diurnal: 180.0,
            nocturnal: 180.0,
        };
        // Meridian at 180: s_dist = 10, p_dist = 30
        let arc = proportional_arc(210.0, p_arcs, 190.0, s_arcs, false, 0.0);
        let expected = (30.0 / 80.0 - 10.0 / 90.0) * 80.0;
        assert!((arc - expected).abs() < 1e-9);
    }

    #[test]
    fn test_equator_arc_is_ra_difference() {
        let p = EquatorialCoords { ra: 50.0, decl: 0.0 };
        let s = EquatorialCoords { ra: 20.0, decl: 0.0 };
        let arc = arc_of_direction(p, s, 0.0, 45.0);
        assert!((arc - 30.0).abs() < 1e-9);
    }
}
