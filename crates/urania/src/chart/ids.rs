//! Well-known chart point identifiers and their default orb capacities.

use super::types::PointCategory;

pub const SUN: &str = "sun";
pub const MOON: &str = "moon";
pub const MERCURY: &str = "mercury";
pub const VENUS: &str = "venus";
pub const MARS: &str = "mars";
pub const JUPITER: &str = "jupiter";
pub const SATURN: &str = "saturn";
pub const URANUS: &str = "uranus";
pub const NEPTUNE: &str = "neptune";
pub const PLUTO: &str = "pluto";
pub const CHIRON: &str = "chiron";
pub const NORTH_NODE: &str = "north_node";
pub const SOUTH_NODE: &str = "south_node";
pub const SYZYGY: &str = "syzygy";
pub const PARS_FORTUNA: &str = "pars_fortuna";
pub const ASC: &str = "asc";
pub const MC: &str = "mc";
pub const DESC: &str = "desc";
pub const IC: &str = "ic";

/// The seven traditional planets, luminaries included.
pub const SEVEN_PLANETS: &[&str] = &[SUN, MOON, MERCURY, VENUS, MARS, JUPITER, SATURN];

/// Orb capacity per body, in degrees.
const DEFAULT_ORBS: &[(&str, f64)] = &[
    (SUN, 15.0),
    (MOON, 12.0),
    (MERCURY, 7.0),
    (VENUS, 7.0),
    (MARS, 8.0),
    (JUPITER, 9.0),
    (SATURN, 9.0),
    (URANUS, 5.0),
    (NEPTUNE, 5.0),
    (PLUTO, 5.0),
    (CHIRON, 5.0),
    (NORTH_NODE, 12.0),
    (SOUTH_NODE, 12.0),
    (SYZYGY, 0.0),
    (PARS_FORTUNA, 0.0),
];

/// Default orb capacity of a point. Angles, cusps and unknown ids get zero.
pub fn default_orb(id: &str) -> f64 {
    DEFAULT_ORBS
        .iter()
        .find(|(body, _)| *body == id)
        .map(|(_, orb)| *orb)
        .unwrap_or(0.0)
}

/// Category a well-known id belongs to. Anything unrecognised is treated as a planet.
pub fn category_of(id: &str) -> PointCategory {
    match id {
        SUN | MOON => PointCategory::Luminary,
        NORTH_NODE | SOUTH_NODE => PointCategory::Node,
        SYZYGY | PARS_FORTUNA => PointCategory::CalculatedPoint,
        ASC | MC | DESC | IC => PointCategory::Angle,
        _ if id.starts_with("house") => PointCategory::HouseCusp,
        _ => PointCategory::Planet,
    }
}
