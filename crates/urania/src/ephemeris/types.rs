use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum ZodiacMode {
    #[default]
    Tropical,
    Sidereal { ayanamsa: String },
}

/// Provider configuration a set of positions must be resolved under.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EphemerisSettings {
    pub zodiac: ZodiacMode,
    pub topocentric: bool,
}

/// One request for chart positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Moment as a Julian day (UT)
    pub julian_day: f64,
    pub location: GeoLocation,
    pub settings: EphemerisSettings,
}
