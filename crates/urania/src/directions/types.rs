use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aspects::AspectCatalogue;
use crate::chart::ids;
use crate::directions::terms::{TermEntry, TermTable};
use crate::equatorial::{EclipticProjection, EquatorialCoords, DEFAULT_OBLIQUITY};
use crate::error::{Result, UraniaError};
use crate::zodiac::Sign;

/// Directions with an arc at or above this are discarded.
pub const MAX_ARC: f64 = 100.0;

lazy_static::lazy_static! {
    static ref LABELS: AspectCatalogue = AspectCatalogue::standard();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Body,
    Term,
    Antiscia,
    ContraAntiscia,
    DexterAspect,
    SinisterAspect,
}

impl PointKind {
    fn code(self) -> char {
        match self {
            PointKind::Body => 'N',
            PointKind::Term => 'T',
            PointKind::Antiscia => 'A',
            PointKind::ContraAntiscia => 'C',
            PointKind::DexterAspect => 'D',
            PointKind::SinisterAspect => 'S',
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(PointKind::Body),
            "T" => Some(PointKind::Term),
            "A" => Some(PointKind::Antiscia),
            "C" => Some(PointKind::ContraAntiscia),
            "D" => Some(PointKind::DexterAspect),
            "S" => Some(PointKind::SinisterAspect),
            _ => None,
        }
    }
}

/// Parsed point code, as produced by [`DirectionPoint::code`].
///
/// Body ids may contain underscores, so the trailing aspect or sign is split
/// from the right.
#[derive(Debug, Clone, PartialEq)]
pub enum PointCode {
    Body { body: String, aspect: f64 },
    Term { body: String, sign: Sign },
    Antiscia { body: String },
    ContraAntiscia { body: String },
    Dexter { body: String, aspect: f64 },
    Sinister { body: String, aspect: f64 },
}

impl PointCode {
    pub fn kind(&self) -> PointKind {
        match self {
            PointCode::Body { .. } => PointKind::Body,
            PointCode::Term { .. } => PointKind::Term,
            PointCode::Antiscia { .. } => PointKind::Antiscia,
            PointCode::ContraAntiscia { .. } => PointKind::ContraAntiscia,
            PointCode::Dexter { .. } => PointKind::DexterAspect,
            PointCode::Sinister { .. } => PointKind::SinisterAspect,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            PointCode::Body { body, .. }
            | PointCode::Term { body, .. }
            | PointCode::Antiscia { body }
            | PointCode::ContraAntiscia { body }
            | PointCode::Dexter { body, .. }
            | PointCode::Sinister { body, .. } => body,
        }
    }
}

impl FromStr for PointCode {
    type Err = UraniaError;

    fn from_str(code: &str) -> Result<Self> {
        let invalid = |message: &str| UraniaError::InvalidPointCode {
            code: code.to_string(),
            message: message.to_string(),
        };
        let (prefix, rest) = code
            .split_once('_')
            .ok_or_else(|| invalid("missing separator"))?;
        let kind = PointKind::from_code(prefix).ok_or_else(|| invalid("unknown point kind"))?;
        if rest.is_empty() {
            return Err(invalid("missing body"));
        }

        let split_tail = |what: &str| match rest.rsplit_once('_') {
            Some((body, tail)) if !body.is_empty() && !tail.is_empty() => {
                Ok((body.to_string(), tail))
            }
            _ => Err(invalid(&format!("expected <body>_<{}>", what))),
        };
        let parse_aspect = |tail: &str| match tail.parse::<f64>() {
            Ok(aspect) if aspect.is_finite() => Ok(aspect),
            _ => Err(invalid("aspect is not a number")),
        };

        match kind {
            PointKind::Antiscia => Ok(PointCode::Antiscia {
                body: rest.to_string(),
            }),
            PointKind::ContraAntiscia => Ok(PointCode::ContraAntiscia {
                body: rest.to_string(),
            }),
            PointKind::Term => {
                let (body, tail) = split_tail("sign")?;
                let sign = tail.parse::<Sign>().map_err(|e| invalid(&e))?;
                Ok(PointCode::Term { body, sign })
            }
            PointKind::Body => {
                let (body, tail) = split_tail("aspect")?;
                Ok(PointCode::Body {
                    body,
                    aspect: parse_aspect(tail)?,
                })
            }
            PointKind::DexterAspect => {
                let (body, tail) = split_tail("aspect")?;
                Ok(PointCode::Dexter {
                    body,
                    aspect: parse_aspect(tail)?,
                })
            }
            PointKind::SinisterAspect => {
                let (body, tail) = split_tail("aspect")?;
                Ok(PointCode::Sinister {
                    body,
                    aspect: parse_aspect(tail)?,
                })
            }
        }
    }
}

impl fmt::Display for PointCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind().code();
        match self {
            PointCode::Term { body, sign } => write!(f, "{}_{}_{}", kind, body, sign),
            PointCode::Antiscia { body } | PointCode::ContraAntiscia { body } => {
                write!(f, "{}_{}", kind, body)
            }
            PointCode::Body { body, aspect }
            | PointCode::Dexter { body, aspect }
            | PointCode::Sinister { body, aspect } => write!(f, "{}_{}_{}", kind, body, aspect),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionType {
    /// In mundo: real ecliptic latitudes
    Mundane,
    /// In zodiaco: latitudes forced to zero
    Zodiacal,
}

/// Promissor or significator of a primary direction.
///
/// Both equatorial projections are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionPoint {
    kind: PointKind,
    body: String,
    aspect: f64,
    term_sign: Option<Sign>,
    lat: f64,
    lon: f64,
    mundane: EquatorialCoords,
    zodiacal: EquatorialCoords,
}

impl DirectionPoint {
    pub fn new(
        kind: PointKind,
        body: &str,
        aspect: f64,
        term_sign: Option<Sign>,
        lat: f64,
        lon: f64,
        projection: &EclipticProjection,
    ) -> Self {
        let mundane = projection.to_equatorial(lon, lat);
        let zodiacal = if lat != 0.0 {
            projection.to_equatorial(lon, 0.0)
        } else {
            mundane
        };
        Self {
            kind,
            body: body.to_string(),
            aspect,
            term_sign,
            lat,
            lon,
            mundane,
            zodiacal,
        }
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }

    /// Chart point this one is derived from.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Aspect offset; zero for terms and mirrors.
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn term_sign(&self) -> Option<Sign> {
        self.term_sign
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn coords(&self, direction_type: DirectionType) -> EquatorialCoords {
        match direction_type {
            DirectionType::Mundane => self.mundane,
            DirectionType::Zodiacal => self.zodiacal,
        }
    }

    /// Compact identifier such as `N_sun_0`, `D_mars_90` or `T_venus_aries`.
    ///
    /// Parses back with [`PointCode`].
    pub fn code(&self) -> String {
        let kind = self.kind.code();
        match self.kind {
            PointKind::Term => match self.term_sign {
                Some(sign) => format!("{}_{}_{}", kind, self.body, sign),
                None => format!("{}_{}", kind, self.body),
            },
            PointKind::Antiscia | PointKind::ContraAntiscia => format!("{}_{}", kind, self.body),
            PointKind::Body | PointKind::DexterAspect | PointKind::SinisterAspect => {
                format!("{}_{}_{}", kind, self.body, self.aspect)
            }
        }
    }

    /// Human readable description, naming aspects from `labels`.
    pub fn describe(&self, labels: &AspectCatalogue) -> String {
        let aspect_name = || {
            labels
                .name_of(self.aspect)
                .map(capitalize_first)
                .unwrap_or_else(|| format!("{}°", self.aspect))
        };
        match self.kind {
            PointKind::Term => match self.term_sign {
                Some(sign) => format!("Terms of {} in {}", self.body, sign),
                None => format!("Terms of {}", self.body),
            },
            PointKind::DexterAspect => format!("Dexter {} of {}", aspect_name(), self.body),
            PointKind::SinisterAspect => format!("Sinister {} of {}", aspect_name(), self.body),
            PointKind::Body if self.aspect != 0.0 => format!("{} of {}", aspect_name(), self.body),
            PointKind::Body => self.body.clone(),
            PointKind::Antiscia => format!("Antiscia of {}", self.body),
            PointKind::ContraAntiscia => format!("Contra-antiscia of {}", self.body),
        }
    }
}

impl fmt::Display for DirectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&LABELS))
    }
}

/// Mundane and zodiacal arcs between one promissor and one significator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPair {
    pub mundane: f64,
    pub zodiacal: f64,
}

impl ArcPair {
    pub fn get(&self, direction_type: DirectionType) -> f64 {
        match direction_type {
            DirectionType::Mundane => self.mundane,
            DirectionType::Zodiacal => self.zodiacal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub arc: f64,
    pub promissor: DirectionPoint,
    pub significator: DirectionPoint,
    pub direction_type: DirectionType,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.direction_type {
            DirectionType::Mundane => "Mundane",
            DirectionType::Zodiacal => "Zodiacal",
        };
        write!(
            f,
            "{:.4} - {} to {} ({})",
            self.arc, self.promissor, self.significator, kind
        )
    }
}

/// Which term table feeds the term promissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermVariant {
    #[default]
    Egyptian,
    Custom,
}

/// Settings for primary direction tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectionSettings {
    /// Exclusive ceiling on arcs kept in a table
    pub max_arc: f64,
    pub obliquity: f64,
    /// Bodies directed to, at their own position
    pub significators: Vec<String>,
    /// Chart angles directed to
    pub angles: Vec<String>,
    /// Bodies whose aspects, mirrors and positions are directed
    pub promissors: Vec<String>,
    pub terms: TermVariant,
    pub custom_terms: Vec<TermEntry>,
}

impl Default for DirectionSettings {
    fn default() -> Self {
        let bodies: Vec<String> = [
            ids::SUN,
            ids::MOON,
            ids::MERCURY,
            ids::VENUS,
            ids::MARS,
            ids::JUPITER,
            ids::SATURN,
            ids::PARS_FORTUNA,
            ids::NORTH_NODE,
            ids::SOUTH_NODE,
        ]
        .iter()
        .map(|id| id.to_string())
        .collect();

        Self {
            max_arc: MAX_ARC,
            obliquity: DEFAULT_OBLIQUITY,
            significators: bodies.clone(),
            angles: vec![ids::ASC.to_string(), ids::MC.to_string()],
            promissors: bodies,
            terms: TermVariant::Egyptian,
            custom_terms: Vec::new(),
        }
    }
}

impl DirectionSettings {
    pub fn projection(&self) -> EclipticProjection {
        EclipticProjection::new(self.obliquity)
    }

    /// Resolves and validates the configured term table.
    pub fn term_table(&self) -> Result<TermTable> {
        match self.terms {
            TermVariant::Egyptian => Ok(TermTable::egyptian()),
            TermVariant::Custom => TermTable::new(self.custom_terms.clone()),
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
