//! Aspect angle catalogue.
//!
//! The order of a candidate list passed to the calculator is its priority;
//! the catalogue only supplies names and the major/minor class.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UraniaError};

pub const CONJUNCTION: f64 = 0.0;
pub const SEXTILE: f64 = 60.0;
pub const SQUARE: f64 = 90.0;
pub const TRINE: f64 = 120.0;
pub const OPPOSITION: f64 = 180.0;

/// Ptolemaic aspects in the usual priority order.
pub const MAJOR_ASPECTS: &[f64] = &[CONJUNCTION, SEXTILE, SQUARE, TRINE, OPPOSITION];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectClass {
    Major,
    Minor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub angle: f64,
    pub name: String,
    pub class: AspectClass,
}

impl AspectDefinition {
    pub fn new(angle: f64, name: &str, class: AspectClass) -> Self {
        Self {
            angle,
            name: name.to_string(),
            class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectCatalogue {
    definitions: Vec<AspectDefinition>,
}

impl Default for AspectCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}

impl AspectCatalogue {
    pub fn new(definitions: Vec<AspectDefinition>) -> Result<Self> {
        let catalogue = Self { definitions };
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Major aspects plus the conventional minor set.
    pub fn standard() -> Self {
        use AspectClass::{Major, Minor};
        Self {
            definitions: vec![
                AspectDefinition::new(0.0, "conjunction", Major),
                AspectDefinition::new(60.0, "sextile", Major),
                AspectDefinition::new(90.0, "square", Major),
                AspectDefinition::new(120.0, "trine", Major),
                AspectDefinition::new(180.0, "opposition", Major),
                AspectDefinition::new(30.0, "semisextile", Minor),
                AspectDefinition::new(36.0, "semiquintile", Minor),
                AspectDefinition::new(45.0, "semisquare", Minor),
                AspectDefinition::new(72.0, "quintile", Minor),
                AspectDefinition::new(108.0, "sesquiquintile", Minor),
                AspectDefinition::new(135.0, "sesquisquare", Minor),
                AspectDefinition::new(144.0, "biquintile", Minor),
                AspectDefinition::new(150.0, "quincunx", Minor),
            ],
        }
    }

    /// Label table historically used when naming direction points.
    ///
    /// It maps 155 to biquintile and 144 to quincunx. Kept verbatim until the
    /// intended values are confirmed; prefer [`AspectCatalogue::standard`].
    pub fn direction_labels() -> Self {
        use AspectClass::{Major, Minor};
        Self {
            definitions: vec![
                AspectDefinition::new(0.0, "conjunction", Major),
                AspectDefinition::new(60.0, "sextile", Major),
                AspectDefinition::new(90.0, "square", Major),
                AspectDefinition::new(120.0, "trine", Major),
                AspectDefinition::new(180.0, "opposition", Major),
                AspectDefinition::new(30.0, "semisextile", Minor),
                AspectDefinition::new(36.0, "semiquintile", Minor),
                AspectDefinition::new(45.0, "semisquare", Minor),
                AspectDefinition::new(72.0, "quintile", Minor),
                AspectDefinition::new(108.0, "sesquiquintile", Minor),
                AspectDefinition::new(135.0, "sesquisquare", Minor),
                AspectDefinition::new(155.0, "biquintile", Minor),
                AspectDefinition::new(144.0, "quincunx", Minor),
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (i, def) in self.definitions.iter().enumerate() {
            if !def.angle.is_finite() || !(0.0..=180.0).contains(&def.angle) {
                return Err(UraniaError::InvalidAspectCatalogue {
                    message: format!("{} has angle {} outside [0, 180]", def.name, def.angle),
                });
            }
            if self.definitions[..i].iter().any(|other| other.angle == def.angle) {
                return Err(UraniaError::InvalidAspectCatalogue {
                    message: format!("angle {} is listed twice", def.angle),
                });
            }
            if def.name == "biquintile" && def.angle != 144.0 {
                log::warn!(
                    "Aspect catalogue maps biquintile to {} instead of 144; confirm before relying on it",
                    def.angle
                );
            }
        }
        Ok(())
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn get(&self, angle: f64) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|def| def.angle == angle)
    }

    pub fn name_of(&self, angle: f64) -> Option<&str> {
        self.get(angle).map(|def| def.name.as_str())
    }

    /// Class of an angle. Angles missing from the catalogue are major only
    /// when they are one of [`MAJOR_ASPECTS`].
    pub fn class_of(&self, angle: f64) -> AspectClass {
        match self.get(angle) {
            Some(def) => def.class,
            None if MAJOR_ASPECTS.contains(&angle) => AspectClass::Major,
            None => AspectClass::Minor,
        }
    }

    pub fn is_major(&self, angle: f64) -> bool {
        self.class_of(angle) == AspectClass::Major
    }

    /// All angles in catalogue order.
    pub fn angles(&self) -> Vec<f64> {
        self.definitions.iter().map(|def| def.angle).collect()
    }

    pub fn majors(&self) -> Vec<f64> {
        self.by_class(AspectClass::Major)
    }

    pub fn minors(&self) -> Vec<f64> {
        self.by_class(AspectClass::Minor)
    }

    fn by_class(&self, class: AspectClass) -> Vec<f64> {
        self.definitions
            .iter()
            .filter(|def| def.class == class)
            .map(|def| def.angle)
            .collect()
    }
}
