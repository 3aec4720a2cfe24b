//! TOML configuration for both engines.
//!
//! ```toml
//! [aspects]
//! active_policy = "conjunctions_only"
//!
//! [orbs]
//! sun = 17
//!
//! [directions]
//! max_arc = 90
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::aspects::AspectSettings;
use crate::chart::{ids, ChartPoint, ChartSnapshot};
use crate::directions::DirectionSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub aspects: AspectSettings,
    /// Orb capacity overrides by point id
    pub orbs: BTreeMap<String, f64>,
    pub directions: DirectionSettings,
}

impl Settings {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse settings: {e}"))?;
        settings.validate()?;
        log::debug!(
            "Loaded settings: {} aspect definitions, {} orb overrides, max arc {}",
            settings.aspects.catalogue.definitions().len(),
            settings.orbs.len(),
            settings.directions.max_arc
        );
        Ok(settings)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Checks values that deserialization alone cannot.
    pub fn validate(&self) -> anyhow::Result<()> {
        let aspects = &self.aspects;
        for (name, value) in [
            ("aspects.exact_orb", aspects.exact_orb),
            ("aspects.minor_orb", aspects.minor_orb),
            ("aspects.stationary_speed", aspects.stationary_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        aspects.catalogue.validate()?;

        if let Some((id, orb)) = self.orbs.iter().find(|(_, orb)| !orb.is_finite() || **orb < 0.0) {
            anyhow::bail!("orbs.{} must be a non-negative number, got {}", id, orb);
        }

        let directions = &self.directions;
        if !directions.max_arc.is_finite() || directions.max_arc <= 0.0 {
            anyhow::bail!("directions.max_arc must be positive, got {}", directions.max_arc);
        }
        if !directions.obliquity.is_finite() {
            anyhow::bail!("directions.obliquity must be finite");
        }
        directions.term_table()?;
        Ok(())
    }

    /// Configured orb capacity of a point, falling back to the built-in table.
    pub fn orb_for(&self, id: &str) -> f64 {
        self.orbs
            .get(id)
            .copied()
            .unwrap_or_else(|| ids::default_orb(id))
    }

    /// Builds a point for a well-known id with the configured orb.
    pub fn point(
        &self,
        id: &str,
        lon: f64,
        lat: f64,
        speed: f64,
    ) -> crate::error::Result<ChartPoint> {
        let mut point = ChartPoint::body(id, lon, lat, speed)?;
        point.orb = self.orb_for(id);
        Ok(point)
    }

    /// Replaces the orb of every point that has an override.
    pub fn apply_orbs(&self, snapshot: &mut ChartSnapshot) {
        for (id, point) in snapshot.points.iter_mut() {
            if let Some(orb) = self.orbs.get(id) {
                point.orb = *orb;
            }
        }
    }
}
