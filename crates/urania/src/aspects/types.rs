use serde::{Deserialize, Serialize};

use crate::aspects::catalogue::AspectCatalogue;

/// Deviation under which an aspect counts as exact.
pub const EXACT_ORB: f64 = 0.3;
/// Fixed orb ceiling for minor aspects.
pub const MINOR_ORB: f64 = 3.0;

/// Aspect angle found between two points, if any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    None,
    Angle(f64),
}

impl AspectType {
    pub fn angle(self) -> Option<f64> {
        match self {
            AspectType::None => None,
            AspectType::Angle(angle) => Some(angle),
        }
    }

    pub fn is_none(self) -> bool {
        self == AspectType::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectDirection {
    Dexter,
    Sinister,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignCondition {
    Associate,
    Dissociate,
}

/// Temporal state of a point within an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMovement {
    Applicative,
    Separative,
    Exact,
    Stationary,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Active,
    Passive,
}

/// Which categories may initiate an aspect.
///
/// Nodes and calculated points never initiate under `Strict`. Under
/// `ConjunctionsOnly` nodes and the fortune point may initiate
/// conjunctions; the lunation point still never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivePolicy {
    #[default]
    Strict,
    ConjunctionsOnly,
}

/// One side of an aspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRole {
    pub id: String,
    /// Whether the orb fits this point's own orb capacity
    pub in_orb: bool,
    pub movement: AspectMovement,
}

impl AspectRole {
    pub(crate) fn idle(id: &str) -> Self {
        Self {
            id: id.to_string(),
            in_orb: false,
            movement: AspectMovement::None,
        }
    }
}

/// Outcome of evaluating two points against a candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectResult {
    pub aspect: AspectType,
    /// Deviation from the exact angle, always >= 0
    pub orb: f64,
    /// Signed separation from the active to the passive point
    pub separation: f64,
    pub direction: Option<AspectDirection>,
    pub condition: Option<SignCondition>,
    pub active: AspectRole,
    pub passive: AspectRole,
}

impl AspectResult {
    pub(crate) fn none(active_id: &str, passive_id: &str) -> Self {
        Self {
            aspect: AspectType::None,
            orb: 0.0,
            separation: 0.0,
            direction: None,
            condition: None,
            active: AspectRole::idle(active_id),
            passive: AspectRole::idle(passive_id),
        }
    }

    pub fn exists(&self) -> bool {
        !self.aspect.is_none()
    }

    /// Movement of the aspect as a whole.
    ///
    /// Follows the active point, except that a separation under 1 degree of orb
    /// is still reported as exact.
    pub fn movement(&self) -> AspectMovement {
        let movement = self.active.movement;
        if self.orb < 1.0 && movement == AspectMovement::Separative {
            AspectMovement::Exact
        } else {
            movement
        }
    }

    /// Both points hold the aspect within their own orb.
    pub fn mutual_aspect(&self) -> bool {
        self.active.in_orb && self.passive.in_orb
    }

    pub fn mutual_movement(&self) -> bool {
        self.active.movement == self.passive.movement
    }

    pub fn role_of(&self, id: &str) -> Option<(Role, &AspectRole)> {
        if self.active.id == id {
            Some((Role::Active, &self.active))
        } else if self.passive.id == id {
            Some((Role::Passive, &self.passive))
        } else {
            None
        }
    }

    pub fn in_orb(&self, id: &str) -> Option<bool> {
        self.role_of(id).map(|(_, role)| role.in_orb)
    }
}

/// An aspect between two named chart points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectPair {
    pub from: String,
    pub to: String,
    pub aspect: AspectResult,
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AspectSettings {
    pub exact_orb: f64,
    pub minor_orb: f64,
    pub stationary_speed: f64,
    pub active_policy: ActivePolicy,
    /// Whether a passive point without motion inherits the active point's movement
    pub static_passive_inherits: bool,
    pub catalogue: AspectCatalogue,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            exact_orb: EXACT_ORB,
            minor_orb: MINOR_ORB,
            stationary_speed: crate::chart::STATIONARY_SPEED,
            active_policy: ActivePolicy::Strict,
            static_passive_inherits: false,
            catalogue: AspectCatalogue::standard(),
        }
    }
}
