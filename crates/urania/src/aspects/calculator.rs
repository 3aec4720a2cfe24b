use crate::angle;
use crate::aspects::types::{
    ActivePolicy, AspectDirection, AspectMovement, AspectPair, AspectResult, AspectRole,
    AspectSettings, AspectType, SignCondition,
};
use crate::chart::ids;
use crate::chart::{ChartPoint, ChartSnapshot, Motion, PointCategory};
use crate::error::Result;

/// Aspect found by the candidate walk, before roles are described.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    angle: f64,
    orb: f64,
    separation: f64,
}

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    pub fn new(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Evaluates two points against an ordered list of candidate angles.
    ///
    /// The first admissible angle wins. A missing aspect is reported as
    /// [`AspectType::None`], never as an error.
    pub fn evaluate(
        &self,
        p1: &ChartPoint,
        p2: &ChartPoint,
        candidates: &[f64],
    ) -> Result<AspectResult> {
        p1.validate()?;
        p2.validate()?;

        let (active, passive) = assign_roles(p1, p2);
        if p1.id == p2.id {
            return Ok(AspectResult::none(&active.id, &passive.id));
        }

        match self.find_candidate(active, passive, candidates) {
            Some(candidate) => Ok(self.describe(active, passive, candidate)),
            None => Ok(AspectResult::none(&active.id, &passive.id)),
        }
    }

    pub fn aspect_type(
        &self,
        p1: &ChartPoint,
        p2: &ChartPoint,
        candidates: &[f64],
    ) -> Result<AspectType> {
        Ok(self.evaluate(p1, p2, candidates)?.aspect)
    }

    pub fn has_aspect(&self, p1: &ChartPoint, p2: &ChartPoint, candidates: &[f64]) -> Result<bool> {
        Ok(self.evaluate(p1, p2, candidates)?.exists())
    }

    /// Whether `p1` aspects `p2` with an orb strictly inside `p1`'s own capacity.
    pub fn is_aspecting(
        &self,
        p1: &ChartPoint,
        p2: &ChartPoint,
        candidates: &[f64],
    ) -> Result<bool> {
        let result = self.evaluate(p1, p2, candidates)?;
        Ok(result.exists() && result.orb < p1.orb)
    }

    /// Every unordered pair among `ids` that forms an aspect, in list order.
    pub fn chart_aspects(
        &self,
        snapshot: &ChartSnapshot,
        ids: &[&str],
        candidates: &[f64],
    ) -> Result<Vec<AspectPair>> {
        let points = ids
            .iter()
            .map(|id| snapshot.get(id))
            .collect::<Result<Vec<_>>>()?;

        let mut pairs = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let aspect = self.evaluate(points[i], points[j], candidates)?;
                if aspect.exists() {
                    pairs.push(AspectPair {
                        from: points[i].id.clone(),
                        to: points[j].id.clone(),
                        aspect,
                    });
                }
            }
        }
        Ok(pairs)
    }

    fn find_candidate(
        &self,
        active: &ChartPoint,
        passive: &ChartPoint,
        candidates: &[f64],
    ) -> Option<Candidate> {
        let barred = is_barred(active);
        if barred {
            match self.settings.active_policy {
                ActivePolicy::Strict => return None,
                ActivePolicy::ConjunctionsOnly if active.id == ids::SYZYGY => return None,
                ActivePolicy::ConjunctionsOnly => {}
            }
        }

        let separation = angle::closest_distance(active.lon, passive.lon);
        let abs_sep = separation.abs();

        for &asp in candidates {
            let orb = (abs_sep - asp).abs();

            let admissible = if self.settings.catalogue.is_major(asp) {
                orb <= active.orb || orb <= passive.orb
            } else {
                orb <= self.settings.minor_orb
            };
            if !admissible {
                log::trace!(
                    "{} -> {}: {} rejected, orb {:.4}",
                    active.id,
                    passive.id,
                    asp,
                    orb
                );
                continue;
            }
            if barred && asp != 0.0 {
                continue;
            }

            return Some(Candidate {
                angle: asp,
                orb,
                separation,
            });
        }
        None
    }

    fn describe(
        &self,
        active: &ChartPoint,
        passive: &ChartPoint,
        candidate: Candidate,
    ) -> AspectResult {
        let Candidate {
            angle: asp,
            orb,
            separation: sep,
        } = candidate;

        let direction = if sep <= 0.0 {
            AspectDirection::Dexter
        } else {
            AspectDirection::Sinister
        };

        // Negative when the active point is behind the exact aspect
        let orb_dir = if sep >= 0.0 { sep - asp } else { sep + asp };
        let offset = active.sign_lon() + orb_dir;
        let condition = if (0.0..30.0).contains(&offset) {
            SignCondition::Associate
        } else {
            SignCondition::Dissociate
        };

        let (active_movement, passive_movement) = self.movements(active, passive, orb_dir);

        AspectResult {
            aspect: AspectType::Angle(asp),
            orb,
            separation: sep,
            direction: Some(direction),
            condition: Some(condition),
            active: AspectRole {
                id: active.id.clone(),
                in_orb: orb <= active.orb,
                movement: active_movement,
            },
            passive: AspectRole {
                id: passive.id.clone(),
                in_orb: orb <= passive.orb,
                movement: passive_movement,
            },
        }
    }

    fn movements(
        &self,
        active: &ChartPoint,
        passive: &ChartPoint,
        orb_dir: f64,
    ) -> (AspectMovement, AspectMovement) {
        if orb_dir.abs() < self.settings.exact_orb {
            return (AspectMovement::Exact, AspectMovement::Exact);
        }

        let motion = active.motion_with(self.settings.stationary_speed);
        let active_movement = match motion {
            Motion::Direct if orb_dir > 0.0 => AspectMovement::Applicative,
            Motion::Retrograde if orb_dir < 0.0 => AspectMovement::Applicative,
            Motion::Stationary => AspectMovement::Stationary,
            _ => AspectMovement::Separative,
        };

        // The passive point moves relative to the active only when heading the other way
        let opposite = active.lon_speed() * passive.lon_speed() < 0.0;
        let inherits = opposite || (self.settings.static_passive_inherits && !passive.is_moving());
        let passive_movement = if inherits {
            active_movement
        } else {
            AspectMovement::None
        };

        (active_movement, passive_movement)
    }
}

/// Effective speed for role assignment; angles and cusps rank below anything with a speed.
fn effective_speed(point: &ChartPoint) -> f64 {
    if point.is_moving() {
        point.lon_speed().abs()
    } else {
        -1.0
    }
}

/// The strictly faster point is active; on a tie the second argument is.
fn assign_roles<'a>(p1: &'a ChartPoint, p2: &'a ChartPoint) -> (&'a ChartPoint, &'a ChartPoint) {
    if effective_speed(p1) > effective_speed(p2) {
        (p1, p2)
    } else {
        (p2, p1)
    }
}

fn is_barred(point: &ChartPoint) -> bool {
    matches!(
        point.category,
        PointCategory::Node | PointCategory::CalculatedPoint
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(id: &str, lon: f64, speed: f64) -> ChartPoint {
        ChartPoint::new(id, PointCategory::Planet, lon, 0.0, Some(speed), 8.0).unwrap()
    }

    #[test]
    fn test_roles_prefer_faster_point() {
        let slow = planet("a", 0.0, 0.5);
        let fast = planet("b", 0.0, -2.0);
        let (active, _) = assign_roles(&slow, &fast);
        assert_eq!(active.id, "b");
        let (active, _) = assign_roles(&fast, &slow);
        assert_eq!(active.id, "b");
    }

    #[test]
    fn test_roles_tie_goes_to_second() {
        let a = planet("a", 0.0, 1.0);
        let b = planet("b", 0.0, -1.0);
        let (active, passive) = assign_roles(&a, &b);
        assert_eq!(active.id, "b");
        assert_eq!(passive.id, "a");
    }

    #[test]
    fn test_fixed_points_rank_below_stationary_bodies() {
        let asc = ChartPoint::angle("asc", 10.0).unwrap();
        let still = planet("a", 0.0, 0.0);
        assert!(effective_speed(&still) > effective_speed(&asc));
    }

    #[test]
    fn test_nodes_and_lots_use_their_speed() {
        let node =
            ChartPoint::new(ids::NORTH_NODE, PointCategory::Node, 0.0, 0.0, Some(-0.05), 12.0)
                .unwrap();
        let syzygy = ChartPoint::new(
            ids::SYZYGY,
            PointCategory::CalculatedPoint,
            0.0,
            0.0,
            Some(11.8),
            0.0,
        )
        .unwrap();
        let saturn = planet("saturn", 0.0, 0.0015);
        assert_eq!(assign_roles(&saturn, &node).0.id, ids::NORTH_NODE);
        assert_eq!(assign_roles(&syzygy, &saturn).0.id, ids::SYZYGY);
    }
}
