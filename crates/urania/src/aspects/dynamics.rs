//! Aspect queries for one point against the traditional planets of a chart.

use serde::{Deserialize, Serialize};

use crate::aspects::calculator::AspectCalculator;
use crate::aspects::catalogue::MAJOR_ASPECTS;
use crate::aspects::types::{AspectMovement, AspectType};
use crate::chart::{ids, ChartSnapshot};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSummary {
    pub id: String,
    pub aspect: f64,
    pub orb: f64,
}

/// Aspects of one point grouped by its own movement within each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementGroups {
    pub applicative: Vec<AspectSummary>,
    pub separative: Vec<AspectSummary>,
    pub exact: Vec<AspectSummary>,
    pub stationary: Vec<AspectSummary>,
    pub none: Vec<AspectSummary>,
}

impl MovementGroups {
    fn push(&mut self, movement: AspectMovement, summary: AspectSummary) {
        let group = match movement {
            AspectMovement::Applicative => &mut self.applicative,
            AspectMovement::Separative => &mut self.separative,
            AspectMovement::Exact => &mut self.exact,
            AspectMovement::Stationary => &mut self.stationary,
            AspectMovement::None => &mut self.none,
        };
        group.push(summary);
    }
}

pub struct ChartDynamics<'a> {
    snapshot: &'a ChartSnapshot,
    calculator: &'a AspectCalculator,
}

impl<'a> ChartDynamics<'a> {
    pub fn new(snapshot: &'a ChartSnapshot, calculator: &'a AspectCalculator) -> Self {
        Self {
            snapshot,
            calculator,
        }
    }

    /// Aspect angles `id` forms with each of the other traditional planets.
    pub fn valid_aspects(&self, id: &str, candidates: &[f64]) -> Result<Vec<(String, f64)>> {
        let point = self.snapshot.get(id)?;
        let mut res = Vec::new();
        for other_id in ids::SEVEN_PLANETS.iter().filter(|other| **other != id) {
            let other = self.snapshot.get(other_id)?;
            if let AspectType::Angle(asp) = self.calculator.aspect_type(point, other, candidates)? {
                res.push((other_id.to_string(), asp));
            }
        }
        Ok(res)
    }

    /// Aspects where `id` is within its own orb, grouped by its movement.
    pub fn aspects_by_movement(&self, id: &str, candidates: &[f64]) -> Result<MovementGroups> {
        let point = self.snapshot.get(id)?;
        let mut groups = MovementGroups::default();

        for (other_id, _) in self.valid_aspects(id, candidates)? {
            let other = self.snapshot.get(&other_id)?;
            let aspect = self.calculator.evaluate(point, other, candidates)?;
            let Some((_, role)) = aspect.role_of(id) else {
                continue;
            };
            if !role.in_orb {
                continue;
            }
            if let AspectType::Angle(asp) = aspect.aspect {
                groups.push(
                    role.movement,
                    AspectSummary {
                        id: other_id,
                        aspect: asp,
                        orb: aspect.orb,
                    },
                );
            }
        }
        Ok(groups)
    }

    /// Tightest separation and tightest application (exact aspects count as applying).
    pub fn immediate_aspects(
        &self,
        id: &str,
        candidates: &[f64],
    ) -> Result<(Option<AspectSummary>, Option<AspectSummary>)> {
        let groups = self.aspects_by_movement(id, candidates)?;

        let mut applications: Vec<AspectSummary> =
            groups.applicative.into_iter().chain(groups.exact).collect();
        let mut separations = groups.separative;
        applications.sort_by(|a, b| a.orb.total_cmp(&b.orb));
        separations.sort_by(|a, b| a.orb.total_cmp(&b.orb));

        Ok((separations.into_iter().next(), applications.into_iter().next()))
    }

    /// A point is void of course when it forms no applicative or exact major aspect.
    pub fn is_void_of_course(&self, id: &str) -> Result<bool> {
        let groups = self.aspects_by_movement(id, MAJOR_ASPECTS)?;
        Ok(groups.applicative.is_empty() && groups.exact.is_empty())
    }
}
