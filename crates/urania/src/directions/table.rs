use serde::{Deserialize, Serialize};
use std::ops::Bound;

use crate::directions::types::{Direction, DirectionType, PointKind};

/// Directions of one chart sorted by ascending arc.
///
/// Equal arcs keep generation order (promissor, then significator, mundane
/// before zodiacal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryDirectionTable {
    directions: Vec<Direction>,
}

/// Predicate over table entries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionFilter {
    pub direction_type: Option<DirectionType>,
    pub promissor_kind: Option<PointKind>,
    pub promissor: Option<String>,
    pub significator: Option<String>,
    /// Promissor aspect offsets to keep
    pub aspects: Option<Vec<f64>>,
    pub arc_min: Option<Bound<f64>>,
    pub arc_max: Option<Bound<f64>>,
}

impl DirectionFilter {
    pub fn matches(&self, direction: &Direction) -> bool {
        if let Some(direction_type) = self.direction_type {
            if direction.direction_type != direction_type {
                return false;
            }
        }
        if let Some(kind) = self.promissor_kind {
            if direction.promissor.kind() != kind {
                return false;
            }
        }
        if let Some(body) = &self.promissor {
            if direction.promissor.body() != body {
                return false;
            }
        }
        if let Some(body) = &self.significator {
            if direction.significator.body() != body {
                return false;
            }
        }
        if let Some(aspects) = &self.aspects {
            if !aspects.contains(&direction.promissor.aspect()) {
                return false;
            }
        }
        let above_min = match self.arc_min {
            None | Some(Bound::Unbounded) => true,
            Some(Bound::Included(min)) => direction.arc >= min,
            Some(Bound::Excluded(min)) => direction.arc > min,
        };
        let below_max = match self.arc_max {
            None | Some(Bound::Unbounded) => true,
            Some(Bound::Included(max)) => direction.arc <= max,
            Some(Bound::Excluded(max)) => direction.arc < max,
        };
        above_min && below_max
    }
}

impl PrimaryDirectionTable {
    /// Sorts `directions` by arc. The sort is stable.
    pub fn new(mut directions: Vec<Direction>) -> Self {
        directions.sort_by(|a, b| a.arc.total_cmp(&b.arc));
        Self { directions }
    }

    pub fn all(&self) -> &[Direction] {
        &self.directions
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Direction> {
        self.directions.iter()
    }

    pub fn filter(&self, filter: &DirectionFilter) -> Vec<&Direction> {
        self.directions.iter().filter(|d| filter.matches(d)).collect()
    }
}

impl<'a> IntoIterator for &'a PrimaryDirectionTable {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.directions.iter()
    }
}
