//! Compass-point neighbour sampling
//!
//! Samples any subset of the eight compass directions around a cell. With all
//! eight configured this is the Moore neighbourhood; with only north, east,
//! south and west it is the von Neumann neighbourhood.

use super::{CellNeighbour, NeighbourState, NeighbourStrategy};
use crate::core_types::{Cell, Direction};
use crate::grid::GridGeometry;
use rustc_hash::FxHashSet;

/// Samples a configured set of compass directions.
///
/// A direction is included only if it is configured and the neighbour in
/// that direction lies inside the grid; there is no wrap-around. Entries are
/// produced in [`Direction::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardinalNeighbourStrategy {
    directions: FxHashSet<Direction>,
}

impl CardinalNeighbourStrategy {
    /// Sample all eight directions
    #[must_use]
    pub fn new() -> Self {
        Self::with_directions(&Direction::ALL)
    }

    /// Sample only north, east, south and west
    #[must_use]
    pub fn cardinal_only() -> Self {
        Self::with_directions(&Direction::CARDINALS)
    }

    /// Sample exactly `directions` (duplicates are ignored)
    #[must_use]
    pub fn with_directions(directions: &[Direction]) -> Self {
        Self {
            directions: directions.iter().copied().collect(),
        }
    }

    /// Whether `direction` is sampled
    #[must_use]
    pub fn samples(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }

    /// Configured directions in [`Direction::ALL`] order
    #[must_use]
    pub fn directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.directions.contains(d))
            .collect()
    }
}

impl Default for CardinalNeighbourStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighbourStrategy for CardinalNeighbourStrategy {
    fn neighbours(
        &self,
        grid: &dyn GridGeometry,
        previous: &[Cell],
        cell: &Cell,
    ) -> NeighbourState {
        let location = cell.location();
        let mut sampled = Vec::with_capacity(self.directions.len());

        for direction in Direction::ALL {
            if !self.directions.contains(&direction) {
                continue;
            }

            let (d_row, d_column) = direction.offset();
            let Some(target) = location.offset(d_row, d_column) else {
                continue;
            };
            if !grid.contains(target.row(), target.column()) {
                continue;
            }

            // A short snapshot simply yields fewer neighbours
            let index = grid.index_of(target.row(), target.column());
            if let Some(neighbour) = previous.get(index) {
                sampled.push(CellNeighbour::new(direction, neighbour.state()));
            }
        }

        NeighbourState::new(sampled)
    }
}
