//! Directional spread rule

use super::SpreadStrategy;
use crate::core_types::{Cell, CellState, Direction};
use crate::neighbour::NeighbourState;
use serde::{Deserialize, Serialize};

/// Fire only travels downwind.
///
/// A Tree ignites only when the neighbour on the `source` side (the side
/// the wind blows from, relative to the tree) was Burning. Everything that
/// is not a Tree, and every boundary cell, becomes Empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindSpreadStrategy {
    source: Direction,
}

impl WindSpreadStrategy {
    /// # Arguments
    ///
    /// * `source` - Neighbour direction a tree catches fire from
    #[must_use]
    pub const fn new(source: Direction) -> Self {
        Self { source }
    }

    /// A wind from the north: trees catch fire from their southern
    /// neighbour, so the front advances northwards
    #[must_use]
    pub const fn northerly() -> Self {
        Self::new(Direction::South)
    }

    #[must_use]
    pub const fn source(&self) -> Direction {
        self.source
    }
}

impl SpreadStrategy for WindSpreadStrategy {
    fn spread(&self, cell: &Cell, neighbours: &NeighbourState) -> CellState {
        if cell.is_boundary() || cell.state() != CellState::Tree {
            return CellState::Empty;
        }

        match neighbours.get(self.source) {
            Some(CellState::Burning) => CellState::Burning,
            _ => CellState::Tree,
        }
    }

    fn name(&self) -> &'static str {
        if self.source == Direction::South {
            "Northerly Wind"
        } else {
            "Wind"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::GridLocation;
    use crate::neighbour::CellNeighbour;

    fn tree() -> Cell {
        Cell::new(8, GridLocation::new(1, 1), CellState::Tree, false)
    }

    #[test]
    fn test_northerly_ignites_from_south() {
        let wind = WindSpreadStrategy::northerly();
        let state = NeighbourState::new(vec![CellNeighbour::new(
            Direction::South,
            CellState::Burning,
        )]);
        assert_eq!(wind.spread(&tree(), &state), CellState::Burning);
    }

    #[test]
    fn test_northerly_ignores_other_directions() {
        let wind = WindSpreadStrategy::northerly();
        let state: NeighbourState = Direction::ALL
            .iter()
            .filter(|&&d| d != Direction::South)
            .map(|&d| CellNeighbour::new(d, CellState::Burning))
            .chain(std::iter::once(CellNeighbour::new(
                Direction::South,
                CellState::Tree,
            )))
            .collect();
        assert_eq!(wind.spread(&tree(), &state), CellState::Tree);
    }

    #[test]
    fn test_missing_source_keeps_tree() {
        let wind = WindSpreadStrategy::new(Direction::West);
        let state = NeighbourState::new(vec![CellNeighbour::new(
            Direction::East,
            CellState::Burning,
        )]);
        assert_eq!(wind.spread(&tree(), &state), CellState::Tree);
        assert_eq!(wind.spread(&tree(), &NeighbourState::empty()), CellState::Tree);
    }

    #[test]
    fn test_non_trees_and_boundary_become_empty() {
        let wind = WindSpreadStrategy::northerly();
        let fire_below = NeighbourState::new(vec![CellNeighbour::new(
            Direction::South,
            CellState::Burning,
        )]);

        for state in [CellState::Burning, CellState::Empty] {
            assert_eq!(wind.spread(&tree().with_state(state), &fire_below), CellState::Empty);
        }
        let edge = Cell::new(0, GridLocation::new(0, 0), CellState::Tree, true);
        assert_eq!(wind.spread(&edge, &fire_below), CellState::Empty);
    }

    #[test]
    fn test_names() {
        assert_eq!(WindSpreadStrategy::northerly().name(), "Northerly Wind");
        assert_eq!(WindSpreadStrategy::new(Direction::East).name(), "Wind");
        assert_eq!(WindSpreadStrategy::northerly().source(), Direction::South);
    }
}
