//! Reference spread rule

use super::SpreadStrategy;
use crate::core_types::{Cell, CellState, Direction};
use crate::neighbour::NeighbourState;

/// Fire jumps between orthogonally adjacent trees and burns for one step.
///
/// - Boundary cells are always Empty.
/// - A Tree ignites if its north, east, south or west neighbour is Burning.
///   Diagonal neighbours never ignite it, even when sampled.
/// - A Burning cell burns out to Empty.
/// - Empty stays Empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSpreadStrategy;

impl SpreadStrategy for StandardSpreadStrategy {
    fn spread(&self, cell: &Cell, neighbours: &NeighbourState) -> CellState {
        if cell.is_boundary() {
            return CellState::Empty;
        }

        match cell.state() {
            CellState::Tree => {
                let ignites = neighbours
                    .filter_by_directions(&Direction::CARDINALS)
                    .any_in_state(CellState::Burning);
                if ignites {
                    CellState::Burning
                } else {
                    CellState::Tree
                }
            }
            CellState::Burning | CellState::Empty => CellState::Empty,
        }
    }

    fn name(&self) -> &'static str {
        "Standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::GridLocation;
    use crate::neighbour::CellNeighbour;
    use proptest::prelude::*;

    fn cell(state: CellState, is_boundary: bool) -> Cell {
        Cell::new(8, GridLocation::new(1, 1), state, is_boundary)
    }

    fn neighbours(entries: &[(Direction, CellState)]) -> NeighbourState {
        entries
            .iter()
            .map(|&(d, s)| CellNeighbour::new(d, s))
            .collect()
    }

    #[test]
    fn test_tree_ignites_from_each_cardinal() {
        for direction in Direction::CARDINALS {
            let state = neighbours(&[(direction, CellState::Burning)]);
            assert_eq!(
                StandardSpreadStrategy.spread(&cell(CellState::Tree, false), &state),
                CellState::Burning,
                "no ignition from {direction}"
            );
        }
    }

    #[test]
    fn test_tree_ignores_diagonals() {
        let all_diagonals_burning: Vec<_> = Direction::DIAGONALS
            .iter()
            .map(|&d| (d, CellState::Burning))
            .collect();
        let state = neighbours(&all_diagonals_burning);
        assert_eq!(
            StandardSpreadStrategy.spread(&cell(CellState::Tree, false), &state),
            CellState::Tree
        );
    }

    #[test]
    fn test_tree_without_fire_stays() {
        let state = neighbours(&[
            (Direction::North, CellState::Tree),
            (Direction::East, CellState::Empty),
        ]);
        assert_eq!(
            StandardSpreadStrategy.spread(&cell(CellState::Tree, false), &state),
            CellState::Tree
        );
        assert_eq!(
            StandardSpreadStrategy.spread(&cell(CellState::Tree, false), &NeighbourState::empty()),
            CellState::Tree
        );
    }

    #[test]
    fn test_burning_burns_out() {
        let state = neighbours(&[(Direction::North, CellState::Burning)]);
        assert_eq!(
            StandardSpreadStrategy.spread(&cell(CellState::Burning, false), &state),
            CellState::Empty
        );
    }

    #[test]
    fn test_empty_stays_empty() {
        let state = neighbours(&[(Direction::South, CellState::Burning)]);
        assert_eq!(
            StandardSpreadStrategy.spread(&cell(CellState::Empty, false), &state),
            CellState::Empty
        );
    }

    fn arb_state() -> impl Strategy<Value = CellState> {
        prop_oneof![
            Just(CellState::Empty),
            Just(CellState::Tree),
            Just(CellState::Burning),
        ]
    }

    fn arb_neighbours() -> impl Strategy<Value = NeighbourState> {
        proptest::collection::vec(proptest::option::of(arb_state()), 8).prop_map(|slots| {
            Direction::ALL
                .iter()
                .zip(slots)
                .filter_map(|(&d, s)| s.map(|s| CellNeighbour::new(d, s)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn boundary_always_empty(state in arb_state(), around in arb_neighbours()) {
            prop_assert_eq!(
                StandardSpreadStrategy.spread(&cell(state, true), &around),
                CellState::Empty
            );
        }

        #[test]
        fn burning_always_empty(around in arb_neighbours()) {
            prop_assert_eq!(
                StandardSpreadStrategy.spread(&cell(CellState::Burning, false), &around),
                CellState::Empty
            );
        }

        #[test]
        fn tree_ignites_iff_cardinal_fire(around in arb_neighbours()) {
            let cardinal_fire = around
                .iter()
                .any(|n| n.direction().is_cardinal() && n.state() == CellState::Burning);
            let expected = if cardinal_fire { CellState::Burning } else { CellState::Tree };
            prop_assert_eq!(
                StandardSpreadStrategy.spread(&cell(CellState::Tree, false), &around),
                expected
            );
        }
    }
}
