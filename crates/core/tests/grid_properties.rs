//! Property tests over arbitrary grid sizes and ignition points

use fire_grid_core::{CellState, FireGrid, GridGeometry, GridLocation, SpreadWith};
use proptest::prelude::*;

fn dimensions() -> impl Strategy<Value = (usize, usize)> {
    (3usize..24, 3usize..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn construction_layout((width, height) in dimensions()) {
        let grid = FireGrid::new(width, height).unwrap();

        prop_assert_eq!(grid.cells().len(), width * height);
        let boundary = grid.cells().iter().filter(|c| c.is_boundary()).count();
        prop_assert_eq!(boundary, 2 * width + 2 * (height - 2));
        prop_assert_eq!(grid.burning_count(), 1);
        prop_assert!(grid
            .cells()
            .iter()
            .filter(|c| c.is_boundary())
            .all(|c| c.state() == CellState::Empty));
    }

    #[test]
    fn ignition_anywhere(
        (width, height) in dimensions(),
        row in 0usize..30,
        column in 0usize..30,
    ) {
        let grid = FireGrid::builder(width, height)
            .ignition(GridLocation::new(row, column))
            .build()
            .unwrap();

        let burns = grid.contains(row, column) && !grid.is_border(row, column);
        prop_assert_eq!(grid.burning_count(), usize::from(burns));
        prop_assert_eq!(grid.is_completed(), !burns);
    }

    #[test]
    fn always_terminates_and_stays_completed((width, height) in dimensions()) {
        let mut grid = FireGrid::new(width, height).unwrap();
        let limit = width * height;

        while grid.spread(SpreadWith::Default) {
            prop_assert!(grid.step_count() <= limit);
            prop_assert!(grid.cells().iter().all(|c| !c.is_boundary() || c.state() == CellState::Empty));
        }

        let snapshot = grid.cells().to_vec();
        prop_assert!(!grid.spread(SpreadWith::Default));
        prop_assert_eq!(grid.cells(), snapshot.as_slice());
        prop_assert_eq!(grid.burning_count(), 0);
    }
}
